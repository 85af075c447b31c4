use chrono::NaiveDate;

use crate::domain::estimate::ThreePointEstimate;
use crate::domain::risk::Risk;
use crate::services::beta_pert_sampler::{SamplerError, ThreePointSampler};

// A mock ThreePointSampler that always returns the most likely value
pub struct MockSampler;
impl ThreePointSampler for MockSampler {
    fn sample(&mut self, estimate: &ThreePointEstimate) -> Result<f64, SamplerError> {
        Ok(estimate.most_likely)
    }
}

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_cost_risk(
    id: &str,
    probability: f64,
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
) -> Risk {
    let mut risk = Risk::new(id);
    risk.probability = probability;
    risk.cost_estimate = ThreePointEstimate::new(optimistic, most_likely, pessimistic);
    risk
}

pub fn build_duration_risk(
    id: &str,
    probability: f64,
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
) -> Risk {
    let mut risk = Risk::new(id);
    risk.probability = probability;
    risk.duration_estimate = ThreePointEstimate::new(optimistic, most_likely, pessimistic);
    risk
}
