use rand::Rng;
use rand_distr::{Beta, Distribution};
use thiserror::Error;

use crate::domain::estimate::ThreePointEstimate;

#[derive(Error, Debug, PartialEq)]
pub enum SamplerError {
    #[error("pessimistic value {pessimistic} is below optimistic value {optimistic}")]
    InvertedRange { optimistic: f64, pessimistic: f64 },
    #[error("most likely value {most_likely} lies outside [{optimistic}, {pessimistic}]")]
    ModeOutOfRange {
        optimistic: f64,
        most_likely: f64,
        pessimistic: f64,
    },
    #[error("invalid beta parameters: {0}")]
    Distribution(String),
}

pub trait ThreePointSampler {
    fn sample(&mut self, estimate: &ThreePointEstimate) -> Result<f64, SamplerError>;
}

pub struct BetaPertSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> BetaPertSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ThreePointSampler for BetaPertSampler<R> {
    fn sample(&mut self, estimate: &ThreePointEstimate) -> Result<f64, SamplerError> {
        let ThreePointEstimate {
            optimistic,
            most_likely,
            pessimistic,
        } = *estimate;

        if pessimistic < optimistic {
            return Err(SamplerError::InvertedRange {
                optimistic,
                pessimistic,
            });
        }
        if (pessimistic - optimistic).abs() < f64::EPSILON {
            return Ok(optimistic);
        }
        if most_likely < optimistic || most_likely > pessimistic {
            return Err(SamplerError::ModeOutOfRange {
                optimistic,
                most_likely,
                pessimistic,
            });
        }

        let range = pessimistic - optimistic;
        let alpha = 1.0 + 4.0 * ((most_likely - optimistic) / range);
        let beta = 1.0 + 4.0 * ((pessimistic - most_likely) / range);
        let beta_dist =
            Beta::new(alpha, beta).map_err(|e| SamplerError::Distribution(e.to_string()))?;
        let sample = beta_dist.sample(&mut self.rng);
        Ok(optimistic + sample * range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_within_the_estimate_range() {
        let mut sampler = BetaPertSampler::new(StdRng::seed_from_u64(7));
        let estimate = ThreePointEstimate::new(1000.0, 2000.0, 5000.0);

        for _ in 0..500 {
            let value = sampler.sample(&estimate).unwrap();
            assert!((1000.0..=5000.0).contains(&value), "sample {value} out of range");
        }
    }

    #[test]
    fn a_degenerate_range_returns_the_single_value() {
        let mut sampler = BetaPertSampler::new(StdRng::seed_from_u64(7));
        let estimate = ThreePointEstimate::new(250.0, 250.0, 250.0);
        assert_eq!(sampler.sample(&estimate), Ok(250.0));
    }

    #[test]
    fn rejects_unordered_estimates() {
        let mut sampler = BetaPertSampler::new(StdRng::seed_from_u64(7));

        let inverted = ThreePointEstimate::new(5000.0, 2000.0, 1000.0);
        assert!(matches!(
            sampler.sample(&inverted),
            Err(SamplerError::InvertedRange { .. })
        ));

        let mode_outside = ThreePointEstimate::new(1000.0, 6000.0, 5000.0);
        assert!(matches!(
            sampler.sample(&mode_outside),
            Err(SamplerError::ModeOutOfRange { .. })
        ));
    }
}
