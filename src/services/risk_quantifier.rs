//! PERT-based risk quantification.
//!
//! Every function here is pure: no I/O, no shared state, no failure modes.
//! Inputs are expected to be coerced to finite numbers beforehand (see
//! [`crate::services::input_coercion`]); nothing is validated or clamped.
//!
//! Rounding precision differs by quantity: cost values are rounded to two
//! decimal places, duration values to one.

use std::marker::PhantomData;

use serde::Serialize;

use crate::domain::estimate::{AllocationModel, DayType, ThreePointEstimate};

/// Contingency applied to the expected cost under the shared model.
pub const SHARED_CONTINGENCY_FACTOR: f64 = 1.10;
const BUSINESS_DAYS_PER_WEEK: f64 = 5.0;
const CALENDAR_DAYS_PER_WEEK: f64 = 7.0;

/// A quantity estimated with three points. Only differs in the number of
/// decimal places its derived values are rounded to.
pub trait Quantity {
    const DECIMALS: i32;
}

#[derive(Debug, Clone, Copy)]
pub enum Cost {}

#[derive(Debug, Clone, Copy)]
pub enum Duration {}

impl Quantity for Cost {
    const DECIMALS: i32 = 2;
}

impl Quantity for Duration {
    const DECIMALS: i32 = 1;
}

/// Rounds half up (towards positive infinity) at the given number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// PERT weighted mean `(o + 4m + p) / 6`, rounded for the quantity `Q`.
pub fn compute_expected_value<Q: Quantity>(
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
) -> f64 {
    let expected = (optimistic + 4.0 * most_likely + pessimistic) / 6.0;
    round_to(expected, Q::DECIMALS)
}

/// Expected value of a [`ThreePointEstimate`] for the quantity `Q`.
pub fn pert_estimate<Q: Quantity>(estimate: &ThreePointEstimate) -> f64 {
    compute_expected_value::<Q>(
        estimate.optimistic,
        estimate.most_likely,
        estimate.pessimistic,
    )
}

/// Expected monetary value. The probability is not clamped.
pub fn compute_emv(expected_cost: f64, probability: f64) -> f64 {
    round_to(expected_cost * probability, Cost::DECIMALS)
}

/// Budget to reserve for a cost risk under the given allocation model.
///
/// Only the shared branch rounds; the other branches pass their source value
/// through untouched.
pub fn compute_recommended_budget(
    expected_cost: f64,
    pessimistic: f64,
    allocation_model: AllocationModel,
    contract_cap: Option<f64>,
) -> f64 {
    match allocation_model {
        AllocationModel::Internal => pessimistic,
        AllocationModel::FixedCap => match contract_cap {
            Some(cap) if cap > 0.0 => cap,
            _ => pessimistic,
        },
        AllocationModel::Shared => {
            let with_contingency = expected_cost * SHARED_CONTINGENCY_FACTOR;
            round_to(with_contingency.min(pessimistic), Cost::DECIMALS)
        }
        AllocationModel::None => pessimistic,
    }
}

/// Duration expressed in the unit that was *not* selected. The selected unit
/// is the expected duration itself and is left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayTypeConversion {
    pub calendar_days: Option<f64>,
    pub business_days: Option<f64>,
}

/// Converts with fixed 5/7 and 7/5 ratios. No holidays, no weekday awareness.
pub fn compute_day_type_conversion(expected_duration: f64, day_type: DayType) -> DayTypeConversion {
    match day_type {
        DayType::Calendar => DayTypeConversion {
            calendar_days: None,
            business_days: Some(round_to(
                expected_duration * BUSINESS_DAYS_PER_WEEK / CALENDAR_DAYS_PER_WEEK,
                Duration::DECIMALS,
            )),
        },
        DayType::Business => DayTypeConversion {
            calendar_days: Some(round_to(
                expected_duration * CALENDAR_DAYS_PER_WEEK / BUSINESS_DAYS_PER_WEEK,
                Duration::DECIMALS,
            )),
            business_days: None,
        },
    }
}

/// Informational risk-weighted duration.
pub fn compute_probability_adjusted_duration(expected_duration: f64, probability: f64) -> f64 {
    round_to(expected_duration * probability, Duration::DECIMALS)
}

/// Whole-day delay used for schedule impact. Derived from the rounded
/// expected duration, never from the probability-adjusted one.
pub fn derive_delay_duration(expected_duration: f64) -> i64 {
    round_half_up(expected_duration) as i64
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostInputs {
    pub estimate: ThreePointEstimate,
    pub probability: f64,
    pub allocation_model: AllocationModel,
    pub contract_cap: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostQuantification {
    pub expected_cost: f64,
    pub emv: f64,
    pub recommended_budget: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DurationInputs {
    pub estimate: ThreePointEstimate,
    pub probability: f64,
    pub day_type: DayType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DurationQuantification {
    pub expected_duration: f64,
    pub calculated_business_days: Option<f64>,
    pub calculated_calendar_days: Option<f64>,
    pub probability_adjusted_duration: f64,
    pub delay_duration: i64,
}

/// Stateless calculator binding the operations above to one quantity.
#[derive(Debug, Clone, Copy)]
pub struct RiskQuantifier<Q: Quantity> {
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> Default for RiskQuantifier<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Quantity> RiskQuantifier<Q> {
    pub fn new() -> Self {
        Self {
            quantity: PhantomData,
        }
    }

    pub fn expected_value(&self, estimate: &ThreePointEstimate) -> f64 {
        pert_estimate::<Q>(estimate)
    }
}

impl RiskQuantifier<Cost> {
    pub fn quantify(&self, inputs: &CostInputs) -> CostQuantification {
        quantify_cost(inputs)
    }
}

impl RiskQuantifier<Duration> {
    pub fn quantify(&self, inputs: &DurationInputs) -> DurationQuantification {
        quantify_duration(inputs)
    }
}

/// Recomputes every cost-side output from the current inputs.
pub fn quantify_cost(inputs: &CostInputs) -> CostQuantification {
    let expected_cost = pert_estimate::<Cost>(&inputs.estimate);
    CostQuantification {
        expected_cost,
        emv: compute_emv(expected_cost, inputs.probability),
        recommended_budget: compute_recommended_budget(
            expected_cost,
            inputs.estimate.pessimistic,
            inputs.allocation_model,
            inputs.contract_cap,
        ),
    }
}

/// Recomputes every duration-side output from the current inputs.
pub fn quantify_duration(inputs: &DurationInputs) -> DurationQuantification {
    let expected_duration = pert_estimate::<Duration>(&inputs.estimate);
    let conversion = compute_day_type_conversion(expected_duration, inputs.day_type);
    DurationQuantification {
        expected_duration,
        calculated_business_days: conversion.business_days,
        calculated_calendar_days: conversion.calendar_days,
        probability_adjusted_duration: compute_probability_adjusted_duration(
            expected_duration,
            inputs.probability,
        ),
        delay_duration: derive_delay_duration(expected_duration),
    }
}
