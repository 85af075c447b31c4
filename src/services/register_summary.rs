use serde::Serialize;

use crate::domain::register::RiskRegister;
use crate::domain::risk::Risk;
use crate::services::risk_quantifier::{Cost, Duration, Quantity, round_to};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankedRisk {
    pub id: String,
    pub title: Option<String>,
    pub emv: f64,
    pub recommended_budget: f64,
    pub delay_duration: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegisterSummary {
    pub name: String,
    pub total_risks: usize,
    pub active_risks: usize,
    pub total_expected_cost: f64,
    pub total_emv: f64,
    pub total_recommended_budget: f64,
    pub max_delay_duration: i64,
    pub total_probability_adjusted_duration: f64,
    pub top_risks: Vec<RankedRisk>,
}

/// Totals over the active risks of a register, plus the `top` risks ranked by
/// EMV (ties broken by id). Risks are quantified from their current inputs, so
/// stale stored outputs never leak into the totals.
pub fn summarize_register(register: &RiskRegister, top: usize) -> RegisterSummary {
    let active: Vec<Risk> = register
        .active_risks()
        .cloned()
        .map(|mut risk| {
            risk.recompute();
            risk
        })
        .collect();

    let mut total_expected_cost = 0.0;
    let mut total_emv = 0.0;
    let mut total_recommended_budget = 0.0;
    let mut total_probability_adjusted_duration = 0.0;
    let mut max_delay_duration = 0;
    let mut ranked = Vec::with_capacity(active.len());

    for risk in &active {
        let (Some(cost), Some(duration)) = (risk.cost_outcome, risk.duration_outcome) else {
            continue;
        };
        total_expected_cost += cost.expected_cost;
        total_emv += cost.emv;
        total_recommended_budget += cost.recommended_budget;
        total_probability_adjusted_duration += duration.probability_adjusted_duration;
        max_delay_duration = max_delay_duration.max(duration.delay_duration);
        ranked.push(RankedRisk {
            id: risk.id.clone(),
            title: risk.title.clone(),
            emv: cost.emv,
            recommended_budget: cost.recommended_budget,
            delay_duration: duration.delay_duration,
        });
    }

    ranked.sort_by(|a, b| {
        b.emv
            .partial_cmp(&a.emv)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.truncate(top);

    RegisterSummary {
        name: register.name.clone(),
        total_risks: register.risks.len(),
        active_risks: active.len(),
        total_expected_cost: round_to(total_expected_cost, Cost::DECIMALS),
        total_emv: round_to(total_emv, Cost::DECIMALS),
        total_recommended_budget: round_to(total_recommended_budget, Cost::DECIMALS),
        max_delay_duration,
        total_probability_adjusted_duration: round_to(
            total_probability_adjusted_duration,
            Duration::DECIMALS,
        ),
        top_risks: ranked,
    }
}
