use serde::{Deserialize, Serialize};

use crate::domain::estimate::{AllocationModel, DayType, ThreePointEstimate};
use crate::services::risk_quantifier::{
    Cost, CostInputs, CostQuantification, Duration, DurationInputs, DurationQuantification,
    RiskQuantifier,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    #[default]
    Open,
    Mitigated,
    Closed,
    Realised,
}

impl RiskStatus {
    /// Open and realised risks still carry exposure.
    pub fn is_active(&self) -> bool {
        matches!(self, RiskStatus::Open | RiskStatus::Realised)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Some(RiskStatus::Open),
            "mitigated" => Some(RiskStatus::Mitigated),
            "closed" => Some(RiskStatus::Closed),
            "realised" | "realized" => Some(RiskStatus::Realised),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Open => "open",
            RiskStatus::Mitigated => "mitigated",
            RiskStatus::Closed => "closed",
            RiskStatus::Realised => "realised",
        }
    }
}

/// A risk register entry: the coerced inputs plus the last computed outputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Risk {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub owner: Option<String>,
    pub status: RiskStatus,
    pub linked_task_ids: Vec<String>,
    pub probability: f64,
    pub cost_estimate: ThreePointEstimate,
    pub allocation_model: AllocationModel,
    pub contract_cap: Option<f64>,
    pub duration_estimate: ThreePointEstimate,
    pub day_type: DayType,
    pub cost_outcome: Option<CostQuantification>,
    pub duration_outcome: Option<DurationQuantification>,
}

impl Risk {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn cost_inputs(&self) -> CostInputs {
        CostInputs {
            estimate: self.cost_estimate,
            probability: self.probability,
            allocation_model: self.allocation_model,
            contract_cap: self.contract_cap,
        }
    }

    pub fn duration_inputs(&self) -> DurationInputs {
        DurationInputs {
            estimate: self.duration_estimate,
            probability: self.probability,
            day_type: self.day_type,
        }
    }

    /// Recomputes both sides and writes the outputs back onto the risk.
    pub fn recompute(&mut self) {
        let cost = RiskQuantifier::<Cost>::default().quantify(&self.cost_inputs());
        let duration = RiskQuantifier::<Duration>::default().quantify(&self.duration_inputs());
        log::debug!(
            "recomputed risk {}: expected_cost={} emv={} expected_duration={}",
            self.id,
            cost.expected_cost,
            cost.emv,
            duration.expected_duration
        );
        self.cost_outcome = Some(cost);
        self.duration_outcome = Some(duration);
    }

    pub fn emv(&self) -> f64 {
        self.cost_outcome.map(|cost| cost.emv).unwrap_or(0.0)
    }
}
