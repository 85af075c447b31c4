use crate::domain::critical_date::CriticalDate;
use crate::domain::risk::Risk;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskRegister {
    pub name: String,
    pub risks: Vec<Risk>,
    pub critical_dates: Vec<CriticalDate>,
}

impl RiskRegister {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Recomputes every risk and returns how many were updated.
    pub fn recompute_all(&mut self) -> usize {
        for risk in &mut self.risks {
            risk.recompute();
        }
        self.risks.len()
    }

    pub fn active_risks(&self) -> impl Iterator<Item = &Risk> {
        self.risks.iter().filter(|risk| risk.status.is_active())
    }

    pub fn find_risk(&self, id: &str) -> Option<&Risk> {
        self.risks.iter().find(|risk| risk.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::RiskStatus;
    use crate::test_support::build_cost_risk;

    #[test]
    fn recompute_all_quantifies_every_risk() {
        let mut register = RiskRegister::new("Hospital Wing");
        register.risks.push(build_cost_risk("R-1", 0.5, 100.0, 200.0, 300.0));
        register.risks.push(build_cost_risk("R-2", 0.1, 10.0, 10.0, 10.0));

        assert_eq!(register.recompute_all(), 2);
        assert!(register.risks.iter().all(|risk| risk.cost_outcome.is_some()));
        assert_eq!(register.find_risk("R-1").unwrap().emv(), 100.0);
        assert_eq!(register.find_risk("R-2").unwrap().emv(), 1.0);
    }

    #[test]
    fn active_risks_skip_closed_and_mitigated_entries() {
        let mut register = RiskRegister::new("Hospital Wing");
        let mut closed = build_cost_risk("R-1", 0.5, 1.0, 1.0, 1.0);
        closed.status = RiskStatus::Closed;
        let mut mitigated = build_cost_risk("R-2", 0.5, 1.0, 1.0, 1.0);
        mitigated.status = RiskStatus::Mitigated;
        register.risks.push(closed);
        register.risks.push(mitigated);
        register.risks.push(build_cost_risk("R-3", 0.5, 1.0, 1.0, 1.0));

        let ids: Vec<&str> = register.active_risks().map(|risk| risk.id.as_str()).collect();
        assert_eq!(ids, vec!["R-3"]);
    }
}
