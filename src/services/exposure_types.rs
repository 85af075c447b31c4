use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExposurePercentiles {
    pub p0: f64,
    pub p50: f64,
    pub p85: f64,
    pub p100: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExposureReport {
    pub data_source: String,
    pub iterations: usize,
    pub simulated_risks: usize,
    /// Deterministic sum of the EMV of every simulated risk.
    pub total_emv: f64,
    pub mean: f64,
    pub percentiles: ExposurePercentiles,
}

#[derive(Serialize, Debug, Clone)]
pub struct ExposureOutput {
    pub report: ExposureReport,
    pub results: Vec<f64>,
}
