use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::domain::estimate::ThreePointEstimate;
use crate::domain::register::RiskRegister;
use crate::services::beta_pert_sampler::{BetaPertSampler, ThreePointSampler};
use crate::services::exposure_types::{ExposureOutput, ExposurePercentiles, ExposureReport};
use crate::services::percentiles::{mean, value_sorted};
use crate::services::register_yaml::{RegisterYamlError, load_register_from_yaml_file};
use crate::services::risk_quantifier::{Cost, Quantity, compute_emv, pert_estimate, round_to};

#[derive(Error, Debug)]
pub enum ExposureSimulationError {
    #[error("failed to load register: {0}")]
    Register(#[from] RegisterYamlError),
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("register has no open risks to simulate")]
    NoActiveRisks,
}

/// Per-risk inputs of one simulation run.
struct SimulatedRisk {
    /// Clamped to [0, 1]; only the Bernoulli draw sees the clamp.
    occurrence_probability: f64,
    estimate: ThreePointEstimate,
    /// Used instead of sampling when the three points are not ordered.
    fixed_cost: Option<f64>,
}

pub fn simulate_exposure_from_register_file(
    register_path: &str,
    iterations: usize,
    seed: Option<u64>,
) -> Result<ExposureOutput, ExposureSimulationError> {
    let register = load_register_from_yaml_file(register_path)?;
    let mut simulation = run_exposure_simulation(&register, iterations, seed)?;
    simulation.report.data_source = data_source_name(register_path);
    Ok(simulation)
}

pub fn run_exposure_simulation(
    register: &RiskRegister,
    iterations: usize,
    seed: Option<u64>,
) -> Result<ExposureOutput, ExposureSimulationError> {
    let (mut occurrence_rng, sampler_rng) = match seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };
    let mut sampler = BetaPertSampler::new(sampler_rng);
    run_exposure_simulation_with(register, iterations, &mut occurrence_rng, &mut sampler)
}

pub fn run_exposure_simulation_with<R: Rng, S: ThreePointSampler>(
    register: &RiskRegister,
    iterations: usize,
    occurrence_rng: &mut R,
    sampler: &mut S,
) -> Result<ExposureOutput, ExposureSimulationError> {
    if iterations == 0 {
        return Err(ExposureSimulationError::InvalidIterations);
    }

    let risks: Vec<SimulatedRisk> = register
        .active_risks()
        .map(|risk| {
            let fixed_cost = if risk.cost_estimate.is_ordered() {
                None
            } else {
                log::debug!(
                    "risk {} has unordered cost points, simulating with its expected cost",
                    risk.id
                );
                Some(pert_estimate::<Cost>(&risk.cost_estimate))
            };
            SimulatedRisk {
                occurrence_probability: if risk.probability.is_nan() {
                    0.0
                } else {
                    risk.probability.clamp(0.0, 1.0)
                },
                estimate: risk.cost_estimate,
                fixed_cost,
            }
        })
        .collect();
    if risks.is_empty() {
        return Err(ExposureSimulationError::NoActiveRisks);
    }

    let total_emv = register
        .active_risks()
        .map(|risk| compute_emv(pert_estimate::<Cost>(&risk.cost_estimate), risk.probability))
        .sum::<f64>();

    let mut results = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        results.push(simulate_single_run(&risks, occurrence_rng, sampler));
    }
    results.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let percentile =
        |p: f64| round_to(value_sorted(&results, p).unwrap_or(0.0), Cost::DECIMALS);
    let report = ExposureReport {
        data_source: String::new(),
        iterations,
        simulated_risks: risks.len(),
        total_emv: round_to(total_emv, Cost::DECIMALS),
        mean: round_to(mean(&results), Cost::DECIMALS),
        percentiles: ExposurePercentiles {
            p0: percentile(0.0),
            p50: percentile(50.0),
            p85: percentile(85.0),
            p100: percentile(100.0),
        },
    };
    log::debug!(
        "simulated {} risks over {} iterations, P85 exposure {}",
        report.simulated_risks,
        iterations,
        report.percentiles.p85
    );

    Ok(ExposureOutput { report, results })
}

fn simulate_single_run<R: Rng, S: ThreePointSampler>(
    risks: &[SimulatedRisk],
    occurrence_rng: &mut R,
    sampler: &mut S,
) -> f64 {
    let mut total = 0.0;
    for risk in risks {
        if !occurrence_rng.gen_bool(risk.occurrence_probability) {
            continue;
        }
        total += match risk.fixed_cost {
            Some(cost) => cost,
            None => sampler
                .sample(&risk.estimate)
                .unwrap_or_else(|_| pert_estimate::<Cost>(&risk.estimate)),
        };
    }
    total
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
