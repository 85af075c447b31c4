use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::exposure_simulation::simulate_exposure_from_register_file;
use crate::services::histogram::write_histogram_png;
use crate::services::settings::TrackerSettings;

pub fn simulate_command(cmd: Commands, settings: &TrackerSettings) -> ExitCode {
    let Commands::Simulate {
        input,
        output,
        iterations,
        seed,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let iterations = iterations.unwrap_or(settings.default_iterations);
    let simulation = match simulate_exposure_from_register_file(&input, iterations, seed) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to simulate exposure: {e}");
            return ExitCode::FAILURE;
        }
    };

    let histogram_path = format!("{output}.png");
    let histogram_written = match write_histogram_png(&histogram_path, &simulation.results) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to write exposure histogram: {e}");
            false
        }
    };

    let yaml = match serde_yaml::to_string(&simulation.report) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize simulation output: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::write(&output, yaml) {
        eprintln!("Failed to write simulation output: {e}");
        return ExitCode::FAILURE;
    }

    println!(
        "Exposure simulation for {} risks written to {output}",
        simulation.report.simulated_risks
    );
    if histogram_written {
        println!("Exposure histogram written to {histogram_path}");
    }
    ExitCode::SUCCESS
}
