use std::process::ExitCode;

use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::report_format::format_register_summary;
use crate::services::register_summary::summarize_register;
use crate::services::register_yaml::load_register_from_yaml_file;
use crate::services::settings::TrackerSettings;

pub fn summary_command(cmd: Commands, settings: &TrackerSettings) -> ExitCode {
    let Commands::Summary { input, top, format } = cmd else {
        return ExitCode::FAILURE;
    };

    let register = match load_register_from_yaml_file(&input) {
        Ok(register) => register,
        Err(e) => {
            eprintln!("Failed to load register: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = summarize_register(&register, top.unwrap_or(settings.summary_top));
    let rendered = match format {
        OutputFormat::Text => Ok(format_register_summary(&summary)),
        OutputFormat::Yaml => serde_yaml::to_string(&summary).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&summary).map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize summary: {e}");
            ExitCode::FAILURE
        }
    }
}
