use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::register_yaml::{load_register_from_yaml_file, serialize_register_to_yaml};

pub fn recalculate_command(cmd: Commands) -> ExitCode {
    let Commands::Recalculate { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let mut register = match load_register_from_yaml_file(&input) {
        Ok(register) => register,
        Err(e) => {
            eprintln!("Failed to load register: {e}");
            return ExitCode::FAILURE;
        }
    };

    let updated = register.recompute_all();

    let mut buffer = Vec::new();
    if let Err(e) = serialize_register_to_yaml(&mut buffer, &register) {
        eprintln!("Failed to serialize register: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = std::fs::write(&output, buffer) {
        eprintln!("Failed to write register: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("wrote recalculated register {} to {output}", register.name);
    println!("Recalculated {updated} risks written to {output}");
    ExitCode::SUCCESS
}
