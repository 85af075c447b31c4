use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use risktrack::commands::base_commands::{CliArgs, Commands};
use risktrack::commands::quantify_cmd::quantify_command;
use risktrack::commands::recalculate_cmd::recalculate_command;
use risktrack::commands::reminders_cmd::reminders_command;
use risktrack::commands::simulate_cmd::simulate_command;
use risktrack::commands::summary_cmd::summary_command;
use risktrack::services::settings::load_settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        cmd @ Commands::Quantify { .. } => quantify_command(cmd),
        cmd @ Commands::Recalculate { .. } => recalculate_command(cmd),
        cmd @ Commands::Summary { .. } => summary_command(cmd, &settings),
        cmd @ Commands::Simulate { .. } => simulate_command(cmd, &settings),
        cmd @ Commands::Reminders { .. } => reminders_command(cmd, &settings),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            generate(shell, &mut command, "risktrack", &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
