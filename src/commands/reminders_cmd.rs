use std::process::ExitCode;

use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_reminders;
use crate::domain::calendar::WorkCalendar;
use crate::services::calendar_yaml::load_calendar_from_yaml_file;
use crate::services::register_yaml::load_register_from_yaml_file;
use crate::services::reminders::due_reminders;
use crate::services::settings::TrackerSettings;

pub fn reminders_command(cmd: Commands, settings: &TrackerSettings) -> ExitCode {
    let Commands::Reminders {
        input,
        today,
        calendar,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let today = match NaiveDate::parse_from_str(&today, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            eprintln!("Failed to parse date: {today} (expected YYYY-MM-DD)");
            return ExitCode::FAILURE;
        }
    };

    let calendar = match calendar.as_deref().or(settings.calendar_file.as_deref()) {
        Some(path) => match load_calendar_from_yaml_file(path) {
            Ok(calendar) => calendar,
            Err(e) => {
                eprintln!("Failed to load calendar: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => WorkCalendar::new(),
    };

    let register = match load_register_from_yaml_file(&input) {
        Ok(register) => register,
        Err(e) => {
            eprintln!("Failed to load register: {e}");
            return ExitCode::FAILURE;
        }
    };

    let reminders = due_reminders(&register, today, settings.reminder_lead(), &calendar);
    println!("{}", format_reminders(&reminders, today));
    ExitCode::SUCCESS
}
