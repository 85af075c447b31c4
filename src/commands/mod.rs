pub mod base_commands;
pub mod quantify_cmd;
pub mod recalculate_cmd;
pub mod reminders_cmd;
pub mod report_format;
pub mod simulate_cmd;
pub mod summary_cmd;
