use std::env;
use std::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::critical_date::ReminderLead;
use crate::domain::estimate::DayType;

/// Environment variable naming a settings file used when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "RISKTRACK_CONFIG";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    pub default_iterations: usize,
    pub reminder_lead_days: u32,
    pub reminder_day_type: DayType,
    pub summary_top: usize,
    pub calendar_file: Option<String>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            default_iterations: 10000,
            reminder_lead_days: 14,
            reminder_day_type: DayType::Calendar,
            summary_top: 5,
            calendar_file: None,
        }
    }
}

impl TrackerSettings {
    pub fn from_yaml_file(path: &str) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents, path)
    }

    fn from_yaml_str(contents: &str, path: &str) -> Result<Self, SettingsError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|source| SettingsError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn reminder_lead(&self) -> ReminderLead {
        ReminderLead {
            days: self.reminder_lead_days,
            day_type: self.reminder_day_type,
        }
    }
}

/// Resolves settings from an explicit path, then `RISKTRACK_CONFIG`, then the
/// built-in defaults.
pub fn load_settings(explicit_path: Option<&str>) -> Result<TrackerSettings, SettingsError> {
    let path = explicit_path
        .map(str::to_string)
        .or_else(|| env::var(CONFIG_ENV_VAR).ok().filter(|value| !value.is_empty()));

    match path {
        Some(path) => {
            log::debug!("loading settings from {path}");
            TrackerSettings::from_yaml_file(&path)
        }
        None => Ok(TrackerSettings::default()),
    }
}
