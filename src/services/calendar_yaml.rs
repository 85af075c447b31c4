use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::calendar::{FreeDateRange, WorkCalendar};

#[derive(Error, Debug)]
pub enum CalendarYamlError {
    #[error("failed to read calendar yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse calendar yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid weekday value in {path}: {value}")]
    InvalidWeekday { path: PathBuf, value: String },
    #[error("invalid date format in {path}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },
    #[error("invalid date range in {path}: start_date {start_date} is after end_date {end_date}")]
    InvalidDateRange {
        path: PathBuf,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

#[derive(Debug, Deserialize)]
struct CalendarRecord {
    free_weekdays: Option<Vec<String>>,
    free_date_ranges: Option<Vec<FreeDateRangeRecord>>,
}

#[derive(Debug, Deserialize)]
struct FreeDateRangeRecord {
    start_date: String,
    end_date: String,
}

/// Loads a working-day calendar. Omitting `free_weekdays` keeps the weekend
/// default; an explicit empty list makes every weekday a working day.
pub fn load_calendar_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<WorkCalendar, CalendarYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CalendarYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_calendar_from_yaml_str(&contents, path)
}

fn deserialize_calendar_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<WorkCalendar, CalendarYamlError> {
    let record: CalendarRecord =
        serde_yaml::from_str(input).map_err(|source| CalendarYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let mut calendar = WorkCalendar::new();
    if let Some(values) = record.free_weekdays {
        calendar.free_weekdays = values
            .into_iter()
            .map(|value| {
                parse_weekday(&value).ok_or_else(|| CalendarYamlError::InvalidWeekday {
                    path: origin_path.to_path_buf(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
    }

    calendar.free_date_ranges = record
        .free_date_ranges
        .unwrap_or_default()
        .into_iter()
        .map(|value| free_date_range_from_record(value, origin_path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(calendar)
}

fn free_date_range_from_record(
    value: FreeDateRangeRecord,
    origin_path: &Path,
) -> Result<FreeDateRange, CalendarYamlError> {
    let start_date = parse_date(&value.start_date, origin_path)?;
    let end_date = parse_date(&value.end_date, origin_path)?;
    if start_date > end_date {
        return Err(CalendarYamlError::InvalidDateRange {
            path: origin_path.to_path_buf(),
            start_date,
            end_date,
        });
    }
    Ok(FreeDateRange {
        start_date,
        end_date,
    })
}

fn parse_date(value: &str, origin_path: &Path) -> Result<NaiveDate, CalendarYamlError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CalendarYamlError::InvalidDate {
        path: origin_path.to_path_buf(),
        value: value.to_string(),
    })
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;
    use assert_fs::prelude::*;

    #[test]
    fn returns_error_when_file_does_not_exist() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist.yaml");

        let err = load_calendar_from_yaml_file(&missing).unwrap_err();
        assert!(matches!(err, CalendarYamlError::ReadFile { path, .. } if path == missing));
    }

    #[test]
    fn returns_error_on_invalid_yaml_syntax() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("calendar.yaml");
        file.write_str("free_weekdays: [Mon\n").unwrap();

        let err = load_calendar_from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, CalendarYamlError::Parse { .. }));
    }

    #[test]
    fn returns_error_on_invalid_weekday_value() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("calendar.yaml");
        file.write_str("free_weekdays: [Funday]\n").unwrap();

        let err = load_calendar_from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, CalendarYamlError::InvalidWeekday { .. }));
    }

    #[test]
    fn returns_error_on_invalid_date_range_when_start_after_end() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("calendar.yaml");
        file.write_str("free_date_ranges:\n  - start_date: 2026-02-21\n    end_date: 2026-02-20\n")
            .unwrap();

        let err = load_calendar_from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, CalendarYamlError::InvalidDateRange { .. }));
    }

    #[test]
    fn keeps_weekends_free_when_weekdays_are_omitted() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("calendar.yaml");
        file.write_str(
            "free_date_ranges:\n  - start_date: 2026-12-24\n    end_date: 2026-12-26\n",
        )
        .unwrap();

        let calendar = load_calendar_from_yaml_file(file.path()).unwrap();
        assert_eq!(calendar.free_weekdays, vec![Weekday::Sat, Weekday::Sun]);
        assert!(!calendar.is_working_day(on_date(2026, 12, 24)));
        assert!(calendar.is_working_day(on_date(2026, 12, 23)));
    }

    #[test]
    fn explicit_weekdays_replace_the_weekend_default() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("calendar.yaml");
        file.write_str("free_weekdays: [Fri, Sat]\n").unwrap();

        let calendar = load_calendar_from_yaml_file(file.path()).unwrap();
        assert!(!calendar.is_working_day(on_date(2026, 2, 20))); // Friday
        assert!(calendar.is_working_day(on_date(2026, 2, 22))); // Sunday
    }
}
