use std::io::{self, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::critical_date::CriticalDate;
use crate::domain::estimate::{DayType, ThreePointEstimate};
use crate::domain::register::RiskRegister;
use crate::domain::risk::{Risk, RiskStatus};
use crate::services::input_coercion::{
    RawInput, coerce_allocation_model, coerce_day_type, coerce_number, coerce_optional_number,
};

#[derive(Error, Debug)]
pub enum RegisterYamlError {
    #[error("failed to read register yaml file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse register yaml file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("missing risk id")]
    MissingRiskId,
    #[error("duplicate risk id: {0}")]
    DuplicateRiskId(String),
    #[error("missing critical date id")]
    MissingCriticalDateId,
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid status value: {0}")]
    InvalidStatus(String),
}

#[derive(Serialize, Deserialize)]
struct RegisterRecord {
    name: String,
    #[serde(default)]
    risks: Vec<RiskRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    critical_dates: Vec<CriticalDateRecord>,
}

#[derive(Serialize, Deserialize)]
struct RiskRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    linked_tasks: Vec<String>,
    #[serde(default)]
    probability: Option<RawInput>,
    #[serde(default)]
    cost: Option<CostRecord>,
    #[serde(default)]
    duration: Option<DurationRecord>,
    // Derived fields. Written on save, ignored on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recommended_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calculated_business_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calculated_calendar_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    probability_adjusted_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delay_duration: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct CostRecord {
    #[serde(default)]
    optimistic: Option<RawInput>,
    #[serde(default)]
    most_likely: Option<RawInput>,
    #[serde(default)]
    pessimistic: Option<RawInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allocation_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contract_cap: Option<RawInput>,
}

#[derive(Serialize, Deserialize)]
struct DurationRecord {
    #[serde(default)]
    optimistic: Option<RawInput>,
    #[serde(default)]
    most_likely: Option<RawInput>,
    #[serde(default)]
    pessimistic: Option<RawInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_type: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct CriticalDateRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reminder_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reminder_day_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    obligation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    risk_id: Option<String>,
    #[serde(default)]
    completed: bool,
}

pub fn load_register_from_yaml_file(path: &str) -> Result<RiskRegister, RegisterYamlError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RegisterYamlError::Read {
        path: path.to_string(),
        source,
    })?;
    deserialize_register_from_yaml_str(&contents, path)
}

pub fn deserialize_register_from_yaml_str(
    input: &str,
    origin_path: &str,
) -> Result<RiskRegister, RegisterYamlError> {
    let record: RegisterRecord =
        serde_yaml::from_str(input).map_err(|source| RegisterYamlError::Parse {
            path: origin_path.to_string(),
            source,
        })?;
    let mut register = RiskRegister::new(&record.name);

    for risk_record in record.risks {
        let risk = risk_from_record(risk_record)?;
        if register.find_risk(&risk.id).is_some() {
            return Err(RegisterYamlError::DuplicateRiskId(risk.id));
        }
        register.risks.push(risk);
    }

    register.critical_dates = record
        .critical_dates
        .into_iter()
        .map(critical_date_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(register)
}

pub fn serialize_register_to_yaml<W: Write>(
    writer: &mut W,
    register: &RiskRegister,
) -> io::Result<()> {
    let record = RegisterRecord {
        name: register.name.clone(),
        risks: register.risks.iter().map(risk_to_record).collect(),
        critical_dates: register
            .critical_dates
            .iter()
            .map(critical_date_to_record)
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn risk_from_record(record: RiskRecord) -> Result<Risk, RegisterYamlError> {
    if record.id.trim().is_empty() {
        return Err(RegisterYamlError::MissingRiskId);
    }

    let mut risk = Risk::new(record.id.trim());
    risk.title = record.title;
    risk.description = record.description;
    risk.category = record.category;
    risk.owner = record.owner;
    risk.status = parse_status(record.status.as_deref())?;
    risk.linked_task_ids = record.linked_tasks;
    risk.probability = coerce_number(record.probability.as_ref());

    if let Some(cost) = record.cost {
        risk.cost_estimate = ThreePointEstimate::new(
            coerce_number(cost.optimistic.as_ref()),
            coerce_number(cost.most_likely.as_ref()),
            coerce_number(cost.pessimistic.as_ref()),
        );
        risk.allocation_model = coerce_allocation_model(cost.allocation_model.as_deref());
        risk.contract_cap = coerce_optional_number(cost.contract_cap.as_ref());
    }

    if let Some(duration) = record.duration {
        risk.duration_estimate = ThreePointEstimate::new(
            coerce_number(duration.optimistic.as_ref()),
            coerce_number(duration.most_likely.as_ref()),
            coerce_number(duration.pessimistic.as_ref()),
        );
        risk.day_type = coerce_day_type(duration.day_type.as_deref());
    }

    Ok(risk)
}

fn risk_to_record(risk: &Risk) -> RiskRecord {
    let cost = risk.cost_outcome;
    let duration = risk.duration_outcome;
    RiskRecord {
        id: risk.id.clone(),
        title: risk.title.clone(),
        description: risk.description.clone(),
        category: risk.category.clone(),
        owner: risk.owner.clone(),
        status: Some(risk.status.as_str().to_string()),
        linked_tasks: risk.linked_task_ids.clone(),
        probability: Some(RawInput::Number(risk.probability)),
        cost: Some(CostRecord {
            optimistic: Some(RawInput::Number(risk.cost_estimate.optimistic)),
            most_likely: Some(RawInput::Number(risk.cost_estimate.most_likely)),
            pessimistic: Some(RawInput::Number(risk.cost_estimate.pessimistic)),
            allocation_model: Some(risk.allocation_model.as_str().to_string()),
            contract_cap: risk.contract_cap.map(RawInput::Number),
        }),
        duration: Some(DurationRecord {
            optimistic: Some(RawInput::Number(risk.duration_estimate.optimistic)),
            most_likely: Some(RawInput::Number(risk.duration_estimate.most_likely)),
            pessimistic: Some(RawInput::Number(risk.duration_estimate.pessimistic)),
            day_type: Some(risk.day_type.as_str().to_string()),
        }),
        expected_cost: cost.map(|value| value.expected_cost),
        emv: cost.map(|value| value.emv),
        recommended_budget: cost.map(|value| value.recommended_budget),
        expected_duration: duration.map(|value| value.expected_duration),
        calculated_business_days: duration.and_then(|value| value.calculated_business_days),
        calculated_calendar_days: duration.and_then(|value| value.calculated_calendar_days),
        probability_adjusted_duration: duration.map(|value| value.probability_adjusted_duration),
        delay_duration: duration.map(|value| value.delay_duration),
    }
}

fn critical_date_from_record(
    record: CriticalDateRecord,
) -> Result<CriticalDate, RegisterYamlError> {
    if record.id.trim().is_empty() {
        return Err(RegisterYamlError::MissingCriticalDateId);
    }

    let mut date = CriticalDate::new(record.id.trim(), parse_date(&record.due_date)?);
    date.title = record.title;
    date.reminder_days = record.reminder_days;
    date.reminder_day_type = record
        .reminder_day_type
        .as_deref()
        .map(DayType::parse_lenient);
    date.obligation = record.obligation;
    date.risk_id = record.risk_id;
    date.completed = record.completed;
    Ok(date)
}

fn critical_date_to_record(date: &CriticalDate) -> CriticalDateRecord {
    CriticalDateRecord {
        id: date.id.clone(),
        title: date.title.clone(),
        due_date: date.due_date.format("%Y-%m-%d").to_string(),
        reminder_days: date.reminder_days,
        reminder_day_type: date
            .reminder_day_type
            .map(|day_type| day_type.as_str().to_string()),
        obligation: date.obligation.clone(),
        risk_id: date.risk_id.clone(),
        completed: date.completed,
    }
}

fn parse_status(value: Option<&str>) -> Result<RiskStatus, RegisterYamlError> {
    match value {
        None => Ok(RiskStatus::Open),
        Some(value) => {
            RiskStatus::parse(value).ok_or_else(|| RegisterYamlError::InvalidStatus(value.to_string()))
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, RegisterYamlError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| RegisterYamlError::InvalidDate(value.to_string()))
}
