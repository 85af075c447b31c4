use std::process::ExitCode;

use serde::Serialize;

use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::report_format::format_quantification_report;
use crate::domain::estimate::{AllocationModel, DayType, ThreePointEstimate};
use crate::services::input_coercion::{
    RawInput, coerce_allocation_model, coerce_day_type, coerce_number, coerce_optional_number,
};
use crate::services::risk_quantifier::{
    CostInputs, CostQuantification, DurationInputs, DurationQuantification, quantify_cost,
    quantify_duration,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuantificationReport {
    pub probability: f64,
    pub allocation_model: AllocationModel,
    pub day_type: DayType,
    pub cost: CostQuantification,
    pub duration: DurationQuantification,
}

/// Raw form values of one risk, before coercion.
#[derive(Debug, Default)]
pub struct RawRiskForm {
    pub optimistic_cost: Option<String>,
    pub most_likely_cost: Option<String>,
    pub pessimistic_cost: Option<String>,
    pub probability: Option<String>,
    pub allocation_model: Option<String>,
    pub contract_cap: Option<String>,
    pub optimistic_duration: Option<String>,
    pub most_likely_duration: Option<String>,
    pub pessimistic_duration: Option<String>,
    pub day_type: Option<String>,
}

pub fn quantify_form(form: &RawRiskForm) -> QuantificationReport {
    let number = |value: &Option<String>| coerce_number(value.as_deref().map(RawInput::from).as_ref());

    let probability = number(&form.probability);
    let allocation_model = coerce_allocation_model(form.allocation_model.as_deref());
    let day_type = coerce_day_type(form.day_type.as_deref());

    let cost = quantify_cost(&CostInputs {
        estimate: ThreePointEstimate::new(
            number(&form.optimistic_cost),
            number(&form.most_likely_cost),
            number(&form.pessimistic_cost),
        ),
        probability,
        allocation_model,
        contract_cap: coerce_optional_number(
            form.contract_cap.as_deref().map(RawInput::from).as_ref(),
        ),
    });
    let duration = quantify_duration(&DurationInputs {
        estimate: ThreePointEstimate::new(
            number(&form.optimistic_duration),
            number(&form.most_likely_duration),
            number(&form.pessimistic_duration),
        ),
        probability,
        day_type,
    });

    QuantificationReport {
        probability,
        allocation_model,
        day_type,
        cost,
        duration,
    }
}

pub fn quantify_command(cmd: Commands) -> ExitCode {
    let Commands::Quantify {
        optimistic_cost,
        most_likely_cost,
        pessimistic_cost,
        probability,
        allocation_model,
        contract_cap,
        optimistic_duration,
        most_likely_duration,
        pessimistic_duration,
        day_type,
        format,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let report = quantify_form(&RawRiskForm {
        optimistic_cost,
        most_likely_cost,
        pessimistic_cost,
        probability,
        allocation_model,
        contract_cap,
        optimistic_duration,
        most_likely_duration,
        pessimistic_duration,
        day_type,
    });

    let rendered = match format {
        OutputFormat::Text => Ok(format_quantification_report(&report)),
        OutputFormat::Yaml => serde_yaml::to_string(&report).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&report).map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize quantification: {e}");
            ExitCode::FAILURE
        }
    }
}
