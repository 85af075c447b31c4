use chrono::NaiveDate;

use crate::commands::quantify_cmd::QuantificationReport;
use crate::services::register_summary::RegisterSummary;
use crate::services::reminders::DueReminder;

pub fn format_quantification_report(report: &QuantificationReport) -> String {
    let (converted_label, converted) = match (
        report.duration.calculated_business_days,
        report.duration.calculated_calendar_days,
    ) {
        (Some(days), _) => ("Business days", days),
        (None, Some(days)) => ("Calendar days", days),
        (None, None) => ("Converted days", 0.0),
    };

    let mut lines = Vec::new();
    lines.push("Risk Quantification".to_string());
    lines.push(format!("Probability: {}", report.probability));
    lines.push(String::new());
    lines.push(format!("Cost ({} allocation)", report.allocation_model.as_str()));
    lines.push(format!("Expected cost: {:.2}", report.cost.expected_cost));
    lines.push(format!("EMV: {:.2}", report.cost.emv));
    lines.push(format!("Recommended budget: {:.2}", report.cost.recommended_budget));
    lines.push(String::new());
    lines.push(format!("Duration ({} days)", report.day_type.as_str()));
    lines.push(format!("Expected duration: {:.1}", report.duration.expected_duration));
    lines.push(format!("{converted_label}: {converted:.1}"));
    lines.push(format!(
        "Probability-adjusted duration: {:.1}",
        report.duration.probability_adjusted_duration
    ));
    lines.push(format!("Delay duration: {}", report.duration.delay_duration));

    lines.join("\n")
}

pub fn format_register_summary(summary: &RegisterSummary) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Register: {}", summary.name));
    lines.push(format!(
        "Active risks: {} of {}",
        summary.active_risks, summary.total_risks
    ));
    lines.push(format!("Total expected cost: {:.2}", summary.total_expected_cost));
    lines.push(format!("Total EMV: {:.2}", summary.total_emv));
    lines.push(format!(
        "Total recommended budget: {:.2}",
        summary.total_recommended_budget
    ));
    lines.push(format!("Longest delay: {} days", summary.max_delay_duration));
    lines.push(format!(
        "Probability-adjusted delay: {:.1} days",
        summary.total_probability_adjusted_duration
    ));

    if !summary.top_risks.is_empty() {
        lines.push(String::new());
        lines.push("Risk | EMV | Budget | Delay".to_string());
        lines.push("-----|-----|--------|------".to_string());
        for risk in &summary.top_risks {
            let label = match &risk.title {
                Some(title) => format!("{} {}", risk.id, title),
                None => risk.id.clone(),
            };
            lines.push(format!(
                "{label} | {:.2} | {:.2} | {}",
                risk.emv, risk.recommended_budget, risk.delay_duration
            ));
        }
    }

    lines.join("\n")
}

pub fn format_reminders(reminders: &[DueReminder], today: NaiveDate) -> String {
    if reminders.is_empty() {
        return format!("No critical dates need attention on {today}");
    }

    let mut lines = Vec::new();
    lines.push(format!("Critical dates needing attention on {today}"));
    lines.push("Id | Due | Status | Days | Title".to_string());
    lines.push("---|-----|--------|------|------".to_string());
    for reminder in reminders {
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            reminder.id,
            reminder.due_date,
            reminder.status.as_str(),
            reminder.days_remaining,
            reminder.title.as_deref().unwrap_or("")
        ));
    }

    lines.join("\n")
}
