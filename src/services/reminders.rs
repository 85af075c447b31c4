use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::WorkCalendar;
use crate::domain::critical_date::{ReminderLead, ReminderStatus};
use crate::domain::register::RiskRegister;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DueReminder {
    pub id: String,
    pub title: Option<String>,
    pub due_date: NaiveDate,
    pub reminder_date: NaiveDate,
    pub status: ReminderStatus,
    /// Days until the due date, negative once overdue.
    pub days_remaining: i64,
    pub obligation: Option<String>,
    pub risk_id: Option<String>,
}

/// Critical dates that need attention on `today`: those whose reminder has
/// fired and those already overdue. Sorted by due date, then id.
pub fn due_reminders(
    register: &RiskRegister,
    today: NaiveDate,
    defaults: ReminderLead,
    calendar: &WorkCalendar,
) -> Vec<DueReminder> {
    let mut reminders: Vec<DueReminder> = register
        .critical_dates
        .iter()
        .filter_map(|date| {
            let status = date.status(today, defaults, calendar);
            if !matches!(status, ReminderStatus::DueSoon | ReminderStatus::Overdue) {
                return None;
            }
            if let Some(risk_id) = &date.risk_id {
                if register.find_risk(risk_id).is_none() {
                    log::warn!("critical date {} links unknown risk {risk_id}", date.id);
                }
            }
            Some(DueReminder {
                id: date.id.clone(),
                title: date.title.clone(),
                due_date: date.due_date,
                reminder_date: date.reminder_date(defaults, calendar),
                status,
                days_remaining: (date.due_date - today).num_days(),
                obligation: date.obligation.clone(),
                risk_id: date.risk_id.clone(),
            })
        })
        .collect();

    reminders.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    reminders
}
