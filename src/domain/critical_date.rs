use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::{WorkCalendar, subtract_calendar_days};
use crate::domain::estimate::DayType;

/// How long before the due date a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderLead {
    pub days: u32,
    pub day_type: DayType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Upcoming,
    DueSoon,
    Overdue,
    Completed,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Upcoming => "upcoming",
            ReminderStatus::DueSoon => "due soon",
            ReminderStatus::Overdue => "overdue",
            ReminderStatus::Completed => "completed",
        }
    }
}

/// A contractual deadline tracked alongside the risk register.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalDate {
    pub id: String,
    pub title: Option<String>,
    pub due_date: NaiveDate,
    pub reminder_days: Option<u32>,
    pub reminder_day_type: Option<DayType>,
    pub obligation: Option<String>,
    pub risk_id: Option<String>,
    pub completed: bool,
}

impl CriticalDate {
    pub fn new(id: &str, due_date: NaiveDate) -> Self {
        Self {
            id: id.to_string(),
            title: None,
            due_date,
            reminder_days: None,
            reminder_day_type: None,
            obligation: None,
            risk_id: None,
            completed: false,
        }
    }

    /// Lead time of this date, falling back to `defaults` for unset parts.
    pub fn effective_lead(&self, defaults: ReminderLead) -> ReminderLead {
        ReminderLead {
            days: self.reminder_days.unwrap_or(defaults.days),
            day_type: self.reminder_day_type.unwrap_or(defaults.day_type),
        }
    }

    pub fn reminder_date(&self, defaults: ReminderLead, calendar: &WorkCalendar) -> NaiveDate {
        let lead = self.effective_lead(defaults);
        match lead.day_type {
            DayType::Calendar => subtract_calendar_days(self.due_date, lead.days),
            DayType::Business => calendar.subtract_working_days(self.due_date, lead.days),
        }
    }

    pub fn status(
        &self,
        today: NaiveDate,
        defaults: ReminderLead,
        calendar: &WorkCalendar,
    ) -> ReminderStatus {
        if self.completed {
            ReminderStatus::Completed
        } else if today > self.due_date {
            ReminderStatus::Overdue
        } else if today >= self.reminder_date(defaults, calendar) {
            ReminderStatus::DueSoon
        } else {
            ReminderStatus::Upcoming
        }
    }
}
