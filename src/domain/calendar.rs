use chrono::{Datelike, Days, NaiveDate, Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeDateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Working-day calendar used to schedule critical date reminders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    pub free_weekdays: Vec<Weekday>,
    pub free_date_ranges: Vec<FreeDateRange>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkCalendar {
    /// A calendar where only weekends are free.
    pub fn new() -> Self {
        Self {
            free_weekdays: vec![Weekday::Sat, Weekday::Sun],
            free_date_ranges: Vec::new(),
        }
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.free_weekdays.contains(&date.weekday()) {
            return false;
        }

        !self
            .free_date_ranges
            .iter()
            .any(|range| date >= range.start_date && date <= range.end_date)
    }

    fn has_working_weekdays(&self) -> bool {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .iter()
        .any(|weekday| !self.free_weekdays.contains(weekday))
    }

    /// Steps back from `date` until `count` working days have been passed.
    /// A calendar without any working weekday counts every day instead.
    pub fn subtract_working_days(&self, date: NaiveDate, count: u32) -> NaiveDate {
        if !self.has_working_weekdays() {
            return subtract_calendar_days(date, count);
        }

        let mut current = date;
        let mut remaining = count;
        while remaining > 0 {
            current = match current.pred_opt() {
                Some(previous) => previous,
                None => return current,
            };
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }
        current
    }
}

pub fn subtract_calendar_days(date: NaiveDate, count: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(count)))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn a_default_calendar_has_weekends_off() {
        let test_cases = vec![
            (on_date(2026, 2, 16), true),  // Monday
            (on_date(2026, 2, 17), true),  // Tuesday
            (on_date(2026, 2, 18), true),  // Wednesday
            (on_date(2026, 2, 19), true),  // Thursday
            (on_date(2026, 2, 20), true),  // Friday
            (on_date(2026, 2, 21), false), // Saturday
            (on_date(2026, 2, 22), false), // Sunday
        ];

        let calendar = WorkCalendar::new();

        for (date, expected) in test_cases {
            assert_eq!(
                calendar.is_working_day(date),
                expected,
                "Expected working day = {} on {}",
                expected,
                date
            );
        }
    }

    #[test]
    fn free_date_ranges_are_inclusive() {
        let calendar = WorkCalendar {
            free_weekdays: vec![],
            free_date_ranges: vec![FreeDateRange {
                start_date: on_date(2026, 12, 24),
                end_date: on_date(2026, 12, 26),
            }],
        };

        assert!(calendar.is_working_day(on_date(2026, 12, 23)));
        assert!(!calendar.is_working_day(on_date(2026, 12, 24)));
        assert!(!calendar.is_working_day(on_date(2026, 12, 26)));
        assert!(calendar.is_working_day(on_date(2026, 12, 27)));
    }

    #[test]
    fn subtracting_working_days_skips_weekends() {
        let calendar = WorkCalendar::new();
        // Monday minus 1 working day is the previous Friday
        assert_eq!(
            calendar.subtract_working_days(on_date(2026, 2, 23), 1),
            on_date(2026, 2, 20)
        );
        // Friday minus 5 working days is the previous Friday
        assert_eq!(
            calendar.subtract_working_days(on_date(2026, 2, 20), 5),
            on_date(2026, 2, 13)
        );
        assert_eq!(
            calendar.subtract_working_days(on_date(2026, 2, 20), 0),
            on_date(2026, 2, 20)
        );
    }

    #[test]
    fn subtracting_working_days_skips_holidays() {
        let calendar = WorkCalendar {
            free_weekdays: vec![Weekday::Sat, Weekday::Sun],
            free_date_ranges: vec![FreeDateRange {
                start_date: on_date(2026, 2, 19),
                end_date: on_date(2026, 2, 20),
            }],
        };

        // Mon 23rd minus 2 working days skips the weekend and Thu/Fri off
        assert_eq!(
            calendar.subtract_working_days(on_date(2026, 2, 23), 2),
            on_date(2026, 2, 17)
        );
    }

    #[test]
    fn a_calendar_without_working_weekdays_counts_calendar_days() {
        let calendar = WorkCalendar {
            free_weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            free_date_ranges: vec![],
        };

        assert_eq!(
            calendar.subtract_working_days(on_date(2026, 2, 23), 3),
            on_date(2026, 2, 20)
        );
    }
}
