//! Stepper-driven date entry.
//!
//! The calendar grid is not the only way into a date: pickers also offer a
//! field-by-field entry mode where year, month, and day are stepped with
//! plus/minus controls. This module holds that mode's arithmetic; the
//! widgets around it belong to the host.

use almanac_core::date::{CalendarDate, days_in_month};

/// The date component a stepper adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    /// The year field.
    Year,
    /// The month field.
    Month,
    /// The day field.
    Day,
}

/// Steps one field of `current` by `delta`.
///
/// The year saturates, the month wraps through adjacent years, and the day
/// clamps to the month's length. After a year or month change the day is
/// re-clamped so the result is always a real date.
pub fn step_date(current: CalendarDate, field: StepField, delta: i32) -> CalendarDate {
    match field {
        StepField::Year => {
            let year = current.year().saturating_add(delta);
            let day = current.day().min(days_in_month(year, current.month()));
            CalendarDate::new(year, current.month(), day)
                .unwrap_or_else(|| current.first_of_month())
        }
        StepField::Month => current.add_months(delta),
        StepField::Day => {
            let max = days_in_month(current.year(), current.month());
            let day = (current.day() as i32 + delta).clamp(1, max as i32) as u8;
            CalendarDate::new(current.year(), current.month(), day).unwrap_or(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_year_steps_reclamp_leap_day() {
        assert_eq!(
            step_date(date(2024, 2, 29), StepField::Year, 1),
            date(2025, 2, 28)
        );
        assert_eq!(
            step_date(date(2024, 2, 29), StepField::Year, 4),
            date(2028, 2, 29)
        );
        assert_eq!(
            step_date(date(2024, 6, 10), StepField::Year, -1),
            date(2023, 6, 10)
        );
    }

    #[test]
    fn test_month_steps_wrap_and_clamp() {
        assert_eq!(
            step_date(date(2024, 12, 15), StepField::Month, 1),
            date(2025, 1, 15)
        );
        assert_eq!(
            step_date(date(2024, 1, 31), StepField::Month, 1),
            date(2024, 2, 29)
        );
        assert_eq!(
            step_date(date(2024, 1, 10), StepField::Month, -1),
            date(2023, 12, 10)
        );
    }

    #[test]
    fn test_day_steps_clamp_at_month_edges() {
        assert_eq!(
            step_date(date(2024, 2, 29), StepField::Day, 1),
            date(2024, 2, 29)
        );
        assert_eq!(step_date(date(2024, 2, 1), StepField::Day, -1), date(2024, 2, 1));
        assert_eq!(step_date(date(2024, 2, 10), StepField::Day, 5), date(2024, 2, 15));
        assert_eq!(
            step_date(date(2024, 2, 10), StepField::Day, 100),
            date(2024, 2, 29)
        );
    }
}
