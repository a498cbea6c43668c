//! Disabled-date policy for calendar selection.
//!
//! ## Usage
//!
//! Build a [`DateConstraints`] once from host configuration and ask it
//! whether individual grid dates are disabled. Evaluation happens fresh on
//! every call; the policy holds no derived caches, so hosts may mutate and
//! re-apply it between renders.

use crate::date::{CalendarDate, Weekday};

/// Limits which dates a picker will accept.
///
/// A date is disabled as soon as one rule rejects it, checked in order:
/// below `min_date`, above `max_date`, member of `disabled_dates`, falling
/// on a disabled weekday.
///
/// # Example
///
/// ```
/// use almanac_core::constraints::DateConstraints;
/// use almanac_core::date::{CalendarDate, Weekday};
///
/// let constraints = DateConstraints::default()
///     .min_date(CalendarDate::new(2024, 1, 10).expect("date"))
///     .disable_weekday(Weekday::Sunday);
///
/// let too_early = CalendarDate::new(2024, 1, 5).expect("date");
/// let sunday = CalendarDate::new(2024, 1, 14).expect("date");
/// let monday = CalendarDate::new(2024, 1, 15).expect("date");
/// assert!(constraints.is_disabled(too_early));
/// assert!(constraints.is_disabled(sunday));
/// assert!(!constraints.is_disabled(monday));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateConstraints {
    min_date: Option<CalendarDate>,
    max_date: Option<CalendarDate>,
    disabled_dates: Vec<CalendarDate>,
    disabled_weekdays: [bool; 7],
}

impl DateConstraints {
    /// Sets the earliest selectable date.
    pub fn min_date(mut self, date: CalendarDate) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Sets the latest selectable date.
    pub fn max_date(mut self, date: CalendarDate) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Adds a single date to the disabled set.
    pub fn disable_date(mut self, date: CalendarDate) -> Self {
        if !self.disabled_dates.contains(&date) {
            self.disabled_dates.push(date);
        }
        self
    }

    /// Adds every date in `dates` to the disabled set.
    pub fn disable_dates(self, dates: impl IntoIterator<Item = CalendarDate>) -> Self {
        dates.into_iter().fold(self, Self::disable_date)
    }

    /// Disables every occurrence of the given weekday.
    pub fn disable_weekday(mut self, weekday: Weekday) -> Self {
        self.disabled_weekdays[weekday.index_from_monday() as usize] = true;
        self
    }

    /// Returns true when no rule allows `date` to be selected.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        if let Some(min) = self.min_date
            && date < min
        {
            return true;
        }
        if let Some(max) = self.max_date
            && date > max
        {
            return true;
        }
        if self.disabled_dates.contains(&date) {
            return true;
        }
        self.disabled_weekdays[date.weekday().index_from_monday() as usize]
    }
}
