//! Visible-month navigation.
//!
//! The cursor steps one calendar month at a time, clamps jumps to an
//! inclusive year range, and never touches the selection.

use std::ops::RangeInclusive;

use almanac_core::date::{CalendarDate, YearMonth};

/// Default navigable year range.
pub const DEFAULT_YEAR_RANGE: RangeInclusive<i32> = 1900..=2100;

/// Tracks which month the calendar is showing.
#[derive(Debug, Clone)]
pub struct MonthCursor {
    visible: YearMonth,
    year_range: RangeInclusive<i32>,
}

impl MonthCursor {
    /// Creates a cursor showing `initial`, falling back to the month
    /// containing the current date. Either way the result is clamped to
    /// `year_range` (swapped bounds are normalized first).
    pub fn new(initial: Option<YearMonth>, year_range: RangeInclusive<i32>) -> Self {
        let year_range = normalize_year_range(year_range);
        let visible = initial.unwrap_or_else(|| CalendarDate::today().year_month());
        Self {
            visible: clamp_to_range(visible, &year_range),
            year_range,
        }
    }

    /// Returns the month currently shown.
    pub fn visible(&self) -> YearMonth {
        self.visible
    }

    /// Returns the navigable year range.
    pub fn year_range(&self) -> &RangeInclusive<i32> {
        &self.year_range
    }

    /// Returns true when one more step backward stays in range.
    pub fn can_step_back(&self) -> bool {
        let start = *self.year_range.start();
        self.visible.year() > start || (self.visible.year() == start && self.visible.month() > 1)
    }

    /// Returns true when one more step forward stays in range.
    pub fn can_step_forward(&self) -> bool {
        let end = *self.year_range.end();
        self.visible.year() < end || (self.visible.year() == end && self.visible.month() < 12)
    }

    /// Steps back exactly one month, refusing to leave the year range.
    pub fn previous_month(&mut self) {
        if self.can_step_back() {
            self.visible = self.visible.add_months(-1);
        }
    }

    /// Steps forward exactly one month, refusing to leave the year range.
    pub fn next_month(&mut self) {
        if self.can_step_forward() {
            self.visible = self.visible.add_months(1);
        }
    }

    /// Shows `month` directly, clamped to the year range.
    pub fn show(&mut self, month: YearMonth) {
        self.visible = clamp_to_range(month, &self.year_range);
    }

    /// Shows the month containing the current date and returns today so
    /// the caller can move focus onto it.
    pub fn go_to_today(&mut self) -> CalendarDate {
        let today = CalendarDate::today();
        self.show(today.year_month());
        today
    }

    /// Returns true when `month` is within the navigable year range.
    pub fn in_year_range(&self, month: YearMonth) -> bool {
        self.year_range.contains(&month.year())
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::new(None, DEFAULT_YEAR_RANGE)
    }
}

fn normalize_year_range(range: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let start = *range.start();
    let end = *range.end();
    if start <= end { range } else { end..=start }
}

fn clamp_to_range(month: YearMonth, year_range: &RangeInclusive<i32>) -> YearMonth {
    if month.year() < *year_range.start() {
        YearMonth::new(*year_range.start(), 1).unwrap_or(month)
    } else if month.year() > *year_range.end() {
        YearMonth::new(*year_range.end(), 12).unwrap_or(month)
    } else {
        month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).expect("valid test month")
    }

    #[test]
    fn test_steps_cross_year_boundaries() {
        let mut cursor = MonthCursor::new(Some(month(2024, 12)), DEFAULT_YEAR_RANGE);
        cursor.next_month();
        assert_eq!(cursor.visible(), month(2025, 1));
        cursor.previous_month();
        cursor.previous_month();
        assert_eq!(cursor.visible(), month(2024, 11));
    }

    #[test]
    fn test_navigation_respects_year_range() {
        let mut cursor = MonthCursor::new(Some(month(2020, 1)), 2020..=2021);
        assert!(!cursor.can_step_back());
        cursor.previous_month();
        assert_eq!(cursor.visible(), month(2020, 1));

        cursor.show(month(2021, 12));
        assert!(!cursor.can_step_forward());
        cursor.next_month();
        assert_eq!(cursor.visible(), month(2021, 12));
    }

    #[test]
    fn test_show_clamps_to_year_range() {
        let mut cursor = MonthCursor::new(Some(month(2020, 6)), 2020..=2021);
        cursor.show(month(1999, 3));
        assert_eq!(cursor.visible(), month(2020, 1));
        cursor.show(month(2050, 3));
        assert_eq!(cursor.visible(), month(2021, 12));
        cursor.show(month(2021, 7));
        assert_eq!(cursor.visible(), month(2021, 7));
    }

    #[test]
    fn test_initial_month_clamps_and_swapped_bounds_normalize() {
        let cursor = MonthCursor::new(Some(month(1800, 5)), 2021..=2020);
        assert_eq!(cursor.visible(), month(2020, 1));
        assert_eq!(cursor.year_range(), &(2020..=2021));
    }

    #[test]
    fn test_go_to_today_shows_current_month() {
        let mut cursor = MonthCursor::new(Some(month(1950, 1)), DEFAULT_YEAR_RANGE);
        let today = cursor.go_to_today();
        assert_eq!(cursor.visible(), today.year_month());
    }

    #[test]
    fn test_stepping_is_one_month_exactly() {
        let mut cursor = MonthCursor::new(Some(month(2024, 5)), DEFAULT_YEAR_RANGE);
        cursor.next_month();
        assert_eq!(cursor.visible(), month(2024, 6));
        cursor.next_month();
        assert_eq!(cursor.visible(), month(2024, 7));
        cursor.previous_month();
        assert_eq!(cursor.visible(), month(2024, 6));
    }
}
