//! Calendar date value types and pure date arithmetic.
//!
//! [`CalendarDate`] is a year/month/day value at midnight; time-of-day never
//! exists in this crate, so equality and ordering are always day-level.
//! [`YearMonth`] keys a visible month and [`Weekday`] drives grid layout.
//!
//! Conversions between dates and a flat day count use the civil-calendar
//! algorithms, which are exact over the whole `i32` year range.

use std::{
    fmt,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;

/// Errors produced when constructing a date from raw components or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The month component is outside `1..=12`.
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u8),
    /// The day component is outside the month's length.
    #[error("day {day} is outside 1..={max} for {year:04}-{month:02}")]
    DayOutOfRange {
        /// Year component of the rejected date.
        year: i32,
        /// Month component of the rejected date.
        month: u8,
        /// Rejected day value.
        day: u8,
        /// Number of days in the rejected date's month.
        max: u8,
    },
    /// The text is not a `YYYY-MM-DD` date.
    #[error("`{0}` is not a YYYY-MM-DD date")]
    Malformed(String),
}

/// Days of the week in Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// Returns the index of this weekday counted from Monday (0-6).
    pub fn index_from_monday(self) -> i32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Returns the weekday at `index` counted from Monday, wrapping modulo 7.
    pub fn from_monday_index(index: i32) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// Returns the three-letter English label for this weekday.
    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

/// A calendar date expressed as year, month, and day.
///
/// Ordering is chronological; two dates compare equal exactly when their
/// year, month, and day all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the current date in UTC.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let days = (duration.as_secs() / 86_400) as i64;
        let (year, month, day) = date_from_day_number(days);
        CalendarDate::new(year, month, day)
            .unwrap_or_else(|| CalendarDate::new_unchecked(1970, 1, 1))
    }

    /// Returns the month this date falls in.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::new_unchecked(self.year, self.month)
    }

    /// Returns the weekday of this date.
    pub fn weekday(&self) -> Weekday {
        let days = self.day_number();
        Weekday::from_monday_index(((days + 3).rem_euclid(7)) as i32)
    }

    /// Returns the date `delta` days away, negative values going backward.
    pub fn add_days(&self, delta: i32) -> Self {
        let (year, month, day) = date_from_day_number(self.day_number() + delta as i64);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the date `delta` months away with the day clamped to the
    /// target month's length, so Jan 31 plus one month lands on the last
    /// day of February.
    pub fn add_months(&self, delta: i32) -> Self {
        let month = self.year_month().add_months(delta);
        let day = self.day.min(month.days_in_month());
        Self::new_unchecked(month.year(), month.month(), day)
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self::new_unchecked(self.year, self.month, 1)
    }

    /// Returns the last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        Self::new_unchecked(self.year, self.month, days_in_month(self.year, self.month))
    }

    /// Parses a `YYYY-MM-DD` date.
    pub fn parse_iso(text: &str) -> Result<Self, DateError> {
        let malformed = || DateError::Malformed(text.to_string());
        let mut parts = text.splitn(3, '-');
        // A leading '-' (negative year) would split wrong; reject it here.
        let year = parts
            .next()
            .filter(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(malformed)?;
        let month = parse_two_digits(parts.next()).ok_or_else(malformed)?;
        let day = parse_two_digits(parts.next()).ok_or_else(malformed)?;
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        let max = days_in_month(year, month);
        if day == 0 || day > max {
            return Err(DateError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

fn parse_two_digits(part: Option<&str>) -> Option<u8> {
    part.filter(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit()))
        .and_then(|p| p.parse::<u8>().ok())
}

/// A year and month pair used for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the values are valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: CalendarDate) -> Self {
        date.year_month()
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the date for this month at the provided day.
    pub fn to_date(&self, day: u8) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Returns the first day of this month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, 1)
    }

    /// Returns the last day of this month.
    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, self.days_in_month())
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Returns true when `date` falls in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.year == date.year() && self.month == date.month()
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }

    pub(crate) fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }
}

/// Returns the number of days in the given month, leap-year aware.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the column (0-6) of the month's first day in a week that starts
/// on `first_day_of_week`.
pub fn first_weekday_offset(month: YearMonth, first_day_of_week: Weekday) -> u8 {
    let first = month.first_day().weekday();
    (first.index_from_monday() - first_day_of_week.index_from_monday()).rem_euclid(7) as u8
}

/// Day-level equality over optional dates; false when either side is absent.
pub fn same_day(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Returns true when `date` falls inside the interval described by the
/// bounds. A single bound yields an open-ended half-range; two bounds yield
/// a closed interval where the `to` day counts fully. With no bounds there
/// is no interval, so the result is false.
pub fn in_range(date: CalendarDate, from: Option<CalendarDate>, to: Option<CalendarDate>) -> bool {
    match (from, to) {
        (Some(from), Some(to)) => from <= date && date <= to,
        (Some(from), None) => from <= date,
        (None, Some(to)) => date <= to,
        (None, None) => false,
    }
}

/// Returns the seven weekdays in grid-header order for the given week start.
pub fn weekday_sequence(first_day_of_week: Weekday) -> [Weekday; 7] {
    let mut days = [Weekday::Monday; 7];
    let start = first_day_of_week.index_from_monday();
    for (idx, slot) in days.iter_mut().enumerate() {
        *slot = Weekday::from_monday_index(start + idx as i32);
    }
    days
}

fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let mut y = year;
    let m = month as i32;
    let d = day as i32;
    y -= if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i64
}

fn date_from_day_number(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}
