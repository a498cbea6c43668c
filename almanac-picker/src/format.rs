//! User-facing labels for selections and month headers.

use almanac_core::date::{CalendarDate, YearMonth};

use crate::selection::SelectionValue;

/// Formats the current selection for a trigger or headline label.
///
/// Single mode yields one date or an empty string; range mode joins
/// whichever endpoints exist with `" - "`; multiple mode names the one
/// picked date or counts them.
pub fn format_value(value: &SelectionValue) -> String {
    match value {
        SelectionValue::Single(None) => String::new(),
        SelectionValue::Single(Some(date)) => format_date(*date),
        SelectionValue::Range(range) => match (range.from, range.to) {
            (None, None) => String::new(),
            (Some(from), None) => format_date(from),
            (None, Some(to)) => format_date(to),
            (Some(from), Some(to)) => {
                format!("{} - {}", format_date(from), format_date(to))
            }
        },
        SelectionValue::Multiple(dates) => match dates.as_slice() {
            [] => String::new(),
            [only] => format_date(*only),
            many => format!("{} dates selected", many.len()),
        },
    }
}

/// Formats a date as `"Jan 15, 2024"`.
pub fn format_date(date: CalendarDate) -> String {
    format!(
        "{} {}, {}",
        month_short_name(date.month()),
        date.day(),
        date.year()
    )
}

/// Formats a month header as `"January 2024"`.
pub fn format_month_title(month: YearMonth) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}

fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn month_short_name(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
