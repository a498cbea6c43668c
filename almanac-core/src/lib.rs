//! Gregorian calendar primitives for the almanac picker engine.
//!
//! This crate carries the value types and pure date math the picker layers
//! are built on: [`date::CalendarDate`] for day-at-midnight values,
//! [`date::YearMonth`] for month navigation, [`date::Weekday`] for grid
//! layout, and [`constraints::DateConstraints`] for the disabled-date policy.
//!
//! All functions here are pure; nothing performs I/O except
//! [`date::CalendarDate::today`], which samples the system clock once.
//!
//! # Example
//!
//! ```
//! use almanac_core::date::{CalendarDate, Weekday, YearMonth};
//!
//! let date = CalendarDate::new(2024, 2, 29).expect("leap day");
//! assert_eq!(date.weekday(), Weekday::Thursday);
//!
//! let month = YearMonth::new(2024, 2).expect("valid month");
//! assert_eq!(month.days_in_month(), 29);
//! assert_eq!(month.add_months(11).year(), 2025);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod constraints;
pub mod date;

pub use constraints::DateConstraints;
pub use date::{CalendarDate, DateError, Weekday, YearMonth};
