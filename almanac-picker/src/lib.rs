//! Headless date-picker engine for calendar components.
//!
//! This crate holds everything about a date picker that is not pixels: the
//! 6×7 month grid, the single/range/multiple selection state machine, month
//! navigation, roving keyboard focus, and the trigger-label formatter. A
//! rendering layer consumes the engine's output (grid cells, per-cell
//! flags, the focused date, the formatted label) and feeds pointer and key
//! input back in; the engine never touches a window, a DOM, or a GPU.
//!
//! # Example
//!
//! ```
//! use almanac_core::date::CalendarDate;
//! use almanac_picker::engine::{DatePicker, PickerArgs};
//! use almanac_picker::selection::SelectionMode;
//!
//! let mut picker = DatePicker::new(PickerArgs::default().mode(SelectionMode::Single));
//! picker.open();
//!
//! let date = CalendarDate::new(2024, 1, 15).expect("date");
//! let selection = picker.click(date).expect("selectable");
//! assert!(selection.complete);
//! assert_eq!(picker.label(), "Jan 15, 2024");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod engine;
pub mod focus;
pub mod format;
pub mod grid;
pub mod input;
pub mod navigation;
pub mod selection;

pub use almanac_core::{
    constraints::DateConstraints,
    date::{CalendarDate, Weekday, YearMonth},
};
