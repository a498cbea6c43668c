//! The date-picker engine facade.
//!
//! [`DatePicker`] wires the grid builder, selection machine, month cursor,
//! and focus cursor into one host-facing object. The host forwards pointer
//! clicks and [`NavKey`] presses, renders from [`DatePicker::grid`] and
//! [`DatePicker::cell_state`], and reacts to the returned events; the
//! engine itself never renders or listens to anything.
//!
//! ## Ownership
//!
//! Whether the engine or the host owns the selection value is decided once
//! at construction and must not change for the instance's lifetime:
//!
//! - [`DatePicker::new`] builds an uncontrolled picker that stores every
//!   transition itself.
//! - [`DatePicker::controlled`] builds a controlled picker that only keeps
//!   a read-only mirror of the host's value; transitions are reported
//!   through the returned [`Selection`] and the host feeds the accepted
//!   value back with [`DatePicker::sync_value`].
//!
//! Both variants return identical events for identical input, so hosts
//! cannot observe which branch ran.

use std::ops::RangeInclusive;

use almanac_core::{
    constraints::DateConstraints,
    date::{CalendarDate, Weekday, YearMonth, weekday_sequence},
};
use derive_setters::Setters;
use tracing::warn;

use crate::{
    focus::{FocusAction, FocusCursor, NavKey, focus_target},
    format::{format_month_title, format_value},
    grid::MonthGrid,
    navigation::{DEFAULT_YEAR_RANGE, MonthCursor},
    selection::{Selection, SelectionMode, SelectionValue, apply_selection},
};

/// Configuration for [`DatePicker`].
#[derive(Clone, Setters)]
pub struct PickerArgs {
    /// Which selection machine the picker runs.
    pub mode: SelectionMode,
    /// First day of the week for the grid and its header row.
    pub first_day_of_week: Weekday,
    /// Whether leading/trailing days of adjacent months accept interaction.
    pub show_outside_days: bool,
    /// Disabled-date policy applied to clicks and key selection.
    pub constraints: DateConstraints,
    /// Years the picker can navigate to.
    pub year_range: RangeInclusive<i32>,
    /// Month shown before any interaction; defaults to the current month.
    #[setters(strip_option)]
    pub initial_month: Option<YearMonth>,
}

impl Default for PickerArgs {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            first_day_of_week: Weekday::Monday,
            show_outside_days: true,
            constraints: DateConstraints::default(),
            year_range: DEFAULT_YEAR_RANGE,
            initial_month: None,
        }
    }
}

/// Who owns the selection value; fixed at construction.
#[derive(Debug, Clone)]
enum Ownership {
    Internal(SelectionValue),
    External(SelectionValue),
}

/// What a key press did, reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Focus moved to this date; the host should move real focus with it.
    Focused(CalendarDate),
    /// The focused date was picked.
    Selected(Selection),
    /// Escape was pressed; the host should close its popover.
    CloseRequested,
}

/// Per-cell visual state, derived fresh for every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    /// The date is one of the committed picks.
    pub selected: bool,
    /// The date lies inside a completed range.
    pub in_range: bool,
    /// The date lies on or after a pending range start.
    pub in_open_range: bool,
    /// The date fails the disabled-date policy.
    pub disabled: bool,
    /// The date is the single sequentially-tabbable cell.
    pub tab_stop: bool,
}

/// A headless date picker.
pub struct DatePicker {
    ownership: Ownership,
    months: MonthCursor,
    focus: FocusCursor,
    first_day_of_week: Weekday,
    show_outside_days: bool,
    constraints: DateConstraints,
}

impl DatePicker {
    /// Creates an uncontrolled picker; the engine owns the selection.
    pub fn new(args: PickerArgs) -> Self {
        let value = SelectionValue::empty(args.mode);
        Self::with_ownership(args, Ownership::Internal(value))
    }

    /// Creates a controlled picker around the host's `value`.
    ///
    /// The value's shape decides the machine; `args.mode` must agree with
    /// it. The stored copy is a mirror: transitions never mutate it, and
    /// the host refreshes it with [`DatePicker::sync_value`] after
    /// accepting a change.
    pub fn controlled(args: PickerArgs, value: SelectionValue) -> Self {
        debug_assert!(
            value.mode() == args.mode,
            "controlled value shape disagrees with the configured mode"
        );
        let value = value.normalized();
        Self::with_ownership(args, Ownership::External(value))
    }

    fn with_ownership(args: PickerArgs, ownership: Ownership) -> Self {
        Self {
            ownership,
            months: MonthCursor::new(args.initial_month, args.year_range),
            focus: FocusCursor::default(),
            first_day_of_week: args.first_day_of_week,
            show_outside_days: args.show_outside_days,
            constraints: args.constraints,
        }
    }

    /// Seeds focus when the picker becomes visible and returns the focused
    /// date. The first open focuses the selection's anchor, or today when
    /// nothing is selected; later opens keep the existing focus.
    pub fn open(&mut self) -> CalendarDate {
        let fallback = self.value().anchor().unwrap_or_else(CalendarDate::today);
        let focused = self.focus.ensure(fallback);
        self.align_month_to(focused);
        focused
    }

    /// Builds the 6×7 grid for the visible month, sampling the clock once.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.months.visible(),
            self.first_day_of_week,
            self.show_outside_days,
            CalendarDate::today(),
        )
    }

    /// Returns the weekday header row in configured order.
    pub fn weekday_headers(&self) -> [Weekday; 7] {
        weekday_sequence(self.first_day_of_week)
    }

    /// Derives the visual state of one cell.
    pub fn cell_state(&self, date: CalendarDate) -> CellState {
        let value = self.value();
        CellState {
            selected: value.is_selected(date),
            in_range: value.in_committed_range(date),
            in_open_range: value.in_open_range(date),
            disabled: self.constraints.is_disabled(date),
            tab_stop: date == self.tab_stop(),
        }
    }

    /// Returns the one date whose cell is sequentially tabbable: the
    /// focused date while it is visible, else today, else the first of the
    /// visible month.
    pub fn tab_stop(&self) -> CalendarDate {
        let visible = self.months.visible();
        if let Some(focused) = self.focus.focused()
            && visible.contains(focused)
        {
            return focused;
        }
        let today = CalendarDate::today();
        if visible.contains(today) {
            return today;
        }
        visible.first_day()
    }

    /// Applies a pointer click on `date`.
    ///
    /// Disabled dates and non-interactive outside days are refused with
    /// `None`. Otherwise the selection machine runs, focus moves to the
    /// date, the visible month follows it, and the resulting [`Selection`]
    /// is returned; its `complete` flag is the host's close signal.
    pub fn click(&mut self, date: CalendarDate) -> Option<Selection> {
        if self.constraints.is_disabled(date) {
            return None;
        }
        if !self.show_outside_days && !self.months.visible().contains(date) {
            return None;
        }
        let selection = apply_selection(self.value(), date);
        self.focus.focus(date);
        self.align_month_to(date);
        if let Ownership::Internal(value) = &mut self.ownership {
            *value = selection.value.clone();
        }
        Some(selection)
    }

    /// Applies one key press.
    ///
    /// Directional keys move focus (re-synchronizing the visible month so
    /// the focused cell always renders) and report [`EngineEvent::Focused`];
    /// Enter and Space select the focused date through the same path as
    /// [`DatePicker::click`]; Escape reports [`EngineEvent::CloseRequested`].
    /// Moves that would leave the navigable year range, and selection of a
    /// disabled date, are swallowed with `None`.
    pub fn key(&mut self, key: NavKey) -> Option<EngineEvent> {
        let focused = self.focus.focused().unwrap_or_else(|| self.tab_stop());
        match focus_target(focused, key) {
            FocusAction::MoveTo(target) => {
                if !self.months.in_year_range(target.year_month()) {
                    return None;
                }
                self.focus.focus(target);
                self.align_month_to(target);
                Some(EngineEvent::Focused(target))
            }
            FocusAction::Select => self.click(focused).map(EngineEvent::Selected),
            FocusAction::Close => Some(EngineEvent::CloseRequested),
        }
    }

    /// Shows the previous month; selection and focus stay untouched.
    pub fn previous_month(&mut self) {
        self.months.previous_month();
    }

    /// Shows the next month; selection and focus stay untouched.
    pub fn next_month(&mut self) {
        self.months.next_month();
    }

    /// Jumps to the month containing today, moves focus onto today, and
    /// returns it.
    pub fn go_to_today(&mut self) -> CalendarDate {
        let today = self.months.go_to_today();
        self.focus.focus(today);
        today
    }

    /// Returns the month currently shown.
    pub fn visible_month(&self) -> YearMonth {
        self.months.visible()
    }

    /// Returns true when the backward chevron should be enabled.
    pub fn can_step_back(&self) -> bool {
        self.months.can_step_back()
    }

    /// Returns true when the forward chevron should be enabled.
    pub fn can_step_forward(&self) -> bool {
        self.months.can_step_forward()
    }

    /// Returns the current selection value.
    pub fn value(&self) -> &SelectionValue {
        match &self.ownership {
            Ownership::Internal(value) | Ownership::External(value) => value,
        }
    }

    /// Replaces the stored selection value.
    ///
    /// Controlled hosts call this after accepting a reported transition
    /// (or when their value changes for unrelated reasons). The value is
    /// normalized on the way in.
    pub fn sync_value(&mut self, value: SelectionValue) {
        let value = value.normalized();
        match &mut self.ownership {
            Ownership::Internal(stored) | Ownership::External(stored) => *stored = value,
        }
    }

    /// Returns the focused date, if focus has been seeded.
    pub fn focused(&self) -> Option<CalendarDate> {
        self.focus.focused()
    }

    /// Formats the current selection for the trigger label.
    pub fn label(&self) -> String {
        format_value(self.value())
    }

    /// Formats the visible month for the header label.
    pub fn month_title(&self) -> String {
        format_month_title(self.months.visible())
    }

    /// Returns the disabled-date policy.
    pub fn constraints(&self) -> &DateConstraints {
        &self.constraints
    }

    fn align_month_to(&mut self, date: CalendarDate) {
        if self.months.visible().contains(date) {
            return;
        }
        self.months.show(date.year_month());
        if !self.months.visible().contains(date) {
            // show() clamps to the year range, so this only fires when a
            // caller focuses a date outside it.
            debug_assert!(false, "focused date {date} is outside the navigable years");
            warn!("focused date {date} clamped outside the visible month");
        }
    }
}
