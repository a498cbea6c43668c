//! Roving keyboard focus over the calendar grid.
//!
//! Focus is one logical date, not a DOM or widget handle: the host renders
//! "this date is focused" however its framework wants, and translates real
//! key events into [`NavKey`] before calling in. [`focus_target`] is the
//! pure key-to-action mapping; [`FocusCursor`] holds the one focused date.
//!
//! Only the focused cell is sequentially tabbable (roving tabindex). Every
//! other cell is reached with the arrow and paging keys, which is an
//! accessibility contract of composite widgets.

use almanac_core::date::CalendarDate;

/// Keys the calendar grid reacts to, already stripped of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move focus one day back.
    ArrowLeft,
    /// Move focus one day forward.
    ArrowRight,
    /// Move focus one week back.
    ArrowUp,
    /// Move focus one week forward.
    ArrowDown,
    /// Jump to the first day of the focused month.
    Home,
    /// Jump to the last day of the focused month.
    End,
    /// Page one month back, keeping the day of month where possible.
    PageUp,
    /// Page one month forward, keeping the day of month where possible.
    PageDown,
    /// Pick the focused date.
    Enter,
    /// Pick the focused date.
    Space,
    /// Ask the host to close the picker.
    Escape,
}

/// What a key press means for the focused date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    /// Focus moves to this date.
    MoveTo(CalendarDate),
    /// The focused date is picked.
    Select,
    /// The host should close the picker.
    Close,
}

/// Maps one key press against the currently focused date.
///
/// Month paging clamps the day of month, so PageDown from Jan 31 lands on
/// the last day of February. Keys outside [`NavKey`]'s vocabulary never
/// reach this function; the host keeps them.
pub fn focus_target(focused: CalendarDate, key: NavKey) -> FocusAction {
    match key {
        NavKey::ArrowLeft => FocusAction::MoveTo(focused.add_days(-1)),
        NavKey::ArrowRight => FocusAction::MoveTo(focused.add_days(1)),
        NavKey::ArrowUp => FocusAction::MoveTo(focused.add_days(-7)),
        NavKey::ArrowDown => FocusAction::MoveTo(focused.add_days(7)),
        NavKey::Home => FocusAction::MoveTo(focused.first_of_month()),
        NavKey::End => FocusAction::MoveTo(focused.last_of_month()),
        NavKey::PageUp => FocusAction::MoveTo(focused.add_months(-1)),
        NavKey::PageDown => FocusAction::MoveTo(focused.add_months(1)),
        NavKey::Enter | NavKey::Space => FocusAction::Select,
        NavKey::Escape => FocusAction::Close,
    }
}

/// The roving focus target.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusCursor {
    focused: Option<CalendarDate>,
}

impl FocusCursor {
    /// Returns the focused date, if focus has been seeded.
    pub fn focused(&self) -> Option<CalendarDate> {
        self.focused
    }

    /// Moves focus to `date`; pointer interaction and key navigation both
    /// land here.
    pub fn focus(&mut self, date: CalendarDate) {
        self.focused = Some(date);
    }

    /// Seeds focus with `fallback` unless a date is already focused, and
    /// returns the focused date. Called when the picker becomes visible.
    pub fn ensure(&mut self, fallback: CalendarDate) -> CalendarDate {
        *self.focused.get_or_insert(fallback)
    }
}
