//! Selection state machine for single, range, and multiple picking.
//!
//! The machine is a pure function: [`apply_selection`] consumes the previous
//! [`SelectionValue`] by reference and returns a fresh one together with a
//! completion flag, so controlled hosts can detect change by comparison and
//! uncontrolled ones can store the result. Disabled dates must be filtered
//! by the caller before a transition; the machine does not re-check them.
//!
//! Mode is fixed for a value's lifetime. Each variant keeps its own shape,
//! so a range can never leak into a list or a list into a single slot.

use almanac_core::date::CalendarDate;
use smallvec::SmallVec;
use tracing::warn;

/// How many dates a picker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Exactly one date; every click replaces the previous one.
    #[default]
    Single,
    /// A contiguous start/end pair built from two clicks.
    Range,
    /// Any number of dates, toggled individually.
    Multiple,
}

/// A start/end pair where either side may still be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Start of the range.
    pub from: Option<CalendarDate>,
    /// End of the range.
    pub to: Option<CalendarDate>,
}

impl DateRange {
    /// Returns true once both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Returns true while only the start is committed.
    pub fn is_open(&self) -> bool {
        self.from.is_some() && self.to.is_none()
    }

    /// Returns true when `date` lies inside the committed interval,
    /// inclusive of both endpoint days.
    pub fn contains(&self, date: CalendarDate) -> bool {
        almanac_core::date::in_range(date, self.from, self.to)
    }

    /// Restores the `from <= to` invariant.
    ///
    /// A stored range can only arrive inverted through a caller bug, so
    /// this asserts in development and self-corrects by swapping in release.
    pub fn normalized(self) -> Self {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            debug_assert!(false, "date range endpoints out of order: {from} > {to}");
            warn!("normalizing inverted date range {from} > {to}");
            return Self {
                from: Some(to),
                to: Some(from),
            };
        }
        self
    }
}

/// The current selection, shaped by its [`SelectionMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    /// At most one date.
    Single(Option<CalendarDate>),
    /// A possibly still-open range.
    Range(DateRange),
    /// An unordered set of dates; membership is day equality.
    Multiple(SmallVec<[CalendarDate; 8]>),
}

impl SelectionValue {
    /// Returns the empty value for `mode`.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Range => Self::Range(DateRange::default()),
            SelectionMode::Multiple => Self::Multiple(SmallVec::new()),
        }
    }

    /// Returns the mode this value belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range(_) => SelectionMode::Range,
            Self::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Returns true when nothing has been picked yet.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_none(),
            Self::Range(range) => range.from.is_none() && range.to.is_none(),
            Self::Multiple(dates) => dates.is_empty(),
        }
    }

    /// Returns true when `date` is one of the committed picks.
    pub fn is_selected(&self, date: CalendarDate) -> bool {
        match self {
            Self::Single(value) => *value == Some(date),
            Self::Range(range) => range.from == Some(date) || range.to == Some(date),
            Self::Multiple(dates) => dates.contains(&date),
        }
    }

    /// Returns true when `date` lies inside a completed range.
    pub fn in_committed_range(&self, date: CalendarDate) -> bool {
        match self {
            Self::Range(range) if range.is_complete() => range.contains(date),
            _ => false,
        }
    }

    /// Returns true while a range start is committed without an end and
    /// `date` is on or after it. Hosts use this for the pending-range
    /// highlight; the state is derived and never persisted.
    pub fn in_open_range(&self, date: CalendarDate) -> bool {
        match self {
            Self::Range(range) if range.is_open() => range.contains(date),
            _ => false,
        }
    }

    /// Returns the date focus should land on when the picker opens: the
    /// single pick, a range's start, or the first of a list.
    pub fn anchor(&self) -> Option<CalendarDate> {
        match self {
            Self::Single(value) => *value,
            Self::Range(range) => range.from.or(range.to),
            Self::Multiple(dates) => dates.first().copied(),
        }
    }

    /// Re-establishes internal invariants on a value received from outside
    /// the engine (controlled hosts hand values in).
    pub fn normalized(self) -> Self {
        match self {
            Self::Range(range) => Self::Range(range.normalized()),
            other => other,
        }
    }
}

/// The outcome of one selection transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The new selection value.
    pub value: SelectionValue,
    /// True when the pick is finished and a host popover may close: every
    /// single-mode click, a range's second click, never in multiple mode.
    pub complete: bool,
}

/// Applies one picked date to the previous value.
///
/// The caller is responsible for filtering disabled dates first. The
/// returned value is always a new one; `value` is never mutated.
pub fn apply_selection(value: &SelectionValue, date: CalendarDate) -> Selection {
    match value {
        SelectionValue::Single(_) => Selection {
            value: SelectionValue::Single(Some(date)),
            complete: true,
        },
        SelectionValue::Range(range) => {
            if let Some(from) = range.from
                && range.to.is_none()
            {
                // Second click completes the range; clicks may arrive in
                // either order.
                let (from, to) = if date < from { (date, from) } else { (from, date) };
                Selection {
                    value: SelectionValue::Range(DateRange {
                        from: Some(from),
                        to: Some(to),
                    }),
                    complete: true,
                }
            } else {
                Selection {
                    value: SelectionValue::Range(DateRange {
                        from: Some(date),
                        to: None,
                    }),
                    complete: false,
                }
            }
        }
        SelectionValue::Multiple(dates) => {
            let mut dates = dates.clone();
            match dates.iter().position(|picked| *picked == date) {
                Some(index) => {
                    dates.remove(index);
                }
                None => dates.push(date),
            }
            Selection {
                value: SelectionValue::Multiple(dates),
                complete: false,
            }
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
    fn test_single_click_selects_and_completes() {
        let value = SelectionValue::empty(SelectionMode::Single);
        let selection = apply_selection(&value, date(2024, 1, 15));
        assert_eq!(
            selection.value,
            SelectionValue::Single(Some(date(2024, 1, 15)))
        );
        assert!(selection.complete);
        // The previous value is untouched.
        assert!(value.is_empty());
    }

    #[test]
    fn test_single_click_replaces_unconditionally() {
        let value = SelectionValue::Single(Some(date(2024, 1, 15)));
        let selection = apply_selection(&value, date(2024, 3, 2));
        assert_eq!(selection.value, SelectionValue::Single(Some(date(2024, 3, 2))));
        assert!(selection.complete);
    }

    #[test]
    fn test_range_clicks_in_reverse_order_swap() {
        let value = SelectionValue::empty(SelectionMode::Range);
        let first = apply_selection(&value, date(2024, 1, 10));
        assert!(!first.complete);
        assert!(first.value.in_open_range(date(2024, 1, 10)));

        let second = apply_selection(&first.value, date(2024, 1, 5));
        assert!(second.complete);
        assert_eq!(
            second.value,
            SelectionValue::Range(DateRange {
                from: Some(date(2024, 1, 5)),
                to: Some(date(2024, 1, 10)),
            })
        );
    }

    #[test]
    fn test_range_endpoints_always_ordered() {
        let pairs = [
            (date(2024, 1, 10), date(2024, 1, 5)),
            (date(2024, 1, 5), date(2024, 1, 10)),
            (date(2023, 12, 31), date(2024, 1, 1)),
            (date(2024, 2, 29), date(2024, 2, 29)),
        ];
        for (a, b) in pairs {
            let start = apply_selection(&SelectionValue::empty(SelectionMode::Range), a);
            let done = apply_selection(&start.value, b);
            let SelectionValue::Range(range) = done.value else {
                panic!("range mode must stay a range");
            };
            let from = range.from.expect("from set");
            let to = range.to.expect("to set");
            assert!(from <= to, "{from} > {to}");
            assert!(done.complete);
        }
    }

    #[test]
    fn test_third_click_restarts_the_range() {
        let mut value = SelectionValue::empty(SelectionMode::Range);
        for day in [10, 5] {
            value = apply_selection(&value, date(2024, 1, day)).value;
        }
        let restarted = apply_selection(&value, date(2024, 2, 20));
        assert!(!restarted.complete);
        assert_eq!(
            restarted.value,
            SelectionValue::Range(DateRange {
                from: Some(date(2024, 2, 20)),
                to: None,
            })
        );
    }

    #[test]
    fn test_open_range_queries() {
        let open = SelectionValue::Range(DateRange {
            from: Some(date(2024, 1, 10)),
            to: None,
        });
        assert!(open.in_open_range(date(2024, 1, 10)));
        assert!(open.in_open_range(date(2024, 5, 1)));
        assert!(!open.in_open_range(date(2024, 1, 9)));
        assert!(!open.in_committed_range(date(2024, 1, 15)));

        let closed = apply_selection(&open, date(2024, 1, 20)).value;
        assert!(!closed.in_open_range(date(2024, 1, 15)));
        assert!(closed.in_committed_range(date(2024, 1, 15)));
        assert!(!closed.in_committed_range(date(2024, 1, 21)));
    }

    #[test]
    fn test_multiple_toggles_membership() {
        let mut value = SelectionValue::empty(SelectionMode::Multiple);
        for (month, day) in [(1, 3), (1, 7), (1, 3)] {
            let step = apply_selection(&value, date(2024, month, day));
            assert!(!step.complete);
            value = step.value;
        }
        assert_eq!(
            value,
            SelectionValue::Multiple(SmallVec::from_slice(&[date(2024, 1, 7)]))
        );
    }

    #[test]
    fn test_multiple_double_toggle_is_identity() {
        let base = apply_selection(
            &SelectionValue::empty(SelectionMode::Multiple),
            date(2024, 4, 1),
        )
        .value;
        let toggled_on = apply_selection(&base, date(2024, 4, 9)).value;
        let toggled_off = apply_selection(&toggled_on, date(2024, 4, 9)).value;
        assert_eq!(toggled_off, base);
    }

    #[test]
    fn test_anchor_per_mode() {
        assert_eq!(SelectionValue::empty(SelectionMode::Single).anchor(), None);
        assert_eq!(
            SelectionValue::Single(Some(date(2024, 1, 5))).anchor(),
            Some(date(2024, 1, 5))
        );
        assert_eq!(
            SelectionValue::Range(DateRange {
                from: Some(date(2024, 1, 5)),
                to: Some(date(2024, 1, 9)),
            })
            .anchor(),
            Some(date(2024, 1, 5))
        );
        assert_eq!(
            SelectionValue::Multiple(SmallVec::from_slice(&[date(2024, 2, 2), date(2024, 2, 9)]))
                .anchor(),
            Some(date(2024, 2, 2))
        );
    }

    #[test]
    fn test_normalized_swaps_inverted_range() {
        // Release behavior: self-correct by swapping.
        let inverted = DateRange {
            from: Some(date(2024, 1, 20)),
            to: Some(date(2024, 1, 5)),
        };
        if cfg!(debug_assertions) {
            // In development the invariant violation asserts instead.
            let result = std::panic::catch_unwind(|| inverted.normalized());
            assert!(result.is_err());
        } else {
            let fixed = inverted.normalized();
            assert_eq!(fixed.from, Some(date(2024, 1, 5)));
            assert_eq!(fixed.to, Some(date(2024, 1, 20)));
        }
    }

    #[test]
    fn test_mode_round_trips_through_empty() {
        for mode in [
            SelectionMode::Single,
            SelectionMode::Range,
            SelectionMode::Multiple,
        ] {
            let value = SelectionValue::empty(mode);
            assert_eq!(value.mode(), mode);
            assert!(value.is_empty());
        }
    }
}
