//! Month grid construction for the calendar view.
//!
//! The grid is always six full weeks (42 cells) so the layout never changes
//! height as months are paged; leading and trailing slots carry real dates
//! from the adjacent months.

use almanac_core::date::{CalendarDate, Weekday, YearMonth, first_weekday_offset};

/// Number of columns in the calendar grid.
pub const GRID_COLUMNS: usize = 7;
/// Number of rows in the calendar grid.
pub const GRID_ROWS: usize = 6;
/// Total number of cells in the calendar grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// One cell of the visible month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// The date this cell renders.
    pub date: CalendarDate,
    /// True when the date belongs to the grid's month rather than a
    /// neighboring one.
    pub in_month: bool,
    /// True when the date is the real current date, sampled once per build.
    pub today: bool,
    /// False for outside days when the picker hides them; the cell keeps
    /// its date so the seven-column layout stays stable, but the host must
    /// not route clicks to it.
    pub interactive: bool,
}

/// A fully built 6×7 calendar grid for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: [GridCell; GRID_CELLS],
}

impl MonthGrid {
    /// Builds the grid for `month`.
    ///
    /// `today` is whatever the caller considers the current date; the
    /// engine samples the clock once per build so a render crossing
    /// midnight picks up the new day on its next build.
    pub fn build(
        month: YearMonth,
        first_day_of_week: Weekday,
        show_outside_days: bool,
        today: CalendarDate,
    ) -> Self {
        let offset = first_weekday_offset(month, first_day_of_week);
        let start = month.first_day().add_days(-(offset as i32));
        let cells = std::array::from_fn(|index| {
            let date = start.add_days(index as i32);
            let in_month = month.contains(date);
            GridCell {
                date,
                in_month,
                today: date == today,
                interactive: in_month || show_outside_days,
            }
        });
        Self { month, cells }
    }

    /// Returns the month this grid was built for.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns all 42 cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns the six rows of seven cells each.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Returns the cell carrying `date`, if it is inside the visible window.
    pub fn cell(&self, date: CalendarDate) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    fn month(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).expect("valid test month")
    }

    #[test]
    fn test_grid_is_always_42_cells_in_7_wide_rows() {
        let today = date(2024, 6, 15);
        for m in 1..=12 {
            let grid = MonthGrid::build(month(2024, m), Weekday::Monday, true, today);
            assert_eq!(grid.cells().len(), GRID_CELLS);
            let rows: Vec<_> = grid.rows().collect();
            assert_eq!(rows.len(), GRID_ROWS);
            assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));
        }
    }

    #[test]
    fn test_grid_covers_the_whole_month() {
        let today = date(2024, 6, 15);
        for year in [2023, 2024] {
            for m in 1..=12 {
                let target = month(year, m);
                let grid = MonthGrid::build(target, Weekday::Sunday, true, today);
                let in_month = grid.cells().iter().filter(|c| c.in_month).count();
                assert_eq!(in_month as u8, target.days_in_month());
                for day in 1..=target.days_in_month() {
                    let cell = grid
                        .cell(target.to_date(day).expect("day in month"))
                        .expect("month day present");
                    assert!(cell.in_month);
                }
            }
        }
    }

    #[test]
    fn test_monday_first_february_2024_backfills_from_january() {
        // February 2024 starts on a Thursday, so a Monday-first grid leads
        // with Mon Jan 29.
        let grid = MonthGrid::build(month(2024, 2), Weekday::Monday, true, date(2024, 2, 1));
        assert_eq!(grid.cells()[0].date, date(2024, 1, 29));
        assert!(!grid.cells()[0].in_month);
        assert_eq!(grid.cells()[3].date, date(2024, 2, 1));
        assert!(grid.cells()[3].in_month);
        // Trailing cells come from March.
        let last = grid.cells()[GRID_CELLS - 1];
        assert_eq!(last.date, date(2024, 3, 10));
        assert!(!last.in_month);
    }

    #[test]
    fn test_zero_offset_month_starts_at_day_one() {
        // January 2024 starts on a Monday.
        let grid = MonthGrid::build(month(2024, 1), Weekday::Monday, true, date(2024, 1, 1));
        assert_eq!(grid.cells()[0].date, date(2024, 1, 1));
        assert!(grid.cells()[0].in_month);
    }

    #[test]
    fn test_hidden_outside_days_keep_dates_but_lose_interactivity() {
        let grid = MonthGrid::build(month(2024, 2), Weekday::Monday, false, date(2024, 2, 1));
        let leading = grid.cells()[0];
        assert_eq!(leading.date, date(2024, 1, 29));
        assert!(!leading.interactive);
        let inside = grid.cell(date(2024, 2, 15)).expect("cell");
        assert!(inside.interactive);
        assert_eq!(grid.cells().len(), GRID_CELLS);
    }

    #[test]
    fn test_today_flag_marks_exactly_one_cell() {
        let today = date(2024, 2, 14);
        let grid = MonthGrid::build(month(2024, 2), Weekday::Monday, true, today);
        let marked: Vec<_> = grid.cells().iter().filter(|c| c.today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);
        // Building for a far-away month marks nothing.
        let far = MonthGrid::build(month(2030, 7), Weekday::Monday, true, today);
        assert!(far.cells().iter().all(|c| !c.today));
    }

    #[test]
    fn test_grid_crosses_year_boundaries() {
        // December 2024 ends on a Tuesday; trailing cells come from January 2025.
        let grid = MonthGrid::build(month(2024, 12), Weekday::Monday, true, date(2024, 12, 1));
        let last = grid.cells()[GRID_CELLS - 1];
        assert_eq!(last.date.year(), 2025);
        assert!(!last.in_month);
        // January 2026 starts on a Thursday; leading cells come from December 2025.
        let grid = MonthGrid::build(month(2026, 1), Weekday::Monday, true, date(2026, 1, 1));
        assert_eq!(grid.cells()[0].date, date(2025, 12, 29));
    }
}
