//! Month grid construction for the date range picker.
//!
//! Grids are Monday-first: column 0 is Monday and column 6 is Sunday. A month
//! is laid out as a run of blank padding cells followed by one cell per day,
//! so the first day of the month lands under its own weekday column.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Column headers, in grid order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// Keeps `first_day` inside chrono's representable range.
const MIN_YEAR: i32 = -200_000;
const MAX_YEAR: i32 = 200_000;

/// Get the human-readable name for a month number (1-based)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// A single slot in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Padding before day 1 so weekday columns line up
    Blank,
    /// A real day of the displayed month
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }
}

/// The month a calendar is currently showing.
///
/// This is view state only. Moving it never touches a selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthView {
    year: i32,
    /// 1-based
    month: u32,
}

impl MonthView {
    /// Build a view from a year and a 1-based month.
    ///
    /// Months outside 1..=12 roll into neighbouring years: month 0 is the
    /// previous December, month 13 the following January. Views are limited
    /// to years -200000..=200000; anything beyond is pinned to the nearest
    /// end, so `next()` on December 200000 returns the same view.
    pub fn new(year: i32, month: i32) -> Self {
        let index = (i64::from(year) * 12 + i64::from(month) - 1)
            .clamp(i64::from(MIN_YEAR) * 12, i64::from(MAX_YEAR) * 12 + 11);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// The view whose month contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn offset(self, months: i32) -> Self {
        Self::new(self.year, self.month as i32 + months)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month view year is clamped to chrono's range")
    }

    /// Number of days, taken as the distance to the first of the next month
    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        match first.checked_add_months(Months::new(1)) {
            Some(next) => next.signed_duration_since(first).num_days() as u32,
            // Only reachable past chrono's last representable month, which is a December
            None => 31,
        }
    }

    /// Blank cells before day 1 in a Monday-first week (0..=6)
    pub fn leading_blanks(&self) -> u32 {
        let weekday_from_sunday = self.first_day().weekday().num_days_from_sunday();
        (weekday_from_sunday + 6) % 7
    }

    /// Cells in render order: left to right, top to bottom, Monday first
    pub fn cells(&self) -> Vec<CalendarCell> {
        let blanks = self.leading_blanks();
        let days = self.days_in_month();

        log::debug!(
            "calendar grid {}-{:02}: {} blanks, {} days",
            self.year, self.month, blanks, days
        );

        let mut cells = Vec::with_capacity((blanks + days) as usize);
        cells.extend((0..blanks).map(|_| CalendarCell::Blank));
        cells.extend(
            self.first_day()
                .iter_days()
                .take(days as usize)
                .map(CalendarCell::Day),
        );
        cells
    }

    /// Header text, e.g. "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}
