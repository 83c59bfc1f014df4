//! Date range values and the two-click selection machine.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::format::format_long_date;

/// Placeholder shown on the picker trigger when nothing is selected
pub const EMPTY_RANGE_LABEL: &str = "Select dates";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    #[error("Range end {to} must be after its start {from}")]
    EndNotAfterStart { from: NaiveDate, to: NaiveDate },
}

/// A selected span of whole calendar days.
///
/// `to` is absent while a selection is in progress or when a single day is
/// chosen. When present it is strictly after `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    from: NaiveDate,
    to: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct RawDateRange {
    from: NaiveDate,
    to: Option<NaiveDate>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.from, raw.to)
    }
}

impl DateRange {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        match to {
            Some(to) => Self::closed(from, to),
            None => Ok(Self::starting_at(from)),
        }
    }

    /// An open range: start chosen, end pending
    pub fn starting_at(from: NaiveDate) -> Self {
        Self { from, to: None }
    }

    pub fn closed(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        if to <= from {
            return Err(DateRangeError::EndNotAfterStart { from, to });
        }
        Ok(Self { from, to: Some(to) })
    }

    /// The `days` days up to and including `today`, e.g. "last 30 days"
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        match today.checked_sub_days(Days::new(u64::from(days))) {
            Some(from) if from < today => Self { from, to: Some(today) },
            _ => Self::starting_at(today),
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn is_complete(&self) -> bool {
        self.to.is_some()
    }

    /// Whether `day` is highlighted as part of this range
    pub fn contains(&self, day: NaiveDate) -> bool {
        match self.to {
            None => day == self.from,
            Some(to) => self.from <= day && day <= to,
        }
    }

    /// Trigger text, e.g. "10 March 2024 - 15 March 2024"
    pub fn label(&self) -> String {
        match self.to {
            Some(to) => format!("{} - {}", format_long_date(self.from), format_long_date(to)),
            None => format_long_date(self.from),
        }
    }
}

/// Trigger text for an optional range
pub fn range_label(value: Option<&DateRange>) -> String {
    value
        .map(DateRange::label)
        .unwrap_or_else(|| EMPTY_RANGE_LABEL.to_string())
}

/// Where a two-click selection currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    PartialStart(NaiveDate),
    Complete { from: NaiveDate, to: NaiveDate },
}

impl SelectionState {
    pub fn of(value: Option<&DateRange>) -> Self {
        match value {
            None => SelectionState::Empty,
            Some(DateRange { from, to: None }) => SelectionState::PartialStart(*from),
            Some(DateRange { from, to: Some(to) }) => SelectionState::Complete { from: *from, to: *to },
        }
    }
}

/// Apply a day click to the current selection and return the next range.
///
/// A click after an open start closes the range. Any other click, including
/// one on or before the open start, restarts the selection from that day.
pub fn select_day(current: Option<&DateRange>, day: NaiveDate) -> DateRange {
    let state = SelectionState::of(current);
    let next = match state {
        SelectionState::PartialStart(from) if day > from => DateRange { from, to: Some(day) },
        _ => DateRange::starting_at(day),
    };
    log::debug!("range selection {:?} + click {} -> {:?}", state, day, next);
    next
}

/// Display flags for one day cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayMarks {
    pub in_range: bool,
    pub is_start: bool,
    pub is_end: bool,
}

impl DayMarks {
    pub fn for_day(value: Option<&DateRange>, day: NaiveDate) -> Self {
        let Some(range) = value else {
            return Self::default();
        };
        Self {
            in_range: range.contains(day),
            is_start: range.from == day,
            is_end: range.to == Some(day),
        }
    }

    /// Inside a complete range but neither endpoint
    pub fn is_interior(&self) -> bool {
        self.in_range && !self.is_start && !self.is_end
    }
}
