//! State and date-range filtering over long records.

use crate::long::LongRecord;
use chrono::NaiveDate;

/// Selected-state label meaning "apply no state filter".
pub const UNITED_STATES: &str = "United States";

/// State selection taken from the dashboard dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateFilter {
    /// The sentinel: every state is retained.
    UnitedStates,
    /// Retain only rows whose StateName equals this exactly.
    Named(String),
}

impl StateFilter {
    /// Build a filter from the dropdown label.
    pub fn from_label(label: &str) -> Self {
        if label == UNITED_STATES {
            StateFilter::UnitedStates
        } else {
            StateFilter::Named(label.to_string())
        }
    }

    /// Case-sensitive exact match; the sentinel matches everything.
    pub fn matches(&self, state: &str) -> bool {
        match self {
            StateFilter::UnitedStates => true,
            StateFilter::Named(name) => name == state,
        }
    }
}

/// An inclusive calendar date range, normalized so start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Build a span from two bounds, swapping them if given in reverse.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Return the records matching both the state selection and the date span.
///
/// The two dimensions are independent: filtering by state then date gives
/// the same subset as date then state. An empty result is a valid outcome,
/// not an error; the caller renders an empty chart or table for it.
pub fn filter_records(records: &[LongRecord], state: &StateFilter, span: DateSpan) -> Vec<LongRecord> {
    records
        .iter()
        .filter(|r| state.matches(&r.state) && span.contains(r.date))
        .cloned()
        .collect()
}
