//! Calendar date helpers shared across the workspace.

use crate::error::MarketError;
use chrono::NaiveDate;

/// Date format used for column headers and the range control: "YYYY-MM-DD".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest date selectable in the dashboard's range control.
pub const RANGE_MIN: &str = "2000-01-31";

/// Latest date selectable in the dashboard's range control.
pub const RANGE_MAX: &str = "2024-12-31";

/// Parse a "YYYY-MM-DD" string into a calendar date.
///
/// Strict: anything that does not parse is an error, never a
/// passed-through raw string.
pub fn parse_date(s: &str) -> Result<NaiveDate, MarketError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| MarketError::DateParse {
        label: s.trim().to_string(),
    })
}

/// Format a calendar date as "YYYY-MM-DD".
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
