//! Error taxonomy for the housing data pipeline.
//!
//! Every failure is terminal to the operation that produced it and
//! non-fatal to the process: the dashboard surfaces the error on the
//! affected section only and keeps rendering the others.

use thiserror::Error;

/// Errors produced by loading, reshaping, or aggregating housing tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// The source file is missing, truncated, or structurally wrong
    /// (too few metadata columns, no date columns, unordered dates).
    #[error("failed to load {name}: {reason}")]
    Load { name: String, reason: String },

    /// A column header or range bound failed strict calendar parsing.
    #[error("'{label}' is not a valid YYYY-MM-DD date")]
    DateParse { label: String },

    /// An aggregation was requested over an empty filtered set.
    #[error("no data rows match the current filter")]
    NoData,

    /// The percent-change denominator (previous period mean) is zero.
    #[error("percent change is undefined: previous period mean is zero")]
    DivisionByZero,
}

impl MarketError {
    pub(crate) fn load(name: &str, reason: impl Into<String>) -> Self {
        Self::Load {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
