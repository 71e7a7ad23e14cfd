//! Core data reshaping for the U.S. housing market dashboard.
//!
//! The source data is three wide CSV tables (monthly listing price, home
//! value, and sale count), one row per metro region and one column per
//! month. This crate owns everything between those files and the chart
//! layer:
//!
//! - [`WideTable`]: strict wide-CSV loading (metadata/date header split,
//!   calendar-parsed column labels, missing cells kept as `None`)
//! - [`to_long`]: melt into (state, date, value) records, optionally
//!   averaging regions per state first
//! - [`filter_records`]: state + inclusive date-range filtering with the
//!   "United States" sentinel meaning no state restriction
//! - [`latest_average`] / [`percent_change`]: the summary-box metrics
//! - [`MarketData`]: all three tables loaded once at startup into an
//!   immutable context that clones cheaply into UI closures
//!
//! Everything is synchronous and pure: transforms return new derived
//! values and never mutate a loaded table.
//!
//! # Usage
//!
//! ```rust
//! use hma_data::{to_long, WideTable};
//!
//! let csv = "\
//! RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29
//! 1,1,\"Los Angeles, CA\",msa,California,100,110
//! 2,2,\"Dallas, TX\",msa,Texas,200,190
//! ";
//! let table = WideTable::from_csv("home_value.csv", csv).unwrap();
//! let records = to_long(&table, true);
//! assert_eq!(records.len(), 2 * 2); // two states, two months
//! ```

pub mod dataset;
pub mod dates;
pub mod error;
pub mod filter;
pub mod long;
pub mod market;
pub mod metrics;
pub mod wide;

pub use dataset::Dataset;
pub use error::MarketError;
pub use filter::{filter_records, DateSpan, StateFilter, UNITED_STATES};
pub use long::{to_long, LongRecord};
pub use market::MarketData;
pub use metrics::{latest_average, percent_change};
pub use wide::{GridView, WideRow, WideTable};
