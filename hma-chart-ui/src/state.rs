//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the filter signals and the loaded market data into
//! a single struct provided via `use_context_provider`. Components
//! retrieve it with `use_context::<AppState>()`; any signal write
//! re-runs the effects that read it, which is the entire
//! filter-and-recompute cycle.

use dioxus::prelude::*;
use hma_data::dates::{RANGE_MAX, RANGE_MIN};
use hma_data::{MarketData, UNITED_STATES};

/// Shared state for the housing dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded market tables (None until the mount effect parses them).
    pub market: Signal<Option<MarketData>>,
    /// Whether the app is still loading.
    pub loading: Signal<bool>,
    /// App-level error (nothing loaded at all); per-section errors live
    /// in the sections themselves.
    pub error_msg: Signal<Option<String>>,
    /// Currently selected state label, "United States" for no filter.
    pub selected_state: Signal<String>,
    /// Date range bounds as "YYYY-MM-DD" strings from the pickers.
    pub start_date: Signal<String>,
    pub end_date: Signal<String>,
}

impl AppState {
    /// Create an AppState with the full date range and no state filter.
    pub fn new() -> Self {
        Self {
            market: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_state: Signal::new(UNITED_STATES.to_string()),
            start_date: Signal::new(RANGE_MIN.to_string()),
            end_date: Signal::new(RANGE_MAX.to_string()),
        }
    }
}
