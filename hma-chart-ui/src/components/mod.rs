//! Reusable Dioxus RSX components for the housing dashboard.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod metric_box;
mod state_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_box::MetricBox;
pub use state_selector::StateSelector;
