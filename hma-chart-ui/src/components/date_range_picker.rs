//! Date range picker bounded to the data's month span.

use crate::state::AppState;
use dioxus::prelude::*;
use hma_data::dates::{RANGE_MAX, RANGE_MIN};

/// Start/end date inputs for restricting every chart and table. Both
/// inputs are clamped to the dashboard's fixed bounds; a reversed pair
/// is tolerated because the core normalizes the span.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Filter By Date Range:" }
            label {
                "From "
                input {
                    r#type: "date",
                    min: RANGE_MIN,
                    max: RANGE_MAX,
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                "To "
                input {
                    r#type: "date",
                    min: RANGE_MIN,
                    max: RANGE_MAX,
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
