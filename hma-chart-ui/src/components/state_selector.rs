//! Dropdown selector for filtering by U.S. state.

use crate::state::AppState;
use crate::us_states::US_STATES;
use dioxus::prelude::*;

/// State dropdown. Offers the fixed state list with the "United States"
/// sentinel first; unknown names cannot be entered, so the core only
/// ever sees the sentinel or a real state label.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_state)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_state.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Filter By State: "
            }
            select {
                id: "state-select",
                onchange: on_change,
                for name in US_STATES.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
