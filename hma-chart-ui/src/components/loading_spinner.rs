//! Loading indicator shown while the embedded CSVs are parsed.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; padding: 48px; color: #777; font-style: italic;",
            "Loading housing data..."
        }
    }
}
