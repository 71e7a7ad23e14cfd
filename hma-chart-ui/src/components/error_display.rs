//! Per-section error indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows a failure for one dashboard section without taking down the
/// others.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #FDECEA; color: #B3261E; border-left: 4px solid #B3261E; border-radius: 2px;",
            "Unable to display this data: {props.message}"
        }
    }
}
