//! Container div that D3.js renders charts into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the render functions target.
    pub id: String,
    /// Minimum height, so the layout doesn't jump while D3 draws.
    #[props(default = 420)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; min-height: {props.min_height}px;",
        }
    }
}
