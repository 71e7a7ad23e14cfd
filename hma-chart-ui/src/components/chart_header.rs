//! Section header: title plus the y-axis unit.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// What the y-axis measures, e.g. "Average Home Value ($)".
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h2 {
                style: "margin: 0 0 2px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #777;",
                    "{props.unit_description}"
                }
            }
        }
    }
}
