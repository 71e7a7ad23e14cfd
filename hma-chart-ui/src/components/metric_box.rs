//! Summary value box (latest average, percent change).

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricBoxProps {
    pub label: String,
    /// Pre-formatted value; `None` renders the no-data state. A metric
    /// that cannot be computed must never show a stand-in number.
    pub value: Option<String>,
}

#[component]
pub fn MetricBox(props: MetricBoxProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 12px 16px; background: #F7F7F7; border: 1px solid #E0E0E0; border-radius: 4px;",
            p {
                style: "margin: 0 0 4px 0; font-size: 12px; color: #777; text-transform: uppercase;",
                "{props.label}"
            }
            if let Some(value) = &props.value {
                p {
                    style: "margin: 0; font-size: 22px; font-weight: bold;",
                    "{value}"
                }
            } else {
                p {
                    style: "margin: 0; font-size: 22px; color: #AAA;",
                    "No data"
                }
            }
        }
    }
}
