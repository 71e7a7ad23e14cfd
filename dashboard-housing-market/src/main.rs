//! United States Housing Market Analysis
//!
//! Single-page dashboard over three wide-format housing series (listing
//! price, home value, sale count), filtered by state and date range.
//!
//! Data flow:
//! 1. `build.rs` copies the wide CSVs from `fixtures/` into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, each CSV is parsed independently into a `MarketData`
//!    slot; a malformed file degrades only its own section.
//! 4. Each section's effect re-runs the reshape -> filter -> render
//!    pipeline whenever the state or date-range signals change, and
//!    recomputes its two summary metrics from the wide table.

use dioxus::prelude::*;
use hma_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, LoadingSpinner, MetricBox,
    StateSelector,
};
use hma_chart_ui::js_bridge;
use hma_chart_ui::state::AppState;
use hma_data::{
    dates, filter_records, latest_average, percent_change, to_long, DateSpan, Dataset, MarketData,
    StateFilter,
};
use wasm_bindgen::JsValue;

const LISTING_PRICE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/listing_price.csv"));
const HOME_VALUE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/home_value.csv"));
const SALE_COUNT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sale_count.csv"));

/// Rows shown in each data grid before truncation.
const GRID_MAX_ROWS: usize = 200;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("housing-market-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded CSVs once on mount.
    use_effect(move || {
        let market = MarketData::from_csv_strs(LISTING_PRICE_CSV, HOME_VALUE_CSV, SALE_COUNT_CSV);
        if market.is_empty() {
            state
                .error_msg
                .set(Some("No housing data could be loaded.".to_string()));
        }
        for dataset in Dataset::ALL {
            if let Ok(table) = market.table(dataset) {
                web_sys::console::log_1(&JsValue::from(format!(
                    "[HMA Debug] app: {} ready ({} regions, {} states)",
                    dataset.slug(),
                    table.rows().len(),
                    table.states().len()
                )));
            }
        }
        state.market.set(Some(market));
        state.loading.set(false);
        js_bridge::init_charts();
    });

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 12px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; font-size: 24px;",
                "United States Housing Market Analysis"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 32px; flex-wrap: wrap; padding: 8px 0; border-bottom: 1px solid #E0E0E0;",
                    StateSelector {}
                    DateRangePicker {}
                }

                for dataset in Dataset::ALL {
                    MarketSection { dataset }
                }
            }
        }
    }
}

/// One dashboard section: summary metrics, line chart, and data grid for
/// a single housing series.
#[component]
fn MarketSection(dataset: Dataset) -> Element {
    let state = use_context::<AppState>();
    let mut section_error: Signal<Option<String>> = use_signal(|| None);
    let mut latest: Signal<Option<String>> = use_signal(|| None);
    let mut change: Signal<Option<String>> = use_signal(|| None);

    let chart_id = format!("{}-chart", dataset.slug());
    let table_id = format!("{}-table", dataset.slug());

    // Recompute whenever the selected state or date range changes.
    use_effect({
        let chart_id = chart_id.clone();
        let table_id = table_id.clone();
        move || {
            if (state.loading)() {
                return;
            }
            let market = match &*state.market.read() {
                Some(market) => market.clone(),
                None => return,
            };
            let selected = (state.selected_state)();
            let start = (state.start_date)();
            let end = (state.end_date)();
            if start.is_empty() || end.is_empty() {
                return;
            }

            let table = match market.table(dataset) {
                Ok(table) => table,
                Err(e) => {
                    section_error.set(Some(e.to_string()));
                    return;
                }
            };
            let span = match (dates::parse_date(&start), dates::parse_date(&end)) {
                (Ok(a), Ok(b)) => DateSpan::new(a, b),
                (Err(e), _) | (_, Err(e)) => {
                    section_error.set(Some(e.to_string()));
                    return;
                }
            };
            section_error.set(None);
            let selection = StateFilter::from_label(&selected);

            // Chart: state-averaged long records inside the span. Missing
            // values stay in the records but cannot be plotted, so they
            // are skipped at this boundary only.
            let records = filter_records(&to_long(table, true), &selection, span);
            let points: Vec<serde_json::Value> = records
                .iter()
                .filter_map(|r| {
                    r.value.map(|v| {
                        serde_json::json!({
                            "state": r.state,
                            "date": dates::format_date(&r.date),
                            "value": v,
                        })
                    })
                })
                .collect();
            let data_json = serde_json::to_string(&points).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": dataset.title(),
                "yAxisLabel": dataset.axis_label(),
            })
            .to_string();
            js_bridge::render_state_line_chart(&chart_id, &data_json, &config_json);

            // Data grid: wide rows for the selection, date columns
            // windowed to the span.
            let grid = table.grid_view(&selection, &span);
            let grid_json = serde_json::to_string(&grid).unwrap_or_default();
            let table_config = serde_json::json!({ "maxRows": GRID_MAX_ROWS }).to_string();
            js_bridge::render_market_table(&table_id, &grid_json, &table_config);

            // Summary boxes, computed on the wide table directly.
            latest.set(match latest_average(table, &selection) {
                Ok(v) => Some(dataset.format_value(v)),
                Err(e) => {
                    log::warn!("[HMA Debug] {}: latest average: {}", dataset.slug(), e);
                    None
                }
            });
            change.set(match percent_change(table, &selection) {
                Ok(v) => Some(format_percent(v)),
                Err(e) => {
                    log::warn!("[HMA Debug] {}: percent change: {}", dataset.slug(), e);
                    None
                }
            });
        }
    });

    rsx! {
        section {
            style: "margin-bottom: 32px;",

            ChartHeader {
                title: dataset.title().to_string(),
                unit_description: dataset.axis_label().to_string(),
            }

            if let Some(err) = section_error() {
                ErrorDisplay { message: err }
            } else {
                div {
                    style: "display: flex; gap: 12px; margin-bottom: 8px;",
                    MetricBox {
                        label: "Latest Average".to_string(),
                        value: latest(),
                    }
                    MetricBox {
                        label: "Change vs Previous Month".to_string(),
                        value: change(),
                    }
                }

                ChartContainer {
                    id: chart_id.clone(),
                }

                div {
                    id: "{table_id}",
                    style: "margin-top: 8px; overflow-x: auto;",
                }
            }
        }
    }
}

/// Format a ratio as a signed percentage: 0.013 -> "+1.3%".
fn format_percent(ratio: f64) -> String {
    format!("{}{:.1}%", if ratio >= 0.0 { "+" } else { "" }, ratio * 100.0)
}
