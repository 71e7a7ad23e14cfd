//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at
//! compile time, and are evaluated as globals (no ES modules) once D3 is
//! available. Render calls poll until the scripts are ready and the
//! target container exists, then hand over serialized JSON.

// Embed the chart JS files at compile time.
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static STATE_LINE_CHART_JS: &str = include_str!("../assets/js/state-line-chart.js");
static MARKET_TABLE_JS: &str = include_str!("../assets/js/market-table.js");

/// Execute arbitrary JS, wrapped in try/catch so a bad snippet logs
/// instead of aborting the WASM module.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HMA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart scripts with a wait-for-D3 polling loop.
///
/// The scripts declare plain `function`s; evaluating them inside the
/// polling callback would block-scope them, so they are stashed on
/// `window`, indirect-eval'd at global scope once D3 shows up, and then
/// promoted to `window.*` explicitly. `window.__hmaChartsReady` flags
/// completion for the render wrappers.
pub fn init_charts() {
    log::info!("[HMA Debug] js_bridge: scheduling chart script init");
    let all_js = [TOOLTIP_JS, STATE_LINE_CHART_JS, MARKET_TABLE_JS].join("\n");

    let store_js = format!(
        "window.__hmaChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__hmaChartScripts);
                    delete window.__hmaChartScripts;
                    if (typeof renderStateLineChart !== 'undefined') window.renderStateLineChart = renderStateLineChart;
                    if (typeof renderMarketTable !== 'undefined') window.renderMarketTable = renderMarketTable;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__hmaChartsReady = true;
                    console.log('HMA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the per-state line chart into `container_id`.
///
/// `data_json` is a flat array of `{state, date, value}` points;
/// `config_json` carries the title and axis label.
pub fn render_state_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderStateLineChart", container_id, data_json, config_json);
}

/// Render the filtered wide table as a data grid into `container_id`.
pub fn render_market_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMarketTable", container_id, data_json, config_json);
}

/// Empty a container (used when a section switches to an error state).
pub fn clear_container(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Shared polling wrapper: wait until the scripts are initialized and
/// the container exists, then invoke the named global render function.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hmaChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[HMA] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
