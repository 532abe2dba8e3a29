//! Browser interop: the dataset fetch and typed wrappers around the D3.js charts.
//!
//! D3.js chart functions are split across `assets/js/*.js` and embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. The render wrappers serialize a [`ChartSpec`] and call those
//! globals once D3, the scripts and the container element are all present.

use omd_db::charts::{ChartKind, ChartSpec};
use omd_medals::dataset::{check_status, fetch_error};
use omd_medals::error::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Embed all D3 chart JS files at compile time
static CHART_COMMON_JS: &str = include_str!("../assets/js/chart-common.js");
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static CHOROPLETH_CHART_JS: &str = include_str!("../assets/js/choropleth-chart.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Global functions promoted to `window` once the scripts are evaluated.
const CHART_GLOBALS: [&str; 9] = [
    "renderPieChart",
    "renderChoroplethChart",
    "renderAreaChart",
    "renderBarChart",
    "renderChartPlaceholder",
    "clearChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch a text resource with the browser `fetch` API. Single attempt.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| fetch_error(url, "no global window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| fetch_error(url, js_error(e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_error(url, js_error(e)))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| fetch_error(url, js_error(e)))?;

    check_status(url, response.status())?;

    let text_promise = response.text().map_err(|e| fetch_error(url, js_error(e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| fetch_error(url, js_error(e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| fetch_error(url, "response body is not text"))?;
    log::info!("[OMD] js_bridge: fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OMD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderPieChart(...)` via
/// `function` declarations. They are evaluated at global scope via indirect
/// `eval()` once D3 is ready, then each is promoted to `window.*` explicitly.
/// Safe to call more than once.
pub fn init_charts() {
    let all_js = [
        CHART_COMMON_JS,
        TOOLTIP_JS,
        PIE_CHART_JS,
        CHOROPLETH_CHART_JS,
        AREA_CHART_JS,
        BAR_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "if (!window.__omdChartsReady) {{ window.__omdChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n",
                name = name
            )
        })
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__omdChartsReady || window.__omdChartsPolling) return;
            window.__omdChartsPolling = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__omdChartScripts);
                    delete window.__omdChartScripts;
                    {promote}
                    window.__omdChartsReady = true;
                    console.log('OMD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        promote = promote
    );
    let _ = js_sys::eval(&init_js);
}

/// Name of the global render function for a chart kind.
fn render_function(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Pie => "renderPieChart",
        ChartKind::Choropleth => "renderChoroplethChart",
        ChartKind::StackedArea => "renderAreaChart",
        ChartKind::Bar => "renderBarChart",
    }
}

/// Render a chart spec into the given container.
///
/// Placeholder specs are drawn as an empty frame with the annotation text.
/// Uses a polling loop to wait for the chart scripts and the container DOM
/// element before rendering.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let spec_json = match spec.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("[OMD] js_bridge: failed to serialize chart spec: {}", e);
            return;
        }
    };
    let function = if spec.is_placeholder() {
        "renderChartPlaceholder"
    } else {
        render_function(spec.kind)
    };
    let escaped_spec = spec_json
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__omdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_spec}');
                    }} catch(e) {{ console.error('[OMD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_kind_has_a_promoted_renderer() {
        for kind in [
            ChartKind::Pie,
            ChartKind::Choropleth,
            ChartKind::StackedArea,
            ChartKind::Bar,
        ] {
            assert!(CHART_GLOBALS.contains(&render_function(kind)));
        }
        assert!(CHART_GLOBALS.contains(&"renderChartPlaceholder"));
    }

    #[test]
    fn embedded_scripts_define_their_globals() {
        let all_js = [
            CHART_COMMON_JS,
            TOOLTIP_JS,
            PIE_CHART_JS,
            CHOROPLETH_CHART_JS,
            AREA_CHART_JS,
            BAR_CHART_JS,
        ]
        .join("\n");
        for name in CHART_GLOBALS {
            assert!(
                all_js.contains(&format!("function {}(", name)),
                "missing JS function {}",
                name
            );
        }
    }
}
