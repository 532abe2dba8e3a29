//! Olympic Medals Dashboard (1992-2020)
//!
//! Four linked D3.js charts over the Summer Olympic medal table:
//! - pie: one country's Gold/Silver/Bronze split (country selector)
//! - choropleth: every country's total for the chosen medal type
//! - stacked area: the top 10 countries' per-edition totals
//! - bar: the top 10 countries for all years or one edition (year selector)
//!
//! Data flow:
//! 1. On mount the dataset CSV is fetched once from its published URL.
//! 2. The CSV is validated and loaded into the in-memory working table;
//!    the dropdown option lists are computed from it. Any failure here is
//!    fatal and shown in place of the dashboard.
//! 3. Each chart has its own effect that re-runs only when the selectors it
//!    reads change, builds a `ChartSpec`, and hands it to D3.js.

use dioxus::prelude::*;
use omd_chart_ui::components::{
    ChartContainer, ChartHeader, CountrySelector, ErrorDisplay, LoadingSpinner, MedalTypeSelector,
    YearSelector,
};
use omd_chart_ui::js_bridge;
use omd_chart_ui::state::AppState;
use omd_db::charts::ChartSpec;
use omd_db::WorkingTable;
use omd_medals::dataset::DEFAULT_DATASET_URL;
use omd_medals::year_range_label;

/// Chart container DOM element IDs used by D3.js to render into.
const PIE_CHART_ID: &str = "pie-chart";
const MAP_CHART_ID: &str = "map-chart";
const AREA_CHART_ID: &str = "area-chart";
const BAR_CHART_ID: &str = "bar-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new().launch(App);
}

/// Draw a built spec, or clear the container if the query failed.
fn render_spec(container_id: &str, spec: anyhow::Result<ChartSpec>) {
    match spec {
        Ok(spec) => js_bridge::render_chart(container_id, &spec),
        Err(e) => {
            log::error!("[OMD] {}: chart query failed: {}", container_id, e);
            js_bridge::destroy_chart(container_id);
        }
    }
}

/// Load the dataset into a working table and compute the dropdown options.
async fn load_dashboard(mut state: AppState) {
    let csv_data = match js_bridge::fetch_text(DEFAULT_DATASET_URL).await {
        Ok(body) => body,
        Err(e) => {
            state.fail(e.to_string());
            return;
        }
    };

    let table = match WorkingTable::from_csv(&csv_data) {
        Ok(table) => table,
        Err(e) => {
            state.fail(e.to_string());
            return;
        }
    };

    match table.query_dropdown_options() {
        Ok(options) => {
            state.install_table(table, options);
            js_bridge::init_charts();
        }
        Err(e) => state.fail(format!("Failed to build dropdown options: {}", e)),
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Load once on mount ───
    use_effect(move || {
        spawn(load_dashboard(state));
    });

    // ─── Pie: country ───
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let country = (state.selected_country)();
        render_spec(PIE_CHART_ID, table.pie_chart(country.as_deref()));
    });

    // ─── Map: medal type ───
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let metric = (state.selected_medal)();
        render_spec(MAP_CHART_ID, table.map_chart(metric));
    });

    // ─── Area: medal type ───
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let metric = (state.selected_medal)();
        render_spec(AREA_CHART_ID, table.area_chart(metric));
    });

    // ─── Bar: medal type + year ───
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let metric = (state.selected_medal)();
        let year = (state.selected_year)();
        render_spec(BAR_CHART_ID, table.bar_chart(metric, year));
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; margin-bottom: 40px;",
                "Olympic Medals Dashboard ({year_range_label()})"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "width: 80%; margin: 0 auto;",
                    YearSelector {}
                    MedalTypeSelector {}
                    CountrySelector {}
                }

                ChartHeader {
                    title: "Medal Insights".to_string(),
                    caption: "Country breakdown and world map".to_string(),
                }
                ChartContainer { id: PIE_CHART_ID.to_string() }
                ChartContainer { id: MAP_CHART_ID.to_string() }

                ChartHeader {
                    title: "Top Countries Over Time".to_string(),
                    caption: "The ten leading countries for the selected medal type".to_string(),
                }
                ChartContainer { id: AREA_CHART_ID.to_string() }
                ChartContainer { id: BAR_CHART_ID.to_string() }
            }
        }
    }
}
