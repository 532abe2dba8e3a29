//! Dropdown selector for the medal metric.

use crate::state::AppState;
use dioxus::prelude::*;
use omd_medals::metric::MedalMetric;

/// Medal type dropdown. Drives the map, area and bar charts.
#[component]
pub fn MedalTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let medal_types = state.options.read().medal_types.clone();
    let selected = (state.selected_medal)().column();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<MedalMetric>() {
        Ok(metric) => state.selected_medal.set(metric),
        Err(e) => log::warn!("[OMD] ignoring medal selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "medal-type-dropdown",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Select Medal Type (for Map, Area, Bar Charts):"
            }
            select {
                id: "medal-type-dropdown",
                style: "width: 100%;",
                onchange: on_change,
                for medal in medal_types.iter() {
                    option {
                        value: "{medal.value}",
                        selected: medal.value == selected,
                        "{medal.label}"
                    }
                }
            }
        }
    }
}
