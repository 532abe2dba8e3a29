//! Dropdown selector for the bar chart's Olympic year.

use crate::state::AppState;
use dioxus::prelude::*;
use omd_medals::year::YearSelection;

/// Year dropdown: "All Years" plus one entry per edition, labeled with its host.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.options.read().years.clone();
    let selected = (state.selected_year)().to_string();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<YearSelection>() {
        Ok(year) => state.selected_year.set(year),
        Err(e) => log::warn!("[OMD] ignoring year selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-dropdown",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Select Olympic Year (for Bar Chart):"
            }
            select {
                id: "year-dropdown",
                style: "width: 100%;",
                onchange: on_change,
                for year in years.iter() {
                    option {
                        value: "{year.value}",
                        selected: year.value == selected,
                        "{year.label}"
                    }
                }
            }
        }
    }
}
