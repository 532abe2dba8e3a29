//! Dropdown selector for the pie chart's country.

use crate::state::AppState;
use dioxus::prelude::*;

/// Country dropdown selector.
/// Reads the country options from AppState and updates selected_country on change.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let countries = state.options.read().countries.clone();
    let selected = (state.selected_country)().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state
            .selected_country
            .set(if value.is_empty() { None } else { Some(value) });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "country-dropdown",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Select Country (for Pie Chart):"
            }
            select {
                id: "country-dropdown",
                style: "width: 100%;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "-- none --"
                }
                for country in countries.iter() {
                    option {
                        value: "{country.value}",
                        selected: country.value == selected,
                        "{country.label}"
                    }
                }
            }
        }
    }
}
