//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use omd_medals::metric::MedalMetric;
use serde::Serialize;

/// One slice of a country's medal pie.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedalCount {
    /// Gold, Silver or Bronze.
    pub medal: MedalMetric,
    /// Medals of this color won across 1992-2020.
    pub count: i64,
    /// Fixed slice color.
    pub color: String,
}

/// A (country, value) pair for the map and bar charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryValue {
    pub country: String,
    pub value: i64,
}

/// A (country, year, value) triple for the stacked area chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryYearValue {
    pub country: String,
    pub year: i32,
    pub value: i64,
}

/// Host of one Olympic edition.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearHost {
    pub year: i32,
    pub host_city: String,
    pub host_country: String,
}

impl YearHost {
    /// Dropdown and title label, e.g. `2012 - London, Great Britain`.
    pub fn label(&self) -> String {
        format!("{} - {}, {}", self.year, self.host_city, self.host_country)
    }
}

/// A `<select>` option.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The three dropdown option lists, computed once from the working table.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct DropdownOptions {
    /// Distinct country names, sorted.
    pub countries: Vec<SelectOption>,
    /// Gold, Silver, Bronze, Total_Medals.
    pub medal_types: Vec<SelectOption>,
    /// "All" followed by each edition in year order.
    pub years: Vec<SelectOption>,
}

impl DropdownOptions {
    /// Initial country selection: the first country alphabetically.
    pub fn default_country(&self) -> Option<String> {
        self.countries.first().map(|c| c.value.clone())
    }
}
