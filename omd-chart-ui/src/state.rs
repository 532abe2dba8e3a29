//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The three selector signals are the only values that change after load.

use dioxus::prelude::*;
use omd_db::models::DropdownOptions;
use omd_db::WorkingTable;
use omd_medals::metric::MedalMetric;
use omd_medals::year::YearSelection;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Working table (None until the dataset has loaded)
    pub table: Signal<Option<WorkingTable>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Fatal load error, if any
    pub error_msg: Signal<Option<String>>,
    /// Dropdown option lists, fixed once loaded
    pub options: Signal<DropdownOptions>,
    /// Country driving the pie chart
    pub selected_country: Signal<Option<String>>,
    /// Metric driving the map, area and bar charts
    pub selected_medal: Signal<MedalMetric>,
    /// Year driving the bar chart
    pub selected_year: Signal<YearSelection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            options: Signal::new(DropdownOptions::default()),
            selected_country: Signal::new(None),
            selected_medal: Signal::new(MedalMetric::default()),
            selected_year: Signal::new(YearSelection::default()),
        }
    }

    /// Install a freshly loaded table and its option lists, selecting the
    /// first country.
    pub fn install_table(&mut self, table: WorkingTable, options: DropdownOptions) {
        self.selected_country.set(options.default_country());
        self.options.set(options);
        self.table.set(Some(table));
        self.loading.set(false);
    }

    /// Record a fatal load failure.
    pub fn fail(&mut self, message: String) {
        log::error!("[OMD] {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}
