//! Reusable Dioxus RSX components for the medals dashboard.

mod chart_container;
mod chart_header;
mod country_selector;
mod error_display;
mod loading_spinner;
mod medal_type_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use country_selector::CountrySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use medal_type_selector::MedalTypeSelector;
pub use year_selector::YearSelector;
