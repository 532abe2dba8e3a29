//! Core types and dataset loader for Summer Olympic medal counts.
//!
//! This crate owns everything that does not need a database or a UI:
//! - `record`: the `MedalRecord` row type and the CSV parser with header validation
//! - `metric`: the four selectable medal metrics
//! - `year`: the "All" / single-year selection used by the bar chart
//! - `dataset`: the default dataset location and (with the `api` feature) the HTTP fetch
//! - `error`: the typed `LoadError` returned when the dataset cannot be used

pub mod dataset;
pub mod error;
pub mod metric;
pub mod record;
pub mod year;

/// First Olympic year kept in the working table.
pub const FIRST_YEAR: i32 = 1992;

/// Last Olympic year kept in the working table.
pub const LAST_YEAR: i32 = 2020;

/// Number of countries shown by the top-N charts.
pub const TOP_N: usize = 10;

/// Country name as it appears in the source data.
pub const SOURCE_US_NAME: &str = "United States";

/// Country name expected by the choropleth's `country names` location mode.
pub const MAP_US_NAME: &str = "United States of America";

/// Human-readable label for the 1992-2020 range, used in titles and the year dropdown.
pub fn year_range_label() -> String {
    format!("{}-{}", FIRST_YEAR, LAST_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_label_uses_bounds() {
        assert_eq!(year_range_label(), "1992-2020");
    }
}
