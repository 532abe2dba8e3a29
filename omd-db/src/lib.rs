//! In-memory SQLite working table for the Olympic medals dashboard.
//!
//! The medal CSV is parsed by `omd-medals`, normalized, restricted to the
//! 1992-2020 editions, and inserted once into an in-memory SQLite database.
//! After construction the table is only ever read: every aggregation is a
//! `SELECT ... GROUP BY ... SUM(...)` query returning serializable models.
//!
//! # Architecture
//!
//! - `Rc<Connection>` handle, cheap to clone across Dioxus components in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Typed query methods returning serializable structs ([`models`])
//! - Chart specifications built on top of the queries ([`charts`]), ready to
//!   hand to D3.js as JSON
//!
//! # Usage
//!
//! ```rust
//! use omd_db::WorkingTable;
//! use omd_medals::metric::MedalMetric;
//! use omd_medals::year::YearSelection;
//!
//! let table = WorkingTable::from_csv(
//!     "Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze\n\
//!      2012,Great Britain,London,United States,USA,46,29,29\n\
//!      2012,Great Britain,London,China,CHN,38,27,23\n",
//! )
//! .unwrap();
//!
//! let countries = table.query_countries().unwrap();
//! assert_eq!(countries, vec!["China", "United States of America"]);
//!
//! let bar = table.bar_chart(MedalMetric::Gold, YearSelection::All).unwrap();
//! assert_eq!(bar.title, "Top 10 Countries by Gold in All Years (1992-2020)");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema. There is a single
//! `medals` table holding the working rows, including the derived
//! `total_medals` column.

pub mod charts;
mod loader;
pub mod models;
mod queries;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_fixtures;

use omd_medals::record::MedalRecord;
use rusqlite::Connection;
use std::rc::Rc;

/// The filtered, derived medal dataset every chart reads from.
///
/// Built once by [`WorkingTable::from_csv`] or [`WorkingTable::from_records`];
/// no method mutates it afterwards. Clones share the same connection.
///
/// # Example
///
/// ```rust
/// use omd_db::WorkingTable;
///
/// let table = WorkingTable::from_csv(
///     "Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze\n\
///      1988,South Korea,Seoul,Kenya,KEN,5,2,2\n\
///      2016,Brazil,Rio de Janeiro,Kenya,KEN,6,6,1\n",
/// )
/// .unwrap();
/// assert_eq!(table.row_count().unwrap(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct WorkingTable {
    conn: Rc<Connection>,
}

// Connection has no PartialEq; two handles are equal when they share it.
impl PartialEq for WorkingTable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl WorkingTable {
    /// Parse the dataset CSV and build the working table.
    ///
    /// Fails if the CSV cannot be parsed or is missing a required column.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let records = MedalRecord::parse_medal_csv(csv_data)?;
        Self::from_records(records)
    }

    /// Build the working table from already-parsed source rows.
    ///
    /// Applies the country-name normalization and the 1992-2020 filter.
    pub fn from_records(records: Vec<MedalRecord>) -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        let table = Self {
            conn: Rc::new(conn),
        };
        let summary = table.load_records(records)?;
        log::info!(
            "[OMD] loader: read {} rows, renamed {}, dropped {} without a country, kept {} in {}",
            summary.read,
            summary.renamed,
            summary.unnamed,
            summary.kept,
            omd_medals::year_range_label()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sample_table, SAMPLE_CSV};

    #[test]
    fn table_builds_from_csv() {
        let table = WorkingTable::from_csv(SAMPLE_CSV);
        assert!(table.is_ok(), "Working table should build without errors");
    }

    #[test]
    fn table_is_cloneable() {
        let table = sample_table();
        let table2 = table.clone();
        assert!(table == table2, "Clone should share the same connection");
        assert_eq!(table.row_count().unwrap(), table2.row_count().unwrap());
    }

    #[test]
    fn separately_built_tables_are_distinct() {
        assert!(sample_table() != sample_table());
    }

    #[test]
    fn missing_columns_fail_the_load() {
        let err = WorkingTable::from_csv("Year,Country_Name,Gold\n2012,China,38\n")
            .err()
            .expect("load should fail");
        let msg = err.to_string();
        assert!(msg.contains("Host_country"), "got: {}", msg);
        assert!(msg.contains("Bronze"), "got: {}", msg);
    }

    #[test]
    fn empty_dataset_builds_empty_table() {
        let table = WorkingTable::from_csv(
            "Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze\n",
        )
        .unwrap();
        assert_eq!(table.row_count().unwrap(), 0);
        assert!(table.query_countries().unwrap().is_empty());
    }
}
