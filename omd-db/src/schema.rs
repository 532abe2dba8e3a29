//! SQL schema for the in-memory working table.
//!
//! The schema is applied as a single batch when the table is created.

use omd_medals::metric::MedalMetric;

/// Returns the full SQL schema as a single batch string.
///
/// `medals` holds one row per (year, country) entry of the source data that
/// survived the 1992-2020 filter. `total_medals` is stored rather than
/// computed per query so every metric is a plain column.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS medals (
        year INTEGER NOT NULL,
        host_country TEXT NOT NULL,
        host_city TEXT NOT NULL,
        country_name TEXT NOT NULL,
        country_code TEXT NOT NULL,
        gold INTEGER NOT NULL,
        silver INTEGER NOT NULL,
        bronze INTEGER NOT NULL,
        total_medals INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_medals_country ON medals(country_name);
    CREATE INDEX IF NOT EXISTS idx_medals_year ON medals(year);
    "#
}

/// SQL column holding the given metric.
///
/// Metric columns are interpolated into query text, so only these fixed
/// names may ever reach SQL.
pub fn metric_column(metric: MedalMetric) -> &'static str {
    match metric {
        MedalMetric::Gold => "gold",
        MedalMetric::Silver => "silver",
        MedalMetric::Bronze => "bronze",
        MedalMetric::TotalMedals => "total_medals",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_medals_table_and_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for (kind, name) in [
            ("table", "medals"),
            ("index", "idx_medals_country"),
            ("index", "idx_medals_year"),
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
                    [kind, name],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} '{}' should exist", kind, name);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }

    #[test]
    fn every_metric_maps_to_a_schema_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        for metric in MedalMetric::ALL {
            let sql = format!("SELECT SUM({}) FROM medals", metric_column(metric));
            conn.prepare(&sql)
                .unwrap_or_else(|e| panic!("column for {} should exist: {}", metric, e));
        }
    }
}
