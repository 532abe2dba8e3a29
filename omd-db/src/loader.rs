//! Populating the working table from parsed source rows.
//!
//! Source CSV format (with headers, extra columns ignored):
//! `Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze`
//!
//! Each row is normalized (`United States` becomes `United States of America`
//! so the choropleth can match it), rows outside 1992-2020 or without a
//! country name are dropped, and `total_medals` is derived as
//! gold + silver + bronze.

use crate::WorkingTable;
use omd_medals::record::MedalRecord;
use rusqlite::params;

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LoadSummary {
    pub read: usize,
    pub renamed: usize,
    pub unnamed: usize,
    pub kept: usize,
}

impl WorkingTable {
    /// Insert the working subset of `records`. Only called during construction.
    pub(crate) fn load_records(&self, records: Vec<MedalRecord>) -> anyhow::Result<LoadSummary> {
        let mut summary = LoadSummary {
            read: records.len(),
            ..LoadSummary::default()
        };

        let mut stmt = self.conn.prepare(
            "INSERT INTO medals
             (year, host_country, host_city, country_name, country_code, gold, silver, bronze, total_medals)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;

        for mut record in records {
            if record.normalize_country_name() {
                summary.renamed += 1;
            }
            if !record.in_working_range() {
                continue;
            }
            if record.country_name.is_empty() {
                summary.unnamed += 1;
                continue;
            }
            stmt.execute(params![
                record.year,
                record.host_country,
                record.host_city,
                record.country_name,
                record.country_code,
                record.gold,
                record.silver,
                record.bronze,
                record.total_medals(),
            ])?;
            summary.kept += 1;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{sample_table, SAMPLE_CSV};
    use crate::WorkingTable;
    use omd_medals::record::MedalRecord;

    #[test]
    fn load_keeps_only_working_years() {
        let table = sample_table();
        let (count, min_year, max_year): (i64, i32, i32) = table
            .conn
            .query_row("SELECT COUNT(*), MIN(year), MAX(year) FROM medals", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .unwrap();
        assert_eq!(count, 22);
        assert_eq!(min_year, 1992);
        assert_eq!(max_year, 2016);
    }

    #[test]
    fn load_renames_united_states() {
        let table = sample_table();
        let old: i64 = table
            .conn
            .query_row(
                "SELECT COUNT(*) FROM medals WHERE country_name = 'United States'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let new: i64 = table
            .conn
            .query_row(
                "SELECT COUNT(*) FROM medals WHERE country_name = 'United States of America'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(old, 0, "source spelling should never survive the load");
        assert_eq!(new, 3);
    }

    #[test]
    fn load_derives_total_medals() {
        let table = sample_table();
        let mismatches: i64 = table
            .conn
            .query_row(
                "SELECT COUNT(*) FROM medals WHERE total_medals != gold + silver + bronze",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(mismatches, 0);

        let usa_2012: i64 = table
            .conn
            .query_row(
                "SELECT total_medals FROM medals
                 WHERE country_name = 'United States of America' AND year = 2012",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(usa_2012, 104);
    }

    #[test]
    fn load_summary_counts() {
        let records = MedalRecord::parse_medal_csv(SAMPLE_CSV).unwrap();
        let table = WorkingTable::from_records(Vec::new()).unwrap();
        let summary = table.load_records(records).unwrap();
        assert_eq!(summary.read, 24);
        // 1988 USA row is renamed too, then dropped by the year filter.
        assert_eq!(summary.renamed, 4);
        assert_eq!(summary.kept, 22);
    }

    #[test]
    fn rows_without_country_are_dropped() {
        let csv = "\
Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze
2012,Great Britain,London,,,1,0,0
2012,Great Britain,London,China,CHN,38,27,23
";
        let records = MedalRecord::parse_medal_csv(csv).unwrap();
        let table = WorkingTable::from_records(Vec::new()).unwrap();
        let summary = table.load_records(records).unwrap();
        assert_eq!(summary.unnamed, 1);
        assert_eq!(summary.kept, 1);
        assert_eq!(table.query_countries().unwrap(), vec!["China".to_string()]);

        let map = table
            .map_chart(omd_medals::metric::MedalMetric::Gold)
            .unwrap();
        assert_eq!(map.row_count(), 1);
        assert_eq!(map.data[0]["country"], "China");
    }

    #[test]
    fn largest_counts_keep_their_true_total() {
        let csv = "\
Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze
2012,Great Britain,London,Atlantis,ATL,4294967295,1,0
";
        let table = WorkingTable::from_csv(csv).unwrap();
        let map = table
            .map_chart(omd_medals::metric::MedalMetric::TotalMedals)
            .unwrap();
        assert_eq!(map.data[0]["country"], "Atlantis");
        assert_eq!(map.data[0]["value"], 4_294_967_296_i64);
    }

    #[test]
    fn reloading_is_deterministic() {
        let first = WorkingTable::from_csv(SAMPLE_CSV).unwrap();
        let second = WorkingTable::from_csv(SAMPLE_CSV).unwrap();

        let totals = |table: &WorkingTable| -> Vec<(String, i32, i64)> {
            let mut stmt = table
                .conn
                .prepare(
                    "SELECT country_name, year, total_medals FROM medals
                     ORDER BY country_name, year",
                )
                .unwrap();
            stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        };

        assert_eq!(first.row_count().unwrap(), second.row_count().unwrap());
        assert_eq!(totals(&first), totals(&second));
    }
}
