//! Typed query methods over the working table.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for the D3.js chart components.
//!
//! # Ranking
//!
//! Top-N queries order by the summed metric descending and break ties by
//! country name ascending, so equal totals always rank the same way.

use crate::models::{
    CountryValue, CountryYearValue, DropdownOptions, MedalCount, SelectOption, YearHost,
};
use crate::schema::metric_column;
use crate::WorkingTable;
use omd_medals::metric::MedalMetric;
use omd_medals::year::YearSelection;
use rusqlite::{params, OptionalExtension};

impl WorkingTable {
    /// Number of rows in the working table.
    pub fn row_count(&self) -> anyhow::Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM medals", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Distinct country names, sorted ascending.
    pub fn query_countries(&self) -> anyhow::Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT country_name FROM medals ORDER BY country_name")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("[OMD] query: query_countries returned {} records", rows.len());
        Ok(rows)
    }

    /// Distinct (year, host city, host country) triples in year order.
    pub fn query_year_hosts(&self) -> anyhow::Result<Vec<YearHost>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT year, host_city, host_country FROM medals
             ORDER BY year, host_city, host_country",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(YearHost {
                    year: row.get(0)?,
                    host_city: row.get(1)?,
                    host_country: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[OMD] query: query_year_hosts returned {} records", rows.len());
        Ok(rows)
    }

    /// Host of a given year, if that year is in the working table.
    ///
    /// A year with more than one host row resolves to the first in
    /// [`query_year_hosts`](Self::query_year_hosts) order.
    pub fn query_year_host(&self, year: i32) -> anyhow::Result<Option<YearHost>> {
        let host = self
            .conn
            .query_row(
                "SELECT year, host_city, host_country FROM medals
                 WHERE year = ?1
                 ORDER BY host_city, host_country
                 LIMIT 1",
                params![year],
                |row| {
                    Ok(YearHost {
                        year: row.get(0)?,
                        host_city: row.get(1)?,
                        host_country: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(host)
    }

    /// Gold, Silver and Bronze totals for one country across all years.
    ///
    /// Returns `None` when the country has no rows in the working table.
    pub fn query_country_medals(&self, country: &str) -> anyhow::Result<Option<Vec<MedalCount>>> {
        let (rows, gold, silver, bronze): (i64, i64, i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(gold), 0), COALESCE(SUM(silver), 0), COALESCE(SUM(bronze), 0)
             FROM medals
             WHERE country_name = ?1",
            params![country],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;
        if rows == 0 {
            log::info!("[OMD] query: query_country_medals found no rows for {}", country);
            return Ok(None);
        }

        let counts = MedalMetric::MEDALS
            .iter()
            .zip([gold, silver, bronze])
            .map(|(medal, count)| MedalCount {
                medal: *medal,
                count,
                color: medal.color().unwrap_or_default().to_string(),
            })
            .collect();
        Ok(Some(counts))
    }

    /// Sum of `metric` per country, one row for every country in the table.
    pub fn query_metric_by_country(&self, metric: MedalMetric) -> anyhow::Result<Vec<CountryValue>> {
        let sql = format!(
            "SELECT country_name, SUM({col}) FROM medals
             GROUP BY country_name
             ORDER BY country_name",
            col = metric_column(metric)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountryValue {
                    country: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[OMD] query: query_metric_by_country({}) returned {} records",
            metric,
            rows.len()
        );
        Ok(rows)
    }

    /// The `limit` countries with the largest sum of `metric`, largest first.
    ///
    /// With a specific year, only that year's rows are summed.
    pub fn query_top_countries(
        &self,
        metric: MedalMetric,
        year: YearSelection,
        limit: usize,
    ) -> anyhow::Result<Vec<CountryValue>> {
        let sql = format!(
            "SELECT country_name, SUM({col}) AS total FROM medals
             WHERE ?1 IS NULL OR year = ?1
             GROUP BY country_name
             ORDER BY total DESC, country_name ASC
             LIMIT ?2",
            col = metric_column(metric)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![year.year(), limit as i64], |row| {
                Ok(CountryValue {
                    country: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[OMD] query: query_top_countries({}, {}) returned {} records",
            metric,
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Per-year sums of `metric` for the `limit` countries with the largest
    /// all-years sum.
    ///
    /// Rows are ordered by country rank, then year.
    pub fn query_top_country_trends(
        &self,
        metric: MedalMetric,
        limit: usize,
    ) -> anyhow::Result<Vec<CountryYearValue>> {
        let sql = format!(
            "WITH top AS (
                SELECT country_name, SUM({col}) AS total FROM medals
                GROUP BY country_name
                ORDER BY total DESC, country_name ASC
                LIMIT ?1
             )
             SELECT m.country_name, m.year, SUM(m.{col})
             FROM medals m
             INNER JOIN top t ON m.country_name = t.country_name
             GROUP BY m.country_name, m.year, t.total
             ORDER BY t.total DESC, m.country_name ASC, m.year ASC",
            col = metric_column(metric)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(CountryYearValue {
                    country: row.get(0)?,
                    year: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[OMD] query: query_top_country_trends({}) returned {} records",
            metric,
            rows.len()
        );
        Ok(rows)
    }

    /// The country, medal type and year dropdown lists.
    pub fn query_dropdown_options(&self) -> anyhow::Result<DropdownOptions> {
        let countries = self
            .query_countries()?
            .into_iter()
            .map(|c| SelectOption::new(c.clone(), c))
            .collect();

        let medal_types = MedalMetric::ALL
            .iter()
            .map(|m| SelectOption::new(m.column(), m.label()))
            .collect();

        let mut years = vec![SelectOption::new(
            YearSelection::All.to_string(),
            all_years_label(),
        )];
        years.extend(
            self.query_year_hosts()?
                .iter()
                .map(|h| SelectOption::new(h.year.to_string(), h.label())),
        );

        Ok(DropdownOptions {
            countries,
            medal_types,
            years,
        })
    }

    /// Display label for a year selection.
    ///
    /// `All Years (1992-2020)` for all years, the host label for a known year,
    /// and the bare year otherwise.
    pub fn year_label(&self, year: YearSelection) -> anyhow::Result<String> {
        match year {
            YearSelection::All => Ok(all_years_label()),
            YearSelection::Year(y) => Ok(self
                .query_year_host(y)?
                .map(|h| h.label())
                .unwrap_or_else(|| y.to_string())),
        }
    }
}

/// Label of the "All" year option.
pub(crate) fn all_years_label() -> String {
    format!("All Years ({})", omd_medals::year_range_label())
}
