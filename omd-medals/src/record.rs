use crate::error::LoadError;
use crate::metric::MedalMetric;
use crate::{FIRST_YEAR, LAST_YEAR, MAP_US_NAME, SOURCE_US_NAME};
use csv::{ReaderBuilder, StringRecord};
use log::info;
use serde::{Deserialize, Serialize};

/// Columns the dataset must provide. Any other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Year",
    "Host_country",
    "Host_city",
    "Country_Name",
    "Country_Code",
    "Gold",
    "Silver",
    "Bronze",
];

/// One country's medal counts at one Summer Olympics.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MedalRecord {
    pub year: i32,
    pub host_country: String,
    pub host_city: String,
    pub country_name: String,
    pub country_code: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalRecord {
    /// Derived `Total_Medals` column. Widened so three full `u32` counts fit.
    pub fn total_medals(&self) -> i64 {
        i64::from(self.gold) + i64::from(self.silver) + i64::from(self.bronze)
    }

    /// Value of the given metric for this row.
    pub fn metric(&self, metric: MedalMetric) -> i64 {
        match metric {
            MedalMetric::Gold => i64::from(self.gold),
            MedalMetric::Silver => i64::from(self.silver),
            MedalMetric::Bronze => i64::from(self.bronze),
            MedalMetric::TotalMedals => self.total_medals(),
        }
    }

    /// True if the row falls inside the 1992-2020 working range.
    pub fn in_working_range(&self) -> bool {
        (FIRST_YEAR..=LAST_YEAR).contains(&self.year)
    }

    /// Map the source spelling of the United States onto the choropleth's spelling.
    pub fn normalize_country_name(&mut self) -> bool {
        if self.country_name == SOURCE_US_NAME {
            self.country_name = MAP_US_NAME.to_string();
            true
        } else {
            false
        }
    }

    /// Parse the full dataset CSV (headers required) into records.
    ///
    /// The header row is checked first; if any of [`REQUIRED_COLUMNS`] is
    /// absent the whole load fails with [`LoadError::MissingColumns`].
    /// No filtering or renaming happens here.
    pub fn parse_medal_csv(csv_object: &str) -> Result<Vec<MedalRecord>, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut records: Vec<MedalRecord> = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let rho = row?;
            records.push(columns.record(&rho, i + 1)?);
        }
        info!(
            "[OMD] record: parsed {} rows with {} columns",
            records.len(),
            headers.len()
        );
        Ok(records)
    }
}

/// Positions of the required columns within the header row.
struct ColumnIndex {
    year: usize,
    host_country: usize,
    host_city: usize,
    country_name: usize,
    country_code: usize,
    gold: usize,
    silver: usize,
    bronze: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let available: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let position = |name: &str| available.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| position(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns { missing, available });
        }

        // All present, checked above.
        let at = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            year: at("Year"),
            host_country: at("Host_country"),
            host_city: at("Host_city"),
            country_name: at("Country_Name"),
            country_code: at("Country_Code"),
            gold: at("Gold"),
            silver: at("Silver"),
            bronze: at("Bronze"),
        })
    }

    fn record(&self, rho: &StringRecord, row: usize) -> Result<MedalRecord, LoadError> {
        let text = |idx: usize| rho.get(idx).unwrap_or("").trim().to_string();
        let year_str = text(self.year);
        let year = year_str.parse::<i32>().map_err(|_| LoadError::InvalidValue {
            row,
            column: "Year",
            value: year_str.clone(),
        })?;
        Ok(MedalRecord {
            year,
            host_country: text(self.host_country),
            host_city: text(self.host_city),
            country_name: text(self.country_name),
            country_code: text(self.country_code),
            gold: parse_count(rho.get(self.gold).unwrap_or(""), row, "Gold")?,
            silver: parse_count(rho.get(self.silver).unwrap_or(""), row, "Silver")?,
            bronze: parse_count(rho.get(self.bronze).unwrap_or(""), row, "Bronze")?,
        })
    }
}

/// Medal counts are non-negative integers; blank and "NA"-style cells count as zero.
fn parse_count(ess: &str, row: usize, column: &'static str) -> Result<u32, LoadError> {
    let ess_lowered = ess.trim().to_lowercase();
    match ess_lowered.as_str() {
        "" | "null" | "na" | "n/a" | "nan" => Ok(0),
        s => s
            .parse::<u32>()
            .or_else(|_| {
                // Some exports write counts as floats ("3.0").
                s.parse::<f64>()
                    .ok()
                    .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
                    .map(|v| v as u32)
                    .ok_or(())
            })
            .map_err(|_| LoadError::InvalidValue {
                row,
                column,
                value: ess.trim().to_string(),
            }),
    }
}
