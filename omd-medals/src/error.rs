//! Errors raised while fetching or parsing the medal dataset.
//!
//! Every variant is fatal: the dashboard and the CLI refuse to start
//! without a usable working table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("dataset request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "the CSV file is missing the following expected columns: {}. Available columns are: {}",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("row {row}: invalid {column} value {value:?}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::LoadError;

    #[test]
    fn missing_columns_message_names_every_column() {
        let err = LoadError::MissingColumns {
            missing: vec!["Gold".to_string(), "Bronze".to_string()],
            available: vec!["Year".to_string(), "Silver".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Gold, Bronze"), "got: {}", msg);
        assert!(msg.contains("Year, Silver"), "got: {}", msg);
    }

    #[test]
    fn invalid_value_message_names_row_and_column() {
        let err = LoadError::InvalidValue {
            row: 3,
            column: "Year",
            value: "19x2".to_string(),
        };
        assert_eq!(err.to_string(), "row 3: invalid Year value \"19x2\"");
    }
}
