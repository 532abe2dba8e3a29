//! Location of the published medal dataset and the native HTTP fetch.
//!
//! The browser app fetches the same URL through the `fetch` API (see
//! `omd-chart-ui::js_bridge`) and shares the response checks below.

use crate::error::LoadError;
#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;
use std::fmt::Display;

/// Summer Olympic medal counts per country and edition.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/07leonam/plot_vsd/refs/heads/main/Summer_olympic_Medals.csv";

/// Wrap a transport failure for `url`.
pub fn fetch_error(url: &str, reason: impl Display) -> LoadError {
    LoadError::Fetch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Only HTTP 200 counts as a usable response.
pub fn check_status(url: &str, status: u16) -> Result<(), LoadError> {
    if status == 200 {
        Ok(())
    } else {
        Err(LoadError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Fetch the dataset CSV body. Single attempt: any failure is returned to the
/// caller, which treats it as fatal.
#[cfg(feature = "api")]
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<String, LoadError> {
    info!("[OMD] dataset: fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_error(url, e))?;
    check_status(url, response.status().as_u16())?;

    let body = response.text().await.map_err(|e| fetch_error(url, e))?;
    info!("[OMD] dataset: received {} bytes", body.len());
    Ok(body)
}
