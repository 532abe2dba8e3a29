//! Dataset loading for the CLI: the published URL or a saved local copy.

use anyhow::Context;
use clap::Args;
use log::info;
use omd_db::WorkingTable;
use omd_medals::dataset::{fetch_dataset, DEFAULT_DATASET_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Where a chart subcommand reads the dataset from.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Dataset URL
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    pub url: String,

    /// Read a local CSV instead of fetching (takes precedence over --url)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

fn http_client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Read the raw CSV text named by `args`.
pub async fn read_dataset(args: &DatasetArgs) -> anyhow::Result<String> {
    match &args.file {
        Some(path) => {
            info!("[OMD] cmd: reading {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => Ok(fetch_dataset(&http_client()?, &args.url).await?),
    }
}

/// Read the dataset and build the working table. Any failure is fatal.
pub async fn load_table(args: &DatasetArgs) -> anyhow::Result<WorkingTable> {
    let csv_data = read_dataset(args).await?;
    WorkingTable::from_csv(&csv_data).context("failed to load the medal dataset")
}

/// Download the dataset and write it to `output` once it is known to load.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let body = fetch_dataset(&http_client()?, url).await?;
    let table = WorkingTable::from_csv(&body).context("downloaded dataset does not load")?;
    info!("[OMD] cmd: {} rows in the working table", table.row_count()?);

    std::fs::write(output, &body).with_context(|| format!("failed to write {}", output))?;
    info!("[OMD] cmd: fetch complete. Output: {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV: &str = "\
Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze
2012,Great Britain,London,United States,USA,46,29,29
2012,Great Britain,London,China,CHN,38,27,23
2024,France,Paris,France,FRA,16,26,22
";

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{}", contents).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    fn file_args(path: PathBuf) -> DatasetArgs {
        DatasetArgs {
            url: DEFAULT_DATASET_URL.to_string(),
            file: Some(path),
        }
    }

    #[tokio::test]
    async fn loads_table_from_local_file() {
        let tmp = csv_file(CSV);
        let table = load_table(&file_args(tmp.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(table.row_count().unwrap(), 2);
        assert_eq!(
            table.query_countries().unwrap(),
            vec!["China".to_string(), "United States of America".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&file_args(dir.path().join("missing.csv")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read"), "got: {}", err);
    }

    #[tokio::test]
    async fn missing_columns_name_the_columns() {
        let tmp = csv_file("Year,Country_Name,Gold\n2012,China,38\n");
        let err = load_table(&file_args(tmp.path().to_path_buf()))
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Host_country"), "got: {}", message);
        assert!(message.contains("Bronze"), "got: {}", message);
    }
}
