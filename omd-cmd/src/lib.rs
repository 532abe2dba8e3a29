//! Command implementations for the Olympic medals CLI.
//!
//! Every chart subcommand loads the dataset (from its URL or a local copy),
//! builds the same `ChartSpec` the dashboard renders, and prints it either as
//! a text table or as JSON.

use clap::Subcommand;
use omd_medals::metric::MedalMetric;
use omd_medals::year::YearSelection;

pub mod dataset;
pub mod report;

use dataset::DatasetArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the medal dataset and save it after checking that it loads
    Fetch {
        /// Output path for the CSV
        #[arg(short = 'o', long)]
        output: String,

        /// Dataset URL
        #[arg(long, default_value = omd_medals::dataset::DEFAULT_DATASET_URL)]
        url: String,
    },

    /// Print the country, medal type and year dropdown options
    Options {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Medal breakdown for one country
    Pie {
        /// Country name (defaults to the first country alphabetically)
        #[arg(short = 'c', long)]
        country: Option<String>,

        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print the chart spec as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Per-country totals of one medal type
    Map {
        /// Gold, Silver, Bronze or Total_Medals
        #[arg(short = 'm', long, default_value_t = MedalMetric::TotalMedals)]
        medal: MedalMetric,

        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print the chart spec as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Per-year totals for the top 10 countries
    Area {
        /// Gold, Silver, Bronze or Total_Medals
        #[arg(short = 'm', long, default_value_t = MedalMetric::TotalMedals)]
        medal: MedalMetric,

        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print the chart spec as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Top 10 countries for all years or a single edition
    Bar {
        /// Gold, Silver, Bronze or Total_Medals
        #[arg(short = 'm', long, default_value_t = MedalMetric::TotalMedals)]
        medal: MedalMetric,

        /// "All" or an Olympic year such as 2012
        #[arg(short = 'y', long, default_value_t = YearSelection::All)]
        year: YearSelection,

        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print the chart spec as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => dataset::run_fetch(&url, &output).await,
        Command::Options { dataset, json } => {
            let table = dataset::load_table(&dataset).await?;
            let options = table.query_dropdown_options()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", report::format_options(&options));
            }
            Ok(())
        }
        Command::Pie {
            country,
            dataset,
            json,
        } => {
            let table = dataset::load_table(&dataset).await?;
            let country = match country {
                Some(c) => Some(c),
                None => table.query_dropdown_options()?.default_country(),
            };
            report::print_spec(&table.pie_chart(country.as_deref())?, json)
        }
        Command::Map {
            medal,
            dataset,
            json,
        } => {
            let table = dataset::load_table(&dataset).await?;
            report::print_spec(&table.map_chart(medal)?, json)
        }
        Command::Area {
            medal,
            dataset,
            json,
        } => {
            let table = dataset::load_table(&dataset).await?;
            report::print_spec(&table.area_chart(medal)?, json)
        }
        Command::Bar {
            medal,
            year,
            dataset,
            json,
        } => {
            let table = dataset::load_table(&dataset).await?;
            report::print_spec(&table.bar_chart(medal, year)?, json)
        }
    }
}
