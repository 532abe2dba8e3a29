//! OMD CLI - Command line tool for the Summer Olympic medal dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "omd-cli",
    version,
    about = "Olympic medals dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: omd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[OMD] cli: {:?}", cli.command);
    omd_cmd::run(cli.command).await
}
