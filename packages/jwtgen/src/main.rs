//! Main entry point for the jwtgen CLI

use clap::Parser;
use jwtgen::Cli;
use jwtgen_common::LoggingTransformer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    LoggingTransformer::init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    let reports = jwtgen::run(&config).await?;

    log::info!("Done: {} token files written", reports.len());
    Ok(())
}
