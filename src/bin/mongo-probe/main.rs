use mongo_probe::cli::Cli;
use mongo_probe::config::load_dotenv;
use mongo_probe::logging::init_logging;
use mongo_probe::report::print_failure;
use mongo_probe::{run_probe, ProbeConfig};

use anyhow::Result;
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // .env has to be loaded before clap reads MONGODB_URI
    load_dotenv(Path::new("."));
    let args = Cli::parse();
    init_logging(args.debug)?;

    let config = ProbeConfig::from(args);
    if let Err(e) = run_probe(&config).await {
        print_failure(&e);
        std::process::exit(1);
    }
    Ok(())
}
