use std::process::ExitCode;

use clap::Parser;
use portfolio_view_cli::{logger, run, CliConfig};

fn main() -> ExitCode {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("portfolio view failed: {e:#}");
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}
