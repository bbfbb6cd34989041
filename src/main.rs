//! Command-line entry point: one scrape run, no arguments

use std::process::ExitCode;

use aram_nerfs::{run, ScraperConfig};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout only carries the status line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aram_nerfs=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ScraperConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(report) => {
            println!(
                "Champion data for {} champions saved to '{}'.",
                report.champions,
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
