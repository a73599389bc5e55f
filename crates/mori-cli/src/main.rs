use std::time::Instant;

use clap::Parser;

use mori::{ScenarioOptions, run_scenarios};
use mori_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "mori",
    about = "mori: walk result containers through their states",
    version
)]
pub struct Cli {
    #[command(flatten)]
    scenario: ScenarioOptions,
}

pub fn run(args: Cli) -> Result<()> {
    let start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let reports = match run_scenarios(&args.scenario) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "scenario failed");
            return Err(e);
        }
    };

    for report in &reports {
        println!("[{}]", report.scenario);
        for line in &report.lines {
            println!("  {line}");
        }
    }

    let total_secs = start.elapsed().as_secs_f64();
    tracing::info!(total_secs, scenarios = reports.len(), "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
