use std::process::ExitCode;

use clap::Parser;
use marketsim::{
    SimulationDriver,
    config::SimulationConfig,
    report::{RoundReport, format_prices},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};

mod cli;

fn print_round(report: &RoundReport) {
    println!("\n--- Round {} ---", report.round);
    println!("Prices after simulation. {}", report.prices_line());
    println!("Executed transactions. {}.", report.trades_line());
    println!("Current Portfolio Value: {}", report.value);
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let opts = cli::Cli::parse();

    let mut config = SimulationConfig::load(opts.config.as_deref())?;
    if let Some(rounds) = opts.rounds {
        config.rounds = rounds;
    }
    if let Some(volatility) = opts.volatility {
        config.volatility = volatility;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    println!("Starting Market Simulation...");
    let mut driver = SimulationDriver::new(config);
    println!("Market Simulator initialized.");
    println!("Assets initialized. {}", format_prices(&driver.prices()));

    match driver.run(&mut rng, print_round) {
        Ok(report) => {
            println!("Market Simulation complete.");
            if opts.summary {
                println!("{}", report.summary_table());
            }
        }
        Err(e) => {
            error!(error = %e, "simulation aborted");
            println!("An error occurred during the simulation: {e}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
