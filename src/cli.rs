use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Random-walk market simulation over a two-asset portfolio")]
pub(crate) struct Cli {
    #[arg(short, long, help = "Simulation config (YAML)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, help = "Number of rounds to simulate")]
    pub rounds: Option<u32>,
    #[arg(short, long, help = "Seed for a reproducible run")]
    pub seed: Option<u64>,
    #[arg(short, long, help = "Maximum fractional price move per round")]
    pub volatility: Option<f64>,
    #[arg(long, help = "Print a table of prices and value per round at the end")]
    pub summary: bool,
}
