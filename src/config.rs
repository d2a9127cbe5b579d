use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::asset::{DEFAULT_VOLATILITY, Symbol};

pub const DEFAULT_ROUNDS: u32 = 10;
pub const MAX_ROUNDS: u32 = 100_000;

/// One traded asset and the number of units moved per round.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetLot {
    pub symbol: Symbol,
    pub lot: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rounds: u32,
    pub volatility: f64,
    /// Fixed seed for a reproducible run, otherwise the generator is seeded from the OS.
    pub seed: Option<u64>,
    pub assets: Vec<AssetLot>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            volatility: DEFAULT_VOLATILITY,
            seed: None,
            assets: default_assets(),
        }
    }
}

fn default_assets() -> Vec<AssetLot> {
    vec![
        AssetLot {
            symbol: Symbol::Lkoh,
            lot: 1,
        },
        AssetLot {
            symbol: Symbol::Sber,
            lot: 2,
        },
    ]
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

fn default_volatility() -> f64 {
    DEFAULT_VOLATILITY
}

impl SimulationConfig {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "marketsim", "marketsim")
            .map(|pdirs| pdirs.config_dir().join("simulation.yml"))
    }

    /// Loads `path` if given, else the default config file if it exists, else the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            path => {
                debug!(?path, "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let file =
            std::fs::File::open(path).with_context(|| format!("Failed to open file {path:?}"))?;
        let builder: SimulationConfigBuilder = serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse config {path:?}"))?;
        debug!(?builder, "loaded config");
        builder.build()
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let builder: SimulationConfigBuilder = serde_yaml::from_str(yaml)?;
        builder.build()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_ROUNDS).contains(&self.rounds),
            "Rounds must be between 1 and {MAX_ROUNDS}, got {}",
            self.rounds
        );
        anyhow::ensure!(
            self.volatility.is_finite() && (0.0..1.0).contains(&self.volatility),
            "Volatility must be in [0, 1), got {}",
            self.volatility
        );
        anyhow::ensure!(!self.assets.is_empty(), "At least one asset is required");
        for (idx, lot) in self.assets.iter().enumerate() {
            anyhow::ensure!(
                lot.lot > 0,
                "Lot for {} must be positive, got {}",
                lot.symbol,
                lot.lot
            );
            if self.assets[..idx].iter().any(|l| l.symbol == lot.symbol) {
                anyhow::bail!("Asset {} is listed more than once", lot.symbol);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SimulationConfigBuilder {
    #[serde(default = "default_rounds")]
    rounds: u32,
    #[serde(default = "default_volatility")]
    volatility: f64,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_assets")]
    assets: Vec<AssetLot>,
}

impl SimulationConfigBuilder {
    fn build(self) -> anyhow::Result<SimulationConfig> {
        let config = SimulationConfig {
            rounds: self.rounds,
            volatility: self.volatility,
            seed: self.seed,
            assets: self.assets,
        };
        config.validate()?;
        Ok(config)
    }
}
