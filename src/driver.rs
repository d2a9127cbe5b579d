use rand::Rng;
use tracing::debug;

use crate::{
    asset::{Asset, Symbol},
    config::SimulationConfig,
    error::Result,
    money::{Money, Price},
    report::{RoundReport, SimulationReport, Trade},
    simulator::MarketSimulator,
    transaction::Transaction,
};

/// Runs the fixed-length buy/sell simulation over the configured assets.
#[derive(Debug)]
pub struct SimulationDriver {
    config: SimulationConfig,
    assets: Vec<Asset>,
    simulator: MarketSimulator,
}

impl SimulationDriver {
    pub fn new(config: SimulationConfig) -> Self {
        let assets = config
            .assets
            .iter()
            .map(|lot| Asset::from_symbol(lot.symbol))
            .collect();
        Self {
            config,
            assets,
            simulator: MarketSimulator::new(),
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn portfolio_value(&self) -> Money {
        self.simulator.get_portfolio_value()
    }

    pub fn simulator(&self) -> &MarketSimulator {
        &self.simulator
    }

    pub fn prices(&self) -> Vec<(Symbol, Price)> {
        self.assets.iter().map(|a| (a.symbol(), a.price())).collect()
    }

    /// Moves every price, then trades one lot per asset: a buy when the price
    /// rose and a coin flip agrees, otherwise a sell.
    pub fn run_round<R: Rng + ?Sized>(&mut self, round: u32, rng: &mut R) -> Result<RoundReport> {
        for asset in self.assets.iter_mut() {
            asset.simulate_price_change(rng, self.config.volatility)?;
        }

        let transactions: Vec<Transaction<'_>> = self
            .assets
            .iter()
            .zip(self.config.assets.iter())
            .map(|(asset, lot)| {
                let rose = asset.previous_price().is_some_and(|prev| asset.price() > prev);
                let quantity = if rose && rng.gen_bool(0.5) {
                    lot.lot
                } else {
                    -lot.lot
                };
                Transaction::new(asset, quantity)
            })
            .collect();
        self.simulator.execute_transactions(&transactions)?;

        let trades = transactions
            .iter()
            .map(|tx| Trade {
                symbol: tx.asset().symbol(),
                quantity: tx.quantity(),
                side: tx.side(),
            })
            .collect();
        let report = RoundReport {
            round,
            prices: self.prices(),
            trades,
            value: self.simulator.get_portfolio_value(),
        };
        debug!(round, value = %report.value, "round complete");
        Ok(report)
    }

    /// Runs every configured round, handing each report to `on_round` as it completes.
    pub fn run<R, F>(&mut self, rng: &mut R, mut on_round: F) -> Result<SimulationReport>
    where
        R: Rng + ?Sized,
        F: FnMut(&RoundReport),
    {
        let initial_prices = self.prices();
        let mut rounds = Vec::new();
        for round in 1..=self.config.rounds {
            let report = self.run_round(round, rng)?;
            on_round(&report);
            rounds.push(report);
        }
        Ok(SimulationReport {
            initial_prices,
            rounds,
            final_value: self.simulator.get_portfolio_value(),
        })
    }
}
