use tracing::debug;

use crate::{
    error::Result,
    money::Money,
    portfolio::Portfolio,
    transaction::{Side, Transaction},
};

#[derive(Debug, Default)]
pub struct MarketSimulator {
    portfolio: Portfolio,
}

impl MarketSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies transactions in order. Stops at the first failure; earlier
    /// transactions stay applied.
    pub fn execute_transactions(&mut self, transactions: &[Transaction<'_>]) -> Result<()> {
        for transaction in transactions {
            debug!(
                symbol = %transaction.asset().symbol(),
                quantity = transaction.quantity(),
                side = ?transaction.side(),
                "executing transaction"
            );
            match transaction.side() {
                Side::Buy => self.portfolio.buy(transaction)?,
                Side::Sell => self.portfolio.sell(transaction)?,
            }
        }
        Ok(())
    }

    pub fn get_portfolio_value(&self) -> Money {
        self.portfolio.get_value()
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }
}
