use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    asset::Symbol,
    error::Result,
    money::Money,
    transaction::Transaction,
};

/// Accumulated signed value per symbol.
#[derive(Debug, Default)]
pub struct Portfolio {
    holdings: BTreeMap<Symbol, Money>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity x price` at the asset's current price.
    pub fn buy(&mut self, transaction: &Transaction<'_>) -> Result<()> {
        let asset = transaction.asset();
        let value = Money::position(transaction.quantity(), asset.price())?;
        *self.holdings.entry(asset.symbol()).or_default() += value;
        debug!(symbol = %asset.symbol(), quantity = transaction.quantity(), %value, "buy applied");
        Ok(())
    }

    /// Subtracts `quantity x price` at the asset's current price.
    ///
    /// The quantity is used as given, so a negative quantity increases the holding.
    pub fn sell(&mut self, transaction: &Transaction<'_>) -> Result<()> {
        let asset = transaction.asset();
        let value = Money::position(transaction.quantity(), asset.price())?;
        *self.holdings.entry(asset.symbol()).or_default() -= value;
        debug!(symbol = %asset.symbol(), quantity = transaction.quantity(), %value, "sell applied");
        Ok(())
    }

    pub fn holding(&self, symbol: Symbol) -> Money {
        self.holdings.get(&symbol).copied().unwrap_or_default()
    }

    /// Signed sum of every holding.
    pub fn get_value(&self) -> Money {
        self.holdings.values().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::asset::Asset;

    #[test]
    fn empty_portfolio_is_worth_nothing() {
        let portfolio = Portfolio::new();
        assert_eq!(portfolio.get_value(), Money::ZERO);
        assert_eq!(portfolio.holding(Symbol::Lkoh), Money::ZERO);
    }

    #[test]
    fn buys_accumulate_per_symbol() {
        let lkoh = Asset::new("LKOH").unwrap();
        let sber = Asset::new("SBER").unwrap();
        let mut portfolio = Portfolio::new();
        portfolio.buy(&Transaction::new(&lkoh, 1)).unwrap();
        portfolio.buy(&Transaction::new(&sber, 2)).unwrap();
        assert_eq!(portfolio.holding(Symbol::Lkoh), Money(dec!(5896)));
        assert_eq!(portfolio.holding(Symbol::Sber), Money(dec!(500)));
        assert_eq!(portfolio.get_value(), Money(dec!(6396)));
    }

    #[test]
    fn buys_use_price_at_application_time() {
        let mut sber = Asset::new("SBER").unwrap();
        let mut portfolio = Portfolio::new();
        portfolio.buy(&Transaction::new(&sber, 2)).unwrap();
        sber.update_price(dec!(260.555));
        portfolio.buy(&Transaction::new(&sber, 3)).unwrap();
        sber.update_price(dec!(240));
        portfolio.buy(&Transaction::new(&sber, 1)).unwrap();
        // 2*250 + 3*260.56 + 1*240.00
        assert_eq!(portfolio.holding(Symbol::Sber), Money(dec!(1521.68)));
    }

    #[test]
    fn sell_subtracts_signed_quantity() {
        let lkoh = Asset::new("LKOH").unwrap();
        let mut portfolio = Portfolio::new();
        portfolio.sell(&Transaction::new(&lkoh, 1)).unwrap();
        assert_eq!(portfolio.holding(Symbol::Lkoh), Money(dec!(-5896)));
        portfolio.sell(&Transaction::new(&lkoh, -1)).unwrap();
        assert_eq!(portfolio.holding(Symbol::Lkoh), Money::ZERO);
    }

    #[test]
    fn zero_quantity_is_a_no_op() {
        let sber = Asset::new("SBER").unwrap();
        let mut portfolio = Portfolio::new();
        portfolio.buy(&Transaction::new(&sber, 0)).unwrap();
        portfolio.sell(&Transaction::new(&sber, 0)).unwrap();
        assert_eq!(portfolio.get_value(), Money::ZERO);
    }

    #[test]
    fn value_is_signed_sum() {
        let lkoh = Asset::new("LKOH").unwrap();
        let sber = Asset::new("SBER").unwrap();
        let mut portfolio = Portfolio::new();
        portfolio.sell(&Transaction::new(&lkoh, 1)).unwrap();
        portfolio.buy(&Transaction::new(&sber, 4)).unwrap();
        assert_eq!(portfolio.get_value(), Money(dec!(-4896)));
    }
}
