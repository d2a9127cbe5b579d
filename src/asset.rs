use std::{fmt, str::FromStr};

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{MarketError, Result},
    money::Price,
};

pub const DEFAULT_VOLATILITY: f64 = 0.05;
const PRICE_DP: u32 = 2;

/// Tradable symbols and their reference prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Lkoh,
    Sber,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::Lkoh, Symbol::Sber];

    pub fn initial_price(&self) -> Price {
        match self {
            Symbol::Lkoh => dec!(5896),
            Symbol::Sber => dec!(250),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Lkoh => "LKOH",
            Symbol::Sber => "SBER",
        }
    }
}

impl FromStr for Symbol {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        Symbol::ALL
            .into_iter()
            .find(|sym| sym.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MarketError::UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Asset {
    symbol: Symbol,
    price: Price,
    price_history: Vec<Price>,
}

impl Asset {
    pub fn new(symbol: &str) -> Result<Self> {
        Ok(Self::from_symbol(symbol.parse()?))
    }

    pub fn from_symbol(symbol: Symbol) -> Self {
        let price = symbol.initial_price();
        Self {
            symbol,
            price,
            price_history: vec![price],
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Every price this asset has held, oldest first. Never empty.
    pub fn price_history(&self) -> &[Price] {
        &self.price_history
    }

    /// Price before the most recent update, if there has been one.
    pub fn previous_price(&self) -> Option<Price> {
        self.price_history
            .len()
            .checked_sub(2)
            .map(|idx| self.price_history[idx])
    }

    /// Rounds half-up to cents and records the result. Negative prices are accepted.
    pub fn update_price(&mut self, new_price: Price) {
        let mut price =
            new_price.round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointAwayFromZero);
        price.rescale(PRICE_DP);
        debug!(symbol = %self.symbol, %new_price, %price, "price updated");
        self.price = price;
        self.price_history.push(price);
    }

    /// Moves the price by a uniform random fraction in `[-volatility, volatility]`.
    pub fn simulate_price_change<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        volatility: f64,
    ) -> Result<()> {
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(MarketError::InvalidPrice {
                symbol: self.symbol.to_string(),
                reason: format!("volatility must be a non-negative number, got {volatility}"),
            });
        }
        let fraction: f64 = rng.gen_range(-volatility..=volatility);
        let factor = Decimal::try_from(1.0 + fraction).map_err(|e| MarketError::InvalidPrice {
            symbol: self.symbol.to_string(),
            reason: e.to_string(),
        })?;
        let new_price = self
            .price
            .checked_mul(factor)
            .ok_or_else(|| MarketError::InvalidPrice {
                symbol: self.symbol.to_string(),
                reason: format!("{} x {factor} overflows", self.price),
            })?;
        self.update_price(new_price);
        Ok(())
    }
}
