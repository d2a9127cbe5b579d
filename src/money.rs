use std::fmt;

use derive_more::{Add, AddAssign, Sub, SubAssign, Sum};
use rust_decimal::Decimal;

use crate::error::{MarketError, Result};

pub type Price = Decimal;

/// Signed monetary value attributed to a holding.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Add, AddAssign, Sub, SubAssign, Sum,
)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Value of `quantity` units at `price`.
    pub fn position(quantity: i64, price: Price) -> Result<Self> {
        Decimal::from(quantity)
            .checked_mul(price)
            .map(Money)
            .ok_or(MarketError::Overflow { quantity, price })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
