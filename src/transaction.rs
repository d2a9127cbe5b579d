use std::fmt;

use crate::asset::Asset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("Bought"),
            Side::Sell => f.write_str("Sold"),
        }
    }
}

/// A signed order against an asset: positive quantity buys, anything else sells.
#[derive(Clone, Copy, Debug)]
pub struct Transaction<'a> {
    asset: &'a Asset,
    quantity: i64,
}

impl<'a> Transaction<'a> {
    pub fn new(asset: &'a Asset, quantity: i64) -> Self {
        Self { asset, quantity }
    }

    pub fn asset(&self) -> &'a Asset {
        self.asset
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn side(&self) -> Side {
        if self.quantity > 0 { Side::Buy } else { Side::Sell }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_asset_and_quantity() {
        let sber = Asset::new("SBER").unwrap();
        for quantity in [1, 2, 3] {
            let tx = Transaction::new(&sber, quantity);
            assert!(std::ptr::eq(tx.asset(), &sber));
            assert_eq!(tx.quantity(), quantity);
            assert_eq!(tx.side(), Side::Buy);
        }
    }

    #[test]
    fn non_positive_quantity_sells() {
        let lkoh = Asset::new("LKOH").unwrap();
        assert_eq!(Transaction::new(&lkoh, -1).side(), Side::Sell);
        assert_eq!(Transaction::new(&lkoh, 0).side(), Side::Sell);
        assert_eq!(Side::Sell.to_string(), "Sold");
    }
}
