use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("unknown asset symbol '{0}'")]
    UnknownSymbol(String),
    #[error("arithmetic overflow computing {quantity} x {price}")]
    Overflow {
        quantity: i64,
        price: rust_decimal::Decimal,
    },
    #[error("invalid price for {symbol}: {reason}")]
    InvalidPrice { symbol: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MarketError>;
