pub mod asset;
pub mod config;
pub mod driver;
pub mod error;
pub mod money;
pub mod portfolio;
pub mod report;
pub mod simulator;
pub mod transaction;

pub use asset::{Asset, Symbol};
pub use driver::SimulationDriver;
pub use error::MarketError;
pub use money::{Money, Price};
pub use portfolio::Portfolio;
pub use simulator::MarketSimulator;
pub use transaction::{Side, Transaction};
