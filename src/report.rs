use tabled::{Table, builder::Builder, settings::Style};

use crate::{
    asset::Symbol,
    money::{Money, Price},
    transaction::Side,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trade {
    pub symbol: Symbol,
    pub quantity: i64,
    pub side: Side,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub prices: Vec<(Symbol, Price)>,
    pub trades: Vec<Trade>,
    pub value: Money,
}

impl RoundReport {
    /// e.g. `LKOH: 5900.10, SBER: 249.00`
    pub fn prices_line(&self) -> String {
        format_prices(&self.prices)
    }

    /// e.g. `Bought 1 of LKOH and Sold 2 of SBER`
    pub fn trades_line(&self) -> String {
        self.trades
            .iter()
            .map(|t| format!("{} {} of {}", t.side, t.quantity.unsigned_abs(), t.symbol))
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    pub initial_prices: Vec<(Symbol, Price)>,
    pub rounds: Vec<RoundReport>,
    pub final_value: Money,
}

impl SimulationReport {
    /// One row per round with every asset's closing price and the portfolio value.
    pub fn summary_table(&self) -> Table {
        let mut builder = Builder::default();
        let mut header = vec!["Round".to_string()];
        header.extend(self.initial_prices.iter().map(|(sym, _)| sym.to_string()));
        header.push("Value".to_string());
        builder.push_record(header);

        let mut start = vec!["0".to_string()];
        start.extend(self.initial_prices.iter().map(|(_, p)| p.to_string()));
        start.push(Money::ZERO.to_string());
        builder.push_record(start);

        for round in &self.rounds {
            let mut row = vec![round.round.to_string()];
            row.extend(round.prices.iter().map(|(_, p)| p.to_string()));
            row.push(round.value.to_string());
            builder.push_record(row);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        table
    }
}

/// e.g. `LKOH: 5896, SBER: 250`
pub fn format_prices(prices: &[(Symbol, Price)]) -> String {
    prices
        .iter()
        .map(|(sym, price)| format!("{sym}: {price}"))
        .collect::<Vec<_>>()
        .join(", ")
}
