// In crates/core-types/src/snapshot.rs

use crate::types::{Holding, OpenOrder, Quote, Symbol};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Current holdings keyed by symbol.
pub type Holdings = HashMap<Symbol, Holding>;

/// A read-only view of the engine's state for one evaluation cycle.
///
/// The engine builds a fresh snapshot every cycle; models borrow it for the
/// duration of a single call and never keep it.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSnapshot {
    pub holdings: Holdings,
    pub open_orders: HashMap<Symbol, Vec<OpenOrder>>,
    pub quotes: HashMap<Symbol, Quote>,
}

impl PortfolioSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holding(mut self, symbol: Symbol, holding: Holding) -> Self {
        self.holdings.insert(symbol, holding);
        self
    }

    pub fn with_open_order(mut self, order: OpenOrder) -> Self {
        self.open_orders
            .entry(order.symbol.clone())
            .or_default()
            .push(order);
        self
    }

    pub fn with_quote(mut self, symbol: Symbol, quote: Quote) -> Self {
        self.quotes.insert(symbol, quote);
        self
    }

    /// Held quantity, zero when nothing is held.
    pub fn holding_quantity(&self, symbol: &Symbol) -> Decimal {
        self.holdings
            .get(symbol)
            .map(|h| h.quantity)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of every open order's signed quantity.
    pub fn open_quantity(&self, symbol: &Symbol) -> Decimal {
        self.open_orders
            .get(symbol)
            .map(|orders| orders.iter().map(|o| o.quantity).sum())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn quote(&self, symbol: &Symbol) -> Option<&Quote> {
        self.quotes.get(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn open_quantity_sums_both_sides() {
        let spy = Symbol::from("SPY");
        let snapshot = PortfolioSnapshot::new()
            .with_open_order(OpenOrder::new(spy.clone(), dec!(5)))
            .with_open_order(OpenOrder::new(spy.clone(), dec!(-2)));

        assert_eq!(snapshot.open_quantity(&spy), dec!(3));
    }

    #[test]
    fn missing_entries_default_to_zero() {
        let snapshot = PortfolioSnapshot::new();
        let aig = Symbol::from("AIG");

        assert_eq!(snapshot.holding_quantity(&aig), Decimal::ZERO);
        assert_eq!(snapshot.open_quantity(&aig), Decimal::ZERO);
        assert!(snapshot.quote(&aig).is_none());
    }

    #[test]
    fn holding_quantity_reads_snapshot() {
        let bac = Symbol::from("BAC");
        let snapshot =
            PortfolioSnapshot::new().with_holding(bac.clone(), Holding::new(dec!(-40), dec!(0.01)));

        assert_eq!(snapshot.holding_quantity(&bac), dec!(-40));
    }
}
