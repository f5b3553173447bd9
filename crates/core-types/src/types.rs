// In crates/core-types/src/types.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tradable instrument, e.g. `Symbol("SPY".to_string())`.
///
/// Used as the join key between holdings, open orders and targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(ticker: &str) -> Self {
        Self(ticker.to_string())
    }
}

/// The quantity an instrument should be held at by the end of the cycle.
///
/// Targets are never edited in place. Whoever needs a different quantity
/// builds a new one. A quantity of zero means "fully liquidate".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioTarget {
    pub symbol: Symbol,
    pub quantity: Decimal,
}

impl PortfolioTarget {
    pub fn new(symbol: Symbol, quantity: Decimal) -> Self {
        Self { symbol, quantity }
    }

    /// A target that exits the whole position.
    pub fn liquidate(symbol: Symbol) -> Self {
        Self::new(symbol, Decimal::ZERO)
    }
}

/// The engine's current position in a single instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Signed position size (negative when short).
    pub quantity: Decimal,

    /// Reported separately from `quantity`; the state source may flag a
    /// position as invested while settlement is still pending.
    pub is_invested: bool,

    /// Unrealized profit as a fraction of position value (-0.06 is a 6% loss).
    pub unrealized_profit_percent: Decimal,
}

impl Holding {
    /// Builds a holding whose `is_invested` flag follows the quantity.
    pub fn new(quantity: Decimal, unrealized_profit_percent: Decimal) -> Self {
        Self {
            quantity,
            is_invested: !quantity.is_zero(),
            unrealized_profit_percent,
        }
    }
}

/// Unfilled volume of a previously submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub symbol: Symbol,
    /// Positive for buys, negative for sells.
    pub quantity: Decimal,
}

impl OpenOrder {
    pub fn new(symbol: Symbol, quantity: Decimal) -> Self {
        Self { symbol, quantity }
    }
}

/// The current market view of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Last traded price.
    pub price: Decimal,
    pub bid_price: Decimal,
    pub ask_price: Decimal,
    /// Volume of the most recent bar.
    pub volume: Decimal,
    /// Smallest tradable increment.
    pub lot_size: Decimal,
}

/// A consolidated trade bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub symbol: Symbol,
    pub end_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    /// True when the bar repeats the previous one because no trade happened.
    #[serde(default)]
    pub is_fill_forward: bool,
}

/// Additions and removals in the tradable universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityChanges {
    #[serde(default)]
    pub added: Vec<Symbol>,
    #[serde(default)]
    pub removed: Vec<Symbol>,
}

impl SecurityChanges {
    pub fn added(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            added: symbols.into_iter().collect(),
            removed: Vec::new(),
        }
    }

    pub fn removed(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            added: Vec::new(),
            removed: symbols.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
}

/// An order handed to the order-routing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: Symbol,
    /// Signed quantity: positive buys, negative sells.
    pub quantity: Decimal,
    pub order_type: OrderType,
}

impl OrderRequest {
    pub fn market(symbol: Symbol, quantity: Decimal) -> Self {
        Self {
            symbol,
            quantity,
            order_type: OrderType::Market,
        }
    }

    pub fn side(&self) -> Side {
        if self.quantity.is_sign_negative() {
            Side::Sell
        } else {
            Side::Buy
        }
    }
}
