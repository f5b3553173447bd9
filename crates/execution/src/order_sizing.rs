// In crates/execution/src/order_sizing.rs

//! Quantity helpers shared by the executors.

use core_types::{PortfolioSnapshot, PortfolioTarget, Quote};
use rust_decimal::Decimal;

/// The quantity still missing to reach `target`, counting open orders as if
/// they had already filled.
pub fn unordered_quantity(state: &PortfolioSnapshot, target: &PortfolioTarget) -> Decimal {
    let existing = state.holding_quantity(&target.symbol) + state.open_quantity(&target.symbol);
    target.quantity - existing
}

/// The largest unsigned order whose value stays within `maximum_order_value`.
pub fn max_order_size_by_value(quote: &Quote, maximum_order_value: Decimal) -> Decimal {
    if quote.price.is_zero() {
        return Decimal::ZERO;
    }
    (maximum_order_value / quote.price).abs()
}

/// The largest unsigned order as a fraction of the current bar's volume.
pub fn max_order_size_by_volume(quote: &Quote, percent_volume: Decimal) -> Decimal {
    (quote.volume * percent_volume).abs()
}

/// Rounds an unsigned size down to a whole number of lots.
pub fn round_down_to_lot(size: Decimal, lot_size: Decimal) -> Decimal {
    if lot_size <= Decimal::ZERO {
        return size;
    }
    size - size % lot_size
}
