// In crates/execution/src/lib.rs

use core_types::{Bar, OrderRequest, PortfolioSnapshot, PortfolioTarget, SecurityChanges};

pub mod error;
pub mod immediate;
pub mod indicators;
pub mod order_sizing;
pub mod std_dev;
pub mod target_collection;
pub mod types;
pub mod vwap;

// Re-export public types
pub use error::{Error, Result};
pub use immediate::ImmediateExecutor;
pub use std_dev::StdDevExecutor;
pub use target_collection::PortfolioTargetCollection;
pub use types::{StdDevSettings, VwapSettings};
pub use vwap::VwapExecutor;

/// The order-submission boundary.
///
/// Whatever sits behind it (a broker adapter, a simulator) owns the order
/// lifecycle, including failures. Executors only hand orders over.
pub trait OrderRouter {
    fn submit(&mut self, order: OrderRequest);
}

/// Collects orders in submission order.
impl OrderRouter for Vec<OrderRequest> {
    fn submit(&mut self, order: OrderRequest) {
        self.push(order);
    }
}

/// The universal interface for an execution model.
///
/// An `Executor` turns portfolio targets into orders. It is invoked once per
/// evaluation cycle with a read-only snapshot of holdings, open orders and
/// quotes.
pub trait Executor: Send {
    /// The name of the executor (e.g., "ImmediateExecutor").
    fn name(&self) -> &'static str;

    /// Submits the orders needed to move towards the given targets.
    ///
    /// # Arguments
    ///
    /// * `state`: The snapshot for this cycle.
    /// * `targets`: The (risk adjusted) targets, processed in order.
    /// * `router`: Receives every order, in submission order.
    fn execute(
        &mut self,
        state: &PortfolioSnapshot,
        targets: &[PortfolioTarget],
        router: &mut dyn OrderRouter,
    );

    /// Feeds a consolidated bar to executors that track market data.
    fn on_bar(&mut self, _bar: &Bar) {}

    /// Called when securities are added to or removed from the universe.
    fn on_securities_changed(&mut self, _changes: &SecurityChanges) {}
}
