// In crates/execution/src/immediate.rs

use crate::order_sizing::unordered_quantity;
use crate::{Executor, OrderRouter};
use core_types::{OrderRequest, PortfolioSnapshot, PortfolioTarget};

/// Closes the whole gap to every target with a single market order.
///
/// Holds no state between cycles.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateExecutor;

impl ImmediateExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for ImmediateExecutor {
    fn name(&self) -> &'static str {
        "ImmediateExecutor"
    }

    fn execute(
        &mut self,
        state: &PortfolioSnapshot,
        targets: &[PortfolioTarget],
        router: &mut dyn OrderRouter,
    ) {
        for target in targets {
            // NOTE: duplicate targets for one symbol are each measured against
            // the same snapshot, so the second does not see the first's order.
            // Upstream callers are expected to send one target per symbol.
            let quantity = unordered_quantity(state, target);
            if quantity.is_zero() {
                continue;
            }

            let order = OrderRequest::market(target.symbol.clone(), quantity);
            tracing::debug!(
                symbol = %order.symbol,
                side = ?order.side(),
                %quantity,
                "Submitting market order."
            );
            router.submit(order);
        }
    }
}
