// In crates/execution/src/vwap.rs

use crate::indicators::IntradayVwap;
use crate::order_sizing::{max_order_size_by_volume, round_down_to_lot, unordered_quantity};
use crate::target_collection::PortfolioTargetCollection;
use crate::types::VwapSettings;
use crate::{Error, Executor, OrderRouter, Result};
use core_types::{
    Bar, OrderRequest, PortfolioSnapshot, PortfolioTarget, Quote, SecurityChanges, Symbol,
};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Works targets in slices, only trading while the price beats the
/// intraday VWAP: buying below it, selling above it.
///
/// Targets are remembered across cycles until their unordered quantity
/// reaches zero.
#[derive(Debug)]
pub struct VwapExecutor {
    /// Largest slice as a fraction of the current bar's volume.
    percent_volume: Decimal,
    targets: PortfolioTargetCollection,
    vwaps: HashMap<Symbol, IntradayVwap>,
}

impl VwapExecutor {
    pub fn new(settings: &VwapSettings) -> Result<Self> {
        let percent = settings.maximum_order_quantity_percent_volume;
        if !(percent > 0.0 && percent <= 1.0) {
            return Err(Error::InvalidParameters(format!(
                "maximum_order_quantity_percent_volume ({percent}) must be in (0, 1]"
            )));
        }
        let percent_volume = Decimal::from_f64(percent).ok_or_else(|| {
            Error::InvalidParameters(format!("Cannot represent {percent} as a decimal"))
        })?;

        Ok(Self {
            percent_volume,
            targets: PortfolioTargetCollection::new(),
            vwaps: HashMap::new(),
        })
    }

    /// Targets that have not been fully ordered yet.
    pub fn pending_targets(&self) -> &PortfolioTargetCollection {
        &self.targets
    }

    fn price_is_favorable(vwap: Decimal, quote: &Quote, unordered: Decimal) -> bool {
        if unordered > Decimal::ZERO {
            quote.bid_price < vwap
        } else {
            quote.ask_price > vwap
        }
    }

    /// Returns the quantity ordered for this target in this cycle.
    fn work_target(
        &self,
        state: &PortfolioSnapshot,
        target: &PortfolioTarget,
        router: &mut dyn OrderRouter,
    ) -> Decimal {
        let unordered = unordered_quantity(state, target);
        if unordered.is_zero() {
            return Decimal::ZERO;
        }

        let Some(vwap) = self.vwaps.get(&target.symbol).filter(|v| v.is_ready()) else {
            return Decimal::ZERO;
        };
        // Without a price there is nothing to compare against yet.
        let Some(quote) = state.quote(&target.symbol).filter(|q| !q.price.is_zero()) else {
            return Decimal::ZERO;
        };

        if !Self::price_is_favorable(vwap.value(), quote, unordered) {
            return Decimal::ZERO;
        }

        let max_size = max_order_size_by_volume(quote, self.percent_volume);
        let size = round_down_to_lot(max_size.min(unordered.abs()), quote.lot_size);
        if size.is_zero() {
            return Decimal::ZERO;
        }

        let quantity = if unordered.is_sign_negative() { -size } else { size };
        tracing::debug!(
            symbol = %target.symbol,
            %quantity,
            vwap = %vwap.value(),
            "Submitting VWAP slice."
        );
        router.submit(OrderRequest::market(target.symbol.clone(), quantity));
        quantity
    }
}

impl Executor for VwapExecutor {
    fn name(&self) -> &'static str {
        "VwapExecutor"
    }

    fn execute(
        &mut self,
        state: &PortfolioSnapshot,
        targets: &[PortfolioTarget],
        router: &mut dyn OrderRouter,
    ) {
        self.targets.add_range(targets);

        let mut completed = Vec::new();
        for target in self.targets.iter() {
            let ordered = self.work_target(state, target, router);
            if (unordered_quantity(state, target) - ordered).is_zero() {
                completed.push(target.symbol.clone());
            }
        }

        for symbol in completed {
            self.targets.remove(&symbol);
        }
    }

    fn on_bar(&mut self, bar: &Bar) {
        if let Some(vwap) = self.vwaps.get_mut(&bar.symbol) {
            vwap.update(bar);
        }
    }

    fn on_securities_changed(&mut self, changes: &SecurityChanges) {
        for symbol in &changes.removed {
            self.vwaps.remove(symbol);
            self.targets.remove(symbol);
        }
        for symbol in &changes.added {
            self.vwaps.entry(symbol.clone()).or_default();
        }
    }
}
