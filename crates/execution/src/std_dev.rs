// In crates/execution/src/std_dev.rs

use crate::indicators::RollingStats;
use crate::order_sizing::{max_order_size_by_value, round_down_to_lot, unordered_quantity};
use crate::target_collection::PortfolioTargetCollection;
use crate::types::StdDevSettings;
use crate::{Error, Executor, OrderRouter, Result};
use core_types::{
    Bar, OrderRequest, PortfolioSnapshot, PortfolioTarget, Quote, SecurityChanges, Symbol,
};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Works targets in slices, only trading while the price sits at least
/// `deviations` standard deviations away from its mean on the favorable
/// side (below it for buys, above it for sells).
#[derive(Debug)]
pub struct StdDevExecutor {
    /// Fresh, unwarmed statistics cloned for every added symbol.
    template: RollingStats,
    deviations: Decimal,
    maximum_order_value: Decimal,
    targets: PortfolioTargetCollection,
    stats: HashMap<Symbol, RollingStats>,
}

impl StdDevExecutor {
    pub fn new(settings: &StdDevSettings) -> Result<Self> {
        if settings.period == 0 {
            return Err(Error::InvalidParameters("period must be at least 1".to_string()));
        }
        if !(settings.deviations >= 0.0) {
            return Err(Error::InvalidParameters(format!(
                "deviations ({}) must not be negative",
                settings.deviations
            )));
        }
        if !(settings.maximum_order_value > 0.0) {
            return Err(Error::InvalidParameters(format!(
                "maximum_order_value ({}) must be positive",
                settings.maximum_order_value
            )));
        }

        let to_decimal = |name: &str, value: f64| {
            Decimal::from_f64(value).ok_or_else(|| {
                Error::InvalidParameters(format!("{name} ({value}) is not a valid decimal"))
            })
        };

        Ok(Self {
            template: RollingStats::new(settings.period)?,
            deviations: to_decimal("deviations", settings.deviations)?,
            maximum_order_value: to_decimal("maximum_order_value", settings.maximum_order_value)?,
            targets: PortfolioTargetCollection::new(),
            stats: HashMap::new(),
        })
    }

    /// Targets that have not been fully ordered yet.
    pub fn pending_targets(&self) -> &PortfolioTargetCollection {
        &self.targets
    }

    fn price_is_favorable(&self, stats: &RollingStats, quote: &Quote, unordered: Decimal) -> bool {
        let band = self.deviations * stats.std_dev();
        if unordered > Decimal::ZERO {
            quote.bid_price < stats.mean() - band
        } else {
            quote.ask_price > stats.mean() + band
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

        let Some(stats) = self.stats.get(&target.symbol).filter(|s| s.is_ready()) else {
            return Decimal::ZERO;
        };
        let Some(quote) = state.quote(&target.symbol).filter(|q| !q.price.is_zero()) else {
            return Decimal::ZERO;
        };

        if !self.price_is_favorable(stats, quote, unordered) {
            return Decimal::ZERO;
        }

        let max_size = max_order_size_by_value(quote, self.maximum_order_value);
        let size = round_down_to_lot(max_size.min(unordered.abs()), quote.lot_size);
        if size.is_zero() {
            return Decimal::ZERO;
        }

        let quantity = if unordered.is_sign_negative() { -size } else { size };
        tracing::debug!(
            symbol = %target.symbol,
            %quantity,
            mean = %stats.mean(),
            std_dev = %stats.std_dev(),
            "Submitting standard deviation slice."
        );
        router.submit(OrderRequest::market(target.symbol.clone(), quantity));
        quantity
    }
}

impl Executor for StdDevExecutor {
    fn name(&self) -> &'static str {
        "StdDevExecutor"
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
        if let Some(stats) = self.stats.get_mut(&bar.symbol) {
            stats.update(bar.close);
        }
    }

    fn on_securities_changed(&mut self, changes: &SecurityChanges) {
        for symbol in &changes.removed {
            self.stats.remove(symbol);
            self.targets.remove(symbol);
        }
        for symbol in &changes.added {
            self.stats
                .entry(symbol.clone())
                .or_insert_with(|| self.template.clone());
        }
    }
}
