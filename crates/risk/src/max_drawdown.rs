// In crates/risk/src/max_drawdown.rs

use crate::types::MaxDrawdownSettings;
use crate::{Error, Result, RiskManager};
use core_types::{Holdings, PortfolioTarget, Symbol};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Liquidates any holding whose unrealized loss is worse than a fixed
/// fraction of its value, regardless of what the strategy wants.
///
/// The only state is the loss threshold, fixed at construction, so one
/// instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct MaxDrawdownPerSecurity {
    /// Always zero or negative so it compares directly with a signed
    /// unrealized profit figure.
    threshold: Decimal,
}

impl MaxDrawdownPerSecurity {
    /// Creates a new instance. A negative argument is treated as its
    /// absolute value.
    pub fn new(maximum_drawdown_percent: Decimal) -> Self {
        Self {
            threshold: -maximum_drawdown_percent.abs(),
        }
    }

    /// Creates a new instance from its settings.
    pub fn from_settings(settings: &MaxDrawdownSettings) -> Result<Self> {
        let percent = Decimal::from_f64(settings.maximum_drawdown_percent).ok_or_else(|| {
            Error::InvalidParameters(format!(
                "maximum_drawdown_percent ({}) is not a finite number",
                settings.maximum_drawdown_percent
            ))
        })?;
        Ok(Self::new(percent))
    }

    /// The signed loss floor, e.g. `-0.05`.
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }
}

impl Default for MaxDrawdownPerSecurity {
    fn default() -> Self {
        Self::new(Decimal::new(5, 2))
    }
}

impl RiskManager for MaxDrawdownPerSecurity {
    fn name(&self) -> &'static str {
        "MaxDrawdownPerSecurity"
    }

    fn evaluate(&self, holdings: &Holdings, targets: &[PortfolioTarget]) -> Vec<PortfolioTarget> {
        // Sorted so the appended liquidations come out in a stable order.
        let breached: BTreeSet<&Symbol> = holdings
            .iter()
            .filter(|(_, holding)| holding.is_invested)
            .filter(|(_, holding)| holding.unrealized_profit_percent < self.threshold)
            .map(|(symbol, holding)| {
                tracing::warn!(
                    %symbol,
                    unrealized_profit_percent = %holding.unrealized_profit_percent,
                    threshold = %self.threshold,
                    "Drawdown limit breached. Overriding targets with liquidation."
                );
                symbol
            })
            .collect();

        if breached.is_empty() {
            return targets.to_vec();
        }

        // Every target for a breached symbol is dropped, duplicates included,
        // before the single liquidation target is appended.
        targets
            .iter()
            .filter(|target| !breached.contains(&target.symbol))
            .cloned()
            .chain(
                breached
                    .iter()
                    .map(|symbol| PortfolioTarget::liquidate((*symbol).clone())),
            )
            .collect()
    }
}
