// In crates/engine/src/lib.rs

pub mod factory;

use anyhow::{Context, Result};
use app_config::Settings;
use core_types::{Bar, OrderRequest, PortfolioSnapshot, PortfolioTarget, SecurityChanges};
use execution::{Executor, OrderRouter};
use risk::RiskManager;

/// What one evaluation cycle did.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// The targets after risk management, as handed to the executor.
    pub adjusted_targets: Vec<PortfolioTarget>,
    /// How many orders the executor submitted.
    pub orders_submitted: usize,
}

/// Runs the risk filtering → execution stage of the strategy pipeline.
///
/// The host calls `run_cycle` once per evaluation tick with a fresh
/// snapshot. Nothing about the snapshot or the targets is kept between
/// calls.
pub struct Pipeline {
    risk_manager: Box<dyn RiskManager>,
    executor: Box<dyn Executor>,
}

impl Pipeline {
    pub fn new(risk_manager: Box<dyn RiskManager>, executor: Box<dyn Executor>) -> Self {
        Self {
            risk_manager,
            executor,
        }
    }

    /// Builds the risk manager and executor selected in the settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let risk_manager = factory::create_risk_manager(&settings.risk)
            .context("Failed to create risk manager")?;
        let executor =
            factory::create_executor(&settings.execution).context("Failed to create executor")?;
        Ok(Self::new(risk_manager, executor))
    }

    pub fn risk_manager(&self) -> &dyn RiskManager {
        self.risk_manager.as_ref()
    }

    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    /// Applies risk management to `targets` and executes the result.
    pub fn run_cycle(
        &mut self,
        state: &PortfolioSnapshot,
        targets: &[PortfolioTarget],
        router: &mut dyn OrderRouter,
    ) -> CycleReport {
        let adjusted_targets = self.risk_manager.evaluate(&state.holdings, targets);

        let mut counting = CountingRouter { inner: router, submitted: 0 };
        self.executor.execute(state, &adjusted_targets, &mut counting);

        tracing::debug!(
            targets = targets.len(),
            adjusted = adjusted_targets.len(),
            orders = counting.submitted,
            "Cycle complete."
        );

        CycleReport {
            adjusted_targets,
            orders_submitted: counting.submitted,
        }
    }

    pub fn on_bar(&mut self, bar: &Bar) {
        self.executor.on_bar(bar);
    }

    /// Forwards a universe change to both models.
    pub fn on_securities_changed(&mut self, changes: &SecurityChanges) {
        tracing::debug!(
            added = changes.added.len(),
            removed = changes.removed.len(),
            "Securities changed."
        );
        self.risk_manager.on_securities_changed(changes);
        self.executor.on_securities_changed(changes);
    }
}

struct CountingRouter<'a> {
    inner: &'a mut dyn OrderRouter,
    submitted: usize,
}

impl OrderRouter for CountingRouter<'_> {
    fn submit(&mut self, order: OrderRequest) {
        self.submitted += 1;
        self.inner.submit(order);
    }
}
