// In crates/risk/src/lib.rs

use core_types::{Holdings, PortfolioTarget, SecurityChanges};

pub mod error;
pub mod max_drawdown;
pub mod null_manager;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use max_drawdown::MaxDrawdownPerSecurity;
pub use null_manager::NullRiskManager;
pub use types::MaxDrawdownSettings;

/// The universal interface for a risk management module.
///
/// A `RiskManager` sits between the strategy's targets and the executor. It
/// looks at the current holdings once per cycle and may override or inject
/// targets before anything is ordered.
pub trait RiskManager: Send + Sync {
    /// The name of the risk management model.
    fn name(&self) -> &'static str;

    /// Applies the risk rules to a set of targets.
    ///
    /// # Arguments
    ///
    /// * `holdings`: The holdings snapshot for this cycle.
    /// * `targets`: The targets produced upstream. Never modified.
    ///
    /// # Returns
    ///
    /// A freshly built target list with every override applied.
    fn evaluate(&self, holdings: &Holdings, targets: &[PortfolioTarget]) -> Vec<PortfolioTarget>;

    /// Called when securities are added to or removed from the universe.
    fn on_securities_changed(&mut self, _changes: &SecurityChanges) {}
}
