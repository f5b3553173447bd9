// In crates/risk/src/null_manager.rs

use crate::RiskManager;
use core_types::{Holdings, PortfolioTarget};

/// A risk manager that lets every target through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRiskManager;

impl RiskManager for NullRiskManager {
    fn name(&self) -> &'static str {
        "NullRiskManager"
    }

    fn evaluate(&self, _holdings: &Holdings, targets: &[PortfolioTarget]) -> Vec<PortfolioTarget> {
        targets.to_vec()
    }
}
