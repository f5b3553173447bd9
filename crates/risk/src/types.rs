// In crates/risk/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MaxDrawdownSettings {
    /// Largest unrealized loss tolerated per holding (0.05 for 5%).
    /// The sign is ignored.
    #[serde(default = "default_maximum_drawdown_percent")]
    pub maximum_drawdown_percent: f64,
}

impl Default for MaxDrawdownSettings {
    fn default() -> Self {
        Self {
            maximum_drawdown_percent: default_maximum_drawdown_percent(),
        }
    }
}

fn default_maximum_drawdown_percent() -> f64 {
    0.05
}
