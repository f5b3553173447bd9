// In crates/app-config/src/types.rs

use execution::types::{StdDevSettings, VwapSettings};
use risk::types::MaxDrawdownSettings;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Settings {
    #[serde(default)]
    pub risk: RiskSettings,
    #[serde(default)]
    pub execution: ExecutionSettings,
}

/// Which risk management model runs ahead of execution.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskModel {
    #[default]
    MaxDrawdownPerSecurity,
    /// Targets pass through unchanged.
    None,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RiskSettings {
    #[serde(default)]
    pub model: RiskModel,
    #[serde(default)]
    pub max_drawdown: MaxDrawdownSettings,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionModel {
    #[default]
    Immediate,
    Vwap,
    StdDev,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ExecutionSettings {
    #[serde(default)]
    pub model: ExecutionModel,
    #[serde(default)]
    pub vwap: VwapSettings,
    #[serde(default)]
    pub std_dev: StdDevSettings,
}
