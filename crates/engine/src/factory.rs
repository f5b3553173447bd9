//! This module builds risk managers and executors from configuration.

use app_config::{ExecutionModel, ExecutionSettings, RiskModel, RiskSettings};
use execution::{Executor, ImmediateExecutor, StdDevExecutor, VwapExecutor};
use risk::{MaxDrawdownPerSecurity, NullRiskManager, RiskManager};

/// Creates the risk manager selected in the settings.
pub fn create_risk_manager(settings: &RiskSettings) -> risk::Result<Box<dyn RiskManager>> {
    let manager: Box<dyn RiskManager> = match settings.model {
        RiskModel::MaxDrawdownPerSecurity => {
            Box::new(MaxDrawdownPerSecurity::from_settings(&settings.max_drawdown)?)
        }
        RiskModel::None => {
            tracing::warn!("Risk management is disabled. Targets will not be filtered.");
            Box::new(NullRiskManager)
        }
    };

    tracing::info!(name = manager.name(), "Risk manager created.");
    Ok(manager)
}

/// Creates the executor selected in the settings.
pub fn create_executor(settings: &ExecutionSettings) -> execution::Result<Box<dyn Executor>> {
    let executor: Box<dyn Executor> = match settings.model {
        ExecutionModel::Immediate => Box::new(ImmediateExecutor::new()),
        ExecutionModel::Vwap => Box::new(VwapExecutor::new(&settings.vwap)?),
        ExecutionModel::StdDev => Box::new(StdDevExecutor::new(&settings.std_dev)?),
    };

    tracing::info!(name = executor.name(), "Executor created.");
    Ok(executor)
}
