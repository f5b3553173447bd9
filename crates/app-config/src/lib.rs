// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{ExecutionModel, ExecutionSettings, RiskModel, RiskSettings, Settings};

/// Loads the settings from the `config/` directory of the working directory.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables.
pub fn load_settings() -> Result<Settings> {
    load_settings_from("config")
}

/// Same as [`load_settings`], reading the files from `dir`.
pub fn load_settings_from(dir: &str) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    build_settings(dir, &environment, env_source())
}

/// Variables such as `APP__RISK__MAX_DRAWDOWN__MAXIMUM_DRAWDOWN_PERCENT=0.02`.
fn env_source() -> Environment {
    Environment::with_prefix("APP").separator("__")
}

fn build_settings(dir: &str, environment: &str, env: Environment) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::with_name(&format!("{dir}/base")))
        .add_source(File::with_name(&format!("{dir}/{environment}")).required(false))
        .add_source(env)
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    Ok(settings)
}

/// Parses settings straight from a TOML document.
pub fn settings_from_toml(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    Ok(settings)
}

/// Reads and parses a single TOML settings file.
pub fn load_settings_file(path: &str) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    settings_from_toml(&content)
}
