// In crates/execution/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VwapSettings {
    /// The largest order as a fraction of the current bar's volume
    /// (0.01 means 1%, so a 100 share bar allows 1 share).
    #[serde(default = "default_percent_volume")]
    pub maximum_order_quantity_percent_volume: f64,
}

impl Default for VwapSettings {
    fn default() -> Self {
        Self {
            maximum_order_quantity_percent_volume: default_percent_volume(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StdDevSettings {
    /// Number of bars in the mean and standard deviation window.
    #[serde(default = "default_period")]
    pub period: usize,

    /// How many standard deviations the price must move away from the mean.
    #[serde(default = "default_deviations")]
    pub deviations: f64,

    /// The largest order in account currency. At a price of $100 the default
    /// of $20,000 allows 200 shares.
    #[serde(default = "default_maximum_order_value")]
    pub maximum_order_value: f64,
}

impl Default for StdDevSettings {
    fn default() -> Self {
        Self {
            period: default_period(),
            deviations: default_deviations(),
            maximum_order_value: default_maximum_order_value(),
        }
    }
}

fn default_percent_volume() -> f64 {
    0.01
}
fn default_period() -> usize {
    60
}
fn default_deviations() -> f64 {
    2.0
}
fn default_maximum_order_value() -> f64 {
    20_000.0
}
