// In crates/core-types/src/lib.rs

pub mod snapshot;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use snapshot::{Holdings, PortfolioSnapshot};
pub use types::{
    Bar, Holding, OpenOrder, OrderRequest, OrderType, PortfolioTarget, Quote, SecurityChanges,
    Side, Symbol,
};
