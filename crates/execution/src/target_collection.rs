// In crates/execution/src/target_collection.rs

use core_types::{PortfolioTarget, Symbol};
use std::collections::BTreeMap;

/// Targets remembered across cycles, at most one per symbol.
///
/// Adding a target for a symbol that is already present replaces it.
#[derive(Debug, Default, Clone)]
pub struct PortfolioTargetCollection {
    targets: BTreeMap<Symbol, PortfolioTarget>,
}

impl PortfolioTargetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: PortfolioTarget) {
        self.targets.insert(target.symbol.clone(), target);
    }

    pub fn add_range<'a>(&mut self, targets: impl IntoIterator<Item = &'a PortfolioTarget>) {
        for target in targets {
            self.add(target.clone());
        }
    }

    pub fn remove(&mut self, symbol: &Symbol) -> Option<PortfolioTarget> {
        self.targets.remove(symbol)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.targets.contains_key(symbol)
    }

    /// Iterates in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &PortfolioTarget> {
        self.targets.values()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn later_target_replaces_earlier() {
        let mut collection = PortfolioTargetCollection::new();
        collection.add_range(&[
            PortfolioTarget::new(Symbol::from("SPY"), dec!(10)),
            PortfolioTarget::new(Symbol::from("AIG"), dec!(5)),
            PortfolioTarget::new(Symbol::from("SPY"), dec!(-4)),
        ]);

        let kept: Vec<_> = collection
            .iter()
            .map(|t| (t.symbol.as_str(), t.quantity))
            .collect();
        assert_eq!(kept, vec![("AIG", dec!(5)), ("SPY", dec!(-4))]);
    }

    #[test]
    fn remove_drops_target() {
        let mut collection = PortfolioTargetCollection::new();
        collection.add(PortfolioTarget::new(Symbol::from("IBM"), dec!(1)));

        assert!(collection.remove(&Symbol::from("IBM")).is_some());
        assert!(!collection.contains(&Symbol::from("IBM")));
        assert!(collection.is_empty());
    }
}
