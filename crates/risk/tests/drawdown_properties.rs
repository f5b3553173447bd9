//! Property-based tests for the per-security drawdown limit.

use core_types::{Holding, Holdings, PortfolioTarget, Symbol};
use proptest::prelude::*;
use risk::{MaxDrawdownPerSecurity, RiskManager};
use rust_decimal::Decimal;

const TICKERS: [&str; 5] = ["AIG", "BAC", "IBM", "SPY", "QQQ"];

/// Percentages in basis points keep the generated decimals exact.
fn holding_strategy() -> impl Strategy<Value = Holding> {
    (-1_000i64..1_000, -2_000i64..2_000, any::<bool>()).prop_map(|(qty, bps, invested)| Holding {
        quantity: Decimal::from(qty),
        is_invested: invested,
        unrealized_profit_percent: Decimal::new(bps, 4),
    })
}

fn holdings_strategy() -> impl Strategy<Value = Holdings> {
    prop::collection::hash_map(
        prop::sample::select(TICKERS.to_vec()).prop_map(Symbol::from),
        holding_strategy(),
        0..TICKERS.len(),
    )
}

fn targets_strategy() -> impl Strategy<Value = Vec<PortfolioTarget>> {
    prop::collection::vec(
        (prop::sample::select(TICKERS.to_vec()), -500i64..500)
            .prop_map(|(ticker, qty)| {
                PortfolioTarget::new(Symbol::from(ticker), Decimal::from(qty))
            }),
        0..12,
    )
}

proptest! {
    /// Breached, invested holdings end with exactly one zero target.
    #[test]
    fn breached_holdings_get_single_liquidation(
        holdings in holdings_strategy(),
        targets in targets_strategy(),
        limit_bps in 1i64..1_000,
    ) {
        let limit = Decimal::new(limit_bps, 4);
        let manager = MaxDrawdownPerSecurity::new(limit);
        let adjusted = manager.evaluate(&holdings, &targets);

        for (symbol, holding) in &holdings {
            if holding.is_invested && holding.unrealized_profit_percent < -limit {
                let matching: Vec<_> = adjusted.iter().filter(|t| &t.symbol == symbol).collect();
                prop_assert_eq!(matching.len(), 1);
                prop_assert!(matching[0].quantity.is_zero());
            }
        }
    }

    /// Targets of symbols that did not breach survive unchanged and in order.
    #[test]
    fn untouched_targets_are_preserved(
        holdings in holdings_strategy(),
        targets in targets_strategy(),
        limit_bps in 1i64..1_000,
    ) {
        let limit = Decimal::new(limit_bps, 4);
        let manager = MaxDrawdownPerSecurity::new(limit);
        let adjusted = manager.evaluate(&holdings, &targets);

        let breached = |symbol: &Symbol| {
            holdings
                .get(symbol)
                .is_some_and(|h| h.is_invested && h.unrealized_profit_percent < -limit)
        };

        let expected: Vec<_> = targets.iter().filter(|t| !breached(&t.symbol)).collect();
        let kept: Vec<_> = adjusted.iter().filter(|t| !breached(&t.symbol)).collect();
        prop_assert_eq!(kept, expected);
    }

    /// Two evaluations of the same inputs agree.
    #[test]
    fn evaluation_is_idempotent(
        holdings in holdings_strategy(),
        targets in targets_strategy(),
    ) {
        let manager = MaxDrawdownPerSecurity::default();
        prop_assert_eq!(
            manager.evaluate(&holdings, &targets),
            manager.evaluate(&holdings, &targets)
        );
    }
}
