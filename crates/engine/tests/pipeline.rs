use chrono::{TimeZone, Utc};
use core_types::{
    Bar, Holding, OpenOrder, OrderRequest, PortfolioSnapshot, PortfolioTarget, Quote,
    SecurityChanges, Symbol,
};
use engine::Pipeline;
use execution::ImmediateExecutor;
use risk::MaxDrawdownPerSecurity;
use rust_decimal_macros::dec;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn default_pipeline() -> Pipeline {
    Pipeline::new(
        Box::new(MaxDrawdownPerSecurity::new(dec!(0.05))),
        Box::new(ImmediateExecutor::new()),
    )
}

#[test]
fn breached_position_is_sold_while_others_trade() {
    init_tracing();
    let x = Symbol::from("X");
    let y = Symbol::from("Y");
    let state = PortfolioSnapshot::new()
        .with_holding(x.clone(), Holding::new(dec!(10), dec!(-0.06)))
        .with_holding(y.clone(), Holding::new(dec!(10), dec!(-0.04)));
    let targets = vec![
        PortfolioTarget::new(x.clone(), dec!(10)),
        PortfolioTarget::new(y.clone(), dec!(15)),
    ];

    let mut orders = Vec::new();
    let report = default_pipeline().run_cycle(&state, &targets, &mut orders);

    assert_eq!(
        report.adjusted_targets,
        vec![
            PortfolioTarget::new(y.clone(), dec!(15)),
            PortfolioTarget::liquidate(x.clone()),
        ]
    );
    assert_eq!(
        orders,
        vec![
            OrderRequest::market(y, dec!(5)),
            OrderRequest::market(x, dec!(-10)),
        ]
    );
    assert_eq!(report.orders_submitted, 2);
}

#[test]
fn liquidation_accounts_for_open_orders() {
    init_tracing();
    let x = Symbol::from("X");
    let state = PortfolioSnapshot::new()
        .with_holding(x.clone(), Holding::new(dec!(10), dec!(-0.3)))
        .with_open_order(OpenOrder::new(x.clone(), dec!(-4)));

    let mut orders = Vec::new();
    default_pipeline().run_cycle(&state, &[], &mut orders);

    assert_eq!(orders, vec![OrderRequest::market(x, dec!(-6))]);
}

#[test]
fn steady_state_cycle_is_quiet() {
    init_tracing();
    let spy = Symbol::from("SPY");
    let state = PortfolioSnapshot::new()
        .with_holding(spy.clone(), Holding::new(dec!(100), dec!(0.02)))
        .with_open_order(OpenOrder::new(spy.clone(), dec!(20)));

    let targets = [PortfolioTarget::new(spy.clone(), dec!(120))];
    let mut pipeline = default_pipeline();
    let mut orders = Vec::new();
    for _ in 0..3 {
        let report = pipeline.run_cycle(&state, &targets, &mut orders);
        assert_eq!(report.orders_submitted, 0);
    }
    assert!(orders.is_empty());
}

#[test]
fn pipeline_from_settings_runs_vwap_slices() {
    init_tracing();
    let settings = app_config::settings_from_toml(
        r#"
        [risk]
        model = "none"

        [execution]
        model = "vwap"

        [execution.vwap]
        maximum_order_quantity_percent_volume = 0.5
        "#,
    )
    .unwrap();
    let mut pipeline = Pipeline::from_settings(&settings).unwrap();
    assert_eq!(pipeline.risk_manager().name(), "NullRiskManager");
    assert_eq!(pipeline.executor().name(), "VwapExecutor");

    let spy = Symbol::from("SPY");
    pipeline.on_securities_changed(&SecurityChanges::added([spy.clone()]));
    pipeline.on_bar(&Bar {
        symbol: spy.clone(),
        end_time: Utc.with_ymd_and_hms(2013, 10, 7, 15, 0, 0).unwrap(),
        open: dec!(50),
        high: dec!(50),
        low: dec!(50),
        close: dec!(50),
        volume: dec!(200),
        is_fill_forward: false,
    });

    let quote = Quote {
        price: dec!(49),
        bid_price: dec!(48.9),
        ask_price: dec!(49.1),
        volume: dec!(10),
        lot_size: dec!(1),
    };
    let targets = [PortfolioTarget::new(spy.clone(), dec!(8))];
    let mut orders = Vec::new();

    // First cycle: half of the 10 share bar.
    let state = PortfolioSnapshot::new().with_quote(spy.clone(), quote.clone());
    pipeline.run_cycle(&state, &targets, &mut orders);

    // Second cycle: the first slice is now an open order; no new targets.
    let state = PortfolioSnapshot::new()
        .with_quote(spy.clone(), quote)
        .with_open_order(OpenOrder::new(spy.clone(), dec!(5)));
    pipeline.run_cycle(&state, &[], &mut orders);

    assert_eq!(
        orders,
        vec![
            OrderRequest::market(spy.clone(), dec!(5)),
            OrderRequest::market(spy, dec!(3)),
        ]
    );
}

#[test]
fn invalid_settings_are_reported() {
    let settings = app_config::settings_from_toml(
        r#"
        [execution]
        model = "std_dev"

        [execution.std_dev]
        period = 0
        "#,
    )
    .unwrap();

    assert!(Pipeline::from_settings(&settings).is_err());
}
