// In crates/execution/src/indicators.rs

use crate::{Error, Result};
use chrono::NaiveDate;
use core_types::Bar;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use ta::Next;
use ta::indicators::{SimpleMovingAverage as Sma, StandardDeviation};

/// Volume weighted average price that restarts every trading day (UTC).
#[derive(Debug, Default, Clone)]
pub struct IntradayVwap {
    value: Decimal,
    current_date: Option<NaiveDate>,
    sum_of_volume: Decimal,
    sum_of_price_times_volume: Decimal,
}

impl IntradayVwap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_ready(&self) -> bool {
        self.sum_of_volume > Decimal::ZERO
    }

    pub fn update(&mut self, bar: &Bar) {
        // Fill-forward bars carry no new trades.
        if bar.is_fill_forward {
            return;
        }

        let date = bar.end_time.date_naive();
        if self.current_date != Some(date) {
            self.sum_of_volume = Decimal::ZERO;
            self.sum_of_price_times_volume = Decimal::ZERO;
            self.current_date = Some(date);
        }

        let typical_price = (bar.high + bar.low + bar.close) / Decimal::from(3);
        self.sum_of_volume += bar.volume;
        self.sum_of_price_times_volume += typical_price * bar.volume;

        self.value = if self.sum_of_volume.is_zero() {
            bar.close
        } else {
            self.sum_of_price_times_volume / self.sum_of_volume
        };
    }
}

/// Simple moving average and population standard deviation of the last
/// `period` closes, computed with the `ta` indicators.
#[derive(Debug, Clone)]
pub struct RollingStats {
    period: usize,
    samples: usize,
    sma: Sma,
    std_dev: StandardDeviation,
    mean: f64,
    deviation: f64,
}

impl RollingStats {
    pub fn new(period: usize) -> Result<Self> {
        let invalid = |e: ta::errors::TaError| {
            Error::InvalidParameters(format!("Invalid indicator period {period}: {e:?}"))
        };

        Ok(Self {
            period,
            samples: 0,
            sma: Sma::new(period).map_err(invalid)?,
            std_dev: StandardDeviation::new(period).map_err(invalid)?,
            mean: 0.0,
            deviation: 0.0,
        })
    }

    pub fn is_ready(&self) -> bool {
        self.samples >= self.period
    }

    pub fn update(&mut self, value: Decimal) {
        let value = value.to_f64().unwrap_or(0.0);
        self.mean = self.sma.next(value);
        self.deviation = self.std_dev.next(value);
        self.samples = (self.samples + 1).min(self.period);
    }

    pub fn mean(&self) -> Decimal {
        Decimal::from_f64(self.mean).unwrap_or(Decimal::ZERO)
    }

    pub fn std_dev(&self) -> Decimal {
        Decimal::from_f64(self.deviation).unwrap_or(Decimal::ZERO)
    }
}
