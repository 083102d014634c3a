//! Trade fixture builders

use services_common::PowerTrade;

/// Build `count` trades, each covering periods 1..=periods at the same
/// volume per period
#[must_use]
pub fn uniform_trades(count: usize, periods: i32, volume: f64) -> Vec<PowerTrade> {
    (0..count)
        .map(|i| PowerTrade::with_uniform_volume(format!("trade-{i}"), periods, volume))
        .collect()
}
