//! Tests for the trade-to-hour aggregation fold

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::*;

use power_position::aggregator::{HourlyPosition, PositionAggregator};
use services_common::{PowerPeriod, PowerTrade, ServiceError};
use test_utils::{FailingPowerService, FixturePowerService, uniform_trades};

fn trading_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn empty_trade_list_yields_empty_position() {
    let position = HourlyPosition::from_trades(&[]);

    assert!(position.is_empty());
    assert_eq!(position.len(), 0);
    assert_eq!(position.skipped_periods(), 0);
}

#[rstest]
#[case(2)]
#[case(5)]
#[case(15)]
#[case(24)]
fn two_uniform_trades_sum_in_every_bucket(#[case] period_count: i32) {
    // Volumes 10 and 5 per period: every covered hour sums to 15
    let mut trades = uniform_trades(1, period_count, 10.0);
    trades.extend(uniform_trades(1, period_count, 5.0));

    let position = HourlyPosition::from_trades(&trades);

    assert_eq!(position.len(), period_count as usize);
    for (_, volume) in position.iter() {
        assert_eq!(volume, 15.0);
    }
}

#[test]
fn period_one_lands_on_hour_23() {
    let trades = vec![
        PowerTrade::new("a", vec![PowerPeriod::new(1, 10.0)]),
        PowerTrade::new("b", vec![PowerPeriod::new(1, 5.0)]),
    ];

    let position = HourlyPosition::from_trades(&trades);

    assert_eq!(position.len(), 1);
    assert_eq!(position.volume_at(23), Some(15.0));
}

#[test]
fn aggregation_is_order_independent() {
    let ascending = PowerTrade::new(
        "asc",
        (1..=24).map(|p| PowerPeriod::new(p, f64::from(p))).collect(),
    );
    let descending = PowerTrade::new(
        "desc",
        (1..=24).rev().map(|p| PowerPeriod::new(p, 0.5)).collect(),
    );

    let forward = HourlyPosition::from_trades(&[ascending.clone(), descending.clone()]);
    let reversed = HourlyPosition::from_trades(&[descending, ascending]);

    assert_eq!(forward.to_map(), reversed.to_map());
}

#[test]
fn dst_long_day_wraps_period_25_onto_hour_23() {
    let trades = vec![PowerTrade::new(
        "long-day",
        vec![PowerPeriod::new(1, 10.0), PowerPeriod::new(25, 2.5)],
    )];

    let position = HourlyPosition::from_trades(&trades);

    assert_eq!(position.len(), 1);
    assert_eq!(position.volume_at(23), Some(12.5));
}

#[test]
fn malformed_periods_are_skipped_and_counted() {
    let trades = vec![PowerTrade::new(
        "mixed",
        vec![
            PowerPeriod::new(0, 99.0),
            PowerPeriod::new(-4, 1.0),
            PowerPeriod::new(2, 7.0),
        ],
    )];

    let position = HourlyPosition::from_trades(&trades);

    assert_eq!(position.skipped_periods(), 2);
    assert_eq!(position.len(), 1);
    assert_eq!(position.volume_at(0), Some(7.0));
}

#[test]
fn negative_volumes_offset_positive_ones() {
    let trades = vec![
        PowerTrade::new("buy", vec![PowerPeriod::new(3, 10.0)]),
        PowerTrade::new("sell", vec![PowerPeriod::new(3, -4.0)]),
    ];

    let position = HourlyPosition::from_trades(&trades);

    assert_eq!(position.volume_at(1), Some(6.0));
}

#[tokio::test]
async fn aggregator_folds_provider_trades() {
    let service = FixturePowerService::new(uniform_trades(3, 24, 2.0));
    let aggregator = PositionAggregator::new(service);

    let position = aggregator.aggregate(trading_date()).await.unwrap();

    assert_eq!(position.len(), 24);
    assert_eq!(position.total_volume(), 144.0);
}

#[tokio::test]
async fn retrieval_failure_surfaces_unchanged() {
    let aggregator = PositionAggregator::new(FailingPowerService::new("link down"));

    let err = aggregator.aggregate(trading_date()).await.unwrap_err();

    assert!(matches!(err, ServiceError::TradeRetrieval(_)));
}
