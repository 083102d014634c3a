//! Trading-day boundary arithmetic
//!
//! A power trading day runs from 23:00 local time on the calendar day
//! preceding the nominal date up to 23:00 local time on the nominal date.
//! Settlement period 1 is the interval starting at the trading-day start;
//! period k starts (k - 1) hours later, wrapping across midnight.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Local wall-clock hour at which a trading day starts
pub const TRADING_DAY_START_HOUR: u32 = 23;

/// A nominal trading date paired with the market timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingDay {
    date: NaiveDate,
    tz: Tz,
}

impl TradingDay {
    /// Create a trading day for the given nominal date
    #[must_use]
    pub const fn new(date: NaiveDate, tz: Tz) -> Self {
        Self { date, tz }
    }

    /// Nominal date of this trading day
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Market timezone
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Local start of the trading day: 23:00 on the preceding calendar day
    #[must_use]
    pub fn start(&self) -> DateTime<Tz> {
        let prev = self.date.pred_opt().unwrap_or(self.date);
        let naive = prev
            .and_hms_opt(TRADING_DAY_START_HOUR, 0, 0)
            .unwrap_or_else(|| prev.and_time(NaiveTime::MIN));

        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            // Fold: take the earlier of the two local readings
            LocalResult::Ambiguous(earliest, _) => earliest,
            // Gap: no tzdb zone transitions at 23:00; keep the UTC reading
            LocalResult::None => self.tz.from_utc_datetime(&naive),
        }
    }

    /// Number of settlement periods in this trading day.
    ///
    /// The whole-hour span between consecutive trading-day starts: 24 on
    /// a normal day, 23 or 25 around DST transitions.
    #[must_use]
    pub fn period_count(&self) -> i64 {
        let next = Self::new(self.date + Duration::days(1), self.tz);
        (next.start() - self.start()).num_hours()
    }

    /// Local wall-clock hour covered by the given settlement period.
    ///
    /// Period 1 covers hour 23, period 2 hour 0, and so on; period
    /// numbers beyond the day's granularity wrap modulo 24. Returns
    /// `None` for malformed (zero or negative) period numbers.
    #[must_use]
    pub fn hour_for_period(period: i32) -> Option<u32> {
        if period < 1 {
            return None;
        }
        // SAFETY: (period - 1) % 24 is in 0..24 for period >= 1
        let offset = ((period - 1) % 24) as u32;
        Some((TRADING_DAY_START_HOUR + offset) % 24)
    }
}
