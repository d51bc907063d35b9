//! Time series points.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A value at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Closing portfolio value at a timestamp.
pub type EquityPoint = SeriesPoint;

/// Drawdown percentage at a timestamp.
pub type DrawdownPoint = SeriesPoint;

impl SeriesPoint {
    /// Build a point from epoch seconds. `None` when out of range.
    pub fn from_epoch(seconds: i64, value: f64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(|timestamp| Self { timestamp, value })
    }

    /// Calendar date of the point.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
