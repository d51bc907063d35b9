//! Equity and drawdown series extraction.

use report_core::{BacktestResult, DrawdownPoint, EquityPoint, ReportError, ReportResult, SeriesPoint};
use serde_json::Value;
use tracing::debug;

pub const EQUITY_CHART: &str = "Strategy Equity";
pub const EQUITY_SERIES: &str = "Equity";
pub const DRAWDOWN_CHART: &str = "Drawdown";
pub const DRAWDOWN_SERIES: &str = "Equity Drawdown";

/// Column holding the closing value in `[timestamp, open, high, low, close]`.
const EQUITY_CLOSE_COLUMN: usize = 4;
/// Column holding the value in `[timestamp, value]`.
const DRAWDOWN_VALUE_COLUMN: usize = 1;

/// Closing equity over time.
pub fn extract_equity(result: &BacktestResult) -> ReportResult<Vec<EquityPoint>> {
    extract(result, EQUITY_CHART, EQUITY_SERIES, EQUITY_CLOSE_COLUMN)
}

/// Drawdown percentage over time.
pub fn extract_drawdown(result: &BacktestResult) -> ReportResult<Vec<DrawdownPoint>> {
    extract(result, DRAWDOWN_CHART, DRAWDOWN_SERIES, DRAWDOWN_VALUE_COLUMN)
}

fn extract(
    result: &BacktestResult,
    chart: &str,
    series: &str,
    value_column: usize,
) -> ReportResult<Vec<SeriesPoint>> {
    let values = &result
        .series(chart, series)
        .ok_or_else(|| ReportError::Schema {
            chart: chart.to_string(),
            series: series.to_string(),
        })?
        .values;

    let mut points = Vec::with_capacity(values.len());
    for (index, row) in values.iter().enumerate() {
        match parse_row(row, value_column) {
            Some(point) => points.push(point),
            None => debug!("Skipping {chart}/{series} row {index}: {row}"),
        }
    }
    Ok(points)
}

fn parse_row(row: &Value, value_column: usize) -> Option<SeriesPoint> {
    let columns = row.as_array()?;
    let timestamp = epoch_seconds(columns.first()?)?;
    let value = columns.get(value_column)?.as_f64()?;
    SeriesPoint::from_epoch(timestamp, value)
}

fn epoch_seconds(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|t| t.is_finite()).map(|t| t as i64))
}
