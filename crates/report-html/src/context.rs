//! Values shown in the report header and ledger.

use report_core::{parse_folder_name, strategy_name_from_folder, BacktestResult, EquityPoint, Trade};
use report_stats::{fmt_decimal, fmt_decimal_currency};

/// Placeholder for anything the inputs do not provide.
pub const NOT_AVAILABLE: &str = "N/A";

const TRADE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Strategy name shown in the report.
///
/// An explicit `strategy-name` wins, then the folder name without its
/// timestamp suffix, then `algorithmConfiguration.name`.
pub fn resolve_strategy_name(result: &BacktestResult, folder_name: Option<&str>) -> String {
    if let Some(name) = result.explicit_strategy_name() {
        return name.to_string();
    }
    if let Some(name) = folder_name
        .map(strategy_name_from_folder)
        .filter(|name| !name.trim().is_empty())
    {
        return name;
    }
    result
        .configured_name()
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Run time parsed from the folder suffix, formatted `YYYY-MM-DD HH:MM:SS`.
pub fn resolve_run_time(folder_name: Option<&str>) -> String {
    folder_name
        .and_then(parse_folder_name)
        .and_then(|stamped| stamped.run_time_display())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// First to last equity date, e.g. `2016-01-01 to 2020-12-31`.
pub fn backtest_period(equity: &[EquityPoint]) -> String {
    match (equity.first(), equity.last()) {
        (Some(first), Some(last)) => format!("{} to {}", first.date(), last.date()),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// A trade with every column already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TradeRow {
    pub order_id: i64,
    pub time: String,
    pub symbol: String,
    pub direction: String,
    pub css_class: &'static str,
    pub quantity: String,
    pub fill_price: String,
    pub total_value: String,
    pub fee: String,
}

impl From<&Trade> for TradeRow {
    fn from(trade: &Trade) -> Self {
        Self {
            order_id: trade.order_id,
            time: trade.time.format(TRADE_TIME_FORMAT).to_string(),
            symbol: trade.symbol.clone(),
            direction: trade.direction.to_string(),
            css_class: trade.direction.css_class(),
            quantity: fmt_decimal(trade.quantity, 0),
            fill_price: fmt_decimal_currency(trade.fill_price),
            total_value: fmt_decimal_currency(trade.total_value()),
            fee: fmt_decimal_currency(trade.fee),
        }
    }
}
