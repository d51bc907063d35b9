//! Statistic value formatting.

use serde::Serialize;
use serde_json::Value;

use crate::numfmt::{fmt_currency, fmt_grouped};
use crate::rules::format_for;

/// How a statistic value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueFormat {
    /// `0.1234` -> `12.34%`
    Percent,
    /// `1234.5` -> `$1,234.50`
    Currency,
    /// Four places below 100, otherwise two places with separators.
    Number,
}

/// Outcome of formatting a raw statistic value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedStat {
    Formatted(String),
    /// The value could not be read as a number and is shown verbatim.
    Passthrough(String),
}

impl FormattedStat {
    pub fn is_passthrough(&self) -> bool {
        matches!(self, FormattedStat::Passthrough(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            FormattedStat::Formatted(s) | FormattedStat::Passthrough(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            FormattedStat::Formatted(s) | FormattedStat::Passthrough(s) => s,
        }
    }
}

impl std::fmt::Display for FormattedStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a statistic using the format its name selects.
pub fn format_stat(name: &str, value: &Value) -> FormattedStat {
    format_value(format_for(name), value)
}

/// Format a raw value.
pub fn format_value(format: ValueFormat, value: &Value) -> FormattedStat {
    if format == ValueFormat::Percent && is_blank_or_zero(value) {
        return FormattedStat::Formatted("0.00%".to_string());
    }

    let Some(number) = numeric_value(value) else {
        return FormattedStat::Passthrough(raw_display(value));
    };

    let display = match format {
        ValueFormat::Percent => format!("{:.2}%", number * 100.0),
        ValueFormat::Currency => fmt_currency(number),
        ValueFormat::Number if number.abs() < 100.0 => format!("{:.4}", number),
        ValueFormat::Number => fmt_grouped(number, 2),
    };
    FormattedStat::Formatted(display)
}

/// Numeric reading of a raw value, if it has one.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_blank_or_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn raw_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn show(name: &str, value: Value) -> String {
        format_stat(name, &value).into_string()
    }

    #[test]
    fn test_percent() {
        assert_eq!(show("Win Rate", json!(0.55)), "55.00%");
        assert_eq!(show("Win Rate", json!("0.55")), "55.00%");
        assert_eq!(show("Drawdown", json!(-0.0123)), "-1.23%");
    }

    #[test]
    fn test_percent_zero_or_empty() {
        assert_eq!(show("Win Rate", json!(0)), "0.00%");
        assert_eq!(show("Win Rate", json!("")), "0.00%");
        assert_eq!(show("Win Rate", json!("0")), "0.00%");
        assert_eq!(show("Win Rate", Value::Null), "0.00%");
    }

    #[test]
    fn test_currency() {
        assert_eq!(show("End Equity", json!(100000)), "$100,000.00");
        assert_eq!(show("Start Equity", json!("100000")), "$100,000.00");
        assert_eq!(show("Total Fees", json!("-12.3456")), "$-12.35");
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(show("Sharpe Ratio", json!(1.2345)), "1.2345");
        assert_eq!(show("Sortino Ratio", json!(1.5)), "150.00%");
        assert_eq!(show("Alpha", json!("-0.01")), "-0.0100");
        assert_eq!(show("Total Orders", json!("2")), "2.0000");
        assert_eq!(show("Total Orders", json!(1234.5)), "1,234.50");
        assert_eq!(show("Tracking Error", json!(-250)), "-250.00");
    }

    #[test]
    fn test_non_numeric_passes_through() {
        let formatted = format_stat("Net Profit", &json!("12.345%"));
        assert!(formatted.is_passthrough());
        assert_eq!(formatted.as_str(), "12.345%");

        assert_eq!(show("Compounding Annual Return", json!("3.2%")), "3.2%");
        assert_eq!(
            show("Lowest Capacity Asset", json!("XOM R735QTJ8XC9X")),
            "XOM R735QTJ8XC9X"
        );
        assert_eq!(show("End Equity", Value::Null), "");
    }

    #[test]
    fn test_whitespace_is_trimmed_before_parsing() {
        assert_eq!(show("End Equity", json!(" 2500 ")), "$2,500.00");
    }
}
