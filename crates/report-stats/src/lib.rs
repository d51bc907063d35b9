//! Statistic classification and display formatting.
//!
//! Both the card a statistic lands in and the way its value is printed are
//! decided by ordered keyword rule tables over the statistic name.

mod classify;
mod format;
mod numfmt;
mod rules;

pub use classify::{classify, StatLine, StatisticsReport};
pub use format::{format_stat, format_value, numeric_value, FormattedStat, ValueFormat};
pub use numfmt::{fmt_currency, fmt_decimal, fmt_decimal_currency, fmt_grouped, group_thousands};
pub use rules::{bucket_for, format_for, Bucket, KeywordRule, BUCKET_RULES, FORMAT_RULES};
