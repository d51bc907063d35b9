//! Keyword rule tables.
//!
//! Rules are evaluated top to bottom and the first match wins. Matching is a
//! case-insensitive substring test on the statistic name.

use serde::Serialize;

use crate::format::ValueFormat;

/// Matches a statistic name containing any of its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    keywords: &'static [&'static str],
}

impl KeywordRule {
    /// Keywords must be lower case.
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords.iter().any(|k| name.contains(k))
    }
}

/// Statistic card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bucket {
    Performance,
    Risk,
    Trade,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Performance, Bucket::Risk, Bucket::Trade];

    /// Card heading.
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Performance => "Performance Statistics",
            Bucket::Risk => "Risk Statistics",
            Bucket::Trade => "Trade Statistics",
        }
    }
}

/// Card rules. Unmatched names go to `Bucket::Trade`.
pub const BUCKET_RULES: &[(KeywordRule, Bucket)] = &[
    (
        KeywordRule::new(&["return", "profit", "alpha", "beta", "information"]),
        Bucket::Performance,
    ),
    (
        KeywordRule::new(&["sharpe", "sortino", "drawdown", "variance", "deviation", "risk"]),
        Bucket::Risk,
    ),
];

/// Format rules. Unmatched names use `ValueFormat::Number`.
///
/// The Sharpe ratio is a plain multiple and is matched before the generic
/// `ratio` keyword; probabilistic Sharpe is a probability and is matched
/// before it.
pub const FORMAT_RULES: &[(KeywordRule, ValueFormat)] = &[
    (KeywordRule::new(&["probabilistic"]), ValueFormat::Percent),
    (KeywordRule::new(&["sharpe ratio"]), ValueFormat::Number),
    (
        KeywordRule::new(&[
            "rate",
            "return",
            "ratio",
            "drawdown",
            "variance",
            "turnover",
            "deviation",
        ]),
        ValueFormat::Percent,
    ),
    (
        KeywordRule::new(&["equity", "fees", "capacity"]),
        ValueFormat::Currency,
    ),
];

/// Card for a statistic name.
pub fn bucket_for(name: &str) -> Bucket {
    first_match(BUCKET_RULES, name).unwrap_or(Bucket::Trade)
}

/// Display format for a statistic name.
pub fn format_for(name: &str) -> ValueFormat {
    first_match(FORMAT_RULES, name).unwrap_or(ValueFormat::Number)
}

fn first_match<T: Copy>(rules: &[(KeywordRule, T)], name: &str) -> Option<T> {
    rules
        .iter()
        .find(|(rule, _)| rule.matches(name))
        .map(|(_, outcome)| *outcome)
}
