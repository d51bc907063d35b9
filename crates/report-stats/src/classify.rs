//! Splitting statistics into report cards.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::format::format_stat;
use crate::rules::{bucket_for, Bucket};

/// One formatted statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub value: String,
    pub bucket: Bucket,
    /// True when the raw value was shown verbatim.
    pub passthrough: bool,
}

/// Formatted statistics, grouped by card. Every list keeps the order of the
/// source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    pub performance: Vec<StatLine>,
    pub risk: Vec<StatLine>,
    pub trade: Vec<StatLine>,
    /// Every statistic, for the appendix table.
    pub all: Vec<StatLine>,
}

impl StatisticsReport {
    /// Lines of one card.
    pub fn bucket(&self, bucket: Bucket) -> &[StatLine] {
        match bucket {
            Bucket::Performance => &self.performance,
            Bucket::Risk => &self.risk,
            Bucket::Trade => &self.trade,
        }
    }

    /// Look up a statistic by exact name.
    pub fn get(&self, name: &str) -> Option<&StatLine> {
        self.all.iter().find(|line| line.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Classify and format a statistics mapping.
pub fn classify(statistics: &Map<String, Value>) -> StatisticsReport {
    let mut report = StatisticsReport::default();

    for (name, raw) in statistics {
        let formatted = format_stat(name, raw);
        let line = StatLine {
            name: name.clone(),
            passthrough: formatted.is_passthrough(),
            value: formatted.into_string(),
            bucket: bucket_for(name),
        };

        match line.bucket {
            Bucket::Performance => report.performance.push(line.clone()),
            Bucket::Risk => report.risk.push(line.clone()),
            Bucket::Trade => report.trade.push(line.clone()),
        }
        report.all.push(line);
    }

    let verbatim: Vec<&str> = report
        .all
        .iter()
        .filter(|line| line.passthrough)
        .map(|line| line.name.as_str())
        .collect();
    if !verbatim.is_empty() {
        warn!(
            "{} statistic(s) shown unformatted (not numeric): {}",
            verbatim.len(),
            verbatim.join(", ")
        );
    }

    report
}
