//! The backtest result document.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Root of a results JSON file.
///
/// Only the parts the report reads are modelled; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResult {
    /// Named statistics, in document order. Values are strings or numbers.
    #[serde(default)]
    pub statistics: Map<String, Value>,
    /// Chart name -> chart.
    #[serde(default)]
    pub charts: BTreeMap<String, Chart>,
    #[serde(default)]
    pub algorithm_configuration: AlgorithmConfiguration,
    /// Explicit strategy name, when the producer wrote one.
    #[serde(default, alias = "strategy-name")]
    pub strategy_name: Option<String>,
}

impl BacktestResult {
    /// Look up `charts[chart].series[series]`.
    pub fn series(&self, chart: &str, series: &str) -> Option<&ChartSeries> {
        self.charts.get(chart)?.series.get(series)
    }

    /// Explicit strategy name, ignoring blank values.
    pub fn explicit_strategy_name(&self) -> Option<&str> {
        non_blank(self.strategy_name.as_deref())
    }

    /// Name from the algorithm configuration, ignoring blank values.
    pub fn configured_name(&self) -> Option<&str> {
        non_blank(self.algorithm_configuration.name.as_deref())
    }

    /// Raw value of a named statistic.
    pub fn statistic(&self, name: &str) -> Option<&Value> {
        self.statistics.get(name)
    }
}

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}

/// One chart: a set of named series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub series: BTreeMap<String, ChartSeries>,
}

/// One series: rows of `[timestamp, v1, v2, ...]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// Algorithm configuration block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlgorithmConfiguration {
    #[serde(default)]
    pub name: Option<String>,
}
