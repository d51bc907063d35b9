//! Rendering and writing the report document.

use askama::Template;
use chrono::NaiveDateTime;
use report_charts::ChartImage;
use report_core::{BacktestResult, EquityPoint, Trade};
use report_stats::{Bucket, StatLine, StatisticsReport};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::context::{backtest_period, resolve_run_time, resolve_strategy_name, TradeRow};

const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors from composing or writing a report.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Failed to render report template: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to write report {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything one report is built from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub result: &'a BacktestResult,
    /// Name of the run folder, used for the strategy name and run time.
    pub folder_name: Option<&'a str>,
    pub equity: &'a [EquityPoint],
    pub statistics: &'a StatisticsReport,
    pub trades: &'a [Trade],
    pub equity_chart: &'a ChartImage,
    pub drawdown_chart: &'a ChartImage,
    /// Shown in the footer. Passed in so the same inputs give the same bytes.
    pub generated_at: NaiveDateTime,
}

struct StatCard<'a> {
    title: &'static str,
    lines: &'a [StatLine],
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    strategy_name: String,
    period: String,
    run_time: String,
    equity_chart: String,
    drawdown_chart: String,
    cards: Vec<StatCard<'a>>,
    statistics: &'a [StatLine],
    trades: Vec<TradeRow>,
    generated_at: String,
}

/// Render the complete HTML document.
pub fn compose(inputs: &ReportInputs<'_>) -> Result<String, ComposeError> {
    let template = ReportTemplate {
        strategy_name: resolve_strategy_name(inputs.result, inputs.folder_name),
        period: backtest_period(inputs.equity),
        run_time: resolve_run_time(inputs.folder_name),
        equity_chart: inputs.equity_chart.data_uri(),
        drawdown_chart: inputs.drawdown_chart.data_uri(),
        cards: Bucket::ALL
            .iter()
            .map(|bucket| StatCard {
                title: bucket.title(),
                lines: inputs.statistics.bucket(*bucket),
            })
            .collect(),
        statistics: &inputs.statistics.all,
        trades: inputs.trades.iter().map(TradeRow::from).collect(),
        generated_at: inputs.generated_at.format(GENERATED_AT_FORMAT).to_string(),
    };

    debug!(
        "Composing report for {} with {} statistics and {} trades",
        template.strategy_name,
        template.statistics.len(),
        template.trades.len()
    );
    Ok(template.render()?)
}

/// Write the document, replacing any existing file.
pub fn write_report(path: &Path, html: &str) -> Result<(), ComposeError> {
    fs::write(path, html).map_err(|source| ComposeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Report written to {} ({} bytes)", path.display(), html.len());
    Ok(())
}
