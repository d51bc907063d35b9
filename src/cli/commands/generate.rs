//! Report generation command.

use anyhow::{Context, Result};
use chrono::Local;
use report_charts::{render_drawdown, render_equity};
use report_config::ReportConfig;
use report_core::{NotFoundError, ReportError};
use report_data::{
    extract_drawdown, extract_equity, filter_filled, find_results_file, into_trades,
    load_order_events, load_results, ResultsDirectory,
};
use report_html::{compose, console_summary, write_report, ReportInputs};
use report_stats::classify;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::cli::Cli;

pub fn run(cli: &Cli, config: &ReportConfig) -> Result<()> {
    let results = ResultsDirectory::new(cli.results_dir(config));
    let folder = locate_folder(&results, cli.folder.as_deref())?;
    let folder_name = folder.file_name().and_then(|n| n.to_str());
    info!("Using results folder: {}", folder.display());

    info!("Loading backtest results...");
    let file = find_results_file(&folder).context("Failed to find results file")?;
    if file.fallback {
        warn!(
            "{} not found, using {}",
            file.expected_name,
            file.path.display()
        );
    }
    let result = load_results(&file.path).context("Failed to load backtest results")?;

    info!("Loading order events...");
    let trades = match load_order_events(&folder) {
        Ok(events) => {
            let total = events.len();
            let filled = filter_filled(events);
            info!("{} of {} order events are fills", filled.len(), total);
            into_trades(&filled)
        }
        Err(err) => {
            warn!("{}; trade ledger will be empty", err);
            Vec::new()
        }
    };

    info!("Generating charts...");
    let equity = extract_equity(&result)?;
    let drawdown = extract_drawdown(&result)?;
    let equity_chart =
        render_equity(&equity, &config.charts).context("Failed to render equity chart")?;
    let drawdown_chart =
        render_drawdown(&drawdown, &config.charts).context("Failed to render drawdown chart")?;

    info!("Generating HTML report...");
    let statistics = classify(&result.statistics);
    let html = compose(&ReportInputs {
        result: &result,
        folder_name,
        equity: &equity,
        statistics: &statistics,
        trades: &trades,
        equity_chart: &equity_chart,
        drawdown_chart: &drawdown_chart,
        generated_at: Local::now().naive_local(),
    })
    .context("Failed to compose report")?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| folder.join(&config.results.output_file));
    write_report(&output, &html)?;

    println!("{}", console_summary(&statistics));
    println!("Report saved to: {}", output.display());

    Ok(())
}

/// The named run folder, or the most recent one.
fn locate_folder(results: &ResultsDirectory, name: Option<&str>) -> Result<PathBuf> {
    let located = match name {
        Some(name) => results.named(name),
        None => results.most_recent(),
    };

    match located {
        Ok(folder) => Ok(folder),
        Err(ReportError::NotFound(NotFoundError::RunFolder { folder, available })) => {
            eprintln!("Available folders:");
            for name in &available {
                eprintln!("  - {}", name);
            }
            Err(NotFoundError::RunFolder { folder, available }.into())
        }
        Err(err) => Err(err.into()),
    }
}
