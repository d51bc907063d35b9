//! Full pipeline over a synthetic run folder.

use chrono::NaiveDate;
use report_charts::{render_drawdown, render_equity, ChartDimensions};
use report_data::{
    extract_drawdown, extract_equity, filter_filled, find_results_file, into_trades,
    load_order_events, load_results, ResultsDirectory,
};
use report_html::{compose, write_report, ReportInputs};
use report_stats::classify;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

fn write_run_folder(root: &Path, with_events: bool) -> PathBuf {
    let folder = root.join("BuyAndHold-20260101-220149");
    fs::create_dir_all(&folder).unwrap();

    let results = json!({
        "statistics": {
            "Total Orders": "2",
            "Net Profit": "1.5%",
            "Sharpe Ratio": "1.2345",
            "Drawdown": "0.0167",
            "Win Rate": "0.55",
            "End Equity": "99800"
        },
        "charts": {
            "Strategy Equity": {"series": {"Equity": {"values": [
                [1451606400, 100000, 100000, 100000, 100000],
                [1451692800, 101500, 101500, 101500, 101500],
                [1451779200, 99800, 99800, 99800, 99800]
            ]}}},
            "Drawdown": {"series": {"Equity Drawdown": {"values": [
                [1451606400, 0],
                [1451692800, 0],
                [1451779200, -1.67]
            ]}}}
        },
        "algorithmConfiguration": {"name": "BuyAndHoldAlgorithm"}
    });
    fs::write(folder.join("BuyAndHold.json"), results.to_string()).unwrap();

    if with_events {
        let events = json!([
            {"orderId": 1, "status": "submitted", "time": 1451606400, "symbolValue": "SPY", "direction": "buy"},
            {"orderId": 1, "status": "filled", "time": 1451606400, "symbolValue": "SPY",
             "direction": "buy", "fillQuantity": 500, "fillPrice": 200.0, "orderFeeAmount": 1.0},
            {"orderId": 2, "status": "filled", "time": 1451779200, "symbolValue": "SPY",
             "direction": "sell", "fillQuantity": -500, "fillPrice": 199.6, "orderFeeAmount": 1.0}
        ]);
        fs::write(
            folder.join("BuyAndHold-order-events.json"),
            events.to_string(),
        )
        .unwrap();
    }

    folder
}

fn generate(folder: &Path) -> String {
    let file = find_results_file(folder).unwrap();
    let result = load_results(&file.path).unwrap();
    let equity = extract_equity(&result).unwrap();
    let drawdown = extract_drawdown(&result).unwrap();
    let statistics = classify(&result.statistics);
    let trades = load_order_events(folder)
        .map(|events| into_trades(&filter_filled(events)))
        .unwrap_or_default();

    let dims = ChartDimensions::default();
    let equity_chart = render_equity(&equity, &dims).unwrap();
    let drawdown_chart = render_drawdown(&drawdown, &dims).unwrap();
    let folder_name = folder.file_name().and_then(|n| n.to_str());

    compose(&ReportInputs {
        result: &result,
        folder_name,
        equity: &equity,
        statistics: &statistics,
        trades: &trades,
        equity_chart: &equity_chart,
        drawdown_chart: &drawdown_chart,
        generated_at: NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    })
    .unwrap()
}

#[test]
fn test_full_pipeline_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let folder = write_run_folder(dir.path(), true);

    let located = ResultsDirectory::new(dir.path()).most_recent().unwrap();
    assert_eq!(located, folder);

    let html = generate(&located);
    let output = folder.join("report.html");
    write_report(&output, &html).unwrap();
    let written = fs::read_to_string(&output).unwrap();

    assert!(written.contains("<strong>Strategy:</strong> BuyAndHold"));
    assert!(written.contains("2026-01-01 22:01:49"));
    assert!(written.contains("2016-01-01 to 2016-01-03"));
    assert!(written.contains("55.00%"));
    assert!(written.contains("$99,800.00"));
    assert!(written.contains("1.2345"));
    assert!(written.contains("1.5%"));
    assert_eq!(written.matches("<tr class=\"buy\">").count(), 1);
    assert_eq!(written.matches("<tr class=\"sell\">").count(), 1);
    assert!(written.contains("$100,000.00"));
    assert!(!written.contains("No trade data available"));
}

#[test]
fn test_missing_order_events_still_produces_report() {
    let dir = tempfile::tempdir().unwrap();
    let folder = write_run_folder(dir.path(), false);

    let html = generate(&folder);
    assert!(html.contains("No trade data available"));
    assert!(html.contains("Equity Curve"));
}

#[test]
fn test_regenerating_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let folder = write_run_folder(dir.path(), true);
    let output = folder.join("report.html");

    write_report(&output, &generate(&folder)).unwrap();
    let first = fs::read(&output).unwrap();
    write_report(&output, &generate(&folder)).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}
