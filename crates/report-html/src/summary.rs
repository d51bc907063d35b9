use report_stats::StatisticsReport;

use crate::context::NOT_AVAILABLE;

const RULE: &str = "═══════════════════════════════════════════════════════════\n";

/// Statistics echoed to the console after a report is written.
const HEADLINE: &[&str] = &[
    "Start Equity",
    "End Equity",
    "Net Profit",
    "Sharpe Ratio",
    "Drawdown",
];

/// Short text summary of the headline statistics.
pub fn console_summary(statistics: &StatisticsReport) -> String {
    let mut s = String::new();

    s.push_str(RULE);
    s.push_str("                     BACKTEST SUMMARY                       \n");
    s.push_str(RULE);

    for name in HEADLINE {
        let value = statistics
            .get(name)
            .map_or(NOT_AVAILABLE, |line| line.value.as_str());
        s.push_str(&format!("  {:<20} {}\n", format!("{}:", name), value));
    }

    s.push_str(RULE);
    s
}
