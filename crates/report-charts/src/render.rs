//! Chart drawing.

use chrono::DateTime;
use plotters::coord::Shift;
use plotters::prelude::*;
use report_core::{DrawdownPoint, EquityPoint, ReportError, ReportResult, SeriesPoint};
use report_stats::fmt_grouped;
use std::ops::Range;
use tracing::debug;

use crate::image::ChartImage;
use crate::style::{
    ChartDimensions, AXIS_DESC_SIZE, AXIS_LABELS, DRAWDOWN_FILL, DRAWDOWN_LINE, EQUITY_COLOR,
    FONT, LABEL_SIZE, MUTED_TEXT, TITLE_SIZE,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Everything that differs between the two charts.
struct AreaChart<'a> {
    title: &'a str,
    y_desc: &'a str,
    legend: &'a str,
    legend_position: SeriesLabelPosition,
    fill: RGBAColor,
    line: RGBColor,
    y_label: fn(&f64) -> String,
}

/// Portfolio value over time, filled down to zero.
pub fn render_equity(points: &[EquityPoint], dims: &ChartDimensions) -> ReportResult<ChartImage> {
    let chart = AreaChart {
        title: "Equity Curve",
        y_desc: "Portfolio Value ($)",
        legend: "Portfolio Value",
        legend_position: SeriesLabelPosition::UpperLeft,
        fill: EQUITY_COLOR.mix(0.3),
        line: EQUITY_COLOR,
        y_label: dollar_label,
    };
    render_area(&chart, points, (dims.width, dims.equity_height))
}

/// Drawdown percentage over time, filled between the curve and zero.
pub fn render_drawdown(
    points: &[DrawdownPoint],
    dims: &ChartDimensions,
) -> ReportResult<ChartImage> {
    let chart = AreaChart {
        title: "Drawdown",
        y_desc: "Drawdown (%)",
        legend: "Drawdown",
        legend_position: SeriesLabelPosition::LowerLeft,
        fill: DRAWDOWN_FILL.mix(0.6),
        line: DRAWDOWN_LINE,
        y_label: percent_label,
    };
    render_area(&chart, points, (dims.width, dims.drawdown_height))
}

fn render_area(
    area: &AreaChart<'_>,
    points: &[SeriesPoint],
    size: (u32, u32),
) -> ReportResult<ChartImage> {
    debug!("Rendering {} chart from {} points", area.title, points.len());

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        if points.is_empty() {
            draw_placeholder(&root, area.title)?;
        } else {
            draw_series(&root, area, points)?;
        }

        root.present().map_err(draw_err)?;
    }

    Ok(ChartImage::svg(svg))
}

fn draw_series(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    area: &AreaChart<'_>,
    points: &[SeriesPoint],
) -> ReportResult<()> {
    let mut chart = ChartBuilder::on(root)
        .caption(area.title, (FONT, TITLE_SIZE).into_font().style(FontStyle::Bold))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(time_range(points), value_range(points))
        .map_err(draw_err)?;

    let date_label = |ts: &i64| {
        DateTime::from_timestamp(*ts, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(area.y_desc)
        .x_labels(AXIS_LABELS)
        .y_labels(AXIS_LABELS)
        .x_label_formatter(&date_label)
        .y_label_formatter(&area.y_label)
        .label_style((FONT, LABEL_SIZE))
        .axis_desc_style((FONT, AXIS_DESC_SIZE))
        .bold_line_style(BLACK.mix(0.12).stroke_width(1))
        .light_line_style(BLACK.mix(0.04).stroke_width(1))
        .draw()
        .map_err(draw_err)?;

    let fill = area.fill;
    chart
        .draw_series(
            AreaSeries::new(
                points.iter().map(|p| (p.timestamp.timestamp(), p.value)),
                0.0,
                fill.filled(),
            )
            .border_style(area.line.stroke_width(2)),
        )
        .map_err(draw_err)?
        .label(area.legend)
        .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 18, y + 6)], fill.filled()));

    chart
        .configure_series_labels()
        .position(area.legend_position.clone())
        .label_font((FONT, LABEL_SIZE))
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.mix(0.3).stroke_width(1))
        .draw()
        .map_err(draw_err)?;

    Ok(())
}

/// Title plus a notice, for series without any points.
fn draw_placeholder(root: &DrawingArea<SVGBackend<'_>, Shift>, title: &str) -> ReportResult<()> {
    let body = root
        .titled(title, (FONT, TITLE_SIZE).into_font().style(FontStyle::Bold))
        .map_err(draw_err)?;
    let (width, height) = body.dim_in_pixel();
    let position = ((width / 2) as i32 - 70, (height / 2) as i32);

    body.draw(&Text::new(
        "No data available",
        position,
        (FONT, 16).into_font().color(&MUTED_TEXT),
    ))
    .map_err(draw_err)
}

fn draw_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

/// First to last timestamp; a single point gets a one-day window.
fn time_range(points: &[SeriesPoint]) -> Range<i64> {
    let first = points.first().map_or(0, |p| p.timestamp.timestamp());
    let last = points.last().map_or(0, |p| p.timestamp.timestamp());
    if last > first {
        first..last
    } else {
        first..first + SECONDS_PER_DAY
    }
}

/// Value range that always contains the zero baseline, padded by 5%.
fn value_range(points: &[SeriesPoint]) -> Range<f64> {
    let (low, high) = points
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = if high > low { high - low } else { 1.0 };
    let pad = span * 0.05;
    (low - pad)..(high.max(low + span) + pad)
}

fn dollar_label(value: &f64) -> String {
    format!("${}", fmt_grouped(*value, 0))
}

fn percent_label(value: &f64) -> String {
    format!("{:.1}%", value)
}
