//! Chart styling constants and sizes.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const TITLE_SIZE: u32 = 24;
pub(crate) const AXIS_DESC_SIZE: u32 = 14;
pub(crate) const LABEL_SIZE: u32 = 12;

pub(crate) const EQUITY_COLOR: RGBColor = RGBColor(0xff, 0x99, 0x14);
pub(crate) const DRAWDOWN_FILL: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
pub(crate) const DRAWDOWN_LINE: RGBColor = RGBColor(0xc0, 0x39, 0x2b);
pub(crate) const MUTED_TEXT: RGBColor = RGBColor(0x7f, 0x8c, 0x8d);

/// Number of labels requested on each axis.
pub(crate) const AXIS_LABELS: usize = 8;

/// Pixel sizes of the two charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDimensions {
    pub width: u32,
    pub equity_height: u32,
    pub drawdown_height: u32,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 1200,
            equity_height: 600,
            drawdown_height: 400,
        }
    }
}
