//! Equity and drawdown chart rendering.
//!
//! Charts are drawn with plotters' SVG backend and handed back as
//! self-contained images ready to be inlined in the report.

mod image;
mod render;
mod style;

pub use image::ChartImage;
pub use render::{render_drawdown, render_equity};
pub use style::ChartDimensions;
