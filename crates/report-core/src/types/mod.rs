//! Data types shared by the report pipeline.

mod order;
mod result;
mod series;

pub use order::{Direction, OrderEvent, Trade};
pub use result::{AlgorithmConfiguration, BacktestResult, Chart, ChartSeries};
pub use series::{DrawdownPoint, EquityPoint, SeriesPoint};
