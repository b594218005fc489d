//! Chart configurations and chart instance lifecycle

pub mod builder;
pub mod config;
pub mod registry;

pub use builder::{histogram_colours, macd_chart, price_chart, rsi_chart};
pub use config::{ChartConfig, ChartKind, Dataset, Paint};
pub use registry::{ChartBackend, ChartHandle, ChartRegistry};
