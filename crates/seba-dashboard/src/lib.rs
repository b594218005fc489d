//! Stock analysis dashboard for the SEBA analysis API
//!
//! This crate drives the stock analysis panel: it reads a ticker from the
//! page, fetches quote, price history, technical indicators and the SEPA
//! recommendation concurrently, and paints them as:
//!
//! - an info panel (price, change, day range, volume, 52-week range,
//!   market cap, P/E)
//! - a price chart with the 50 and 200 day moving averages
//! - RSI and MACD charts
//! - a recommendation panel with the SEPA rule checklist
//!
//! # Architecture
//!
//! - [`Dashboard`]: controller owning the page, chart instances and API handle
//! - [`AnalysisApi`]: the four reads, implemented over HTTP by [`SebaClient`]
//! - [`Document`]: the page the dashboard paints into; [`HtmlDocument`] keeps
//!   it in memory and renders a standalone HTML page
//! - [`chart`]: Chart.js configurations and a registry that keeps one live
//!   chart per canvas
//!
//! # Example
//!
//! ```rust,ignore
//! use seba_dashboard::{Dashboard, DashboardConfig, HtmlDocument, SebaClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::from_env();
//!     let client = Arc::new(SebaClient::new(&config)?);
//!
//!     let page = HtmlDocument::dashboard(config.language.clone());
//!     let mut dashboard = Dashboard::new(client, page, config.language.clone());
//!     dashboard.bind();
//!     dashboard.analyze_stock("AAPL").await;
//!
//!     std::fs::write("dashboard.html", dashboard.document().to_html()?)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod format;
pub mod locale;
pub mod models;
pub mod render;

pub use api::{AnalysisApi, SebaClient};
pub use chart::{ChartBackend, ChartConfig, ChartHandle, ChartRegistry};
pub use config::{DashboardConfig, DashboardConfigBuilder};
pub use controller::{Dashboard, RequestState};
pub use dom::{Document, HtmlDocument};
pub use error::{DashboardError, Result};
pub use locale::{Language, Messages};
pub use models::{
    EntryExitAnalysis, HistoricalPoint, IndicatorRow, PatternAnalysis, RecommendationDetails,
    SepaAnalysis, SepaDetail, SepaRules, StockInfo,
    TechnicalIndicators, TrendAnalysis,
};
