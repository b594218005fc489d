//! Access to the SEBA analysis API

pub mod client;

pub use client::SebaClient;

use crate::error::Result;
use crate::models::{HistoricalPoint, SepaAnalysis, StockInfo, TechnicalIndicators};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// The four reads the dashboard needs for one symbol
///
/// Implementations must be safe to call concurrently; the controller issues
/// all four at once and joins them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Quote and company snapshot
    async fn get_stock_info(&self, symbol: &str) -> Result<StockInfo>;

    /// Chronological daily closes
    async fn get_historical_data(&self, symbol: &str) -> Result<Vec<HistoricalPoint>>;

    /// SMA, RSI and MACD series aligned with the history
    async fn get_technical_indicators(&self, symbol: &str) -> Result<TechnicalIndicators>;

    /// SEPA recommendation
    async fn analyze_stock(&self, symbol: &str) -> Result<SepaAnalysis>;
}
