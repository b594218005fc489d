//! HTTP client for the SEBA analysis API

use super::AnalysisApi;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::models::{HistoricalPoint, IndicatorRow, SepaAnalysis, StockInfo, TechnicalIndicators};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

/// Indicator families requested from the server; it matches columns by substring
const INDICATOR_FILTER: &str = "sma,rsi,macd";

/// Report flavour requested with the SEPA analysis
const REPORT_TYPE: &str = "summary";

/// `{symbol, data: [...]}` wrapper used by the series endpoints
#[derive(Debug, Deserialize)]
struct SeriesEnvelope<T> {
    data: Vec<T>,
}

/// SEBA API client
#[derive(Debug, Clone)]
pub struct SebaClient {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
    history_days: u32,
}

impl SebaClient {
    /// Create a client from a validated configuration
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.api_base_url)?,
            api_token: config.api_token.clone(),
            history_days: config.history_days,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                DashboardError::Config(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `(start, end)` dates covering the configured history window
    fn history_window(&self) -> Result<(String, String)> {
        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_signed(chrono::Duration::days(i64::from(self.history_days)))
            .ok_or_else(|| {
                DashboardError::Config(format!("history_days {} is out of range", self.history_days))
            })?;
        Ok((
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DashboardError::Api {
                status: status.as_u16(),
                detail: error_detail(status, &body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Prefer the server's `detail` field, then the raw body, then the status text
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(detail) => return detail.to_string(),
            None => {}
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

#[async_trait]
impl AnalysisApi for SebaClient {
    async fn get_stock_info(&self, symbol: &str) -> Result<StockInfo> {
        let url = self.endpoint(&["stocks", symbol])?;
        debug!("Fetching stock info: {}", url);
        self.send(self.client.get(url)).await
    }

    async fn get_historical_data(&self, symbol: &str) -> Result<Vec<HistoricalPoint>> {
        let url = self.endpoint(&["stocks", "historical"])?;
        let (start_date, end_date) = self.history_window()?;
        debug!("Fetching history for {} from {} to {}", symbol, start_date, end_date);

        let body = json!({
            "symbol": symbol,
            "start_date": start_date,
            "end_date": end_date,
            "interval": "1d",
        });
        let envelope: SeriesEnvelope<HistoricalPoint> =
            self.send(self.client.post(url).json(&body)).await?;
        Ok(envelope.data)
    }

    async fn get_technical_indicators(&self, symbol: &str) -> Result<TechnicalIndicators> {
        let url = self.endpoint(&["stocks", symbol, "indicators"])?;
        let (start_date, end_date) = self.history_window()?;
        debug!("Fetching indicators: {}", url);

        let request = self.client.get(url).query(&[
            ("start_date", start_date.as_str()),
            ("end_date", end_date.as_str()),
            ("indicators", INDICATOR_FILTER),
        ]);
        let envelope: SeriesEnvelope<IndicatorRow> = self.send(request).await?;
        Ok(envelope.data.into_iter().collect())
    }

    async fn analyze_stock(&self, symbol: &str) -> Result<SepaAnalysis> {
        let url = self.endpoint(&["analysis", symbol])?;
        debug!("Requesting SEPA analysis: {}", url);

        let request = self.client.post(url).query(&[("report_type", REPORT_TYPE)]);
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, mock};

    fn client() -> SebaClient {
        let config = DashboardConfig::builder()
            .api_base_url(mockito::server_url())
            .build()
            .unwrap();
        SebaClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let config = DashboardConfig::builder()
            .api_base_url("https://seba.example.com/api/")
            .build()
            .unwrap();
        let client = SebaClient::new(&config).unwrap();

        let url = client.endpoint(&["stocks", "BRK B", "indicators"]).unwrap();
        assert_eq!(url.as_str(), "https://seba.example.com/api/stocks/BRK%20B/indicators");
    }

    #[test]
    fn test_history_window_out_of_range() {
        let mut client = client();
        client.history_days = u32::MAX;
        assert!(matches!(client.history_window(), Err(DashboardError::Config(_))));
    }

    #[tokio::test]
    async fn test_out_of_range_window_is_config_error() {
        let mut client = client();
        client.history_days = u32::MAX;

        let err = client.get_historical_data("MSFT").await.unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
        let err = client.get_technical_indicators("MSFT").await.unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_history_window_spans_configured_days() {
        let (start, end) = client().history_window().unwrap();
        let start = chrono::NaiveDate::parse_from_str(&start, "%Y-%m-%d").unwrap();
        let end = chrono::NaiveDate::parse_from_str(&end, "%Y-%m-%d").unwrap();
        assert_eq!((end - start).num_days(), 365);
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(StatusCode::NOT_FOUND, r#"{"detail": "no data for ZZZZ"}"#),
            "no data for ZZZZ"
        );
        assert_eq!(error_detail(StatusCode::BAD_GATEWAY, "upstream down\n"), "upstream down");
        assert_eq!(error_detail(StatusCode::INTERNAL_SERVER_ERROR, ""), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_get_stock_info() {
        let _mock = mock("GET", "/stocks/AAPL")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "symbol": "AAPL", "name": "Apple Inc.", "exchange": "NASDAQ",
                    "sector": "Technology", "currency": "USD", "price": 189.5,
                    "open": 187.0, "high": 190.2, "low": 186.4, "volume": 51234567,
                    "fiftyTwoWeekHigh": 199.62, "fiftyTwoWeekLow": 124.17,
                    "marketCap": 2950000000000, "pe": 29.4,
                    "priceChange": 1.25, "priceChangePercent": 0.66
                }"#,
            )
            .create();

        let info = client().get_stock_info("AAPL").await.unwrap();
        assert_eq!(info.name, "Apple Inc.");
        assert_eq!(info.pe, Some(29.4));
    }

    #[tokio::test]
    async fn test_get_historical_data_posts_window() {
        let _mock = mock("POST", "/stocks/historical")
            .match_body(Matcher::PartialJsonString(
                r#"{"symbol": "MSFT", "interval": "1d"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"symbol": "MSFT", "data": [
                    {"date": "2024-01-02T00:00:00", "open": 370.0, "close": 370.87, "volume": 25258600},
                    {"date": "2024-01-03T00:00:00", "open": 369.0, "close": 370.6, "volume": 23083500}
                ]}"#,
            )
            .create();

        let history = client().get_historical_data("MSFT").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, "2024-01-02T00:00:00");
        assert_eq!(history[1].close, 370.6);
    }

    #[tokio::test]
    async fn test_get_technical_indicators_pivots_rows() {
        let _mock = mock("GET", "/stocks/NVDA/indicators")
            .match_query(Matcher::UrlEncoded("indicators".into(), INDICATOR_FILTER.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"symbol": "NVDA", "data": [
                    {"date": "2024-01-02", "close": 481.7, "sma_50": null, "sma_200": null, "rsi_14": null,
                     "macd": 1.5, "macd_signal": 1.0, "macd_histogram": 0.5},
                    {"date": "2024-01-03", "close": 475.7, "sma_50": 470.1, "sma_200": 420.3, "rsi_14": 48.9,
                     "macd": 0.8, "macd_signal": 1.1, "macd_histogram": -0.3}
                ]}"#,
            )
            .create();

        let indicators = client().get_technical_indicators("NVDA").await.unwrap();
        assert_eq!(indicators.len(), 2);
        assert_eq!(indicators.sma50, vec![None, Some(470.1)]);
        assert_eq!(indicators.macd_histogram, vec![Some(0.5), Some(-0.3)]);
    }

    #[tokio::test]
    async fn test_analyze_stock_sends_token() {
        let config = DashboardConfig::builder()
            .api_base_url(mockito::server_url())
            .api_token("secret")
            .build()
            .unwrap();
        let client = SebaClient::new(&config).unwrap();

        let _mock = mock("POST", "/analysis/AMD")
            .match_query(Matcher::UrlEncoded("report_type".into(), REPORT_TYPE.into()))
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"symbol": "AMD", "recommendation": "Hold", "confidence_score": 0.7}"#)
            .create();

        let analysis = client.analyze_stock("AMD").await.unwrap();
        assert_eq!(analysis.recommendation, "Hold");
        assert_eq!(analysis.confidence_score, Some(0.7));
    }

    #[tokio::test]
    async fn test_error_status_surfaces_detail() {
        let _mock = mock("GET", "/stocks/ZZZZ")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "No information found for ZZZZ"}"#)
            .create();

        let err = client().get_stock_info("ZZZZ").await.unwrap_err();
        match err {
            DashboardError::Api { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail, "No information found for ZZZZ");
            },
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let _mock = mock("GET", "/stocks/BADJSON")
            .with_status(200)
            .with_body("not json")
            .create();

        let err = client().get_stock_info("BADJSON").await.unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
    }
}
