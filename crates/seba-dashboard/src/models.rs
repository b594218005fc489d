//! View models received from the analysis API
//!
//! None of these are persisted. They live for one analysis request and are
//! replaced by the next one.

use serde::{Deserialize, Serialize};

/// Quote and company snapshot for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(alias = "fifty_two_week_high")]
    pub fifty_two_week_high: f64,
    #[serde(alias = "fifty_two_week_low")]
    pub fifty_two_week_low: f64,
    #[serde(default, alias = "market_cap")]
    pub market_cap: f64,
    #[serde(default, alias = "pe_ratio", alias = "peRatio")]
    pub pe: Option<f64>,
    #[serde(default, alias = "price_change")]
    pub price_change: f64,
    #[serde(default, alias = "price_change_percent")]
    pub price_change_percent: f64,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// One daily close from the price history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: String,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

/// Indicator series, index-aligned with the price history
///
/// Warm-up values the server could not compute are `None` and show up as
/// gaps in the charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub dates: Vec<String>,
    pub sma50: Vec<Option<f64>>,
    pub sma200: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd_line: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub macd_histogram: Vec<Option<f64>>,
}

/// Row-oriented indicator record as returned by `/stocks/{symbol}/indicators`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IndicatorRow {
    pub date: String,
    #[serde(default)]
    pub sma_50: Option<f64>,
    #[serde(default)]
    pub sma_200: Option<f64>,
    #[serde(default, alias = "rsi")]
    pub rsi_14: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub macd_signal: Option<f64>,
    #[serde(default, alias = "macd_hist")]
    pub macd_histogram: Option<f64>,
}

impl TechnicalIndicators {
    /// Number of aligned points
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    fn push(&mut self, row: IndicatorRow) {
        self.dates.push(row.date);
        self.sma50.push(row.sma_50);
        self.sma200.push(row.sma_200);
        self.rsi.push(row.rsi_14);
        self.macd_line.push(row.macd);
        self.macd_signal.push(row.macd_signal);
        self.macd_histogram.push(row.macd_histogram);
    }
}

impl FromIterator<IndicatorRow> for TechnicalIndicators {
    fn from_iter<I: IntoIterator<Item = IndicatorRow>>(rows: I) -> Self {
        let mut indicators = TechnicalIndicators::default();
        for row in rows {
            indicators.push(row);
        }
        indicators
    }
}

/// SEPA verdict for a symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SepaAnalysis {
    #[serde(default)]
    pub symbol: Option<String>,
    pub recommendation: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub sepa_rules: Option<SepaRules>,
    /// Narrative breakdown the engine nests under `sepa_analysis`
    #[serde(default)]
    pub sepa_analysis: Option<SepaDetail>,
    #[serde(default)]
    pub natural_language_recommendation: Option<String>,
    /// Long-form report, present for the detailed report type
    #[serde(default)]
    pub analysis_report: Option<String>,
    /// Set by the engine when it fell back to a default verdict
    #[serde(default)]
    pub error: Option<String>,
}

impl SepaAnalysis {
    pub fn trend_analysis(&self) -> Option<&TrendAnalysis> {
        self.sepa_analysis.as_ref()?.trend_analysis.as_ref()
    }

    pub fn pattern_analysis(&self) -> Option<&PatternAnalysis> {
        self.sepa_analysis.as_ref()?.pattern_analysis.as_ref()
    }

    /// Natural-language recommendation, or the engine's one-line summary
    pub fn summary(&self) -> Option<&str> {
        self.natural_language_recommendation
            .as_deref()
            .or_else(|| self.sepa_analysis.as_ref()?.summary.as_deref())
    }
}

/// Detailed SEPA breakdown
///
/// The engine answers with an empty object when it could not build one, so
/// every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SepaDetail {
    pub summary: Option<String>,
    pub trend_analysis: Option<TrendAnalysis>,
    pub pattern_analysis: Option<PatternAnalysis>,
    pub entry_exit_analysis: Option<EntryExitAnalysis>,
    pub recommendation_details: Option<RecommendationDetails>,
}

/// Suggested trade levels; zero means the engine had none
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryExitAnalysis {
    pub entry_point: f64,
    pub stop_loss: f64,
    pub target_price: f64,
    pub risk_reward_ratio: f64,
    pub risk_percentage: f64,
    pub reward_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationDetails {
    pub reasoning: Option<String>,
}

/// Outcome of the five SEPA rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SepaRules {
    pub trend_rule_passed: bool,
    pub pattern_rule_passed: bool,
    pub volume_rule_passed: bool,
    pub rs_rule_passed: bool,
    pub earnings_rule_passed: bool,
    pub rules_passed: u32,
    pub total_rules: u32,
}

/// Identifies one SEPA rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SepaRule {
    Trend,
    Pattern,
    Volume,
    RelativeStrength,
    Earnings,
}

impl SepaRules {
    /// Each rule paired with whether it passed, in engine order
    pub fn checklist(&self) -> [(SepaRule, bool); 5] {
        [
            (SepaRule::Trend, self.trend_rule_passed),
            (SepaRule::Pattern, self.pattern_rule_passed),
            (SepaRule::Volume, self.volume_rule_passed),
            (SepaRule::RelativeStrength, self.rs_rule_passed),
            (SepaRule::Earnings, self.earnings_rule_passed),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendAnalysis {
    pub trend_state: Option<String>,
    pub trend_direction: Option<String>,
    pub trend_template_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternAnalysis {
    pub has_vcp_pattern: bool,
    pub pattern_type: Option<String>,
    pub pattern_quality: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stock_info_camel_case() {
        let info: StockInfo = serde_json::from_value(json!({
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "exchange": "NASDAQ",
            "sector": "Technology",
            "currency": "USD",
            "price": 189.5,
            "open": 187.0,
            "high": 190.2,
            "low": 186.4,
            "volume": 51234567,
            "fiftyTwoWeekHigh": 199.62,
            "fiftyTwoWeekLow": 124.17,
            "marketCap": 2.95e12,
            "pe": 29.4,
            "priceChange": 1.25,
            "priceChangePercent": 0.66
        }))
        .unwrap();

        assert_eq!(info.symbol, "AAPL");
        assert_eq!(info.fifty_two_week_high, 199.62);
        assert_eq!(info.pe, Some(29.4));
        assert_eq!(info.volume, 51_234_567.0);
    }

    #[test]
    fn test_stock_info_snake_case_and_missing_pe() {
        let info: StockInfo = serde_json::from_value(json!({
            "symbol": "TSLA",
            "price": 240.0,
            "open": 238.0,
            "high": 242.0,
            "low": 236.5,
            "fifty_two_week_high": 299.29,
            "fifty_two_week_low": 152.37,
            "market_cap": 7.6e11,
            "pe_ratio": null,
            "price_change": -3.1,
            "price_change_percent": -1.27
        }))
        .unwrap();

        assert_eq!(info.currency, "USD");
        assert!(info.pe.is_none());
        assert_eq!(info.price_change, -3.1);
    }

    #[test]
    fn test_indicator_rows_pivot() {
        let rows: Vec<IndicatorRow> = serde_json::from_value(json!([
            {"date": "2024-01-02", "sma_50": null, "rsi_14": null, "macd": 0.1, "macd_signal": 0.05, "macd_histogram": 0.05},
            {"date": "2024-01-03", "sma_50": 101.5, "sma_200": 99.0, "rsi_14": 55.2, "macd": -0.2, "macd_signal": 0.0, "macd_histogram": -0.2}
        ]))
        .unwrap();

        let indicators: TechnicalIndicators = rows.into_iter().collect();
        assert_eq!(indicators.len(), 2);
        assert_eq!(indicators.dates, vec!["2024-01-02", "2024-01-03"]);
        assert_eq!(indicators.sma50, vec![None, Some(101.5)]);
        assert_eq!(indicators.sma200, vec![None, Some(99.0)]);
        assert_eq!(indicators.rsi, vec![None, Some(55.2)]);
        assert_eq!(indicators.macd_histogram, vec![Some(0.05), Some(-0.2)]);
    }

    #[test]
    fn test_sepa_analysis_from_engine_payload() {
        let analysis: SepaAnalysis = serde_json::from_value(json!({
            "symbol": "NVDA",
            "recommendation": "Buy",
            "confidence_score": 0.95,
            "sepa_rules": {
                "trend_rule_passed": true,
                "pattern_rule_passed": true,
                "volume_rule_passed": false,
                "rs_rule_passed": true,
                "earnings_rule_passed": true,
                "rules_passed": 4,
                "total_rules": 5
            },
            "sepa_analysis": {
                "summary": "4 of 5 SEPA rules passed.",
                "trend_analysis": {
                    "trend_state": "Strong uptrend",
                    "trend_template_score": 6,
                    "trend_template_details": {"is_price_above_ma150": true},
                    "trend_strength": 1.0,
                    "trend_direction": "Up"
                },
                "pattern_analysis": {
                    "has_vcp_pattern": true,
                    "pattern_type": "VCP",
                    "pattern_quality": "High",
                    "pattern_details": {"vcp_stage": 3}
                },
                "entry_exit_analysis": {
                    "entry_point": 480.0,
                    "stop_loss": 456.0,
                    "target_price": 552.0,
                    "risk_reward_ratio": 3.0,
                    "risk_percentage": 5.0,
                    "reward_percentage": 15.0
                },
                "recommendation_details": {"recommendation": "Buy", "confidence_score": 0.95, "reasoning": "Trend intact."}
            }
        }))
        .unwrap();

        let rules = analysis.sepa_rules.as_ref().unwrap();
        assert_eq!(rules.rules_passed, 4);
        let failed: Vec<_> = rules
            .checklist()
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(rule, _)| *rule)
            .collect();
        assert_eq!(failed, vec![SepaRule::Volume]);

        let trend = analysis.trend_analysis().unwrap();
        assert_eq!(trend.trend_state.as_deref(), Some("Strong uptrend"));
        assert_eq!(trend.trend_template_score, Some(6.0));
        assert_eq!(analysis.pattern_analysis().unwrap().pattern_type.as_deref(), Some("VCP"));
        assert_eq!(analysis.summary(), Some("4 of 5 SEPA rules passed."));

        let detail = analysis.sepa_analysis.as_ref().unwrap();
        assert_eq!(detail.entry_exit_analysis.as_ref().unwrap().stop_loss, 456.0);
    }

    #[test]
    fn test_sepa_analysis_tolerates_empty_detail() {
        let analysis: SepaAnalysis = serde_json::from_value(json!({
            "recommendation": "Hold",
            "sepa_analysis": {},
            "natural_language_recommendation": "Wait for a base."
        }))
        .unwrap();

        assert!(analysis.trend_analysis().is_none());
        assert!(analysis.pattern_analysis().is_none());
        assert_eq!(analysis.summary(), Some("Wait for a base."));
    }
}
