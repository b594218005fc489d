//! Language selection and user-visible strings
//!
//! Every string the dashboard paints comes from a [`Messages`] table so the
//! panel can be rendered in English or in Arabic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported dashboard languages
///
/// # Examples
///
/// ```
/// use seba_dashboard::Language;
///
/// assert_eq!(Language::from_code("ar"), Language::Arabic);
/// assert_eq!(Language::from_code("EN"), Language::English);
/// assert_eq!(Language::from_code("fr"), Language::Other("fr".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Arabic
    Arabic,
    /// Other languages (ISO 639-1 code), rendered with English strings
    Other(String),
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::Other(code) => code,
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::Other(code) => code,
        }
    }

    /// Parse from ISO 639-1 code or common name
    pub fn from_code(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" | "en-us" | "en-gb" => Language::English,
            "ar" | "arabic" | "العربية" | "ar-sa" | "ar-eg" => Language::Arabic,
            other => Language::Other(other.to_string()),
        }
    }

    /// Text direction attribute for the page
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Arabic => "rtl",
            _ => "ltr",
        }
    }

    /// String table for this language
    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::Arabic => &ARABIC,
            _ => &ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from_code(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from_code(&s)
    }
}

/// User-visible strings for one language
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub page_title: &'static str,
    pub symbol_placeholder: &'static str,
    pub analyze: &'static str,
    pub loading: &'static str,
    pub enter_symbol: &'static str,
    pub analysis_failed: &'static str,
    pub not_available: &'static str,

    // info panel
    pub open: &'static str,
    pub high: &'static str,
    pub low: &'static str,
    pub volume: &'static str,
    pub week_52_high: &'static str,
    pub week_52_low: &'static str,
    pub market_cap: &'static str,
    pub pe_ratio: &'static str,

    // charts
    pub close_price: &'static str,
    pub sma_50: &'static str,
    pub sma_200: &'static str,
    pub date: &'static str,
    pub price: &'static str,
    pub rsi: &'static str,
    pub macd_histogram: &'static str,
    pub macd_line: &'static str,
    pub signal_line: &'static str,

    // recommendation panel
    pub buy: &'static str,
    pub sell: &'static str,
    pub recommendation: &'static str,
    pub confidence: &'static str,
    pub rules_passed: &'static str,
    pub rule_trend: &'static str,
    pub rule_pattern: &'static str,
    pub rule_volume: &'static str,
    pub rule_relative_strength: &'static str,
    pub rule_earnings: &'static str,
    pub trend: &'static str,
    pub pattern: &'static str,
    pub report: &'static str,
}

impl Messages {
    /// Error shown when an analysis request fails
    pub fn analysis_failed(&self, symbol: &str, detail: &str) -> String {
        format!("{} {symbol}: {detail}", self.analysis_failed)
    }
}

pub static ENGLISH: Messages = Messages {
    page_title: "Stock Analysis",
    symbol_placeholder: "Enter a symbol, e.g. AAPL",
    analyze: "Analyze",
    loading: "Loading...",
    enter_symbol: "Please enter a stock symbol",
    analysis_failed: "An error occurred while analyzing",
    not_available: "N/A",

    open: "Open",
    high: "High",
    low: "Low",
    volume: "Volume",
    week_52_high: "52-Week High",
    week_52_low: "52-Week Low",
    market_cap: "Market Cap",
    pe_ratio: "P/E Ratio",

    close_price: "Close",
    sma_50: "50-Day Moving Average",
    sma_200: "200-Day Moving Average",
    date: "Date",
    price: "Price",
    rsi: "Relative Strength Index (RSI)",
    macd_histogram: "MACD Histogram",
    macd_line: "MACD Line",
    signal_line: "Signal Line",

    buy: "Buy",
    sell: "Sell",
    recommendation: "Recommendation",
    confidence: "Confidence",
    rules_passed: "SEPA rules passed",
    rule_trend: "Trend",
    rule_pattern: "Pattern",
    rule_volume: "Volume",
    rule_relative_strength: "Relative strength",
    rule_earnings: "Earnings",
    trend: "Trend",
    pattern: "Pattern",
    report: "Full report",
};

pub static ARABIC: Messages = Messages {
    page_title: "تحليل الأسهم",
    symbol_placeholder: "أدخل رمز السهم",
    analyze: "تحليل",
    loading: "جاري التحميل...",
    enter_symbol: "يرجى إدخال رمز السهم",
    analysis_failed: "حدث خطأ أثناء تحليل السهم",
    not_available: "غير متوفر",

    open: "افتتاح",
    high: "أعلى سعر",
    low: "أدنى سعر",
    volume: "حجم التداول",
    week_52_high: "أعلى 52 أسبوع",
    week_52_low: "أدنى 52 أسبوع",
    market_cap: "القيمة السوقية",
    pe_ratio: "نسبة السعر للربح",

    close_price: "سعر الإغلاق",
    sma_50: "المتوسط المتحرك 50 يوم",
    sma_200: "المتوسط المتحرك 200 يوم",
    date: "التاريخ",
    price: "السعر",
    rsi: "مؤشر القوة النسبية RSI",
    macd_histogram: "MACD Histogram",
    macd_line: "MACD Line",
    signal_line: "Signal Line",

    buy: "شراء",
    sell: "بيع",
    recommendation: "التوصية",
    confidence: "درجة الثقة",
    rules_passed: "قواعد SEPA المستوفاة",
    rule_trend: "الاتجاه",
    rule_pattern: "النمط",
    rule_volume: "الحجم",
    rule_relative_strength: "القوة النسبية",
    rule_earnings: "الأرباح",
    trend: "الاتجاه",
    pattern: "النمط",
    report: "التقرير الكامل",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code(" English "), Language::English);
        assert_eq!(Language::from_code("ar"), Language::Arabic);
        assert_eq!(Language::from_code("العربية"), Language::Arabic);
        assert_eq!(Language::from_code("ja"), Language::Other("ja".to_string()));
    }

    #[test]
    fn test_unknown_language_uses_english_strings() {
        let lang = Language::Other("ja".to_string());
        assert_eq!(lang.messages(), &ENGLISH);
        assert_eq!(lang.dir(), "ltr");
    }

    #[test]
    fn test_arabic_is_rtl() {
        assert_eq!(Language::Arabic.dir(), "rtl");
        assert_eq!(Language::Arabic.messages().buy, "شراء");
    }

    #[test]
    fn test_analysis_failed_message() {
        let msg = ENGLISH.analysis_failed("AAPL", "timeout");
        assert_eq!(msg, "An error occurred while analyzing AAPL: timeout");

        let msg = ARABIC.analysis_failed("AAPL", "timeout");
        assert_eq!(msg, "حدث خطأ أثناء تحليل السهم AAPL: timeout");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Language::Arabic).unwrap();
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Language::Arabic);
    }
}
