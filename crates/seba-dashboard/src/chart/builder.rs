//! Builders for the three dashboard charts

use super::config::{
    ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Interaction, Legend, Paint, Plugins,
    Scale, Ticks, Tooltip,
};
use crate::locale::Messages;
use crate::models::{HistoricalPoint, TechnicalIndicators};
use std::collections::BTreeMap;

const GREEN: &str = "#4CAF50";
const GREEN_AREA: &str = "rgba(76, 175, 80, 0.1)";
const BLUE: &str = "#2196F3";
const DEEP_ORANGE: &str = "#FF5722";
const ORANGE: &str = "#FF9800";
const PURPLE: &str = "#9C27B0";
const PURPLE_AREA: &str = "rgba(156, 39, 176, 0.1)";

const POSITIVE_RGB: &str = "76, 175, 80";
const NEGATIVE_RGB: &str = "244, 67, 54";

/// Close price with the 50 and 200 day moving averages
pub fn price_chart(
    history: &[HistoricalPoint],
    indicators: &TechnicalIndicators,
    messages: &Messages,
) -> ChartConfig {
    let labels = history.iter().map(|point| point.date.clone()).collect();
    let closes = history.iter().map(|point| Some(point.close)).collect();

    let datasets = vec![
        Dataset::line(messages.close_price, closes, GREEN, 2.0)
            .filled(GREEN_AREA)
            .on_axis("y"),
        Dataset::line(messages.sma_50, indicators.sma50.clone(), BLUE, 1.5).on_axis("y"),
        Dataset::line(messages.sma_200, indicators.sma200.clone(), DEEP_ORANGE, 1.5).on_axis("y"),
    ];

    let y = Scale {
        position: Some("right".to_string()),
        ..Default::default()
    }
    .titled(messages.price);

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData { labels, datasets },
        options: ChartOptions {
            interaction: Some(Interaction {
                mode: "index".to_string(),
                intersect: false,
            }),
            scales: BTreeMap::from([
                ("x".to_string(), Scale::monthly().titled(messages.date)),
                ("y".to_string(), y),
            ]),
            plugins: Some(Plugins {
                legend: Legend {
                    display: None,
                    position: Some("top".to_string()),
                },
                tooltip: Some(Tooltip { value_decimals: 2 }),
            }),
            ..Default::default()
        },
    }
}

/// RSI oscillator, y fixed to `[0, 100]`
pub fn rsi_chart(indicators: &TechnicalIndicators, messages: &Messages) -> ChartConfig {
    let datasets = vec![
        Dataset::line(messages.rsi, indicators.rsi.clone(), PURPLE, 2.0).filled(PURPLE_AREA),
    ];

    let y = Scale {
        min: Some(0.0),
        max: Some(100.0),
        ticks: Some(Ticks { step_size: 10.0 }),
        ..Default::default()
    };

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: indicators.dates.clone(),
            datasets,
        },
        options: ChartOptions {
            scales: BTreeMap::from([("x".to_string(), Scale::monthly()), ("y".to_string(), y)]),
            plugins: Some(Plugins {
                legend: Legend {
                    display: Some(false),
                    position: None,
                },
                tooltip: None,
            }),
            ..Default::default()
        },
    }
}

/// MACD histogram bars with the MACD and signal lines on top
pub fn macd_chart(indicators: &TechnicalIndicators, messages: &Messages) -> ChartConfig {
    let histogram = &indicators.macd_histogram;

    let datasets = vec![
        Dataset::bars(
            messages.macd_histogram,
            histogram.clone(),
            Paint::PerPoint(histogram_colours(histogram, 0.5)),
            Paint::PerPoint(histogram_colours(histogram, 1.0)),
        ),
        Dataset::line(messages.macd_line, indicators.macd_line.clone(), BLUE, 2.0)
            .as_kind(ChartKind::Line),
        Dataset::line(messages.signal_line, indicators.macd_signal.clone(), ORANGE, 2.0)
            .as_kind(ChartKind::Line),
    ];

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: indicators.dates.clone(),
            datasets,
        },
        options: ChartOptions {
            scales: BTreeMap::from([("x".to_string(), Scale::monthly())]),
            ..Default::default()
        },
    }
}

/// One colour per bar: green for `>= 0`, red below zero
///
/// Gaps count as non-negative, matching how the browser compares `null >= 0`.
pub fn histogram_colours(values: &[Option<f64>], alpha: f64) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            let rgb = if value.is_none_or(|v| v >= 0.0) {
                POSITIVE_RGB
            } else {
                NEGATIVE_RGB
            };
            format!("rgba({rgb}, {alpha})")
        })
        .collect()
}
