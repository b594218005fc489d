//! Declarative chart configuration
//!
//! These types serialise to the configuration object Chart.js expects, so a
//! mounted chart can be handed to `new Chart(canvas, config)` unchanged.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// A single colour or one colour per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Paint {
    fn from(colour: &str) -> Self {
        Paint::Solid(colour.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    /// Overrides the chart kind for mixed charts
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    pub border_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    pub border_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl Dataset {
    /// Unfilled line without point markers
    pub fn line(label: impl Into<String>, data: Vec<Option<f64>>, colour: &str, width: f64) -> Self {
        Self {
            label: label.into(),
            data,
            kind: None,
            border_color: colour.into(),
            background_color: None,
            border_width: width,
            point_radius: Some(0.0),
            fill: Some(false),
            y_axis_id: None,
        }
    }

    /// Bars with explicit fill and border paints
    pub fn bars(label: impl Into<String>, data: Vec<Option<f64>>, fill: Paint, border: Paint) -> Self {
        Self {
            label: label.into(),
            data,
            kind: Some(ChartKind::Bar),
            border_color: border,
            background_color: Some(fill),
            border_width: 1.0,
            point_radius: None,
            fill: None,
            y_axis_id: None,
        }
    }

    /// Fill the area under the line
    pub fn filled(mut self, background: &str) -> Self {
        self.background_color = Some(background.into());
        self.fill = Some(true);
        self
    }

    pub fn on_axis(mut self, axis: impl Into<String>) -> Self {
        self.y_axis_id = Some(axis.into());
        self
    }

    pub fn as_kind(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    pub scales: BTreeMap<String, Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: None,
            scales: BTreeMap::new(),
            plugins: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: String,
    pub intersect: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
}

impl Scale {
    /// Time axis ticking once per month
    pub fn monthly() -> Self {
        Self {
            kind: Some("time".to_string()),
            time: Some(TimeScale {
                unit: "month".to_string(),
                display_formats: BTreeMap::from([("month".to_string(), "MMM yyyy".to_string())]),
            }),
            ..Default::default()
        }
    }

    pub fn titled(mut self, text: impl Into<String>) -> Self {
        self.title = Some(AxisTitle {
            display: true,
            text: text.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeScale {
    pub unit: String,
    pub display_formats: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Tooltip settings; the page script turns `valueDecimals` into a label callback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub value_decimals: u8,
}
