//! Page model the dashboard paints into
//!
//! [`Document`] is the narrow slice of a browser DOM the controller and the
//! renderers need: look an element up by id, replace its markup, read or
//! write an input value, toggle visibility. [`HtmlDocument`] is an owned
//! in-memory implementation that also acts as the chart backend and can be
//! serialised into a standalone HTML page.

use crate::chart::{ChartBackend, ChartConfig, ChartHandle};
use crate::error::{DashboardError, Result};
use crate::locale::Language;
use std::collections::{BTreeMap, HashMap};

/// Element ids the dashboard reads and writes
pub mod ids {
    pub const STOCK_ANALYSIS_CONTAINER: &str = "stockAnalysisContainer";
    pub const STOCK_SYMBOL: &str = "stockSymbol";
    pub const ANALYZE_BUTTON: &str = "analyzeButton";
    pub const STOCK_INFO_CONTAINER: &str = "stockInfoContainer";
    pub const STOCK_CHART_CONTAINER: &str = "stockChartContainer";
    pub const STOCK_CHART: &str = "stockChart";
    pub const RSI_CHART_CONTAINER: &str = "rsiChartContainer";
    pub const RSI_CHART: &str = "rsiChart";
    pub const MACD_CHART: &str = "macdChart";
    pub const SEPA_ANALYSIS_CONTAINER: &str = "sepaAnalysisContainer";
    pub const LOADING_INDICATOR: &str = "loadingIndicator";
    pub const ERROR_MESSAGE: &str = "errorMessage";

    /// Every element of the standard dashboard page
    pub const ALL: [&str; 12] = [
        STOCK_ANALYSIS_CONTAINER,
        STOCK_SYMBOL,
        ANALYZE_BUTTON,
        STOCK_INFO_CONTAINER,
        STOCK_CHART_CONTAINER,
        STOCK_CHART,
        RSI_CHART_CONTAINER,
        RSI_CHART,
        MACD_CHART,
        SEPA_ANALYSIS_CONTAINER,
        LOADING_INDICATOR,
        ERROR_MESSAGE,
    ];
}

/// Element lookup and mutation by id
///
/// Mutators return `false` when the element does not exist and leave the
/// document untouched.
pub trait Document {
    fn contains(&self, id: &str) -> bool;

    fn inner_html(&self, id: &str) -> Option<&str>;

    fn set_inner_html(&mut self, id: &str, html: String) -> bool;

    /// Current value of an input element
    fn value(&self, id: &str) -> Option<&str>;

    fn set_value(&mut self, id: &str, value: &str) -> bool;

    fn is_hidden(&self, id: &str) -> Option<bool>;

    fn set_hidden(&mut self, id: &str, hidden: bool) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub inner_html: String,
    pub value: String,
    pub hidden: bool,
}

#[derive(Debug, Clone)]
struct MountedChart {
    handle: ChartHandle,
    config: ChartConfig,
}

/// In-memory dashboard page
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    language: Language,
    elements: HashMap<String, Element>,
    charts: BTreeMap<String, MountedChart>,
    next_handle: u64,
}

impl HtmlDocument {
    /// A page with no elements
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            elements: HashMap::new(),
            charts: BTreeMap::new(),
            next_handle: 0,
        }
    }

    /// The standard dashboard page with every element present
    ///
    /// The loading indicator and the error box start hidden.
    pub fn dashboard(language: Language) -> Self {
        let mut doc = Self::empty(language);
        for id in ids::ALL {
            doc = doc.with_element(id);
        }
        doc.set_hidden(ids::LOADING_INDICATOR, true);
        doc.set_hidden(ids::ERROR_MESSAGE, true);
        doc
    }

    /// Add an empty, visible element
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), Element::default());
        self
    }

    /// Remove an element (and any chart mounted on it)
    pub fn without_element(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self.charts.remove(id);
        self
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Configuration of the chart live on a canvas
    pub fn chart(&self, canvas_id: &str) -> Option<&ChartConfig> {
        self.charts.get(canvas_id).map(|mounted| &mounted.config)
    }

    /// Handle of the chart live on a canvas
    pub fn chart_handle(&self, canvas_id: &str) -> Option<ChartHandle> {
        self.charts.get(canvas_id).map(|mounted| mounted.handle)
    }

    /// Number of live chart instances on the page
    pub fn live_charts(&self) -> usize {
        self.charts.len()
    }

    /// Live charts in canvas order
    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartConfig)> {
        self.charts
            .iter()
            .map(|(canvas, mounted)| (canvas.as_str(), &mounted.config))
    }

    pub(crate) fn elements(&self) -> &HashMap<String, Element> {
        &self.elements
    }

    /// Serialise into a standalone HTML page that instantiates the live charts
    pub fn to_html(&self) -> Result<String> {
        crate::render::page::render_page(self)
    }
}

impl Document for HtmlDocument {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.inner_html.as_str())
    }

    fn set_inner_html(&mut self, id: &str, html: String) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.inner_html = html;
                true
            },
            None => false,
        }
    }

    fn value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.value.as_str())
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.value = value.to_string();
                true
            },
            None => false,
        }
    }

    fn is_hidden(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|el| el.hidden)
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.hidden = hidden;
                true
            },
            None => false,
        }
    }
}

impl ChartBackend for HtmlDocument {
    fn create_chart(&mut self, canvas_id: &str, config: &ChartConfig) -> Result<ChartHandle> {
        if !self.contains(canvas_id) {
            return Err(DashboardError::Render(format!("canvas '{canvas_id}' not found")));
        }
        // Same rule as Chart.js: a canvas hosts one chart until it is destroyed
        if self.charts.contains_key(canvas_id) {
            return Err(DashboardError::Render(format!(
                "canvas '{canvas_id}' is already in use"
            )));
        }

        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.charts.insert(
            canvas_id.to_string(),
            MountedChart {
                handle,
                config: config.clone(),
            },
        );
        Ok(handle)
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        self.charts.retain(|_, mounted| mounted.handle != handle);
    }
}
