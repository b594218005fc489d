//! Dashboard controller
//!
//! Binds to the page, turns user events into analysis requests and paints
//! the results. One [`Dashboard`] owns its document, its chart instances and
//! a handle to the analysis API; every mutation goes through `&mut self`, so
//! two analyses on the same dashboard can never interleave.

use crate::api::AnalysisApi;
use crate::chart::{ChartBackend, ChartRegistry};
use crate::dom::{Document, ids};
use crate::error::Result;
use crate::locale::Language;
use crate::render::{escape_text, render_charts, render_sepa_analysis, render_stock_info};
use std::sync::Arc;
use url::Url;

/// Where the most recent analysis request stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Elements the controller cannot work without
const REQUIRED: [&str; 3] = [ids::STOCK_ANALYSIS_CONTAINER, ids::STOCK_SYMBOL, ids::ANALYZE_BUTTON];

/// Query parameter that pre-fills the symbol on page load
const SYMBOL_PARAM: &str = "symbol";

pub struct Dashboard<D> {
    api: Arc<dyn AnalysisApi>,
    document: D,
    charts: ChartRegistry,
    language: Language,
    bound: bool,
    state: RequestState,
    last_error: Option<String>,
}

impl<D> Dashboard<D>
where
    D: Document + ChartBackend,
{
    /// Create an unbound dashboard; call [`bind`](Self::bind) before sending events
    pub fn new(api: Arc<dyn AnalysisApi>, document: D, language: Language) -> Self {
        Self {
            api,
            document,
            charts: ChartRegistry::new(),
            language,
            bound: false,
            state: RequestState::Idle,
            last_error: None,
        }
    }

    /// Attach to the page
    ///
    /// Fails when any of the container, input or button is missing. An
    /// unbound dashboard ignores every event.
    pub fn bind(&mut self) -> bool {
        let missing: Vec<&str> = REQUIRED
            .into_iter()
            .filter(|id| !self.document.contains(id))
            .collect();

        if missing.is_empty() {
            self.bound = true;
            tracing::debug!("Dashboard bound");
        } else {
            tracing::debug!("Dashboard not bound, missing elements: {:?}", missing);
        }
        self.bound
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Analyze button pressed
    pub async fn click_analyze(&mut self) {
        if !self.bound {
            return;
        }

        let symbol = self
            .document
            .value(ids::STOCK_SYMBOL)
            .unwrap_or_default()
            .trim()
            .to_uppercase();

        if symbol.is_empty() {
            let message = self.language.messages().enter_symbol;
            self.show_error(message);
            return;
        }

        self.analyze_stock(&symbol).await;
    }

    /// Key pressed in the symbol input; only Enter does anything
    pub async fn key_press(&mut self, key: &str) {
        if key == "Enter" {
            self.click_analyze().await;
        }
    }

    /// Page opened at `url`
    ///
    /// A non-empty `symbol` query parameter fills the input and starts an
    /// analysis; a whitespace-only one ends in the validation message. Fails
    /// only when `url` does not parse.
    pub async fn page_load(&mut self, url: &str) -> Result<()> {
        if !self.bound {
            return Ok(());
        }

        let url = Url::parse(url)?;
        let symbol = url
            .query_pairs()
            .find(|(key, _)| key == SYMBOL_PARAM)
            .map(|(_, value)| value.to_uppercase())
            .filter(|symbol| !symbol.is_empty());

        if let Some(symbol) = symbol {
            self.document.set_value(ids::STOCK_SYMBOL, &symbol);
            self.click_analyze().await;
        }
        Ok(())
    }

    /// Fetch everything for `symbol` and paint it
    ///
    /// The four reads run concurrently. Any failure skips all rendering and
    /// shows one localized error; the loading indicator is hidden either way.
    pub async fn analyze_stock(&mut self, symbol: &str) {
        self.hide_error();
        self.document.set_hidden(ids::LOADING_INDICATOR, false);
        self.state = RequestState::Loading;
        tracing::info!("Analyzing {}", symbol);

        let outcome = self.fetch_and_render(symbol).await;
        self.document.set_hidden(ids::LOADING_INDICATOR, true);

        match outcome {
            Ok(()) => {
                self.state = RequestState::Succeeded;
                tracing::info!("Analysis of {} rendered", symbol);
            },
            Err(e) => {
                tracing::warn!("Analysis of {} failed: {}", symbol, e);
                let message = self.language.messages().analysis_failed(symbol, &e.to_string());
                self.show_error(&message);
                self.state = RequestState::Failed;
            },
        }
    }

    async fn fetch_and_render(&mut self, symbol: &str) -> Result<()> {
        let api = &self.api;
        let (info, history, indicators, analysis) = tokio::try_join!(
            api.get_stock_info(symbol),
            api.get_historical_data(symbol),
            api.get_technical_indicators(symbol),
            api.analyze_stock(symbol),
        )?;
        tracing::debug!(
            "Fetched {} history points and {} indicator rows for {}",
            history.len(),
            indicators.len(),
            symbol
        );

        // Charts first: they are the only render that can fail on page layout
        let messages = self.language.messages();
        render_charts(&mut self.document, &mut self.charts, &history, &indicators, messages)?;
        render_stock_info(&mut self.document, &info, messages)?;
        render_sepa_analysis(&mut self.document, &analysis, messages)?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        self.document.set_inner_html(ids::ERROR_MESSAGE, escape_text(message));
        self.document.set_hidden(ids::ERROR_MESSAGE, false);
        self.last_error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.document.set_inner_html(ids::ERROR_MESSAGE, String::new());
        self.document.set_hidden(ids::ERROR_MESSAGE, true);
        self.last_error = None;
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Plain text of the message in the error box, if one is showing
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Chart instances currently owned by this dashboard
    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }
}
