//! Price, RSI and MACD charts

use crate::chart::{ChartBackend, ChartConfig, ChartRegistry, macd_chart, price_chart, rsi_chart};
use crate::dom::{Document, ids};
use crate::error::Result;
use crate::locale::Messages;
use crate::models::{HistoricalPoint, TechnicalIndicators};

/// Mount the dashboard charts, replacing any earlier instances
///
/// Nothing is drawn without the price chart container. The RSI and MACD
/// charts share one gate: the RSI container. A chart whose canvas is missing
/// is skipped.
pub fn render_charts<D>(
    doc: &mut D,
    registry: &mut ChartRegistry,
    history: &[HistoricalPoint],
    indicators: &TechnicalIndicators,
    messages: &Messages,
) -> Result<()>
where
    D: Document + ChartBackend + ?Sized,
{
    if !doc.contains(ids::STOCK_CHART_CONTAINER) {
        tracing::debug!("No price chart container, skipping charts");
        return Ok(());
    }

    mount_if_present(doc, registry, ids::STOCK_CHART, || price_chart(history, indicators, messages))?;

    if doc.contains(ids::RSI_CHART_CONTAINER) {
        mount_if_present(doc, registry, ids::RSI_CHART, || rsi_chart(indicators, messages))?;
        mount_if_present(doc, registry, ids::MACD_CHART, || macd_chart(indicators, messages))?;
    }

    Ok(())
}

fn mount_if_present<D, F>(doc: &mut D, registry: &mut ChartRegistry, canvas_id: &str, config: F) -> Result<()>
where
    D: Document + ChartBackend + ?Sized,
    F: FnOnce() -> ChartConfig,
{
    if !doc.contains(canvas_id) {
        tracing::debug!("No canvas {}, skipping chart", canvas_id);
        return Ok(());
    }
    registry.mount(doc, canvas_id, &config())?;
    Ok(())
}
