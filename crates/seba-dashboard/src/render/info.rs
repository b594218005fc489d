//! Stock info panel

use super::environment;
use crate::dom::{Document, ids};
use crate::error::Result;
use crate::format::{fixed2, format_market_cap, format_number};
use crate::locale::Messages;
use crate::models::StockInfo;
use serde::Serialize;

pub(crate) const TEMPLATE: &str = r#"<div class="stock-info-header">
    <div class="row align-items-center">
        <div class="col-md-6">
            <h2>{{ name }} ({{ symbol }})</h2>
            <p class="text-muted">{{ exchange }} | {{ sector }}</p>
        </div>
        <div class="col-md-6 text-md-end">
            <h3 class="stock-price">{{ price }} {{ currency }}</h3>
            <p class="stock-change {{ change_class }}">
                <i class="fas {{ change_icon }}"></i>
                {{ change }} ({{ change_percent }}%)
            </p>
        </div>
    </div>
</div>
<div class="stock-info-details mt-4">
    {% for row in rows %}
    <div class="row{% if not loop.first %} mt-2{% endif %}">
        {% for item in row %}
        <div class="col-md-3 col-6 mb-3">
            <div class="info-item">
                <span class="info-label">{{ item.label }}</span>
                <span class="info-value">{{ item.value }}</span>
            </div>
        </div>
        {% endfor %}
    </div>
    {% endfor %}
</div>"#;

/// Direction of the day's price change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Up,
    Down,
}

impl PriceDirection {
    /// Zero change counts as up
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PriceDirection::Up => "stock-up",
            PriceDirection::Down => "stock-down",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PriceDirection::Up => "fa-caret-up",
            PriceDirection::Down => "fa-caret-down",
        }
    }
}

/// P/E to two decimals, or the localized placeholder when unknown
pub fn format_pe(pe: Option<f64>, messages: &Messages) -> String {
    match pe {
        Some(pe) => fixed2(pe),
        None => messages.not_available.to_string(),
    }
}

#[derive(Serialize)]
struct InfoItem<'a> {
    label: &'a str,
    value: String,
}

fn item(label: &str, value: String) -> InfoItem<'_> {
    InfoItem { label, value }
}

#[derive(Serialize)]
struct InfoView<'a> {
    name: &'a str,
    symbol: &'a str,
    exchange: &'a str,
    sector: &'a str,
    price: String,
    currency: &'a str,
    change_class: &'static str,
    change_icon: &'static str,
    change: String,
    change_percent: String,
    rows: [[InfoItem<'a>; 4]; 2],
}

/// Paint `info` into the stock info container
///
/// Returns `false` without touching the page when the container is absent.
pub fn render_stock_info<D>(doc: &mut D, info: &StockInfo, messages: &Messages) -> Result<bool>
where
    D: Document + ?Sized,
{
    if !doc.contains(ids::STOCK_INFO_CONTAINER) {
        return Ok(false);
    }

    let direction = PriceDirection::of(info.price_change);

    let view = InfoView {
        name: &info.name,
        symbol: &info.symbol,
        exchange: &info.exchange,
        sector: &info.sector,
        price: fixed2(info.price),
        currency: &info.currency,
        change_class: direction.css_class(),
        change_icon: direction.icon(),
        change: fixed2(info.price_change.abs()),
        change_percent: fixed2(info.price_change_percent.abs()),
        rows: [
            [
                item(messages.open, fixed2(info.open)),
                item(messages.high, fixed2(info.high)),
                item(messages.low, fixed2(info.low)),
                item(messages.volume, format_number(info.volume)),
            ],
            [
                item(messages.week_52_high, fixed2(info.fifty_two_week_high)),
                item(messages.week_52_low, fixed2(info.fifty_two_week_low)),
                item(
                    messages.market_cap,
                    format_market_cap(info.market_cap, messages.not_available),
                ),
                item(messages.pe_ratio, format_pe(info.pe, messages)),
            ],
        ],
    };

    let env = environment()?;
    let html = env.get_template("stock_info.html")?.render(&view)?;
    doc.set_inner_html(ids::STOCK_INFO_CONTAINER, html);
    Ok(true)
}
