//! Standalone HTML page for an [`HtmlDocument`]

use super::environment;
use crate::dom::HtmlDocument;
use crate::error::Result;
use crate::locale::Messages;
use serde::Serialize;
use std::collections::BTreeMap;

pub(crate) const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ m.page_title }}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        .stock-up { color: #4CAF50; }
        .stock-down { color: #F44336; }
        .info-item { display: flex; flex-direction: column; }
        .info-label { color: #6c757d; font-size: 0.85rem; }
        .info-value { font-weight: 600; }
        .chart-box { position: relative; height: 400px; }
        .chart-box-small { position: relative; height: 250px; }
        .recommendation-badge { padding: 0.35rem 0.9rem; border-radius: 1rem; font-weight: 600; }
        .recommendation-buy { background: #E8F5E9; color: #2E7D32; }
        .recommendation-sell { background: #FFEBEE; color: #C62828; }
        .recommendation-neutral { background: #ECEFF1; color: #455A64; }
        .rule-passed { color: #2E7D32; }
        .rule-failed { color: #C62828; }
    </style>
</head>
<body>
{% macro attrs(id, el) %} id="{{ id }}"{% if el.hidden %} hidden{% endif %}{% endmacro %}
<div class="container py-4">
    <h1 class="mb-4">{{ m.page_title }}</h1>
    {% set el = els.stockAnalysisContainer %}
    {% if el %}
    <div class="card mb-4"{{ attrs("stockAnalysisContainer", el) }}>
        <div class="card-body">
            <div class="input-group">
                {% if els.stockSymbol %}<input type="text" class="form-control"{{ attrs("stockSymbol", els.stockSymbol) }} placeholder="{{ m.symbol_placeholder }}" value="{{ els.stockSymbol.value }}">{% endif %}
                {% if els.analyzeButton %}<button type="button" class="btn btn-primary"{{ attrs("analyzeButton", els.analyzeButton) }}>{{ m.analyze }}</button>{% endif %}
            </div>
        </div>
    </div>
    {% endif %}
    {% set el = els.loadingIndicator %}
    {% if el %}
    <div class="text-center my-4"{{ attrs("loadingIndicator", el) }}>
        <div class="spinner-border text-primary" role="status"></div>
        <p class="mt-2">{{ m.loading }}</p>
    </div>
    {% endif %}
    {% set el = els.errorMessage %}
    {% if el %}<div class="alert alert-danger"{{ attrs("errorMessage", el) }}>{{ el.html|safe }}</div>{% endif %}
    {% set el = els.stockInfoContainer %}
    {% if el %}<div class="card card-body mb-4"{{ attrs("stockInfoContainer", el) }}>{{ el.html|safe }}</div>{% endif %}
    {% set el = els.stockChartContainer %}
    {% if el %}
    <div class="card card-body mb-4"{{ attrs("stockChartContainer", el) }}>
        <div class="chart-box">{% if els.stockChart %}<canvas{{ attrs("stockChart", els.stockChart) }}></canvas>{% endif %}</div>
    </div>
    {% endif %}
    {% set el = els.rsiChartContainer %}
    {% if el %}
    <div class="row mb-4"{{ attrs("rsiChartContainer", el) }}>
        <div class="col-md-6">
            <div class="card card-body chart-box-small">{% if els.rsiChart %}<canvas{{ attrs("rsiChart", els.rsiChart) }}></canvas>{% endif %}</div>
        </div>
        <div class="col-md-6">
            <div class="card card-body chart-box-small">{% if els.macdChart %}<canvas{{ attrs("macdChart", els.macdChart) }}></canvas>{% endif %}</div>
        </div>
    </div>
    {% endif %}
    {% set el = els.sepaAnalysisContainer %}
    {% if el %}<div class="card card-body mb-4"{{ attrs("sepaAnalysisContainer", el) }}>{{ el.html|safe }}</div>{% endif %}
</div>
{% if has_charts %}
<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
<script src="https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3.0.0/dist/chartjs-adapter-date-fns.bundle.min.js"></script>
<script>
    const charts = {{ charts_json|safe }};
    for (const [canvasId, config] of Object.entries(charts)) {
        const tooltip = config.options.plugins && config.options.plugins.tooltip;
        if (tooltip && tooltip.valueDecimals !== undefined) {
            const decimals = tooltip.valueDecimals;
            delete tooltip.valueDecimals;
            tooltip.callbacks = {
                label: (ctx) => ctx.dataset.label + ': ' + (ctx.parsed.y === null ? '' : ctx.parsed.y.toFixed(decimals))
            };
        }
        new Chart(document.getElementById(canvasId), config);
    }
</script>
{% endif %}
</body>
</html>
"##;

#[derive(Serialize)]
struct ElementView<'a> {
    html: &'a str,
    value: &'a str,
    hidden: bool,
}

#[derive(Serialize)]
struct PageView<'a> {
    lang: &'a str,
    dir: &'static str,
    m: &'static Messages,
    els: BTreeMap<&'a str, ElementView<'a>>,
    has_charts: bool,
    charts_json: String,
}

/// Render the whole page, including a script that recreates the live charts
///
/// Elements missing from the document are left out of the page.
pub fn render_page(doc: &HtmlDocument) -> Result<String> {
    let language = doc.language();

    let els = doc
        .elements()
        .iter()
        .map(|(id, el)| {
            (
                id.as_str(),
                ElementView {
                    html: &el.inner_html,
                    value: &el.value,
                    hidden: el.hidden,
                },
            )
        })
        .collect();

    let charts: BTreeMap<&str, _> = doc.charts().collect();
    // The JSON lands inside a <script> element
    let charts_json = serde_json::to_string(&charts)?.replace("</", "<\\/");

    let view = PageView {
        lang: language.code(),
        dir: language.dir(),
        m: language.messages(),
        els,
        has_charts: !charts.is_empty(),
        charts_json,
    };

    let env = environment()?;
    Ok(env.get_template("page.html")?.render(&view)?)
}
