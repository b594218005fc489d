//! SEPA recommendation panel

use super::environment;
use crate::dom::{Document, ids};
use crate::error::Result;
use crate::locale::Messages;
use crate::models::{SepaAnalysis, SepaRule};
use serde::Serialize;

pub(crate) const TEMPLATE: &str = r#"<div class="sepa-analysis">
    <div class="d-flex align-items-center justify-content-between mb-3">
        <h4 class="mb-0">{{ m.recommendation }}</h4>
        <span class="recommendation-badge {{ class }}">{{ recommendation }}</span>
    </div>
    {% if confidence %}
    <div class="mb-3">
        <span class="info-label">{{ m.confidence }}</span>
        <div class="progress">
            <div class="progress-bar" role="progressbar" style="width: {{ confidence }}%">{{ confidence }}%</div>
        </div>
    </div>
    {% endif %}
    {% if rules %}
    <div class="sepa-rules mb-3">
        <span class="info-label">{{ m.rules_passed }}: {{ rules_passed }}/{{ total_rules }}</span>
        <ul class="list-unstyled mb-0">
            {% for rule in rules %}
            <li class="{% if rule.passed %}rule-passed{% else %}rule-failed{% endif %}">
                <i class="fas {% if rule.passed %}fa-check-circle{% else %}fa-times-circle{% endif %}"></i>
                {{ rule.label }}
            </li>
            {% endfor %}
        </ul>
    </div>
    {% endif %}
    {% if trend %}<p class="sepa-trend"><strong>{{ m.trend }}:</strong> {{ trend }}</p>{% endif %}
    {% if pattern %}<p class="sepa-pattern"><strong>{{ m.pattern }}:</strong> {{ pattern }}</p>{% endif %}
    {% if summary %}<p class="sepa-summary">{{ summary }}</p>{% endif %}
    {% if report %}<details class="sepa-report"><summary>{{ m.report }}</summary><p>{{ report }}</p></details>{% endif %}
</div>"#;

const BUY_CLASS: &str = "recommendation-buy";
const SELL_CLASS: &str = "recommendation-sell";
const NEUTRAL_CLASS: &str = "recommendation-neutral";

/// Display class for a recommendation
///
/// Exact match against the locale's buy and sell tokens; anything else,
/// including other casings, is neutral.
pub fn recommendation_class(recommendation: &str, messages: &Messages) -> &'static str {
    if recommendation == messages.buy {
        BUY_CLASS
    } else if recommendation == messages.sell {
        SELL_CLASS
    } else {
        NEUTRAL_CLASS
    }
}

fn rule_label(rule: SepaRule, messages: &Messages) -> &'static str {
    match rule {
        SepaRule::Trend => messages.rule_trend,
        SepaRule::Pattern => messages.rule_pattern,
        SepaRule::Volume => messages.rule_volume,
        SepaRule::RelativeStrength => messages.rule_relative_strength,
        SepaRule::Earnings => messages.rule_earnings,
    }
}

#[derive(Serialize)]
struct RuleView {
    label: &'static str,
    passed: bool,
}

#[derive(Serialize)]
struct SepaView<'a> {
    m: &'a Messages,
    class: &'static str,
    recommendation: &'a str,
    confidence: Option<String>,
    rules: Vec<RuleView>,
    rules_passed: u32,
    total_rules: u32,
    trend: Option<&'a str>,
    pattern: Option<&'a str>,
    summary: Option<&'a str>,
    report: Option<&'a str>,
}

/// Paint `analysis` into the SEPA container
///
/// Returns `false` without touching the page when the container is absent.
pub fn render_sepa_analysis<D>(doc: &mut D, analysis: &SepaAnalysis, messages: &Messages) -> Result<bool>
where
    D: Document + ?Sized,
{
    if !doc.contains(ids::SEPA_ANALYSIS_CONTAINER) {
        return Ok(false);
    }

    let rules = analysis.sepa_rules.as_ref();
    let view = SepaView {
        m: messages,
        class: recommendation_class(&analysis.recommendation, messages),
        recommendation: &analysis.recommendation,
        confidence: analysis
            .confidence_score
            .map(|score| format!("{:.0}", score.clamp(0.0, 1.0) * 100.0)),
        rules: rules
            .map(|rules| {
                rules
                    .checklist()
                    .into_iter()
                    .map(|(rule, passed)| RuleView {
                        label: rule_label(rule, messages),
                        passed,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        rules_passed: rules.map_or(0, |r| r.rules_passed),
        total_rules: rules.map_or(0, |r| r.total_rules),
        trend: analysis
            .trend_analysis()
            .and_then(|t| t.trend_state.as_deref().or(t.trend_direction.as_deref())),
        pattern: analysis
            .pattern_analysis()
            .and_then(|p| p.pattern_type.as_deref()),
        summary: analysis.summary(),
        report: analysis.analysis_report.as_deref(),
    };

    let env = environment()?;
    let html = env.get_template("sepa_analysis.html")?.render(&view)?;
    doc.set_inner_html(ids::SEPA_ANALYSIS_CONTAINER, html);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;
    use crate::locale::{ARABIC, ENGLISH, Language};
    use crate::models::{SepaDetail, SepaRules, TrendAnalysis};
    use serde_json::json;

    #[test]
    fn test_recommendation_class_english() {
        assert_eq!(recommendation_class("Buy", &ENGLISH), "recommendation-buy");
        assert_eq!(recommendation_class("Sell", &ENGLISH), "recommendation-sell");
        assert_eq!(recommendation_class("Hold", &ENGLISH), "recommendation-neutral");
        assert_eq!(recommendation_class("buy", &ENGLISH), "recommendation-neutral");
        assert_eq!(recommendation_class("", &ENGLISH), "recommendation-neutral");
    }

    #[test]
    fn test_recommendation_class_arabic() {
        assert_eq!(recommendation_class("شراء", &ARABIC), "recommendation-buy");
        assert_eq!(recommendation_class("بيع", &ARABIC), "recommendation-sell");
        assert_eq!(recommendation_class("Buy", &ARABIC), "recommendation-neutral");
    }

    #[test]
    fn test_render_full_analysis() {
        let analysis = SepaAnalysis {
            symbol: Some("NVDA".to_string()),
            recommendation: "Buy".to_string(),
            confidence_score: Some(0.95),
            sepa_rules: Some(SepaRules {
                trend_rule_passed: true,
                pattern_rule_passed: true,
                volume_rule_passed: false,
                rs_rule_passed: true,
                earnings_rule_passed: true,
                rules_passed: 4,
                total_rules: 5,
            }),
            sepa_analysis: Some(SepaDetail {
                trend_analysis: Some(TrendAnalysis {
                    trend_state: Some("Strong uptrend".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            natural_language_recommendation: Some("Momentum is intact.".to_string()),
            analysis_report: Some("Stage 2 uptrend with a tight base.".to_string()),
            ..Default::default()
        };

        let mut doc = HtmlDocument::dashboard(Language::English);
        assert!(render_sepa_analysis(&mut doc, &analysis, &ENGLISH).unwrap());

        let html = doc.inner_html(ids::SEPA_ANALYSIS_CONTAINER).unwrap();
        assert!(html.contains("recommendation-badge recommendation-buy"));
        assert!(html.contains("width: 95%"));
        assert_eq!(html.matches("rule-passed").count(), 4);
        assert_eq!(html.matches("rule-failed").count(), 1);
        assert!(html.contains("Strong uptrend"));
        assert!(html.contains("Momentum is intact."));
        assert!(!html.contains("sepa-pattern"));
        assert!(html.contains("Stage 2 uptrend with a tight base."));
    }

    #[test]
    fn test_render_nested_engine_payload() {
        let analysis: SepaAnalysis = serde_json::from_value(json!({
            "recommendation": "Hold",
            "confidence_score": 0.5,
            "sepa_analysis": {
                "summary": "Base still forming.",
                "trend_analysis": {"trend_state": "Sideways", "trend_template_score": 3},
                "pattern_analysis": {"has_vcp_pattern": true, "pattern_type": "VCP"},
                "entry_exit_analysis": {},
                "recommendation_details": {"reasoning": "Volume has not confirmed."}
            }
        }))
        .unwrap();

        let mut doc = HtmlDocument::dashboard(Language::English);
        assert!(render_sepa_analysis(&mut doc, &analysis, &ENGLISH).unwrap());

        let html = doc.inner_html(ids::SEPA_ANALYSIS_CONTAINER).unwrap();
        assert!(html.contains("Sideways"));
        assert!(html.contains("sepa-pattern"));
        assert!(html.contains("VCP"));
        assert!(html.contains("Base still forming."));
    }

    #[test]
    fn test_render_minimal_analysis() {
        let analysis = SepaAnalysis {
            recommendation: "Hold".to_string(),
            ..Default::default()
        };

        let mut doc = HtmlDocument::dashboard(Language::English);
        render_sepa_analysis(&mut doc, &analysis, &ENGLISH).unwrap();

        let html = doc.inner_html(ids::SEPA_ANALYSIS_CONTAINER).unwrap();
        assert!(html.contains("recommendation-neutral"));
        assert!(!html.contains("progress-bar"));
        assert!(!html.contains("sepa-rules"));
    }

    #[test]
    fn test_missing_container_is_noop() {
        let analysis = SepaAnalysis::default();
        let mut doc = HtmlDocument::dashboard(Language::English)
            .without_element(ids::SEPA_ANALYSIS_CONTAINER);
        assert!(!render_sepa_analysis(&mut doc, &analysis, &ENGLISH).unwrap());
    }
}
