//! Renderers that paint API results into the page
//!
//! Each renderer targets one container by id and silently does nothing when
//! that container is absent. Markup comes from MiniJinja templates with HTML
//! auto-escaping, so API-supplied text can never inject markup.

pub mod charts;
pub mod info;
pub mod page;
pub mod recommendation;

pub use charts::render_charts;
pub use info::{PriceDirection, format_pe, render_stock_info};
pub use recommendation::{recommendation_class, render_sepa_analysis};

use crate::error::Result;
use minijinja::Environment;

/// Template environment with every dashboard template registered
///
/// A fresh environment per render keeps the templates free of lifetime ties
/// to the caller.
pub(crate) fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("stock_info.html", info::TEMPLATE)?;
    env.add_template("sepa_analysis.html", recommendation::TEMPLATE)?;
    env.add_template("page.html", page::TEMPLATE)?;
    Ok(env)
}

/// Escape text for insertion as element content
pub fn escape_text(text: &str) -> String {
    minijinja::HtmlEscape(text).to_string()
}
