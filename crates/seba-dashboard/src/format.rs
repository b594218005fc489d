//! Number formatting for the info panel

const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Abbreviate a large count, e.g. `51234567` becomes `51.23M`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let magnitude = value.abs();
    for (scale, suffix) in SUFFIXES {
        if magnitude >= scale {
            return format!("{:.2}{suffix}", value / scale);
        }
    }
    format!("{value:.0}")
}

/// Abbreviate a market capitalisation; zero or negative means unknown
pub fn format_market_cap(value: f64, not_available: &str) -> String {
    if value <= 0.0 || !value.is_finite() {
        return not_available.to_string();
    }
    format_number(value)
}

/// Two decimal places
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}
