//! Numeric formatting and length parsing helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Root font size used to convert absolute pixel quantities into `rem`.
pub const ROOT_FONT_PX: f64 = 16.0;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Formats a float with at most `places` decimals, trimming trailing zeros.
///
/// # Example
///
/// ```rust
/// use themecast::trim_float;
///
/// assert_eq!(trim_float(0.9510, 3), "0.951");
/// assert_eq!(trim_float(16.0, 3), "16");
/// assert_eq!(trim_float(0.21739, 4), "0.2174");
/// ```
pub fn trim_float(value: f64, places: usize) -> String {
    let mut s = format!("{value:.places$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Renders a pixel quantity as a root-relative `rem` literal.
pub fn format_rem(px: f64) -> String {
    format!("{}rem", trim_float(px / ROOT_FONT_PX, 4))
}

/// Parses a raw scalar into a pixel quantity.
///
/// Accepts bare numbers (taken as pixels), `px`-suffixed and `rem`-suffixed
/// strings. Variable-style references are resolved elsewhere, against the
/// registry.
pub fn parse_px(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<f64>() {
        return Some(n);
    }
    if let Some(stripped) = raw.strip_suffix("rem") {
        return stripped.trim().parse::<f64>().ok().map(|r| r * ROOT_FONT_PX);
    }
    if let Some(stripped) = raw.strip_suffix("px") {
        return stripped.trim().parse::<f64>().ok();
    }
    None
}

/// Returns true for `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` strings.
pub fn is_hex_color(raw: &str) -> bool {
    HEX_COLOR.is_match(raw)
}

/// Canonical string form of a scalar JSON value, `None` for non-scalars.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(|f| trim_float(f, 6)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
