//! Fluid clamp calculation.
//!
//! Collapses a mobile and a desktop endpoint into one responsive CSS
//! expression, linearly interpolated across the 360px–1280px viewport
//! range. Pure functions over the registry; callers detect equal endpoints
//! and emit the flat value themselves.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::{PrimitiveRef, Registry};
use crate::token::ResolvedValue;
use crate::util::{format_rem, parse_px, trim_float, ROOT_FONT_PX};

/// Viewport anchor for the mobile endpoint.
pub const VIEWPORT_MIN_PX: f64 = 360.0;
/// Viewport anchor for the desktop endpoint.
pub const VIEWPORT_MAX_PX: f64 = 1280.0;

static VAR_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^var\(\s*--([A-Za-z0-9-]+)\s*\)$").unwrap());

/// Renders the responsive expression for two endpoints.
///
/// When both endpoints resolve to pixel quantities the result is a
/// `clamp()` with a precomputed `rem + vw` midline; otherwise a generic
/// `calc()` interpolation between the two expressions.
///
/// # Example
///
/// ```rust
/// use themecast::{clamp_expression, Registry, ResolvedValue};
///
/// let registry = Registry::new();
/// let mobile = ResolvedValue::Literal("16".to_string());
/// let desktop = ResolvedValue::Literal("18".to_string());
/// assert_eq!(
///     clamp_expression(&mobile, &desktop, &registry),
///     "clamp(1rem, 0.951rem + 0.2174vw, 1.125rem)"
/// );
/// ```
pub fn clamp_expression(
    mobile: &ResolvedValue,
    desktop: &ResolvedValue,
    registry: &Registry,
) -> String {
    let mob = endpoint_expr(mobile, registry);
    let desk = endpoint_expr(desktop, registry);
    match (endpoint_px(mobile, registry), endpoint_px(desktop, registry)) {
        (Some(m), Some(d)) => {
            let slope = (d - m) * 100.0 / (VIEWPORT_MAX_PX - VIEWPORT_MIN_PX);
            let intercept = m - slope * (VIEWPORT_MIN_PX / 100.0);
            format!(
                "clamp({mob}, {}rem + {}vw, {desk})",
                trim_float(intercept / ROOT_FONT_PX, 3),
                trim_float(slope, 4)
            )
        }
        _ => format!(
            "clamp({mob}, calc({mob} + ({desk} - {mob}) * ((100vw - {}rem) / {})), {desk})",
            trim_float(VIEWPORT_MIN_PX / ROOT_FONT_PX, 4),
            trim_float((VIEWPORT_MAX_PX - VIEWPORT_MIN_PX) / ROOT_FONT_PX, 4)
        ),
    }
}

/// Pixel quantity an endpoint resolves to, when it does.
///
/// A reference resolves through the registry; a literal may be a bare
/// pixel number, a `px`/`rem` string, or a `var(--…)` expression naming a
/// registered primitive.
pub(crate) fn endpoint_px(value: &ResolvedValue, registry: &Registry) -> Option<f64> {
    match value {
        ResolvedValue::Reference(r) => registry.resolve_px(r),
        ResolvedValue::Literal(raw) => {
            if let Some(px) = parse_px(raw) {
                return Some(px);
            }
            let target = var_target(raw, registry)?;
            registry.resolve_px(&target)
        }
    }
}

/// CSS for one endpoint: the original reference when the input was one,
/// else a `rem` literal of the resolved pixel value.
pub(crate) fn endpoint_expr(value: &ResolvedValue, registry: &Registry) -> String {
    match value {
        ResolvedValue::Reference(r) => r.css_var(),
        ResolvedValue::Literal(raw) => {
            if VAR_REF.is_match(raw.trim()) {
                raw.trim().to_string()
            } else if let Some(px) = parse_px(raw) {
                format_rem(px)
            } else {
                raw.clone()
            }
        }
    }
}

/// Primitive named by a `var(--…)` literal, when registered.
fn var_target(raw: &str, registry: &Registry) -> Option<PrimitiveRef> {
    let caps = VAR_REF.captures(raw.trim())?;
    registry.lookup(caps.get(1).map(|m| m.as_str())?)
}
