//! Token normalization and primitive synthesis.
//!
//! Converts the extractors' raw per-mode candidates into canonical tokens:
//! every endpoint becomes a primitive reference or a literal, single-mode
//! candidates degenerate into primitives, and typography endpoints that
//! match no primitive get one synthesized on demand.

use crate::document::Mode;
use crate::extract::color::{self, CandidateMap, ColorHarvest};
use crate::extract::spacing::SpacingHarvest;
use crate::extract::typography::{RawCandidates, TypographyHarvest};
use crate::registry::{self, Namespace, PrimitiveRef, PrimitiveValue, Registry};
use crate::report::{Notice, Report};
use crate::token::{ResolvedValue, Token, TokenSet};
use crate::util::parse_px;

/// Runs normalization over all extractor outputs.
///
/// Processing order follows merge precedence: color, spacing, typography.
pub(crate) fn normalize(
    colors: &ColorHarvest,
    spacing: &SpacingHarvest,
    typography: &TypographyHarvest,
    registry: &mut Registry,
    report: &mut Report,
) -> TokenSet {
    let mut tokens = TokenSet::new();
    normalize_colors(&colors.candidates, registry, report, &mut tokens);
    normalize_spacing(spacing, registry, &mut tokens);
    normalize_typography(Namespace::FontSize, &typography.font_size, registry, report, &mut tokens);
    normalize_typography(
        Namespace::LineHeight,
        &typography.line_height,
        registry,
        report,
        &mut tokens,
    );
    tokens
}

/// Color candidates: resolve each contribution, demote single-mode ones.
///
/// No primitives are synthesized for colors; resolution only ever yields
/// an alias target, a value match, or the raw literal.
fn normalize_colors(
    candidates: &CandidateMap,
    registry: &mut Registry,
    report: &mut Report,
    tokens: &mut TokenSet,
) {
    for (name, contributions) in candidates {
        let mut token = Token::default();
        for (mode, contribution) in contributions {
            let resolved = color::resolve_contribution(name, contribution, registry, report);
            token.values.insert(*mode, resolved);
        }
        if let Some(primitive) = demote_single_mode(name, &token, report) {
            registry.insert(Namespace::Color, name.clone(), PrimitiveValue::Color(primitive));
            continue;
        }
        warn_identical_variants(name, &token, report);
        tokens.insert(Namespace::Color, name.clone(), token);
    }
}

/// Returns the flat CSS value when the token has exactly one contributing
/// mode, reporting the dropped variant when that mode was a named one.
fn demote_single_mode(name: &str, token: &Token, report: &mut Report) -> Option<String> {
    if token.values.len() != 1 {
        return None;
    }
    let (mode, value) = token.values.iter().next()?;
    if let Some(mode) = mode {
        report.push(Notice::MissingModeVariant {
            token: name.to_string(),
            mode: *mode,
        });
    }
    Some(value.css())
}

fn warn_identical_variants(name: &str, token: &Token, report: &mut Report) {
    let light = token.get(Some(Mode::Light));
    let dark = token.get(Some(Mode::Dark));
    if let (Some(light), Some(dark)) = (light, dark) {
        if light.css() == dark.css() {
            report.push(Notice::IdenticalVariants {
                token: name.to_string(),
            });
        }
    }
}

/// Spacing aliases: a token shadowed by its like-named spacing or rounded
/// primitive is dropped from the token set entirely.
fn normalize_spacing(spacing: &SpacingHarvest, registry: &Registry, tokens: &mut TokenSet) {
    for (ns, name) in &spacing.aliases {
        if registry.contains(Namespace::Spacing, name) || registry.contains(Namespace::Rounded, name)
        {
            continue;
        }
        let mut token = Token::default();
        token
            .values
            .insert(None, ResolvedValue::Reference(PrimitiveRef::new(*ns, name.clone())));
        tokens.insert(*ns, name.clone(), token);
    }
}

/// Typography candidates: demote single-mode ones, reference the rest.
fn normalize_typography(
    ns: Namespace,
    candidates: &RawCandidates,
    registry: &mut Registry,
    report: &mut Report,
    tokens: &mut TokenSet,
) {
    for (name, contributions) in candidates {
        if contributions.len() == 1 {
            if let Some((mode, raw)) = contributions.iter().next() {
                if let Some(mode) = mode {
                    report.push(Notice::MissingModeVariant {
                        token: name.clone(),
                        mode: *mode,
                    });
                }
                registry.insert(ns, name.clone(), typography_value(raw));
            }
            continue;
        }
        let mut token = Token::default();
        for (mode, raw) in contributions {
            let target = resolve_typography_endpoint(ns, name, *mode, raw, registry);
            token.values.insert(*mode, ResolvedValue::Reference(target));
        }
        tokens.insert(ns, name.clone(), token);
    }
}

/// Finds or synthesizes the primitive backing one typography endpoint.
///
/// In order: a value match inside the expected namespace is reused; a value
/// match that exists only in a foreign namespace yields a new value-named
/// primitive inside the expected namespace; no match anywhere yields a
/// primitive named from the token and mode. Synthesis is idempotent per
/// `(namespace, value)`.
fn resolve_typography_endpoint(
    ns: Namespace,
    token: &str,
    mode: Option<Mode>,
    raw: &str,
    registry: &mut Registry,
) -> PrimitiveRef {
    if let Some(existing) = registry.find_by_value(ns, raw) {
        return PrimitiveRef::new(ns, existing);
    }
    let value = typography_value(raw);
    if registry.find_value_anywhere(raw).is_some() {
        let name = registry::value_slug(&value);
        return registry.synthesize(ns, &name, value);
    }
    let name = format!("{token}-{}", mode.map_or("default", Mode::as_str));
    registry.synthesize(ns, &name, value)
}

fn typography_value(raw: &str) -> PrimitiveValue {
    match parse_px(raw) {
        Some(px) => PrimitiveValue::Px(px),
        None => PrimitiveValue::Text(raw.to_string()),
    }
}

/// Post-normalization check of the token-endpoint invariant: every
/// reference must name a registered primitive.
pub(crate) fn validate_references(tokens: &TokenSet, registry: &Registry, report: &mut Report) {
    for (_, name, token) in tokens.iter() {
        for value in token.values.values() {
            if let ResolvedValue::Reference(target) = value {
                if registry.get(target.namespace, &target.name).is_none() {
                    report.push(Notice::MissingPrimitiveReference {
                        token: name.clone(),
                        reference: target.property(),
                    });
                }
            }
        }
    }
}
