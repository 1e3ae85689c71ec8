//! Theme assembly: the ordered stylesheet and its structural self-check.
//!
//! Renders every section in a fixed order inside one `:root` scope, with
//! global default tables individually overridable by like-named project
//! primitives and tokens. Section presence, ordering and the exact default
//! text are part of the external contract.

use std::collections::BTreeSet;

use crate::defaults::{COLOR_RAMP, GLOBAL_GROUPS, SEMANTIC_GROUPS};
use crate::document::Mode;
use crate::fluid;
use crate::registry::{Namespace, Registry};
use crate::report::{Notice, Report};
use crate::sort::sorted_scale;
use crate::token::{ResolvedValue, Token, TokenSet};

/// Canonical first line of every assembled stylesheet.
pub const HEADER: &str = "/* themecast: generated theme. Do not edit by hand. */";

/// Everything the assembler needs from the pipeline.
pub(crate) struct AssemblyInput<'a> {
    pub registry: &'a Registry,
    pub tokens: &'a TokenSet,
    pub observed: &'a BTreeSet<Mode>,
    pub saw_spacing: bool,
    pub saw_font_size: bool,
    pub saw_line_height: bool,
    pub empty_input: bool,
}

/// Renders the stylesheet.
pub(crate) fn assemble(input: &AssemblyInput<'_>) -> String {
    let mut blocks: Vec<String> = Vec::new();
    push_metadata(input, &mut blocks);
    push_color_ramp(input, &mut blocks);
    push_color_primitives(input, &mut blocks);
    push_semantic_groups(input, &mut blocks);
    push_color_tokens(input, &mut blocks);
    push_global_groups(input, &mut blocks);
    push_spacing(input, &mut blocks);
    push_typography(input, &mut blocks);

    format!("{HEADER}\n\n:root {{\n\n{}\n}}\n", blocks.join("\n\n"))
}

/// One titled block of declarations; empty blocks are omitted entirely.
fn push_block(blocks: &mut Vec<String>, title: &str, decls: Vec<String>) {
    if decls.is_empty() {
        return;
    }
    let mut lines = vec![format!("  /* {title} */")];
    lines.extend(decls);
    blocks.push(lines.join("\n"));
}

fn decl(property: &str, value: &str) -> String {
    format!("  {property}: {value};")
}

fn push_metadata(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    let has_light = input.observed.contains(&Mode::Light);
    let has_dark = input.observed.contains(&Mode::Dark);
    let scheme = match (has_light, has_dark) {
        (true, false) => "light",
        (false, true) => "dark",
        _ => "light dark",
    };
    push_block(
        blocks,
        "Theme metadata",
        vec![format!("  color-scheme: {scheme};")],
    );
    if scheme == "light dark" {
        for mode in ["light", "dark"] {
            blocks.push(format!(
                "  &[data-theme='{mode}'] {{\n    color-scheme: {mode};\n  }}"
            ));
        }
    }
}

fn push_color_ramp(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    let decls = COLOR_RAMP
        .iter()
        .map(|(name, default)| {
            // The ramp owns its names: a like-named token or primitive
            // renders here and nowhere else.
            let value = input
                .tokens
                .get(Namespace::Color, name)
                .map(|token| token_expression(token, input.registry))
                .or_else(|| input.registry.get(Namespace::Color, name).map(|v| v.css()))
                .unwrap_or_else(|| (*default).to_string());
            decl(&format!("--color-{name}"), &value)
        })
        .collect();
    push_block(blocks, "Color ramp", decls);
}

fn ramp_names() -> BTreeSet<&'static str> {
    COLOR_RAMP.iter().map(|(name, _)| *name).collect()
}

fn semantic_names() -> BTreeSet<&'static str> {
    SEMANTIC_GROUPS
        .iter()
        .flat_map(|group| group.entries.iter().map(|(name, _)| *name))
        .collect()
}

fn push_color_primitives(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    let ramp = ramp_names();
    let semantic = semantic_names();
    let decls = input
        .registry
        .group(Namespace::Color)
        .filter(|(name, _)| !ramp.contains(name.as_str()) && !semantic.contains(name.as_str()))
        .map(|(name, value)| decl(&format!("--color-{name}"), &value.css()))
        .collect();
    push_block(blocks, "Color primitives", decls);
}

fn push_semantic_groups(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    for group in SEMANTIC_GROUPS {
        let decls = group
            .entries
            .iter()
            .map(|(name, default)| {
                let value = input
                    .tokens
                    .get(Namespace::Color, name)
                    .map(|token| token_expression(token, input.registry))
                    .or_else(|| input.registry.get(Namespace::Color, name).map(|v| v.css()))
                    .unwrap_or_else(|| (*default).to_string());
                decl(&format!("--color-{name}"), &value)
            })
            .collect();
        push_block(blocks, group.title, decls);
    }
}

fn push_color_tokens(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    let ramp = ramp_names();
    let covered = semantic_names();
    let decls = input
        .tokens
        .group(Namespace::Color)
        .filter(|(name, _)| !ramp.contains(name.as_str()) && !covered.contains(name.as_str()))
        .map(|(name, token)| {
            decl(
                &format!("--color-{name}"),
                &token_expression(token, input.registry),
            )
        })
        .collect();
    push_block(blocks, "Color tokens", decls);
}

fn push_global_groups(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    for group in GLOBAL_GROUPS {
        let mut decls: Vec<String> = group
            .entries
            .iter()
            .map(|(name, default)| {
                let value =
                    global_override(input.registry, name).unwrap_or_else(|| (*default).to_string());
                decl(&format!("--{name}"), &value)
            })
            .collect();
        if group.title == "Radii" {
            decls.extend(project_radii(input, group.entries));
        }
        push_block(blocks, group.title, decls);
    }
}

/// A like-named project primitive overriding one global default.
fn global_override(registry: &Registry, name: &str) -> Option<String> {
    match Namespace::split_prefixed(name) {
        Some((ns, short)) => registry.get(ns, short).map(|v| v.css()),
        None => registry.get(Namespace::Other, name).map(|v| v.css()),
    }
}

/// Project radius primitives beyond the default scale, in scale order.
fn project_radii(input: &AssemblyInput<'_>, defaults: &[(&str, &str)]) -> Vec<String> {
    let covered: BTreeSet<&str> = defaults
        .iter()
        .filter_map(|(name, _)| name.strip_prefix("rounded-"))
        .collect();
    let extra: Vec<&str> = input
        .registry
        .group(Namespace::Rounded)
        .map(|(name, _)| name.as_str())
        .filter(|name| !covered.contains(name))
        .collect();
    sorted_scale(extra)
        .into_iter()
        .filter_map(|name| {
            input
                .registry
                .get(Namespace::Rounded, name)
                .map(|value| decl(&format!("--rounded-{name}"), &value.css()))
        })
        .collect()
}

fn push_spacing(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    if !input.saw_spacing && !input.empty_input {
        return;
    }
    let keys: Vec<&str> = input
        .registry
        .group(Namespace::Spacing)
        .map(|(name, _)| name.as_str())
        .collect();
    let decls = sorted_scale(keys)
        .into_iter()
        .filter_map(|name| {
            input
                .registry
                .get(Namespace::Spacing, name)
                .map(|value| decl(&format!("--spacing-{name}"), &value.css()))
        })
        .collect();
    push_block(blocks, "Spacing", decls);
    push_token_scale(input, Namespace::Spacing, "Spacing tokens", blocks);
    push_token_scale(input, Namespace::Rounded, "Radius tokens", blocks);
}

fn push_typography(input: &AssemblyInput<'_>, blocks: &mut Vec<String>) {
    if input.saw_font_size || input.empty_input {
        push_primitive_scale(input, Namespace::FontSize, "Font sizes", blocks);
        push_token_scale(input, Namespace::FontSize, "Font size tokens", blocks);
    }
    if input.saw_line_height || input.empty_input {
        push_primitive_scale(input, Namespace::LineHeight, "Line heights", blocks);
        push_token_scale(input, Namespace::LineHeight, "Line height tokens", blocks);
    }
}

fn push_primitive_scale(
    input: &AssemblyInput<'_>,
    ns: Namespace,
    title: &str,
    blocks: &mut Vec<String>,
) {
    let keys: Vec<&str> = input.registry.group(ns).map(|(name, _)| name.as_str()).collect();
    let decls = sorted_scale(keys)
        .into_iter()
        .filter_map(|name| {
            input
                .registry
                .get(ns, name)
                .map(|value| decl(&format!("--{}{name}", ns.css_prefix()), &value.css()))
        })
        .collect();
    push_block(blocks, title, decls);
}

fn push_token_scale(
    input: &AssemblyInput<'_>,
    ns: Namespace,
    title: &str,
    blocks: &mut Vec<String>,
) {
    let keys: Vec<&str> = input.tokens.group(ns).map(|(name, _)| name.as_str()).collect();
    let decls = sorted_scale(keys)
        .into_iter()
        .filter_map(|name| {
            input.tokens.get(ns, name).map(|token| {
                decl(
                    &format!("--{}{name}", ns.css_prefix()),
                    &token_expression(token, input.registry),
                )
            })
        })
        .collect();
    push_block(blocks, title, decls);
}

/// The emission rule shared by color and typography tokens.
///
/// Light and dark pair into a `light-dark()` expression, mobile and desktop
/// into a fluid clamp unless the endpoints are equal, anything else emits
/// the flat value in mode-priority order.
pub(crate) fn token_expression(token: &Token, registry: &Registry) -> String {
    if let (Some(light), Some(dark)) = (token.get(Some(Mode::Light)), token.get(Some(Mode::Dark))) {
        return format!("light-dark({}, {})", light.css(), dark.css());
    }
    if let (Some(mobile), Some(desktop)) =
        (token.get(Some(Mode::Mobile)), token.get(Some(Mode::Desktop)))
    {
        if mobile == desktop {
            return fluid::endpoint_expr(mobile, registry);
        }
        if let (Some(m), Some(d)) = (
            fluid::endpoint_px(mobile, registry),
            fluid::endpoint_px(desktop, registry),
        ) {
            if (m - d).abs() < 1e-9 {
                return fluid::endpoint_expr(mobile, registry);
            }
        }
        return fluid::clamp_expression(mobile, desktop, registry);
    }
    token.flat().map(ResolvedValue::css).unwrap_or_default()
}

/// Post-assembly structural self-check.
///
/// Verifies the canonical header and the single blank line after it and
/// after the root scope's opening brace. Discrepancies are corrected in
/// place and reported, never fatal.
pub(crate) fn enforce_structure(css: String, report: &mut Report) -> String {
    let mut lines: Vec<String> = css.lines().map(str::to_string).collect();
    let mut corrections: Vec<&str> = Vec::new();

    if lines.first().map(String::as_str) != Some(HEADER) {
        lines.insert(0, HEADER.to_string());
        corrections.push("canonical header restored");
    }
    if ensure_single_blank_after(&mut lines, 0) {
        corrections.push("blank line after header normalized");
    }
    if let Some(root) = lines.iter().position(|line| line.trim() == ":root {") {
        if ensure_single_blank_after(&mut lines, root) {
            corrections.push("blank line after root scope normalized");
        }
    }

    for detail in corrections {
        report.push(Notice::StructuralDrift {
            detail: detail.to_string(),
        });
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Collapses the blank-line run after `index` to exactly one blank line.
fn ensure_single_blank_after(lines: &mut Vec<String>, index: usize) -> bool {
    let mut end = index + 1;
    while end < lines.len() && lines[end].trim().is_empty() {
        end += 1;
    }
    if end - (index + 1) == 1 {
        return false;
    }
    lines.splice(index + 1..end, std::iter::once(String::new()));
    true
}
