//! Deterministic design-token compiler.
//!
//! themecast ingests exported design-token documents (per-mode JSON files
//! describing colors, spacing, font sizes and line heights) and produces a
//! normalized set of CSS custom-property declarations plus two companion
//! JSON manifests. Each run is a pure function of its input document set:
//!
//! - [`SourceDocument`]: one input file's name and raw text
//! - [`run`] / [`run_with_sink`]: the whole pipeline in one call
//! - [`ThemeBundle`]: the stylesheet, both manifests and the run report
//! - [`Report`] / [`Notice`]: parse results, warnings, validation notices
//!
//! The pipeline runs ingestion → extraction → registry → normalization →
//! assembly, synchronously and without shared state across runs. Nothing
//! in it is fatal: malformed documents are skipped, dangling references
//! are reported, and the assembler self-heals structural drift, so the
//! run always yields best-effort artifacts.
//!
//! # Example
//!
//! ```rust
//! use themecast::{run, SourceDocument};
//!
//! let docs = vec![
//!     SourceDocument::new(
//!         "tokens.light.json",
//!         r##"{"mode": "light", "Color": {"link": {"$type": "color", "$value": "#112233"}}}"##,
//!     ),
//!     SourceDocument::new(
//!         "tokens.dark.json",
//!         r##"{"mode": "dark", "Color": {"link": {"$type": "color", "$value": "#445566"}}}"##,
//!     ),
//! ];
//! let bundle = run(&docs);
//! assert!(bundle.css.contains("--color-link: light-dark(#112233, #445566);"));
//! ```

mod assemble;
mod defaults;
mod document;
mod extract;
mod fluid;
mod normalize;
mod registry;
mod report;
mod sort;
mod token;
mod util;
mod walk;

use std::collections::BTreeSet;

pub use assemble::HEADER;
pub use document::{ingest, Entry, Mode, SourceDocument};
pub use fluid::{clamp_expression, VIEWPORT_MAX_PX, VIEWPORT_MIN_PX};
pub use registry::{Namespace, PrimitiveRef, PrimitiveValue, Registry};
pub use report::{Notice, Report};
pub use sort::{compare_scale_keys, sorted_scale};
pub use token::{ResolvedValue, Token, TokenSet};
pub use util::{format_rem, parse_px, trim_float};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ThemeBundle {
    /// The assembled stylesheet.
    pub css: String,
    /// The namespaced primitive tree.
    pub primitives: serde_json::Value,
    /// The namespaced token tree with per-mode resolved references.
    pub tokens: serde_json::Value,
    /// Parse results, warnings and validation notices.
    pub report: Report,
}

/// Runs the full pipeline over an in-memory document list.
pub fn run(documents: &[SourceDocument]) -> ThemeBundle {
    let mut report = Report::new();
    let entries = document::ingest(documents, &mut report);
    let observed: BTreeSet<Mode> = entries.iter().filter_map(|entry| entry.mode).collect();
    let device_mode_present = observed.iter().any(|mode| mode.is_device());

    let colors = extract::color::extract(&entries);
    let spacing = extract::spacing::extract(&entries);
    let mut typography = extract::typography::extract(&entries);
    extract::typography::promote(&mut typography, device_mode_present);
    let ungrouped = extract::extract_ungrouped(&entries);

    let mut registry = Registry::new();
    for (name, value) in &ungrouped {
        registry.insert_flat(name, value);
    }
    for (name, value) in &colors.primitives {
        registry.insert_flat(name, value);
    }
    for (name, value) in &spacing.primitives {
        registry.insert_flat(name, value);
    }
    if entries.is_empty() {
        registry.inject_defaults();
    }

    let tokens = normalize::normalize(&colors, &spacing, &typography, &mut registry, &mut report);
    normalize::validate_references(&tokens, &registry, &mut report);

    let css = assemble::assemble(&assemble::AssemblyInput {
        registry: &registry,
        tokens: &tokens,
        observed: &observed,
        saw_spacing: spacing.saw_section,
        saw_font_size: typography.saw_font_size,
        saw_line_height: typography.saw_line_height,
        empty_input: entries.is_empty(),
    });
    let css = assemble::enforce_structure(css, &mut report);

    report.entry_count = entries.len();
    report.primitive_count = registry.total();
    report.token_count = tokens.total();

    ThemeBundle {
        css,
        primitives: registry.to_json(),
        tokens: tokens.to_json(),
        report,
    }
}

/// Like [`run`], additionally replaying the report into a caller-supplied
/// sink. The lines are reproducible from the same input; the sink sees
/// exactly what [`Report::lines`] yields.
pub fn run_with_sink<F>(documents: &[SourceDocument], mut sink: F) -> ThemeBundle
where
    F: FnMut(&str),
{
    let bundle = run(documents);
    for line in bundle.report.lines() {
        sink(&line);
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_sink_replays_report_lines() {
        let docs = vec![SourceDocument::new("a.json", "{broken")];
        let mut seen = Vec::new();
        let bundle = run_with_sink(&docs, |line| seen.push(line.to_string()));
        let expected: Vec<String> = bundle.report.lines().collect();
        assert_eq!(seen, expected);
        assert!(seen[0].starts_with("parse-error: a.json"));
    }

    #[test]
    fn test_runs_are_independent() {
        let docs = vec![SourceDocument::new(
            "a.json",
            r#"{"Spacing": {"4": {"$value": 16}}}"#,
        )];
        let first = run(&docs);
        let second = run(&docs);
        assert_eq!(first.css, second.css);
        assert_eq!(first.primitives, second.primitives);
        assert_eq!(first.tokens, second.tokens);
    }
}
