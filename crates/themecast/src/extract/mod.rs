//! Domain extractors over ingested entries.
//!
//! Each extractor scans every entry for its domain's primitives and
//! mode-keyed token candidates. Extractors only collect; resolution and
//! classification happen in the normalizer, against the merged registry.

pub(crate) mod color;
pub(crate) mod spacing;
pub(crate) mod typography;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::document::Entry;
use crate::walk::walk_section;

/// Flat primitive map: prefixed name to raw scalar.
pub(crate) type FlatMap = BTreeMap<String, Value>;

/// Canonical form of a section key: lowercased, `-`/`_` removed.
pub(crate) fn canon_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

/// Finds a recognized top-level section by canonical key.
pub(crate) fn section<'a>(entry: &'a Entry, canon: &str) -> Option<&'a Value> {
    entry
        .document
        .as_object()?
        .iter()
        .find(|(key, _)| canon_key(key) == canon)
        .map(|(_, value)| value)
}

/// Canonical keys of the recognized sections.
const RECOGNIZED: &[&str] = &["color", "spacing", "rounded", "fontsize", "lineheight"];

/// Collects leaves from unrecognized top-level sections.
///
/// These keys carry no namespace prefix, so the registry classifies them by
/// value shape into the ungrouped namespace.
pub(crate) fn extract_ungrouped(entries: &[Entry]) -> FlatMap {
    let mut primitives = FlatMap::new();
    for entry in entries {
        let Some(map) = entry.document.as_object() else { continue };
        for (key, value) in map {
            if key.starts_with('$') || key == "mode" {
                continue;
            }
            if RECOGNIZED.contains(&canon_key(key).as_str()) {
                continue;
            }
            let prefix = key.to_lowercase().replace([' ', '_'], "-");
            walk_section(value, |path, leaf| {
                if let Some(raw) = leaf.get("$value") {
                    if raw.is_object() || raw.is_array() {
                        return;
                    }
                    primitives.insert(format!("{prefix}-{}", path.join("-")), raw.clone());
                }
            });
        }
    }
    primitives
}

/// Test helper: entries from raw document texts, parse notices discarded.
#[cfg(test)]
pub(crate) fn entries_from(texts: &[&str]) -> Vec<Entry> {
    use crate::document::{ingest, SourceDocument};
    use crate::report::Report;

    let docs: Vec<SourceDocument> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| SourceDocument::new(format!("doc-{i}.json"), *text))
        .collect();
    ingest(&docs, &mut Report::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_key() {
        assert_eq!(canon_key("FontSize"), "fontsize");
        assert_eq!(canon_key("font-size"), "fontsize");
        assert_eq!(canon_key("LINE_HEIGHT"), "lineheight");
    }

    #[test]
    fn test_section_is_case_insensitive() {
        let entries = entries_from(&[r##"{"COLOR": {"white": {"$value": "#fff"}}}"##]);
        assert!(section(&entries[0], "color").is_some());
        assert!(section(&entries[0], "spacing").is_none());
    }

    #[test]
    fn test_ungrouped_collects_unrecognized_sections() {
        let entries = entries_from(&[
            r##"{"FontWeight": {"bold": {"$type": "number", "$value": 700}},
                "Color": {"white": {"$type": "color", "$value": "#fff"}}}"##,
        ]);
        let flat = extract_ungrouped(&entries);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["fontweight-bold"], serde_json::json!(700));
    }
}
