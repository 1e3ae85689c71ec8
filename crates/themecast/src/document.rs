//! Entry ingestion and mode classification.
//!
//! Raw document text becomes an [`Entry`] holding the parsed JSON and the
//! declared [`Mode`], if any. A document that fails to parse is excluded and
//! recorded on the report; it never aborts the batch.

use serde_json::Value;

use crate::report::{Notice, Report};

/// The axis along which a document's declared values vary.
///
/// Any other declared label is treated as "no mode": the document then
/// contributes only primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
    Mobile,
    Desktop,
}

impl Mode {
    /// Parses a lowercased mode label; anything unrecognized is no mode.
    pub fn parse(label: &str) -> Option<Mode> {
        match label {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            "mobile" => Some(Mode::Mobile),
            "desktop" => Some(Mode::Desktop),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::Mobile => "mobile",
            Mode::Desktop => "desktop",
        }
    }

    /// True for the viewport-driven modes.
    pub fn is_device(self) -> bool {
        matches!(self, Mode::Mobile | Mode::Desktop)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw input to the pipeline: one file's name and text.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file_name: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }
}

/// One successfully parsed input document.
///
/// Entries are created per input file, never mutated afterwards, and
/// discarded when the run completes. Arrival order is preserved for logging
/// only; every later stage sorts deterministically by name.
#[derive(Debug, Clone)]
pub struct Entry {
    pub file_name: String,
    pub document: Value,
    pub mode: Option<Mode>,
}

/// Parses raw documents into entries, recording parse failures.
pub fn ingest(documents: &[SourceDocument], report: &mut Report) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(documents.len());
    for doc in documents {
        match serde_json::from_str::<Value>(&doc.text) {
            Ok(document) => {
                let mode = classify_mode(&document);
                report.push(Notice::Parsed {
                    file: doc.file_name.clone(),
                    mode: mode.map_or("none", Mode::as_str).to_string(),
                });
                entries.push(Entry {
                    file_name: doc.file_name.clone(),
                    document,
                    mode,
                });
            }
            Err(err) => {
                report.push(Notice::ParseError {
                    file: doc.file_name.clone(),
                    detail: err.to_string(),
                });
            }
        }
    }
    entries
}

/// Reads the declared mode from `$extensions.mode`, else a bare `mode` field.
fn classify_mode(document: &Value) -> Option<Mode> {
    let label = document
        .get("$extensions")
        .and_then(|ext| ext.get("mode"))
        .or_else(|| document.get("mode"))
        .and_then(Value::as_str)?;
    Mode::parse(&label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingest_one(text: &str) -> (Vec<Entry>, Report) {
        let mut report = Report::new();
        let docs = vec![SourceDocument::new("test.json", text)];
        let entries = ingest(&docs, &mut report);
        (entries, report)
    }

    #[test]
    fn test_mode_from_extensions() {
        let (entries, _) = ingest_one(r#"{"$extensions": {"mode": "Dark"}}"#);
        assert_eq!(entries[0].mode, Some(Mode::Dark));
    }

    #[test]
    fn test_mode_from_bare_field() {
        let (entries, _) = ingest_one(r#"{"mode": "mobile"}"#);
        assert_eq!(entries[0].mode, Some(Mode::Mobile));
    }

    #[test]
    fn test_extensions_mode_wins_over_bare_field() {
        let (entries, _) = ingest_one(r#"{"$extensions": {"mode": "light"}, "mode": "dark"}"#);
        assert_eq!(entries[0].mode, Some(Mode::Light));
    }

    #[test]
    fn test_unrecognized_label_is_no_mode() {
        let (entries, _) = ingest_one(r#"{"mode": "print"}"#);
        assert_eq!(entries[0].mode, None);
    }

    #[test]
    fn test_parse_failure_excludes_entry_and_continues() {
        let mut report = Report::new();
        let docs = vec![
            SourceDocument::new("broken.json", "{not json"),
            SourceDocument::new("ok.json", r#"{"mode": "light"}"#),
        ];
        let entries = ingest(&docs, &mut report);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "ok.json");
        assert_eq!(report.warning_count(), 1);
        assert!(report.lines().next().unwrap().starts_with("parse-error: broken.json"));
    }

    #[test]
    fn test_parsed_line_records_mode() {
        let (_, report) = ingest_one(r#"{"mode": "desktop"}"#);
        let lines: Vec<String> = report.lines().collect();
        assert_eq!(lines, vec!["parsed: test.json (mode: desktop)"]);
    }
}
