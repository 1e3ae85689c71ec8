//! Run report: parse results, warnings and validation notices.
//!
//! Nothing in the pipeline is fatal. Every condition worth surfacing becomes
//! a [`Notice`] collected on a [`Report`], and the report renders to stable,
//! human-readable lines that can be replayed into any caller-supplied sink
//! without re-running the pipeline.

use crate::document::Mode;

/// A single advisory emitted during a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notice {
    /// A document failed to parse and was excluded from the batch.
    #[error("parse-error: {file}: {detail}")]
    ParseError { file: String, detail: String },
    /// A token contributed in exactly one named mode and was kept as a primitive.
    #[error("missing-mode-variant: token '{token}' only contributes in mode '{mode}'; kept as a primitive")]
    MissingModeVariant { token: String, mode: Mode },
    /// A token resolves to the same value in light and dark mode.
    #[error("identical-variants: token '{token}' resolves identically in light and dark")]
    IdenticalVariants { token: String },
    /// A token endpoint references a primitive the registry does not hold.
    #[error("missing-primitive-reference: token '{token}' references unknown primitive '{reference}'")]
    MissingPrimitiveReference { token: String, reference: String },
    /// The assembled stylesheet violated a structural invariant and was corrected.
    #[error("structural-drift: {detail}")]
    StructuralDrift { detail: String },
    /// A document was parsed and classified.
    #[error("parsed: {file} (mode: {mode})")]
    Parsed { file: String, mode: String },
}

impl Notice {
    /// True for advisory notices, false for plain progress lines.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Notice::Parsed { .. })
    }
}

/// Accumulated notices plus run totals, in emission order.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Report {
    notices: Vec<Notice>,
    pub(crate) entry_count: usize,
    pub(crate) primitive_count: usize,
    pub(crate) token_count: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, notice: Notice) {
        if notice.is_warning() {
            tracing::warn!(notice = %notice, "pipeline notice");
        } else {
            tracing::debug!(notice = %notice, "pipeline progress");
        }
        self.notices.push(notice);
    }

    /// All notices in emission order.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// The report as human-readable lines.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.notices.iter().map(Notice::to_string)
    }

    /// Number of advisory notices (everything except progress lines).
    pub fn warning_count(&self) -> usize {
        self.notices.iter().filter(|n| n.is_warning()).count()
    }

    /// One-line run summary.
    pub fn summary(&self) -> String {
        format!(
            "{} entries, {} primitives, {} tokens, {} warnings",
            self.entry_count,
            self.primitive_count,
            self.token_count,
            self.warning_count()
        )
    }
}
