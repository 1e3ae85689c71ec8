//! Color primitive and token-candidate extraction.
//!
//! Nested color leaves become primitives under their dash-joined path.
//! Two things become token candidates instead: leaves explicitly flagged
//! as token overrides (contributing under the entry's mode), and direct
//! definitions sitting immediately under the section root.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::document::{Entry, Mode};
use crate::registry::{Namespace, PrimitiveRef, Registry};
use crate::report::{Notice, Report};
use crate::token::ResolvedValue;
use crate::util::scalar_to_string;
use crate::walk::walk_section;

use super::{section, FlatMap};

/// One per-mode token contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Contribution {
    pub raw: String,
    /// Explicit pointer to the primitive this contribution must resolve to.
    pub alias: Option<String>,
    /// Opaque upstream identifier, carried for diagnostics only.
    pub external_id: Option<String>,
}

/// Token name to per-mode contributions.
pub(crate) type CandidateMap = BTreeMap<String, BTreeMap<Option<Mode>, Contribution>>;

#[derive(Debug, Default)]
pub(crate) struct ColorHarvest {
    pub primitives: FlatMap,
    pub candidates: CandidateMap,
}

/// Scans every entry's color section.
pub(crate) fn extract(entries: &[Entry]) -> ColorHarvest {
    let mut harvest = ColorHarvest::default();
    for entry in entries {
        let Some(colors) = section(entry, "color") else { continue };
        walk_section(colors, |path, leaf| {
            capture_leaf(&mut harvest, entry.mode, path, leaf);
        });
    }
    harvest
}

fn capture_leaf(
    harvest: &mut ColorHarvest,
    mode: Option<Mode>,
    path: &[String],
    leaf: &Map<String, Value>,
) {
    let Some(value) = leaf.get("$value") else { return };
    let Some(raw) = scalar_to_string(value) else { return };
    let name = path.join("-");

    let extensions = leaf.get("$extensions").and_then(Value::as_object);
    let flagged = extensions
        .and_then(|ext| ext.get("token"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let is_color = leaf.get("$type").and_then(Value::as_str) == Some("color");

    if flagged || (is_color && path.len() == 1) {
        let contribution = Contribution {
            raw,
            alias: extension_str(extensions, "alias"),
            external_id: extension_str(extensions, "id"),
        };
        if let Some(id) = &contribution.external_id {
            tracing::debug!(token = %name, id = %id, "token contribution carries external id");
        }
        harvest.candidates.entry(name).or_default().insert(mode, contribution);
    } else if is_color {
        harvest.primitives.insert(format!("color-{name}"), value.clone());
    }
}

fn extension_str(extensions: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    extensions?
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Resolves one per-mode contribution against the registry.
///
/// Resolution order: explicit alias pointer, case-insensitive match of the
/// raw value against known color primitive values, else the raw literal. A
/// dangling alias pointer falls through and is reported, never fatal.
pub(crate) fn resolve_contribution(
    token: &str,
    contribution: &Contribution,
    registry: &Registry,
    report: &mut Report,
) -> ResolvedValue {
    if let Some(alias) = &contribution.alias {
        if let Some(target) = registry.lookup(alias) {
            return ResolvedValue::Reference(target);
        }
        report.push(Notice::MissingPrimitiveReference {
            token: token.to_string(),
            reference: alias.clone(),
        });
    }
    if let Some(name) = registry.find_by_value(Namespace::Color, &contribution.raw) {
        return ResolvedValue::Reference(PrimitiveRef::new(Namespace::Color, name));
    }
    ResolvedValue::Literal(contribution.raw.clone())
}
