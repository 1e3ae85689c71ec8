//! Namespaced primitive registry.
//!
//! The registry merges the extractors' flat primitive maps into one
//! namespaced tree and backs every reference lookup in the pipeline:
//!
//! - [`Namespace`]: the six primitive groups and their CSS prefixes
//! - [`PrimitiveValue`]: a color, an absolute pixel quantity, or opaque text
//! - [`PrimitiveRef`]: a `(namespace, name)` pointer rendered as `var(--…)`
//! - [`Registry`]: classification, lookup, baseline defaults and idempotent
//!   primitive synthesis

use std::collections::BTreeMap;

use serde_json::Value;

use crate::defaults::{COLOR_RAMP, FALLBACK_FONT_SIZES, FALLBACK_SPACING};
use crate::util::{format_rem, is_hex_color, parse_px, scalar_to_string, trim_float};

/// Primitive namespace. Classification is first by key-prefix convention,
/// then by value shape for unmatched keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    Color,
    Spacing,
    FontSize,
    LineHeight,
    Rounded,
    Other,
}

/// Prefix table, longest first so `font-size-` wins over shorter matches.
const PREFIXES: &[(&str, Namespace)] = &[
    ("line-height-", Namespace::LineHeight),
    ("font-size-", Namespace::FontSize),
    ("spacing-", Namespace::Spacing),
    ("rounded-", Namespace::Rounded),
    ("color-", Namespace::Color),
];

impl Namespace {
    pub const ALL: [Namespace; 6] = [
        Namespace::Color,
        Namespace::Spacing,
        Namespace::FontSize,
        Namespace::LineHeight,
        Namespace::Rounded,
        Namespace::Other,
    ];

    /// CSS custom-property prefix for names in this namespace.
    pub fn css_prefix(self) -> &'static str {
        match self {
            Namespace::Color => "color-",
            Namespace::Spacing => "spacing-",
            Namespace::FontSize => "font-size-",
            Namespace::LineHeight => "line-height-",
            Namespace::Rounded => "rounded-",
            Namespace::Other => "",
        }
    }

    /// Key used for this namespace in the JSON manifests.
    pub fn manifest_key(self) -> &'static str {
        match self {
            Namespace::Color => "color",
            Namespace::Spacing => "spacing",
            Namespace::FontSize => "fontSize",
            Namespace::LineHeight => "lineHeight",
            Namespace::Rounded => "rounded",
            Namespace::Other => "other",
        }
    }

    /// Splits a prefixed flat name into its namespace and short name.
    pub fn split_prefixed(name: &str) -> Option<(Namespace, &str)> {
        for (prefix, ns) in PREFIXES {
            if let Some(rest) = name.strip_prefix(prefix) {
                if !rest.is_empty() {
                    return Some((*ns, rest));
                }
            }
        }
        None
    }
}

/// A primitive's stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// A color expression, kept verbatim.
    Color(String),
    /// An absolute pixel quantity; renders as a root-relative `rem` literal.
    Px(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl PrimitiveValue {
    /// The value as CSS declaration text.
    pub fn css(&self) -> String {
        match self {
            PrimitiveValue::Color(s) | PrimitiveValue::Text(s) => s.clone(),
            PrimitiveValue::Px(px) => format_rem(*px),
        }
    }

    /// The pixel quantity, when this value is one.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Px(px) => Some(*px),
            _ => None,
        }
    }

    /// Whether a raw scalar matches this stored value.
    ///
    /// Pixel values compare numerically, everything else compares
    /// case-insensitively on the text.
    fn matches_raw(&self, raw: &str) -> bool {
        match self {
            PrimitiveValue::Px(px) => parse_px(raw).is_some_and(|p| (p - px).abs() < 1e-9),
            PrimitiveValue::Color(s) | PrimitiveValue::Text(s) => s.eq_ignore_ascii_case(raw),
        }
    }
}

/// A `(namespace, name)` pointer to a primitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PrimitiveRef {
    pub namespace: Namespace,
    pub name: String,
}

impl PrimitiveRef {
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }

    /// The custom-property name, e.g. `--color-gray-100`.
    pub fn property(&self) -> String {
        format!("--{}{}", self.namespace.css_prefix(), self.name)
    }

    /// The reference as CSS, e.g. `var(--color-gray-100)`.
    pub fn css_var(&self) -> String {
        format!("var({})", self.property())
    }
}

/// Key under which a value is remembered by the synthesis index.
fn value_key(value: &PrimitiveValue) -> String {
    match value {
        PrimitiveValue::Px(px) => trim_float(*px, 4),
        PrimitiveValue::Color(s) | PrimitiveValue::Text(s) => s.to_lowercase(),
    }
}

/// Name for a value-derived synthesized primitive, e.g. `17-5` for 17.5px.
pub(crate) fn value_slug(value: &PrimitiveValue) -> String {
    value_key(value).replace('.', "-")
}

/// The namespaced primitive tree plus the synthesis index.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    groups: BTreeMap<Namespace, BTreeMap<String, PrimitiveValue>>,
    synthesized: BTreeMap<(Namespace, String), String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a primitive; an existing name in the namespace is overwritten.
    pub fn insert(&mut self, ns: Namespace, name: impl Into<String>, value: PrimitiveValue) {
        self.groups.entry(ns).or_default().insert(name.into(), value);
    }

    /// Classifies and inserts one flat-map entry.
    ///
    /// Prefix-convention keys land in their namespace; unmatched keys are
    /// classified by value shape into the ungrouped namespace.
    pub fn insert_flat(&mut self, name: &str, scalar: &Value) {
        let Some(raw) = scalar_to_string(scalar) else { return };
        match Namespace::split_prefixed(name) {
            Some((Namespace::Color, short)) => {
                let short = short.to_string();
                self.insert(Namespace::Color, short, PrimitiveValue::Color(raw));
            }
            Some((ns, short)) => {
                let short = short.to_string();
                self.insert(ns, short, length_value(&raw));
            }
            None => {
                self.insert(Namespace::Other, name, shape_value(&raw));
            }
        }
    }

    pub fn get(&self, ns: Namespace, name: &str) -> Option<&PrimitiveValue> {
        self.groups.get(&ns)?.get(name)
    }

    pub fn contains(&self, ns: Namespace, name: &str) -> bool {
        self.get(ns, name).is_some()
    }

    /// Name-sorted view of one namespace.
    pub fn group(&self, ns: Namespace) -> impl Iterator<Item = (&String, &PrimitiveValue)> {
        self.groups.get(&ns).into_iter().flatten()
    }

    /// Total number of primitives across all namespaces.
    pub fn total(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Resolves a reference string to a primitive.
    ///
    /// Accepts a prefixed flat name (`color-gray-100`, `spacing-4`) or a
    /// bare color name (`gray-100`).
    pub fn lookup(&self, reference: &str) -> Option<PrimitiveRef> {
        if let Some((ns, short)) = Namespace::split_prefixed(reference) {
            if self.contains(ns, short) {
                return Some(PrimitiveRef::new(ns, short));
            }
        }
        if self.contains(Namespace::Color, reference) {
            return Some(PrimitiveRef::new(Namespace::Color, reference));
        }
        None
    }

    /// First primitive in `ns` whose stored value matches `raw`, by name.
    pub fn find_by_value(&self, ns: Namespace, raw: &str) -> Option<String> {
        self.group(ns)
            .find(|(_, value)| value.matches_raw(raw))
            .map(|(name, _)| name.clone())
    }

    /// First primitive in any namespace whose stored value matches `raw`.
    pub fn find_value_anywhere(&self, raw: &str) -> Option<PrimitiveRef> {
        for ns in Namespace::ALL {
            if let Some(name) = self.find_by_value(ns, raw) {
                return Some(PrimitiveRef::new(ns, name));
            }
        }
        None
    }

    /// Pixel quantity a reference resolves to, when it does.
    pub fn resolve_px(&self, reference: &PrimitiveRef) -> Option<f64> {
        self.get(reference.namespace, &reference.name)?.as_px()
    }

    /// Registers a synthesized primitive, idempotently per `(namespace, value)`.
    ///
    /// Repeating a request with an equal value returns a reference to the
    /// previously synthesized primitive, never a duplicate.
    pub fn synthesize(
        &mut self,
        ns: Namespace,
        name: &str,
        value: PrimitiveValue,
    ) -> PrimitiveRef {
        let key = (ns, value_key(&value));
        if let Some(existing) = self.synthesized.get(&key) {
            return PrimitiveRef::new(ns, existing.clone());
        }
        self.insert(ns, name, value);
        self.synthesized.insert(key, name.to_string());
        PrimitiveRef::new(ns, name)
    }

    /// Injects the baseline defaults used when the input set is empty.
    pub fn inject_defaults(&mut self) {
        for (name, hex) in COLOR_RAMP {
            self.insert(Namespace::Color, *name, PrimitiveValue::Color((*hex).to_string()));
        }
        for (name, px) in FALLBACK_SPACING {
            self.insert(Namespace::Spacing, *name, PrimitiveValue::Px(*px));
        }
        for (name, px) in FALLBACK_FONT_SIZES {
            self.insert(Namespace::FontSize, *name, PrimitiveValue::Px(*px));
        }
    }

    /// The namespaced primitive tree as a JSON manifest.
    ///
    /// The five named namespaces always appear; ungrouped entries only when
    /// present.
    pub fn to_json(&self) -> Value {
        let mut root = serde_json::Map::new();
        for ns in Namespace::ALL {
            let entries: serde_json::Map<String, Value> = self
                .group(ns)
                .map(|(name, value)| (name.clone(), Value::String(value.css())))
                .collect();
            if ns != Namespace::Other || !entries.is_empty() {
                root.insert(ns.manifest_key().to_string(), Value::Object(entries));
            }
        }
        Value::Object(root)
    }
}

/// Value for a length-flavored namespace entry.
fn length_value(raw: &str) -> PrimitiveValue {
    match parse_px(raw) {
        Some(px) => PrimitiveValue::Px(px),
        None => PrimitiveValue::Text(raw.to_string()),
    }
}

/// Shape classification for keys with no namespace prefix.
fn shape_value(raw: &str) -> PrimitiveValue {
    if is_hex_color(raw) {
        PrimitiveValue::Color(raw.to_string())
    } else if let Some(px) = parse_px(raw) {
        PrimitiveValue::Px(px)
    } else {
        PrimitiveValue::Text(raw.to_string())
    }
}
