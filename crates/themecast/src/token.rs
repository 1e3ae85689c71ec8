//! Token types: named values whose resolution depends on a declared mode.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::document::Mode;
use crate::registry::{Namespace, PrimitiveRef};

/// A token endpoint: a primitive reference or a raw literal.
///
/// Every endpoint, once resolved, must reference an existing primitive or
/// be a literal; dangling references are reported as validation warnings,
/// never treated as fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Reference(PrimitiveRef),
    Literal(String),
}

impl ResolvedValue {
    /// The endpoint as CSS declaration text.
    pub fn css(&self) -> String {
        match self {
            ResolvedValue::Reference(r) => r.css_var(),
            ResolvedValue::Literal(s) => s.clone(),
        }
    }
}

/// A named semantic value with per-mode endpoints.
///
/// The mode key `None` is the mode-less contribution. A token holds two or
/// more contributing modes; a single-mode candidate degenerates into a
/// primitive before ever becoming a `Token`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    pub values: BTreeMap<Option<Mode>, ResolvedValue>,
}

impl Token {
    pub fn get(&self, mode: Option<Mode>) -> Option<&ResolvedValue> {
        self.values.get(&mode)
    }

    /// The flat emission value: first endpoint in mode-priority order
    /// (mode-less, light, dark, mobile, desktop).
    pub fn flat(&self) -> Option<&ResolvedValue> {
        self.values.values().next()
    }
}

/// The namespaced token tree.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    groups: BTreeMap<Namespace, BTreeMap<String, Token>>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ns: Namespace, name: impl Into<String>, token: Token) {
        self.groups.entry(ns).or_default().insert(name.into(), token);
    }

    pub fn get(&self, ns: Namespace, name: &str) -> Option<&Token> {
        self.groups.get(&ns)?.get(name)
    }

    pub fn contains(&self, ns: Namespace, name: &str) -> bool {
        self.get(ns, name).is_some()
    }

    /// Name-sorted view of one namespace.
    pub fn group(&self, ns: Namespace) -> impl Iterator<Item = (&String, &Token)> {
        self.groups.get(&ns).into_iter().flatten()
    }

    /// Every token with its namespace, in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (Namespace, &String, &Token)> {
        self.groups
            .iter()
            .flat_map(|(ns, group)| group.iter().map(move |(name, token)| (*ns, name, token)))
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// The namespaced token tree as a JSON manifest.
    ///
    /// Each entry maps its contributing modes (`default` for the mode-less
    /// contribution) to the resolved CSS expression.
    pub fn to_json(&self) -> Value {
        let mut root = serde_json::Map::new();
        for ns in Namespace::ALL {
            let entries: serde_json::Map<String, Value> = self
                .group(ns)
                .map(|(name, token)| {
                    let modes: serde_json::Map<String, Value> = token
                        .values
                        .iter()
                        .map(|(mode, value)| {
                            let key = mode.map_or("default", Mode::as_str).to_string();
                            (key, Value::String(value.css()))
                        })
                        .collect();
                    (name.clone(), Value::Object(modes))
                })
                .collect();
            if !entries.is_empty() {
                root.insert(ns.manifest_key().to_string(), Value::Object(entries));
            }
        }
        Value::Object(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(ns: Namespace, name: &str) -> ResolvedValue {
        ResolvedValue::Reference(PrimitiveRef::new(ns, name))
    }

    #[test]
    fn test_resolved_value_css() {
        assert_eq!(
            reference(Namespace::Color, "gray-100").css(),
            "var(--color-gray-100)"
        );
        assert_eq!(
            ResolvedValue::Literal("#112233".to_string()).css(),
            "#112233"
        );
    }

    #[test]
    fn test_flat_prefers_mode_less_then_light() {
        let mut token = Token::default();
        token.values.insert(Some(Mode::Dark), ResolvedValue::Literal("dark".into()));
        token.values.insert(Some(Mode::Light), ResolvedValue::Literal("light".into()));
        assert_eq!(token.flat().unwrap().css(), "light");

        token.values.insert(None, ResolvedValue::Literal("plain".into()));
        assert_eq!(token.flat().unwrap().css(), "plain");
    }

    #[test]
    fn test_manifest_uses_mode_labels() {
        let mut token = Token::default();
        token.values.insert(Some(Mode::Light), ResolvedValue::Literal("#112233".into()));
        token.values.insert(Some(Mode::Dark), ResolvedValue::Literal("#445566".into()));
        let mut set = TokenSet::new();
        set.insert(Namespace::Color, "link", token);

        let json = set.to_json();
        assert_eq!(json["color"]["link"]["light"], "#112233");
        assert_eq!(json["color"]["link"]["dark"], "#445566");
    }

    #[test]
    fn test_manifest_omits_empty_namespaces() {
        let set = TokenSet::new();
        assert_eq!(set.to_json(), serde_json::json!({}));
    }
}
