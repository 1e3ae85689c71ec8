//! Generic traversal over nested token groups.
//!
//! One walker serves every extractor: it descends through nested JSON
//! objects, skipping `$`-prefixed metadata keys, and hands each leaf (an
//! object carrying `$value`) to the callback together with its lowercased
//! path segments.

use serde_json::{Map, Value};

/// Visits every leaf under `section`, depth first, keys in sorted order.
///
/// The callback receives the path segments (lowercased, one per nesting
/// level) and the leaf object itself. The dash-joined path is the leaf's
/// canonical name.
pub(crate) fn walk_section<F>(section: &Value, mut visit: F)
where
    F: FnMut(&[String], &Map<String, Value>),
{
    let mut path = Vec::new();
    descend(section, &mut path, &mut visit);
}

fn descend<F>(node: &Value, path: &mut Vec<String>, visit: &mut F)
where
    F: FnMut(&[String], &Map<String, Value>),
{
    let Value::Object(map) = node else { return };
    for (key, child) in map {
        if key.starts_with('$') {
            continue;
        }
        let Value::Object(obj) = child else { continue };
        path.push(key.to_lowercase());
        if obj.contains_key("$value") {
            visit(path, obj);
        } else {
            descend(child, path, visit);
        }
        path.pop();
    }
}
