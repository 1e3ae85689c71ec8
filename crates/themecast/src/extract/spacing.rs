//! Spacing and radius extraction.
//!
//! Both sections are flat keyed scales with no mode branching. Every key
//! yields a primitive plus a 1:1 alias in the token map; the alias is
//! dropped later when it shadows its own primitive. Multi-mode spacing
//! tokens do not exist.

use std::collections::BTreeSet;

use crate::document::Entry;
use crate::registry::Namespace;
use crate::walk::walk_section;

use super::{section, FlatMap};

#[derive(Debug, Default)]
pub(crate) struct SpacingHarvest {
    pub primitives: FlatMap,
    /// 1:1 aliases of the extracted primitives, by namespace and name.
    pub aliases: BTreeSet<(Namespace, String)>,
    pub saw_section: bool,
}

pub(crate) fn extract(entries: &[Entry]) -> SpacingHarvest {
    let mut harvest = SpacingHarvest::default();
    for entry in entries {
        for (canon, ns) in [("spacing", Namespace::Spacing), ("rounded", Namespace::Rounded)] {
            let Some(values) = section(entry, canon) else { continue };
            harvest.saw_section = true;
            walk_section(values, |path, leaf| {
                let Some(value) = leaf.get("$value") else { return };
                if value.is_object() || value.is_array() {
                    return;
                }
                let name = path.join("-");
                harvest
                    .primitives
                    .insert(format!("{}{name}", ns.css_prefix()), value.clone());
                harvest.aliases.insert((ns, name));
            });
        }
    }
    harvest
}
