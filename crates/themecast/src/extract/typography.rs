//! Typography extraction: font sizes and line heights.
//!
//! Both sections collect per-mode contribution maps like the color
//! extractor does. Device-mode fallback promotion then copies a mode-less
//! value into whichever device modes are missing, but only for tokens that
//! already contribute to at least one device mode.

use std::collections::BTreeMap;

use crate::document::{Entry, Mode};
use crate::util::scalar_to_string;
use crate::walk::walk_section;

use super::section;

/// Token name to per-mode raw values, for one namespace.
pub(crate) type RawCandidates = BTreeMap<String, BTreeMap<Option<Mode>, String>>;

#[derive(Debug, Default)]
pub(crate) struct TypographyHarvest {
    pub font_size: RawCandidates,
    pub line_height: RawCandidates,
    pub saw_font_size: bool,
    pub saw_line_height: bool,
}

pub(crate) fn extract(entries: &[Entry]) -> TypographyHarvest {
    let mut harvest = TypographyHarvest::default();
    for entry in entries {
        if let Some(values) = section(entry, "fontsize") {
            harvest.saw_font_size = true;
            collect(&mut harvest.font_size, entry.mode, values);
        }
        if let Some(values) = section(entry, "lineheight") {
            harvest.saw_line_height = true;
            collect(&mut harvest.line_height, entry.mode, values);
        }
    }
    harvest
}

fn collect(candidates: &mut RawCandidates, mode: Option<Mode>, values: &serde_json::Value) {
    walk_section(values, |path, leaf| {
        let Some(value) = leaf.get("$value") else { return };
        let Some(raw) = scalar_to_string(value) else { return };
        candidates.entry(path.join("-")).or_default().insert(mode, raw);
    });
}

/// Device-mode fallback promotion.
///
/// When the input set contains a device-mode entry, a token with both a
/// mode-less contribution and at least one device contribution gets the
/// mode-less value copied into the missing device mode(s). A token with no
/// device contribution anywhere is never promoted.
pub(crate) fn promote(harvest: &mut TypographyHarvest, device_mode_present: bool) {
    if !device_mode_present {
        return;
    }
    for candidates in [&mut harvest.font_size, &mut harvest.line_height] {
        for modes in candidates.values_mut() {
            let Some(base) = modes.get(&None).cloned() else { continue };
            let has_device = modes.contains_key(&Some(Mode::Mobile))
                || modes.contains_key(&Some(Mode::Desktop));
            if !has_device {
                continue;
            }
            modes.entry(Some(Mode::Mobile)).or_insert_with(|| base.clone());
            modes.entry(Some(Mode::Desktop)).or_insert(base);
        }
    }
}
