//! Theme batch ingestion: decode, stage, publish.

use std::collections::BTreeMap;

use serde_json::Value;
use theme_content::decode_theme_record;
use theme_core::registry::{ThemeRegistry, ThemeSet};

use super::ReloadSummary;

/// Decodes a raw record batch and publishes it as the next generation.
///
/// Malformed records are skipped with a warning and never abort the batch;
/// whatever decoded cleanly is published, even if that is an empty set
/// (which clears all prior lookups by design).
pub(crate) fn load_themes(
    registry: &ThemeRegistry,
    records: &BTreeMap<String, Value>,
) -> ReloadSummary {
    let mut set = ThemeSet::new();
    let mut skipped = 0usize;

    for (name, value) in records {
        match decode_theme_record(name, value) {
            Ok((key, theme)) => set.register(key, theme),
            Err(e) => {
                tracing::warn!("Skipping malformed theme record '{}': {:#}", name, e);
                skipped += 1;
            }
        }
    }

    let loaded = set.len();
    let serial = registry.publish(set);
    tracing::info!(
        "Published theme generation {} ({} loaded, {} skipped)",
        serial,
        loaded,
        skipped
    );

    ReloadSummary {
        loaded,
        skipped,
        serial,
    }
}
