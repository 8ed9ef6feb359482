//! The authoritative assignment apply.
//!
//! Decodes raw assignment records, merges them in record-name order (later
//! records override earlier ones), validates each entry against the host
//! enchantment namespace and the live registry generation, and writes the
//! resolved theme keys into the attachment side-table. Idempotent: applying
//! the same map twice yields the same end state. Never aborts the caller;
//! every per-entry failure is logged and counted.

use std::collections::BTreeMap;

use serde_json::Value;
use theme_content::decode_assignment_record;
use theme_core::{EnchantmentId, EnchantmentOracle, ThemeAttachments, ThemeKey, ThemeRegistry};

use super::ApplySummary;

pub(crate) struct AssignmentApply<'a> {
    pub registry: &'a ThemeRegistry,
    pub attachments: &'a ThemeAttachments,
    pub enchantments: &'a dyn EnchantmentOracle,
    pub fallback: Option<&'a ThemeKey>,
}

impl AssignmentApply<'_> {
    /// Applies a raw record batch.
    pub fn apply_records(&self, records: &BTreeMap<String, Value>) -> ApplySummary {
        let mut summary = ApplySummary::default();
        let mut merged: BTreeMap<EnchantmentId, ThemeKey> = BTreeMap::new();

        for (name, value) in records {
            match decode_assignment_record(name, value) {
                Ok(entries) => merged.extend(entries),
                Err(e) => {
                    tracing::warn!("Skipping malformed assignment record '{}': {:#}", name, e);
                    summary.skipped_records += 1;
                }
            }
        }

        self.apply_entries(merged, &mut summary);
        summary
    }

    /// Applies already-decoded entries (the typed catalog path).
    pub fn apply_catalog(&self, entries: Vec<(EnchantmentId, ThemeKey)>) -> ApplySummary {
        let mut summary = ApplySummary::default();
        self.apply_entries(entries.into_iter().collect(), &mut summary);
        summary
    }

    fn apply_entries(
        &self,
        entries: BTreeMap<EnchantmentId, ThemeKey>,
        summary: &mut ApplySummary,
    ) {
        // One registry snapshot for the whole apply keeps validation on a
        // single reload generation.
        let generation = self.registry.snapshot();

        for (enchantment, theme_key) in entries {
            if !self.enchantments.contains(&enchantment) {
                // The enchantment may belong to content that is not
                // installed; that is a skip, not an error.
                tracing::warn!(
                    "Dropping assignment for unknown enchantment '{}'",
                    enchantment
                );
                summary.unknown_enchantments += 1;
                continue;
            }

            if generation.get(&theme_key).is_some() {
                self.attachments.assign(enchantment, theme_key);
                summary.applied += 1;
                continue;
            }

            if let Some(fallback) = self.fallback
                && generation.get(fallback).is_some()
            {
                tracing::warn!(
                    "Theme '{}' not found for '{}', using fallback '{}'",
                    theme_key,
                    enchantment,
                    fallback
                );
                self.attachments.assign(enchantment, fallback.clone());
                summary.applied += 1;
                summary.fallbacks += 1;
                continue;
            }

            // Keep the previous attachment: a stale-but-valid theme beats
            // flickering between a working old reload and a broken new one.
            tracing::warn!(
                "Theme '{}' not found for '{}', keeping previous assignment",
                theme_key,
                enchantment
            );
            summary.unresolved_themes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use theme_core::registry::ThemeSet;
    use theme_core::{EnchantmentTheme, ThemeAttachments};

    use crate::oracle::{EnchantmentOracleImpl, OpenEnchantmentIndex};

    fn registry_with(keys: &[&str]) -> ThemeRegistry {
        let registry = ThemeRegistry::new();
        let mut set = ThemeSet::new();
        for key in keys {
            set.register(ThemeKey::from(*key), EnchantmentTheme::new(*key));
        }
        registry.publish(set);
        registry
    }

    #[test]
    fn test_apply_writes_resolved_entries() {
        let registry = registry_with(&["holy", "infernal"]);
        let attachments = ThemeAttachments::new();
        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &OpenEnchantmentIndex,
            fallback: None,
        };

        let records = BTreeMap::from([(
            "default".to_owned(),
            json!({ "example:smite": "holy", "example:blast": "infernal" }),
        )]);
        let summary = apply.apply_records(&records);

        assert_eq!(summary.applied, 2);
        assert_eq!(
            attachments.theme_key(&EnchantmentId::from("example:smite")),
            Some(ThemeKey::from("holy"))
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let registry = registry_with(&["holy"]);
        let attachments = ThemeAttachments::new();
        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &OpenEnchantmentIndex,
            fallback: None,
        };

        let records =
            BTreeMap::from([("default".to_owned(), json!({ "example:smite": "holy" }))]);

        let first = apply.apply_records(&records);
        let state_after_first = attachments.snapshot();
        let second = apply.apply_records(&records);

        assert_eq!(first, second);
        assert_eq!(attachments.snapshot(), state_after_first);
    }

    #[test]
    fn test_unresolved_theme_keeps_previous_attachment() {
        let registry = registry_with(&["holy"]);
        let attachments = ThemeAttachments::new();
        let smite = EnchantmentId::from("example:smite");
        attachments.assign(smite.clone(), ThemeKey::from("holy"));

        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &OpenEnchantmentIndex,
            fallback: None,
        };
        let summary = apply.apply_records(&BTreeMap::from([(
            "default".to_owned(),
            json!({ "example:smite": "missing_theme" }),
        )]));

        assert_eq!(summary.unresolved_themes, 1);
        assert_eq!(summary.applied, 0);
        assert_eq!(attachments.theme_key(&smite), Some(ThemeKey::from("holy")));
    }

    #[test]
    fn test_fallback_theme_absorbs_unresolved_keys() {
        let registry = registry_with(&["plain"]);
        let attachments = ThemeAttachments::new();
        let fallback = ThemeKey::from("plain");
        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &OpenEnchantmentIndex,
            fallback: Some(&fallback),
        };

        let summary = apply.apply_records(&BTreeMap::from([(
            "default".to_owned(),
            json!({ "example:smite": "missing_theme" }),
        )]));

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.fallbacks, 1);
        assert_eq!(
            attachments.theme_key(&EnchantmentId::from("example:smite")),
            Some(ThemeKey::from("plain"))
        );
    }

    #[test]
    fn test_unknown_enchantments_are_dropped() {
        let registry = registry_with(&["holy"]);
        let attachments = ThemeAttachments::new();
        let installed = EnchantmentOracleImpl::new([EnchantmentId::from("example:smite")]);
        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &installed,
            fallback: None,
        };

        let summary = apply.apply_records(&BTreeMap::from([(
            "default".to_owned(),
            json!({ "example:smite": "holy", "absent_mod:zap": "holy" }),
        )]));

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.unknown_enchantments, 1);
        assert!(attachments.theme_key(&EnchantmentId::from("absent_mod:zap")).is_none());
    }

    #[test]
    fn test_later_records_override_earlier_ones() {
        let registry = registry_with(&["holy", "infernal"]);
        let attachments = ThemeAttachments::new();
        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &OpenEnchantmentIndex,
            fallback: None,
        };

        // Record names merge in order: "b_override" comes after "a_base".
        let records = BTreeMap::from([
            ("a_base".to_owned(), json!({ "example:smite": "holy" })),
            ("b_override".to_owned(), json!({ "example:smite": "infernal" })),
        ]);
        apply.apply_records(&records);

        assert_eq!(
            attachments.theme_key(&EnchantmentId::from("example:smite")),
            Some(ThemeKey::from("infernal"))
        );
    }

    #[test]
    fn test_malformed_record_does_not_abort_siblings() {
        let registry = registry_with(&["holy"]);
        let attachments = ThemeAttachments::new();
        let apply = AssignmentApply {
            registry: &registry,
            attachments: &attachments,
            enchantments: &OpenEnchantmentIndex,
            fallback: None,
        };

        let records = BTreeMap::from([
            ("broken".to_owned(), json!([1, 2, 3])),
            ("default".to_owned(), json!({ "example:smite": "holy" })),
        ]);
        let summary = apply.apply_records(&records);

        assert_eq!(summary.skipped_records, 1);
        assert_eq!(summary.applied, 1);
    }
}
