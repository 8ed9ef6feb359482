//! Shared decode functions for structurally-untyped pack records.
//!
//! The reload pipeline hands over named records as raw JSON values. Both
//! reload entry points funnel through these functions, so every platform
//! adapter shares one interpretation of the record shapes. Failures carry
//! the record name; the caller decides the skip policy, and one corrupt
//! record must never abort its siblings.

use std::collections::BTreeMap;

use serde_json::Value;
use theme_core::{EnchantmentId, EnchantmentTheme, ThemeKey};

use crate::loaders::LoadResult;

/// Decodes a single theme record.
///
/// The record name becomes the theme key; the value must deserialize to an
/// [`EnchantmentTheme`].
pub fn decode_theme_record(name: &str, value: &Value) -> LoadResult<(ThemeKey, EnchantmentTheme)> {
    let theme: EnchantmentTheme = serde_json::from_value(value.clone())
        .map_err(|e| anyhow::anyhow!("Failed to decode theme record '{}': {}", name, e))?;
    Ok((ThemeKey::new(name), theme))
}

/// Decodes a single assignment record.
///
/// One record is one mapping file: enchantment identifier → theme key.
/// Entries come back in identifier order so merging across records is
/// deterministic.
pub fn decode_assignment_record(
    name: &str,
    value: &Value,
) -> LoadResult<Vec<(EnchantmentId, ThemeKey)>> {
    let entries: BTreeMap<String, String> = serde_json::from_value(value.clone())
        .map_err(|e| anyhow::anyhow!("Failed to decode assignment record '{}': {}", name, e))?;

    Ok(entries
        .into_iter()
        .map(|(enchantment, theme)| (EnchantmentId::from(enchantment), ThemeKey::from(theme)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_theme_record() {
        let value = json!({
            "display_name": "Arcane",
            "color": 0x7f00ff,
            "providers": [
                {
                    "matcher": { "Objects": ["oak_bookshelf"] },
                    "base_power": 1,
                    "bonuses": [
                        { "condition": "Always", "effect": { "PerExtraOccurrence": 1 } }
                    ]
                }
            ]
        });

        let (key, theme) = decode_theme_record("arcane", &value).unwrap();
        assert_eq!(key, ThemeKey::from("arcane"));
        assert_eq!(theme.display_name, "Arcane");
        assert_eq!(theme.color, Some(0x7f00ff));
        assert_eq!(theme.providers.len(), 1);
        assert_eq!(theme.providers[0].bonuses.len(), 1);
    }

    #[test]
    fn test_decode_theme_record_defaults_optional_fields() {
        let value = json!({ "display_name": "Plain" });

        let (_, theme) = decode_theme_record("plain", &value).unwrap();
        assert_eq!(theme.color, None);
        assert!(theme.providers.is_empty());
        assert!(theme.effects.is_none());
    }

    #[test]
    fn test_decode_theme_record_rejects_wrong_shape() {
        let err = decode_theme_record("broken", &json!(["not", "a", "theme"])).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_decode_assignment_record() {
        let value = json!({
            "example:smite": "holy",
            "example:blast": "infernal"
        });

        let entries = decode_assignment_record("default", &value).unwrap();
        assert_eq!(
            entries,
            vec![
                (EnchantmentId::from("example:blast"), ThemeKey::from("infernal")),
                (EnchantmentId::from("example:smite"), ThemeKey::from("holy")),
            ]
        );
    }

    #[test]
    fn test_decode_assignment_record_rejects_non_string_values() {
        let value = json!({ "example:smite": 3 });
        assert!(decode_assignment_record("default", &value).is_err());
    }
}
