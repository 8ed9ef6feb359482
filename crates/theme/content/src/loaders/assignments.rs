//! Assignment catalog loader.
//!
//! File format: HashMap<String, String> (enchantment id → theme key)
//!
//! Example:
//! ```ron
//! {
//!     "example:smite": "holy",
//!     "example:blast": "infernal",
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use theme_core::{EnchantmentId, ThemeKey};

use crate::loaders::{LoadResult, read_file};

/// Loader for assignment catalogs from RON files.
pub struct AssignmentLoader;

impl AssignmentLoader {
    /// Load an assignment catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(EnchantmentId, ThemeKey)>> {
        let content = read_file(path)?;
        let catalog: BTreeMap<String, String> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse assignment catalog RON at {:?}: {}", path, e)
        })?;

        Ok(catalog
            .into_iter()
            .map(|(enchantment, theme)| (EnchantmentId::from(enchantment), ThemeKey::from(theme)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_assignment_catalog() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            br#"{
                "example:smite": "holy",
                "example:blast": "infernal",
            }"#,
        )
        .expect("write catalog");

        let entries = AssignmentLoader::load(file.path()).expect("catalog should load");
        assert_eq!(
            entries,
            vec![
                (EnchantmentId::from("example:blast"), ThemeKey::from("infernal")),
                (EnchantmentId::from("example:smite"), ThemeKey::from("holy")),
            ]
        );
    }
}
