//! Theme catalog loader.
//!
//! Loads theme records from RON files into `(key, theme)` pairs.
//!
//! File format: HashMap<String, EnchantmentTheme>
//!
//! Example:
//! ```ron
//! {
//!     "arcane": (
//!         display_name: "Arcane",
//!         color: Some(0x7f00ff),
//!         providers: [
//!             (matcher: Objects(["oak_bookshelf"]), base_power: 1),
//!         ],
//!     ),
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use theme_core::{EnchantmentTheme, ThemeKey};

use crate::loaders::{LoadResult, read_file};

/// Loader for theme catalogs from RON files.
pub struct ThemeLoader;

impl ThemeLoader {
    /// Load a theme catalog from a RON file.
    ///
    /// The whole file is one artifact: a syntactically-invalid catalog is
    /// an error here, unlike pack records which are isolated per record.
    pub fn load(path: &Path) -> LoadResult<Vec<(ThemeKey, EnchantmentTheme)>> {
        let content = read_file(path)?;
        let catalog: BTreeMap<String, EnchantmentTheme> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse theme catalog RON at {:?}: {}", path, e))?;

        Ok(catalog
            .into_iter()
            .map(|(key, theme)| (ThemeKey::from(key), theme))
            .collect())
    }
}
