//! Content factory for loading all theme data from a content directory.

use std::path::{Path, PathBuf};

use theme_core::{EngineConfig, EnchantmentId, EnchantmentTheme, ThemeKey};

use crate::loaders::{
    AssignmentLoader, ConfigLoader, LoadResult, PackReader, RawRecordBatch, ThemeLoader,
};

/// Content factory that loads all theme data from a content directory.
///
/// # Directory Structure
///
/// ```text
/// content_dir/
/// ├── config.toml
/// ├── themes.ron
/// ├── assignments.ron
/// └── packs/
///     ├── themes/
///     │   └── *.json
///     └── assignments/
///         └── *.json
/// ```
pub struct ContentFactory {
    content_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a content directory.
    ///
    /// # Arguments
    ///
    /// * `content_dir` - Path to the directory containing content files
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.content_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the local theme catalog from `themes.ron`.
    pub fn load_themes(&self) -> LoadResult<Vec<(ThemeKey, EnchantmentTheme)>> {
        let path = self.content_dir.join("themes.ron");
        ThemeLoader::load(&path)
    }

    /// Load the local assignment catalog from `assignments.ron`.
    pub fn load_assignments(&self) -> LoadResult<Vec<(EnchantmentId, ThemeKey)>> {
        let path = self.content_dir.join("assignments.ron");
        AssignmentLoader::load(&path)
    }

    /// Read raw theme records from `packs/themes/`.
    pub fn read_theme_pack(&self) -> LoadResult<RawRecordBatch> {
        PackReader::read_dir(&self.content_dir.join("packs").join("themes"))
    }

    /// Read raw assignment records from `packs/assignments/`.
    pub fn read_assignment_pack(&self) -> LoadResult<RawRecordBatch> {
        PackReader::read_dir(&self.content_dir.join("packs").join("assignments"))
    }

    /// Returns the content directory path.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}
