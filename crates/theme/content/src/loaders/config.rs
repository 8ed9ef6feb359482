//! Engine configuration loader.

use std::path::Path;

use theme_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing EngineConfig
    ///
    /// # Returns
    ///
    /// Returns an EngineConfig.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use theme_core::ThemeKey;

    #[test]
    fn test_load_config_with_fallback_theme() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"fallback_theme = \"arcane\"\n")
            .expect("write config");

        let config = ConfigLoader::load(file.path()).expect("config should load");
        assert_eq!(config.fallback_theme, Some(ThemeKey::from("arcane")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"").expect("write config");

        let config = ConfigLoader::load(file.path()).expect("config should load");
        assert_eq!(config, EngineConfig::default());
    }
}
