//! Engine configuration.

use crate::id::ThemeKey;

/// Tunable policy for the reload pipeline.
///
/// Loaded from `config.toml` by the content crate; [`Default`] gives the
/// stock behavior (no fallback theme).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Theme to substitute when an assignment references a theme key absent
    /// from the current registry generation. When unset (the default), such
    /// entries are skipped and the enchantment keeps its previous theme.
    pub fallback_theme: Option<ThemeKey>,
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback theme (builder pattern).
    #[must_use]
    pub fn with_fallback_theme(mut self, key: impl Into<ThemeKey>) -> Self {
        self.fallback_theme = Some(key.into());
        self
    }
}
