//! The theme engine orchestrator.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use theme_content::ContentFactory;
use theme_core::registry::ThemeSet;
use theme_core::{
    EmptyTagIndex, EnchantmentId, EnchantmentOracle, EnchantmentTheme, EngineConfig,
    PowerResolutionEngine, PowerTable, TagOracle, ThemeAttachments, ThemeKey, ThemeRegistry,
    WorldSnapshot,
};

use crate::error::ReloadError;
use crate::oracle::OpenEnchantmentIndex;
use crate::reload::assignments::AssignmentApply;
use crate::reload::{ApplySummary, PackReloadSummary, ReloadSummary, themes};

/// Owner of all reloadable theme state.
///
/// Created once at startup and passed by reference; there are no global
/// statics. The registry and the attachment side-table are replaced or
/// written only through the reload entry points below, which the host calls
/// from its content-reload pipeline: a single writer by host contract.
/// Readers go through [`ThemeEngine::resolve_power`],
/// [`ThemeEngine::theme_key`] and the registry snapshot API at any time.
pub struct ThemeEngine {
    registry: ThemeRegistry,
    attachments: ThemeAttachments,
    enchantments: Arc<dyn EnchantmentOracle>,
    tags: Arc<dyn TagOracle>,
    config: EngineConfig,
}

impl ThemeEngine {
    /// Returns a builder with default oracles and configuration.
    pub fn builder() -> ThemeEngineBuilder {
        ThemeEngineBuilder::default()
    }

    /// Decodes and publishes a theme batch; see [`ReloadSummary`].
    ///
    /// One entry point per artifact type: this is the only way a new theme
    /// generation reaches the registry.
    pub fn load_themes(&self, records: &BTreeMap<String, Value>) -> ReloadSummary {
        themes::load_themes(&self.registry, records)
    }

    /// Publishes an already-decoded theme catalog (the RON path).
    pub fn load_theme_catalog(&self, entries: Vec<(ThemeKey, EnchantmentTheme)>) -> ReloadSummary {
        let set: ThemeSet = entries.into_iter().collect();
        let loaded = set.len();
        let serial = self.registry.publish(set);
        tracing::info!(
            "Published theme generation {} ({} loaded from catalog)",
            serial,
            loaded
        );
        ReloadSummary {
            loaded,
            skipped: 0,
            serial,
        }
    }

    /// Applies an assignment batch; see [`ApplySummary`].
    pub fn apply_assignments(&self, records: &BTreeMap<String, Value>) -> ApplySummary {
        self.assignment_apply().apply_records(records)
    }

    /// Applies an already-decoded assignment catalog (the RON path).
    pub fn apply_assignment_catalog(
        &self,
        entries: Vec<(EnchantmentId, ThemeKey)>,
    ) -> ApplySummary {
        self.assignment_apply().apply_catalog(entries)
    }

    /// Runs one full reload cycle from a content directory.
    ///
    /// Both packs are read before anything is published, so an unavailable
    /// pack leaves the previous generation fully intact.
    ///
    /// # Errors
    ///
    /// [`ReloadError::PackUnavailable`] when either pack directory cannot
    /// be listed; fatal to this reload cycle only.
    pub fn reload_from_pack(&self, content_dir: &Path) -> Result<PackReloadSummary, ReloadError> {
        let factory = ContentFactory::new(content_dir);
        let theme_batch =
            factory
                .read_theme_pack()
                .map_err(|source| ReloadError::PackUnavailable {
                    path: content_dir.to_path_buf(),
                    source,
                })?;
        let assignment_batch =
            factory
                .read_assignment_pack()
                .map_err(|source| ReloadError::PackUnavailable {
                    path: content_dir.to_path_buf(),
                    source,
                })?;

        for (name, reason) in theme_batch.malformed.iter().chain(&assignment_batch.malformed) {
            tracing::warn!("Skipping unreadable pack file '{}': {}", name, reason);
        }

        let summary = PackReloadSummary {
            themes: self.load_themes(&theme_batch.records),
            assignments: self.apply_assignments(&assignment_batch.records),
            malformed_files: theme_batch.malformed.len() + assignment_batch.malformed.len(),
        };
        Ok(summary)
    }

    /// Resolves per-theme power for the given theme keys against a world
    /// snapshot.
    pub fn resolve_power(
        &self,
        themes: impl IntoIterator<Item = ThemeKey>,
        snapshot: &WorldSnapshot,
    ) -> PowerTable {
        PowerResolutionEngine::new(&self.registry, self.tags.as_ref()).resolve(themes, snapshot)
    }

    /// Resolved theme key for an enchantment, or `None` when unthemed.
    pub fn theme_key(&self, enchantment: &EnchantmentId) -> Option<ThemeKey> {
        self.attachments.theme_key(enchantment)
    }

    /// The live theme registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The per-enchantment attachment side-table.
    pub fn attachments(&self) -> &ThemeAttachments {
        &self.attachments
    }

    /// The active engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn assignment_apply(&self) -> AssignmentApply<'_> {
        AssignmentApply {
            registry: &self.registry,
            attachments: &self.attachments,
            enchantments: self.enchantments.as_ref(),
            fallback: self.config.fallback_theme.as_ref(),
        }
    }
}

/// Builder for [`ThemeEngine`].
///
/// Defaults: every enchantment id accepted, no tag data, stock
/// configuration.
pub struct ThemeEngineBuilder {
    enchantments: Arc<dyn EnchantmentOracle>,
    tags: Arc<dyn TagOracle>,
    config: EngineConfig,
}

impl Default for ThemeEngineBuilder {
    fn default() -> Self {
        Self {
            enchantments: Arc::new(OpenEnchantmentIndex),
            tags: Arc::new(EmptyTagIndex),
            config: EngineConfig::default(),
        }
    }
}

impl ThemeEngineBuilder {
    /// Sets the host enchantment namespace oracle.
    #[must_use]
    pub fn enchantments(mut self, oracle: Arc<dyn EnchantmentOracle>) -> Self {
        self.enchantments = oracle;
        self
    }

    /// Sets the host tag oracle.
    #[must_use]
    pub fn tags(mut self, oracle: Arc<dyn TagOracle>) -> Self {
        self.tags = oracle;
        self
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine with an empty registry and no attachments.
    pub fn build(self) -> ThemeEngine {
        ThemeEngine {
            registry: ThemeRegistry::new(),
            attachments: ThemeAttachments::new(),
            enchantments: self.enchantments,
            tags: self.tags,
            config: self.config,
        }
    }
}
