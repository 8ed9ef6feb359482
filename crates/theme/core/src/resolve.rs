//! Power resolution over a world snapshot.
//!
//! Given the themes relevant to the current roll and a snapshot of nearby
//! world-object occurrences, [`PowerResolutionEngine::resolve`] computes a
//! per-theme power table. The computation is a total function: a theme key
//! that does not resolve in the registry contributes zero power, since data
//! may be transiently mismatched across a reload boundary.

use std::collections::{BTreeMap, BTreeSet};

use crate::id::{ObjectId, ThemeKey};
use crate::oracle::TagOracle;
use crate::power::MatchContext;
use crate::registry::ThemeRegistry;
use crate::theme::EnchantmentTheme;

/// One world object observed near the resolution site.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectOccurrence {
    pub object: ObjectId,
    pub count: u32,
    /// Properties carried by this occurrence (e.g. `"enchanted"`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: BTreeSet<String>,
}

impl ObjectOccurrence {
    /// Creates an occurrence with no properties.
    pub fn new(object: impl Into<ObjectId>, count: u32) -> Self {
        Self {
            object: object.into(),
            count,
            properties: BTreeSet::new(),
        }
    }

    /// Attaches properties to this occurrence (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, properties: impl IntoIterator<Item = String>) -> Self {
        self.properties.extend(properties);
        self
    }
}

/// Order-insensitive snapshot of world-object occurrences.
///
/// Materialized in memory by the external pipeline before resolution runs;
/// the engine never scans the world itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    occurrences: Vec<ObjectOccurrence>,
}

impl WorldSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an occurrence to the snapshot.
    pub fn push(&mut self, occurrence: ObjectOccurrence) {
        self.occurrences.push(occurrence);
    }

    /// Iterates over the recorded occurrences.
    pub fn occurrences(&self) -> impl Iterator<Item = &ObjectOccurrence> {
        self.occurrences.iter()
    }

    /// Returns true if nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

impl FromIterator<ObjectOccurrence> for WorldSnapshot {
    fn from_iter<I: IntoIterator<Item = ObjectOccurrence>>(iter: I) -> Self {
        Self {
            occurrences: iter.into_iter().collect(),
        }
    }
}

/// Per-theme power totals produced by one resolution call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerTable {
    totals: BTreeMap<ThemeKey, u32>,
}

impl PowerTable {
    /// Power for a theme; zero when the theme produced no power or was not
    /// part of the resolution.
    pub fn power(&self, key: &ThemeKey) -> u32 {
        self.totals.get(key).copied().unwrap_or(0)
    }

    /// Iterates over `(theme, total)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ThemeKey, u32)> {
        self.totals.iter().map(|(key, total)| (key, *total))
    }

    /// Number of themes in the table.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if the table holds no themes.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    fn insert(&mut self, key: ThemeKey, total: u32) {
        self.totals.insert(key, total);
    }
}

/// Computes per-theme power from the active theme set and a world snapshot.
///
/// # Determinism
///
/// For a fixed theme set and snapshot the result is identical regardless of
/// occurrence order: per-provider matching aggregates counts and properties
/// commutatively, and only the data-declared bonus order is sequential.
/// Totals carry no internal cap; any minimum/maximum enforcement belongs to
/// the caller.
pub struct PowerResolutionEngine<'a> {
    registry: &'a ThemeRegistry,
    tags: &'a dyn TagOracle,
}

impl<'a> PowerResolutionEngine<'a> {
    /// Creates an engine reading from the given registry and tag oracle.
    pub fn new(registry: &'a ThemeRegistry, tags: &'a dyn TagOracle) -> Self {
        Self { registry, tags }
    }

    /// Resolves per-theme power for the given theme keys.
    ///
    /// Duplicate keys are resolved once. Every requested key appears in the
    /// returned table, including keys that resolved to zero or are missing
    /// from the registry.
    pub fn resolve(
        &self,
        themes: impl IntoIterator<Item = ThemeKey>,
        snapshot: &WorldSnapshot,
    ) -> PowerTable {
        // One registry snapshot per call keeps the whole resolution on a
        // single reload generation.
        let generation = self.registry.snapshot();

        let mut table = PowerTable::default();
        for key in themes {
            let total = generation
                .get(&key)
                .map(|theme| self.theme_power(theme, snapshot))
                .unwrap_or(0);
            table.insert(key, total);
        }
        table
    }

    fn theme_power(&self, theme: &EnchantmentTheme, snapshot: &WorldSnapshot) -> u32 {
        theme
            .providers
            .iter()
            .map(|provider| {
                let mut ctx = MatchContext::default();
                for occurrence in snapshot.occurrences() {
                    if provider.matcher.matches(&occurrence.object, self.tags) {
                        ctx.count += occurrence.count;
                        ctx.properties.extend(occurrence.properties.iter().cloned());
                    }
                }
                provider.evaluate(&ctx)
            })
            .fold(0u32, u32::saturating_add)
    }
}
