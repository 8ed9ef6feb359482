//! Process-wide theme store with generation-swap publication.
//!
//! A reload never mutates the live map in place: the rebuild is staged on a
//! [`ThemeSet`] off to the side and published as one atomic `Arc` swap.
//! Readers either see the previous generation in full or the new one in
//! full, never a mix of the two.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::id::ThemeKey;
use crate::theme::EnchantmentTheme;

/// Staging area for one reload generation.
///
/// All rebuild work happens here, away from the live registry. Keys are
/// unique within the staged set; re-registering a key replaces the entry.
#[derive(Debug, Default)]
pub struct ThemeSet {
    themes: HashMap<ThemeKey, Arc<EnchantmentTheme>>,
}

impl ThemeSet {
    /// Creates an empty staging set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `key`.
    pub fn register(&mut self, key: ThemeKey, theme: EnchantmentTheme) {
        self.themes.insert(key, Arc::new(theme));
    }

    /// Returns the number of staged themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl FromIterator<(ThemeKey, EnchantmentTheme)> for ThemeSet {
    fn from_iter<I: IntoIterator<Item = (ThemeKey, EnchantmentTheme)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, theme) in iter {
            set.register(key, theme);
        }
        set
    }
}

/// One complete, atomically-published version of the loaded themes.
#[derive(Debug)]
struct Generation {
    serial: u64,
    themes: HashMap<ThemeKey, Arc<EnchantmentTheme>>,
}

/// Snapshot-consistent view of the registry at one generation.
///
/// Cheap to take (one `Arc` clone) and unaffected by later publishes.
#[derive(Clone, Debug)]
pub struct RegistrySnapshot {
    generation: Arc<Generation>,
}

impl RegistrySnapshot {
    /// Serial of the generation this snapshot observes.
    pub fn serial(&self) -> u64 {
        self.generation.serial
    }

    /// Looks up a theme within this snapshot.
    pub fn get(&self, key: &ThemeKey) -> Option<&Arc<EnchantmentTheme>> {
        self.generation.themes.get(key)
    }

    /// Iterates over every `(key, theme)` pair in this snapshot.
    pub fn iter(&self) -> impl Iterator<Item = (&ThemeKey, &Arc<EnchantmentTheme>)> {
        self.generation.themes.iter()
    }

    /// Number of themes in this snapshot.
    pub fn len(&self) -> usize {
        self.generation.themes.len()
    }

    /// Returns true if this snapshot holds no themes.
    pub fn is_empty(&self) -> bool {
        self.generation.themes.is_empty()
    }
}

/// Store of all loaded themes, keyed by stable identifier.
///
/// Single writer (the reload pipeline), multiple readers. Lookup misses are
/// a normal outcome (references may be transiently unresolved across a
/// reload boundary) and are never promoted to an error here.
#[derive(Debug)]
pub struct ThemeRegistry {
    current: RwLock<Arc<Generation>>,
}

impl ThemeRegistry {
    /// Creates a registry with an empty generation 0.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation {
                serial: 0,
                themes: HashMap::new(),
            })),
        }
    }

    /// Publishes a staged set as the next generation and returns its serial.
    ///
    /// The swap is a single `Arc` assignment; an empty set clears every
    /// prior lookup. The previous generation stays alive for as long as
    /// outstanding [`RegistrySnapshot`]s reference it.
    pub fn publish(&self, set: ThemeSet) -> u64 {
        let mut current = self.write_lock();
        let serial = current.serial + 1;
        *current = Arc::new(Generation {
            serial,
            themes: set.themes,
        });
        serial
    }

    /// Looks up a theme in the generation active at call time.
    pub fn lookup(&self, key: &ThemeKey) -> Option<Arc<EnchantmentTheme>> {
        self.read_lock().themes.get(key).cloned()
    }

    /// Takes a snapshot-consistent view of the active generation.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            generation: Arc::clone(&self.read_lock()),
        }
    }

    /// Serial of the generation active at call time.
    pub fn serial(&self) -> u64 {
        self.read_lock().serial
    }

    // The guarded value is a single Arc and every write is one assignment,
    // so a poisoned lock still holds a complete generation; recover it
    // rather than surfacing an error lookups are not allowed to have.
    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Arc<Generation>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Arc<Generation>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name: &str) -> EnchantmentTheme {
        EnchantmentTheme::new(name)
    }

    #[test]
    fn test_lookup_returns_registered_theme() {
        let registry = ThemeRegistry::new();
        let mut set = ThemeSet::new();
        set.register(ThemeKey::from("arcane"), theme("Arcane"));
        registry.publish(set);

        let found = registry.lookup(&ThemeKey::from("arcane")).unwrap();
        assert_eq!(*found, theme("Arcane"));
        assert!(registry.lookup(&ThemeKey::from("missing")).is_none());
    }

    #[test]
    fn test_publish_replaces_previous_generation() {
        let registry = ThemeRegistry::new();

        let mut first = ThemeSet::new();
        first.register(ThemeKey::from("arcane"), theme("Arcane"));
        first.register(ThemeKey::from("infernal"), theme("Infernal"));
        assert_eq!(registry.publish(first), 1);

        let mut second = ThemeSet::new();
        second.register(ThemeKey::from("arcane"), theme("Arcane II"));
        assert_eq!(registry.publish(second), 2);

        assert_eq!(
            registry.lookup(&ThemeKey::from("arcane")).unwrap().display_name,
            "Arcane II"
        );
        // No leak of the old generation after publish.
        assert!(registry.lookup(&ThemeKey::from("infernal")).is_none());
    }

    #[test]
    fn test_empty_generation_clears_all_lookups() {
        let registry = ThemeRegistry::new();
        let mut set = ThemeSet::new();
        set.register(ThemeKey::from("arcane"), theme("Arcane"));
        registry.publish(set);

        registry.publish(ThemeSet::new());
        assert!(registry.lookup(&ThemeKey::from("arcane")).is_none());
        assert_eq!(registry.serial(), 2);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_publish() {
        let registry = ThemeRegistry::new();
        let mut set = ThemeSet::new();
        set.register(ThemeKey::from("arcane"), theme("Arcane"));
        registry.publish(set);

        let snapshot = registry.snapshot();
        registry.publish(ThemeSet::new());

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get(&ThemeKey::from("arcane")).is_some());
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_reregistering_a_key_replaces_the_staged_entry() {
        let mut set = ThemeSet::new();
        set.register(ThemeKey::from("arcane"), theme("Arcane"));
        set.register(ThemeKey::from("arcane"), theme("Arcane II"));
        assert_eq!(set.len(), 1);
    }
}
