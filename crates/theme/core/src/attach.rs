//! Per-enchantment extension state.
//!
//! The original system attached a resolved theme key directly onto the
//! host-owned enchantment object. Here that state lives in a side-table
//! owned by this crate and queried by identifier, which needs no host-ABI
//! patching. An absent entry is the defined "no theme" sentinel.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::id::{EnchantmentId, ThemeKey};

/// Side-table mapping enchantments to their resolved theme key.
///
/// Written only by the assignment apply cycle; read by power resolution and
/// the host's rendering layer. Many enchantments may resolve to one theme.
#[derive(Debug, Default)]
pub struct ThemeAttachments {
    resolved: RwLock<HashMap<EnchantmentId, ThemeKey>>,
}

impl ThemeAttachments {
    /// Creates an empty side-table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resolved theme key for an enchantment, or `None` when no
    /// theme has been assigned.
    pub fn theme_key(&self, enchantment: &EnchantmentId) -> Option<ThemeKey> {
        self.read_lock().get(enchantment).cloned()
    }

    /// Writes the resolved theme key for an enchantment.
    pub fn assign(&self, enchantment: EnchantmentId, theme: ThemeKey) {
        self.write_lock().insert(enchantment, theme);
    }

    /// Clears the resolved theme for an enchantment, restoring the
    /// "no theme" sentinel.
    pub fn clear(&self, enchantment: &EnchantmentId) {
        self.write_lock().remove(enchantment);
    }

    /// Number of enchantments currently carrying a theme.
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    /// Returns true if no enchantment carries a theme.
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    /// Copies the full mapping, for diagnostics and tests.
    pub fn snapshot(&self) -> HashMap<EnchantmentId, ThemeKey> {
        self.read_lock().clone()
    }

    // Writes are per-entry inserts/removes; a poisoned lock still holds a
    // usable map, so recover instead of erroring on the read path.
    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<EnchantmentId, ThemeKey>> {
        self.resolved.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<EnchantmentId, ThemeKey>> {
        self.resolved.write().unwrap_or_else(PoisonError::into_inner)
    }
}
