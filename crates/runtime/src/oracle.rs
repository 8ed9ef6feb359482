//! Oracle implementations backing the core's host-seam traits.
//!
//! Hosts with a real registry/tag table implement the traits themselves;
//! these in-memory implementations cover embedding, tools and tests.

use std::collections::{BTreeSet, HashMap, HashSet};

use theme_core::{EnchantmentId, EnchantmentOracle, ObjectId, TagId, TagOracle};

/// Set-backed index of installed enchantment ids.
#[derive(Debug, Default)]
pub struct EnchantmentOracleImpl {
    installed: HashSet<EnchantmentId>,
}

impl EnchantmentOracleImpl {
    /// Creates an index over the given enchantment ids.
    pub fn new(ids: impl IntoIterator<Item = EnchantmentId>) -> Self {
        Self {
            installed: ids.into_iter().collect(),
        }
    }

    /// Registers another installed enchantment.
    pub fn insert(&mut self, id: EnchantmentId) {
        self.installed.insert(id);
    }

    /// Number of installed enchantments.
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    /// Returns true if no enchantment is registered.
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}

impl EnchantmentOracle for EnchantmentOracleImpl {
    fn contains(&self, id: &EnchantmentId) -> bool {
        self.installed.contains(id)
    }
}

/// Enchantment oracle that accepts every identifier.
///
/// The builder default: hosts that do not care about namespace validation
/// (or tests) get apply semantics without wiring a real index.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenEnchantmentIndex;

impl EnchantmentOracle for OpenEnchantmentIndex {
    fn contains(&self, _id: &EnchantmentId) -> bool {
        true
    }
}

/// Map-backed tag table.
#[derive(Debug, Default)]
pub struct TagOracleImpl {
    tags: HashMap<TagId, BTreeSet<ObjectId>>,
}

impl TagOracleImpl {
    /// Creates an empty tag table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the members of a tag, replacing any previous members.
    pub fn insert(&mut self, tag: TagId, members: impl IntoIterator<Item = ObjectId>) {
        self.tags.insert(tag, members.into_iter().collect());
    }
}

impl TagOracle for TagOracleImpl {
    fn tag_contains(&self, tag: &TagId, object: &ObjectId) -> bool {
        self.tags
            .get(tag)
            .is_some_and(|members| members.contains(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enchantment_index_contains_only_registered_ids() {
        let oracle = EnchantmentOracleImpl::new([
            EnchantmentId::from("example:smite"),
            EnchantmentId::from("example:blast"),
        ]);

        assert!(oracle.contains(&EnchantmentId::from("example:smite")));
        assert!(!oracle.contains(&EnchantmentId::from("other:unknown")));
        assert_eq!(oracle.len(), 2);
    }

    #[test]
    fn test_open_index_accepts_everything() {
        assert!(OpenEnchantmentIndex.contains(&EnchantmentId::from("anything:at_all")));
    }

    #[test]
    fn test_tag_table_membership() {
        let mut tags = TagOracleImpl::new();
        tags.insert(
            TagId::from("bookshelves"),
            [ObjectId::from("oak_bookshelf"), ObjectId::from("birch_bookshelf")],
        );

        assert!(tags.tag_contains(&TagId::from("bookshelves"), &ObjectId::from("oak_bookshelf")));
        assert!(!tags.tag_contains(&TagId::from("bookshelves"), &ObjectId::from("candle")));
        assert!(!tags.tag_contains(&TagId::from("candles"), &ObjectId::from("candle")));
    }
}
