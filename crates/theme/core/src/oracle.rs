//! Oracle traits at the host seam.
//!
//! The core never talks to the host's data structures directly: tag
//! membership and enchantment namespace lookups go through these traits,
//! implemented by the embedding runtime. Implementations must be cheap,
//! pure lookups; both oracles are consulted on hot resolution paths.

use crate::id::{EnchantmentId, ObjectId, TagId};

/// Oracle answering tag membership for world objects.
pub trait TagOracle: Send + Sync {
    /// Returns true if `object` is covered by `tag`.
    fn tag_contains(&self, tag: &TagId, object: &ObjectId) -> bool;
}

/// Oracle answering whether an enchantment exists in the host namespace.
///
/// Assignment records may reference enchantments from content that is not
/// installed; the apply cycle uses this oracle to tell "not installed"
/// apart from a valid target.
pub trait EnchantmentOracle: Send + Sync {
    /// Returns true if the enchantment is registered with the host.
    fn contains(&self, id: &EnchantmentId) -> bool;
}

/// Tag oracle with no tag data; every tag is empty.
///
/// Useful for hosts without a tag table and as the default in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyTagIndex;

impl TagOracle for EmptyTagIndex {
    fn tag_contains(&self, _tag: &TagId, _object: &ObjectId) -> bool {
        false
    }
}
