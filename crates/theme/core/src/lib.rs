//! Deterministic data model and power resolution for enchantment themes.
//!
//! `theme-core` defines the canonical records (themes, power providers,
//! bonuses), the generation-swapped [`registry::ThemeRegistry`], the
//! per-enchantment attachment side-table and the pure
//! [`resolve::PowerResolutionEngine`]. It performs no I/O and no logging;
//! content decoding lives in `theme-content` and orchestration in
//! `theme-runtime`.

pub mod attach;
pub mod config;
pub mod id;
pub mod oracle;
pub mod power;
pub mod registry;
pub mod resolve;
pub mod theme;

pub use attach::ThemeAttachments;
pub use config::EngineConfig;
pub use id::{EnchantmentId, ObjectId, TagId, ThemeKey};
pub use oracle::{EmptyTagIndex, EnchantmentOracle, TagOracle};
pub use power::{
    BonusCondition, BonusEffect, MatchContext, ObjectMatcher, PowerBonus, PowerProvider,
};
pub use registry::{RegistrySnapshot, ThemeRegistry, ThemeSet};
pub use resolve::{ObjectOccurrence, PowerResolutionEngine, PowerTable, WorldSnapshot};
pub use theme::{EffectFlags, EnchantmentTheme, ThemeEffects};
