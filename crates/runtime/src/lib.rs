//! Runtime orchestration for the enchantment theme engine.
//!
//! This crate wires the theme registry, the attachment side-table and the
//! oracle implementations into a cohesive reload API. Hosts embed
//! [`ThemeEngine`] and hand it raw records from their content-reload
//! pipeline; queries flow back out through the registry, the attachments
//! and the power resolution engine.
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the orchestrator and builder
//! - [`reload`] implements the two reload entry points and their summaries
//! - [`oracle`] provides host-seam oracle implementations
//! - [`error`] defines the reload error surface

pub mod engine;
pub mod error;
pub mod oracle;
pub mod reload;

pub use engine::{ThemeEngine, ThemeEngineBuilder};
pub use error::ReloadError;
pub use oracle::{EnchantmentOracleImpl, OpenEnchantmentIndex, TagOracleImpl};
pub use reload::{ApplySummary, PackReloadSummary, ReloadSummary};
