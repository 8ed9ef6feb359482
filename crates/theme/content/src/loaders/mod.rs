//! Content loaders for reading theme data from files.
//!
//! This module provides loaders that convert RON/TOML/JSON content into
//! theme-core types, plus the shared raw-record decode functions used by the
//! reload pipeline.

pub mod assignments;
pub mod config;
pub mod factory;
pub mod pack;
pub mod records;
pub mod themes;

pub use assignments::AssignmentLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use pack::{PackReader, RawRecordBatch};
pub use records::{decode_assignment_record, decode_theme_record};
pub use themes::ThemeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
