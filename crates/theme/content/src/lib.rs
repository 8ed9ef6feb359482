//! Content decoding and loaders for theme data.
//!
//! This crate turns external content-pack data into `theme-core` records:
//! - Untyped pack records (JSON) via the shared decode functions
//! - Local theme/assignment catalogs (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Decoding is pure: nothing here mutates shared state. The same decode
//! functions back every platform adapter, so the logic that interprets a
//! record exists exactly once; adapters only obtain raw records and forward
//! them unchanged.
//!
//! All loaders use theme-core types directly with serde deserialization.

pub mod loaders;

pub use loaders::{
    AssignmentLoader, ConfigLoader, ContentFactory, LoadResult, PackReader, RawRecordBatch,
    ThemeLoader, decode_assignment_record, decode_theme_record,
};
