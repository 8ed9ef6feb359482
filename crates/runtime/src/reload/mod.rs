//! Reload entry points and their outcome summaries.
//!
//! A reload either completes (possibly with per-entry skips) or the process
//! terminates; there is no mid-apply abort. Both entry points therefore
//! return summaries instead of results: every per-entry failure is logged
//! and counted, never raised.

pub(crate) mod assignments;
pub(crate) mod themes;

/// Outcome of one theme batch load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReloadSummary {
    /// Themes registered into the published generation.
    pub loaded: usize,
    /// Malformed records skipped with a warning.
    pub skipped: usize,
    /// Serial of the generation published by this load.
    pub serial: u64,
}

/// Outcome of one assignment apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Entries whose theme key resolved and was written to the attachments.
    pub applied: usize,
    /// Entries absorbed by the configured fallback theme (also counted in
    /// `applied`).
    pub fallbacks: usize,
    /// Entries dropped because the enchantment is not installed.
    pub unknown_enchantments: usize,
    /// Entries dropped because the theme key did not resolve; the previous
    /// attachment was left in place.
    pub unresolved_themes: usize,
    /// Whole records skipped because they failed to decode.
    pub skipped_records: usize,
}

/// Outcome of one pack-backed reload cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackReloadSummary {
    pub themes: ReloadSummary,
    pub assignments: ApplySummary,
    /// Pack files that could not be read or parsed at all.
    pub malformed_files: usize,
}
