//! Reload error surface.

use std::path::PathBuf;

/// Errors from the pack-backed reload path.
///
/// Decode and reference failures are never errors; they are logged and
/// skipped per entry. The only fatal condition is an unavailable pack, and
/// it is fatal to that reload cycle alone: the previously published
/// generation keeps serving.
#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    /// The content pack directory could not be read at all.
    #[error("content pack unavailable at {}: {source}", .path.display())]
    PackUnavailable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
