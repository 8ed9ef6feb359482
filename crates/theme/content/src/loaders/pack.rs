//! Data-pack adapter: raw JSON records from a pack directory.
//!
//! Content packs ship one JSON file per record; the file stem is the record
//! name. This adapter only materializes the raw values; interpretation
//! happens in the shared decode functions, so the reload pipeline sees the
//! same record map no matter which adapter produced it.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// Raw records read from one pack directory.
#[derive(Debug, Default)]
pub struct RawRecordBatch {
    /// Record name → untyped value, in name order.
    pub records: BTreeMap<String, Value>,
    /// Files that could not be read or parsed: `(record name, reason)`.
    /// One corrupt file never fails the batch.
    pub malformed: Vec<(String, String)>,
}

impl RawRecordBatch {
    /// Returns true if the batch holds neither records nor failures.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.malformed.is_empty()
    }
}

/// Reader for JSON record directories.
pub struct PackReader;

impl PackReader {
    /// Reads every `*.json` file under `dir` into a raw record batch.
    ///
    /// # Errors
    ///
    /// Fails only when the directory itself cannot be listed; individual
    /// files that fail to read or parse land in
    /// [`RawRecordBatch::malformed`].
    pub fn read_dir(dir: &Path) -> LoadResult<RawRecordBatch> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read pack directory {}: {}", dir.display(), e))?;

        let mut batch = RawRecordBatch::default();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    batch.malformed.push(("<unreadable entry>".to_owned(), e.to_string()));
                    continue;
                }
            };
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            let parsed = read_file(&path)
                .and_then(|content| {
                    serde_json::from_str::<Value>(&content)
                        .map_err(|e| anyhow::anyhow!("Failed to parse JSON record: {}", e))
                });
            match parsed {
                Ok(value) => {
                    batch.records.insert(name, value);
                }
                Err(e) => batch.malformed.push((name, e.to_string())),
            }
        }

        // Directory iteration order is platform-defined; keep failure
        // reporting stable too.
        batch.malformed.sort();
        Ok(batch)
    }
}
