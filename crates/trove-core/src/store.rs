//! JSONL store: load the full record sequence, mutate in memory, save.

use std::fs;
use std::path::{Path, PathBuf};

use trove_domain::Record;

use crate::error::{Result, StoreError};

/// Handle to a trove store file.
///
/// The file is the entire durable state: one JSON record per line, UTF-8, in
/// append order. `save` rewrites the whole sequence through a sibling temp
/// file and renames it over the target, so an interrupted run never leaves a
/// half-written store behind.
#[derive(Clone, Debug)]
pub struct Trove {
    path: PathBuf,
}

impl Trove {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records. A missing file is an empty store; blank lines are
    /// ignored; a malformed line fails the whole load.
    pub fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                line: idx + 1,
                source,
            })?;
            records.push(record);
        }
        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded store");
        Ok(records)
    }

    /// Serialize the full sequence, one record per line with a trailing
    /// newline, replacing the file atomically.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let mut out = String::with_capacity(records.len() * 128);
        for record in records {
            let line = serde_json::to_string(record).map_err(|source| StoreError::Encode {
                url: record.url.clone(),
                source,
            })?;
            out.push_str(&line);
            out.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, out.as_bytes()).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "saved store");
        Ok(())
    }
}
