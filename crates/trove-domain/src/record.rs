//! Link record domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tags::TagSet;

/// One stored link entry.
///
/// `url` is the unique key within a store, matched exactly. `added` is stamped
/// at creation and never overwritten by merges. Absent optional fields are
/// omitted from the serialized form, so a bare capture is just
/// `{"url":...,"added":...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub url: String,
    pub added: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record {
    /// Create a record stamped with the current UTC time. Importers that
    /// reconstruct historical dates overwrite `added` before the record
    /// enters the store.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            added: Utc::now(),
            title: None,
            tags: TagSet::new(),
            notes: None,
        }
    }
}
