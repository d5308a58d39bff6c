//! Dedupe/merge policy shared by every ingestion path.

use trove_domain::Record;

/// What [`reconcile`] did with a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No record had the candidate's URL; it was appended.
    Inserted,
    /// A record existed and gained tags from the candidate.
    Merged,
    /// A record existed and the candidate carried nothing new.
    Skipped,
}

/// Reconcile a candidate against the store sequence.
///
/// URLs match by exact string comparison. On a match, candidate tags missing
/// from the existing record (compared case-insensitively) are unioned in and
/// stored lowercased; `title`, `notes`, and `added` are left untouched.
/// Re-running the same candidate is always a no-op `Skipped`.
pub fn reconcile(records: &mut Vec<Record>, candidate: Record) -> Outcome {
    match records.iter().position(|r| r.url == candidate.url) {
        None => {
            records.push(candidate);
            Outcome::Inserted
        }
        Some(idx) => {
            let existing = &mut records[idx];
            let mut changed = false;
            for tag in candidate.tags.iter() {
                if existing.tags.insert(&tag.to_lowercase()) {
                    changed = true;
                }
            }
            if changed {
                Outcome::Merged
            } else {
                Outcome::Skipped
            }
        }
    }
}
