//! Domain types for the trove link curator
//!
//! - Record: one stored link entry (url, added, optional title/tags/notes)
//! - TagSet: ordered set of distinct tag tokens, compared case-insensitively

pub mod record;
pub mod tags;

pub use record::*;
pub use tags::*;
