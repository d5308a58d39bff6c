//! Title backfill sweep.
//!
//! A separate pass from [`crate::reconcile`]: it only fills absent titles and
//! never inserts, removes, or otherwise mutates records. The sweep is split
//! into pure halves so the resolver can run between them.

use std::collections::HashMap;

use trove_domain::Record;

/// URLs of records with no title, in store order.
pub fn missing_title_urls(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.title.is_none())
        .map(|r| r.url.clone())
        .collect()
}

/// Fill resolved titles onto records that still lack one. Returns the number
/// of records updated.
pub fn apply_titles(records: &mut [Record], titles: &HashMap<String, String>) -> usize {
    let mut updated = 0;
    for record in records.iter_mut().filter(|r| r.title.is_none()) {
        if let Some(title) = titles.get(&record.url) {
            record.title = Some(title.clone());
            updated += 1;
        }
    }
    updated
}
