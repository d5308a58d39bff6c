//! End-to-end ingestion flows: markdown and submission candidates routed
//! through the shared reconcile policy into a real store file.

use chrono::{TimeZone, Utc};
use trove_core::submission::Submission;
use trove_core::{markdown, reconcile, Outcome, Trove};
use trove_domain::TagSet;

#[test]
fn markdown_document_lands_in_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Trove::new(dir.path().join("trove.jsonl"));

    let doc = "\
# Tools
## CLI
- [ripgrep](https://example.com/rg) great tool #rust
";
    let added = markdown::added_from_filename("2023-04.md");
    let mut records = store.load().unwrap();
    for link in markdown::extract_links(doc) {
        assert_eq!(
            reconcile(&mut records, link.into_record(added)),
            Outcome::Inserted
        );
    }
    store.save(&records).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].url, "https://example.com/rg");
    assert_eq!(loaded[0].title.as_deref(), Some("ripgrep"));
    assert_eq!(loaded[0].tags, TagSet::parse("tools cli rust"));
    assert_eq!(loaded[0].notes.as_deref(), Some("great tool"));
    assert_eq!(
        loaded[0].added,
        Utc.with_ymd_and_hms(2023, 4, 15, 12, 0, 0).unwrap()
    );
}

#[test]
fn reimporting_the_same_document_changes_nothing() {
    let doc = "# Tools\n- [rg](https://example.com/rg) #rust";
    let mut records = Vec::new();
    for link in markdown::extract_links(doc) {
        reconcile(&mut records, link.into_record(None));
    }
    let after_first = records.clone();
    for link in markdown::extract_links(doc) {
        assert_eq!(
            reconcile(&mut records, link.into_record(None)),
            Outcome::Skipped
        );
    }
    assert_eq!(records, after_first);
}

#[test]
fn submission_inserts_then_resubmission_skips() {
    let body = "url: https://example.com\ntags: foo bar";

    let mut records = Vec::new();
    let first = Submission::from_body(body).unwrap();
    assert_eq!(reconcile(&mut records, first.into_record()), Outcome::Inserted);
    assert_eq!(records[0].tags, TagSet::parse("foo bar"));

    // Identical body again: nothing new, but the caller still closes the item.
    let again = Submission::from_body(body).unwrap();
    assert_eq!(reconcile(&mut records, again.into_record()), Outcome::Skipped);
    assert_eq!(records.len(), 1);
}

#[test]
fn late_tags_merge_instead_of_duplicating() {
    let mut records = Vec::new();
    let bare = Submission::from_body("url: https://example.com").unwrap();
    reconcile(&mut records, bare.into_record());

    let tagged = Submission::from_body("url: https://example.com\ntags: Foo").unwrap();
    assert_eq!(reconcile(&mut records, tagged.into_record()), Outcome::Merged);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tags, TagSet::parse("foo"));
}
