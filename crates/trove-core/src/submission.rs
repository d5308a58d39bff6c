//! Submission body parsing.
//!
//! An external submission is free text interpreted as `key: value` lines: the
//! first colon splits key from value, keys are trimmed and case-folded.
//! `url` is required; `tags` and `notes` are recognized; anything else is
//! parsed but unused.

use std::collections::HashMap;

use trove_domain::{Record, TagSet};

/// Parse a body into its `key: value` fields.
pub fn parse_body(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in body.trim().lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }
    fields
}

/// A submission reduced to its recognized fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub url: String,
    pub tags: TagSet,
    pub notes: Option<String>,
}

impl Submission {
    /// Interpret a body. `None` when the required `url` field is missing or
    /// empty; the caller reports it and leaves the originating item open.
    pub fn from_body(body: &str) -> Option<Self> {
        let mut fields = parse_body(body);
        let url = fields.remove("url").filter(|u| !u.is_empty())?;
        let tags = fields
            .remove("tags")
            .map(|t| TagSet::parse(&t))
            .unwrap_or_default();
        let notes = fields.remove("notes").filter(|n| !n.is_empty());
        Some(Self { url, tags, notes })
    }

    /// Build a store candidate. The title is left absent for the resolver.
    pub fn into_record(self) -> Record {
        let mut record = Record::new(self.url);
        record.tags = self.tags;
        record.notes = self.notes;
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_colon_splits_key_from_value() {
        let fields = parse_body("url: https://example.com?q=a:b\nnotes: see: here");
        assert_eq!(fields["url"], "https://example.com?q=a:b");
        assert_eq!(fields["notes"], "see: here");
    }

    #[test]
    fn keys_are_case_folded() {
        let submission = Submission::from_body("URL: https://example.com\nTags: foo bar").unwrap();
        assert_eq!(submission.url, "https://example.com");
        assert_eq!(submission.tags, TagSet::parse("foo bar"));
        assert!(submission.notes.is_none());
    }

    #[test]
    fn missing_url_is_rejected() {
        assert!(Submission::from_body("tags: foo").is_none());
        assert!(Submission::from_body("url:").is_none());
        assert!(Submission::from_body("just some prose").is_none());
    }

    #[test]
    fn lines_without_colons_are_ignored() {
        let submission =
            Submission::from_body("please add this\nurl: https://example.com\nthanks!").unwrap();
        assert_eq!(submission.url, "https://example.com");
    }

    #[test]
    fn into_record_carries_fields() {
        let record = Submission::from_body("url: https://example.com\ntags: foo\nnotes: neat")
            .unwrap()
            .into_record();
        assert_eq!(record.url, "https://example.com");
        assert_eq!(record.tags, TagSet::parse("foo"));
        assert_eq!(record.notes.as_deref(), Some("neat"));
        assert!(record.title.is_none());
    }
}
