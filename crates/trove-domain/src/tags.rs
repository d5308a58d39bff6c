//! Tag set type.
//!
//! Tags were historically stored either as a single space-delimited string or
//! as a list of tokens. `TagSet` is the canonical in-memory form: an ordered
//! set of distinct tokens, compared case-insensitively, iterated in first-seen
//! order. It serializes as one whitespace-joined string and deserializes from
//! either legacy encoding.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered set of distinct tag tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a whitespace-delimited tag string.
    pub fn parse(input: &str) -> Self {
        input.split_whitespace().collect()
    }

    /// True if `tag` is present, ignoring case.
    pub fn contains(&self, tag: &str) -> bool {
        let lowered = tag.to_lowercase();
        self.0.iter().any(|t| t.to_lowercase() == lowered)
    }

    /// Insert a token unless an equal-ignoring-case token is already present.
    /// Returns true if the set changed.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The single whitespace-joined on-disk form.
    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.join())
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TagSetVisitor)
    }
}

struct TagSetVisitor;

impl<'de> Visitor<'de> for TagSetVisitor {
    type Value = TagSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a whitespace-delimited tag string or a list of tags")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<TagSet, E> {
        Ok(TagSet::parse(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TagSet, A::Error> {
        let mut set = TagSet::new();
        while let Some(tag) = seq.next_element::<String>()? {
            set.insert(&tag);
        }
        Ok(set)
    }
}
