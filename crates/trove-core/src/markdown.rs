//! Markdown tag/link extraction.
//!
//! Documents are nested headers followed by link lines. Header text becomes
//! slug tags scoped by nesting depth: a header at depth *d* evicts tracked
//! headers at depth ≥ *d*, so tags always reflect the current heading path.
//! Each `[text](url)` line yields one candidate tagged with the active header
//! slugs plus any inline `#hashtags` in the trailing text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use trove_domain::{Record, TagSet};

lazy_static! {
    static ref HEADER: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();
    static ref MD_LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref INLINE_TAG: Regex = Regex::new(r"#(\w+)").unwrap();
    static ref TAG_IN_NOTES: Regex = Regex::new(r"\s*#\w+").unwrap();
    static ref LEADING_PUNCT: Regex = Regex::new(r"^[:\-\s]+").unwrap();
    static ref FILE_MONTH: Regex = Regex::new(r"^(\d{4})-(\d{2})\.md$").unwrap();
    static ref NON_SLUG: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref SLUG_SEP: Regex = Regex::new(r"[\s_]+").unwrap();
}

/// A link extracted from a document, before it becomes a store candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedLink {
    pub url: String,
    pub title: String,
    pub tags: TagSet,
    pub notes: Option<String>,
}

impl ExtractedLink {
    /// Build a store candidate, overriding `added` when the source file
    /// carried a reconstructable date.
    pub fn into_record(self, added: Option<DateTime<Utc>>) -> Record {
        let mut record = Record::new(self.url);
        if let Some(added) = added {
            record.added = added;
        }
        record.title = Some(self.title);
        record.tags = self.tags;
        record.notes = self.notes;
        record
    }
}

/// Slugify header text into a tag token: lowercase, non-word characters
/// stripped, whitespace/underscore runs collapsed to single hyphens,
/// leading/trailing hyphens trimmed.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_SLUG.replace_all(&lowered, "");
    let hyphenated = SLUG_SEP.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Extract all web-link candidates from one document.
pub fn extract_links(content: &str) -> Vec<ExtractedLink> {
    let mut links = Vec::new();
    // Header slugs currently in scope, keyed by nesting depth.
    let mut headers: Vec<(usize, String)> = Vec::new();

    for raw_line in strip_frontmatter(content).lines() {
        let line = raw_line.trim();

        if let Some(caps) = HEADER.captures(line) {
            let depth = caps[1].len();
            let slug = slugify(&caps[2]);
            headers.retain(|(d, _)| *d < depth);
            headers.push((depth, slug));
            continue;
        }

        let Some(caps) = MD_LINK.captures(line) else {
            continue;
        };
        let title = caps[1].trim().to_string();
        let url = caps[2].trim().to_string();
        // Web URLs only; mailto:, relative paths, etc. are silently skipped.
        if !url.starts_with("http") {
            continue;
        }

        let link_end = caps.get(0).map_or(line.len(), |m| m.end());
        let trailing = line[link_end..].trim();
        let trailing = LEADING_PUNCT.replace(trailing, "");

        let mut tags: TagSet = headers.iter().map(|(_, slug)| slug.as_str()).collect();
        for tag_caps in INLINE_TAG.captures_iter(&trailing) {
            tags.insert(&tag_caps[1].to_lowercase());
        }

        let notes = TAG_IN_NOTES.replace_all(&trailing, "").trim().to_string();
        links.push(ExtractedLink {
            url,
            title,
            tags,
            notes: if notes.is_empty() { None } else { Some(notes) },
        });
    }

    links
}

/// Synthetic `added` for `YYYY-MM.md` filenames: the 15th of that month at
/// noon UTC, a mid-month placeholder.
pub fn added_from_filename(name: &str) -> Option<DateTime<Utc>> {
    let caps = FILE_MONTH.captures(name)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).single()
}

/// Markdown files directly inside `dir`, in sorted filename order.
pub fn markdown_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "md"))
        .collect();
    files.sort();
    Ok(files)
}

fn strip_frontmatter(content: &str) -> &str {
    if let Some(rest) = content.strip_prefix("---") {
        if let Some(end) = rest.find("---") {
            return &rest[end + 3..];
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn slugify_strips_and_hyphenates() {
        assert_eq!(slugify("Tools & Utilities"), "tools-utilities");
        assert_eq!(slugify("  Data_Science  "), "data-science");
        assert_eq!(slugify("C++"), "c");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn headers_and_hashtags_become_tags() {
        let doc = "\
# Tools
## CLI
- [ripgrep](https://example.com/rg) great tool #rust
";
        let links = extract_links(doc);
        assert_eq!(links.len(), 1);
        let link = &links[0];
        assert_eq!(link.url, "https://example.com/rg");
        assert_eq!(link.title, "ripgrep");
        assert_eq!(
            link.tags.iter().collect::<Vec<_>>(),
            vec!["tools", "cli", "rust"]
        );
        assert_eq!(link.notes.as_deref(), Some("great tool"));
    }

    #[test]
    fn sibling_headers_do_not_leak_tags() {
        let doc = "\
# Tools
## CLI
- [a](https://example.com/a)
## Editors
- [b](https://example.com/b)
# Games
- [c](https://example.com/c)
";
        let links = extract_links(doc);
        let tag_sets: Vec<Vec<&str>> = links.iter().map(|l| l.tags.iter().collect()).collect();
        assert_eq!(tag_sets[0], vec!["tools", "cli"]);
        assert_eq!(tag_sets[1], vec!["tools", "editors"]);
        assert_eq!(tag_sets[2], vec!["games"]);
    }

    #[test_case("mailto:someone@example.com"; "mailto")]
    #[test_case("ftp://example.com/file"; "ftp")]
    #[test_case("notes/local.md"; "relative path")]
    #[test_case("#anchor"; "in-page anchor")]
    fn non_web_targets_are_skipped(target: &str) {
        let doc = format!("- [x]({target})");
        assert!(extract_links(&doc).is_empty());
    }

    #[test]
    fn leading_punctuation_is_stripped_from_notes() {
        let doc = "- [x](https://example.com): - worth a read";
        let links = extract_links(doc);
        assert_eq!(links[0].notes.as_deref(), Some("worth a read"));
    }

    #[test]
    fn hashtags_are_removed_from_notes() {
        let doc = "- [x](https://example.com) #a solid #b pick";
        let links = extract_links(doc);
        assert_eq!(links[0].notes.as_deref(), Some("solid pick"));
        assert_eq!(links[0].tags.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn frontmatter_is_skipped() {
        let doc = "\
---
title: [not](https://example.com/not-a-link)
---
- [x](https://example.com/x)
";
        let links = extract_links(doc);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://example.com/x");
    }

    #[test_case("2023-04.md", Some((2023, 4)); "dated file")]
    #[test_case("links.md", None; "undated file")]
    #[test_case("2023-04-extra.md", None; "dated with suffix")]
    fn filenames_yield_mid_month_timestamps(name: &str, expected: Option<(i32, u32)>) {
        let added = added_from_filename(name);
        match expected {
            Some((year, month)) => {
                let added = added.expect("timestamp");
                assert_eq!(
                    added,
                    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()
                );
            }
            None => assert!(added.is_none()),
        }
    }

    #[test]
    fn extracted_link_becomes_record() {
        let doc = "# Tools\n- [rg](https://example.com/rg) #rust";
        let added = added_from_filename("2023-04.md");
        let record = extract_links(doc).remove(0).into_record(added);
        assert_eq!(record.url, "https://example.com/rg");
        assert_eq!(record.title.as_deref(), Some("rg"));
        assert_eq!(record.added, Utc.with_ymd_and_hms(2023, 4, 15, 12, 0, 0).unwrap());
        assert!(record.notes.is_none());
    }
}
