//! Best-effort page-title resolution.

use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ClientError;
use crate::http::HttpClient;

lazy_static! {
    static ref TITLE: Regex = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap();
}

/// How much of a page is read when looking for its title.
const TITLE_PREFIX_BYTES: usize = 64 * 1024;
/// Titles longer than this are truncated.
const MAX_TITLE_LEN: usize = 200;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TitleResolver {
    client: HttpClient,
}

impl TitleResolver {
    pub fn new(user_agent: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: HttpClient::new(user_agent, FETCH_TIMEOUT)?,
        })
    }

    /// Fetch a short text title for `url`. Any failure (network, timeout,
    /// non-success status, missing tag) resolves to `None` with a warning.
    pub async fn resolve(&self, url: &str) -> Option<String> {
        match self.client.get_prefix(url, TITLE_PREFIX_BYTES).await {
            Ok((status, body)) if (200..300).contains(&status) => {
                let title = extract_title(&body);
                if title.is_none() {
                    tracing::debug!(url, "no <title> in page prefix");
                }
                title
            }
            Ok((status, _)) => {
                tracing::warn!(url, status, "title fetch returned non-success status");
                None
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "title fetch failed");
                None
            }
        }
    }
}

/// Pull the contents of the first `<title>` element out of an HTML prefix.
pub fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE.captures(html)?.get(1)?.as_str();
    let decoded = decode_entities(raw);
    let collapsed = collapse_whitespace(decoded.trim());
    if collapsed.is_empty() {
        return None;
    }
    Some(truncate(&collapsed, MAX_TITLE_LEN))
}

/// Decode the handful of entities that commonly appear in titles. `&amp;`
/// last, so `&amp;lt;` stays `&lt;`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }
    result
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_is_extracted() {
        assert_eq!(
            extract_title("<html><head><title>ripgrep</title></head>"),
            Some("ripgrep".to_string())
        );
    }

    #[test]
    fn title_attributes_and_case_are_tolerated() {
        assert_eq!(
            extract_title("<TITLE lang=\"en\">Hello</TITLE>"),
            Some("Hello".to_string())
        );
    }

    #[test]
    fn multiline_titles_collapse_to_one_line() {
        assert_eq!(
            extract_title("<title>\n  Hello\n  World\n</title>"),
            Some("Hello World".to_string())
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            extract_title("<title>Q &amp; A &#39;22</title>"),
            Some("Q & A '22".to_string())
        );
    }

    #[test]
    fn missing_or_empty_title_is_none() {
        assert_eq!(extract_title("<html><body>no head</body>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[test]
    fn very_long_titles_are_truncated() {
        let html = format!("<title>{}</title>", "x".repeat(500));
        assert_eq!(extract_title(&html).unwrap().len(), MAX_TITLE_LEN);
    }
}
