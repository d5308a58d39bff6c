//! CLI configuration.
//!
//! Read from `<config dir>/trove/config.toml` when present. Every key has a
//! default, so the file is optional and may be partial.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSONL store file.
    pub store_path: PathBuf,
    /// Issue label marking queue submissions.
    pub submission_label: String,
    /// Snapshot endpoint the archive notifier prepends to URLs.
    pub archive_endpoint: String,
    /// User agent for outbound requests.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("trove.jsonl"),
            submission_label: "submission".to_string(),
            archive_endpoint: trove_client::DEFAULT_ARCHIVE_ENDPOINT.to_string(),
            user_agent: concat!("trove/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load the config file when present, defaults otherwise.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match Self::path() {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(&path)?;
                Ok(toml::from_str(&text)?)
            }
            _ => Ok(Self::default()),
        }
    }

    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trove").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str("store_path = \"/data/links.jsonl\"").unwrap();
        assert_eq!(config.store_path, PathBuf::from("/data/links.jsonl"));
        assert_eq!(config.submission_label, "submission");
        assert_eq!(config.archive_endpoint, "https://web.archive.org/save/");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.store_path, PathBuf::from("trove.jsonl"));
        assert!(config.user_agent.starts_with("trove/"));
    }
}
