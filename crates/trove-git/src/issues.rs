//! The GitHub submission queue, driven through the `gh` CLI.

use std::process::Command;

use serde::Deserialize;

use crate::error::GitError;

/// One open submission item: an identifier and a free-text body.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub body: String,
}

/// The open-issue queue for a label.
pub struct IssueQueue {
    label: String,
}

impl IssueQueue {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Open items carrying the queue label.
    pub fn list_open(&self) -> Result<Vec<Issue>, GitError> {
        let args = self.list_args();
        let (command, stdout) = run_gh(&args)?;
        serde_json::from_slice(&stdout).map_err(|source| GitError::Decode { command, source })
    }

    /// Close/acknowledge an item by number.
    pub fn close(&self, number: u64) -> Result<(), GitError> {
        run_gh(&close_args(number))?;
        tracing::debug!(number, "closed submission issue");
        Ok(())
    }

    fn list_args(&self) -> Vec<String> {
        vec![
            "issue".to_string(),
            "list".to_string(),
            "--label".to_string(),
            self.label.clone(),
            "--state".to_string(),
            "open".to_string(),
            "--json".to_string(),
            "number,body".to_string(),
        ]
    }
}

fn close_args(number: u64) -> Vec<String> {
    vec![
        "issue".to_string(),
        "close".to_string(),
        number.to_string(),
    ]
}

fn run_gh(args: &[String]) -> Result<(String, Vec<u8>), GitError> {
    let command = format!("gh {}", args.join(" "));
    let output = Command::new("gh")
        .args(args)
        .output()
        .map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;
    if !output.status.success() {
        return Err(GitError::Failed {
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok((command, output.stdout))
}
