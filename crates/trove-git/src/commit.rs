//! Committing the store file.

use std::path::Path;
use std::process::Command;

use crate::error::GitError;

/// Stage the store file and commit it with `summary`, running git in the
/// store's parent directory.
pub fn commit_store(store: &Path, summary: &str) -> Result<(), GitError> {
    let dir = store
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    run_git(dir, &add_args(store))?;
    run_git(dir, &commit_args(summary))?;
    tracing::debug!(store = %store.display(), "committed store");
    Ok(())
}

/// `git add` arguments for the store file.
fn add_args(store: &Path) -> Vec<String> {
    vec!["add".to_string(), store.display().to_string()]
}

/// `git commit` arguments for a human-readable summary.
fn commit_args(summary: &str) -> Vec<String> {
    vec!["commit".to_string(), "-m".to_string(), summary.to_string()]
}

fn run_git(dir: &Path, args: &[String]) -> Result<(), GitError> {
    let command = format!("git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
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
    Ok(())
}
