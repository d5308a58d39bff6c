//! Subcommand pipelines.
//!
//! Each pipeline is load → reconcile → save, with collaborators at the edges.
//! Collaborator failures (title fetch, archive, commit, issue close) print a
//! warning and the run carries on; only store errors abort.

pub mod add;
pub mod import;
pub mod submissions;

use trove_core::Trove;
use trove_domain::Record;

/// Save the store and, when enabled, commit it. Commit failure is a warning.
pub(crate) fn save_and_commit(
    store: &Trove,
    records: &[Record],
    summary: &str,
    commit: bool,
) -> trove_core::Result<()> {
    store.save(records)?;
    if commit {
        if let Err(err) = trove_git::commit_store(store.path(), summary) {
            tracing::warn!(error = %err, "commit failed");
            println!("Warning: commit failed: {err}");
        }
    }
    Ok(())
}
