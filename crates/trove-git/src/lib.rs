//! Subprocess collaborators: committing the store to git and draining the
//! GitHub submission queue via `gh`.
//!
//! Argument vectors are built by pure functions so command construction is
//! testable without spawning anything. Failures carry the command line and
//! trimmed stderr; callers downgrade them to warnings.

mod commit;
mod error;
mod issues;

pub use commit::commit_store;
pub use error::GitError;
pub use issues::{Issue, IssueQueue};
