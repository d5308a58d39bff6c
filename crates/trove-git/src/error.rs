//! Error type for subprocess collaborators

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with failure: {stderr}")]
    Failed { command: String, stderr: String },

    #[error("could not decode {command} output: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}
