use thiserror::Error;

use crate::commit::MIN_COMMIT_LEN;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("commit must be at least {min} characters: {0:?}", min = MIN_COMMIT_LEN)]
    CommitTooShort(String),

    #[error("commit must not start with '-': {0:?}")]
    CommitLooksLikeOption(String),

    #[error("Pull Request is not found for {0}")]
    NotFound(String),

    /// git could not be spawned, or exited with a failure status.
    #[error("git {args} failed: {message}")]
    Git { args: String, message: String },

    #[error("{0}")]
    Remote(String),

    #[error("Could not determine repository: {0}")]
    Repository(String),
}

impl Error {
    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::CommitTooShort(_) | Error::CommitLooksLikeOption(_))
    }
}
