use std::fmt;

use crate::error::{Error, Result};

/// Shortest abbreviated hash accepted. Anything shorter is too likely to be
/// ambiguous in a real repository.
pub const MIN_COMMIT_LEN: usize = 7;

/// A commit identifier as typed by the user: a full or abbreviated hash.
///
/// The value is otherwise opaque; it is handed to git and to the search API
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.chars().count() < MIN_COMMIT_LEN {
            return Err(Error::CommitTooShort(value));
        }
        // git would read these as options
        if value.starts_with('-') {
            return Err(Error::CommitLooksLikeOption(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
