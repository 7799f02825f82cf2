//! Find the pull request that introduced a commit.
//!
//! Resolution looks at local git history first (squash-merge subjects, then
//! verified pull request merge commits) and only then asks GitHub's search
//! API. See [`resolve::Resolver`].

pub mod browser;
pub mod commit;
pub mod config;
pub mod credentials;
pub mod error;
pub mod git;
pub mod github;
pub mod output;
pub mod repository;
pub mod resolve;

#[cfg(test)]
mod testing;

pub use commit::CommitId;
pub use error::{Error, Result};
pub use repository::Repository;
pub use resolve::{Resolution, Resolver};
