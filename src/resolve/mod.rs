//! Commit to pull request resolution.
//!
//! Three strategies are tried in order, each exactly once:
//! 1. Squash - the commit subject ends in `(#N)`
//! 2. Merge - a verified `Merge pull request #N` merge brought the commit in
//! 3. Search - GitHub's issue search for merged PRs mentioning the commit
//!
//! The two local strategies answer [`Resolution::NotFound`] or fail with a git
//! error; either way the next strategy runs. The search is the last resort, so
//! its result or error is the final answer.

mod merge;
mod search;
mod squash;

pub use merge::{parse_merge_subject, resolve_merge};
pub use search::{merged_pr_query, search_merged_pr};
pub use squash::{parse_squash_subject, resolve_squash};

use log::debug;

use crate::commit::CommitId;
use crate::error::Result;
use crate::git::History;
use crate::github::PullRequestSearch;
use crate::repository::Repository;

/// Outcome of a single local strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(u64),
    NotFound,
}

/// Resolves commits of one repository to pull request numbers.
pub struct Resolver<H, S> {
    history: H,
    search: S,
    repository: Repository,
}

impl<H: History, S: PullRequestSearch> Resolver<H, S> {
    pub fn new(history: H, search: S, repository: Repository) -> Self {
        Self {
            history,
            search,
            repository,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Number of the pull request that introduced `commit`.
    ///
    /// Fails with an invalid-input error before touching git when `commit`
    /// is shorter than seven characters.
    pub async fn resolve(&self, commit: &str) -> Result<u64> {
        let commit = CommitId::new(commit)?;
        let commit = commit.as_str();

        match resolve_squash(&self.history, commit) {
            Ok(Resolution::Found(number)) => {
                debug!("{} is squash merge of #{}", commit, number);
                return Ok(number);
            }
            Ok(Resolution::NotFound) => debug!("{} has no squash marker", commit),
            Err(e) => debug!("Squash lookup for {} failed: {}", commit, e),
        }

        match resolve_merge(&self.history, commit) {
            Ok(Resolution::Found(number)) => {
                debug!("{} was merged by #{}", commit, number);
                return Ok(number);
            }
            Ok(Resolution::NotFound) => debug!("No verified merge for {}", commit),
            Err(e) => debug!("Merge lookup for {} failed: {}", commit, e),
        }

        search_merged_pr(&self.search, commit, &self.repository).await
    }
}
