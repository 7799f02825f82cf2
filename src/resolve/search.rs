use crate::error::{Error, Result};
use crate::github::PullRequestSearch;
use crate::repository::Repository;

/// Search query for merged pull requests mentioning `commit` in `repository`
pub fn merged_pr_query(commit: &str, repository: &Repository) -> String {
    format!("{} is:merged repo:{}", commit, repository)
}

/// Ask the hosting service for a merged pull request mentioning `commit`.
///
/// The first result wins; results are used in the order the service returns
/// them.
pub async fn search_merged_pr<S: PullRequestSearch + ?Sized>(
    search: &S,
    commit: &str,
    repository: &Repository,
) -> Result<u64> {
    let query = merged_pr_query(commit, repository);
    let numbers = search.search_issues(&query).await?;
    numbers
        .first()
        .copied()
        .ok_or_else(|| Error::NotFound(commit.to_string()))
}
