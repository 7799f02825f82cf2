use async_trait::async_trait;
use log::{debug, warn};
use octocrab::Octocrab;

use super::PullRequestSearch;
use crate::credentials::ENV_TOKEN_VAR;
use crate::error::{Error, Result};

/// [`PullRequestSearch`] backed by GitHub's issue search endpoint.
#[derive(Clone)]
pub struct OctocrabSearch {
    client: Octocrab,
    authenticated: bool,
}

impl OctocrabSearch {
    /// `authenticated` says whether `client` carries a token; searches made
    /// without one warn that private repositories will not be found.
    pub fn new(client: Octocrab, authenticated: bool) -> Self {
        Self {
            client,
            authenticated,
        }
    }
}

#[async_trait]
impl PullRequestSearch for OctocrabSearch {
    async fn search_issues(&self, query: &str) -> Result<Vec<u64>> {
        if !self.authenticated {
            warn!(
                "No GitHub token; searching unauthenticated. Set {} or add it to the config file.",
                ENV_TOKEN_VAR
            );
        }
        debug!("Searching issues: {}", query);

        let page = self
            .client
            .search()
            .issues_and_pull_requests(query)
            .send()
            .await
            .map_err(|e| Error::Remote(describe_error(&e)))?;

        let numbers: Vec<u64> = page.items.into_iter().map(|issue| issue.number).collect();
        debug!("Search returned {} results", numbers.len());
        Ok(numbers)
    }
}

/// Turn an octocrab error into a message a user can act on
fn describe_error(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            describe_status(source.status_code.as_u16(), &source.message)
        }
        other => format!("GitHub API error: {}", other),
    }
}

/// Message for an error response with HTTP `status` and GitHub's `message`
fn describe_status(status: u16, message: &str) -> String {
    let lowered = message.to_lowercase();
    match status {
        401 => "Authentication failed. Your GitHub token may be invalid or expired.".to_string(),
        403 | 429 if lowered.contains("rate limit") => {
            "GitHub API rate limit exceeded. Wait a few minutes and try again.".to_string()
        }
        403 => format!("Access forbidden by GitHub: {}", message),
        404 | 422
            if lowered.contains("do not have permission")
                || lowered.contains("resources do not exist") =>
        {
            "Repository not found or no access. Check repo name and token permissions (needs 'repo' scope for private repos).".to_string()
        }
        _ => format!("GitHub API error ({}): {}", status, message),
    }
}
