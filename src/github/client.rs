use anyhow::{Context, Result};
use log::debug;
use octocrab::Octocrab;

/// Host of public GitHub, which serves its API from `api.github.com`
pub const GITHUB_HOST: &str = "github.com";

/// API root for a GitHub Enterprise host. `None` for github.com, whose API
/// root is octocrab's default.
pub fn api_base_uri(host: &str, protocol: &str) -> Option<String> {
    if host.eq_ignore_ascii_case(GITHUB_HOST) {
        None
    } else {
        Some(format!("{}://{}/api/v3", protocol, host))
    }
}

/// Create a GitHub client, authenticated with a personal access token when
/// one is given
pub fn create_client(token: Option<&str>, base_uri: Option<&str>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder();

    if let Some(uri) = base_uri {
        debug!("Using GitHub API at {}", uri);
        builder = builder
            .base_uri(uri)
            .with_context(|| format!("Invalid GitHub API URL: {}", uri))?;
    }

    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }

    builder.build().context("Failed to create GitHub client")
}
