use log::debug;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::git::GitCli;

/// Remotes tried first, in this order. Any other remote comes after them in
/// the order git lists it.
pub const PREFERRED_REMOTES: [&str; 3] = ["upstream", "github", "origin"];

static URL_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?|ssh|git|git\+ssh)://(?:[^@/]+@)?([^/:]+)(?::\d+)?/([^/]+)/([^/]+?)(?:\.git)?/?$",
    )
    .unwrap()
});

// scp-like syntax: [user@]host:owner/name
static SCP_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^@/:]+@)?([^:/]+):/?([^/]+)/([^/]+?)(?:\.git)?/?$").unwrap()
});

/// The hosting-service repository behind the local clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse a git remote URL into a repository reference
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();
        let caps = if url.contains("://") {
            URL_REMOTE.captures(url)?
        } else {
            SCP_REMOTE.captures(url)?
        };

        let mut host = caps[1].to_lowercase();
        // GitHub's SSH-over-443 endpoint
        if host == "ssh.github.com" {
            host = "github.com".to_string();
        }

        Some(Self {
            host,
            owner: caps[2].to_string(),
            name: caps[3].to_string(),
        })
    }

    /// Detect the repository from the remotes of the clone `git` runs in
    pub fn detect(git: &GitCli) -> Result<Self> {
        let mut remotes = Vec::new();
        for name in git.remotes()? {
            let url = git.remote_url(&name)?;
            remotes.push((name, url));
        }
        Self::select(&remotes)
    }

    /// Pick the repository from `(name, url)` remote pairs
    pub fn select(remotes: &[(String, String)]) -> Result<Self> {
        if remotes.is_empty() {
            return Err(Error::Repository("no git remote is configured".to_string()));
        }

        let preferred = PREFERRED_REMOTES
            .iter()
            .filter_map(|wanted| remotes.iter().find(|(name, _)| name == wanted));
        let others = remotes
            .iter()
            .filter(|(name, _)| !PREFERRED_REMOTES.contains(&name.as_str()));

        for (name, url) in preferred.chain(others) {
            match Self::from_remote_url(url) {
                Some(repo) => {
                    debug!("Using remote {} ({}) as {}", name, url, repo);
                    return Ok(repo);
                }
                None => debug!("Skipping remote {}: unrecognized URL {}", name, url),
            }
        }

        let urls: Vec<&str> = remotes.iter().map(|(_, url)| url.as_str()).collect();
        Err(Error::Repository(format!(
            "no remote URL names an owner/repository: {}",
            urls.join(", ")
        )))
    }

    /// Web root of the repository, e.g. `https://github.com/owner/name`
    pub fn web_url(&self, protocol: &str) -> String {
        format!("{}://{}/{}/{}", protocol, self.host, self.owner, self.name)
    }

    /// Web page of pull request `number`
    pub fn pull_request_url(&self, protocol: &str, number: u64) -> String {
        format!("{}/pull/{}", self.web_url(protocol), number)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
