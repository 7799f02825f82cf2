use serde::Deserialize;
use std::collections::BTreeMap;

/// Protocol used when a host entry does not name one
pub const DEFAULT_PROTOCOL: &str = "https";

/// Host credentials, keyed by host name:
///
/// ```yaml
/// github.com:
/// - user: octocat
///   oauth_token: ghp_xxx
///   protocol: https
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub hosts: BTreeMap<String, Vec<HostConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfig {
    pub user: Option<String>,
    pub oauth_token: Option<String>,
    pub protocol: Option<String>,
}

impl Config {
    /// First entry configured for `host` (host names compare case-insensitively)
    pub fn host(&self, host: &str) -> Option<&HostConfig> {
        self.hosts
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(host))
            .and_then(|(_, entries)| entries.first())
    }

    /// Configured token for `host`, if any
    pub fn token(&self, host: &str) -> Option<&str> {
        self.host(host)
            .and_then(|entry| entry.oauth_token.as_deref())
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Web/API protocol for `host`
    pub fn protocol(&self, host: &str) -> &str {
        self.host(host)
            .and_then(|entry| entry.protocol.as_deref())
            .unwrap_or(DEFAULT_PROTOCOL)
    }
}
