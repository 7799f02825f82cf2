use log::debug;

use crate::config::Config;
use crate::github::client::GITHUB_HOST;

/// Environment variable name for providing a GitHub token without a config file
pub const ENV_TOKEN_VAR: &str = "WHICHPR_GH_TOKEN";

/// Generic token variables, honored for github.com only
pub const GITHUB_TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Token for `host`, from the first source that has one:
/// 1. `WHICHPR_GH_TOKEN`
/// 2. `GITHUB_TOKEN` / `GH_TOKEN` (github.com only)
/// 3. the host's entry in the config file
pub fn resolve_token(config: &Config, host: &str) -> Option<String> {
    resolve_token_with(config, host, |name| std::env::var(name).ok())
}

/// [`resolve_token`] with an explicit environment lookup
pub fn resolve_token_with<F>(config: &Config, host: &str, env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| {
        env(name)
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
    };

    if let Some(token) = non_empty(ENV_TOKEN_VAR) {
        debug!("Using token from {}", ENV_TOKEN_VAR);
        return Some(token);
    }

    if host.eq_ignore_ascii_case(GITHUB_HOST) {
        for name in GITHUB_TOKEN_VARS {
            if let Some(token) = non_empty(name) {
                debug!("Using token from {}", name);
                return Some(token);
            }
        }
    }

    let token = config.token(host).map(str::to_string);
    if token.is_some() {
        debug!("Using token from config for {}", host);
    }
    token
}
