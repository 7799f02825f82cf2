mod schema;

pub use schema::{Config, HostConfig, DEFAULT_PROTOCOL};

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Get the default config file path (~/.config/whichpr)
pub fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("whichpr"))
}

/// Load host configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/whichpr)
///
/// A missing or empty file yields an empty configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        debug!("No config file at {}", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    if config_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    debug!("Loaded config for {} hosts from {}", config.hosts.len(), config_path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let path = env::temp_dir().join("whichpr_test_missing.yaml");
        let _ = fs::remove_file(&path);

        let config = load_config(Some(path)).unwrap();
        assert!(config.hosts.is_empty());
    }

    #[test]
    fn test_load_empty_file_returns_empty() {
        let path = write_temp("whichpr_test_empty.yaml", "\n");
        let config = load_config(Some(path.clone())).unwrap();
        assert!(config.hosts.is_empty());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_hub_style_config() {
        let path = write_temp(
            "whichpr_test_hosts.yaml",
            "github.com:\n- user: octocat\n  oauth_token: ghp_secret\n  protocol: https\nghe.example.com:\n- user: me\n  oauth_token: ghe_token\n  protocol: http\n",
        );
        let config = load_config(Some(path.clone())).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.hosts.len(), 2);
        assert_eq!(config.token("github.com"), Some("ghp_secret"));
        assert_eq!(config.token("GHE.example.com"), Some("ghe_token"));
        assert_eq!(config.protocol("ghe.example.com"), "http");
        assert_eq!(
            config.host("github.com").and_then(|h| h.user.as_deref()),
            Some("octocat")
        );
    }

    #[test]
    fn test_defaults_for_unknown_host() {
        let config = Config::default();
        assert_eq!(config.token("github.com"), None);
        assert_eq!(config.protocol("github.com"), DEFAULT_PROTOCOL);
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let path = write_temp(
            "whichpr_test_blank_token.yaml",
            "github.com:\n- user: octocat\n  oauth_token: \"  \"\n",
        );
        let config = load_config(Some(path.clone())).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.token("github.com"), None);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = write_temp("whichpr_test_invalid.yaml", "github.com: [unclosed\n");
        let err = load_config(Some(path.clone())).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(err.to_string().contains("invalid YAML"));
    }
}
