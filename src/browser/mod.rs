use anyhow::{Context, Result};
use log::debug;

use crate::repository::Repository;

/// Open pull request `number` of `repository` in the user's default browser
///
/// Returns the URL that was opened.
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_pull_request(repository: &Repository, protocol: &str, number: u64) -> Result<String> {
    let url = repository.pull_request_url(protocol, number);
    debug!("Opening {}", url);
    webbrowser::open(&url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(url)
}
