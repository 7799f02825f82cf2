use regex::Regex;
use std::sync::LazyLock;

use super::Resolution;
use crate::error::Result;
use crate::git::History;

// Suffix the squash-and-merge button appends to the commit subject
static SQUASH_SUBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(#(\d+)\)$").unwrap());

/// Read the pull request number from the `(#N)` suffix of a squash-merged
/// commit's subject line.
pub fn resolve_squash<H: History + ?Sized>(history: &H, commit: &str) -> Result<Resolution> {
    let subject = history.subject(commit)?;
    Ok(parse_squash_subject(&subject).map_or(Resolution::NotFound, Resolution::Found))
}

/// Pull request number of a `"Title (#N)"` subject
pub fn parse_squash_subject(subject: &str) -> Option<u64> {
    let first_line = subject.lines().next()?;
    let caps = SQUASH_SUBJECT.captures(first_line)?;
    caps[1].parse().ok()
}
