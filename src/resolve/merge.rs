use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use super::Resolution;
use crate::error::Result;
use crate::git::{is_ancestor, History, MergeCommitRecord};

// Subject of a merge made by GitHub's "Create a merge commit" button
static MERGE_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Merge pull request #(\d+) from ").unwrap());

/// Find the pull request merge that brought `commit` into the current branch.
///
/// Takes the first merge after `commit` on its ancestry path to `HEAD` whose
/// subject is a pull request merge, then checks that `commit` is really on
/// the merged branch, i.e. an ancestor of the merge's second parent. A
/// matching subject alone can belong to a merge of an unrelated branch.
pub fn resolve_merge<H: History + ?Sized>(history: &H, commit: &str) -> Result<Resolution> {
    let lines = history.merges_since(commit)?;

    let Some(record) = lines
        .iter()
        .filter_map(|line| MergeCommitRecord::parse(line))
        .find(|record| MERGE_SUBJECT.is_match(&record.subject))
    else {
        debug!("No pull request merge after {}", commit);
        return Ok(Resolution::NotFound);
    };

    let Some(number) = parse_merge_subject(&record.subject) else {
        debug!("Unusable pull request number in {:?}", record.subject);
        return Ok(Resolution::NotFound);
    };

    if is_ancestor(history, commit, &record.second_parent) {
        Ok(Resolution::Found(number))
    } else {
        debug!(
            "Merge of #{} does not contain {}: not an ancestor of {}",
            number, commit, record.second_parent
        );
        Ok(Resolution::NotFound)
    }
}

/// Pull request number of a `"Merge pull request #N from owner/branch"` subject
pub fn parse_merge_subject(subject: &str) -> Option<u64> {
    let caps = MERGE_SUBJECT.captures(subject)?;
    caps[1].parse().ok()
}
