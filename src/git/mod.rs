//! Local git history queries.
//!
//! Resolution only ever asks git three questions, captured by [`History`]:
//! the subject of one commit, the merge commits on the ancestry path from a
//! commit to `HEAD`, and whether an ancestry path exists between two commits.
//! [`GitCli`] answers them by running the `git` executable; tests answer them
//! from a script.

mod cli;
mod record;

pub use cli::GitCli;
pub use record::MergeCommitRecord;

use log::debug;

use crate::error::Result;

/// The history queries resolution depends on.
pub trait History {
    /// Subject line of `commit`.
    ///
    /// Equivalent to `git log --pretty=format:%s -n 1 <commit>`.
    fn subject(&self, commit: &str) -> Result<String>;

    /// Merge commits on the ancestry path from `commit` to `HEAD`, oldest
    /// first, one `"<parent> <parent> <subject>"` line per merge.
    ///
    /// Equivalent to
    /// `git log --merges --pretty=format:"%P %s" --reverse --ancestry-path <commit>..@`.
    fn merges_since(&self, commit: &str) -> Result<Vec<String>>;

    /// Whether `git log --ancestry-path <from>..<to>` lists anything.
    fn has_ancestry_path(&self, from: &str, to: &str) -> Result<bool>;
}

/// Whether `ancestor` is an ancestor of (or the same commit as) `descendant`.
///
/// Never fails: a git error, including an unknown revision on either side,
/// reads as `false`.
pub fn is_ancestor<H: History + ?Sized>(history: &H, ancestor: &str, descendant: &str) -> bool {
    // Same commit, one side abbreviated
    if descendant.starts_with(ancestor) {
        return true;
    }

    match history.has_ancestry_path(ancestor, descendant) {
        Ok(found) => found,
        Err(e) => {
            debug!("Ancestry check {}..{} failed: {}", ancestor, descendant, e);
            false
        }
    }
}
