use regex::Regex;
use std::sync::LazyLock;

// Exactly two parents; octopus merges never parse
static MERGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-f]+) ([0-9a-f]+)(?: (.*))?$").unwrap());

/// One line of merge history: the merged branch tip and the merge's subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCommitRecord {
    /// Tip of the branch that was merged in
    pub second_parent: String,
    pub subject: String,
}

impl MergeCommitRecord {
    /// Parse a `"%P %s"` line. Returns `None` unless the line starts with
    /// exactly two parent hashes.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = MERGE_LINE.captures(line.trim_end_matches('\r'))?;
        Some(Self {
            second_parent: caps[2].to_string(),
            subject: caps.get(3).map_or("", |m| m.as_str()).to_string(),
        })
    }
}
