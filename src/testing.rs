//! In-memory stand-ins for git and the search API.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::git::History;
use crate::github::PullRequestSearch;

/// A [`History`] answering from scripted data and recording every query.
#[derive(Debug, Default)]
pub struct ScriptedHistory {
    subjects: HashMap<String, String>,
    merges: HashMap<String, Vec<String>>,
    ancestry: HashSet<(String, String)>,
    unknown: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, commit: &str, subject: &str) -> Self {
        self.subjects.insert(commit.to_string(), subject.to_string());
        self
    }

    pub fn with_merges(mut self, commit: &str, lines: &[&str]) -> Self {
        self.merges.insert(
            commit.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    /// `from..to` has a non-empty ancestry path
    pub fn with_ancestry(mut self, from: &str, to: &str) -> Self {
        self.ancestry.insert((from.to_string(), to.to_string()));
        self
    }

    /// Every query mentioning `commit` fails like git does for a bad revision
    pub fn with_unknown_revision(mut self, commit: &str) -> Self {
        self.unknown.insert(commit.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn check_known(&self, args: &str, commits: &[&str]) -> Result<()> {
        match commits.iter().find(|c| self.unknown.contains(**c)) {
            Some(bad) => Err(Error::Git {
                args: args.to_string(),
                message: format!("fatal: bad revision '{}'", bad),
            }),
            None => Ok(()),
        }
    }
}

impl History for ScriptedHistory {
    fn subject(&self, commit: &str) -> Result<String> {
        let args = format!("log --pretty=format:%s -n 1 {}", commit);
        self.record(args.clone());
        self.check_known(&args, &[commit])?;
        self.subjects.get(commit).cloned().ok_or_else(|| Error::Git {
            args,
            message: format!("fatal: ambiguous argument '{}': unknown revision", commit),
        })
    }

    fn merges_since(&self, commit: &str) -> Result<Vec<String>> {
        let args = format!("log --merges --ancestry-path {}..@", commit);
        self.record(args.clone());
        self.check_known(&args, &[commit])?;
        Ok(self.merges.get(commit).cloned().unwrap_or_default())
    }

    fn has_ancestry_path(&self, from: &str, to: &str) -> Result<bool> {
        let args = format!("log --ancestry-path {}..{}", from, to);
        self.record(args.clone());
        self.check_known(&args, &[from, to])?;
        Ok(self.ancestry.contains(&(from.to_string(), to.to_string())))
    }
}

/// A [`PullRequestSearch`] returning canned results.
#[derive(Debug)]
pub struct FakeSearch {
    response: std::result::Result<Vec<u64>, String>,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn returning(numbers: &[u64]) -> Self {
        Self {
            response: Ok(numbers.to_vec()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestSearch for FakeSearch {
    async fn search_issues(&self, query: &str) -> Result<Vec<u64>> {
        self.queries.lock().unwrap().push(query.to_string());
        self.response.clone().map_err(Error::Remote)
    }
}
