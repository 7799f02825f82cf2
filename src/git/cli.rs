use log::debug;
use std::path::PathBuf;
use std::process::Command;

use super::History;
use crate::error::{Error, Result};

/// Runs the `git` executable, optionally inside a given working directory.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }

    /// Names of the configured remotes, in the order git lists them
    pub fn remotes(&self) -> Result<Vec<String>> {
        let out = self.run(&["remote"])?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Fetch URL of the remote called `name`
    pub fn remote_url(&self, name: &str) -> Result<String> {
        let out = self.run(&["remote", "get-url", name])?;
        Ok(out.trim().to_string())
    }

    /// Run git with `args` and return its stdout.
    ///
    /// A non-zero exit status is an error carrying git's stderr.
    fn run(&self, args: &[&str]) -> Result<String> {
        let joined = args.join(" ");
        debug!("Running: git {}", joined);

        let mut command = Command::new("git");
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }
        let output = command.args(args).output().map_err(|e| Error::Git {
            args: joined.clone(),
            message: format!("could not run git: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                msg => msg.to_string(),
            };
            return Err(Error::Git {
                args: joined,
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl History for GitCli {
    fn subject(&self, commit: &str) -> Result<String> {
        let out = self.run(&["log", "--pretty=format:%s", "-n", "1", commit])?;
        Ok(out.lines().next().unwrap_or_default().to_string())
    }

    fn merges_since(&self, commit: &str) -> Result<Vec<String>> {
        let range = format!("{}..@", commit);
        let out = self.run(&[
            "log",
            "--merges",
            "--pretty=format:%P %s",
            "--reverse",
            "--ancestry-path",
            &range,
        ])?;
        Ok(out
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn has_ancestry_path(&self, from: &str, to: &str) -> Result<bool> {
        let range = format!("{}..{}", from, to);
        let out = self.run(&["log", "--ancestry-path", &range])?;
        Ok(!out.trim().is_empty())
    }
}
