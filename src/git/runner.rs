// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The narrow capability every tool uses to talk to git.

use crate::error::{GitError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Process exit code (-1 when terminated by a signal).
    pub status: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl GitOutput {
    /// Build a successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Build a failed output with the given exit code and stderr.
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !out.is_empty() && !self.stderr.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&self.stderr);
        out
    }

    /// The most useful error text: stderr, falling back to stdout.
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs git with a list of arguments.
///
/// Arguments are passed straight to the process, never through a shell.
pub trait GitRunner {
    /// Run git and capture its output. A non-zero exit is not an error here;
    /// only failing to start the process is.
    fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

/// Runs the system `git` binary.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in a specific directory.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        tracing::debug!("git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| GitError::Spawn {
            message: e.to_string(),
        })?;

        let result = GitOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!("git {} exited with {}", args[0], result.status);
        Ok(result)
    }
}

/// Run git and return stdout, turning a non-zero exit into `CommandFailed`.
pub fn run_checked(git: &dyn GitRunner, args: &[&str]) -> Result<String> {
    let output = git.run(args)?;
    if output.success() {
        Ok(output.stdout)
    } else {
        Err(GitError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            message: output.error_text(),
        }
        .into())
    }
}
