// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Branch, remote, and history queries.

use crate::error::{GitError, GwkError, Result};
use std::path::PathBuf;

use super::runner::{run_checked, GitRunner};

/// A commit as listed by `git log --oneline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Abbreviated hash.
    pub sha: String,
    /// First line of the message.
    pub subject: String,
}

/// Top-level directory of the working tree.
pub fn repo_root(git: &dyn GitRunner) -> Result<PathBuf> {
    match run_checked(git, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(output.trim())),
        Err(GwkError::Git(GitError::CommandFailed { message, .. })) => {
            tracing::debug!("rev-parse --show-toplevel failed: {}", message);
            Err(GitError::NotARepository.into())
        }
        Err(e) => Err(e),
    }
}

/// Get the current branch name. Detached HEAD is an error.
pub fn current_branch(git: &dyn GitRunner) -> Result<String> {
    let output = run_checked(git, &["branch", "--show-current"])?;
    let name = output.trim();

    if name.is_empty() {
        Err(GitError::DetachedHead.into())
    } else {
        Ok(name.to_string())
    }
}

/// List configured remotes.
pub fn remotes(git: &dyn GitRunner) -> Result<Vec<String>> {
    let output = run_checked(git, &["remote"])?;
    Ok(output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Whether `<remote>/<branch>` is known locally.
pub fn remote_branch_exists(git: &dyn GitRunner, remote: &str, branch: &str) -> Result<bool> {
    let reference = format!("refs/remotes/{}/{}", remote, branch);
    let output = git.run(&["rev-parse", "--verify", "--quiet", &reference])?;
    Ok(output.success())
}

/// Commits reachable from `to` but not from `from`.
pub fn commits_between(git: &dyn GitRunner, from: &str, to: &str) -> Result<Vec<CommitSummary>> {
    let range = format!("{}..{}", from, to);
    let output = run_checked(git, &["log", "--oneline", &range])?;
    Ok(output.lines().filter_map(parse_oneline).collect())
}

/// Abbreviated hash of HEAD.
pub fn short_head(git: &dyn GitRunner) -> Result<String> {
    let output = run_checked(git, &["rev-parse", "--short", "HEAD"])?;
    Ok(output.trim().to_string())
}

fn parse_oneline(line: &str) -> Option<CommitSummary> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (sha, subject) = line.split_once(' ').unwrap_or((line, ""));
    Some(CommitSummary {
        sha: sha.to_string(),
        subject: subject.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::fake::FakeGit;
    use crate::git::GitOutput;

    #[test]
    fn test_repo_root() {
        let git = FakeGit::new().with("rev-parse --show-toplevel", "/work/site\n");
        assert_eq!(repo_root(&git).unwrap(), PathBuf::from("/work/site"));
    }

    #[test]
    fn test_repo_root_outside_repository() {
        let git = FakeGit::new().with_output(
            "rev-parse --show-toplevel",
            GitOutput::failed(128, "fatal: not a git repository"),
        );
        assert!(matches!(
            repo_root(&git),
            Err(GwkError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_current_branch() {
        let git = FakeGit::new().with("branch --show-current", "feature/auth-login\n");
        assert_eq!(current_branch(&git).unwrap(), "feature/auth-login");
    }

    #[test]
    fn test_current_branch_detached() {
        let git = FakeGit::new().with("branch --show-current", "\n");
        assert!(matches!(
            current_branch(&git),
            Err(GwkError::Git(GitError::DetachedHead))
        ));
    }

    #[test]
    fn test_remotes() {
        let git = FakeGit::new().with("remote", "origin\nupstream\n");
        assert_eq!(remotes(&git).unwrap(), vec!["origin", "upstream"]);
    }

    #[test]
    fn test_remote_branch_missing_is_not_error() {
        let git = FakeGit::new().with_output(
            "rev-parse --verify --quiet refs/remotes/origin/topic",
            GitOutput::failed(1, ""),
        );
        assert!(!remote_branch_exists(&git, "origin", "topic").unwrap());
    }

    #[test]
    fn test_commits_between() {
        let git = FakeGit::new().with(
            "log --oneline origin/main..main",
            "abc1234 Add thing\ndef5678 Fix other thing\n",
        );
        let commits = commits_between(&git, "origin/main", "main").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, "abc1234");
        assert_eq!(commits[1].subject, "Fix other thing");
    }
}
