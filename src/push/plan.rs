// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Push plan and outstanding-commit detection.

use crate::error::Result;
use crate::git::{self, CommitSummary, GitRunner};

/// What will be pushed where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPlan {
    /// Remote name.
    pub remote: String,
    /// Local branch being pushed.
    pub local_branch: String,
    /// Branch name on the remote.
    pub remote_branch: String,
    /// Whether to overwrite remote history.
    pub force: bool,
    /// Whether to record the remote branch as upstream.
    pub set_upstream: bool,
}

impl PushPlan {
    /// Plan pushing `branch` to the same name on `remote`.
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        Self {
            remote: remote.into(),
            remote_branch: branch.clone(),
            local_branch: branch,
            force: false,
            set_upstream: false,
        }
    }

    /// `<remote>/<remote_branch>`
    pub fn target(&self) -> String {
        format!("{}/{}", self.remote, self.remote_branch)
    }

    /// Arguments for `git`, refspec spelled out so remapping works.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["push".to_string(), "--progress".to_string()];
        if self.force {
            args.push("--force".to_string());
        }
        if self.set_upstream {
            args.push("--set-upstream".to_string());
        }
        args.push(self.remote.clone());
        args.push(format!("{}:{}", self.local_branch, self.remote_branch));
        args
    }
}

/// Remote to preselect: `preferred` when configured, else the first one.
pub fn default_remote_index(remotes: &[String], preferred: &str) -> usize {
    remotes.iter().position(|r| r == preferred).unwrap_or(0)
}

/// Commits the remote does not have yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outstanding {
    /// The remote branch does not exist; everything is new.
    NewBranch,
    /// Commits reachable from the local branch but not the remote one.
    Commits(Vec<CommitSummary>),
}

impl Outstanding {
    /// Whether pushing would transfer nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Outstanding::Commits(c) if c.is_empty())
    }
}

/// Work out what the remote is missing for this plan.
pub fn outstanding(git: &dyn GitRunner, plan: &PushPlan) -> Result<Outstanding> {
    if !git::remote_branch_exists(git, &plan.remote, &plan.remote_branch)? {
        return Ok(Outstanding::NewBranch);
    }

    let commits = git::commits_between(git, &plan.target(), &plan.local_branch)?;
    Ok(Outstanding::Commits(commits))
}
