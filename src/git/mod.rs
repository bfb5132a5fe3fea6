// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! All git access goes through [`GitRunner`] so the interactive flows can be
//! exercised without a real repository.

pub mod commands;
pub mod refs;
pub mod runner;
pub mod status;

pub use commands::{create_commit, stage_paths};
pub use refs::{
    commits_between, current_branch, remote_branch_exists, remotes, repo_root, short_head,
    CommitSummary,
};
pub use runner::{run_checked, GitOutput, GitRunner, SystemGit};
pub use status::{
    classify, list_changes, list_modified_and_untracked, parse_status, parse_status_line,
    parse_status_z, staged_files, FileChange, StatusCode,
};
