// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for staging and committing.

use crate::error::{GitError, Result};

use super::runner::GitRunner;

/// Stage the given paths with a single `git add` call.
pub fn stage_paths(git: &dyn GitRunner, paths: &[String]) -> Result<()> {
    let mut args = vec!["add", "--"];
    args.extend(paths.iter().map(String::as_str));

    let output = git.run(&args)?;
    if !output.success() {
        return Err(GitError::StagingFailed {
            message: output.error_text(),
        }
        .into());
    }

    tracing::debug!("Staged {} path(s)", paths.len());
    Ok(())
}

/// Create a commit with the given message.
pub fn create_commit(git: &dyn GitRunner, message: &str) -> Result<()> {
    let output = git.run(&["commit", "-m", message])?;
    if !output.success() {
        return Err(GitError::CommitFailed {
            message: output.error_text(),
        }
        .into());
    }

    Ok(())
}
