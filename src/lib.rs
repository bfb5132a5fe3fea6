// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gwk - Guided git workflow
//!
//! Three small interactive tools that share this library:
//!
//! - **gwk-stage**: pick working-tree changes (all, individually, by
//!   extension, or by pattern) and stage them in one batch
//! - **gwk-commit**: compose a conventional commit with live preview and
//!   lint feedback
//! - **gwk-push**: push the current branch to a chosen remote, showing the
//!   commits that will go out
//!
//! # Example
//!
//! ```
//! use gwk::commit::{compose_message, CommitDraft};
//! use gwk::config::CommitType;
//!
//! let draft = CommitDraft::new(CommitType::Feat, "Add login flow").with_scope("auth");
//!
//! assert_eq!(compose_message(&draft), "feat(auth): Add login flow");
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod push;
pub mod stage;
pub mod ui;

// Re-exports for convenience
pub use config::GwkConfig;
pub use error::{GwkError, Result};

/// Build stamp embedded at compile time.
pub mod version {
    /// Crate version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Full commit hash, when built from a git checkout.
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// `git describe --dirty --tags` output, when available.
    pub const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");

    /// Commit date, when available.
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Version plus whatever build stamp is known, e.g. `1.0.0 (v1.0.0-3-gabc1234 2024-05-01)`.
    pub fn version_string() -> String {
        let revision = stamp(GIT_DESCRIBE).or(stamp(GIT_SHA).map(short_sha));
        format_version(VERSION, revision, stamp(GIT_COMMIT_DATE))
    }

    /// vergen writes a placeholder when the build is not in a git checkout.
    fn stamp(value: Option<&'static str>) -> Option<&'static str> {
        value.filter(|v| !v.is_empty() && *v != "VERGEN_IDEMPOTENT_OUTPUT")
    }

    fn short_sha(sha: &str) -> &str {
        &sha[..7.min(sha.len())]
    }

    fn format_version(version: &str, revision: Option<&str>, date: Option<&str>) -> String {
        match (revision, date) {
            (Some(rev), Some(date)) => format!("{} ({} {})", version, rev, date),
            (Some(rev), None) => format!("{} ({})", version, rev),
            _ => version.to_string(),
        }
    }

}
