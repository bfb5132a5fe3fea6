// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the gwk tools.
//!
//! Every error is terminal for the current invocation: the binaries print it
//! and exit with code 1. Nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gwk operations.
#[derive(Error, Debug)]
pub enum GwkError {
    // Selection errors
    #[error("No files selected")]
    EmptySelection,

    #[error("No files match {filter}")]
    NoMatch { filter: String },

    // Commit preconditions
    #[error("No staged files. Stage changes first (gwk-stage or git add)")]
    NoStagedFiles,

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,
}

impl From<dialoguer::Error> for GwkError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            // Ctrl-C while a prompt is reading input.
            dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
                GwkError::Cancelled
            }
            err => GwkError::Ui(err.to_string()),
        }
    }
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to run git: {message}")]
    Spawn { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Failed to stage files: {message}")]
    StagingFailed { message: String },

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },

    #[error("Push failed")]
    PushFailed { output: String },

    #[error("Detached HEAD state")]
    DetachedHead,

    #[error("No remotes configured")]
    NoRemotes,
}

/// Commit field validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Subject is required")]
    EmptySubject,

    #[error("Subject must start with an uppercase letter")]
    SubjectNotCapitalized,

    #[error("Subject must not end with a period")]
    SubjectTrailingPeriod,

    #[error("Breaking change description is required")]
    EmptyBreaking,

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for gwk operations.
pub type Result<T> = std::result::Result<T, GwkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/gwk.toml"),
        };
        assert!(err.to_string().contains("/path/to/gwk.toml"));
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: GwkError = ValidationError::SubjectNotCapitalized.into();
        assert!(err.to_string().contains("uppercase"));
    }

    #[test]
    fn test_git_error_wraps() {
        let err: GwkError = GitError::StagingFailed {
            message: "index.lock exists".to_string(),
        }
        .into();
        assert!(err.to_string().contains("index.lock"));
    }

    #[test]
    fn test_interrupted_prompt_is_cancel() {
        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "read interrupted");
        let err: GwkError = dialoguer::Error::from(io).into();
        assert!(matches!(err, GwkError::Cancelled));
    }

    #[test]
    fn test_other_prompt_errors_stay_ui() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "not a terminal");
        let err: GwkError = dialoguer::Error::from(io).into();
        assert!(matches!(err, GwkError::Ui(ref m) if m.contains("not a terminal")));
    }

    #[test]
    fn test_no_match_names_filter() {
        let err = GwkError::NoMatch {
            filter: "pattern '^docs/'".to_string(),
        };
        assert_eq!(err.to_string(), "No files match pattern '^docs/'");
    }
}
