// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from gwk.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for gwk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GwkConfig {
    /// Commit composer configuration.
    pub commit: CommitConfig,

    /// Pusher configuration.
    pub push: PushConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl GwkConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Commit types offered by the composer, in configured order.
    ///
    /// Unknown names are skipped; an empty result falls back to all types.
    pub fn commit_types(&self) -> Vec<CommitType> {
        let types: Vec<CommitType> = self
            .commit
            .types
            .iter()
            .filter_map(|t| t.parse().ok())
            .collect();

        if types.is_empty() {
            CommitType::all().to_vec()
        } else {
            types
        }
    }
}

/// Commit composer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Commit types offered in the type prompt.
    pub types: Vec<String>,

    /// Scopes offered in the scope prompt.
    pub common_scopes: Vec<String>,

    /// Maximum body line length checked by the lint pass.
    pub max_body_line_length: usize,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            types: CommitType::all()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            common_scopes: crate::commit::COMMON_SCOPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_body_line_length: 100,
        }
    }
}

/// Pusher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Remote selected by default when it exists.
    pub preferred_remote: String,

    /// Spinner repaint interval in milliseconds.
    pub spinner_interval_ms: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            preferred_remote: "origin".to_string(),
            spinner_interval_ms: 80,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Conventional commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Code style changes (formatting, whitespace)",
            CommitType::Refactor => "Code refactoring (no feature/fix)",
            CommitType::Perf => "Performance improvements",
            CommitType::Test => "Adding or updating tests",
            CommitType::Build => "Build system or dependency changes",
            CommitType::Ci => "CI configuration changes",
            CommitType::Chore => "Other changes that don't modify src or test files",
            CommitType::Revert => "Reverting a previous commit",
        }
    }

    /// Get all commit types.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" | "feature" => Ok(CommitType::Feat),
            "fix" => Ok(CommitType::Fix),
            "docs" => Ok(CommitType::Docs),
            "style" => Ok(CommitType::Style),
            "refactor" => Ok(CommitType::Refactor),
            "perf" => Ok(CommitType::Perf),
            "test" => Ok(CommitType::Test),
            "build" => Ok(CommitType::Build),
            "ci" => Ok(CommitType::Ci),
            "chore" => Ok(CommitType::Chore),
            "revert" => Ok(CommitType::Revert),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
