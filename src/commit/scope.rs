// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scope suggestions: the common set and inference from the branch name.

use crate::config::CommitType;
use lazy_static::lazy_static;
use regex::Regex;

/// Scopes offered when no configuration overrides them.
pub const COMMON_SCOPES: &[&str] = &["api", "ui", "auth", "core", "data", "deps", "config"];

lazy_static! {
    /// `<type>/<segment>` branch names, segment ending at the first hyphen.
    static ref BRANCH_REGEX: Regex = Regex::new(
        r"^(feature|feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)/([^-]+)"
    ).unwrap();

    static ref KEBAB_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

/// Scope suggested by a branch such as `feature/auth-login` (gives `auth`).
pub fn infer_scope_from_branch(branch: &str) -> Option<String> {
    BRANCH_REGEX
        .captures(branch)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
}

/// Commit type suggested by the branch prefix (`feature/...` gives `feat`).
pub fn infer_type_from_branch(branch: &str) -> Option<CommitType> {
    BRANCH_REGEX
        .captures(branch)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether a scope is lower kebab-case.
pub fn is_kebab_case(scope: &str) -> bool {
    KEBAB_REGEX.is_match(scope)
}

/// One entry of the scope menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeOption {
    None,
    Named(String),
    Custom,
}

impl ScopeOption {
    pub fn label(&self, inferred: Option<&str>) -> String {
        match self {
            ScopeOption::None => "(none)".to_string(),
            ScopeOption::Named(name) if Some(name.as_str()) == inferred => {
                format!("{} (from branch)", name)
            }
            ScopeOption::Named(name) => name.clone(),
            ScopeOption::Custom => "custom...".to_string(),
        }
    }
}

/// Build the scope menu and the index to preselect.
///
/// An inferred scope outside the common set is listed right after
/// `(none)`; when present it is the default.
pub fn scope_options(common: &[String], inferred: Option<&str>) -> (Vec<ScopeOption>, usize) {
    let mut options = vec![ScopeOption::None];

    if let Some(scope) = inferred {
        if !common.iter().any(|s| s == scope) {
            options.push(ScopeOption::Named(scope.to_string()));
        }
    }

    options.extend(common.iter().cloned().map(ScopeOption::Named));
    options.push(ScopeOption::Custom);

    let default = inferred
        .and_then(|scope| {
            options
                .iter()
                .position(|o| matches!(o, ScopeOption::Named(n) if n == scope))
        })
        .unwrap_or(0);

    (options, default)
}
