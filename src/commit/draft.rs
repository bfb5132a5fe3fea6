// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit draft and message formatting.

use crate::config::CommitType;
use crate::error::ValidationError;

use super::validate::validate_subject;

/// The answers collected by the composer, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    /// Commit type (feat, fix, etc.).
    pub commit_type: CommitType,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Optional body.
    pub body: Option<String>,
    /// Optional breaking-change description.
    pub breaking: Option<String>,
    /// Optional issue references (e.g. `Closes #12`).
    pub issues: Option<String>,
}

impl CommitDraft {
    pub fn new(commit_type: CommitType, subject: impl Into<String>) -> Self {
        Self {
            commit_type,
            scope: None,
            subject: subject.into(),
            body: None,
            breaking: None,
            issues: None,
        }
    }

    /// Set the scope. Blank values clear it.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = non_blank(scope.into());
        self
    }

    /// Set the body. Blank values clear it.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = non_blank(body.into());
        self
    }

    /// Set the breaking-change note. Blank values clear it.
    pub fn with_breaking(mut self, breaking: impl Into<String>) -> Self {
        self.breaking = non_blank(breaking.into());
        self
    }

    /// Set the issue references. Blank values clear it.
    pub fn with_issues(mut self, issues: impl Into<String>) -> Self {
        self.issues = non_blank(issues.into());
        self
    }

    /// Check the subject rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_subject(&self.subject)?;
        Ok(())
    }

    /// `type(scope): subject`
    pub fn header(&self) -> String {
        let mut result = String::from(self.commit_type.as_str());

        if let Some(scope) = present(&self.scope) {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        result.push_str(": ");
        result.push_str(self.subject.trim());
        result
    }
}

/// Format a draft as a conventional commit message.
///
/// Sections are separated by one blank line and absent sections leave no
/// trace.
pub fn compose_message(draft: &CommitDraft) -> String {
    let mut result = draft.header();

    if let Some(body) = present(&draft.body) {
        result.push_str("\n\n");
        result.push_str(body);
    }

    if let Some(breaking) = present(&draft.breaking) {
        result.push_str("\n\nBREAKING CHANGE: ");
        result.push_str(breaking);
    }

    if let Some(issues) = present(&draft.issues) {
        result.push_str("\n\n");
        result.push_str(issues);
    }

    result
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
