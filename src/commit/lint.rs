// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional-commit lint rules.
//!
//! The same rule set external commit linters are configured with, checked
//! in-process against a finished message so the composer can flag problems
//! before committing.

use crate::config::GwkConfig;
use console::{style, Style};
use lazy_static::lazy_static;
use regex::Regex;

use super::scope::is_kebab_case;

lazy_static! {
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>[^(:!]*)(?:\((?P<scope>[^)]*)\))?!?: ?(?P<subject>.*)$").unwrap();

    /// Footer tokens such as `Closes #12`, `Refs: x`, `BREAKING CHANGE: x`.
    static ref FOOTER_REGEX: Regex =
        Regex::new(r"^(BREAKING CHANGE|[A-Za-z-]+)(: | #)").unwrap();
}

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Rule name, matching the usual commitlint rule ids.
    pub rule: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// 1-based line number, when the finding is tied to a line.
    pub line: Option<usize>,
}

impl LintIssue {
    fn error(rule: &'static str, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            rule,
            message: message.into(),
            severity: Severity::Error,
            line,
        }
    }

    fn warning(rule: &'static str, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            rule,
            message: message.into(),
            severity: Severity::Warning,
            line,
        }
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = match self.severity {
            Severity::Error => (style("✗").red().bold(), Style::new().red()),
            Severity::Warning => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        match self.line {
            Some(line) => format!(
                "{} {} {} {}",
                prefix,
                code_style.apply_to(self.rule),
                style(format!("line {}:", line)).dim(),
                self.message
            ),
            None => format!("{} {} {}", prefix, code_style.apply_to(self.rule), self.message),
        }
    }
}

/// The rule set.
#[derive(Debug, Clone)]
pub struct LintRules {
    /// Accepted commit types.
    pub allowed_types: Vec<String>,
    /// Longest allowed body/footer line.
    pub max_body_line_length: usize,
}

impl LintRules {
    pub fn from_config(config: &GwkConfig) -> Self {
        Self {
            allowed_types: config
                .commit_types()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            max_body_line_length: config.commit.max_body_line_length,
        }
    }
}

impl Default for LintRules {
    fn default() -> Self {
        Self::from_config(&GwkConfig::default())
    }
}

/// Check a full commit message.
pub fn lint(message: &str, rules: &LintRules) -> Vec<LintIssue> {
    let lines: Vec<&str> = message.lines().collect();
    let mut issues = Vec::new();

    let Some(header) = lines.first() else {
        issues.push(LintIssue::error("header-empty", "Message is empty", None));
        return issues;
    };

    check_header(header, rules, &mut issues);

    if lines.len() > 1 && !lines[1].trim().is_empty() {
        issues.push(LintIssue::warning(
            "body-leading-blank",
            "Body must begin with a blank line",
            Some(2),
        ));
    }

    for (idx, line) in lines.iter().enumerate().skip(2) {
        if FOOTER_REGEX.is_match(line) && !lines[idx - 1].trim().is_empty() {
            issues.push(LintIssue::warning(
                "footer-leading-blank",
                "Footer must begin with a blank line",
                Some(idx + 1),
            ));
        }
    }

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let len = line.chars().count();
        if len > rules.max_body_line_length {
            issues.push(LintIssue::error(
                "body-max-line-length",
                format!(
                    "Line is {} characters (max: {})",
                    len, rules.max_body_line_length
                ),
                Some(idx + 1),
            ));
        }
    }

    issues
}

fn check_header(header: &str, rules: &LintRules, issues: &mut Vec<LintIssue>) {
    let Some(captures) = HEADER_REGEX.captures(header) else {
        issues.push(LintIssue::error(
            "header-format",
            "Header must look like 'type(scope): subject'",
            Some(1),
        ));
        return;
    };

    let commit_type = captures.name("type").map_or("", |m| m.as_str());
    if commit_type.is_empty() {
        issues.push(LintIssue::error("type-empty", "Type may not be empty", Some(1)));
    } else if !rules.allowed_types.iter().any(|t| t == commit_type) {
        issues.push(LintIssue::error(
            "type-enum",
            format!(
                "Type '{}' must be one of: {}",
                commit_type,
                rules.allowed_types.join(", ")
            ),
            Some(1),
        ));
    }

    if let Some(scope) = captures.name("scope") {
        if !is_kebab_case(scope.as_str()) {
            issues.push(LintIssue::error(
                "scope-case",
                format!("Scope '{}' must be kebab-case", scope.as_str()),
                Some(1),
            ));
        }
    }

    let subject = captures.name("subject").map_or("", |m| m.as_str());
    match subject.chars().next() {
        None => issues.push(LintIssue::error(
            "subject-empty",
            "Subject may not be empty",
            Some(1),
        )),
        Some(first) if !first.is_uppercase() => issues.push(LintIssue::error(
            "subject-case",
            "Subject must be sentence-case",
            Some(1),
        )),
        Some(_) => {}
    }

    if subject.ends_with('.') {
        issues.push(LintIssue::error(
            "subject-full-stop",
            "Subject may not end with a full stop",
            Some(1),
        ));
    }
}

/// Whether any finding is an error.
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
