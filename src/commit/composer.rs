// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive commit composer.

use crate::config::{CommitType, GwkConfig};
use crate::error::{GwkError, Result};
use crate::git::{self, GitRunner};
use crate::ui::{output, Prompter};

use console::{style, Term};

use super::draft::{compose_message, CommitDraft};
use super::lint::{self, LintRules};
use super::preview::CommitPreview;
use super::scope::{self, ScopeOption};
use super::validate::{validate_breaking, validate_subject};

/// Result of a completed compose session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The message passed to `git commit`.
    pub message: String,
    /// Short hash of the new commit, when it could be read back.
    pub sha: Option<String>,
}

/// Walks the user through a conventional commit and creates it.
pub struct CommitComposer<'a> {
    config: &'a GwkConfig,
    git: &'a dyn GitRunner,
    prompter: &'a mut dyn Prompter,
    term: Term,
}

impl<'a> CommitComposer<'a> {
    pub fn new(
        config: &'a GwkConfig,
        git: &'a dyn GitRunner,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            config,
            git,
            prompter,
            term: Term::stderr(),
        }
    }

    /// Run the compose flow.
    pub fn run(&mut self) -> Result<CommitOutcome> {
        let staged = git::staged_files(self.git)?;
        if staged.is_empty() {
            return Err(GwkError::NoStagedFiles);
        }

        output::heading(&self.term, &format!("Staged files ({})", staged.len()))?;
        output::print_paths(&self.term, &staged)?;

        let branch = match git::current_branch(self.git) {
            Ok(branch) => Some(branch),
            Err(e) => {
                tracing::debug!("No branch for scope inference: {}", e);
                None
            }
        };
        let inferred_scope = branch.as_deref().and_then(scope::infer_scope_from_branch);
        let inferred_type = branch.as_deref().and_then(scope::infer_type_from_branch);

        if let Some(ref branch) = branch {
            self.term.write_line(&format!(
                "{} {}\n",
                style("Branch:").dim(),
                style(branch).cyan()
            ))?;
        }

        let draft = self.prompt_draft(inferred_type, inferred_scope.as_deref())?;
        let message = compose_message(&draft);

        self.term.write_line("")?;
        CommitPreview::new(&draft).print();

        let issues = lint::lint(&message, &LintRules::from_config(self.config));
        for issue in &issues {
            self.term.write_line(&format!("  {}", issue.format()))?;
        }

        if !self
            .prompter
            .confirm("Commit with this message?", !lint::has_errors(&issues))?
        {
            return Err(GwkError::Cancelled);
        }

        git::create_commit(self.git, &message)?;

        let sha = match git::short_head(self.git) {
            Ok(sha) => Some(sha),
            Err(e) => {
                tracing::warn!("Commit created but HEAD could not be read: {}", e);
                None
            }
        };

        let label = sha
            .as_ref()
            .map(|s| format!("{} ", style(format!("[{}]", s)).cyan()))
            .unwrap_or_default();
        output::success(&self.term, &format!("{}{}", label, draft.header()))?;

        Ok(CommitOutcome { message, sha })
    }

    /// Ask every field in order and assemble the draft.
    fn prompt_draft(
        &mut self,
        inferred_type: Option<CommitType>,
        inferred_scope: Option<&str>,
    ) -> Result<CommitDraft> {
        let commit_type = self.prompt_type(inferred_type)?;
        let scope = self.prompt_scope(inferred_scope)?;

        let subject = self
            .prompter
            .input_validated("Subject", None, &validate_subject)?;

        let body = self.prompter.input("Body (optional)", None)?;

        let breaking = if self.prompter.confirm("Is this a breaking change?", false)? {
            self.prompter.input_validated(
                "Describe the breaking change",
                None,
                &validate_breaking,
            )?
        } else {
            String::new()
        };

        let issues = self
            .prompter
            .input("Issue references (e.g. Closes #123, optional)", None)?;

        let mut draft = CommitDraft::new(commit_type, subject)
            .with_body(body)
            .with_breaking(breaking)
            .with_issues(issues);
        if let Some(scope) = scope {
            draft = draft.with_scope(scope);
        }

        draft.validate()?;
        Ok(draft)
    }

    fn prompt_type(&mut self, inferred: Option<CommitType>) -> Result<CommitType> {
        let types = self.config.commit_types();

        let items: Vec<String> = types
            .iter()
            .map(|t| format!("{:10} {}", t.as_str(), style(t.description()).dim()))
            .collect();

        let default_idx = inferred
            .and_then(|it| types.iter().position(|t| *t == it))
            .unwrap_or(0);

        let selection = self
            .prompter
            .select("Select commit type", &items, default_idx)?;
        Ok(types[selection])
    }

    fn prompt_scope(&mut self, inferred: Option<&str>) -> Result<Option<String>> {
        let (options, default_idx) =
            scope::scope_options(&self.config.commit.common_scopes, inferred);
        let items: Vec<String> = options.iter().map(|o| o.label(inferred)).collect();

        let selection = self.prompter.select("Select scope", &items, default_idx)?;

        match &options[selection] {
            ScopeOption::None => Ok(None),
            ScopeOption::Named(name) => Ok(Some(name.clone())),
            ScopeOption::Custom => {
                let scope = self.prompter.input("Scope", inferred)?;
                if scope.is_empty() {
                    Ok(None)
                } else {
                    if !scope::is_kebab_case(&scope) {
                        tracing::debug!("Free-form scope '{}' is not kebab-case", scope);
                    }
                    Ok(Some(scope))
                }
            }
        }
    }
}
