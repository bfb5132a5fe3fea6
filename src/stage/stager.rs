// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive staging flow.

use crate::error::{GwkError, Result};
use crate::git::{self, FileChange, GitRunner};
use crate::ui::{output, Prompter};

use console::{style, Term};

use super::selection::{self, SelectionMode};

/// What happened during a staging session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutcome {
    /// Paths passed to `git add`.
    pub staged: Vec<String>,
    /// Whether the user asked to continue with the commit composer.
    pub compose_next: bool,
}

/// Guides the user through picking files and stages them in one batch.
pub struct Stager<'a> {
    git: &'a dyn GitRunner,
    prompter: &'a mut dyn Prompter,
    term: Term,
}

impl<'a> Stager<'a> {
    pub fn new(git: &'a dyn GitRunner, prompter: &'a mut dyn Prompter) -> Self {
        Self {
            git,
            prompter,
            term: Term::stderr(),
        }
    }

    /// Run the staging flow.
    pub fn run(&mut self) -> Result<StageOutcome> {
        let changes = git::list_changes(self.git)?;

        output::heading(&self.term, "Working tree")?;
        output::print_status(&self.term, &changes)?;

        if selection::pending(&changes).is_empty() {
            output::info(&self.term, "Nothing to stage")?;
            let compose_next = changes.iter().any(|c| c.is_staged)
                && self
                    .prompter
                    .confirm("Compose a commit for the already staged files?", true)?;
            return Ok(StageOutcome {
                staged: Vec::new(),
                compose_next,
            });
        }

        let paths = self.choose(&changes)?;
        tracing::debug!("Selected {} path(s) for staging", paths.len());

        self.term.write_line(&format!(
            "\n{}",
            style(format!("Selected {} file(s):", paths.len())).bold()
        ))?;
        output::print_paths(&self.term, &paths)?;

        if !self
            .prompter
            .confirm(&format!("Stage {} file(s)?", paths.len()), true)?
        {
            return Err(GwkError::Cancelled);
        }

        git::stage_paths(self.git, &paths)?;
        output::success(&self.term, &format!("Staged {} file(s)", paths.len()))?;

        let after = git::list_changes(self.git)?;
        output::heading(&self.term, "Working tree")?;
        output::print_status(&self.term, &after)?;

        let compose_next = self.prompter.confirm("Compose a commit now?", true)?;

        Ok(StageOutcome {
            staged: paths,
            compose_next,
        })
    }

    /// Ask for a selection mode and resolve it to a list of paths.
    fn choose(&mut self, changes: &[FileChange]) -> Result<Vec<String>> {
        let modes = SelectionMode::all();
        let labels: Vec<String> = modes.iter().map(|m| m.label().to_string()).collect();
        let mode = modes[self.prompter.select("What to stage?", &labels, 0)?];

        match mode {
            SelectionMode::All => Ok(selection::select_all(changes)),
            SelectionMode::Individual => self.choose_individual(changes),
            SelectionMode::ByExtension => self.choose_by_extension(changes),
            SelectionMode::ByPattern => self.choose_by_pattern(),
        }
    }

    fn choose_individual(&mut self, changes: &[FileChange]) -> Result<Vec<String>> {
        let pending = selection::pending(changes);
        let labels: Vec<String> = pending.iter().map(|c| output::change_label(c)).collect();

        let picked = self
            .prompter
            .multi_select("Select files (space to toggle)", &labels)?;
        if picked.is_empty() {
            return Err(GwkError::EmptySelection);
        }

        Ok(picked.into_iter().map(|i| pending[i].path.clone()).collect())
    }

    fn choose_by_extension(&mut self, changes: &[FileChange]) -> Result<Vec<String>> {
        let extensions = selection::extensions(changes);
        if extensions.is_empty() {
            return Err(GwkError::NoMatch {
                filter: "any file extension".to_string(),
            });
        }

        let pending = selection::pending(changes);
        let labels: Vec<String> = extensions
            .iter()
            .map(|ext| {
                let count = pending
                    .iter()
                    .filter(|c| c.extension().as_deref() == Some(ext.as_str()))
                    .count();
                format!(".{} {}", ext, style(format!("({} file(s))", count)).dim())
            })
            .collect();

        let picked = self.prompter.multi_select("Select extensions", &labels)?;
        let chosen: Vec<String> = picked.into_iter().map(|i| extensions[i].clone()).collect();

        selection::select_by_extensions(changes, &chosen)
    }

    fn choose_by_pattern(&mut self) -> Result<Vec<String>> {
        let check = |p: &str| selection::compile_pattern(p).map(|_| ());
        let pattern = self
            .prompter
            .input_validated("Regular expression", None, &check)?;
        let regex = selection::compile_pattern(&pattern)?;

        let candidates = git::list_modified_and_untracked(self.git)?;
        selection::select_by_pattern(&candidates, &regex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitError;
    use crate::git::runner::fake::FakeGit;
    use crate::git::GitOutput;
    use crate::ui::scripted::{Answer, ScriptedPrompter};

    const STATUS_CMD: &str = "status --porcelain -z --untracked-files=all";
    const LS_FILES_CMD: &str = "ls-files -z --modified --others --exclude-standard";

    const STATUS: &str = " M src/app.rs\0?? docs/intro.md\0?? notes.MD\0M  Cargo.toml\0";
    const STATUS_AFTER: &str = "M  src/app.rs\0A  docs/intro.md\0A  notes.MD\0M  Cargo.toml\0";

    #[test]
    fn test_stage_all_single_batch() {
        let git = FakeGit::new()
            .with(STATUS_CMD, STATUS)
            .with(STATUS_CMD, STATUS_AFTER)
            .with("add -- src/app.rs docs/intro.md notes.MD", "");
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Confirm(true),
            Answer::Confirm(false),
        ]);

        let outcome = Stager::new(&git, &mut prompter).run().unwrap();

        assert_eq!(outcome.staged, vec!["src/app.rs", "docs/intro.md", "notes.MD"]);
        assert!(!outcome.compose_next);
        assert_eq!(git.calls_starting_with("add").len(), 1);
        assert_eq!(git.calls_starting_with("status").len(), 2);
    }

    #[test]
    fn test_individual_requires_selection() {
        let git = FakeGit::new().with(STATUS_CMD, STATUS);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Select(1), Answer::Multi(vec![])]);

        let err = Stager::new(&git, &mut prompter).run().unwrap_err();

        assert!(matches!(err, GwkError::EmptySelection));
        assert!(git.calls_starting_with("add").is_empty());
    }

    #[test]
    fn test_individual_picks_and_chains() {
        let git = FakeGit::new()
            .with(STATUS_CMD, STATUS)
            .with("add -- notes.MD", "");
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(1),
            Answer::Multi(vec![2]),
            Answer::Confirm(true),
            Answer::Confirm(true),
        ]);

        let outcome = Stager::new(&git, &mut prompter).run().unwrap();

        assert_eq!(outcome.staged, vec!["notes.MD"]);
        assert!(outcome.compose_next);
        // Fully staged Cargo.toml is not offered.
        assert_eq!(prompter.offered[1].len(), 3);
    }

    #[test]
    fn test_by_extension() {
        let git = FakeGit::new()
            .with(STATUS_CMD, STATUS)
            .with("add -- docs/intro.md notes.MD", "");
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(2),
            Answer::Multi(vec![0]),
            Answer::Confirm(true),
            Answer::Confirm(false),
        ]);

        let outcome = Stager::new(&git, &mut prompter).run().unwrap();

        assert_eq!(outcome.staged, vec!["docs/intro.md", "notes.MD"]);
        assert_eq!(prompter.offered[1].len(), 2);
    }

    #[test]
    fn test_by_pattern_filters_listed_files() {
        let git = FakeGit::new()
            .with(STATUS_CMD, STATUS)
            .with(LS_FILES_CMD, "src/app.rs\0docs/intro.md\0notes.MD\0")
            .with("add -- docs/intro.md", "");
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(3),
            Answer::Text("^docs/"),
            Answer::Confirm(true),
            Answer::Confirm(false),
        ]);

        let outcome = Stager::new(&git, &mut prompter).run().unwrap();

        assert_eq!(outcome.staged, vec!["docs/intro.md"]);
    }

    #[test]
    fn test_by_pattern_no_match() {
        let git = FakeGit::new()
            .with(STATUS_CMD, STATUS)
            .with(LS_FILES_CMD, "src/app.rs\0");
        let mut prompter = ScriptedPrompter::new(vec![Answer::Select(3), Answer::Text(r"\.ts$")]);

        let err = Stager::new(&git, &mut prompter).run().unwrap_err();

        assert!(matches!(err, GwkError::NoMatch { .. }));
        assert!(git.calls_starting_with("add").is_empty());
    }

    #[test]
    fn test_declined_confirmation_stages_nothing() {
        let git = FakeGit::new().with(STATUS_CMD, STATUS);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Select(0), Answer::Confirm(false)]);

        let err = Stager::new(&git, &mut prompter).run().unwrap_err();

        assert!(matches!(err, GwkError::Cancelled));
        assert!(git.calls_starting_with("add").is_empty());
    }

    #[test]
    fn test_cancel_at_prompt() {
        let git = FakeGit::new().with(STATUS_CMD, STATUS);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Cancel]);

        let err = Stager::new(&git, &mut prompter).run().unwrap_err();

        assert!(matches!(err, GwkError::Cancelled));
        assert_eq!(git.calls(), vec![STATUS_CMD]);
    }

    #[test]
    fn test_staging_failure_is_not_retried() {
        let git = FakeGit::new()
            .with(STATUS_CMD, STATUS)
            .with_output(
                "add -- src/app.rs docs/intro.md notes.MD",
                GitOutput::failed(128, "fatal: Unable to create index.lock"),
            );
        let mut prompter = ScriptedPrompter::new(vec![Answer::Select(0), Answer::Confirm(true)]);

        let err = Stager::new(&git, &mut prompter).run().unwrap_err();

        assert!(matches!(err, GwkError::Git(GitError::StagingFailed { .. })));
        assert_eq!(git.calls_starting_with("add").len(), 1);
    }

    #[test]
    fn test_clean_tree_exits_without_prompts() {
        let git = FakeGit::new().with(STATUS_CMD, "");
        let mut prompter = ScriptedPrompter::new(vec![]);

        let outcome = Stager::new(&git, &mut prompter).run().unwrap();

        assert_eq!(outcome, StageOutcome::default());
        assert!(prompter.prompts.is_empty());
    }

    #[test]
    fn test_only_staged_offers_compose() {
        let git = FakeGit::new().with(STATUS_CMD, "M  src/app.rs\0");
        let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(true)]);

        let outcome = Stager::new(&git, &mut prompter).run().unwrap();

        assert!(outcome.staged.is_empty());
        assert!(outcome.compose_next);
    }
}
