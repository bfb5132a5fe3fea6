// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive push flow.

use crate::config::GwkConfig;
use crate::error::{GitError, GwkError, Result};
use crate::git::{self, GitRunner};
use crate::ui::{output, Prompter, Spinner};

use console::{style, Term};

use super::output::{display_lines, render_line};
use super::plan::{default_remote_index, outstanding, Outstanding, PushPlan};

/// How a push session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The push ran and succeeded.
    Pushed(PushPlan),
    /// Nothing to push and the user chose not to push anyway.
    Skipped,
}

/// Guides the user through one push.
pub struct Pusher<'a> {
    config: &'a GwkConfig,
    git: &'a dyn GitRunner,
    prompter: &'a mut dyn Prompter,
    spinner: &'a mut dyn Spinner,
    term: Term,
}

impl<'a> Pusher<'a> {
    pub fn new(
        config: &'a GwkConfig,
        git: &'a dyn GitRunner,
        prompter: &'a mut dyn Prompter,
        spinner: &'a mut dyn Spinner,
    ) -> Self {
        Self {
            config,
            git,
            prompter,
            spinner,
            term: Term::stderr(),
        }
    }

    /// Run the push flow.
    pub fn run(&mut self) -> Result<PushOutcome> {
        let branch = git::current_branch(self.git)?;
        let remotes = git::remotes(self.git)?;
        if remotes.is_empty() {
            return Err(GitError::NoRemotes.into());
        }

        self.term.write_line(&format!(
            "{} {}",
            style("Branch:").dim(),
            style(&branch).cyan()
        ))?;

        let mut plan = self.plan(&branch, &remotes)?;

        match outstanding(self.git, &plan)? {
            Outstanding::NewBranch => {
                output::info(
                    &self.term,
                    &format!("{} does not exist yet; it will be created", plan.target()),
                )?;
                plan.set_upstream = true;
            }
            Outstanding::Commits(commits) if commits.is_empty() => {
                let notice = format!("No unpushed commits for {}", plan.target());
                output::warning(&self.term, &notice)?;
                if !self.prompter.confirm("Push anyway?", false)? {
                    return Ok(PushOutcome::Skipped);
                }
            }
            Outstanding::Commits(commits) => {
                output::heading(&self.term, &format!("Unpushed commits ({})", commits.len()))?;
                output::print_commits(&self.term, &commits)?;
            }
        }

        plan.force = self.prompter.confirm("Force push?", false)?;
        if plan.force {
            output::warning(&self.term, "Force push may overwrite history on the remote")?;
        }

        let question = format!("Push {} to {}?", plan.local_branch, plan.target());
        if !self.prompter.confirm(&question, true)? {
            return Err(GwkError::Cancelled);
        }

        self.execute(&plan)?;
        Ok(PushOutcome::Pushed(plan))
    }

    /// Choose the remote and the remote branch name.
    fn plan(&mut self, branch: &str, remotes: &[String]) -> Result<PushPlan> {
        let default_idx = default_remote_index(remotes, &self.config.push.preferred_remote);

        let remote = if remotes.len() == 1 {
            remotes[0].clone()
        } else {
            let idx = self.prompter.select("Select remote", remotes, default_idx)?;
            remotes[idx].clone()
        };

        let remote_branch = self.prompter.input("Remote branch", Some(branch))?;

        let mut plan = PushPlan::new(remote, branch);
        if !remote_branch.is_empty() {
            plan.remote_branch = remote_branch;
        }

        tracing::debug!("Push plan: {:?}", plan);
        Ok(plan)
    }

    /// Run `git push` once with the spinner going.
    fn execute(&mut self, plan: &PushPlan) -> Result<()> {
        let args = plan.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        self.spinner.start(&format!("Pushing to {}...", plan.target()));
        let result = self.git.run(&args);
        self.spinner.stop();

        let push = result?;
        let combined = push.combined();

        if !push.success() {
            self.term.write_str(&combined)?;
            return Err(GitError::PushFailed { output: combined }.into());
        }

        for line in display_lines(&combined) {
            self.term.write_line(&format!("  {}", render_line(line)))?;
        }
        output::success(&self.term, &format!("Pushed to {}", plan.target()))?;

        Ok(())
    }
}
