// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Entry points shared by the gwk binaries.

use crate::commit::CommitComposer;
use crate::config::GwkConfig;
use crate::error::{GitError, GwkError, Result};
use crate::git::{self, SystemGit};
use crate::push::{PushOutcome, Pusher};
use crate::stage::Stager;
use crate::ui::{DialoguerPrompter, IndicatifSpinner, NoSpinner, Spinner};
use crate::version;

use console::Term;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::args::CommonArgs;

/// Set up logging/tracing.
pub fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("gwk=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if debug {
        tracing::debug!("gwk {}", version::version_string());
    }
}

/// Turn a tool result into a process exit code, reporting any error.
pub fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Run the staging flow, chaining into the composer when asked to.
pub fn run_stage(args: &CommonArgs) -> Result<i32> {
    let _config = prepare(args)?;
    let git = open_repository()?;
    let mut prompter = DialoguerPrompter::new();

    let outcome = Stager::new(&git, &mut prompter).run()?;
    tracing::debug!("Staged {} path(s)", outcome.staged.len());

    if outcome.compose_next {
        return spawn_tool("gwk-commit", args);
    }
    Ok(0)
}

/// Run the commit composer.
pub fn run_commit(args: &CommonArgs) -> Result<i32> {
    let config = prepare(args)?;
    let git = open_repository()?;
    let mut prompter = DialoguerPrompter::new();

    let outcome = CommitComposer::new(&config, &git, &mut prompter).run()?;
    tracing::debug!("Committed {:?}", outcome.sha);
    Ok(0)
}

/// Run the push flow.
pub fn run_push(args: &CommonArgs) -> Result<i32> {
    let config = prepare(args)?;
    let git = open_repository()?;
    let mut prompter = DialoguerPrompter::new();

    let mut spinner: Box<dyn Spinner> = if Term::stderr().is_term() {
        Box::new(IndicatifSpinner::new(Duration::from_millis(
            config.push.spinner_interval_ms,
        )))
    } else {
        Box::new(NoSpinner)
    };

    match Pusher::new(&config, &git, &mut prompter, spinner.as_mut()).run()? {
        PushOutcome::Pushed(plan) => tracing::debug!("Pushed {:?}", plan),
        PushOutcome::Skipped => tracing::debug!("Push skipped"),
    }
    Ok(0)
}

/// Load configuration and apply its terminal settings.
fn prepare(args: &CommonArgs) -> Result<GwkConfig> {
    let config = if let Some(config_path) = &args.config {
        GwkConfig::load_from(config_path)?
    } else {
        GwkConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    Ok(config)
}

/// Git runner rooted at the top of the current working tree.
fn open_repository() -> Result<SystemGit> {
    let root = git::repo_root(&SystemGit::new())?;
    tracing::debug!("Repository root: {:?}", root);
    Ok(SystemGit::in_dir(root))
}

/// Run a sibling gwk binary with inherited stdio and return its exit code.
fn spawn_tool(name: &str, args: &CommonArgs) -> Result<i32> {
    let program = tool_path(name);
    tracing::debug!("Spawning {:?}", program);

    let status = Command::new(&program)
        .args(args.forwarded())
        .status()
        .map_err(|e| {
            GwkError::Git(GitError::Spawn {
                message: format!("{}: {}", program.display(), e),
            })
        })?;

    Ok(status.code().unwrap_or(1))
}

/// Prefer the binary installed next to the current one, else rely on PATH.
fn tool_path(name: &str) -> PathBuf {
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|path| path.is_file())
        .unwrap_or_else(|| PathBuf::from(file_name))
}
