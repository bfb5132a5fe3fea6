// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.
//!
//! Workflow input is interactive; the binaries only take ambient flags.

use clap::{Args, Parser};
use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    /// `--version` text: crate version plus the build stamp.
    static ref LONG_VERSION: String = crate::version::version_string();
}

/// Flags shared by every gwk tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    /// Arguments that reproduce these flags for a chained tool.
    pub fn forwarded(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.debug {
            args.push("--debug".to_string());
        }
        if let Some(path) = &self.config {
            args.push("--config".to_string());
            args.push(path.display().to_string());
        }
        args
    }
}

/// Interactively stage changes in the current repository.
#[derive(Parser, Debug)]
#[command(name = "gwk-stage")]
#[command(author = "Eshan Roy")]
#[command(version, long_version = LONG_VERSION.as_str())]
#[command(about = "Pick and stage working-tree changes", long_about = None)]
pub struct StageCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Compose and create a conventional commit.
#[derive(Parser, Debug)]
#[command(name = "gwk-commit")]
#[command(author = "Eshan Roy")]
#[command(version, long_version = LONG_VERSION.as_str())]
#[command(about = "Compose a conventional commit from staged changes", long_about = None)]
pub struct CommitCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Push the current branch with guided options.
#[derive(Parser, Debug)]
#[command(name = "gwk-push")]
#[command(author = "Eshan Roy")]
#[command(version, long_version = LONG_VERSION.as_str())]
#[command(about = "Push the current branch to a chosen remote", long_about = None)]
pub struct PushCli {
    #[command(flatten)]
    pub common: CommonArgs,
}
