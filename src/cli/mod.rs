// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for the gwk tools.
//!
//! Argument parsing, logging setup, and the entry points used by each binary.

pub mod args;
mod run;

pub use args::{CommitCli, CommonArgs, PushCli, StageCli};
pub use run::{exit_code, run_commit, run_push, run_stage, setup_logging};
