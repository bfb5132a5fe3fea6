// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end checks of the gwk binaries against throwaway repositories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Command for one of the binaries, isolated from the user's environment.
fn tool(name: &str, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .env_remove("RUST_LOG");
    cmd
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

fn init_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    dir
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    tool("gwk-stage", dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gwk-stage"))
        .stdout(predicate::str::contains(gwk::version::version_string()));
}

#[test]
fn test_commit_without_staged_files() {
    let repo = init_repo();
    tool("gwk-commit", repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No staged files"));
}

#[test]
fn test_stage_clean_repository_is_noop() {
    let repo = init_repo();
    tool("gwk-stage", repo.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to stage"));
}

#[test]
fn test_outside_repository() {
    let dir = TempDir::new().unwrap();
    tool("gwk-push", dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn test_push_without_remotes() {
    let repo = init_repo();
    tool("gwk-push", repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No remotes configured"));
}

#[test]
fn test_explicit_config_must_exist() {
    let repo = init_repo();
    tool("gwk-commit", repo.path())
        .args(["--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_value_is_reported() {
    let repo = init_repo();
    std::fs::write(
        repo.path().join("gwk.toml"),
        "[commit]\nmax_body_line_length = 0\n",
    )
    .unwrap();

    tool("gwk-commit", repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("commit.max_body_line_length"));
}
