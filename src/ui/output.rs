// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shared terminal styling for the three tools.

use crate::git::{CommitSummary, FileChange, StatusCode};
use console::{style, StyledObject, Term};

/// Section heading.
pub fn heading(term: &Term, text: &str) -> std::io::Result<()> {
    term.write_line(&format!("\n{}", style(text).bold().underlined()))
}

/// Green check followed by a message.
pub fn success(term: &Term, text: &str) -> std::io::Result<()> {
    term.write_line(&format!("{} {}", style("✓").green().bold(), text))
}

/// Yellow warning sign followed by a message.
pub fn warning(term: &Term, text: &str) -> std::io::Result<()> {
    term.write_line(&format!("{} {}", style("⚠").yellow().bold(), style(text).yellow()))
}

/// Dimmed informational line.
pub fn info(term: &Term, text: &str) -> std::io::Result<()> {
    term.write_line(&format!("{} {}", style("ℹ").blue(), text))
}

/// Status letter colored by what happened to the file.
pub fn status_badge(status: StatusCode) -> StyledObject<&'static str> {
    match status {
        StatusCode::Modified => style("M").yellow().bold(),
        StatusCode::Added => style("A").green().bold(),
        StatusCode::Deleted => style("D").red().bold(),
        StatusCode::Renamed => style("R").blue().bold(),
        StatusCode::Untracked => style("?").magenta().bold(),
        StatusCode::Unmerged => style("U").red().bold(),
    }
}

/// List entry used in selection menus.
pub fn change_label(change: &FileChange) -> String {
    format!("{} {}", status_badge(change.status), change.path)
}

/// Print a status snapshot split into staged and unstaged sections.
pub fn print_status(term: &Term, changes: &[FileChange]) -> std::io::Result<()> {
    if changes.is_empty() {
        return info(term, "Working tree clean");
    }

    let staged: Vec<&FileChange> = changes.iter().filter(|c| c.is_staged).collect();
    let pending: Vec<&FileChange> = changes.iter().filter(|c| c.needs_staging()).collect();

    if !staged.is_empty() {
        term.write_line(&format!("{}", style("Staged:").green().bold()))?;
        for change in staged {
            term.write_line(&format!("  {}", change_label(change)))?;
        }
    }

    if !pending.is_empty() {
        term.write_line(&format!("{}", style("Not staged:").red().bold()))?;
        for change in pending {
            term.write_line(&format!(
                "  {} {}",
                change_label(change),
                style(change.status.label()).dim()
            ))?;
        }
    }

    Ok(())
}

/// Print a list of paths with a bullet.
pub fn print_paths(term: &Term, paths: &[String]) -> std::io::Result<()> {
    for path in paths {
        term.write_line(&format!("  {} {}", style("•").dim(), path))?;
    }
    Ok(())
}

/// Print commits as `sha subject`.
pub fn print_commits(term: &Term, commits: &[CommitSummary]) -> std::io::Result<()> {
    for commit in commits {
        term.write_line(&format!(
            "  {} {}",
            style(&commit.sha).cyan(),
            commit.subject
        ))?;
    }
    Ok(())
}
