// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Working-tree status parsing.

use crate::error::Result;
use std::collections::HashSet;
use std::path::Path;

use super::runner::{run_checked, GitRunner};

/// Classified state of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Modified,
    Added,
    Deleted,
    Renamed,
    Untracked,
    Unmerged,
}

impl StatusCode {
    /// Short label used in status listings.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCode::Modified => "modified",
            StatusCode::Added => "added",
            StatusCode::Deleted => "deleted",
            StatusCode::Renamed => "renamed",
            StatusCode::Untracked => "untracked",
            StatusCode::Unmerged => "unmerged",
        }
    }
}

/// A single entry of a porcelain status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the repository root (new path for renames).
    pub path: String,
    /// Classified status.
    pub status: StatusCode,
    /// Whether the change is in the index.
    pub is_staged: bool,
    /// Raw index status character.
    pub index: char,
    /// Raw worktree status character.
    pub worktree: char,
    /// Source path of a rename.
    pub original_path: Option<String>,
}

impl FileChange {
    /// Whether `git add` would change anything for this file.
    pub fn needs_staging(&self) -> bool {
        !self.is_staged || self.worktree != ' '
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.path)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// Classify a two-character status code.
///
/// Both characters are checked for `M`, `A`, `D`, `R`, `?`, `U` in that
/// order and the first hit wins. Anything else is treated as modified.
pub fn classify(index: char, worktree: char) -> StatusCode {
    const PRECEDENCE: [(char, StatusCode); 6] = [
        ('M', StatusCode::Modified),
        ('A', StatusCode::Added),
        ('D', StatusCode::Deleted),
        ('R', StatusCode::Renamed),
        ('?', StatusCode::Untracked),
        ('U', StatusCode::Unmerged),
    ];

    PRECEDENCE
        .iter()
        .find(|(c, _)| index == *c || worktree == *c)
        .map(|(_, code)| *code)
        .unwrap_or(StatusCode::Modified)
}

/// Parse one porcelain status line, as printed without `-z`.
pub fn parse_status_line(line: &str) -> Option<FileChange> {
    let mut chars = line.chars();
    let index = chars.next()?;
    let worktree = chars.next()?;
    let rest = chars.as_str().trim();

    if rest.is_empty() {
        return None;
    }

    let (original_path, path) = match rest.split_once(" -> ") {
        Some((from, to)) => (Some(unquote(from)), unquote(to)),
        None => (None, unquote(rest)),
    };

    Some(file_change(index, worktree, path, original_path))
}

/// Parse porcelain status lines. Later duplicates of a path are dropped.
pub fn parse_status(output: &str) -> Vec<FileChange> {
    let mut seen = HashSet::new();
    output
        .lines()
        .filter_map(parse_status_line)
        .filter(|change| seen.insert(change.path.clone()))
        .collect()
}

/// Parse `git status --porcelain -z` output.
///
/// Entries are `XY path` separated by NUL, with paths verbatim. A rename or
/// copy is followed by one extra field holding the source path.
pub fn parse_status_z(output: &str) -> Vec<FileChange> {
    let mut seen = HashSet::new();
    let mut changes = Vec::new();
    let mut fields = output.split('\0');

    while let Some(entry) = fields.next() {
        let mut chars = entry.chars();
        let (Some(index), Some(worktree), Some(' ')) = (chars.next(), chars.next(), chars.next())
        else {
            continue;
        };

        let path = chars.as_str();
        if path.is_empty() {
            continue;
        }

        let original_path = if matches!(index, 'R' | 'C') || matches!(worktree, 'R' | 'C') {
            fields
                .next()
                .filter(|source| !source.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        let change = file_change(index, worktree, path.to_string(), original_path);
        if seen.insert(change.path.clone()) {
            changes.push(change);
        }
    }

    changes
}

fn file_change(
    index: char,
    worktree: char,
    path: String,
    original_path: Option<String>,
) -> FileChange {
    FileChange {
        path,
        status: classify(index, worktree),
        is_staged: index != ' ' && index != '?',
        index,
        worktree,
        original_path,
    }
}

/// Undo git's C-style path quoting (`"caf\303\251.txt"` gives `café.txt`).
fn unquote(path: &str) -> String {
    let path = path.trim();
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut rest = inner.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        rest = tail;
        if byte != b'\\' {
            bytes.push(byte);
            continue;
        }

        let Some((&escaped, tail)) = rest.split_first() else {
            bytes.push(byte);
            break;
        };
        rest = tail;

        match escaped {
            b'n' => bytes.push(b'\n'),
            b't' => bytes.push(b'\t'),
            b'a' => bytes.push(0x07),
            b'b' => bytes.push(0x08),
            b'f' => bytes.push(0x0c),
            b'v' => bytes.push(0x0b),
            b'r' => bytes.push(b'\r'),
            b'0'..=b'7' => {
                let mut value = u32::from(escaped - b'0');
                let mut taken = 0;
                while taken < 2 {
                    match rest.split_first() {
                        Some((&digit, tail)) if (b'0'..=b'7').contains(&digit) => {
                            value = value * 8 + u32::from(digit - b'0');
                            rest = tail;
                            taken += 1;
                        }
                        _ => break,
                    }
                }
                bytes.push((value & 0xff) as u8);
            }
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// `git status` arguments: NUL-separated, every untracked file listed.
const STATUS_ARGS: &[&str] = &["status", "--porcelain", "-z", "--untracked-files=all"];

/// Query the current working-tree status.
pub fn list_changes(git: &dyn GitRunner) -> Result<Vec<FileChange>> {
    let output = run_checked(git, STATUS_ARGS)?;
    Ok(parse_status_z(&output))
}

/// Modified and untracked files, honouring ignore rules.
pub fn list_modified_and_untracked(git: &dyn GitRunner) -> Result<Vec<String>> {
    let output = run_checked(
        git,
        &["ls-files", "-z", "--modified", "--others", "--exclude-standard"],
    )?;
    Ok(unique_fields(&output))
}

/// Files currently staged for commit.
pub fn staged_files(git: &dyn GitRunner) -> Result<Vec<String>> {
    let output = run_checked(git, &["diff", "--cached", "--name-only", "-z"])?;
    Ok(unique_fields(&output))
}

/// NUL-separated paths, deduplicated in order.
fn unique_fields(output: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    output
        .split('\0')
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .filter(|f| seen.insert(f.clone()))
        .collect()
}
