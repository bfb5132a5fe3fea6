// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! File selection rules for staging.

use crate::error::{GwkError, Result, ValidationError};
use crate::git::FileChange;
use regex::Regex;
use std::collections::BTreeSet;

/// How the user picks files to stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    All,
    Individual,
    ByExtension,
    ByPattern,
}

impl SelectionMode {
    pub fn all() -> &'static [SelectionMode] {
        &[
            SelectionMode::All,
            SelectionMode::Individual,
            SelectionMode::ByExtension,
            SelectionMode::ByPattern,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SelectionMode::All => "All changes",
            SelectionMode::Individual => "Pick individual files",
            SelectionMode::ByExtension => "By file extension",
            SelectionMode::ByPattern => "By regular expression",
        }
    }
}

/// Changes that `git add` would affect.
pub fn pending(changes: &[FileChange]) -> Vec<&FileChange> {
    changes.iter().filter(|c| c.needs_staging()).collect()
}

/// Every pending path.
pub fn select_all(changes: &[FileChange]) -> Vec<String> {
    pending(changes).into_iter().map(|c| c.path.clone()).collect()
}

/// Distinct lower-cased extensions among pending files, sorted.
pub fn extensions(changes: &[FileChange]) -> Vec<String> {
    pending(changes)
        .into_iter()
        .filter_map(|c| c.extension())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Pending paths whose extension is one of `chosen`.
pub fn select_by_extensions(changes: &[FileChange], chosen: &[String]) -> Result<Vec<String>> {
    if chosen.is_empty() {
        return Err(GwkError::EmptySelection);
    }

    let selected: Vec<String> = pending(changes)
        .into_iter()
        .filter(|c| c.extension().is_some_and(|ext| chosen.contains(&ext)))
        .map(|c| c.path.clone())
        .collect();

    if selected.is_empty() {
        Err(GwkError::NoMatch {
            filter: format!("extension {}", chosen.join(", ")),
        })
    } else {
        Ok(selected)
    }
}

/// Compile a user-supplied pattern.
pub fn compile_pattern(pattern: &str) -> std::result::Result<Regex, ValidationError> {
    if pattern.trim().is_empty() {
        return Err(ValidationError::InvalidPattern {
            pattern: pattern.to_string(),
            message: "pattern is empty".to_string(),
        });
    }

    Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Paths matching `pattern`; no match is an error.
pub fn select_by_pattern(files: &[String], pattern: &Regex) -> Result<Vec<String>> {
    let selected: Vec<String> = files
        .iter()
        .filter(|f| pattern.is_match(f))
        .cloned()
        .collect();

    if selected.is_empty() {
        Err(GwkError::NoMatch {
            filter: format!("pattern '{}'", pattern.as_str()),
        })
    } else {
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::parse_status;

    fn sample() -> Vec<FileChange> {
        parse_status(
            "M  src/staged.rs\n M src/lib.rs\n?? docs/Guide.MD\n?? README.md\nMM src/main.rs\n?? Makefile\n",
        )
    }

    #[test]
    fn test_select_all_skips_fully_staged() {
        let selected = select_all(&sample());
        assert_eq!(
            selected,
            vec!["src/lib.rs", "docs/Guide.MD", "README.md", "src/main.rs", "Makefile"]
        );
    }

    #[test]
    fn test_extensions_distinct_lowercase() {
        assert_eq!(extensions(&sample()), vec!["md", "rs"]);
    }

    #[test]
    fn test_select_by_extensions() {
        let selected = select_by_extensions(&sample(), &["md".to_string()]).unwrap();
        assert_eq!(selected, vec!["docs/Guide.MD", "README.md"]);
    }

    #[test]
    fn test_select_by_extensions_empty_choice() {
        assert!(matches!(
            select_by_extensions(&sample(), &[]),
            Err(GwkError::EmptySelection)
        ));
    }

    #[test]
    fn test_select_by_extensions_no_match() {
        assert!(matches!(
            select_by_extensions(&sample(), &["toml".to_string()]),
            Err(GwkError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_select_by_pattern() {
        let files = vec![
            "src/lib.rs".to_string(),
            "docs/guide.md".to_string(),
            "docs/api.md".to_string(),
        ];
        let re = compile_pattern(r"^docs/").unwrap();
        assert_eq!(
            select_by_pattern(&files, &re).unwrap(),
            vec!["docs/guide.md", "docs/api.md"]
        );
    }

    #[test]
    fn test_select_by_pattern_no_match() {
        let files = vec!["src/lib.rs".to_string()];
        let re = compile_pattern(r"\.ts$").unwrap();
        let err = select_by_pattern(&files, &re).unwrap_err();
        assert!(err.to_string().contains(r"\.ts$"));
    }

    #[test]
    fn test_pattern_metacharacters_stay_in_process() {
        let files = vec!["a; rm -rf x".to_string(), "b.rs".to_string()];
        let re = compile_pattern("; rm").unwrap();
        assert_eq!(select_by_pattern(&files, &re).unwrap(), vec!["a; rm -rf x"]);
    }

    #[test]
    fn test_compile_pattern_rejects_invalid() {
        assert!(compile_pattern("(").is_err());
        assert!(compile_pattern("  ").is_err());
    }
}
