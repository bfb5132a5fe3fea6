// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Classification of `git push` output lines, for display only.

use console::style;

/// Kind of a push output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushLine {
    Enumerating,
    Counting,
    Compressing,
    Writing,
    Total,
    Remote,
    RefUpdate,
    Other,
}

/// Classify a line by substring.
pub fn classify_line(line: &str) -> PushLine {
    let trimmed = line.trim_start();

    if trimmed.contains("Enumerating objects") {
        PushLine::Enumerating
    } else if trimmed.contains("Counting objects") {
        PushLine::Counting
    } else if trimmed.contains("Compressing objects") {
        PushLine::Compressing
    } else if trimmed.contains("Writing objects") {
        PushLine::Writing
    } else if trimmed.starts_with("Total") {
        PushLine::Total
    } else if trimmed.starts_with("remote:") {
        PushLine::Remote
    } else if trimmed.contains("->") {
        PushLine::RefUpdate
    } else {
        PushLine::Other
    }
}

/// Color a line by its kind.
pub fn render_line(line: &str) -> String {
    match classify_line(line) {
        PushLine::Enumerating | PushLine::Counting => style(line).dim().to_string(),
        PushLine::Compressing | PushLine::Writing => style(line).blue().to_string(),
        PushLine::Total => style(line).cyan().to_string(),
        PushLine::Remote => style(line).yellow().to_string(),
        PushLine::RefUpdate => style(line).green().bold().to_string(),
        PushLine::Other => line.to_string(),
    }
}

/// Final state of progress lines that git redraws with carriage returns.
pub fn display_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.rsplit('\r').find(|part| !part.trim().is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_push_output() {
        let cases = [
            ("Enumerating objects: 5, done.", PushLine::Enumerating),
            ("Counting objects: 100% (5/5), done.", PushLine::Counting),
            ("Delta compression using up to 8 threads", PushLine::Other),
            ("Compressing objects: 100% (3/3), done.", PushLine::Compressing),
            ("Writing objects: 100% (3/3), 310 bytes | 310.00 KiB/s, done.", PushLine::Writing),
            ("Total 3 (delta 2), reused 0 (delta 0), pack-reused 0", PushLine::Total),
            ("remote: Resolving deltas: 100% (2/2)", PushLine::Remote),
            ("   4f2a1c3..9b8e7d6  main -> main", PushLine::RefUpdate),
            (" * [new branch]      topic -> topic", PushLine::RefUpdate),
            ("To github.com:me/site.git", PushLine::Other),
        ];

        for (line, expected) in cases {
            assert_eq!(classify_line(line), expected, "line: {}", line);
        }
    }

    #[test]
    fn test_display_lines_keep_last_redraw() {
        let output = "Counting objects:  50% (1/2)\rCounting objects: 100% (2/2), done.\nTo origin\n";
        assert_eq!(
            display_lines(output),
            vec!["Counting objects: 100% (2/2), done.", "To origin"]
        );
    }

    #[test]
    fn test_render_keeps_text() {
        let rendered = render_line("remote: hello");
        assert!(rendered.contains("remote: hello"));
    }
}
