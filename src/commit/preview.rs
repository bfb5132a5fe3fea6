// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{measure_text_width, style, truncate_str, Term};

use super::draft::{compose_message, CommitDraft};

const BOX_WIDTH: usize = 64;

/// Columns available between the borders.
const CONTENT_WIDTH: usize = BOX_WIDTH - 4;

/// Boxed preview of the message a draft will produce.
pub struct CommitPreview<'a> {
    draft: &'a CommitDraft,
}

impl<'a> CommitPreview<'a> {
    pub fn new(draft: &'a CommitDraft) -> Self {
        Self { draft }
    }

    /// Print the preview to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        let _ = self.render(&term);
    }

    fn render(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!(
            "{}",
            style(format!("┌─ Commit Preview {}┐", "─".repeat(BOX_WIDTH - 19))).dim()
        ))?;

        for row in self.rows() {
            term.write_line(&self.boxed(&row))?;
        }

        term.write_line(&format!(
            "{}",
            style(format!("└{}┘", "─".repeat(BOX_WIDTH - 2))).dim()
        ))?;

        Ok(())
    }

    /// Styled content rows: the header cut to fit, other lines wrapped.
    fn rows(&self) -> Vec<String> {
        let message = compose_message(self.draft);
        let mut rows = Vec::new();

        for (idx, line) in message.lines().enumerate() {
            if idx == 0 {
                rows.push(truncate_str(&self.format_header(), CONTENT_WIDTH, "…").into_owned());
                continue;
            }

            let breaking = line.starts_with("BREAKING CHANGE:");
            for part in wrap(line, CONTENT_WIDTH) {
                rows.push(if breaking {
                    style(part).red().to_string()
                } else {
                    style(part).dim().to_string()
                });
            }
        }

        rows
    }

    /// Header with the type colored by kind.
    fn format_header(&self) -> String {
        let kind = self.draft.commit_type.as_str();
        let type_style = match kind {
            "feat" => style(kind).green().bold(),
            "fix" => style(kind).red().bold(),
            "docs" => style(kind).blue().bold(),
            "style" => style(kind).magenta().bold(),
            "refactor" => style(kind).yellow().bold(),
            "perf" => style(kind).cyan().bold(),
            _ => style(kind).white().bold(),
        };

        let mut result = type_style.to_string();

        if let Some(ref scope) = self.draft.scope {
            result.push_str(&format!("({})", style(scope).cyan()));
        }

        result.push_str(": ");
        result.push_str(self.draft.subject.trim());
        result
    }

    /// Wrap content in box borders, padding by visible width.
    fn boxed(&self, content: &str) -> String {
        let padding = (BOX_WIDTH - 4).saturating_sub(measure_text_width(content));
        format!(
            "{} {}{} {}",
            style("│").dim(),
            content,
            " ".repeat(padding),
            style("│").dim()
        )
    }
}

/// Split a plain line into rows of at most `width` columns, breaking at
/// spaces where possible.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if measure_text_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        if !current.is_empty() {
            if measure_text_width(&current) + 1 + measure_text_width(word) <= width {
                current.push(' ');
                current.push_str(word);
                continue;
            }
            rows.push(std::mem::take(&mut current));
        }

        for ch in word.chars() {
            let mut buf = [0u8; 4];
            let ch_width = measure_text_width(ch.encode_utf8(&mut buf));
            if !current.is_empty() && measure_text_width(&current) + ch_width > width {
                rows.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitType;

    #[test]
    fn test_format_header() {
        let draft = CommitDraft::new(CommitType::Feat, "Add feature").with_scope("core");
        let header = CommitPreview::new(&draft).format_header();
        assert!(header.contains("feat"));
        assert!(header.contains("core"));
        assert!(header.contains("Add feature"));
    }

    #[test]
    fn test_boxed_pads_to_width() {
        let draft = CommitDraft::new(CommitType::Fix, "Thing");
        let line = CommitPreview::new(&draft).boxed("abc");
        assert_eq!(measure_text_width(&line), BOX_WIDTH);
    }

    #[test]
    fn test_long_body_lines_wrap_inside_box() {
        let body = "word ".repeat(20) + &"x".repeat(90);
        let draft = CommitDraft::new(CommitType::Fix, "Thing")
            .with_body(body.trim_end())
            .with_breaking("y ".repeat(45).trim_end());
        let preview = CommitPreview::new(&draft);

        let rows = preview.rows();
        assert!(rows.len() > 5);
        for row in &rows {
            assert_eq!(measure_text_width(&preview.boxed(row)), BOX_WIDTH);
        }
    }

    #[test]
    fn test_long_header_is_cut() {
        let draft = CommitDraft::new(CommitType::Feat, "A".repeat(80)).with_scope("core");
        let rows = CommitPreview::new(&draft).rows();
        assert_eq!(measure_text_width(&rows[0]), CONTENT_WIDTH);
        assert!(rows[0].contains('…'));
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(wrap("short", 10), vec!["short"]);
        assert_eq!(wrap("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 4), vec![""]);
    }
}
