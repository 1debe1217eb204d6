//! Utility functions and constants shared by replacers and schemes.

/// Line ending every replacer emits and expects after normalization
pub const CRLF: &str = "\r\n";

/// Separator placed around block-level output
pub const BLANK_LINE: &str = "\r\n\r\n";

/// Frame block-level output with blank lines on both sides
pub fn block(content: &str) -> String {
    format!("{BLANK_LINE}{content}{BLANK_LINE}")
}

/// Build a regex alternation matching any of the given tag names literally
pub fn tag_alternation(tags: &[&str]) -> String {
    let names: Vec<String> = tags
        .iter()
        .map(|tag| regex::escape(&tag.to_lowercase()))
        .collect();
    format!("(?:{})", names.join("|"))
}

/// Join the non-blank lines of `text` into a single line
pub fn collapse_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines of converted block content, ready to be re-prefixed.
///
/// Indentation left over from the HTML source is removed, except on lines
/// inside a fence and on indented code lines (four spaces, opened after a
/// blank line). Trailing spaces are kept so hard breaks survive. Blank
/// lines become empty, and blank lines at either end are dropped.
pub(crate) fn content_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut after_blank = false;
    let mut in_fence = false;
    let mut in_indented_code = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            // The first segment is the rest of the opening tag's line.
            after_blank |= i > 0;
            lines.push("");
            continue;
        }
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            in_indented_code = false;
            lines.push(trimmed);
        } else if in_fence {
            lines.push(line);
        } else if line.starts_with("    ") && (after_blank || in_indented_code) {
            in_indented_code = true;
            lines.push(line);
        } else {
            in_indented_code = false;
            lines.push(trimmed);
        }
        after_blank = false;
    }

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].to_vec()
}

/// Clean an attribute value (trim and handle empty)
pub fn clean_attribute(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Render the optional ` "title"` part of a link or image destination
pub fn title_part(title: Option<&str>) -> String {
    clean_attribute(title)
        .map(|t| format!(" \"{}\"", t.replace('"', "\\\"")))
        .unwrap_or_default()
}
