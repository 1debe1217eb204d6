//! Normalization before, and whitespace cleanup after, the replacer pipeline.

use regex::Regex;

use crate::replacer::compile;
use crate::utilities::{BLANK_LINE, CRLF};
use crate::Result;

/// Brings raw HTML into the shape every replacer expects
pub(crate) struct Normalizer {
    line_feed: Regex,
    table_header: Regex,
}

impl Normalizer {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            line_feed: compile(r"\r?\n")?,
            table_header: compile(r"(?i)<(/?)th(\s[^>]*)?>")?,
        })
    }

    pub(crate) fn normalize(&self, html: &str) -> String {
        let html = self.line_feed.replace_all(html, CRLF);
        self.table_header
            .replace_all(&html, "<${1}td${2}>")
            .into_owned()
    }
}

/// Whitespace cleanup over the finished Markdown, applied in a fixed order
pub(crate) struct Cleanup {
    padded_blank_line: Regex,
    line_ending_run: Regex,
    empty_quote_run: Regex,
    heading_marker_space: Regex,
}

impl Cleanup {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            padded_blank_line: compile(r"\r\n\s+\r\n")?,
            line_ending_run: compile(r"(?:\r\n){3,}")?,
            empty_quote_run: compile(r"(?:> \r\n){2,}")?,
            heading_marker_space: compile(r"(?m)^(#{1,6})[ \t]+")?,
        })
    }

    pub(crate) fn clean(&self, markdown: &str) -> String {
        let cleaned = self.padded_blank_line.replace_all(markdown, BLANK_LINE);
        let cleaned = self.line_ending_run.replace_all(&cleaned, BLANK_LINE);
        let cleaned = self.empty_quote_run.replace_all(&cleaned, "> \r\n");
        let cleaned = trim_line_endings(&cleaned);
        let cleaned = self.heading_marker_space.replace_all(cleaned, "${1} ");
        strip_dangling_quote(&cleaned).to_string()
    }
}

/// Trim leading and trailing runs of line endings, leaving spaces alone
fn trim_line_endings(text: &str) -> &str {
    text.trim_start_matches(CRLF).trim_end_matches(CRLF)
}

/// Drop one final `>` and the line endings it leaves exposed
fn strip_dangling_quote(markdown: &str) -> &str {
    match markdown.strip_suffix('>') {
        Some(rest) => rest.trim_end_matches(CRLF),
        None => markdown,
    }
}
