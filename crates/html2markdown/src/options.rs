//! Configuration options for the built-in Markdown schemes

/// Markdown heading syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// `#` markers, one per level, then a space
    #[default]
    Atx,
    /// `=` under h1 and `-` under h2, as long as the heading text.
    /// h3 to h6 still use `#` markers.
    Setext,
}

/// Markdown code block syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeBlockStyle {
    /// Every non-blank line indented by four spaces
    #[default]
    Indented,
    /// Lines between two [`MarkdownOptions::fence`] lines, trailing
    /// whitespace removed
    Fenced,
}

/// Options consumed by [`crate::Markdown`] and [`crate::GithubFlavored`]
/// when they assemble their replacers.
///
/// Options are read once, when a scheme builds its replacers. Changing them
/// afterwards has no effect on a converter that already exists.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// How `<h1>`..`<h6>` are written. Setext only applies to levels 1 and 2.
    pub heading_style: HeadingStyle,

    /// Text emitted for `<hr>`, framed by blank lines
    pub hr: String,

    /// Marker written before every `<ul>` item, followed by one space.
    /// Continuation lines are indented to line up with the item text.
    pub bullet_list_marker: char,

    /// How `<pre>` content is written
    pub code_block_style: CodeBlockStyle,

    /// Opening and closing fence. Only used with [`CodeBlockStyle::Fenced`],
    /// where a `language-*` class on `<pre>` or `<code>` is appended to the
    /// opening fence.
    pub fence: String,

    /// Wraps the text of `<em>` and `<i>`
    pub em_delimiter: char,

    /// Wraps the text of `<strong>` and `<b>`
    pub strong_delimiter: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Atx,
            hr: "* * *".to_string(),
            bullet_list_marker: '-',
            code_block_style: CodeBlockStyle::Indented,
            fence: "```".to_string(),
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
        }
    }
}
