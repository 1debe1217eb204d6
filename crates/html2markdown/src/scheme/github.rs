//! GitHub-flavored Markdown scheme, derived from the standard scheme.

use super::markdown::tables;
use super::{Markdown, Scheme};
use crate::options::{CodeBlockStyle, MarkdownOptions};
use crate::replacer::{Replacer, ReplacerSet};
use crate::Result;

/// GitHub-flavored Markdown.
///
/// Differs from [`Markdown`] by fencing code blocks, emitting a header
/// separator row in tables, and supporting strikethrough and task list
/// checkboxes.
#[derive(Debug, Clone)]
pub struct GithubFlavored {
    options: MarkdownOptions,
}

impl GithubFlavored {
    pub fn new() -> Self {
        Self::with_options(MarkdownOptions {
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        })
    }

    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }
}

impl Default for GithubFlavored {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheme for GithubFlavored {
    fn name(&self) -> &str {
        "github"
    }

    fn replacers(&self) -> Result<ReplacerSet> {
        let mut set = Markdown::with_options(self.options.clone()).replacers()?;
        set.replace("tables", tables(true)?)?;
        set.insert_before("unordered_lists", "task_checkboxes", task_checkboxes()?)?;
        set.insert_after(
            "emphasis",
            "strikethrough",
            Replacer::tag_pair(&["del", "s", "strike"], "~~", "~~")?,
        )?;
        Ok(set)
    }
}

fn task_checkboxes() -> Result<Replacer> {
    Replacer::void_element(&["input"], |el| {
        let is_checkbox = el
            .attributes
            .get("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
        if !is_checkbox {
            return None;
        }
        Some(if el.attributes.contains("checked") {
            "[x] ".to_string()
        } else {
            "[ ] ".to_string()
        })
    })
}
