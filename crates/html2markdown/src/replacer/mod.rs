//! Replacer system for HTML to Markdown conversion.
//!
//! A [`Replacer`] is one conversion rule: a total, side-effect free
//! `&str -> String` transformation. Rules never fail at replacement time;
//! markup a rule does not recognise is left as it was.

mod element;
mod pattern;
mod set;
mod tag;

pub use element::{Attributes, Element, ElementReplacer, RenderFn};
pub use pattern::PatternReplacer;
pub use set::ReplacerSet;
pub use tag::TagReplacer;

use regex::Regex;

use crate::{Html2MarkdownError, Result};

/// A single conversion rule
pub enum Replacer {
    /// Fixed prefix/suffix for a tag pair, or a fixed string for a void tag
    Tag(TagReplacer),
    /// Attribute-aware element rendered through a closure
    Element(ElementReplacer),
    /// Free regex substitution
    Pattern(PatternReplacer),
}

impl Replacer {
    /// Apply this rule to `text`
    pub fn replace(&self, text: &str) -> String {
        match self {
            Replacer::Tag(r) => r.replace(text),
            Replacer::Element(r) => r.replace(text),
            Replacer::Pattern(r) => r.replace(text),
        }
    }

    /// Create a rule replacing an opening/closing tag pair
    pub fn tag_pair(tags: &[&str], prefix: &str, suffix: &str) -> Result<Self> {
        TagReplacer::pair(tags, prefix, suffix).map(Replacer::Tag)
    }

    /// Create a rule replacing a self-closing tag
    pub fn void_tag(tags: &[&str], replacement: &str) -> Result<Self> {
        TagReplacer::void(tags, replacement).map(Replacer::Tag)
    }

    /// Create a rule rendering a content-wrapping element
    pub fn element<F>(tags: &[&str], render: F) -> Result<Self>
    where
        F: Fn(&Element) -> Option<String> + Send + Sync + 'static,
    {
        ElementReplacer::new(tags, render).map(Replacer::Element)
    }

    /// Create a rule rendering a void element from its attributes
    pub fn void_element<F>(tags: &[&str], render: F) -> Result<Self>
    where
        F: Fn(&Element) -> Option<String> + Send + Sync + 'static,
    {
        ElementReplacer::void(tags, render).map(Replacer::Element)
    }

    /// Create a free regex substitution rule
    pub fn pattern(pattern: &str, replacement: &str) -> Result<Self> {
        PatternReplacer::new(pattern, replacement).map(Replacer::Pattern)
    }
}

impl From<TagReplacer> for Replacer {
    fn from(r: TagReplacer) -> Self {
        Replacer::Tag(r)
    }
}

impl From<ElementReplacer> for Replacer {
    fn from(r: ElementReplacer) -> Self {
        Replacer::Element(r)
    }
}

impl From<PatternReplacer> for Replacer {
    fn from(r: PatternReplacer) -> Self {
        Replacer::Pattern(r)
    }
}

/// Compile a pattern, mapping failures to [`Html2MarkdownError::InvalidPattern`]
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Html2MarkdownError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
