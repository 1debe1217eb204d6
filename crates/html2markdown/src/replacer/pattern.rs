//! Free regex substitution.

use regex::Regex;

use super::compile;
use crate::Result;

/// Substitutes every match of a regex with a replacement template.
/// The template may refer to capture groups as `$1` or `${name}`.
pub struct PatternReplacer {
    pattern: Regex,
    replacement: String,
}

impl PatternReplacer {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: compile(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    pub fn replace(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}
