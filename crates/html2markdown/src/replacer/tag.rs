//! Fixed-string replacement of tags.

use regex::{NoExpand, Regex};

use super::compile;
use crate::utilities::tag_alternation;
use crate::Result;

/// Replaces opening and closing tags with fixed strings, leaving the
/// content between them untouched.
pub struct TagReplacer {
    opening: Regex,
    closing: Option<Regex>,
    prefix: String,
    suffix: String,
}

impl TagReplacer {
    /// Replace `<tag ...>` with `prefix` and `</tag>` with `suffix`
    pub fn pair(tags: &[&str], prefix: &str, suffix: &str) -> Result<Self> {
        let names = tag_alternation(tags);
        Ok(Self {
            opening: compile(&format!(r"(?i)<{names}(?:\s[^>]*)?>"))?,
            closing: Some(compile(&format!(r"(?i)</{names}\s*>"))?),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Replace a self-closing tag (`<br>`, `<br/>`, `<br />`) with `replacement`.
    /// A stray closing form such as `</br>` is matched as well.
    pub fn void(tags: &[&str], replacement: &str) -> Result<Self> {
        let names = tag_alternation(tags);
        Ok(Self {
            opening: compile(&format!(r"(?i)</?{names}(?:\s[^>]*)?/?>"))?,
            closing: None,
            prefix: replacement.to_string(),
            suffix: String::new(),
        })
    }

    pub fn replace(&self, text: &str) -> String {
        let opened = self.opening.replace_all(text, NoExpand(&self.prefix));
        match &self.closing {
            Some(closing) => closing
                .replace_all(&opened, NoExpand(&self.suffix))
                .into_owned(),
            None => opened.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair() {
        let strong = TagReplacer::pair(&["strong", "b"], "**", "**").unwrap();
        assert_eq!(strong.replace("<strong>bold</strong>"), "**bold**");
        assert_eq!(strong.replace("<B class=\"x\">bold</B >"), "**bold**");
    }

    #[test]
    fn test_pair_does_not_match_longer_names() {
        let bold = TagReplacer::pair(&["b"], "**", "**").unwrap();
        assert_eq!(bold.replace("<br><blockquote>"), "<br><blockquote>");
    }

    #[test]
    fn test_void() {
        let br = TagReplacer::void(&["br"], "  \r\n").unwrap();
        assert_eq!(br.replace("a<br>b<br/>c<BR />d"), "a  \r\nb  \r\nc  \r\nd");
    }

    #[test]
    fn test_replacement_is_literal() {
        let money = TagReplacer::pair(&["span"], "$1", "$0").unwrap();
        assert_eq!(money.replace("<span>x</span>"), "$1x$0");
    }

    #[test]
    fn test_no_match_is_identity() {
        let em = TagReplacer::pair(&["em"], "*", "*").unwrap();
        assert_eq!(em.replace("plain *text*"), "plain *text*");
    }
}
