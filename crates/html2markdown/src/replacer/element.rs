//! Attribute-aware element replacement.

use regex::{Captures, Regex};

use super::compile;
use crate::utilities::tag_alternation;
use crate::Result;

/// Type alias for element render functions.
///
/// Returning `None` leaves the matched markup exactly as it was.
pub type RenderFn = Box<dyn Fn(&Element) -> Option<String> + Send + Sync>;

const ATTRIBUTE_PATTERN: &str =
    r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#;

/// Attributes parsed from an opening tag, in source order.
/// Attributes written without a value are recorded with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    fn parse(pattern: &Regex, source: &str) -> Self {
        let entries = pattern
            .captures_iter(source)
            .map(|caps| {
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map_or("", |m| m.as_str());
                (caps[1].to_lowercase(), value.to_string())
            })
            .collect();
        Self { entries }
    }

    /// Value of the first attribute called `name` (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether any attribute called `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A matched element handed to a [`RenderFn`]
#[derive(Debug, Clone)]
pub struct Element<'a> {
    /// Lower-cased tag name
    pub tag: String,
    pub attributes: Attributes,
    /// Raw text between the opening and closing tag; empty for void elements
    pub content: &'a str,
}

/// Matches a whole element and renders it through a closure.
///
/// Matching is flat: the first closing tag ends the element, so nested
/// elements of the same name are not paired.
pub struct ElementReplacer {
    pattern: Regex,
    attribute_pattern: Regex,
    render: RenderFn,
}

impl ElementReplacer {
    /// Match `<tag attrs>content</tag>`
    pub fn new<F>(tags: &[&str], render: F) -> Result<Self>
    where
        F: Fn(&Element) -> Option<String> + Send + Sync + 'static,
    {
        let names = tag_alternation(tags);
        Self::build(
            &format!(r"(?is)<({names})(\s[^>]*)?>(.*?)</{names}\s*>"),
            render,
        )
    }

    /// Match a void element `<tag attrs>` or `<tag attrs/>`
    pub fn void<F>(tags: &[&str], render: F) -> Result<Self>
    where
        F: Fn(&Element) -> Option<String> + Send + Sync + 'static,
    {
        let names = tag_alternation(tags);
        Self::build(&format!(r"(?i)<({names})(\s[^>]*?)?\s*/?>"), render)
    }

    fn build<F>(pattern: &str, render: F) -> Result<Self>
    where
        F: Fn(&Element) -> Option<String> + Send + Sync + 'static,
    {
        Ok(Self {
            pattern: compile(pattern)?,
            attribute_pattern: compile(ATTRIBUTE_PATTERN)?,
            render: Box::new(render),
        })
    }

    pub fn replace(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let element = Element {
                    tag: caps[1].to_lowercase(),
                    attributes: Attributes::parse(
                        &self.attribute_pattern,
                        caps.get(2).map_or("", |m| m.as_str()),
                    ),
                    content: caps.get(3).map_or("", |m| m.as_str()),
                };
                (self.render)(&element).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> ElementReplacer {
        ElementReplacer::new(&["a"], |el| {
            el.attributes
                .get("href")
                .map(|href| format!("[{}]({})", el.content, href))
        })
        .unwrap()
    }

    #[test]
    fn test_attribute_quoting() {
        let img = ElementReplacer::void(&["img"], |el| {
            Some(el.attributes.iter().map(|(k, v)| format!("{k}={v};")).collect())
        })
        .unwrap();
        assert_eq!(
            img.replace(r#"<img SRC="a.png" alt='An image' width=10 />"#),
            "src=a.png;alt=An image;width=10;"
        );
    }

    #[test]
    fn test_renders_content() {
        assert_eq!(
            link().replace(r#"see <A HREF="https://example.com">here</A>."#),
            "see [here](https://example.com)."
        );
    }

    #[test]
    fn test_render_none_leaves_markup() {
        let input = r#"<a name="top">anchor</a>"#;
        assert_eq!(link().replace(input), input);
    }

    #[test]
    fn test_content_spans_lines() {
        let quote = ElementReplacer::new(&["blockquote"], |el| {
            Some(el.content.lines().map(|l| format!("> {l}")).collect::<Vec<_>>().join("\n"))
        })
        .unwrap();
        assert_eq!(quote.replace("<blockquote>a\nb</blockquote>"), "> a\n> b");
    }

    #[test]
    fn test_tag_name_is_lowercased() {
        let heading = ElementReplacer::new(&["h1", "h2"], |el| Some(el.tag.clone())).unwrap();
        assert_eq!(heading.replace("<H2>x</H2><h1>y</h1>"), "h2h1");
    }

    #[test]
    fn test_attributes_lookup() {
        let pattern = Regex::new(ATTRIBUTE_PATTERN).unwrap();
        let attrs = Attributes::parse(&pattern, r#" class="x" data-id='7' hidden"#);
        assert_eq!(attrs.get("CLASS"), Some("x"));
        assert_eq!(attrs.get("data-id"), Some("7"));
        assert!(attrs.contains("hidden"));
        assert_eq!(attrs.get("hidden"), Some(""));
        assert!(Attributes::default().is_empty());
    }
}
