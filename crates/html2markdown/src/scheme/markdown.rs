//! Standard Markdown scheme.

use regex::Regex;

use super::Scheme;
use crate::options::{CodeBlockStyle, HeadingStyle, MarkdownOptions};
use crate::replacer::{compile, Replacer, ReplacerSet};
use crate::utilities::{
    block, clean_attribute, collapse_lines, content_lines, tag_alternation, title_part, BLANK_LINE,
    CRLF,
};
use crate::Result;

const BLOCK_WRAPPERS: &[&str] = &[
    "div", "section", "article", "main", "header", "footer", "nav", "aside",
    "figure", "figcaption", "address", "center",
];

const INLINE_WRAPPERS: &[&str] = &[
    "html", "head", "body", "span", "font", "thead", "tbody", "tfoot", "abbr",
    "small", "big", "u", "ins", "label", "time",
];

/// The standard Markdown scheme
#[derive(Debug, Clone, Default)]
pub struct Markdown {
    options: MarkdownOptions,
}

impl Markdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }
}

impl Scheme for Markdown {
    fn name(&self) -> &str {
        "markdown"
    }

    fn replacers(&self) -> Result<ReplacerSet> {
        let options = &self.options;
        let em = options.em_delimiter.to_string();
        let strong = options.strong_delimiter.as_str();

        let mut set = ReplacerSet::new();
        set.push("comments", Replacer::pattern(r"(?s)<!--.*?-->", "")?)
            .push("doctype", Replacer::pattern(r"(?i)<!doctype[^>]*>", "")?)
            .push(
                "document_title",
                Replacer::pattern(r"(?is)<title(?:\s[^>]*)?>.*?</title\s*>", "")?,
            )
            .push("preformatted", preformatted(options)?)
            .push("headings", headings(options.heading_style)?)
            .push("paragraphs", paragraphs()?)
            .push("paragraph_breaks", Replacer::tag_pair(&["p"], BLANK_LINE, BLANK_LINE)?)
            .push("horizontal_rules", Replacer::void_tag(&["hr"], &block(&options.hr))?)
            .push(
                "trailing_line_breaks",
                Replacer::pattern(
                    r"(?i)(?:<br(?:\s[^>]*)?/?>\s*)+((?:</[a-z][a-z0-9]*\s*>\s*)*)\z",
                    "$1",
                )?,
            )
            .push("line_breaks", Replacer::void_tag(&["br"], "  \r\n")?)
            .push("tables", tables(false)?)
            .push("unordered_lists", unordered_lists(options.bullet_list_marker)?)
            .push("ordered_lists", ordered_lists()?)
            .push("blockquotes", blockquotes()?)
            .push("strong", Replacer::tag_pair(&["strong", "b"], strong, strong)?)
            .push("emphasis", Replacer::tag_pair(&["em", "i"], &em, &em)?)
            .push("code", Replacer::tag_pair(&["code", "kbd", "samp", "tt"], "`", "`")?)
            .push("links", links()?)
            .push("images", images()?)
            .push("block_wrappers", Replacer::tag_pair(BLOCK_WRAPPERS, "", CRLF)?)
            .push(
                "inline_wrappers",
                Replacer::pattern(
                    &format!(r"(?i)</?{}(?:\s[^>]*)?>", tag_alternation(INLINE_WRAPPERS)),
                    "",
                )?,
            );
        Ok(set)
    }
}

fn preformatted(options: &MarkdownOptions) -> Result<Replacer> {
    let code_tags = compile(r"(?i)</?code(?:\s[^>]*)?>")?;
    let code_open = compile(r"(?i)<code(\s[^>]*)?>")?;
    let language = compile(r"language-([\w+#.-]+)")?;
    let style = options.code_block_style;
    let fence = options.fence.clone();

    Replacer::element(&["pre"], move |el| {
        let code = code_tags.replace_all(el.content, "");
        let code = code.trim_matches(|c: char| c == '\r' || c == '\n');
        if code.trim().is_empty() {
            return Some(String::new());
        }

        let body = match style {
            CodeBlockStyle::Indented => code
                .lines()
                .map(|line| {
                    let line = line.trim_end();
                    if line.is_empty() {
                        String::new()
                    } else {
                        format!("    {line}")
                    }
                })
                .collect::<Vec<_>>()
                .join(CRLF),
            CodeBlockStyle::Fenced => {
                let class_attr = el.attributes.get("class").unwrap_or("");
                let code_attrs = code_open
                    .captures(el.content)
                    .and_then(|caps| caps.get(1))
                    .map_or("", |m| m.as_str());
                let lang = language
                    .captures(class_attr)
                    .or_else(|| language.captures(code_attrs))
                    .map_or(String::new(), |caps| caps[1].to_string());
                let lines: Vec<&str> = code.lines().map(str::trim_end).collect();
                format!("{fence}{lang}{CRLF}{}{CRLF}{fence}", lines.join(CRLF))
            }
        };

        Some(block(&body))
    })
}

fn headings(style: HeadingStyle) -> Result<Replacer> {
    Replacer::element(&["h1", "h2", "h3", "h4", "h5", "h6"], move |el| {
        let level: usize = el.tag[1..].parse().unwrap_or(1);

        let content = collapse_lines(el.content);
        if content.is_empty() {
            return Some(String::new());
        }

        let heading = match style {
            HeadingStyle::Setext if level <= 2 => {
                let underline = if level == 1 { "=" } else { "-" };
                format!("{content}{CRLF}{}", underline.repeat(content.chars().count()))
            }
            _ => format!("{} {}", "#".repeat(level), content),
        };
        Some(block(&heading))
    })
}

fn paragraphs() -> Result<Replacer> {
    Replacer::element(&["p"], |el| {
        let lines: Vec<&str> = el
            .content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Some(String::new());
        }
        Some(block(&lines.join(CRLF)))
    })
}

pub(super) fn tables(header_separator: bool) -> Result<Replacer> {
    let row = compile(r"(?is)<tr(?:\s[^>]*)?>(.*?)</tr\s*>")?;
    let cell = compile(r"(?is)<td(?:\s[^>]*)?>(.*?)</td\s*>")?;

    Replacer::element(&["table"], move |el| {
        let rows: Vec<Vec<String>> = row
            .captures_iter(el.content)
            .map(|r| {
                cell.captures_iter(&r[1])
                    .map(|c| collapse_lines(&c[1]).replace('|', "\\|"))
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .collect();
        if rows.is_empty() {
            return None;
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        for (i, cells) in rows.iter().enumerate() {
            lines.push(format!("| {} |", cells.join(" | ")));
            if i == 0 && header_separator {
                lines.push(format!("|{}", " --- |".repeat(cells.len())));
            }
        }
        Some(block(&lines.join(CRLF)))
    })
}

/// Splits list content into items, tolerating omitted `</li>` tags
struct ListItems {
    opening: Regex,
    closing: Regex,
}

impl ListItems {
    fn new() -> Result<Self> {
        Ok(Self {
            opening: compile(r"(?i)<li(?:\s[^>]*)?>")?,
            closing: compile(r"(?i)</li\s*>")?,
        })
    }

    fn split(&self, content: &str) -> Vec<String> {
        self.opening
            .split(content)
            .skip(1)
            .map(|item| self.closing.replace_all(item, "").into_owned())
            .collect()
    }
}

/// Render one list item, indenting continuation lines under the marker
fn list_item(prefix: &str, item: &str) -> String {
    let indent = " ".repeat(prefix.len());
    let lines = content_lines(item);
    let Some((first, rest)) = lines.split_first() else {
        return prefix.trim_end().to_string();
    };
    let mut rendered = format!("{prefix}{first}");
    for line in rest {
        rendered.push_str(CRLF);
        if !line.is_empty() {
            rendered.push_str(&indent);
            rendered.push_str(line);
        }
    }
    rendered
}

fn unordered_lists(marker: char) -> Result<Replacer> {
    let items = ListItems::new()?;
    let prefix = format!("{marker} ");

    Replacer::element(&["ul"], move |el| {
        let items = items.split(el.content);
        if items.is_empty() {
            return None;
        }
        let lines: Vec<String> = items.iter().map(|item| list_item(&prefix, item)).collect();
        Some(block(&lines.join(CRLF)))
    })
}

fn ordered_lists() -> Result<Replacer> {
    let items = ListItems::new()?;

    Replacer::element(&["ol"], move |el| {
        let items = items.split(el.content);
        if items.is_empty() {
            return None;
        }
        let start: u64 = el
            .attributes
            .get("start")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);
        // Widened so that numbering past u64::MAX cannot overflow.
        let lines: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let n = u128::from(start) + i as u128;
                list_item(&format!("{n}. "), item)
            })
            .collect();
        Some(block(&lines.join(CRLF)))
    })
}

fn blockquotes() -> Result<Replacer> {
    Replacer::element(&["blockquote"], |el| {
        let content = content_lines(el.content);
        if content.is_empty() {
            return Some(String::new());
        }
        let lines: Vec<String> = content.iter().map(|line| format!("> {line}")).collect();
        Some(block(&lines.join(CRLF)))
    })
}

fn links() -> Result<Replacer> {
    Replacer::element(&["a"], |el| {
        let content = collapse_lines(el.content);
        match clean_attribute(el.attributes.get("href")) {
            Some(href) => Some(format!(
                "[{}]({}{})",
                content,
                href,
                title_part(el.attributes.get("title"))
            )),
            None => Some(content),
        }
    })
}

fn images() -> Result<Replacer> {
    Replacer::void_element(&["img"], |el| {
        let src = clean_attribute(el.attributes.get("src"))?;
        let alt = el.attributes.get("alt").unwrap_or("").trim();
        Some(format!(
            "![{}]({}{})",
            alt,
            src,
            title_part(el.attributes.get("title"))
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> Replacer {
        Markdown::new().replacers().unwrap().remove(name).unwrap()
    }

    #[test]
    fn test_headings() {
        let headings = rule("headings");
        assert_eq!(headings.replace("<h1>Title</h1>"), "\r\n\r\n# Title\r\n\r\n");
        assert_eq!(headings.replace("<h3 id=x>\r\n  Deep\r\n  title </h3>"), "\r\n\r\n### Deep title\r\n\r\n");
        assert_eq!(headings.replace("<h6>x</h6>"), "\r\n\r\n###### x\r\n\r\n");
        assert_eq!(headings.replace("<h2> </h2>"), "");
    }

    #[test]
    fn test_setext_headings() {
        let options = MarkdownOptions {
            heading_style: HeadingStyle::Setext,
            ..Default::default()
        };
        let set = Markdown::with_options(options).replacers().unwrap();
        let headings = set.get("headings").unwrap();
        assert_eq!(headings.replace("<h1>Title</h1>"), "\r\n\r\nTitle\r\n=====\r\n\r\n");
        assert_eq!(headings.replace("<h2>Sub</h2>"), "\r\n\r\nSub\r\n---\r\n\r\n");
        assert_eq!(headings.replace("<h3>Deep</h3>"), "\r\n\r\n### Deep\r\n\r\n");
    }

    #[test]
    fn test_indented_code_block() {
        let pre = rule("preformatted");
        assert_eq!(
            pre.replace("<pre><code>fn main() {\r\n\r\n}</code></pre>"),
            "\r\n\r\n    fn main() {\r\n\r\n    }\r\n\r\n"
        );
    }

    #[test]
    fn test_fenced_code_block_language() {
        let options = MarkdownOptions {
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        };
        let set = Markdown::with_options(options).replacers().unwrap();
        let pre = set.get("preformatted").unwrap();
        assert_eq!(
            pre.replace(r#"<pre><code class="language-rust">let x = 1;</code></pre>"#),
            "\r\n\r\n```rust\r\nlet x = 1;\r\n```\r\n\r\n"
        );
        assert_eq!(
            pre.replace("<pre>plain</pre>"),
            "\r\n\r\n```\r\nplain\r\n```\r\n\r\n"
        );
    }

    #[test]
    fn test_fence_and_hr_options() {
        let options = MarkdownOptions {
            hr: "---".to_string(),
            fence: "~~~".to_string(),
            ..Default::default()
        };
        let set = Markdown::with_options(options.clone()).replacers().unwrap();
        assert_eq!(set.get("horizontal_rules").unwrap().replace("a<hr>b"), "a\r\n\r\n---\r\n\r\nb");
        assert_eq!(set.get("preformatted").unwrap().replace("<pre>x</pre>"), "\r\n\r\n    x\r\n\r\n");

        let fenced = MarkdownOptions {
            code_block_style: CodeBlockStyle::Fenced,
            ..options
        };
        let set = Markdown::with_options(fenced).replacers().unwrap();
        assert_eq!(set.get("preformatted").unwrap().replace("<pre>x</pre>"), "\r\n\r\n~~~\r\nx\r\n~~~\r\n\r\n");
    }

    #[test]
    fn test_lists() {
        let ul = rule("unordered_lists");
        assert_eq!(
            ul.replace("<ul>\r\n  <li>One</li>\r\n  <li>Two\r\n  lines</li>\r\n</ul>"),
            "\r\n\r\n- One\r\n- Two\r\n  lines\r\n\r\n"
        );
        let ol = rule("ordered_lists");
        assert_eq!(
            ol.replace("<ol start=\"3\"><li>a<li>b</ol>"),
            "\r\n\r\n3. a\r\n4. b\r\n\r\n"
        );
        assert_eq!(ol.replace("<ol>text</ol>"), "<ol>text</ol>");
    }

    #[test]
    fn test_ordered_list_start_at_u64_max() {
        let ol = rule("ordered_lists");
        assert_eq!(
            ol.replace(r#"<ol start="18446744073709551615"><li>a</li><li>b</li></ol>"#),
            "\r\n\r\n18446744073709551615. a\r\n18446744073709551616. b\r\n\r\n"
        );
    }

    #[test]
    fn test_list_item_keeps_hard_break_and_code() {
        let ul = rule("unordered_lists");
        assert_eq!(ul.replace("<ul><li>a  \r\nb</li></ul>"), "\r\n\r\n- a  \r\n  b\r\n\r\n");
        assert_eq!(
            ul.replace("<ul><li>Run\r\n\r\n    make\r\n\r\n</li></ul>"),
            "\r\n\r\n- Run\r\n\r\n      make\r\n\r\n"
        );
    }

    #[test]
    fn test_tables() {
        let table = rule("tables");
        assert_eq!(
            table.replace("<table><tr><td>A</td><td>B|C</td></tr><tr><td>1</td><td>2</td></tr></table>"),
            "\r\n\r\n| A | B\\|C |\r\n| 1 | 2 |\r\n\r\n"
        );
    }

    #[test]
    fn test_blockquote() {
        let quote = rule("blockquotes");
        assert_eq!(
            quote.replace("<blockquote>\r\n  one\r\n\r\n  two\r\n</blockquote>"),
            "\r\n\r\n> one\r\n> \r\n> two\r\n\r\n"
        );
    }

    #[test]
    fn test_blockquote_keeps_hard_break_and_code() {
        let quote = rule("blockquotes");
        assert_eq!(quote.replace("<blockquote>a  \r\nb</blockquote>"), "\r\n\r\n> a  \r\n> b\r\n\r\n");
        assert_eq!(
            quote.replace("<blockquote>\r\n\r\n    fn x() {\r\n        y();\r\n    }\r\n\r\n</blockquote>"),
            "\r\n\r\n>     fn x() {\r\n>         y();\r\n>     }\r\n\r\n"
        );
    }

    #[test]
    fn test_trailing_line_breaks() {
        let rule = rule("trailing_line_breaks");
        assert_eq!(rule.replace("Line<br>"), "Line");
        assert_eq!(rule.replace("Line<BR/>\r\n</div>\r\n"), "Line</div>\r\n");
        assert_eq!(rule.replace("a<br>b"), "a<br>b");
    }

    #[test]
    fn test_document_title_is_dropped() {
        let title = rule("document_title");
        assert_eq!(title.replace("<head><title>\r\nT\r\n</title></head>"), "<head></head>");
    }

    #[test]
    fn test_links() {
        let links = rule("links");
        assert_eq!(
            links.replace(r#"<a href=" https://example.com " title="Example">Link</a>"#),
            r#"[Link](https://example.com "Example")"#
        );
        assert_eq!(links.replace(r#"<a name="top">Top</a>"#), "Top");
    }

    #[test]
    fn test_images() {
        let images = rule("images");
        assert_eq!(
            images.replace(r#"<img src="test.png" alt="Alt">"#),
            "![Alt](test.png)"
        );
        assert_eq!(images.replace(r#"<img alt="no source">"#), r#"<img alt="no source">"#);
    }

    #[test]
    fn test_wrappers() {
        let set = Markdown::new().replacers().unwrap();
        let out = ["block_wrappers", "inline_wrappers"]
            .iter()
            .fold("<html><body><div>a <span class=x>b</span></div></body></html>".to_string(), |acc, name| {
                set.get(name).unwrap().replace(&acc)
            });
        assert_eq!(out, "a b\r\n");
    }
}
