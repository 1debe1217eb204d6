//! # html2markdown
//!
//! Convert HTML markup to Markdown by folding an ordered sequence of
//! pattern-based replacers over the input text.
//!
//! ## Design
//!
//! No DOM is built. A [`Scheme`] produces an ordered [`ReplacerSet`], and a
//! [`Converter`] runs every [`Replacer`] in that order between a
//! pre-normalization pass and a whitespace cleanup pass:
//!
//! ```text
//! HTML ──▶ normalize ──▶ replacer 1 ──▶ … ──▶ replacer n ──▶ cleanup ──▶ Markdown
//! ```
//!
//! Structural rules run before inline rules, which run before wrapper
//! removal. Markup no rule understands passes through as literal text.
//!
//! ## Example
//!
//! ```rust
//! use html2markdown::Converter;
//!
//! let converter = Converter::new();
//! let markdown = converter.convert("<h1>Hi</h1>\n<p>World</p>");
//! assert_eq!(markdown, "# Hi\r\n\r\nWorld");
//! ```
//!
//! ## Example (custom scheme)
//!
//! ```rust
//! use html2markdown::{Converter, Markdown, Replacer, Scheme};
//!
//! let mut replacers = Markdown::new().replacers().unwrap();
//! replacers
//!     .insert_before("strong", "mark", Replacer::tag_pair(&["mark"], "==", "==").unwrap())
//!     .unwrap();
//!
//! let converter = Converter::from_replacers(replacers).unwrap();
//! assert_eq!(converter.convert("<mark>hot</mark>"), "==hot==");
//! ```

mod converter;
mod fs;
pub mod options;
pub mod replacer;
pub mod scheme;
mod utilities;
mod whitespace;

pub use converter::Converter;
pub use options::{CodeBlockStyle, HeadingStyle, MarkdownOptions};
pub use replacer::{
    Attributes, Element, ElementReplacer, PatternReplacer, RenderFn, Replacer, ReplacerSet,
    TagReplacer,
};
pub use scheme::{GithubFlavored, Markdown, Scheme};

use std::path::PathBuf;

/// Error type for html2markdown operations
#[derive(Debug, thiserror::Error)]
pub enum Html2MarkdownError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown replacer '{0}'")]
    UnknownReplacer(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: '{}'", .path.display())]
    DestinationExists { path: PathBuf },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove '{}': {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Html2MarkdownError>;
