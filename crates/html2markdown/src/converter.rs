//! Converter - the main entry point for HTML to Markdown conversion.

use tracing::debug;

use crate::replacer::{Replacer, ReplacerSet};
use crate::scheme::{Markdown, Scheme};
use crate::whitespace::{Cleanup, Normalizer};
use crate::Result;

/// Converts HTML to Markdown with a fixed, ordered set of replacers.
///
/// The replacers are bound at construction and never change afterwards, so
/// a single converter can be shared between threads and reused for any
/// number of conversions.
pub struct Converter {
    replacers: Vec<Replacer>,
    normalizer: Normalizer,
    cleanup: Cleanup,
}

impl Converter {
    /// Create a Converter with the standard Markdown scheme
    pub fn new() -> Self {
        // Built-in patterns are fixed literals.
        Self::with_scheme(&Markdown::new()).expect("built-in Markdown scheme compiles")
    }

    /// Create a Converter with a custom scheme
    pub fn with_scheme<S: Scheme + ?Sized>(scheme: &S) -> Result<Self> {
        let replacers = scheme.replacers()?;
        debug!(
            "Building converter for scheme '{}' with {} replacers",
            scheme.name(),
            replacers.len()
        );
        Self::from_replacers(replacers)
    }

    /// Create a Converter from an explicit replacer set
    pub fn from_replacers(replacers: ReplacerSet) -> Result<Self> {
        Ok(Self {
            replacers: replacers.into_iter().map(|(_, r)| r).collect(),
            normalizer: Normalizer::new()?,
            cleanup: Cleanup::new()?,
        })
    }

    /// Convert HTML to Markdown.
    ///
    /// Never fails: markup no replacer recognises is carried through as text.
    pub fn convert(&self, html: &str) -> String {
        let normalized = self.normalizer.normalize(html);
        let converted = self
            .replacers
            .iter()
            .fold(normalized, |current, replacer| replacer.replace(&current));
        let markdown = self.cleanup.clean(&converted);
        debug!("Converted {} bytes of HTML to {} bytes of Markdown", html.len(), markdown.len());
        markdown
    }

    /// Number of replacers applied per conversion
    pub fn replacer_count(&self) -> usize {
        self.replacers.len()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
