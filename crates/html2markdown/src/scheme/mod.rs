//! Conversion schemes.
//!
//! A scheme is a named, fixed configuration producing the ordered replacers
//! for one Markdown dialect. Order matters: block-level rules run first so
//! that inline rules see already-flattened structure, and wrapper removal
//! runs last.

mod github;
mod markdown;

pub use github::GithubFlavored;
pub use markdown::Markdown;

use crate::replacer::ReplacerSet;
use crate::Result;

/// Produces the ordered replacers for one target dialect
pub trait Scheme {
    /// Short identifier for logging and CLI selection
    fn name(&self) -> &str;

    /// Build the replacers in application order
    fn replacers(&self) -> Result<ReplacerSet>;
}
