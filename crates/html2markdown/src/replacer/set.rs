//! Named, ordered collection of replacers.

use indexmap::IndexMap;

use super::Replacer;
use crate::{Html2MarkdownError, Result};

/// Ordered collection of named replacers.
///
/// Iteration order is the order in which the converter applies the rules.
/// Names let schemes derive from one another by swapping or inserting
/// individual rules without rebuilding the whole sequence.
#[derive(Default)]
pub struct ReplacerSet {
    replacers: IndexMap<String, Replacer>,
}

impl ReplacerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacer. An existing replacer with the same name is
    /// overwritten in place and keeps its position.
    pub fn push(&mut self, name: &str, replacer: Replacer) -> &mut Self {
        self.replacers.insert(name.to_string(), replacer);
        self
    }

    /// Insert a replacer immediately before `anchor`
    pub fn insert_before(
        &mut self,
        anchor: &str,
        name: &str,
        replacer: Replacer,
    ) -> Result<&mut Self> {
        self.insert_at_anchor(anchor, 0, name, replacer)
    }

    /// Insert a replacer immediately after `anchor`
    pub fn insert_after(
        &mut self,
        anchor: &str,
        name: &str,
        replacer: Replacer,
    ) -> Result<&mut Self> {
        self.insert_at_anchor(anchor, 1, name, replacer)
    }

    fn insert_at_anchor(
        &mut self,
        anchor: &str,
        offset: usize,
        name: &str,
        replacer: Replacer,
    ) -> Result<&mut Self> {
        if !self.replacers.contains_key(anchor) {
            return Err(Html2MarkdownError::UnknownReplacer(anchor.to_string()));
        }
        if name == anchor {
            return self.replace(name, replacer);
        }
        self.replacers.shift_remove(name);
        let index = self
            .replacers
            .get_index_of(anchor)
            .ok_or_else(|| Html2MarkdownError::UnknownReplacer(anchor.to_string()))?;
        self.replacers
            .shift_insert(index + offset, name.to_string(), replacer);
        Ok(self)
    }

    /// Swap the replacer registered under `name`, keeping its position
    pub fn replace(&mut self, name: &str, replacer: Replacer) -> Result<&mut Self> {
        let slot = self
            .replacers
            .get_mut(name)
            .ok_or_else(|| Html2MarkdownError::UnknownReplacer(name.to_string()))?;
        *slot = replacer;
        Ok(self)
    }

    /// Remove a replacer, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<Replacer> {
        self.replacers.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Replacer> {
        self.replacers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.replacers.contains_key(name)
    }

    /// Replacer names in application order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.replacers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Replacer)> {
        self.replacers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.replacers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacers.is_empty()
    }
}

impl IntoIterator for ReplacerSet {
    type Item = (String, Replacer);
    type IntoIter = indexmap::map::IntoIter<String, Replacer>;

    fn into_iter(self) -> Self::IntoIter {
        self.replacers.into_iter()
    }
}
