//! Splitting of phrases into individual reference tokens.

use regex::Regex;

use crate::error::LintError;

/// Splits a phrase on conjunctions, trimming the whitespace around them.
#[derive(Debug, Clone)]
pub struct ReferenceSplitter {
    separator: Regex,
}

impl ReferenceSplitter {
    /// Builds a splitter from conjunction fragments.
    pub fn new(conjunctions: &[&str]) -> Result<Self, LintError> {
        let pattern = format!(r"\s*(?:{})\s*", conjunctions.join("|"));
        Ok(Self {
            separator: LintError::compile("conjunction", &pattern)?,
        })
    }

    /// Returns the raw tokens of `phrase` in order.
    ///
    /// A phrase without a conjunction is a single token; an empty phrase has
    /// none.
    pub fn split(&self, phrase: &str) -> Vec<String> {
        if phrase.is_empty() {
            return Vec::new();
        }
        self.separator.split(phrase).map(str::to_string).collect()
    }
}
