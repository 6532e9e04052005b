//! Extraction of closing-keyword phrases from commit bodies.
//!
//! A phrase is everything a single closing keyword governs: the first
//! reference after the keyword plus any further references chained to it with
//! a conjunction, up to the end of the text or the next keyword.
//!
//! ```text
//! Fix #1112, #1115 and #123      -> "#1112, #1115 and #123"
//! Fix #1 and Resolve #2          -> "#1", "#2"
//! ```
//!
//! The grammar needs look-ahead (a token ends right before a conjunction, a
//! chained token must not start with a keyword), so matching is done by a
//! small scanner driven by anchored regexes rather than by one pattern.

use regex::Regex;

use crate::error::LintError;

/// A run of body text governed by one closing keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePhrase<'t> {
    /// The references, keyword excluded.
    pub text: &'t str,
}

/// Finds closing-keyword phrases for one dialect.
#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    /// Keyword followed by mandatory whitespace.
    keyword: Regex,
    /// Keyword anchored at the start of the haystack.
    keyword_at: Regex,
    /// Any conjunction anchored at the start of the haystack.
    conjunction_at: Regex,
    /// Each conjunction fragment, anchored, in priority order.
    conjunctions: Vec<Regex>,
}

impl PhraseExtractor {
    /// Builds an extractor from a keyword alternation and conjunction fragments.
    pub fn new(keyword_pattern: &str, conjunctions: &[&str]) -> Result<Self, LintError> {
        let alternation = conjunctions.join("|");

        let anchored = conjunctions
            .iter()
            .map(|fragment| LintError::compile("conjunction", &format!("^(?:{fragment})")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            keyword: LintError::compile("keyword", &format!(r"(?:{keyword_pattern})\s+"))?,
            keyword_at: LintError::compile("keyword", &format!("^(?:{keyword_pattern})"))?,
            conjunction_at: LintError::compile("conjunction", &format!("^(?:{alternation})"))?,
            conjunctions: anchored,
        })
    }

    /// Returns the phrases of `text`, left to right and non-overlapping.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<ReferencePhrase<'t>> {
        let mut phrases = Vec::new();
        let mut pos = 0;

        while let Some(keyword) = self.keyword.find_at(text, pos) {
            let start = keyword.end();
            match self.phrase_end(text, start) {
                Some(end) => {
                    phrases.push(ReferencePhrase {
                        text: &text[start..end],
                    });
                    pos = end;
                }
                // Keyword at the very end of the text: retry one character on.
                None => pos = next_boundary(text, keyword.start()),
            }
        }

        tracing::debug!(count = phrases.len(), "Extracted closing phrases");
        phrases
    }

    /// End of the phrase whose first token starts at `start`.
    fn phrase_end(&self, text: &str, start: usize) -> Option<usize> {
        let mut end = self.token_end(text, start)?;
        while let Some(next) = self.chained_token_end(text, end) {
            end = next;
        }
        Some(end)
    }

    /// End of the token starting at `start`.
    ///
    /// A token is a run of non-whitespace characters. It stops early right
    /// after a character that is immediately followed by a conjunction, so
    /// `#1,#2` yields `#1` first.
    fn token_end(&self, text: &str, start: usize) -> Option<usize> {
        let mut end = start;
        for (offset, ch) in text[start..].char_indices() {
            if ch.is_whitespace() {
                break;
            }
            end = start + offset + ch.len_utf8();
            if self.conjunction_at.is_match(&text[end..]) {
                break;
            }
        }
        (end > start).then_some(end)
    }

    /// End of the next token chained to the token ending at `end`, if any.
    ///
    /// Leading whitespace is tried longest-first and fragments in set order,
    /// so `#1 and #2` matches `\sand\s` after giving back one space.
    fn chained_token_end(&self, text: &str, end: usize) -> Option<usize> {
        let mut candidates = vec![end];
        for (offset, ch) in text[end..].char_indices() {
            if !ch.is_whitespace() {
                break;
            }
            candidates.push(end + offset + ch.len_utf8());
        }

        for &at in candidates.iter().rev() {
            for conjunction in &self.conjunctions {
                let Some(m) = conjunction.find(&text[at..]) else {
                    continue;
                };
                let token_start = skip_whitespace(text, at + m.end());
                if self.keyword_at.is_match(&text[token_start..]) {
                    continue;
                }
                if let Some(token_end) = self.token_end(text, token_start) {
                    return Some(token_end);
                }
            }
        }

        None
    }
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let rest = &text[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |ch| pos + ch.len_utf8())
}
