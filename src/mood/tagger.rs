//! Built-in part-of-speech tagger.

use std::collections::HashSet;
use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{PosTagger, TaggedToken};

/// Words are runs of word characters with internal apostrophes; anything
/// else that is not whitespace stands alone.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*|[^\w\s]").unwrap());

/// End of the first sentence.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?](?:\s|$)").unwrap());

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9][0-9.,]*$").unwrap());

/// Word lists that override the suffix rules
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Irregular past tense forms
    pub past: HashSet<String>,
    /// Base forms with inflection-like endings
    pub base: HashSet<String>,
    /// Third person forms without a plain `-s` ending
    pub third_person: HashSet<String>,
}

impl Lexicon {
    fn load() -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(include_str!("../templates/lexicon.yaml"))
    }

    /// Tag for `word` in verb position, if the lexicon knows it
    pub fn lookup(&self, word: &str) -> Option<&'static str> {
        let word = word.to_lowercase();
        if self.past.contains(&word) {
            Some("VBD")
        } else if self.third_person.contains(&word) {
            Some("VBZ")
        } else if self.base.contains(&word) {
            Some("VB")
        } else {
            None
        }
    }
}

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Get the process-wide lexicon, loading it on first use
pub fn lexicon() -> &'static Lexicon {
    LEXICON.get_or_init(|| match Lexicon::load() {
        Ok(lexicon) => {
            debug!(
                past = lexicon.past.len(),
                base = lexicon.base.len(),
                third_person = lexicon.third_person.len(),
                "Loaded tagger lexicon"
            );
            lexicon
        }
        Err(e) => {
            warn!("Failed to parse tagger lexicon, using suffix rules only: {e}");
            Lexicon::default()
        }
    })
}

/// Whether [`lexicon`] has been initialized in this process
pub fn lexicon_loaded() -> bool {
    LEXICON.get().is_some()
}

/// Suffix and lexicon based tagger
///
/// Only the first word is treated as a verb; commit shortlogs lead with the
/// verb when they are phrased as commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    fn first_sentence(text: &str) -> &str {
        match SENTENCE_END.find(text) {
            Some(end) => &text[..end.start() + 1],
            None => text,
        }
    }

    fn tag_verb(word: &str) -> &'static str {
        if let Some(tag) = Self::tag_other(word) {
            return tag;
        }
        if let Some(tag) = lexicon().lookup(word) {
            return tag;
        }

        let lower = word.to_lowercase();
        if lower.ends_with("ing") {
            "VBG"
        } else if lower.ends_with("ed") {
            "VBD"
        } else if lower.ends_with('s') && !lower.ends_with("ss") {
            "VBZ"
        } else {
            "VB"
        }
    }

    fn tag_other(word: &str) -> Option<&'static str> {
        if DIGITS.is_match(word) {
            Some("CD")
        } else if !word.chars().any(char::is_alphanumeric) {
            Some(".")
        } else {
            None
        }
    }
}

impl PosTagger for HeuristicTagger {
    fn tag_first_sentence(&self, text: &str) -> Vec<TaggedToken> {
        WORD.find_iter(Self::first_sentence(text))
            .enumerate()
            .map(|(index, word)| {
                let word = word.as_str();
                let tag = if index == 0 {
                    Self::tag_verb(word)
                } else {
                    Self::tag_other(word).unwrap_or("NN")
                };
                TaggedToken::new(word, tag)
            })
            .collect()
    }
}
