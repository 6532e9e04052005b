//! Imperative mood detection for shortlogs.

pub mod tagger;

pub use tagger::{lexicon, lexicon_loaded, HeuristicTagger, Lexicon};

/// A word with its part-of-speech tag (Penn Treebank style)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Word as written
    pub word: String,
    /// Tag such as `VB`, `VBD`, `VBZ` or `VBG`
    pub tag: String,
}

impl TaggedToken {
    /// Creates a tagged token
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Tags the words of the first sentence of a text
pub trait PosTagger {
    /// Returns the tokens of the first sentence of `text` in order
    fn tag_first_sentence(&self, text: &str) -> Vec<TaggedToken>;
}

const NON_IMPERATIVE_TAGS: [&str; 3] = ["VBZ", "VBD", "VBG"];

/// Returns the offending first token if `text` is not phrased as a command
///
/// `text` is tagged as given; callers strip any `topic:` prefix beforehand.
pub fn check_imperative(text: &str, tagger: &dyn PosTagger) -> Option<TaggedToken> {
    let first = tagger.tag_first_sentence(text).into_iter().next()?;

    let flawed = NON_IMPERATIVE_TAGS
        .iter()
        .any(|tag| first.tag.starts_with(tag))
        || first.word.ends_with("ing");

    flawed.then_some(first)
}
