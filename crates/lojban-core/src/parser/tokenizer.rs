//! Tokenizer - splits a sentence into classified words
//!
//! Words are separated by runs of Unicode `White_Space` characters (as
//! `str::split_whitespace` defines them) and lowercased before they are
//! classified. That set includes U+0085 NEXT LINE but not U+FEFF, so a
//! byte-order mark inside a sentence stays part of the word it touches.
//! Classification tries, in order:
//!
//! 1. the lexicon (exact match),
//! 2. the shape patterns (first match wins),
//! 3. otherwise the word is `Unknown` and marked invalid.
//!
//! Guarantees:
//! - Deterministic: same input always produces same token stream
//! - Total: every input yields a token list, never an error

use serde::{Deserialize, Serialize};

use super::shape::match_shape;
use crate::lexicon::{self, WordCategory};

/// Gloss given to words nothing recognises
pub const UNKNOWN_GLOSS: &str = "unknown word";

/// A classified word in a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The word, lowercased
    pub word: String,
    /// 0-based position in the sentence
    pub index: usize,
    pub category: WordCategory,
    pub gloss: String,
    pub argument_slots: Vec<String>,
    /// Recognised by the lexicon or by a shape pattern
    pub valid: bool,
}

/// Where a word's classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Lexicon,
    /// Matched the named shape pattern
    Shape(&'static str),
    Unrecognized,
}

/// Classification of a single word, before it is placed in a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: WordCategory,
    pub gloss: String,
    pub argument_slots: Vec<String>,
    pub source: Source,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        self.source != Source::Unrecognized
    }

    fn into_token(self, word: String, index: usize) -> Token {
        let valid = self.is_valid();
        Token {
            word,
            index,
            category: self.category,
            gloss: self.gloss,
            argument_slots: self.argument_slots,
            valid,
        }
    }
}

/// Classify one word. Case-insensitive.
pub fn classify(word: &str) -> Classification {
    let word = word.to_lowercase();

    if let Some(entry) = lexicon::lookup(&word) {
        return Classification {
            category: entry.category,
            gloss: entry.gloss.to_string(),
            argument_slots: entry.argument_slots.iter().map(|s| s.to_string()).collect(),
            source: Source::Lexicon,
        };
    }

    if let Some(shape) = match_shape(&word) {
        return Classification {
            category: shape.category,
            gloss: format!("({})", shape.name),
            argument_slots: Vec::new(),
            source: Source::Shape(shape.name),
        };
    }

    Classification {
        category: WordCategory::Unknown,
        gloss: UNKNOWN_GLOSS.to_string(),
        argument_slots: Vec::new(),
        source: Source::Unrecognized,
    }
}

/// Split `text` into words and classify each one.
///
/// Empty or whitespace-only text gives an empty list.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, raw)| {
            let word = raw.to_lowercase();
            let classification = classify(&word);
            tracing::trace!(
                word = %word,
                index,
                category = %classification.category,
                source = ?classification.source,
                "classified word"
            );
            classification.into_token(word, index)
        })
        .collect()
}
