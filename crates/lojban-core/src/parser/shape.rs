//! Shape patterns - morphological fallbacks for words missing from the lexicon
//!
//! Each pattern is a heuristic for the word class a Lojban word belongs to,
//! judged only by its letters. The list is tried in declaration order and
//! the first match wins, so the order is part of the behavior.
//!
//! Matching is ASCII-only. Case is ignored, but letters that merely fold to
//! ASCII under Unicode rules (`ſ`, the Kelvin sign) do not match.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::WordCategory;

/// One fallback rule: a named regular expression and the category it implies
#[derive(Debug)]
pub struct ShapePattern {
    pub name: &'static str,
    pub category: WordCategory,
    regex: Regex,
}

impl ShapePattern {
    fn new(name: &'static str, pattern: &str, category: WordCategory) -> Self {
        ShapePattern {
            name,
            category,
            regex: Regex::new(pattern).expect("shape pattern must compile"),
        }
    }

    /// Does `word` have this shape?
    pub fn matches(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// The regular expression source, for help output
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

static SHAPE_PATTERNS: LazyLock<Vec<ShapePattern>> = LazyLock::new(|| {
    vec![
        // CV'CV: consonant, vowel, optional apostrophes, consonant, vowel
        ShapePattern::new(
            "predicate",
            r"(?i-u)^[bcdfgjklmnprstvxz][aeiou]'*[bcdfgjklmnprstvxz][aeiou]$",
            WordCategory::Predicate,
        ),
        ShapePattern::new("pronoun", r"(?i-u)^(mi|do|ti|ta|tu|ko)$", WordCategory::Argument),
        ShapePattern::new("article", r"(?i-u)^(lo|le|la|li)$", WordCategory::Article),
        ShapePattern::new("separator", r"(?i-u)^(cu|vau)$", WordCategory::Particle),
        ShapePattern::new(
            "connective",
            r"(?i-u)^(je|ja|jo|ju|\.a|\.e|\.i|\.o|\.u|ge|ga|go|gu|gi)$",
            WordCategory::Connective,
        ),
        ShapePattern::new("name", r"(?i-u)^\.[a-z]+\.?$", WordCategory::Name),
        ShapePattern::new(
            "number",
            r"(?i-u)^(pa|re|ci|vo|mu|xa|ze|bi|so|no)$",
            WordCategory::Number,
        ),
    ]
});

/// The fallback chain, in evaluation order
pub fn shape_patterns() -> &'static [ShapePattern] {
    &SHAPE_PATTERNS
}

/// First pattern in the chain that `word` matches
pub fn match_shape(word: &str) -> Option<&'static ShapePattern> {
    shape_patterns().iter().find(|p| p.matches(word))
}
