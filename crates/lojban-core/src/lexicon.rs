//! Lexicon - the fixed table of known Lojban words
//!
//! Every entry maps a lowercase word to its grammatical category, an English
//! gloss and, for predicates, the ordered descriptions of its argument
//! places. The table is baked into the binary and never changes at run time.
//!
//! Lookups go through a lazily built index; enumeration walks the table in
//! declaration order so listings are stable.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ── Word categories ───────────────────────────────────────

/// Grammatical category of a word. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    /// selbri: a relation with numbered argument places
    Predicate,
    /// sumti: fills a place of a predicate
    Argument,
    /// gadri: turns a predicate into a description
    Article,
    /// cmavo: structure word without content of its own
    Particle,
    /// Logical connective between predicates or arguments
    Connective,
    /// cmene: a dotted name like `.djan.`
    Name,
    /// Digit word
    Number,
    /// Recognised by neither the lexicon nor a shape pattern
    Unknown,
}

impl WordCategory {
    /// All categories, in display order
    pub const ALL: [WordCategory; 8] = [
        WordCategory::Predicate,
        WordCategory::Argument,
        WordCategory::Article,
        WordCategory::Particle,
        WordCategory::Connective,
        WordCategory::Name,
        WordCategory::Number,
        WordCategory::Unknown,
    ];

    /// Lowercase name used in JSON and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            WordCategory::Predicate => "predicate",
            WordCategory::Argument => "argument",
            WordCategory::Article => "article",
            WordCategory::Particle => "particle",
            WordCategory::Connective => "connective",
            WordCategory::Name => "name",
            WordCategory::Number => "number",
            WordCategory::Unknown => "unknown",
        }
    }

    /// The Lojban grammar term for the category
    pub fn lojban_term(self) -> &'static str {
        match self {
            WordCategory::Predicate => "selbri",
            WordCategory::Argument => "sumti",
            WordCategory::Article => "gadri",
            WordCategory::Particle => "cmavo",
            WordCategory::Connective => "connective",
            WordCategory::Name => "cmene",
            WordCategory::Number => "number",
            WordCategory::Unknown => "unknown",
        }
    }

    /// Highlight colour for the category in token displays, as `#rrggbb`
    pub fn hex_color(self) -> &'static str {
        match self {
            WordCategory::Predicate => "#ff6b6b",
            WordCategory::Argument => "#4ecdc4",
            WordCategory::Article => "#45b7d1",
            WordCategory::Connective => "#ffa502",
            WordCategory::Particle => "#95afc0",
            WordCategory::Number => "#a29bfe",
            WordCategory::Name => "#fd79a8",
            WordCategory::Unknown => "#dfe6e9",
        }
    }

    /// Whether a word of this category can stand as the subject of a predicate
    pub fn can_start_subject(self) -> bool {
        matches!(
            self,
            WordCategory::Argument | WordCategory::Article | WordCategory::Name
        )
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for WordCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "predicate" | "selbri" => Ok(WordCategory::Predicate),
            "argument" | "sumti" => Ok(WordCategory::Argument),
            "article" | "gadri" => Ok(WordCategory::Article),
            "particle" | "cmavo" => Ok(WordCategory::Particle),
            "connective" | "connector" => Ok(WordCategory::Connective),
            "name" | "cmene" => Ok(WordCategory::Name),
            "number" => Ok(WordCategory::Number),
            "unknown" => Ok(WordCategory::Unknown),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

// ── Entries ───────────────────────────────────────────────

/// Grammatical metadata for one known word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    pub category: WordCategory,
    pub gloss: &'static str,
    /// Place descriptions, in place order. Empty for everything but predicates.
    pub argument_slots: &'static [&'static str],
}

impl LexiconEntry {
    const fn predicate(gloss: &'static str, argument_slots: &'static [&'static str]) -> Self {
        LexiconEntry {
            category: WordCategory::Predicate,
            gloss,
            argument_slots,
        }
    }

    const fn word(category: WordCategory, gloss: &'static str) -> Self {
        LexiconEntry {
            category,
            gloss,
            argument_slots: &[],
        }
    }
}

use WordCategory::{Argument, Article, Connective, Number, Particle};

const LEXICON: &[(&str, LexiconEntry)] = &[
    // Predicates
    ("broda", LexiconEntry::predicate("is-X (variable predicate)", &["x₁"])),
    ("gleki", LexiconEntry::predicate("is-happy", &["x₁ is happy", "x₂ about condition"])),
    (
        "tavla",
        LexiconEntry::predicate(
            "talks/speaks",
            &["x₁ talks", "x₂ to listener", "x₃ about subject", "x₄ in language"],
        ),
    ),
    (
        "klama",
        LexiconEntry::predicate(
            "goes/comes",
            &["x₁ goes", "x₂ to destination", "x₃ from origin", "x₄ via route", "x₅ by means"],
        ),
    ),
    ("dunda", LexiconEntry::predicate("gives", &["x₁ gives", "x₂ gift", "x₃ to receiver"])),
    ("prami", LexiconEntry::predicate("loves", &["x₁ loves", "x₂ beloved"])),
    ("citka", LexiconEntry::predicate("eats", &["x₁ eats", "x₂ food"])),
    ("nelci", LexiconEntry::predicate("likes", &["x₁ likes", "x₂ object-of-fondness"])),
    ("djuno", LexiconEntry::predicate("knows", &["x₁ knows", "x₂ fact", "x₃ about subject"])),
    (
        "cusku",
        LexiconEntry::predicate("says/expresses", &["x₁ says", "x₂ expression", "x₃ to audience"]),
    ),
    // Pronouns
    ("mi", LexiconEntry::word(Argument, "I/me/we")),
    ("do", LexiconEntry::word(Argument, "you")),
    ("ti", LexiconEntry::word(Argument, "this (near speaker)")),
    ("ta", LexiconEntry::word(Argument, "that (medium distance)")),
    ("tu", LexiconEntry::word(Argument, "that (far)")),
    ("ko", LexiconEntry::word(Argument, "you (imperative)")),
    // Articles
    ("lo", LexiconEntry::word(Article, "one-or-more of those which are")),
    ("le", LexiconEntry::word(Article, "the (specific)")),
    ("la", LexiconEntry::word(Article, "the one(s) named")),
    ("li", LexiconEntry::word(Article, "the number")),
    // Structure words
    ("cu", LexiconEntry::word(Particle, "separator (before selbri)")),
    (".i", LexiconEntry::word(Particle, "sentence separator")),
    ("vau", LexiconEntry::word(Particle, "end of bridi (optional)")),
    // Connectives
    ("je", LexiconEntry::word(Connective, "and (for selbri)")),
    ("ja", LexiconEntry::word(Connective, "or (inclusive, for selbri)")),
    ("jo", LexiconEntry::word(Connective, "if and only if (for selbri)")),
    ("ju", LexiconEntry::word(Connective, "whether or not (for selbri)")),
    (".a", LexiconEntry::word(Connective, "or (inclusive, for sumti)")),
    (".e", LexiconEntry::word(Connective, "and (for sumti)")),
    (".o", LexiconEntry::word(Connective, "if and only if (for sumti)")),
    (".u", LexiconEntry::word(Connective, "whether or not (for sumti)")),
    ("ge", LexiconEntry::word(Connective, "and (prefix for selbri)")),
    ("ga", LexiconEntry::word(Connective, "or (prefix for selbri)")),
    ("gi", LexiconEntry::word(Connective, "connector separator")),
    // Numbers
    ("no", LexiconEntry::word(Number, "0")),
    ("pa", LexiconEntry::word(Number, "1")),
    ("re", LexiconEntry::word(Number, "2")),
    ("ci", LexiconEntry::word(Number, "3")),
    ("vo", LexiconEntry::word(Number, "4")),
    ("mu", LexiconEntry::word(Number, "5")),
    ("xa", LexiconEntry::word(Number, "6")),
    ("ze", LexiconEntry::word(Number, "7")),
    ("bi", LexiconEntry::word(Number, "8")),
    ("so", LexiconEntry::word(Number, "9")),
];

static INDEX: LazyLock<HashMap<&'static str, &'static LexiconEntry>> =
    LazyLock::new(|| LEXICON.iter().map(|(word, entry)| (*word, entry)).collect());

// ── Public API ────────────────────────────────────────────

/// Look up a word, ignoring case. Returns `None` for words not in the table.
pub fn lookup(word: &str) -> Option<&'static LexiconEntry> {
    INDEX
        .get(word)
        .or_else(|| INDEX.get(word.to_lowercase().as_str()))
        .copied()
}

/// The whole table, in declaration order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static LexiconEntry)> {
    LEXICON.iter().map(|(word, entry)| (*word, entry))
}

/// All entries of one category, in declaration order
pub fn all_of_category(category: WordCategory) -> Vec<(&'static str, &'static LexiconEntry)> {
    entries()
        .filter(|(_, entry)| entry.category == category)
        .collect()
}

/// Every known predicate
pub fn predicates() -> Vec<(&'static str, &'static LexiconEntry)> {
    all_of_category(WordCategory::Predicate)
}

/// Every known pronoun and article: the words that can open an argument
pub fn arguments_and_articles() -> Vec<(&'static str, &'static LexiconEntry)> {
    entries()
        .filter(|(_, entry)| {
            matches!(entry.category, WordCategory::Argument | WordCategory::Article)
        })
        .collect()
}
