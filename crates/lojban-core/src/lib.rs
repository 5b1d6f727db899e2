//! Lojban Core - word classifier and structural validator for the Logic Trainer
//!
//! This is the only part of the trainer with real grammar logic. Lesson
//! views, the construction game and the command-line tool all call
//! [`parse_sentence`] and render what it returns.
//!
//! # Architecture
//!
//! ```text
//! Text → Tokenizer → Tokens → Validator → ParseResult
//!           ↓
//!     Lexicon, then Shape Patterns
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: Same input always produces identical output
//! - **Total**: Every input produces a result; nothing is raised
//! - **Stateless**: The lexicon and shape tables are read-only statics

pub mod cache;
pub mod error;
pub mod exercise;
pub mod lexicon;
pub mod parser;
pub mod validator;

/// Version of this crate, for front ends that report it
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cache::ParseCache;
pub use error::{Error, Result};
pub use exercise::{check_answer, Construction};
pub use lexicon::{LexiconEntry, WordCategory};
pub use parser::tokenizer::{classify, tokenize, Token};
pub use parser::{parse_sentence, ParseResult};
pub use validator::{validate, Diagnostic, DiagnosticKind, Severity, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }

    // ── Scenarios ──────────────────────────────────────

    #[test]
    fn test_scenario_subject_predicate() {
        let result = parse_sentence("mi gleki");
        assert_eq!(result.tokens.len(), 2);
        assert_eq!(result.tokens[0].category, WordCategory::Argument);
        assert_eq!(result.tokens[1].category, WordCategory::Predicate);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scenario_unknown_word() {
        let result = parse_sentence("xyzzy gleki");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].positions, vec![0]);
    }

    #[test]
    fn test_lexicon_words_keep_lexicon_metadata() {
        for (word, entry) in lexicon::entries() {
            let token = &tokenize(word)[0];
            assert_eq!(token.category, entry.category, "word: {}", word);
            assert_eq!(token.gloss, entry.gloss, "word: {}", word);
            assert_eq!(token.argument_slots, entry.argument_slots, "word: {}", word);
            assert!(token.valid);
        }
    }

    // ── Properties ─────────────────────────────────────

    fn sentence() -> impl Strategy<Value = String> {
        let word = prop_oneof![
            prop::sample::select(lexicon::entries().map(|(w, _)| w).collect::<Vec<_>>())
                .prop_map(String::from),
            "[a-z.']{1,6}",
            "[A-Za-z]{1,5}",
        ];
        (prop::collection::vec(word, 0..8), "[ \t\n]{1,3}").prop_map(|(words, sep)| {
            format!("{sep}{}{sep}", words.join(&sep))
        })
    }

    proptest! {
        #[test]
        fn test_parse_is_pure(text in sentence()) {
            prop_assert_eq!(parse_sentence(&text), parse_sentence(&text));
        }

        #[test]
        fn test_indices_are_positions(text in sentence()) {
            let result = parse_sentence(&text);
            prop_assert_eq!(result.tokens.len(), text.split_whitespace().count());
            for (i, token) in result.tokens.iter().enumerate() {
                prop_assert_eq!(token.index, i);
            }
        }

        #[test]
        fn test_valid_iff_no_errors(text in sentence()) {
            let result = parse_sentence(&text);
            prop_assert_eq!(result.valid, result.errors.is_empty());
            prop_assert_eq!(result.valid, result.tokens.iter().all(|t| t.valid));
        }

        #[test]
        fn test_never_panics_on_arbitrary_text(text in any::<String>()) {
            let result = parse_sentence(&text);
            prop_assert!(result.errors.len() <= 1);
        }

        #[test]
        fn test_whitespace_only_is_empty(text in "[ \t\r\n]{0,10}") {
            let result = parse_sentence(&text);
            prop_assert!(result.tokens.is_empty());
            prop_assert!(result.valid);
            prop_assert!(result.warnings.is_empty());
        }
    }
}
