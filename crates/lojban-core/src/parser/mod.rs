//! Sentence parser - tokenizer, shape patterns, and the `parse_sentence` entry point
//!
//! Parsing here means classification plus structural validation. No syntax
//! tree is built.

pub mod shape;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

use crate::validator::{self, Diagnostic};
use tokenizer::Token;

/// Everything known about one input sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Tokens in input order
    pub tokens: Vec<Token>,
    /// True iff `errors` is empty; warnings never affect it
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ParseResult {
    /// The recognised words re-joined with single spaces
    pub fn sentence(&self) -> String {
        let words: Vec<&str> = self.tokens.iter().map(|t| t.word.as_str()).collect();
        words.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Pretty JSON in the shape the web front end consumes
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tokenize and validate a sentence.
///
/// # Guarantees
/// - Deterministic: same input always produces an identical result
/// - Total: never fails; unknown words come back as error diagnostics
///
/// # Example
/// ```
/// let result = lojban_core::parse_sentence("mi cu prami do");
/// assert!(result.valid);
/// assert_eq!(result.tokens.len(), 4);
/// ```
pub fn parse_sentence(text: &str) -> ParseResult {
    let tokens = tokenizer::tokenize(text);
    let validation = validator::validate(&tokens);

    tracing::debug!(
        words = tokens.len(),
        errors = validation.errors.len(),
        warnings = validation.warnings.len(),
        valid = validation.valid,
        "parsed sentence"
    );

    ParseResult {
        tokens,
        valid: validation.valid,
        errors: validation.errors,
        warnings: validation.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordCategory;
    use crate::validator::DiagnosticKind;

    fn categories(result: &ParseResult) -> Vec<WordCategory> {
        result.tokens.iter().map(|t| t.category).collect()
    }

    // ── Empty input ────────────────────────────────────

    #[test]
    fn test_parse_empty_sentence() {
        let empty = parse_sentence("");
        assert!(empty.tokens.is_empty());
        assert!(empty.valid);
        assert!(empty.errors.is_empty());
        assert!(empty.warnings.is_empty());
        assert_eq!(parse_sentence("   "), empty);
        assert_eq!(parse_sentence("\t\n"), empty);
    }

    // ── Lesson sentences ───────────────────────────────

    #[test]
    fn test_parse_subject_predicate() {
        let result = parse_sentence("mi gleki");
        assert_eq!(
            categories(&result),
            vec![WordCategory::Argument, WordCategory::Predicate]
        );
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_predicate_first() {
        let result = parse_sentence("gleki mi");
        assert!(result.valid);
        assert!(result
            .warnings
            .iter()
            .all(|w| w.kind != DiagnosticKind::MissingSubject));
    }

    #[test]
    fn test_parse_unknown_word() {
        let result = parse_sentence("xyzzy gleki");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.contains("xyzzy"));
        assert_eq!(result.errors[0].positions, vec![0]);
    }

    #[test]
    fn test_parse_bridi_with_cu() {
        let result = parse_sentence("mi cu prami do");
        assert_eq!(
            categories(&result),
            vec![
                WordCategory::Argument,
                WordCategory::Particle,
                WordCategory::Predicate,
                WordCategory::Argument,
            ]
        );
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_connectives_only() {
        let result = parse_sentence("je ja");
        assert_eq!(
            categories(&result),
            vec![WordCategory::Connective, WordCategory::Connective]
        );
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, DiagnosticKind::MissingPredicate);
    }

    #[test]
    fn test_parse_sumti_connective() {
        let result = parse_sentence("mi .e do cu tavla");
        assert!(result.valid);
        assert!(result.warnings.is_empty());
        assert_eq!(result.tokens[1].category, WordCategory::Connective);
    }

    // ── Helpers ────────────────────────────────────────

    #[test]
    fn test_sentence_normalises_spacing_and_case() {
        let result = parse_sentence("  Mi   CU prami\tdo ");
        assert_eq!(result.sentence(), "mi cu prami do");
        assert!(!result.is_empty());
    }

    #[test]
    fn test_to_json_shape() {
        let json = parse_sentence("cu gleki").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["tokens"][1]["argumentSlots"][0], "x₁ is happy");
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);
        assert_eq!(value["warnings"][0]["positions"][0], 1);
        assert_eq!(value["warnings"][0]["message"], crate::validator::MISSING_SUBJECT_MESSAGE);
    }

    #[test]
    fn test_json_round_trip() {
        let result = parse_sentence("lo gleki cu tavla xyzzy");
        let json = result.to_json().unwrap();
        let back: ParseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    // ── Determinism proof ──────────────────────────────

    #[test]
    fn test_parse_determinism_100_iterations() {
        let input = "la .djan. .e mi cu klama xyzzy je tavla";
        let first = parse_sentence(input);

        for i in 0..100 {
            let result = parse_sentence(input);
            assert_eq!(first, result, "Determinism failure at iteration {}", i);
        }
    }
}
