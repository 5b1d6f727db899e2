//! Exercise checking - answer matching for parse and construction exercises
//!
//! A parse exercise either expects one exact sentence or is free-form. A
//! construction exercise has the learner pick words one at a time until the
//! built list equals the target list.

use crate::parser::{parse_sentence, ParseResult};

/// Check a parsed answer against an exercise's expected sentence.
///
/// `None` marks a free-form exercise: any non-empty sentence is accepted.
/// Otherwise the normalised words, joined by single spaces, must equal the
/// trimmed expected answer exactly.
pub fn check_answer(result: &ParseResult, expected: Option<&str>) -> bool {
    match expected {
        None => !result.is_empty(),
        Some(answer) => result.sentence().trim() == answer.trim(),
    }
}

/// Parse `text` and check it in one step
pub fn check_text(text: &str, expected: Option<&str>) -> (ParseResult, bool) {
    let result = parse_sentence(text);
    let correct = check_answer(&result, expected);
    tracing::debug!(correct, free_form = expected.is_none(), "checked answer");
    (result, correct)
}

/// Word-by-word sentence construction state.
///
/// Owned by the caller; every mutation returns the parse of the sentence
/// built so far, or `None` once it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Construction {
    words: Vec<String>,
}

impl Construction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Append a word and reparse
    pub fn push(&mut self, word: impl Into<String>) -> Option<ParseResult> {
        self.words.push(word.into());
        self.parse()
    }

    /// Drop the last word and reparse
    pub fn pop(&mut self) -> Option<ParseResult> {
        self.words.pop();
        self.parse()
    }

    /// Clear every word. The parse of an empty sentence is always `None`.
    pub fn reset(&mut self) -> Option<ParseResult> {
        self.words.clear();
        self.parse()
    }

    pub fn parse(&self) -> Option<ParseResult> {
        if self.words.is_empty() {
            return None;
        }
        Some(parse_sentence(&self.text()))
    }

    /// Exact, element-wise comparison with the target word list
    pub fn matches<S: AsRef<str>>(&self, target: &[S]) -> bool {
        self.words.len() == target.len()
            && self
                .words
                .iter()
                .zip(target)
                .all(|(built, wanted)| built == wanted.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── check_answer ───────────────────────────────────

    #[test]
    fn test_exact_answer() {
        let result = parse_sentence("mi gleki");
        assert!(check_answer(&result, Some("mi gleki")));
        assert!(check_answer(&result, Some("  mi gleki ")));
        assert!(!check_answer(&result, Some("do gleki")));
    }

    #[test]
    fn test_answer_normalises_learner_input() {
        let result = parse_sentence("  MI   cu Prami  do");
        assert!(check_answer(&result, Some("mi cu prami do")));
    }

    #[test]
    fn test_expected_answer_is_not_normalised() {
        // only surrounding whitespace is trimmed from the expected answer
        let result = parse_sentence("mi gleki");
        assert!(!check_answer(&result, Some("mi  gleki")));
        assert!(!check_answer(&result, Some("Mi gleki")));
    }

    #[test]
    fn test_invalid_sentence_can_still_match() {
        let result = parse_sentence("xyzzy");
        assert!(!result.valid);
        assert!(check_answer(&result, Some("xyzzy")));
    }

    #[test]
    fn test_free_form() {
        assert!(check_answer(&parse_sentence("gleki"), None));
        assert!(check_answer(&parse_sentence("xyzzy"), None));
        assert!(!check_answer(&parse_sentence("   "), None));
    }

    #[test]
    fn test_check_text() {
        let (result, correct) = check_text("do tavla", Some("do tavla"));
        assert!(correct);
        assert_eq!(result.tokens.len(), 2);
    }

    // ── Construction ───────────────────────────────────

    #[test]
    fn test_construction_push_reparses() {
        let mut c = Construction::new();
        let first = c.push("mi").unwrap();
        assert_eq!(first.tokens.len(), 1);
        assert_eq!(first.warnings.len(), 1);

        let second = c.push("citka").unwrap();
        assert!(second.valid);
        assert!(second.warnings.is_empty());
        assert_eq!(c.text(), "mi citka");
    }

    #[test]
    fn test_construction_pop_to_empty() {
        let mut c = Construction::new();
        c.push("mi");
        c.push("cu");
        assert_eq!(c.pop().unwrap().sentence(), "mi");
        assert!(c.pop().is_none());
        assert!(c.pop().is_none());
        assert!(c.words().is_empty());
    }

    #[test]
    fn test_construction_reset() {
        let mut c = Construction::new();
        c.push("lo");
        c.push("gleki");
        assert!(c.reset().is_none());
        assert!(c.words().is_empty());
        assert!(c.parse().is_none());
    }

    #[test]
    fn test_construction_matches_target() {
        let mut c = Construction::new();
        for word in ["mi", "cu", "nelci"] {
            c.push(word);
            assert!(!c.matches(&["mi", "cu", "nelci", "do"]));
        }
        c.push("do");
        assert!(c.matches(&["mi", "cu", "nelci", "do"]));
        assert!(!c.matches(&["mi", "cu", "nelci"]));
    }

    #[test]
    fn test_construction_match_is_exact() {
        let mut c = Construction::new();
        c.push("Mi");
        c.push("citka");
        assert!(!c.matches(&["mi", "citka"]));
        assert!(c.matches(&[String::from("Mi"), String::from("citka")]));
    }
}
