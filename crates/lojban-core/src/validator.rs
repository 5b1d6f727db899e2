//! Structural validator - coarse well-formedness checks over classified tokens
//!
//! The validator does not build a parse tree. It looks at the token sequence
//! and reports:
//!
//! 1. **Unknown words** (error): tokens nothing recognised
//! 2. **Missing predicate** (warning): no selbri anywhere
//! 3. **Missing subject** (warning): the first selbri is not at the start
//!    and nothing before it can act as its first argument
//!
//! Only unknown words make a sentence invalid. Warnings are advice; lesson
//! exercises accept fragments such as a bare `lo gleki`.

use serde::{Deserialize, Serialize};

use crate::lexicon::WordCategory;
use crate::parser::tokenizer::Token;

// ── Validation Result Types ───────────────────────────────

/// Outcome of validating one token sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Errors first, then warnings
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => {
                self.errors.push(diagnostic);
                self.valid = false;
            }
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Indices of the tokens the finding refers to
    pub positions: Vec<usize>,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let prefix = match self.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        if self.positions.is_empty() {
            write!(f, "{} [{}]: {}", prefix, self.kind, self.message)
        } else {
            let positions: Vec<String> = self.positions.iter().map(|p| p.to_string()).collect();
            write!(
                f,
                "{} [{}] at {}: {}",
                prefix,
                self.kind,
                positions.join(","),
                self.message
            )
        }
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Category of validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    UnknownWord,
    MissingPredicate,
    MissingSubject,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::UnknownWord => Severity::Error,
            DiagnosticKind::MissingPredicate | DiagnosticKind::MissingSubject => {
                Severity::Warning
            }
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiagnosticKind::UnknownWord => write!(f, "unknown-word"),
            DiagnosticKind::MissingPredicate => write!(f, "missing-predicate"),
            DiagnosticKind::MissingSubject => write!(f, "missing-subject"),
        }
    }
}

pub const MISSING_PREDICATE_MESSAGE: &str =
    "No predicate (selbri) found. A complete Lojban sentence needs a predicate.";

pub const MISSING_SUBJECT_MESSAGE: &str =
    "Consider adding a subject (sumti) before the predicate";

// ── Public API ────────────────────────────────────────────

/// Validate a classified token sequence.
///
/// Runs every check and accumulates the findings. An empty sequence is
/// vacuously well-formed.
pub fn validate(tokens: &[Token]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if tokens.is_empty() {
        return result;
    }

    check_unknown_words(tokens, &mut result);
    check_has_predicate(tokens, &mut result);
    check_subject_before_predicate(tokens, &mut result);

    result
}

// ── Checks ────────────────────────────────────────────────

/// One error covering every unrecognised word
fn check_unknown_words(tokens: &[Token], result: &mut ValidationResult) {
    let unknown: Vec<&Token> = tokens.iter().filter(|t| !t.valid).collect();
    if unknown.is_empty() {
        return;
    }

    let words: Vec<&str> = unknown.iter().map(|t| t.word.as_str()).collect();
    result.push(Diagnostic {
        kind: DiagnosticKind::UnknownWord,
        message: format!("Unknown word(s): {}", words.join(", ")),
        positions: unknown.iter().map(|t| t.index).collect(),
    });
}

fn check_has_predicate(tokens: &[Token], result: &mut ValidationResult) {
    if !tokens.iter().any(|t| t.category == WordCategory::Predicate) {
        result.push(Diagnostic {
            kind: DiagnosticKind::MissingPredicate,
            message: MISSING_PREDICATE_MESSAGE.to_string(),
            positions: Vec::new(),
        });
    }
}

/// Only the first predicate is checked. A predicate in first position needs
/// no subject: `gleki` alone is a complete bridi.
fn check_subject_before_predicate(tokens: &[Token], result: &mut ValidationResult) {
    let Some(first) = tokens
        .iter()
        .position(|t| t.category == WordCategory::Predicate)
    else {
        return;
    };
    if first == 0 {
        return;
    }

    let has_subject = tokens[..first]
        .iter()
        .any(|t| t.category.can_start_subject());
    if !has_subject {
        result.push(Diagnostic {
            kind: DiagnosticKind::MissingSubject,
            message: MISSING_SUBJECT_MESSAGE.to_string(),
            positions: vec![tokens[first].index],
        });
    }
}
