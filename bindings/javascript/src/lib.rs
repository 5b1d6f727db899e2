//! JavaScript/TypeScript bindings for the Lojban Logic Trainer
//!
//! Thin wrapper around `lojban-core` compiled to WebAssembly.
//! ZERO logic here: all behavior comes from the Rust core.

use wasm_bindgen::prelude::*;

use lojban_core::lexicon::{self, WordCategory};

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Tokenize and validate a sentence.
///
/// `null` and `undefined` are treated as an empty sentence.
///
/// @param text - Lojban sentence
/// @returns JSON string: { tokens: [...], valid: boolean, errors: [...], warnings: [...] }
#[wasm_bindgen(js_name = "parseSentence")]
pub fn parse_sentence(text: Option<String>) -> Result<String, JsError> {
    let result = lojban_core::parse_sentence(text.as_deref().unwrap_or(""));
    to_json(&result)
}

/// Look up a word in the lexicon.
///
/// @param word - word to look up, any case
/// @returns JSON string of the entry, or "null" when the word is not known
#[wasm_bindgen(js_name = "lookupWord")]
pub fn lookup_word(word: &str) -> Result<String, JsError> {
    to_json(&lexicon::lookup(word))
}

/// List every lexicon entry of a category.
///
/// @param category - "predicate", "argument", "article", ...
/// @returns JSON string: [{ word, category, gloss, argumentSlots }, ...]
/// @throws Error if the category name is not recognised
#[wasm_bindgen(js_name = "allOfCategory")]
pub fn all_of_category(category: &str) -> Result<String, JsError> {
    let category: WordCategory = category
        .parse()
        .map_err(|e: lojban_core::Error| JsError::new(&e.to_string()))?;

    let entries: Vec<serde_json::Value> = lexicon::all_of_category(category)
        .into_iter()
        .map(|(word, entry)| {
            serde_json::json!({
                "word": word,
                "category": entry.category,
                "gloss": entry.gloss,
                "argumentSlots": entry.argument_slots,
            })
        })
        .collect();
    to_json(&entries)
}

/// Check a learner's sentence against an exercise answer.
///
/// @param text - the learner's sentence
/// @param expected - expected answer; null/undefined for a free-form exercise
/// @returns JSON string: { correct: boolean, result: {...} }
#[wasm_bindgen(js_name = "checkAnswer")]
pub fn check_answer(text: &str, expected: Option<String>) -> Result<String, JsError> {
    let (result, correct) = lojban_core::exercise::check_text(text, expected.as_deref());
    to_json(&serde_json::json!({
        "correct": correct,
        "result": result,
    }))
}
