//! Parse cache - memoises `parse_sentence` by exact input string
//!
//! Useful for front ends that reparse on every keystroke. Entries are keyed
//! by the input exactly as given, so `"mi gleki"` and `"MI GLEKI"` are
//! cached separately even though they parse to the same tokens. The oldest
//! entry is evicted once the cache is full.

use std::collections::{HashMap, VecDeque};

use crate::parser::{parse_sentence, ParseResult};

pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct ParseCache {
    capacity: usize,
    entries: HashMap<String, ParseResult>,
    order: VecDeque<String>,
    last_uncached: Option<ParseResult>,
}

impl ParseCache {
    /// A cache holding at most `capacity` results. Zero disables storage.
    pub fn new(capacity: usize) -> Self {
        ParseCache {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            last_uncached: None,
        }
    }

    /// Return the cached result for `text`, parsing it on a miss
    pub fn get_or_parse(&mut self, text: &str) -> &ParseResult {
        if self.capacity == 0 {
            return self.last_uncached.insert(parse_sentence(text));
        }

        if !self.entries.contains_key(text) {
            tracing::trace!(len = self.entries.len(), "parse cache miss");
            if self.entries.len() >= self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
            self.order.push_back(text.to_string());
            self.entries.insert(text.to_string(), parse_sentence(text));
        }

        &self.entries[text]
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.last_uncached = None;
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
