//! # Tokenizer
//!
//! Turns raw text into the word list the scheduler walks. Any run of
//! whitespace (newlines, tabs, NBSP, ...) separates words; nothing else does.
//! Punctuation stays attached to its word.

use std::ops::Index;

/// An ordered list of words. Every word is non-empty and contains no whitespace.
///
/// The only ways to build one are [`tokenize`] and [`FromIterator`], and both
/// run their input through the same splitting rules, so the invariant holds
/// for every value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl Index<usize> for WordSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

/// Collects already-split words. Elements that still contain whitespace are
/// split further and empty elements are dropped.
impl<S: AsRef<str>> FromIterator<S> for WordSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .flat_map(|s| {
                s.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { words }
    }
}

/// Splits raw text into words.
///
/// Equivalent to collapsing whitespace runs to one space, trimming, splitting
/// on spaces and dropping empty pieces. Never fails; empty input gives an
/// empty sequence.
pub fn tokenize(raw: &str) -> WordSequence {
    let words = raw.split_whitespace().map(str::to_string).collect();
    WordSequence { words }
}
