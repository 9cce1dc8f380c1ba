//! # Pivot Engine
//!
//! Picks the optimal recognition point (ORP) of a word and splits the word
//! around it. The ORP is looked up from the word length alone:
//!
//! ```text
//! length   0-1  2  3-5  6-9  10-13  14+
//! pivot     0   1   1    2     3     4
//! ```
//!
//! Lengths are counted in chars, so accented and non-Latin words pivot on a
//! whole character rather than a byte.

/// A word split around its pivot character, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PivotLayout {
    /// Everything left of the pivot.
    pub prefix: String,
    /// The pivot character. `None` only for an empty word.
    pub pivot: Option<char>,
    /// Everything right of the pivot.
    pub suffix: String,
    /// Char index of the pivot inside the word.
    pub index: usize,
}

impl PivotLayout {
    /// Reassembles the original word.
    pub fn word(&self) -> String {
        let mut word = self.prefix.clone();
        word.extend(self.pivot);
        word.push_str(&self.suffix);
        word
    }

    pub fn is_empty(&self) -> bool {
        self.pivot.is_none()
    }
}

/// Pivot index for a word of `len` chars.
pub fn pivot_for_len(len: usize) -> usize {
    match len {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Pivot index for `word`. Depends only on the char count.
pub fn pivot_index(word: &str) -> usize {
    pivot_for_len(word.chars().count())
}

/// Splits `word` into prefix, pivot char and suffix.
pub fn segments(word: &str) -> PivotLayout {
    let len = word.chars().count();
    if len == 0 {
        return PivotLayout::default();
    }

    let index = pivot_index(word).min(len - 1);
    let mut chars = word.char_indices().skip(index);

    // index < len, so the pivot char exists
    let Some((start, pivot)) = chars.next() else {
        return PivotLayout::default();
    };
    let end = start + pivot.len_utf8();

    PivotLayout {
        prefix: word[..start].to_string(),
        pivot: Some(pivot),
        suffix: word[end..].to_string(),
        index,
    }
}
