//! Immutable character sequences with letter-aware queries
//!
//! All positions are character positions, never byte offsets.

use super::alphabet::{self, TurkicLetter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable run of characters; derived sequences are new values
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TurkishSequence {
    text: String,
    len: usize,
}

impl TurkishSequence {
    /// Create a sequence from text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, len }
    }

    /// Underlying text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no characters
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the sequence is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Characters in order
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Character at a position
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// First character
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Last character
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Classification of the last character
    pub fn last_letter(&self) -> Option<TurkicLetter> {
        self.last_char().map(alphabet::letter)
    }

    /// Classification of the last vowel, if any
    pub fn last_vowel(&self) -> Option<TurkicLetter> {
        self.text
            .chars()
            .rev()
            .map(alphabet::letter)
            .find(|letter| letter.vowel)
    }

    /// Whether any character is a vowel
    pub fn has_vowel(&self) -> bool {
        self.last_vowel().is_some()
    }

    /// New sequence with `suffix` appended
    pub fn append(&self, suffix: &str) -> Self {
        let mut text = String::with_capacity(self.text.len() + suffix.len());
        text.push_str(&self.text);
        text.push_str(suffix);
        Self {
            text,
            len: self.len + suffix.chars().count(),
        }
    }

    /// Characters in `[start, end)`
    pub fn sub_sequence(&self, start: usize, end: usize) -> Self {
        Self::new(char_slice(&self.text, start, end))
    }

    /// Whether the text starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// Whether the text ends with `suffix`
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }
}

impl fmt::Display for TurkishSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TurkishSequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TurkishSequence {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<TurkishSequence> for String {
    fn from(seq: TurkishSequence) -> Self {
        seq.text
    }
}

impl AsRef<str> for TurkishSequence {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Number of characters in a string
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `index`, or the string length past the end
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}

/// Characters in `[start, end)`, clamped to the string
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let from = byte_offset(s, start);
    let to = byte_offset(s, end);
    &s[from..to]
}

/// Characters from `start` to the end
pub fn char_tail(s: &str, start: usize) -> &str {
    &s[byte_offset(s, start)..]
}

/// Whether a string is empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Whether a non-empty string consists of letters and digits only
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}
