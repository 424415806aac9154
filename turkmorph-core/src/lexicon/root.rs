use super::Lexeme;
use crate::phonetics::{PhoneticAttributes, PhoneticExpectations, TurkishSequence};
use std::sync::Arc;

/// A lexeme as it appears at the start of a surface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    /// Matched surface text, e.g. "kitab" for the lexeme "kitap"
    pub sequence: TurkishSequence,
    /// The underlying lexeme
    pub lexeme: Arc<Lexeme>,
    /// Attributes of the sequence
    pub phonetic_attributes: PhoneticAttributes,
    /// What the next suffix must look like
    pub phonetic_expectations: PhoneticExpectations,
}

impl Root {
    /// Create a root
    pub fn new(
        sequence: impl Into<TurkishSequence>,
        lexeme: Arc<Lexeme>,
        phonetic_attributes: PhoneticAttributes,
        phonetic_expectations: PhoneticExpectations,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            lexeme,
            phonetic_attributes,
            phonetic_expectations,
        }
    }

    /// Surface text of the root
    pub fn as_str(&self) -> &str {
        self.sequence.as_str()
    }

    /// Whether both roots spell the same lexeme with the same phonetics,
    /// so every reading of one is also a reading of the other
    pub fn reads_like(&self, other: &Root) -> bool {
        self.sequence == other.sequence
            && self.phonetic_attributes == other.phonetic_attributes
            && self.lexeme.lemma == other.lexeme.lemma
            && self.lexeme.lemma_root == other.lexeme.lemma_root
            && self.lexeme.primary_pos == other.lexeme.primary_pos
            && self.lexeme.secondary_pos == other.lexeme.secondary_pos
    }
}
