use super::{root_with_attributes, RootFinder};
use crate::error::Result;
use crate::lexicon::{Lexeme, PrimaryPos, Root};
use crate::phonetics::PhoneticAttributes;
use regex::Regex;
use std::sync::Arc;

/// Whole-word punctuation and symbol tokens
#[derive(Debug, Clone)]
pub struct PunctuationRootFinder {
    pattern: Regex,
}

impl PunctuationRootFinder {
    /// Compile the punctuation pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"^(\p{Pc}|\p{Pd}|\p{Pe}|\p{Pf}|\p{Pi}|\p{Po}|\p{Ps}|\p{Sm}|\p{So})+$",
        )?;
        Ok(Self { pattern })
    }
}

impl RootFinder for PunctuationRootFinder {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        partial == whole && self.pattern.is_match(partial)
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let lexeme = Lexeme::new(partial, whole, PrimaryPos::Punctuation, None);
        vec![root_with_attributes(partial, lexeme, PhoneticAttributes::empty())]
    }
}
