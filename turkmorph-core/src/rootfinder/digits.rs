//! Numbers written with digits
//!
//! The surface stays the literal digits while harmony follows the spoken
//! number, so each root carries the reading as its lemma and takes its
//! phonetic attributes from it.

use super::{char_after, root_with_attributes, RootFinder};
use crate::error::Result;
use crate::lexicon::{Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos, Root, SecondaryPos};
use crate::numeral::digits_to_text;
use crate::phonetics::{calculate_phonetic_attributes, PhoneticsEngine, TurkishSequence};
use crate::suffix::{PlainApplier, SuffixFormSequence};
use regex::Regex;
use std::sync::Arc;

const APOSTROPHE: char = '\'';
const ORDINAL_MARK: char = '.';

fn is_numeral_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

fn numeral_root(partial: &str, reading: String, secondary: SecondaryPos) -> Arc<Root> {
    let attrs = calculate_phonetic_attributes(&reading, LexemeAttributes::empty());
    let lexeme = Lexeme::new(reading, partial, PrimaryPos::Numeral, Some(secondary));
    root_with_attributes(partial, lexeme, attrs)
}

/// Cardinal numbers: "12", "-3,5", "1.000.000"
#[derive(Debug, Clone)]
pub struct CardinalDigitsRootFinder {
    patterns: [Regex; 2],
}

impl CardinalDigitsRootFinder {
    /// Compile the cardinal patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: [
                Regex::new(r"^[-+]?[0-9]+(,[0-9])?[0-9]*$")?,
                Regex::new(r"^[-+]?([0-9]{1,3}\.)+[0-9]{3}(,[0-9])?[0-9]*$")?,
            ],
        })
    }
}

impl RootFinder for CardinalDigitsRootFinder {
    fn name(&self) -> &str {
        "cardinal_digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if !partial.chars().next_back().is_some_and(is_numeral_char) {
            return false;
        }
        // "1.000" must not yield "1" or "1.0"
        if char_after(partial, whole).is_some_and(is_numeral_char) {
            return false;
        }
        // "3'ü" may only split right before its apostrophe
        let apostrophe = whole
            .rfind(APOSTROPHE)
            .map(|byte| whole[..byte].chars().count());
        if apostrophe.is_some_and(|index| index > 0 && index != partial.chars().count()) {
            return false;
        }
        self.patterns.iter().any(|pattern| pattern.is_match(partial))
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        match digits_to_text(partial) {
            Ok(reading) => vec![numeral_root(partial, reading, SecondaryPos::DigitsCardinal)],
            Err(err) => {
                tracing::debug!(partial, error = %err, "digits cannot be read");
                Vec::new()
            }
        }
    }
}

/// Ordinal numbers: "3.", "1.000."
#[derive(Debug)]
pub struct OrdinalDigitsRootFinder {
    patterns: [Regex; 2],
    engine: PhoneticsEngine,
    ordinal_form: SuffixFormSequence,
}

impl OrdinalDigitsRootFinder {
    /// Compile the ordinal patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: [
                Regex::new(r"^[-+]?[0-9]+\.$")?,
                Regex::new(r"^[-+]?([0-9]{1,3}\.)+[0-9]{3}\.$")?,
            ],
            engine: PhoneticsEngine::new(Arc::new(PlainApplier)),
            ordinal_form: SuffixFormSequence::new("+IncI"),
        })
    }

    /// "üç" → "üçüncü"; only "dört" voices its last letter
    fn ordinal_reading(&self, cardinal: &str, voicing_allowed: bool) -> Option<String> {
        let lexeme_attributes = if voicing_allowed {
            LexemeAttributes::empty()
        } else {
            LexemeAttributes::from([LexemeAttribute::NoVoicing])
        };
        let surface = TurkishSequence::new(cardinal);
        let attrs = calculate_phonetic_attributes(cardinal, LexemeAttributes::empty());
        let (surface, applied) =
            self.engine
                .apply(&surface, attrs, &self.ordinal_form, lexeme_attributes)?;
        Some(format!("{surface}{applied}"))
    }
}

impl RootFinder for OrdinalDigitsRootFinder {
    fn name(&self) -> &str {
        "ordinal_digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if partial.chars().next_back() != Some(ORDINAL_MARK) {
            return false;
        }
        // only an apostrophe may follow: "1.'nin"
        if char_after(partial, whole).is_some_and(|next| next != APOSTROPHE) {
            return false;
        }
        self.patterns.iter().any(|pattern| pattern.is_match(partial))
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let digits = partial.strip_suffix(ORDINAL_MARK).unwrap_or(partial);
        let reading = digits_to_text(digits)
            .map_err(|err| tracing::debug!(partial, error = %err, "digits cannot be read"))
            .ok()
            .and_then(|cardinal| self.ordinal_reading(&cardinal, digits.ends_with('4')));
        match reading {
            Some(reading) => vec![numeral_root(partial, reading, SecondaryPos::DigitsOrdinal)],
            None => Vec::new(),
        }
    }
}

/// Ranges: "3-5", "1.000-2.000"
#[derive(Debug, Clone)]
pub struct RangeDigitsRootFinder {
    pattern: Regex,
}

impl RangeDigitsRootFinder {
    /// Compile the range pattern
    pub fn new() -> Result<Self> {
        let number = r"(([0-9]{1,3}\.)+[0-9]{3}|[0-9]+)";
        let pattern = Regex::new(&format!("^{number}(-{number})*-{number}$"))?;
        Ok(Self { pattern })
    }
}

impl RootFinder for RangeDigitsRootFinder {
    fn name(&self) -> &str {
        "range_digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if !partial.chars().next_back().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        if char_after(partial, whole).is_some_and(|next| next != APOSTROPHE && next != '.') {
            return false;
        }
        self.pattern.is_match(partial)
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let readings: Result<Vec<String>> = partial.split('-').map(digits_to_text).collect();
        match readings {
            Ok(readings) => vec![numeral_root(partial, readings.join(" "), SecondaryPos::Range)],
            Err(err) => {
                tracing::debug!(partial, error = %err, "range cannot be read");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::PhoneticAttribute;

    #[test]
    fn test_cardinal_handles_whole_numbers_only() {
        let finder = CardinalDigitsRootFinder::new().unwrap();
        assert!(finder.handles("12", "12"));
        assert!(finder.handles("12", "12'ye"));
        assert!(finder.handles("1.000", "1.000"));
        assert!(finder.handles("-3,5", "-3,5"));
        assert!(!finder.handles("1", "12"));
        assert!(!finder.handles("1", "1.000"));
        assert!(!finder.handles("1", "1'12'"));
        assert!(!finder.handles("ab", "ab"));
    }

    #[test]
    fn test_cardinal_splits_only_before_last_apostrophe() {
        let finder = CardinalDigitsRootFinder::new().unwrap();
        assert!(finder.handles("12", "12'ye"));
        assert!(finder.handles("3", "3'ü"));
        assert!(finder.handles("1.000", "1.000'i"));
        assert!(!finder.handles("1", "1'2'ye"));
        assert!(!finder.handles("12", "12'şü'ye"));
    }

    #[test]
    fn test_cardinal_lemma_is_the_reading() {
        let finder = CardinalDigitsRootFinder::new().unwrap();
        let roots = finder.find_roots("12", "12'ye");
        assert_eq!(roots.len(), 1);
        let root = &roots[0];
        assert_eq!(root.as_str(), "12");
        assert_eq!(root.lexeme.lemma, "on iki");
        assert_eq!(root.lexeme.lemma_root, "12");
        assert_eq!(root.lexeme.secondary_pos, Some(SecondaryPos::DigitsCardinal));
        assert!(root.phonetic_attributes.contains(PhoneticAttribute::LastVowelFrontal));
        assert!(root.phonetic_attributes.contains(PhoneticAttribute::LastLetterVowel));
    }

    #[test]
    fn test_ordinal_reading_and_voicing() {
        let finder = OrdinalDigitsRootFinder::new().unwrap();
        assert!(finder.handles("3.", "3."));
        assert!(finder.handles("3.", "3.'ü"));
        assert!(!finder.handles("3.", "3.5"));
        assert!(!finder.handles("3", "3."));

        assert_eq!(finder.find_roots("3.", "3.")[0].lexeme.lemma, "üçüncü");
        assert_eq!(finder.find_roots("4.", "4.")[0].lexeme.lemma, "dördüncü");
        assert_eq!(finder.find_roots("2.", "2.")[0].lexeme.lemma, "ikinci");
        assert_eq!(finder.find_roots("40.", "40.")[0].lexeme.lemma, "kırkıncı");
        assert_eq!(
            finder.find_roots("4.", "4.")[0].lexeme.secondary_pos,
            Some(SecondaryPos::DigitsOrdinal)
        );
    }

    #[test]
    fn test_range() {
        let finder = RangeDigitsRootFinder::new().unwrap();
        assert!(finder.handles("3-5", "3-5"));
        assert!(finder.handles("3-5", "3-5'e"));
        assert!(!finder.handles("3-5", "3-55"));
        assert!(!finder.handles("3", "3-5"));
        assert!(!finder.handles("35", "35"));

        let roots = finder.find_roots("3-5", "3-5");
        assert_eq!(roots[0].lexeme.lemma, "üç beş");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::Range));
    }
}
