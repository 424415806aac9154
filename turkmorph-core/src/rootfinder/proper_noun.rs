use super::{is_all_uppercase, root_with_attributes, starts_uppercase, RootFinder};
use crate::lexicon::{Lexeme, LexemeAttributes, PrimaryPos, Root, SecondaryPos};
use crate::phonetics::{alphabet, calculate_phonetic_attributes};
use std::sync::Arc;

const APOSTROPHE: char = '\'';

/// Abbreviations ending in a consonant are read letter by letter, so "PTT"
/// harmonizes like "PTTE"
fn abbreviation_root(candidate: &str) -> Arc<Root> {
    let ends_in_vowel = candidate.chars().next_back().is_some_and(alphabet::is_vowel);
    let attrs = if ends_in_vowel {
        calculate_phonetic_attributes(candidate, LexemeAttributes::empty())
    } else {
        calculate_phonetic_attributes(&format!("{candidate}E"), LexemeAttributes::empty())
    };
    let lexeme = Lexeme::new(
        candidate,
        candidate,
        PrimaryPos::Noun,
        Some(SecondaryPos::Abbreviation),
    );
    root_with_attributes(candidate, lexeme, attrs)
}

fn proper_noun_root(candidate: &str) -> Arc<Root> {
    let attrs = calculate_phonetic_attributes(candidate, LexemeAttributes::empty());
    let lexeme = Lexeme::new(
        candidate,
        candidate,
        PrimaryPos::Noun,
        Some(SecondaryPos::ProperNoun),
    );
    root_with_attributes(candidate, lexeme, attrs)
}

/// "Ankara'ya", "THY'nin": a capitalized stem closed by an apostrophe
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounFromApostropheRootFinder;

impl RootFinder for ProperNounFromApostropheRootFinder {
    fn name(&self) -> &str {
        "proper_noun_from_apostrophe"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        partial.chars().count() >= 2
            && starts_uppercase(partial)
            && partial.ends_with(APOSTROPHE)
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let Some(candidate) = partial.strip_suffix(APOSTROPHE) else {
            return Vec::new();
        };
        if candidate.trim().is_empty() {
            return Vec::new();
        }
        if is_all_uppercase(candidate) {
            vec![abbreviation_root(candidate)]
        } else if starts_uppercase(candidate) {
            vec![proper_noun_root(candidate)]
        } else {
            Vec::new()
        }
    }
}

/// Capitalized words written without an apostrophe
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounWithoutApostropheRootFinder;

impl RootFinder for ProperNounWithoutApostropheRootFinder {
    fn name(&self) -> &str {
        "proper_noun_without_apostrophe"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        !partial.trim().is_empty() && starts_uppercase(whole) && !whole.contains(APOSTROPHE)
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        if partial == whole && is_all_uppercase(partial) {
            return vec![abbreviation_root(partial)];
        }
        vec![proper_noun_root(partial)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::PhoneticAttribute;

    #[test]
    fn test_apostrophe_proper_noun() {
        let finder = ProperNounFromApostropheRootFinder;
        assert!(finder.handles("Ankara'", "Ankara'ya"));
        assert!(!finder.handles("Ankara", "Ankara'ya"));
        assert!(!finder.handles("ankara'", "ankara'ya"));
        assert!(!finder.handles("'", "'"));

        let roots = finder.find_roots("Ankara'", "Ankara'ya");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].as_str(), "Ankara");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
    }

    #[test]
    fn test_abbreviation_harmony_uses_trailing_e() {
        let roots = ProperNounFromApostropheRootFinder.find_roots("PTT'", "PTT'ye");
        assert_eq!(roots[0].as_str(), "PTT");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::Abbreviation));
        let attrs = roots[0].phonetic_attributes;
        assert!(attrs.contains(PhoneticAttribute::LastLetterVowel));
        assert!(attrs.contains(PhoneticAttribute::LastVowelFrontal));

        let roots = ProperNounFromApostropheRootFinder.find_roots("ODTÜ'", "ODTÜ'ye");
        assert!(roots[0].phonetic_attributes.contains(PhoneticAttribute::LastVowelRounded));
    }

    #[test]
    fn test_without_apostrophe() {
        let finder = ProperNounWithoutApostropheRootFinder;
        assert!(finder.handles("Ank", "Ankara"));
        assert!(!finder.handles("Ank", "Ankara'ya"));
        assert!(!finder.handles("ank", "ankara"));

        let roots = finder.find_roots("Ankara", "Ankara");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
        let roots = finder.find_roots("THY", "THY");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::Abbreviation));
        let roots = finder.find_roots("TH", "THY");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
    }
}
