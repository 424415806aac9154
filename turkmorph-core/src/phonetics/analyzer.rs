//! Phonetic attribute computation over surfaces

use super::alphabet;
use super::attributes::{PhoneticAttribute, PhoneticAttributes};
use crate::lexicon::{LexemeAttribute, LexemeAttributes};

/// Attributes of a plain surface, adjusted by the lexeme's attributes.
///
/// Inverse harmony swaps the frontness of the last vowel; a word ending in
/// ayn behaves as if its last letter were a consonant.
pub fn calculate_phonetic_attributes(
    surface: &str,
    lexeme_attributes: LexemeAttributes,
) -> PhoneticAttributes {
    let mut attrs = plain_attributes(surface);
    if lexeme_attributes.is_empty() {
        return attrs;
    }

    if lexeme_attributes.contains(LexemeAttribute::InverseHarmony) {
        if attrs.contains(PhoneticAttribute::LastVowelBack) {
            attrs.remove(PhoneticAttribute::LastVowelBack);
            attrs.insert(PhoneticAttribute::LastVowelFrontal);
        } else if attrs.contains(PhoneticAttribute::LastVowelFrontal) {
            attrs.remove(PhoneticAttribute::LastVowelFrontal);
            attrs.insert(PhoneticAttribute::LastVowelBack);
        }
    }

    if lexeme_attributes.contains(LexemeAttribute::EndsWithAyn)
        && attrs.contains(PhoneticAttribute::LastLetterVowel)
    {
        attrs.remove(PhoneticAttribute::LastLetterVowel);
        attrs.insert(PhoneticAttribute::LastLetterConsonant);
    }

    attrs
}

fn plain_attributes(surface: &str) -> PhoneticAttributes {
    let mut attrs = PhoneticAttributes::empty();
    let (Some(first), Some(last)) = (surface.chars().next(), surface.chars().next_back()) else {
        return attrs;
    };
    let first = alphabet::letter(first);
    let last = alphabet::letter(last);

    attrs.insert(if first.vowel {
        PhoneticAttribute::FirstLetterVowel
    } else {
        PhoneticAttribute::FirstLetterConsonant
    });

    match surface.chars().rev().map(alphabet::letter).find(|l| l.vowel) {
        Some(vowel) => {
            attrs.insert(if vowel.rounded {
                PhoneticAttribute::LastVowelRounded
            } else {
                PhoneticAttribute::LastVowelUnrounded
            });
            attrs.insert(if vowel.frontal {
                PhoneticAttribute::LastVowelFrontal
            } else {
                PhoneticAttribute::LastVowelBack
            });
        }
        None => attrs.insert(PhoneticAttribute::HasNoVowel),
    }

    attrs.insert(if last.vowel {
        PhoneticAttribute::LastLetterVowel
    } else {
        PhoneticAttribute::LastLetterConsonant
    });

    if last.voiceless {
        attrs.insert(PhoneticAttribute::LastLetterVoiceless);
        if last.is_voiceless_stop() {
            attrs.insert(PhoneticAttribute::LastLetterVoicelessStop);
        }
    } else {
        attrs.insert(PhoneticAttribute::LastLetterNotVoiceless);
    }

    attrs
}

/// Attributes after appending one character to a surface with `attrs`
pub fn append_char(attrs: PhoneticAttributes, ch: char) -> PhoneticAttributes {
    let letter = alphabet::letter(ch);
    let mut next = attrs;
    if letter.vowel {
        for attr in [
            PhoneticAttribute::LastLetterConsonant,
            PhoneticAttribute::LastLetterVoiceless,
            PhoneticAttribute::LastLetterVoicelessStop,
            PhoneticAttribute::HasNoVowel,
            PhoneticAttribute::LastVowelFrontal,
            PhoneticAttribute::LastVowelBack,
            PhoneticAttribute::LastVowelRounded,
            PhoneticAttribute::LastVowelUnrounded,
        ] {
            next.remove(attr);
        }
        next.insert(PhoneticAttribute::LastLetterVowel);
        next.insert(PhoneticAttribute::LastLetterNotVoiceless);
        next.insert(if letter.frontal {
            PhoneticAttribute::LastVowelFrontal
        } else {
            PhoneticAttribute::LastVowelBack
        });
        next.insert(if letter.rounded {
            PhoneticAttribute::LastVowelRounded
        } else {
            PhoneticAttribute::LastVowelUnrounded
        });
    } else {
        for attr in [
            PhoneticAttribute::LastLetterVowel,
            PhoneticAttribute::LastLetterVoiceless,
            PhoneticAttribute::LastLetterNotVoiceless,
            PhoneticAttribute::LastLetterVoicelessStop,
        ] {
            next.remove(attr);
        }
        next.insert(PhoneticAttribute::LastLetterConsonant);
        if letter.voiceless {
            next.insert(PhoneticAttribute::LastLetterVoiceless);
            if !letter.continuant {
                next.insert(PhoneticAttribute::LastLetterVoicelessStop);
            }
        } else {
            next.insert(PhoneticAttribute::LastLetterNotVoiceless);
        }
    }
    next
}

/// Attributes after appending a whole realized suffix; blank suffixes change nothing
pub fn append_str(attrs: PhoneticAttributes, suffix: &str) -> PhoneticAttributes {
    if suffix.trim().is_empty() {
        return attrs;
    }
    suffix.chars().fold(attrs, append_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PhoneticAttribute::*;

    #[test]
    fn test_kitap() {
        let attrs = calculate_phonetic_attributes("kitap", LexemeAttributes::empty());
        assert_eq!(
            attrs,
            PhoneticAttributes::from([
                FirstLetterConsonant,
                LastVowelBack,
                LastVowelUnrounded,
                LastLetterConsonant,
                LastLetterVoiceless,
                LastLetterVoicelessStop,
            ])
        );
        assert!(attrs.is_valid());
    }

    #[test]
    fn test_vowel_final_word() {
        let attrs = calculate_phonetic_attributes("örtü", LexemeAttributes::empty());
        assert!(attrs.contains(FirstLetterVowel));
        assert!(attrs.contains(LastLetterVowel));
        assert!(attrs.contains(LastVowelFrontal));
        assert!(attrs.contains(LastVowelRounded));
        assert!(attrs.contains(LastLetterNotVoiceless));
    }

    #[test]
    fn test_inverse_harmony_swaps_frontness() {
        let lex = LexemeAttributes::from([LexemeAttribute::InverseHarmony]);
        let attrs = calculate_phonetic_attributes("saat", lex);
        assert!(attrs.contains(LastVowelFrontal));
        assert!(!attrs.contains(LastVowelBack));
    }

    #[test]
    fn test_no_vowel() {
        let attrs = calculate_phonetic_attributes("TBMM", LexemeAttributes::empty());
        assert!(attrs.contains(HasNoVowel));
        assert!(attrs.is_valid());
    }

    #[test]
    fn test_appending_matches_full_analysis() {
        let base = calculate_phonetic_attributes("kitab", LexemeAttributes::empty());
        let appended = append_str(base, "ım");
        let full = calculate_phonetic_attributes("kitabım", LexemeAttributes::empty());
        assert_eq!(appended, full);
    }

    #[test]
    fn test_append_blank_is_identity() {
        let base = calculate_phonetic_attributes("ev", LexemeAttributes::empty());
        assert_eq!(append_str(base, ""), base);
    }
}
