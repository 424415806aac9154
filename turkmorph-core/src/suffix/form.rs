//! Compiled suffix form templates
//!
//! A template such as `+yAcAk` is written with:
//! - `A`: a vowel taking a/e by harmony
//! - `I`: a vowel taking ı/i/u/ü by harmony
//! - `+`: the next letter is a buffer, dropped when the surface already ends
//!   in the same class (vowel after vowel, consonant after consonant)
//! - `!`: the next letter is protected; `!I` does not round and a final
//!   `!k` is never voiced
//! - a leading `b`/`c`/`d`/`g` is devoiced after a voiceless letter

use crate::phonetics::alphabet;
use crate::phonetics::{PhoneticAttribute, PhoneticAttributes};
use std::fmt;

const PLUS: char = '+';
const EXCLAMATION: char = '!';

/// How one template position is realized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// A literal consonant
    InsertNonVowel,
    /// A literal vowel, no harmony
    InsertVowelWithoutHarmony,
    /// `A`
    InsertVowelAWithHarmony,
    /// `I`
    InsertVowelIWithHarmony,
    /// `!I`
    InsertVowelIWithHarmonyAndNoRounding,
    /// `+` followed by a literal vowel
    InsertOptionalVowel,
    /// `+` followed by a literal consonant
    InsertOptionalConsonant,
    /// `+A`
    InsertOptionalVowelAWithHarmony,
    /// `+I`
    InsertOptionalVowelIWithHarmony,
    /// A leading b/c/d/g
    InsertDevoicable,
}

impl RuleType {
    fn is_optional(self) -> bool {
        matches!(
            self,
            RuleType::InsertOptionalVowel
                | RuleType::InsertOptionalConsonant
                | RuleType::InsertOptionalVowelAWithHarmony
                | RuleType::InsertOptionalVowelIWithHarmony
        )
    }

    fn is_mandatory_vowel(self) -> bool {
        matches!(
            self,
            RuleType::InsertVowelWithoutHarmony
                | RuleType::InsertVowelAWithHarmony
                | RuleType::InsertVowelIWithHarmony
                | RuleType::InsertVowelIWithHarmonyAndNoRounding
        )
    }
}

/// One realization rule; `ch` is unused by the harmony rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Rule kind
    pub kind: RuleType,
    /// Literal letter for the literal, optional and devoicable kinds
    pub ch: char,
}

fn last_vowel_back(attrs: PhoneticAttributes) -> bool {
    attrs.contains(PhoneticAttribute::LastVowelBack)
        || !attrs.contains(PhoneticAttribute::LastVowelFrontal)
}

fn last_vowel_unrounded(attrs: PhoneticAttributes) -> bool {
    attrs.contains(PhoneticAttribute::LastVowelUnrounded)
        || !attrs.contains(PhoneticAttribute::LastVowelRounded)
}

fn last_letter_vowel(attrs: PhoneticAttributes) -> bool {
    attrs.contains(PhoneticAttribute::LastLetterVowel)
        || !attrs.contains(PhoneticAttribute::LastLetterConsonant)
}

fn last_letter_consonant(attrs: PhoneticAttributes) -> bool {
    attrs.contains(PhoneticAttribute::LastLetterConsonant)
        || !attrs.contains(PhoneticAttribute::LastLetterVowel)
}

fn harmony_a(attrs: PhoneticAttributes) -> char {
    if last_vowel_back(attrs) {
        'a'
    } else {
        'e'
    }
}

fn harmony_i(attrs: PhoneticAttributes) -> char {
    match (last_vowel_back(attrs), last_vowel_unrounded(attrs)) {
        (true, true) => 'ı',
        (true, false) => 'u',
        (false, true) => 'i',
        (false, false) => 'ü',
    }
}

impl Rule {
    /// Realize the rule after a surface with `attrs`; `None` emits nothing
    pub fn apply(&self, attrs: PhoneticAttributes) -> Option<char> {
        match self.kind {
            RuleType::InsertNonVowel | RuleType::InsertVowelWithoutHarmony => Some(self.ch),
            RuleType::InsertVowelAWithHarmony => Some(harmony_a(attrs)),
            RuleType::InsertVowelIWithHarmony => Some(harmony_i(attrs)),
            RuleType::InsertVowelIWithHarmonyAndNoRounding => Some(if last_vowel_back(attrs) {
                'ı'
            } else {
                'i'
            }),
            RuleType::InsertOptionalVowel => (!last_letter_vowel(attrs)).then_some(self.ch),
            RuleType::InsertOptionalConsonant => {
                (!last_letter_consonant(attrs)).then_some(self.ch)
            }
            RuleType::InsertOptionalVowelAWithHarmony => {
                (!last_letter_vowel(attrs)).then(|| harmony_a(attrs))
            }
            RuleType::InsertOptionalVowelIWithHarmony => {
                (!last_letter_vowel(attrs)).then(|| harmony_i(attrs))
            }
            RuleType::InsertDevoicable => {
                if attrs.contains(PhoneticAttribute::LastLetterVoiceless) {
                    alphabet::devoice(self.ch).or(Some(self.ch))
                } else {
                    Some(self.ch)
                }
            }
        }
    }
}

/// A suffix form template compiled into realization rules
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SuffixFormSequence {
    form: String,
    rules: Vec<Rule>,
    first_letter_vowel: bool,
    last_letter_can_be_voiced: bool,
}

impl SuffixFormSequence {
    /// Compile a template. A `+` is only meaningful as the first character;
    /// later occurrences are skipped like `!`.
    pub fn new(form: impl Into<String>) -> Self {
        let form = form.into();
        let chars: Vec<char> = form.chars().collect();
        let mut rules: Vec<Rule> = Vec::with_capacity(chars.len());

        for (i, &current) in chars.iter().enumerate() {
            if current == PLUS || current == EXCLAMATION {
                continue;
            }
            let previous = i.checked_sub(1).map(|p| chars[p]);
            let after_plus = previous == Some(PLUS);
            let after_exclamation = previous == Some(EXCLAMATION);
            let lower = alphabet::to_lower(current);

            let all_optional = rules.iter().all(|r| r.kind.is_optional());
            if all_optional && alphabet::is_devoicable(lower) && current.is_lowercase() {
                rules.push(Rule {
                    kind: RuleType::InsertDevoicable,
                    ch: lower,
                });
                continue;
            }

            let kind = match current {
                'A' if after_plus => RuleType::InsertOptionalVowelAWithHarmony,
                'A' => RuleType::InsertVowelAWithHarmony,
                'I' if after_exclamation => RuleType::InsertVowelIWithHarmonyAndNoRounding,
                'I' if after_plus => RuleType::InsertOptionalVowelIWithHarmony,
                'I' => RuleType::InsertVowelIWithHarmony,
                c if after_plus && alphabet::is_vowel(c) => RuleType::InsertOptionalVowel,
                _ if after_plus => RuleType::InsertOptionalConsonant,
                c if alphabet::is_vowel(c) => RuleType::InsertVowelWithoutHarmony,
                _ => RuleType::InsertNonVowel,
            };
            rules.push(Rule { kind, ch: current });
        }

        let first_letter_vowel = Self::find_first_letter_vowel(&chars);
        let last_letter_can_be_voiced = chars.len() > 1
            && chars[chars.len() - 2] != EXCLAMATION
            && alphabet::is_voicable(chars[chars.len() - 1]);

        Self {
            form,
            rules,
            first_letter_vowel,
            last_letter_can_be_voiced,
        }
    }

    fn find_first_letter_vowel(chars: &[char]) -> bool {
        if chars.iter().all(|c| c.is_whitespace()) {
            return false;
        }
        if alphabet::is_vowel(chars[0]) {
            return true;
        }
        if chars[0] == PLUS {
            return chars.get(1).is_some_and(|c| alphabet::is_vowel(*c))
                || chars.get(2).is_some_and(|c| alphabet::is_vowel(*c));
        }
        false
    }

    /// The template text
    pub fn as_str(&self) -> &str {
        &self.form
    }

    /// Compiled rules
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the template is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.form.trim().is_empty()
    }

    /// Whether the template may start with a vowel (buffer letters count)
    pub fn is_first_letter_vowel(&self) -> bool {
        self.first_letter_vowel
    }

    /// Whether the realized form may end in a letter that voices before a vowel
    pub fn last_letter_can_be_voiced(&self) -> bool {
        self.last_letter_can_be_voiced
    }

    /// Realize the template after a surface with `attrs`
    pub fn realize(&self, attrs: PhoneticAttributes) -> String {
        let realized: String = self.rules.iter().filter_map(|r| r.apply(attrs)).collect();
        realized.trim().to_string()
    }

    /// False only when realization would put two vowels together
    pub fn can_follow(&self, attrs: PhoneticAttributes) -> bool {
        let Some(first) = self.rules.first() else {
            return true;
        };
        if !attrs.contains(PhoneticAttribute::LastLetterVowel) {
            return true;
        }
        !first.kind.is_mandatory_vowel()
    }
}

impl fmt::Debug for SuffixFormSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuffixFormSequence({:?})", self.form)
    }
}

impl fmt::Display for SuffixFormSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexemeAttributes;
    use crate::phonetics::calculate_phonetic_attributes;

    fn attrs(word: &str) -> PhoneticAttributes {
        calculate_phonetic_attributes(word, LexemeAttributes::empty())
    }

    #[test]
    fn test_rule_compilation() {
        let seq = SuffixFormSequence::new("+yAcAk");
        let kinds: Vec<RuleType> = seq.rules().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RuleType::InsertOptionalConsonant,
                RuleType::InsertVowelAWithHarmony,
                RuleType::InsertNonVowel,
                RuleType::InsertVowelAWithHarmony,
                RuleType::InsertNonVowel,
            ]
        );
    }

    #[test]
    fn test_leading_devoicable() {
        let seq = SuffixFormSequence::new("dAn");
        assert_eq!(seq.rules()[0].kind, RuleType::InsertDevoicable);
        assert_eq!(seq.realize(attrs("kitap")), "tan");
        assert_eq!(seq.realize(attrs("ev")), "den");
    }

    #[test]
    fn test_harmony() {
        let seq = SuffixFormSequence::new("lAr");
        assert_eq!(seq.realize(attrs("kitap")), "lar");
        assert_eq!(seq.realize(attrs("ev")), "ler");

        let acc = SuffixFormSequence::new("+yI");
        assert_eq!(acc.realize(attrs("göz")), "ü");
        assert_eq!(acc.realize(attrs("kapı")), "yı");
        assert_eq!(acc.realize(attrs("okul")), "u");
    }

    #[test]
    fn test_no_rounding() {
        let seq = SuffixFormSequence::new("lAr!I");
        assert_eq!(seq.realize(attrs("kol")), "ları");
        assert_eq!(seq.realize(attrs("göz")), "leri");
    }

    #[test]
    fn test_optional_vowel_dropped_after_vowel() {
        let seq = SuffixFormSequence::new("+Im");
        assert_eq!(seq.realize(attrs("araba")), "m");
        assert_eq!(seq.realize(attrs("kalem")), "im");
    }

    #[test]
    fn test_double_vowel_guard() {
        let seq = SuffixFormSequence::new("Iyor");
        assert!(!seq.can_follow(attrs("ara")));
        assert!(seq.can_follow(attrs("gel")));
        assert!(SuffixFormSequence::new("+yI").can_follow(attrs("ara")));
        assert!(SuffixFormSequence::new("").can_follow(attrs("ara")));
    }

    #[test]
    fn test_first_letter_vowel() {
        assert!(SuffixFormSequence::new("Iyor").is_first_letter_vowel());
        assert!(SuffixFormSequence::new("+yA").is_first_letter_vowel());
        assert!(SuffixFormSequence::new("+Im").is_first_letter_vowel());
        assert!(!SuffixFormSequence::new("lAr").is_first_letter_vowel());
        assert!(!SuffixFormSequence::new("").is_first_letter_vowel());
    }

    #[test]
    fn test_last_letter_can_be_voiced() {
        assert!(SuffixFormSequence::new("+yAcAk").last_letter_can_be_voiced());
        assert!(!SuffixFormSequence::new("+yArA!k").last_letter_can_be_voiced());
        assert!(!SuffixFormSequence::new("k").last_letter_can_be_voiced());
    }
}
