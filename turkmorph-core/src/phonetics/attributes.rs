//! Phonetic attribute and expectation sets
//!
//! Only a handful of booleans about the surface so far decide which suffix
//! realization is legal next. Their consistent combinations form a small,
//! finite space, which is what keeps the compiled suffix form graph bounded.

use crate::bitset::enum_set;
use std::sync::OnceLock;

/// A boolean property of the surface so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneticAttribute {
    /// Last letter is a vowel
    LastLetterVowel,
    /// Last letter is a consonant
    LastLetterConsonant,
    /// Last vowel is a front vowel
    LastVowelFrontal,
    /// Last vowel is a back vowel
    LastVowelBack,
    /// Last vowel is rounded
    LastVowelRounded,
    /// Last vowel is unrounded
    LastVowelUnrounded,
    /// Last letter is voiceless
    LastLetterVoiceless,
    /// Last letter is not voiceless
    LastLetterNotVoiceless,
    /// Last letter is a voiceless stop
    LastLetterVoicelessStop,
    /// First letter is a vowel
    FirstLetterVowel,
    /// First letter is a consonant
    FirstLetterConsonant,
    /// The surface has no vowel at all
    HasNoVowel,
}

impl PhoneticAttribute {
    /// All attributes in bit order
    pub const ALL: [PhoneticAttribute; 12] = [
        PhoneticAttribute::LastLetterVowel,
        PhoneticAttribute::LastLetterConsonant,
        PhoneticAttribute::LastVowelFrontal,
        PhoneticAttribute::LastVowelBack,
        PhoneticAttribute::LastVowelRounded,
        PhoneticAttribute::LastVowelUnrounded,
        PhoneticAttribute::LastLetterVoiceless,
        PhoneticAttribute::LastLetterNotVoiceless,
        PhoneticAttribute::LastLetterVoicelessStop,
        PhoneticAttribute::FirstLetterVowel,
        PhoneticAttribute::FirstLetterConsonant,
        PhoneticAttribute::HasNoVowel,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Abbreviation used in debug dumps
    pub fn short_name(&self) -> &'static str {
        match self {
            PhoneticAttribute::LastLetterVowel => "LLV",
            PhoneticAttribute::LastLetterConsonant => "LLC",
            PhoneticAttribute::LastVowelFrontal => "LVF",
            PhoneticAttribute::LastVowelBack => "LVB",
            PhoneticAttribute::LastVowelRounded => "LVR",
            PhoneticAttribute::LastVowelUnrounded => "LVuR",
            PhoneticAttribute::LastLetterVoiceless => "LLVless",
            PhoneticAttribute::LastLetterNotVoiceless => "LLNotVless",
            PhoneticAttribute::LastLetterVoicelessStop => "LLStop",
            PhoneticAttribute::FirstLetterVowel => "FLV",
            PhoneticAttribute::FirstLetterConsonant => "FLC",
            PhoneticAttribute::HasNoVowel => "NoVow",
        }
    }
}

enum_set!(
    /// Set of phonetic attributes; [`PhoneticAttributes::bits`] is the canonical class id
    PhoneticAttributes,
    PhoneticAttribute,
    u16
);

/// What the next suffix must look like for a root to be usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneticExpectation {
    /// The next non-blank suffix must start with a vowel
    VowelStart,
    /// The next non-blank suffix must start with a consonant
    ConsonantStart,
}

impl PhoneticExpectation {
    /// All expectations in bit order
    pub const ALL: [PhoneticExpectation; 2] = [
        PhoneticExpectation::VowelStart,
        PhoneticExpectation::ConsonantStart,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

enum_set!(
    /// Set of phonetic expectations
    PhoneticExpectations,
    PhoneticExpectation,
    u8
);

use PhoneticAttribute::*;

impl PhoneticAttributes {
    fn one_of(self, a: PhoneticAttribute, b: PhoneticAttribute) -> bool {
        self.contains(a) || self.contains(b)
    }

    fn none_of(self, attrs: &[PhoneticAttribute]) -> bool {
        attrs.iter().all(|a| !self.contains(*a))
    }

    fn has_vowel_attributes(self) -> bool {
        !self.contains(HasNoVowel)
            && self.one_of(LastVowelBack, LastVowelFrontal)
            && self.one_of(LastVowelRounded, LastVowelUnrounded)
    }

    fn consistent_for(self, attr: PhoneticAttribute) -> bool {
        match attr {
            LastLetterVowel => {
                self.none_of(&[
                    LastLetterConsonant,
                    HasNoVowel,
                    LastLetterVoiceless,
                    LastLetterVoicelessStop,
                ]) && self.contains(LastLetterNotVoiceless)
                    && self.has_vowel_attributes()
            }
            LastLetterConsonant => {
                !self.contains(LastLetterVowel)
                    && self.one_of(LastLetterVoiceless, LastLetterNotVoiceless)
            }
            LastVowelFrontal => !self.contains(LastVowelBack) && self.has_vowel_attributes(),
            LastVowelBack => !self.contains(LastVowelFrontal) && self.has_vowel_attributes(),
            LastVowelRounded => {
                self.none_of(&[LastVowelUnrounded, HasNoVowel]) && self.has_vowel_attributes()
            }
            LastVowelUnrounded => {
                self.none_of(&[LastVowelRounded, HasNoVowel]) && self.has_vowel_attributes()
            }
            LastLetterVoiceless => {
                self.none_of(&[LastLetterVowel, LastLetterNotVoiceless])
                    && self.contains(LastLetterConsonant)
            }
            LastLetterNotVoiceless => {
                self.none_of(&[LastLetterVoiceless, LastLetterVoicelessStop])
            }
            LastLetterVoicelessStop => {
                self.none_of(&[LastLetterVowel, LastLetterNotVoiceless])
                    && self.contains(LastLetterConsonant)
                    && self.contains(LastLetterVoiceless)
            }
            FirstLetterVowel => {
                self.none_of(&[FirstLetterConsonant, HasNoVowel]) && self.has_vowel_attributes()
            }
            FirstLetterConsonant => !self.contains(FirstLetterVowel),
            HasNoVowel => {
                !self.contains(FirstLetterVowel)
                    && self.contains(FirstLetterConsonant)
                    && self.contains(LastLetterConsonant)
                    && !self.has_vowel_attributes()
            }
        }
    }

    /// Whether the combination can describe a real surface
    pub fn is_valid(self) -> bool {
        let vowel_state = self.has_vowel_attributes() || self.contains(HasNoVowel);
        vowel_state
            && self.one_of(FirstLetterConsonant, FirstLetterVowel)
            && self.one_of(LastLetterConsonant, LastLetterVowel)
            && self.iter().all(|attr| self.consistent_for(attr))
    }

    /// Every valid attribute set, computed once
    pub fn valid_sets() -> &'static [PhoneticAttributes] {
        static VALID: OnceLock<Vec<PhoneticAttributes>> = OnceLock::new();
        VALID.get_or_init(|| {
            let count = PhoneticAttribute::ALL.len() as u32;
            (0u16..(1 << count))
                .map(PhoneticAttributes::from_bits)
                .filter(|set| set.is_valid())
                .collect()
        })
    }

    /// Powerset of this set, including the empty set and the set itself
    pub fn subsets(self) -> Vec<PhoneticAttributes> {
        let elems: Vec<PhoneticAttribute> = self.iter().collect();
        (0u32..(1 << elems.len()))
            .map(|mask| {
                elems
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, a)| *a)
                    .collect()
            })
            .collect()
    }
}
