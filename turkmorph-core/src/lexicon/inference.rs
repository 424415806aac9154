//! Attributes a dictionary entry implies without spelling them out

use super::generator::root_change;
use super::{Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos};
use crate::phonetics::alphabet;

const CAUSATIVES: [LexemeAttribute; 5] = [
    LexemeAttribute::CausativeT,
    LexemeAttribute::CausativeIr,
    LexemeAttribute::CausativeIt,
    LexemeAttribute::CausativeAr,
    LexemeAttribute::CausativeDIr,
];

fn is_stop_consonant(c: char) -> bool {
    matches!(alphabet::to_lower(c), 'b' | 'c' | 'ç' | 'd' | 'g' | 'k' | 'p' | 't')
}

impl Lexeme {
    /// Add the attributes the entry implies.
    ///
    /// Explicit attributes always win: a verb tagged `Aorist_I` never gets
    /// `Aorist_A`, a noun tagged `NoVoicing` never gets `Voicing`. Stems in
    /// the irregular stem table get `RootChange`.
    pub fn infer_attributes(&mut self) {
        let Some(last) = self.lemma_root.chars().next_back() else {
            return;
        };
        let vowels = self.lemma_root.chars().filter(|c| alphabet::is_vowel(*c)).count();
        let attrs = &mut self.attributes;

        match self.primary_pos {
            PrimaryPos::Verb => infer_verb(attrs, last, vowels),
            PrimaryPos::Noun if attrs.contains(LexemeAttribute::CompoundP3sg) => {
                infer_compound(attrs)
            }
            PrimaryPos::Noun | PrimaryPos::Adjective => {
                infer_nominal(attrs, &self.lemma_root, last, vowels)
            }
            _ => {}
        }

        if root_change(&self.lemma, self.primary_pos).is_some() {
            self.attributes.insert(LexemeAttribute::RootChange);
        }
    }

    /// Copy with the implied attributes added
    pub fn with_inferred_attributes(mut self) -> Self {
        self.infer_attributes();
        self
    }
}

fn infer_nominal(attrs: &mut LexemeAttributes, lemma_root: &str, last: char, vowels: usize) {
    if attrs.contains(LexemeAttribute::VoicingOpt) {
        attrs.remove(LexemeAttribute::Voicing);
        attrs.remove(LexemeAttribute::NoVoicing);
    } else if vowels > 1
        && is_stop_consonant(last)
        && !attrs.contains(LexemeAttribute::NoVoicing)
        && !attrs.contains(LexemeAttribute::InverseHarmony)
    {
        attrs.insert(LexemeAttribute::Voicing);
    } else if ["nk", "og", "rt"].iter().any(|end| lemma_root.ends_with(end)) {
        attrs.insert(LexemeAttribute::Voicing);
    } else if !attrs.contains(LexemeAttribute::Voicing) {
        attrs.insert(LexemeAttribute::NoVoicing);
    }
}

fn infer_compound(attrs: &mut LexemeAttributes) {
    if attrs.contains(LexemeAttribute::VoicingOpt) {
        attrs.remove(LexemeAttribute::Voicing);
        attrs.remove(LexemeAttribute::NoVoicing);
    } else if !attrs.contains(LexemeAttribute::Voicing) {
        attrs.insert(LexemeAttribute::NoVoicing);
    }
}

fn infer_verb(attrs: &mut LexemeAttributes, last: char, vowels: usize) {
    let ends_in_vowel = alphabet::is_vowel(last);
    let last = alphabet::to_lower(last);

    if ends_in_vowel {
        attrs.insert(LexemeAttribute::ProgressiveVowelDrop);
        attrs.insert(LexemeAttribute::PassiveIn);
    }
    if vowels > 1 && !attrs.contains(LexemeAttribute::AoristA) {
        attrs.insert(LexemeAttribute::AoristI);
    }
    if vowels == 1 && !attrs.contains(LexemeAttribute::AoristI) {
        attrs.insert(LexemeAttribute::AoristA);
    }
    if last == 'l' {
        attrs.insert(LexemeAttribute::PassiveIn);
    }

    if !attrs.contains_any(CAUSATIVES.into_iter().collect()) {
        let causative = if ends_in_vowel || (matches!(last, 'l' | 'r') && vowels > 1) {
            LexemeAttribute::CausativeT
        } else if last == 't' && vowels < 2 {
            LexemeAttribute::CausativeIr
        } else {
            LexemeAttribute::CausativeDIr
        };
        attrs.insert(causative);
    }

    if attrs.contains(LexemeAttribute::ProgressiveVowelDrop)
        || !attrs.contains(LexemeAttribute::Voicing)
    {
        attrs.insert(LexemeAttribute::NoVoicing);
    }
}
