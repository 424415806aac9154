//! Suffix form realization strategies

use super::form::SuffixFormSequence;
use crate::phonetics::{PhoneticAttribute, PhoneticAttributes};
use std::collections::HashMap;

/// Realizes suffix form templates against phonetic attribute sets
pub trait SuffixFormApplier: Send + Sync {
    /// Concrete suffix string for the template after a surface with `attrs`
    fn apply(&self, form: &SuffixFormSequence, attrs: PhoneticAttributes) -> String;

    /// Whether the template may follow a surface with `attrs` at all
    fn is_applicable(&self, form: &SuffixFormSequence, attrs: PhoneticAttributes) -> bool;
}

/// Evaluates the rules on every call
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainApplier;

impl SuffixFormApplier for PlainApplier {
    fn apply(&self, form: &SuffixFormSequence, attrs: PhoneticAttributes) -> String {
        form.realize(attrs)
    }

    fn is_applicable(&self, form: &SuffixFormSequence, attrs: PhoneticAttributes) -> bool {
        form.can_follow(attrs)
    }
}

/// Attributes that influence realization; everything else is masked away
/// before a table lookup.
const MODIFIERS: [PhoneticAttribute; 7] = [
    PhoneticAttribute::LastVowelBack,
    PhoneticAttribute::LastVowelFrontal,
    PhoneticAttribute::LastVowelUnrounded,
    PhoneticAttribute::LastVowelRounded,
    PhoneticAttribute::LastLetterConsonant,
    PhoneticAttribute::LastLetterVowel,
    PhoneticAttribute::LastLetterVoiceless,
];

/// Evaluates every known template against every modifier combination once
/// and serves lookups afterwards; unknown templates fall back to evaluation.
#[derive(Debug, Clone)]
pub struct PrecachingApplier {
    mask: PhoneticAttributes,
    table: HashMap<String, HashMap<PhoneticAttributes, (String, bool)>>,
}

impl PrecachingApplier {
    /// Build the lookup table for the given templates
    pub fn new<'a>(forms: impl IntoIterator<Item = &'a SuffixFormSequence>) -> Self {
        let mask: PhoneticAttributes = MODIFIERS.into_iter().collect();
        let combinations = mask.subsets();
        let mut table: HashMap<String, HashMap<PhoneticAttributes, (String, bool)>> =
            HashMap::new();
        for form in forms {
            table.entry(form.as_str().to_string()).or_insert_with(|| {
                combinations
                    .iter()
                    .map(|attrs| (*attrs, (form.realize(*attrs), form.can_follow(*attrs))))
                    .collect()
            });
        }
        tracing::debug!(forms = table.len(), "precached suffix form applications");
        Self { mask, table }
    }

    /// Number of precomputed entries
    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    /// Whether no entry was precomputed
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn lookup(
        &self,
        form: &SuffixFormSequence,
        attrs: PhoneticAttributes,
    ) -> Option<&(String, bool)> {
        self.table
            .get(form.as_str())
            .and_then(|by_attrs| by_attrs.get(&attrs.intersection(self.mask)))
    }
}

impl SuffixFormApplier for PrecachingApplier {
    fn apply(&self, form: &SuffixFormSequence, attrs: PhoneticAttributes) -> String {
        match self.lookup(form, attrs) {
            Some((applied, _)) => applied.clone(),
            None => form.realize(attrs),
        }
    }

    fn is_applicable(&self, form: &SuffixFormSequence, attrs: PhoneticAttributes) -> bool {
        match self.lookup(form, attrs) {
            Some((_, applicable)) => *applicable,
            None => form.can_follow(attrs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexemeAttributes;
    use crate::phonetics::calculate_phonetic_attributes;

    #[test]
    fn test_precaching_agrees_with_plain() {
        let forms: Vec<SuffixFormSequence> = ["lAr", "+yI", "dAn", "Iyor", "+yAcAk", "lAr!I", "ki"]
            .into_iter()
            .map(SuffixFormSequence::new)
            .collect();
        let cached = PrecachingApplier::new(forms.iter());
        assert_eq!(cached.len(), forms.len() * 128);

        for word in ["kitap", "ev", "araba", "göz", "okul", "TBMM", "saat"] {
            let attrs = calculate_phonetic_attributes(word, LexemeAttributes::empty());
            for form in &forms {
                assert_eq!(cached.apply(form, attrs), PlainApplier.apply(form, attrs));
                assert_eq!(
                    cached.is_applicable(form, attrs),
                    PlainApplier.is_applicable(form, attrs)
                );
            }
        }
    }

    #[test]
    fn test_unknown_form_falls_back() {
        let cached = PrecachingApplier::new(std::iter::empty());
        assert!(cached.is_empty());
        let attrs = calculate_phonetic_attributes("ev", LexemeAttributes::empty());
        assert_eq!(cached.apply(&SuffixFormSequence::new("dA"), attrs), "de");
    }
}
