//! Suffix application against surfaces

use super::alphabet;
use super::attributes::{PhoneticAttribute, PhoneticAttributes, PhoneticExpectation, PhoneticExpectations};
use super::sequence::{char_len, char_tail, is_blank, TurkishSequence};
use crate::lexicon::{LexemeAttribute, LexemeAttributes};
use crate::suffix::{SuffixFormApplier, SuffixFormSequence};
use std::sync::Arc;

/// Combines the realization strategy with root-final voicing and the
/// checks the parser runs while extending a path.
#[derive(Clone)]
pub struct PhoneticsEngine {
    applier: Arc<dyn SuffixFormApplier>,
}

impl std::fmt::Debug for PhoneticsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneticsEngine").finish_non_exhaustive()
    }
}

impl PhoneticsEngine {
    /// Create an engine over a realization strategy
    pub fn new(applier: Arc<dyn SuffixFormApplier>) -> Self {
        Self { applier }
    }

    /// The realization strategy
    pub fn applier(&self) -> &dyn SuffixFormApplier {
        self.applier.as_ref()
    }

    /// Blank forms always apply; nothing applies to an unknown surface
    pub fn is_suffix_form_applicable(
        &self,
        attrs: PhoneticAttributes,
        form: &SuffixFormSequence,
    ) -> bool {
        if form.is_blank() {
            return true;
        }
        if attrs.is_empty() {
            return false;
        }
        self.applier.is_applicable(form, attrs)
    }

    /// Apply `form` to `surface`, returning the possibly voiced surface and
    /// the realized suffix. `None` for a blank surface.
    pub fn apply(
        &self,
        surface: &TurkishSequence,
        attrs: PhoneticAttributes,
        form: &SuffixFormSequence,
        lexeme_attributes: LexemeAttributes,
    ) -> Option<(TurkishSequence, String)> {
        if surface.is_blank() {
            return None;
        }
        if form.is_blank() {
            return Some((surface.clone(), String::new()));
        }

        let voice = !lexeme_attributes.contains(LexemeAttribute::NoVoicing)
            && attrs.contains(PhoneticAttribute::LastLetterVoicelessStop)
            && form.is_first_letter_vowel();
        let new_surface = if voice {
            voice_last_letter(surface)
        } else {
            surface.clone()
        };

        Some((new_surface, self.applier.apply(form, attrs)))
    }

    /// Whether a form template satisfies every expectation left by the root
    pub fn expectations_satisfied(
        expectations: PhoneticExpectations,
        form: &SuffixFormSequence,
    ) -> bool {
        if expectations.is_empty() {
            return true;
        }
        let form = form.as_str().trim();
        if form.is_empty() {
            return false;
        }
        expectations
            .iter()
            .all(|expectation| expectation_satisfied(expectation, form))
    }

    /// Whether `applied` is a prefix of `input`, optionally tolerating a voiced
    /// last letter (armut matches armudunu when voicing is allowed).
    pub fn application_matches(input: &str, applied: &str, voicing_allowed: bool) -> bool {
        let applied_len = char_len(applied);
        if is_blank(applied) || applied_len > char_len(input) {
            return false;
        }
        if input.starts_with(applied) {
            return true;
        }
        if !voicing_allowed {
            return false;
        }

        let mut applied_chars = applied.chars();
        let Some(last_applied) = applied_chars.next_back() else {
            return false;
        };
        if !input.starts_with(applied_chars.as_str()) {
            return false;
        }
        let Some(input_char) = char_tail(input, applied_len - 1).chars().next() else {
            return false;
        };
        alphabet::voice(last_applied) == Some(alphabet::to_lower(input_char))
    }
}

fn expectation_satisfied(expectation: PhoneticExpectation, form: &str) -> bool {
    let Some(first) = form.chars().next() else {
        return false;
    };
    if first == '+' {
        return expectation_satisfied(expectation, char_tail(form, 1))
            || expectation_satisfied(expectation, char_tail(form, 2));
    }
    match expectation {
        PhoneticExpectation::VowelStart => alphabet::is_vowel(first),
        PhoneticExpectation::ConsonantStart => !alphabet::is_vowel(first),
    }
}

/// Replace the last letter by its voiced counterpart when it has one
pub fn voice_last_letter(surface: &TurkishSequence) -> TurkishSequence {
    match surface.last_char().and_then(alphabet::voice) {
        Some(voiced) => surface
            .sub_sequence(0, surface.len() - 1)
            .append(voiced.encode_utf8(&mut [0; 4])),
        None => surface.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::calculate_phonetic_attributes;
    use crate::suffix::PlainApplier;

    fn engine() -> PhoneticsEngine {
        PhoneticsEngine::new(Arc::new(PlainApplier))
    }

    #[test]
    fn test_apply_voices_root() {
        let surface = TurkishSequence::new("kitap");
        let attrs = calculate_phonetic_attributes("kitap", LexemeAttributes::empty());
        let (new_surface, applied) = engine()
            .apply(&surface, attrs, &SuffixFormSequence::new("+yA"), LexemeAttributes::empty())
            .unwrap();
        assert_eq!(new_surface.as_str(), "kitab");
        assert_eq!(applied, "a");
    }

    #[test]
    fn test_apply_respects_no_voicing() {
        let surface = TurkishSequence::new("at");
        let attrs = calculate_phonetic_attributes("at", LexemeAttributes::empty());
        let lex = LexemeAttributes::from([LexemeAttribute::NoVoicing]);
        let (new_surface, applied) = engine()
            .apply(&surface, attrs, &SuffixFormSequence::new("+yI"), lex)
            .unwrap();
        assert_eq!(new_surface.as_str(), "at");
        assert_eq!(applied, "ı");
    }

    #[test]
    fn test_apply_blank_inputs() {
        let attrs = PhoneticAttributes::empty();
        let form = SuffixFormSequence::new("lAr");
        assert!(engine()
            .apply(&TurkishSequence::new(""), attrs, &form, LexemeAttributes::empty())
            .is_none());
        let (s, applied) = engine()
            .apply(
                &TurkishSequence::new("ev"),
                attrs,
                &SuffixFormSequence::new(""),
                LexemeAttributes::empty(),
            )
            .unwrap();
        assert_eq!((s.as_str(), applied.as_str()), ("ev", ""));
    }

    #[test]
    fn test_applicability() {
        let engine = engine();
        assert!(engine.is_suffix_form_applicable(PhoneticAttributes::empty(), &SuffixFormSequence::new("")));
        assert!(!engine.is_suffix_form_applicable(PhoneticAttributes::empty(), &SuffixFormSequence::new("lAr")));
    }

    #[test]
    fn test_expectations() {
        let vowel = PhoneticExpectations::from([PhoneticExpectation::VowelStart]);
        let consonant = PhoneticExpectations::from([PhoneticExpectation::ConsonantStart]);
        assert!(PhoneticsEngine::expectations_satisfied(vowel, &SuffixFormSequence::new("Iyor")));
        assert!(PhoneticsEngine::expectations_satisfied(vowel, &SuffixFormSequence::new("+yA")));
        assert!(!PhoneticsEngine::expectations_satisfied(vowel, &SuffixFormSequence::new("lAr")));
        assert!(!PhoneticsEngine::expectations_satisfied(vowel, &SuffixFormSequence::new("")));
        assert!(PhoneticsEngine::expectations_satisfied(consonant, &SuffixFormSequence::new("lAr")));
        assert!(PhoneticsEngine::expectations_satisfied(
            PhoneticExpectations::empty(),
            &SuffixFormSequence::new("")
        ));
    }

    #[test]
    fn test_application_matches() {
        assert!(PhoneticsEngine::application_matches("armudunu", "armut", true));
        assert!(!PhoneticsEngine::application_matches("armudunu", "armut", false));
        assert!(PhoneticsEngine::application_matches("armudunu", "armudu", false));
        assert!(!PhoneticsEngine::application_matches("arm", "armut", true));
        assert!(!PhoneticsEngine::application_matches("armut", "", true));
    }
}
