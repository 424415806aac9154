//! Verb stems that are not in the dictionary
//!
//! Besides the plain stem, the finder looks at the letters after the prefix
//! for evidence of a dropped progressive vowel, a causative or passive
//! allomorph, or a voiced stem-final "t", and proposes a root for each.

use super::{char_after, root_with_attributes, RootFinder};
use crate::lexicon::{Lexeme, LexemeAttribute, PrimaryPos, Root};
use crate::phonetics::sequence::{char_len, char_slice};
use crate::phonetics::{
    alphabet, calculate_phonetic_attributes, PhoneticAttributes, PhoneticsEngine, TurkishSequence,
};
use crate::suffix::{PlainApplier, SuffixFormSequence};
use std::sync::Arc;

const PROGRESSIVE: [&str; 4] = ["iyor", "ıyor", "uyor", "üyor"];
const CAUSATIVE_IR: [&str; 4] = ["ır", "ir", "ur", "ür"];
const CAUSATIVE_IT: [&str; 4] = ["ıt", "it", "ut", "üt"];
const CAUSATIVE_AR: [&str; 2] = ["ar", "er"];
const CAUSATIVE_DIR: [&str; 8] = ["dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür"];
const PASSIVE_IL: [&str; 4] = ["ıl", "il", "ul", "ül"];
const PASSIVE_IN: [&str; 4] = ["ın", "in", "un", "ün"];
const PASSIVE_INIL: [&str; 4] = ["ınıl", "inil", "unul", "ünül"];
const PASSIVE_INIL_AFTER_VOWEL: [&str; 4] = ["nıl", "nil", "nul", "nül"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    sequence: String,
    lexeme: Lexeme,
    attrs: PhoneticAttributes,
}

impl Candidate {
    fn with_attribute(&self, attr: LexemeAttribute) -> Self {
        let mut candidate = self.clone();
        candidate.lexeme.attributes.insert(attr);
        candidate.attrs =
            calculate_phonetic_attributes(&candidate.sequence, candidate.lexeme.attributes);
        candidate
    }

    /// "gid" may come from "git"
    fn voiced_variant(&self) -> Self {
        let mut candidate = self.clone();
        let stem = char_slice(
            &candidate.lexeme.lemma_root,
            0,
            char_len(&candidate.lexeme.lemma_root).saturating_sub(1),
        );
        let lemma_root = format!("{stem}t");
        candidate.lexeme.lemma = lemma_root.clone();
        candidate.lexeme.lemma_root = lemma_root;
        candidate.lexeme.attributes.insert(LexemeAttribute::Voicing);
        candidate
    }
}

fn push_unique(candidates: &mut Vec<Candidate>, candidate: Candidate) {
    if !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

fn followed_by_any(whole: &str, partial: &str, additions: &[&str]) -> bool {
    whole
        .strip_prefix(partial)
        .is_some_and(|rest| additions.iter().any(|addition| rest.starts_with(addition)))
}

/// A vowel in one of the last two letters, or l/r/n followed by a stop
fn seems_like_valid_verb_root(root: &str) -> bool {
    let mut tail = root.chars().rev().map(alphabet::letter);
    let Some(last) = tail.next() else {
        return false;
    };
    if last.vowel {
        return true;
    }
    let Some(previous) = tail.next() else {
        return false;
    };
    previous.vowel || (matches!(previous.ch, 'l' | 'r' | 'n') && !last.continuant)
}

/// Any prefix with a vowel as a verb, with derivational guesses
#[derive(Debug)]
pub struct BruteForceVerbRootFinder {
    engine: PhoneticsEngine,
    infinitive: SuffixFormSequence,
}

impl Default for BruteForceVerbRootFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BruteForceVerbRootFinder {
    /// Finder spelling lemmas with the infinitive "mAk"
    pub fn new() -> Self {
        Self {
            engine: PhoneticsEngine::new(Arc::new(PlainApplier)),
            infinitive: SuffixFormSequence::new("mAk"),
        }
    }

    /// Settle voicing attributes from the final sequence and spell the lemma
    fn finish(&self, mut candidate: Candidate) -> Candidate {
        candidate.attrs =
            calculate_phonetic_attributes(&candidate.sequence, candidate.lexeme.attributes);
        let attributes = &mut candidate.lexeme.attributes;
        if candidate.sequence.ends_with('d') && candidate.lexeme.lemma_root.ends_with('t') {
            attributes.remove(LexemeAttribute::NoVoicing);
            attributes.insert(LexemeAttribute::Voicing);
        } else {
            attributes.remove(LexemeAttribute::Voicing);
            attributes.insert(LexemeAttribute::NoVoicing);
        }

        let lemma_root = TurkishSequence::new(candidate.lexeme.lemma_root.as_str());
        if let Some((word, applied)) = self.engine.apply(
            &lemma_root,
            candidate.attrs,
            &self.infinitive,
            candidate.lexeme.attributes,
        ) {
            candidate.lexeme.lemma = format!("{word}{applied}");
        }
        candidate
    }

    fn candidates(&self, partial: &str, whole: &str) -> Vec<Candidate> {
        let Some(last_vowel) = partial.chars().rev().find(|c| alphabet::is_vowel(*c)) else {
            return Vec::new();
        };
        let Some(last) = partial.chars().next_back().map(alphabet::letter) else {
            return Vec::new();
        };
        let last_vowel = alphabet::letter(last_vowel);
        let vowel_count = partial.chars().filter(|c| alphabet::is_vowel(*c)).count();

        // a verb takes exactly one aorist; see the lexicon's aorist inference
        let aorist = if !last.vowel && vowel_count > 1 {
            LexemeAttribute::AoristI
        } else {
            LexemeAttribute::AoristA
        };
        let mut lexeme = Lexeme::new(partial, partial, PrimaryPos::Verb, None);
        lexeme.attributes.insert(aorist);
        let attrs = calculate_phonetic_attributes(partial, lexeme.attributes);
        let base = self.finish(Candidate {
            sequence: partial.to_string(),
            lexeme,
            attrs,
        });

        let Some(next) = char_after(partial, whole) else {
            return if seems_like_valid_verb_root(partial) {
                vec![base]
            } else {
                Vec::new()
            };
        };

        // verbs only voice a final t: "gidiyor"
        let voicing_might_have_happened = last.ch == 'd' && alphabet::is_vowel(next);

        let mut dropped: Vec<Candidate> = Vec::new();
        if !last.vowel && followed_by_any(whole, partial, &PROGRESSIVE) {
            // no inverse harmony in verbs, so the dropped vowel follows the last vowel
            let vowels = match (last_vowel.frontal, last_vowel.rounded) {
                (false, false) => ['a', 'ı'],
                (false, true) => ['a', 'u'],
                (true, false) => ['e', 'i'],
                (true, true) => ['e', 'ü'],
            };
            for vowel in vowels {
                let mut candidate = base.clone();
                candidate.lexeme.lemma_root.push(vowel);
                candidate.lexeme.attributes.insert(LexemeAttribute::ProgressiveVowelDrop);
                push_unique(&mut dropped, candidate);
            }
        }

        let mut derived: Vec<Candidate> = Vec::new();
        let causatives = [
            (
                LexemeAttribute::CausativeT,
                whole.starts_with(&format!("{partial}t")) && (last.continuant || last.vowel),
            ),
            (LexemeAttribute::CausativeIr, followed_by_any(whole, partial, &CAUSATIVE_IR)),
            (LexemeAttribute::CausativeIt, followed_by_any(whole, partial, &CAUSATIVE_IT)),
            (LexemeAttribute::CausativeAr, followed_by_any(whole, partial, &CAUSATIVE_AR)),
            (LexemeAttribute::CausativeDIr, followed_by_any(whole, partial, &CAUSATIVE_DIR)),
        ];
        let passives = [
            (
                LexemeAttribute::PassiveIl,
                (!last.vowel && followed_by_any(whole, partial, &PASSIVE_IL))
                    || (last.vowel && followed_by_any(whole, partial, &["l"])),
            ),
            (
                LexemeAttribute::PassiveIn,
                (!last.vowel && followed_by_any(whole, partial, &PASSIVE_IN))
                    || (last.vowel && followed_by_any(whole, partial, &["n"])),
            ),
            (
                LexemeAttribute::PassiveInIl,
                (!last.vowel && followed_by_any(whole, partial, &PASSIVE_INIL))
                    || (last.vowel && followed_by_any(whole, partial, &PASSIVE_INIL_AFTER_VOWEL)),
            ),
        ];
        for (attr, evidence) in causatives.into_iter().chain(passives) {
            if evidence {
                push_unique(&mut derived, base.with_attribute(attr));
            }
        }

        let mut generated = vec![base.clone()];
        if voicing_might_have_happened {
            push_unique(&mut generated, base.voiced_variant());
            let voiced: Vec<Candidate> = dropped
                .iter()
                .chain(&derived)
                .map(Candidate::voiced_variant)
                .collect();
            for candidate in voiced {
                push_unique(&mut generated, candidate);
            }
        }
        for candidate in dropped.into_iter().chain(derived) {
            push_unique(&mut generated, candidate);
        }

        let mut finished: Vec<Candidate> = Vec::with_capacity(generated.len());
        for candidate in generated {
            let candidate = self.finish(candidate);
            if seems_like_valid_verb_root(&candidate.lexeme.lemma_root) {
                push_unique(&mut finished, candidate);
            }
        }
        finished
    }
}

impl RootFinder for BruteForceVerbRootFinder {
    fn name(&self) -> &str {
        "brute_force_verb"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if partial.trim().is_empty() || whole.trim().is_empty() {
            return false;
        }
        if !whole.starts_with(partial) || char_len(partial) < 2 {
            return false;
        }
        if !partial.chars().any(alphabet::is_vowel) {
            return false;
        }
        !char_after(partial, whole).is_some_and(char::is_uppercase)
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        self.candidates(partial, whole)
            .into_iter()
            .map(|candidate| root_with_attributes(candidate.sequence, candidate.lexeme, candidate.attrs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(partial: &str, whole: &str) -> Vec<Arc<Root>> {
        BruteForceVerbRootFinder::new().find_roots(partial, whole)
    }

    fn with_attribute(roots: &[Arc<Root>], attr: LexemeAttribute) -> Vec<Arc<Root>> {
        roots
            .iter()
            .filter(|root| root.lexeme.has_attribute(attr))
            .cloned()
            .collect()
    }

    #[test]
    fn test_handles() {
        let finder = BruteForceVerbRootFinder::new();
        assert!(finder.handles("gel", "geliyor"));
        assert!(!finder.handles("g", "geliyor"));
        assert!(!finder.handles("gr", "grup"));
        assert!(!finder.handles("gel", "gelA"));
        assert!(!finder.handles("xyz", "geliyor"));
    }

    #[test]
    fn test_plain_root_and_lemma() {
        let found = roots("gel", "gel");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].lexeme.lemma, "gelmek");
        assert!(found[0].lexeme.has_attribute(LexemeAttribute::AoristA));
        assert!(found[0].lexeme.has_attribute(LexemeAttribute::NoVoicing));

        let found = roots("getir", "getir");
        assert!(found[0].lexeme.has_attribute(LexemeAttribute::AoristI));
    }

    #[test]
    fn test_invalid_stem_at_word_end() {
        assert!(roots("elst", "elst").is_empty());
    }

    #[test]
    fn test_progressive_vowel_drop() {
        let found = roots("başl", "başlıyor");
        let dropped = with_attribute(&found, LexemeAttribute::ProgressiveVowelDrop);
        let mut lemma_roots: Vec<&str> = dropped
            .iter()
            .map(|root| root.lexeme.lemma_root.as_str())
            .collect();
        lemma_roots.sort_unstable();
        assert_eq!(lemma_roots, vec!["başla", "başlı"]);
        assert!(dropped.iter().all(|root| root.as_str() == "başl"));
        assert!(dropped.iter().any(|root| root.lexeme.lemma == "başlamak"));
    }

    #[test]
    fn test_voicing() {
        let found = roots("gid", "gidiyor");
        let voiced = found
            .iter()
            .find(|root| root.lexeme.lemma_root == "git")
            .unwrap();
        assert_eq!(voiced.as_str(), "gid");
        assert_eq!(voiced.lexeme.lemma, "gitmek");
        assert!(voiced.lexeme.has_attribute(LexemeAttribute::Voicing));
        assert!(!voiced.lexeme.has_attribute(LexemeAttribute::NoVoicing));
    }

    #[test]
    fn test_causative_and_passive_evidence() {
        let found = roots("yap", "yaptır");
        assert_eq!(with_attribute(&found, LexemeAttribute::CausativeDIr).len(), 1);
        assert!(with_attribute(&found, LexemeAttribute::CausativeT).is_empty());

        let found = roots("oku", "okut");
        assert_eq!(with_attribute(&found, LexemeAttribute::CausativeT).len(), 1);

        let found = roots("yap", "yapıldı");
        assert_eq!(with_attribute(&found, LexemeAttribute::PassiveIl).len(), 1);

        let found = roots("oku", "okundu");
        assert_eq!(with_attribute(&found, LexemeAttribute::PassiveIn).len(), 1);
    }

    #[test]
    fn test_valid_verb_root_shape() {
        assert!(seems_like_valid_verb_root("oku"));
        assert!(seems_like_valid_verb_root("gel"));
        assert!(seems_like_valid_verb_root("kalk"));
        assert!(!seems_like_valid_verb_root("elst"));
        assert!(!seems_like_valid_verb_root("kalş"));
    }
}
