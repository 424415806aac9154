//! Noun stems that are not in the dictionary
//!
//! The finder guesses which orthographic change would explain the letters
//! right after the prefix and returns one root per hypothesis.

use super::{char_after, synthesized_root, RootFinder};
use crate::lexicon::{Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos, Root};
use crate::phonetics::alphabet;
use crate::phonetics::sequence::{char_len, char_slice, char_tail};
use std::sync::Arc;

/// A root still being shaped: surface sequence plus an owned lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    sequence: String,
    lexeme: Lexeme,
}

impl Candidate {
    fn noun(partial: &str) -> Self {
        Self {
            sequence: partial.to_string(),
            lexeme: Lexeme::new(partial, partial, PrimaryPos::Noun, None),
        }
    }

    fn with_attribute(mut self, attr: LexemeAttribute) -> Self {
        self.lexeme.attributes.insert(attr);
        self
    }

    fn with_lemma_root(mut self, lemma_root: String) -> Self {
        self.lexeme.lemma = lemma_root.clone();
        self.lexeme.lemma_root = lemma_root;
        self
    }

    /// "kitab" may come from "kitap"
    fn inverse_devoiced(&self, last: char) -> Vec<Candidate> {
        let stem = without_last_chars(&self.lexeme.lemma_root, 1);
        alphabet::inverse_voice(last)
            .iter()
            .map(|devoiced| self.clone().with_lemma_root(format!("{stem}{devoiced}")))
            .collect()
    }

    /// "hakk" comes from "hak"
    fn undoubled(&self, last: char) -> Candidate {
        let stem = without_last_chars(&self.lexeme.lemma_root, 2);
        self.clone()
            .with_lemma_root(format!("{stem}{last}"))
            .with_attribute(LexemeAttribute::Doubling)
    }

    fn into_root(self) -> Arc<Root> {
        synthesized_root(self.sequence, self.lexeme)
    }
}

fn without_last_chars(s: &str, n: usize) -> &str {
    char_slice(s, 0, char_len(s).saturating_sub(n))
}

fn brute_force_nouns(partial: &str, whole: &str) -> Vec<Candidate> {
    let base = Candidate::noun(partial);
    let partial_len = char_len(partial);
    if partial == whole || partial_len < 2 {
        return vec![base];
    }
    let Some(last_vowel) = partial.chars().rev().find(|c| alphabet::is_vowel(*c)) else {
        return vec![base];
    };
    let (Some(last), Some(next)) = (partial.chars().next_back(), char_after(partial, whole)) else {
        return vec![base];
    };
    if last.is_uppercase() || next.is_uppercase() {
        return vec![base];
    }

    let mut candidates = voicing_and_doubling(partial, last, next, base);

    let first_vowel_after = char_tail(whole, partial_len - 1)
        .chars()
        .find(|c| alphabet::is_vowel(*c));
    if first_vowel_after
        .is_some_and(|vowel| alphabet::letter(vowel).frontal != alphabet::letter(last_vowel).frontal)
    {
        candidates = candidates
            .into_iter()
            .map(|candidate| candidate.with_attribute(LexemeAttribute::InverseHarmony))
            .collect();
    }
    candidates
}

fn voicing_and_doubling(partial: &str, last: char, next: char, base: Candidate) -> Vec<Candidate> {
    let next_is_vowel = alphabet::is_vowel(next);
    let no_voicing_applies = alphabet::is_voicable(last) && next_is_vowel;
    let voicing_might_have_happened = !alphabet::inverse_voice(last).is_empty() && next_is_vowel;
    let previous = partial.chars().rev().nth(1);
    let doubling_might_have_happened = char_len(partial) > 2
        && !alphabet::is_vowel(last)
        && previous == Some(last)
        && next_is_vowel;

    let no_voicing = |candidate: Candidate| {
        let mut candidate = candidate;
        candidate.lexeme.attributes = LexemeAttributes::from([LexemeAttribute::NoVoicing]);
        candidate
    };

    if doubling_might_have_happened {
        let doubling = base.undoubled(last);
        if no_voicing_applies {
            vec![
                no_voicing(base),
                doubling.with_attribute(LexemeAttribute::NoVoicing),
            ]
        } else if voicing_might_have_happened {
            let devoiced_doublings: Vec<Candidate> = base
                .inverse_devoiced(last)
                .into_iter()
                .filter_map(|devoiced| {
                    let devoiced_last = devoiced.lexeme.lemma_root.chars().next_back()?;
                    Some(devoiced.undoubled(devoiced_last))
                })
                .collect();
            let mut candidates = vec![base, doubling];
            candidates.extend(devoiced_doublings);
            candidates
        } else {
            vec![base, doubling]
        }
    } else if no_voicing_applies {
        vec![no_voicing(base)]
    } else if voicing_might_have_happened {
        let devoiced = base.inverse_devoiced(last);
        let mut candidates = vec![base];
        candidates.extend(devoiced);
        candidates
    } else {
        vec![base]
    }
}

/// Any prefix of two or more letters as a noun, with orthographic guesses
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceNounRootFinder;

impl RootFinder for BruteForceNounRootFinder {
    fn name(&self) -> &str {
        "brute_force_noun"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if partial.trim().is_empty() || whole.trim().is_empty() {
            return false;
        }
        let (partial_len, whole_len) = (char_len(partial), char_len(whole));
        if whole_len < partial_len || (partial_len < 2 && whole_len >= 2) {
            return false;
        }
        whole.starts_with(partial)
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        brute_force_nouns(partial, whole)
            .into_iter()
            .map(Candidate::into_root)
            .collect()
    }
}

/// Compounds with an implicit possessive: "atkuyruğu", "suborusu"
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCompoundNounRootFinder;

impl RootFinder for BruteForceCompoundNounRootFinder {
    fn name(&self) -> &str {
        "brute_force_compound_noun"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if partial.trim().is_empty() || whole.trim().is_empty() || partial == whole {
            return false;
        }
        let partial_len = char_len(partial);
        if partial_len < 5 || char_len(whole) < partial_len + 2 {
            return false;
        }
        let mut tail = partial.chars().rev();
        let (Some(last), Some(previous)) = (tail.next(), tail.next()) else {
            return false;
        };
        if last.is_uppercase() || previous.is_uppercase() {
            return false;
        }
        if !matches!(last, 'i' | 'u' | 'ı' | 'ü') {
            return false;
        }
        // the possessive is followed by a buffer n: "atkuyruğuna"
        char_after(partial, whole) == Some('n')
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let partial_len = char_len(partial);
        let mut compounds: Vec<Candidate> = Vec::new();

        // the bare noun is stored as the sequence so that its harmony is kept
        for noun in brute_force_nouns(char_slice(partial, 0, partial_len - 1), whole) {
            let sequence = noun.lexeme.lemma_root.clone();
            let mut compound = noun.with_lemma_root(partial.to_string());
            compound.sequence = sequence;
            compounds.push(compound);
        }

        // "suborusu": the possessive has a buffer s
        if partial.chars().rev().nth(1) == Some('s') {
            for noun in brute_force_nouns(char_slice(partial, 0, partial_len - 2), whole) {
                compounds.push(noun.with_lemma_root(partial.to_string()));
            }
        }

        compounds
            .into_iter()
            .map(|compound| compound.with_attribute(LexemeAttribute::CompoundP3sg).into_root())
            .collect()
    }
}
