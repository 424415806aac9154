//! Expansion of dictionary lexemes into surface roots

use super::{Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos, Root};
use crate::phonetics::{
    alphabet, calculate_phonetic_attributes, sequence::char_len, sequence::char_slice,
    PhoneticAttribute, PhoneticExpectation, PhoneticExpectations,
};
use std::sync::Arc;

/// Lexeme attributes that produce a second, modified root
const MODIFIERS: [LexemeAttribute; 7] = [
    LexemeAttribute::Doubling,
    LexemeAttribute::LastVowelDrop,
    LexemeAttribute::ProgressiveVowelDrop,
    LexemeAttribute::InverseHarmony,
    LexemeAttribute::Voicing,
    LexemeAttribute::VoicingOpt,
    LexemeAttribute::RootChange,
];

/// Irregular stem changes; a `None` category applies to every category
const ROOT_CHANGES: [(&str, Option<PrimaryPos>, &str); 12] = [
    ("ben", Some(PrimaryPos::Pronoun), "ban"),
    ("sen", Some(PrimaryPos::Pronoun), "san"),
    ("demek", Some(PrimaryPos::Verb), "di"),
    ("yemek", Some(PrimaryPos::Verb), "yi"),
    ("hepsi", Some(PrimaryPos::Pronoun), "hep"),
    ("ora", Some(PrimaryPos::Pronoun), "or"),
    ("bura", Some(PrimaryPos::Pronoun), "bur"),
    ("şura", Some(PrimaryPos::Pronoun), "şur"),
    ("nere", Some(PrimaryPos::Pronoun), "ner"),
    ("içeri", None, "içer"),
    ("dışarı", None, "dışar"),
    ("birbiri", Some(PrimaryPos::Pronoun), "birbir"),
];

pub(super) fn root_change(lemma: &str, pos: PrimaryPos) -> Option<&'static str> {
    ROOT_CHANGES
        .iter()
        .find(|(l, p, _)| *l == lemma && *p == Some(pos))
        .or_else(|| ROOT_CHANGES.iter().find(|(l, p, _)| *l == lemma && p.is_none()))
        .map(|(_, _, changed)| *changed)
}

/// Produces the roots under which a lexeme can appear on the surface
#[derive(Debug, Clone, Default)]
pub struct RootGenerator {
    convert_circumflexes: bool,
}

impl RootGenerator {
    /// Generator producing roots exactly as spelled in the lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Also produce â/î/û-free variants of every root (kâğıt → kağıt)
    pub fn with_circumflex_conversion(mut self, enabled: bool) -> Self {
        self.convert_circumflexes = enabled;
        self
    }

    /// Roots of every lexeme, without duplicates
    pub fn generate_all<'a>(&self, lexemes: impl IntoIterator<Item = &'a Lexeme>) -> Vec<Root> {
        let mut all: Vec<Root> = Vec::new();
        for lexeme in lexemes {
            for root in self.generate(lexeme) {
                if !all.contains(&root) {
                    all.push(root);
                }
            }
        }
        all
    }

    /// Roots of one lexeme
    pub fn generate(&self, lexeme: &Lexeme) -> Vec<Root> {
        let roots = if lexeme.attributes.contains_any(MODIFIERS.into_iter().collect()) {
            self.generate_modified(lexeme)
        } else {
            let attrs = calculate_phonetic_attributes(&lexeme.lemma_root, lexeme.attributes);
            vec![Root::new(
                lexeme.lemma_root.as_str(),
                Arc::new(lexeme.clone()),
                attrs,
                PhoneticExpectations::empty(),
            )]
        };

        if self.convert_circumflexes {
            with_circumflex_variants(roots)
        } else {
            roots
        }
    }

    fn generate_modified(&self, lexeme: &Lexeme) -> Vec<Root> {
        let attributes = lexeme.attributes;
        if attributes.contains(LexemeAttribute::RootChange) {
            return self.generate_changed(lexeme);
        }

        let lemma_root = lexeme.lemma_root.as_str();
        let mut modified: String = lemma_root.to_string();
        let mut original_attrs = calculate_phonetic_attributes(lemma_root, LexemeAttributes::empty());
        let mut modified_attrs = original_attrs;
        let mut original_expectations = PhoneticExpectations::empty();
        let mut modified_expectations = PhoneticExpectations::empty();

        if attributes.contains(LexemeAttribute::Voicing)
            || attributes.contains(LexemeAttribute::VoicingOpt)
        {
            let voiced = if lemma_root.ends_with("nk") {
                Some('g')
            } else {
                modified.chars().next_back().and_then(alphabet::voice)
            };
            if let Some(voiced) = voiced {
                modified.pop();
                modified.push(voiced);
            }
            modified_attrs.remove(PhoneticAttribute::LastLetterVoicelessStop);
            if !attributes.contains(LexemeAttribute::VoicingOpt) {
                original_expectations.insert(PhoneticExpectation::ConsonantStart);
            }
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        if attributes.contains(LexemeAttribute::Doubling) {
            if let Some(last) = modified.chars().next_back() {
                modified.push(last);
            }
            original_expectations.insert(PhoneticExpectation::ConsonantStart);
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        if attributes.contains(LexemeAttribute::LastVowelDrop) {
            let len = char_len(&modified);
            if len >= 2 {
                modified = format!(
                    "{}{}",
                    char_slice(&modified, 0, len - 2),
                    char_slice(&modified, len - 1, len)
                );
            }
            if lexeme.primary_pos != PrimaryPos::Verb {
                original_expectations.insert(PhoneticExpectation::ConsonantStart);
            }
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        if attributes.contains(LexemeAttribute::InverseHarmony) {
            for attrs in [&mut original_attrs, &mut modified_attrs] {
                attrs.insert(PhoneticAttribute::LastVowelFrontal);
                attrs.remove(PhoneticAttribute::LastVowelBack);
            }
        }

        if attributes.contains(LexemeAttribute::ProgressiveVowelDrop) {
            modified.pop();
            if modified.chars().any(alphabet::is_vowel) {
                modified_attrs =
                    calculate_phonetic_attributes(&modified, LexemeAttributes::empty());
            }
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        let lexeme = Arc::new(lexeme.clone());
        let original = Root::new(
            lemma_root,
            Arc::clone(&lexeme),
            original_attrs,
            original_expectations,
        );
        let modified = Root::new(modified, lexeme, modified_attrs, modified_expectations);
        if original == modified {
            vec![original]
        } else {
            vec![original, modified]
        }
    }

    fn generate_changed(&self, lexeme: &Lexeme) -> Vec<Root> {
        let Some(changed) = root_change(&lexeme.lemma, lexeme.primary_pos) else {
            tracing::debug!(lemma = %lexeme.lemma, "no root change registered");
            let attrs = calculate_phonetic_attributes(&lexeme.lemma_root, lexeme.attributes);
            return vec![Root::new(
                lexeme.lemma_root.as_str(),
                Arc::new(lexeme.clone()),
                attrs,
                PhoneticExpectations::empty(),
            )];
        };

        let mut unchanged_lexeme = lexeme.clone();
        unchanged_lexeme.attributes.remove(LexemeAttribute::RootChange);
        let attributes = unchanged_lexeme.attributes;
        let lexeme = Arc::new(unchanged_lexeme);

        [lexeme.lemma_root.clone(), changed.to_string()]
            .into_iter()
            .map(|seq| {
                let attrs = calculate_phonetic_attributes(&seq, attributes);
                Root::new(seq, Arc::clone(&lexeme), attrs, PhoneticExpectations::empty())
            })
            .collect()
    }
}

fn plain_vowel(c: char) -> char {
    match c {
        'â' => 'a',
        'î' => 'i',
        'û' => 'u',
        _ => c,
    }
}

fn with_circumflex_variants(roots: Vec<Root>) -> Vec<Root> {
    let mut all = roots.clone();
    for root in roots {
        if !root.as_str().contains(['â', 'î', 'û']) {
            continue;
        }
        let plain: String = root.as_str().chars().map(plain_vowel).collect();
        let variant = Root::new(
            plain,
            Arc::clone(&root.lexeme),
            root.phonetic_attributes,
            root.phonetic_expectations,
        );
        if !all.contains(&variant) {
            all.push(variant);
        }
    }
    all
}
