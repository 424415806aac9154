//! Root finders
//!
//! A root finder proposes roots for a prefix of a word. Dictionary lookups
//! return stored roots; the other finders synthesize roots from the surface
//! itself (numbers, punctuation, proper nouns) or guess which orthographic
//! change would explain an unknown stem.

mod dictionary;
mod digits;
mod noun;
mod proper_noun;
mod punctuation;
mod verb;

pub use dictionary::DictionaryRootFinder;
pub use digits::{CardinalDigitsRootFinder, OrdinalDigitsRootFinder, RangeDigitsRootFinder};
pub use noun::{BruteForceCompoundNounRootFinder, BruteForceNounRootFinder};
pub use proper_noun::{ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder};
pub use punctuation::PunctuationRootFinder;
pub use verb::BruteForceVerbRootFinder;

use crate::error::{CoreError, Result};
use crate::lexicon::{Lexeme, LexemeAttribute, Root, RootMap};
use crate::phonetics::alphabet;
use crate::phonetics::{
    calculate_phonetic_attributes, PhoneticAttributes, PhoneticExpectations, TurkishSequence,
};
use std::fmt;
use std::sync::Arc;

/// Strategy proposing roots for a prefix of a word
pub trait RootFinder: Send + Sync {
    /// Name used in logs and chain errors
    fn name(&self) -> &str;

    /// Cheap prefilter; may accept prefixes for which no root exists
    fn handles(&self, partial: &str, whole: &str) -> bool;

    /// Roots whose sequence could start `whole`, matched against `partial`
    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>>;
}

/// What the chain does after a finder handled a prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderPolicy {
    /// Later finders are not consulted
    StopWhenHandled,
    /// Later finders still run
    Continue,
}

/// Ordered list of finders; every stop finder precedes every continue finder
#[derive(Default)]
pub struct RootFinderChain {
    finders: Vec<(Box<dyn RootFinder>, FinderPolicy)>,
}

impl fmt::Debug for RootFinderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.finders
                    .iter()
                    .map(|(finder, policy)| (finder.name().to_string(), *policy)),
            )
            .finish()
    }
}

impl RootFinderChain {
    /// Empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finder.
    ///
    /// Fails when a stop finder is added after a continue finder, which would
    /// let slow brute-force finders run before the deterministic ones.
    pub fn offer(mut self, finder: impl RootFinder + 'static, policy: FinderPolicy) -> Result<Self> {
        let after_continue = self
            .finders
            .last()
            .is_some_and(|(_, last)| *last == FinderPolicy::Continue);
        if policy == FinderPolicy::StopWhenHandled && after_continue {
            return Err(CoreError::ChainOrdering {
                finder: finder.name().to_string(),
            });
        }
        self.finders.push((Box::new(finder), policy));
        Ok(self)
    }

    /// Standard chain over a root map
    pub fn standard(root_map: Arc<RootMap>, brute_force: bool) -> Result<Self> {
        let mut chain = Self::new()
            .offer(PunctuationRootFinder::new()?, FinderPolicy::StopWhenHandled)?
            .offer(RangeDigitsRootFinder::new()?, FinderPolicy::StopWhenHandled)?
            .offer(OrdinalDigitsRootFinder::new()?, FinderPolicy::StopWhenHandled)?
            .offer(CardinalDigitsRootFinder::new()?, FinderPolicy::StopWhenHandled)?
            .offer(ProperNounFromApostropheRootFinder, FinderPolicy::StopWhenHandled)?
            .offer(ProperNounWithoutApostropheRootFinder, FinderPolicy::Continue)?
            .offer(DictionaryRootFinder::new(root_map), FinderPolicy::Continue)?;
        if brute_force {
            chain = chain
                .offer(BruteForceCompoundNounRootFinder, FinderPolicy::Continue)?
                .offer(BruteForceNounRootFinder, FinderPolicy::Continue)?
                .offer(BruteForceVerbRootFinder::new(), FinderPolicy::Continue)?;
        }
        Ok(chain)
    }

    /// Names of the finders in order
    pub fn finder_names(&self) -> Vec<&str> {
        self.finders.iter().map(|(finder, _)| finder.name()).collect()
    }

    /// Number of finders
    pub fn len(&self) -> usize {
        self.finders.len()
    }

    /// Whether the chain has no finders
    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    /// Roots of every finder that handles the prefix, until a stop finder handles it.
    ///
    /// A root that reads like one proposed by an earlier finder is dropped,
    /// so the dictionary and a guessing finder never both seed "ev". Roots of
    /// a single finder are all kept since they are distinct hypotheses.
    pub fn find_roots(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let mut roots: Vec<Arc<Root>> = Vec::new();
        for (finder, policy) in &self.finders {
            if !finder.handles(partial, whole) {
                continue;
            }
            let earlier = roots.len();
            for root in finder.find_roots(partial, whole) {
                if !roots[..earlier].iter().any(|known| known.reads_like(&root)) {
                    roots.push(root);
                }
            }
            if *policy == FinderPolicy::StopWhenHandled {
                break;
            }
        }
        roots
    }
}

/// Whether a root may start a word whose prefix is `partial`.
///
/// Compound roots with an implicit possessive are exempt from the prefix
/// check since their sequence is the bare first noun.
pub fn is_valid_root(root: &Root, partial: &str) -> bool {
    let partial_len = partial.chars().count();
    if root.sequence.len() > partial_len {
        return false;
    }
    if root.lexeme.has_attribute(LexemeAttribute::CompoundP3sg) {
        return true;
    }
    alphabet::lowercase(partial).starts_with(&alphabet::lowercase(root.as_str()))
}

/// Root over a synthesized lexeme, attributes computed from the sequence
pub(crate) fn synthesized_root(sequence: impl Into<TurkishSequence>, lexeme: Lexeme) -> Arc<Root> {
    let sequence = sequence.into();
    let attrs = calculate_phonetic_attributes(sequence.as_str(), lexeme.attributes);
    root_with_attributes(sequence, lexeme, attrs)
}

pub(crate) fn root_with_attributes(
    sequence: impl Into<TurkishSequence>,
    lexeme: Lexeme,
    attrs: PhoneticAttributes,
) -> Arc<Root> {
    Arc::new(Root::new(
        sequence,
        Arc::new(lexeme),
        attrs,
        PhoneticExpectations::empty(),
    ))
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn is_all_uppercase(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_uppercase)
}

/// Character of `whole` right after the prefix `partial`
fn char_after(partial: &str, whole: &str) -> Option<char> {
    whole.chars().nth(partial.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{PrimaryPos, RootGenerator};

    struct Fixed(&'static str);

    impl RootFinder for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn handles(&self, _partial: &str, _whole: &str) -> bool {
            true
        }

        fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
            vec![synthesized_root(
                partial,
                Lexeme::new(self.0, self.0, PrimaryPos::Noun, None),
            )]
        }
    }

    #[test]
    fn test_stop_after_continue_is_rejected() {
        let result = RootFinderChain::new()
            .offer(Fixed("a"), FinderPolicy::Continue)
            .and_then(|chain| chain.offer(Fixed("b"), FinderPolicy::StopWhenHandled));
        assert!(matches!(result, Err(CoreError::ChainOrdering { finder }) if finder == "b"));
    }

    #[test]
    fn test_stop_policy_ends_the_chain() {
        let chain = RootFinderChain::new()
            .offer(Fixed("first"), FinderPolicy::StopWhenHandled)
            .unwrap()
            .offer(Fixed("second"), FinderPolicy::Continue)
            .unwrap();
        let roots = chain.find_roots("ab", "abc");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].lexeme.lemma, "first");
    }

    #[test]
    fn test_continue_policy_collects_all() {
        let chain = RootFinderChain::new()
            .offer(Fixed("first"), FinderPolicy::Continue)
            .unwrap()
            .offer(Fixed("second"), FinderPolicy::Continue)
            .unwrap();
        assert_eq!(chain.find_roots("ab", "abc").len(), 2);
    }

    struct Tagged(&'static str);

    impl RootFinder for Tagged {
        fn name(&self) -> &str {
            "tagged"
        }

        fn handles(&self, _partial: &str, _whole: &str) -> bool {
            true
        }

        fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
            vec![synthesized_root(
                partial,
                Lexeme::new(self.0, self.0, PrimaryPos::Noun, None)
                    .with_attributes([LexemeAttribute::NoVoicing]),
            )]
        }
    }

    struct Hypotheses;

    impl RootFinder for Hypotheses {
        fn name(&self) -> &str {
            "hypotheses"
        }

        fn handles(&self, _partial: &str, _whole: &str) -> bool {
            true
        }

        fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
            [LexemeAttribute::PassiveIl, LexemeAttribute::PassiveIn]
                .into_iter()
                .map(|attr| {
                    synthesized_root(
                        partial,
                        Lexeme::new(partial, partial, PrimaryPos::Verb, None).with_attributes([attr]),
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_hypotheses_of_one_finder_are_kept() {
        let chain = RootFinderChain::new()
            .offer(Hypotheses, FinderPolicy::Continue)
            .unwrap();
        assert_eq!(chain.find_roots("al", "alın").len(), 2);
    }

    #[test]
    fn test_roots_reading_alike_are_returned_once() {
        let chain = RootFinderChain::new()
            .offer(Fixed("same"), FinderPolicy::Continue)
            .unwrap()
            .offer(Fixed("same"), FinderPolicy::Continue)
            .unwrap()
            .offer(Tagged("same"), FinderPolicy::Continue)
            .unwrap()
            .offer(Fixed("other"), FinderPolicy::Continue)
            .unwrap();
        let roots = chain.find_roots("ab", "abc");
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].lexeme.lemma, "same");
        assert!(roots[0].lexeme.attributes.is_empty());
        assert_eq!(roots[1].lexeme.lemma, "other");
    }

    #[test]
    fn test_standard_chain_order() {
        let chain = RootFinderChain::standard(Arc::new(RootMap::new()), true).unwrap();
        assert_eq!(chain.len(), 10);
        assert_eq!(chain.finder_names()[0], "punctuation");
        assert_eq!(chain.finder_names()[9], "brute_force_verb");
        assert_eq!(
            RootFinderChain::standard(Arc::new(RootMap::new()), false)
                .unwrap()
                .len(),
            7
        );
    }

    #[test]
    fn test_root_validation() {
        let lexeme = Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
            .with_attributes([LexemeAttribute::Voicing]);
        let roots = RootGenerator::new().generate(&lexeme);
        let kitab = roots.iter().find(|r| r.as_str() == "kitab").unwrap();
        assert!(is_valid_root(kitab, "kitab"));
        assert!(is_valid_root(kitab, "Kitab"));
        assert!(!is_valid_root(kitab, "kita"));
        assert!(!is_valid_root(kitab, "kitap"));

        let compound = Root::new(
            "atkuyruk",
            Arc::new(
                Lexeme::new("atkuyruğu", "atkuyruğu", PrimaryPos::Noun, None)
                    .with_attributes([LexemeAttribute::CompoundP3sg]),
            ),
            PhoneticAttributes::empty(),
            PhoneticExpectations::empty(),
        );
        assert!(is_valid_root(&compound, "atkuyruğ"));
        assert!(!is_valid_root(&compound, "atkuyr"));
    }
}
