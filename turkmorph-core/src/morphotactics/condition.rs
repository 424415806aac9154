//! Predicates over the history of a parse path
//!
//! Suffix forms carry up to three of these. They are plain data so the graph
//! can be shared across threads and compared in tests.

use super::graph::{StateType, SuffixId};
use crate::lexicon::{LexemeAttribute, LexemeAttributes, PrimaryPos, SecondaryPos};
use crate::morpheme::{MorphemeContainer, SuffixTransition};
use crate::phonetics::sequence::char_len;
use std::ops;

/// A boolean predicate evaluated against a [`MorphemeContainer`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The suffix (optionally with exactly this template) was applied since
    /// the last derivation
    ComesAfter {
        /// Suffix to look for
        suffix: SuffixId,
        /// Template the suffix must have been applied with
        form: Option<String>,
    },
    /// The last derivation was the suffix (optionally with this template)
    ComesAfterDerivation {
        /// Suffix to look for
        suffix: SuffixId,
        /// Template the derivation must have been applied with
        form: Option<String>,
    },
    /// The last derivation with a non-empty template was the suffix
    ComesAfterLastNonBlankDerivation {
        /// Suffix to look for
        suffix: SuffixId,
        /// Template the derivation must have been applied with
        form: Option<String>,
    },
    /// The root reads exactly so
    AppliesToRoot(String),
    /// The lexeme has the primary category
    RootHasPrimaryPos(PrimaryPos),
    /// The lexeme has the secondary category
    RootHasSecondaryPos(SecondaryPos),
    /// The root is the shortened stem of a progressive-vowel-drop verb
    RootHasProgressiveVowelDrop,
    /// The last transition entered a state of this kind
    LastSuffixGoesTo(StateType),
    /// The root lexeme carries every attribute
    HasLexemeAttributes(LexemeAttributes),
    /// The root lexeme carries none of the attributes
    DoesntHaveLexemeAttributes(LexemeAttributes),
    /// Every operand holds; empty is true
    And(Vec<Condition>),
    /// Some operand holds; empty is false
    Or(Vec<Condition>),
    /// The operand does not hold
    Not(Box<Condition>),
}

impl Condition {
    /// See [`Condition::ComesAfter`]
    pub fn comes_after(suffix: SuffixId) -> Self {
        Condition::ComesAfter { suffix, form: None }
    }

    /// See [`Condition::ComesAfter`]
    pub fn comes_after_form(suffix: SuffixId, form: &str) -> Self {
        Condition::ComesAfter {
            suffix,
            form: Some(form.to_string()),
        }
    }

    /// See [`Condition::ComesAfterDerivation`]
    pub fn comes_after_derivation(suffix: SuffixId) -> Self {
        Condition::ComesAfterDerivation { suffix, form: None }
    }

    /// See [`Condition::ComesAfterDerivation`]
    pub fn comes_after_derivation_form(suffix: SuffixId, form: &str) -> Self {
        Condition::ComesAfterDerivation {
            suffix,
            form: Some(form.to_string()),
        }
    }

    /// See [`Condition::ComesAfterLastNonBlankDerivation`]
    pub fn comes_after_last_non_blank_derivation(suffix: SuffixId) -> Self {
        Condition::ComesAfterLastNonBlankDerivation { suffix, form: None }
    }

    /// See [`Condition::AppliesToRoot`]
    pub fn applies_to_root(root: &str) -> Self {
        Condition::AppliesToRoot(root.to_string())
    }

    /// The root lexeme carries the attribute
    pub fn has_lexeme_attribute(attr: LexemeAttribute) -> Self {
        Condition::HasLexemeAttributes(LexemeAttributes::from([attr]))
    }

    /// The root lexeme does not carry the attribute
    pub fn doesnt_have_lexeme_attribute(attr: LexemeAttribute) -> Self {
        Condition::DoesntHaveLexemeAttributes(LexemeAttributes::from([attr]))
    }

    /// Conjunction of all conditions
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::And(conditions.into_iter().collect())
    }

    /// Disjunction of all conditions
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Or(conditions.into_iter().collect())
    }

    /// Evaluate against a path
    pub fn is_satisfied_by(&self, container: &MorphemeContainer) -> bool {
        match self {
            Condition::ComesAfter { suffix, form } => {
                if container.suffixes_since_derivation().is_empty() {
                    return false;
                }
                match form {
                    Some(form) => container
                        .transitions_since_derivation()
                        .iter()
                        .any(|t| transition_matches(t, *suffix, Some(form))),
                    None => container.suffixes_since_derivation().contains(suffix),
                }
            }
            Condition::ComesAfterDerivation { suffix, form } => container
                .last_derivation_transition()
                .is_some_and(|t| transition_matches(t, *suffix, form.as_deref())),
            Condition::ComesAfterLastNonBlankDerivation { suffix, form } => container
                .last_non_blank_derivation()
                .is_some_and(|t| transition_matches(t, *suffix, form.as_deref())),
            Condition::AppliesToRoot(root) => container.root().as_str() == root,
            Condition::RootHasPrimaryPos(pos) => container.root().lexeme.primary_pos == *pos,
            Condition::RootHasSecondaryPos(pos) => {
                container.root().lexeme.secondary_pos == Some(*pos)
            }
            Condition::RootHasProgressiveVowelDrop => {
                let root = container.root();
                root.lexeme.has_attribute(LexemeAttribute::ProgressiveVowelDrop)
                    && root.sequence.len() + 1 == char_len(&root.lexeme.lemma_root)
            }
            Condition::LastSuffixGoesTo(kind) => container
                .last_transition()
                .is_some_and(|t| t.target.kind == *kind),
            Condition::HasLexemeAttributes(attrs) => {
                lexeme_attributes_hold(container, |own| own.contains_all(*attrs))
            }
            Condition::DoesntHaveLexemeAttributes(attrs) => {
                lexeme_attributes_hold(container, |own| !own.contains_any(*attrs))
            }
            Condition::And(conditions) => conditions.iter().all(|c| c.is_satisfied_by(container)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.is_satisfied_by(container)),
            Condition::Not(condition) => !condition.is_satisfied_by(container),
        }
    }
}

fn transition_matches(transition: &SuffixTransition, suffix: SuffixId, form: Option<&str>) -> bool {
    let applied = &transition.application.form;
    applied.suffix == suffix && form.map_or(true, |form| applied.template() == form)
}

// Lexeme attributes only constrain the root itself; once a visible suffix
// has been applied they no longer apply.
fn lexeme_attributes_hold(
    container: &MorphemeContainer,
    check: impl Fn(LexemeAttributes) -> bool,
) -> bool {
    if container
        .transitions()
        .any(|t| !t.application.actual.is_empty())
    {
        return true;
    }
    let own = container.root().lexeme.attributes;
    if own.is_empty() {
        return false;
    }
    check(own)
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}

impl ops::BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        match self {
            Condition::And(mut operands) => {
                operands.push(rhs);
                Condition::And(operands)
            }
            lhs => Condition::And(vec![lhs, rhs]),
        }
    }
}

impl ops::BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        match self {
            Condition::Or(mut operands) => {
                operands.push(rhs);
                Condition::Or(operands)
            }
            lhs => Condition::Or(vec![lhs, rhs]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexeme, Root};
    use crate::morpheme::SuffixFormApplication;
    use crate::morphotactics::SuffixGraph;
    use crate::phonetics::{calculate_phonetic_attributes, PhoneticExpectations};
    use std::sync::Arc;

    fn root(surface: &str, lexeme: Lexeme) -> Arc<Root> {
        let attrs = calculate_phonetic_attributes(surface, lexeme.attributes);
        Arc::new(Root::new(
            surface,
            Arc::new(lexeme),
            attrs,
            PhoneticExpectations::empty(),
        ))
    }

    fn extend(
        graph: &SuffixGraph,
        container: &MorphemeContainer,
        suffix: &str,
        template: &str,
        actual: &str,
        target: &str,
    ) -> MorphemeContainer {
        let form = graph.suffix_form(suffix, template).unwrap();
        let target = graph.info(graph.state_id(target).unwrap());
        let mut next = container.clone();
        next.add_transition(SuffixFormApplication::new(form, actual, actual), target);
        next
    }

    fn kitap_path(graph: &SuffixGraph) -> MorphemeContainer {
        let kitap = root("kitap", Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None));
        let state = graph.info(graph.state_id("NOUN_ROOT").unwrap());
        let c = MorphemeContainer::new(kitap, state, "lar");
        let c = extend(graph, &c, "A3Pl_Noun", "lAr", "lar", "NOUN_WITH_AGREEMENT");
        extend(graph, &c, "Pnon_Noun", "", "", "NOUN_WITH_POSSESSION")
    }

    #[test]
    fn test_comes_after() {
        let graph = SuffixGraph::standard().unwrap();
        let path = kitap_path(&graph);
        let a3pl = graph.suffix_id("A3Pl_Noun").unwrap();
        let a3sg = graph.suffix_id("A3Sg_Noun").unwrap();
        assert!(Condition::comes_after(a3pl).is_satisfied_by(&path));
        assert!(Condition::comes_after_form(a3pl, "lAr").is_satisfied_by(&path));
        assert!(!Condition::comes_after_form(a3pl, "lar").is_satisfied_by(&path));
        assert!(!Condition::comes_after(a3sg).is_satisfied_by(&path));
        assert!((!Condition::comes_after(a3sg)).is_satisfied_by(&path));
    }

    #[test]
    fn test_combinators() {
        let graph = SuffixGraph::standard().unwrap();
        let path = kitap_path(&graph);
        let a3pl = Condition::comes_after(graph.suffix_id("A3Pl_Noun").unwrap());
        let a3sg = Condition::comes_after(graph.suffix_id("A3Sg_Noun").unwrap());
        assert!((a3pl.clone() | a3sg.clone()).is_satisfied_by(&path));
        assert!(!(a3pl.clone() & a3sg.clone()).is_satisfied_by(&path));
        assert!(Condition::all([]).is_satisfied_by(&path));
        assert!(!Condition::any([]).is_satisfied_by(&path));
        assert_eq!(!!a3pl.clone(), a3pl);
    }

    #[test]
    fn test_root_predicates() {
        let graph = SuffixGraph::standard().unwrap();
        let path = kitap_path(&graph);
        assert!(Condition::applies_to_root("kitap").is_satisfied_by(&path));
        assert!(Condition::RootHasPrimaryPos(PrimaryPos::Noun).is_satisfied_by(&path));
        assert!(!Condition::RootHasSecondaryPos(SecondaryPos::Time).is_satisfied_by(&path));
        assert!(Condition::LastSuffixGoesTo(StateType::Transfer).is_satisfied_by(&path));
    }

    #[test]
    fn test_progressive_vowel_drop_needs_shortened_root() {
        let graph = SuffixGraph::standard().unwrap();
        let state = graph.info(graph.state_id("VERB_ROOT").unwrap());
        let lexeme = || {
            Lexeme::new("başlamak", "başla", PrimaryPos::Verb, None)
                .with_attributes([LexemeAttribute::ProgressiveVowelDrop])
        };
        let short = MorphemeContainer::new(root("başl", lexeme()), state, "ıyor");
        let full = MorphemeContainer::new(root("başla", lexeme()), state, "");
        assert!(Condition::RootHasProgressiveVowelDrop.is_satisfied_by(&short));
        assert!(!Condition::RootHasProgressiveVowelDrop.is_satisfied_by(&full));
    }

    #[test]
    fn test_lexeme_attributes_only_bind_bare_roots() {
        let graph = SuffixGraph::standard().unwrap();
        let state = graph.info(graph.state_id("VERB_ROOT").unwrap());
        let gel = root(
            "gel",
            Lexeme::new("gelmek", "gel", PrimaryPos::Verb, None)
                .with_attributes([LexemeAttribute::AoristI]),
        );
        let bare = MorphemeContainer::new(Arc::clone(&gel), state, "ir");
        let aorist_i = Condition::has_lexeme_attribute(LexemeAttribute::AoristI);
        let aorist_a = Condition::has_lexeme_attribute(LexemeAttribute::AoristA);
        assert!(aorist_i.is_satisfied_by(&bare));
        assert!(!aorist_a.is_satisfied_by(&bare));
        assert!(Condition::doesnt_have_lexeme_attribute(LexemeAttribute::AoristA)
            .is_satisfied_by(&bare));

        let plain = root("git", Lexeme::new("gitmek", "git", PrimaryPos::Verb, None));
        let bare = MorphemeContainer::new(plain, state, "");
        assert!(!Condition::doesnt_have_lexeme_attribute(LexemeAttribute::AoristA)
            .is_satisfied_by(&bare));

        let bare = MorphemeContainer::new(gel, state, "dir");
        let extended = extend(&graph, &bare, "Caus", "dIr", "dir", "VERB_ROOT");
        assert!(aorist_a.is_satisfied_by(&extended));
    }
}
