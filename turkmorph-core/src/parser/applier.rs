//! Extending a path by one suffix form

use crate::morpheme::{MorphemeContainer, SuffixFormApplication};
use crate::morphotactics::{StateInfo, StateType, SuffixForm, SuffixGraph, SuffixId};
use crate::phonetics::sequence::{char_len, char_slice};
use crate::phonetics::{PhoneticExpectations, PhoneticsEngine};
use std::sync::Arc;

/// Decides whether a suffix form may extend a path and builds the extension
#[derive(Debug, Clone)]
pub struct SuffixApplier {
    graph: Arc<SuffixGraph>,
    engine: PhoneticsEngine,
}

impl SuffixApplier {
    /// Create an applier over a graph and a phonetics engine
    pub fn new(graph: Arc<SuffixGraph>, engine: PhoneticsEngine) -> Self {
        Self { graph, engine }
    }

    /// The morphotactic graph
    pub fn graph(&self) -> &Arc<SuffixGraph> {
        &self.graph
    }

    /// The phonetics engine
    pub fn engine(&self) -> &PhoneticsEngine {
        &self.engine
    }

    /// One suffix per group within an inflection group, and no suffix
    /// directly repeating the derivation it follows unless it allows it
    pub fn transition_allowed_for_suffix(
        &self,
        container: &MorphemeContainer,
        suffix: SuffixId,
    ) -> bool {
        let suffix = self.graph.suffix(suffix);
        if suffix
            .group
            .is_some_and(|group| container.groups_since_derivation().contains(&group))
        {
            return false;
        }
        if !suffix.allow_repetition
            && container
                .last_derivation_transition()
                .is_some_and(|t| t.application.suffix() == suffix.id)
        {
            return false;
        }
        true
    }

    /// Precondition, pending expectations and phonetic applicability
    pub fn transition_allowed_for_suffix_form(
        &self,
        container: &MorphemeContainer,
        form: &SuffixForm,
    ) -> bool {
        if form
            .precondition
            .as_ref()
            .is_some_and(|condition| !condition.is_satisfied_by(container))
        {
            return false;
        }
        if !form.sequence.is_blank()
            && !PhoneticsEngine::expectations_satisfied(
                container.phonetic_expectations(),
                &form.sequence,
            )
        {
            return false;
        }
        self.engine
            .is_suffix_form_applicable(container.phonetic_attributes(), &form.sequence)
    }

    /// Extend with an application taken from the compiled form graph.
    ///
    /// `input` is the surface the path must keep matching; `expectations`
    /// replace the pending ones when the edge carries any.
    pub fn try_suffix_form_application(
        &self,
        container: &MorphemeContainer,
        application: &SuffixFormApplication,
        target: StateInfo,
        expectations: PhoneticExpectations,
        input: &str,
    ) -> Option<MorphemeContainer> {
        if !self.transition_allowed_for_suffix(container, application.suffix())
            || !self.transition_allowed_for_suffix_form(container, &application.form)
        {
            return None;
        }

        let applied = format!("{}{}", container.surface_so_far(), application.actual);
        if !PhoneticsEngine::application_matches(input, &applied, false) {
            return None;
        }

        let mut extended = container.clone();
        extended.add_transition_with(&self.graph, application.clone(), target);
        let mut extended = self.check_postconditions(container, extended)?;
        if !expectations.is_empty() {
            extended.overwrite_expectations(expectations);
        }
        Some(extended)
    }

    /// Extend by realizing a form against the path's own surface, voicing the
    /// surface's last letter when the form calls for it
    pub fn try_suffix_form(
        &self,
        container: &MorphemeContainer,
        form: Arc<SuffixForm>,
        target: StateInfo,
        input: &str,
    ) -> Option<MorphemeContainer> {
        if !self.transition_allowed_for_suffix_form(container, &form) {
            return None;
        }

        let (surface, fitting) = self.engine.apply(
            container.surface_so_far(),
            container.phonetic_attributes(),
            &form.sequence,
            container.lexeme_attributes(),
        )?;
        let applied = format!("{surface}{fitting}");
        let voicing_allowed = self.graph.state(target.id).name != "VERB_ROOT";
        if !PhoneticsEngine::application_matches(input, &applied, voicing_allowed) {
            return None;
        }

        let actual = char_slice(
            input,
            container.surface_so_far().len(),
            char_len(&applied),
        );
        let application = SuffixFormApplication::new(form, actual, fitting);
        let mut extended = container.clone();
        extended.add_transition_with(&self.graph, application, target);
        self.check_postconditions(container, extended)
    }

    /// The previous form's postcondition and, when the extension closes an
    /// inflection group, the post-derivation conditions of that group
    fn check_postconditions(
        &self,
        original: &MorphemeContainer,
        extended: MorphemeContainer,
    ) -> Option<MorphemeContainer> {
        let Some(last) = original.last_transition() else {
            return Some(extended);
        };
        if last
            .application
            .form
            .postcondition
            .as_ref()
            .is_some_and(|condition| !condition.is_satisfied_by(&extended))
        {
            return None;
        }
        if original.last_state().kind == StateType::Derivational {
            let violated = original.transitions_from_derivation().iter().any(|t| {
                t.application
                    .form
                    .post_derivation_condition
                    .as_ref()
                    .is_some_and(|condition| !condition.is_satisfied_by(&extended))
            });
            if violated {
                return None;
            }
        }
        Some(extended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexeme, LexemeAttribute, PrimaryPos, Root};
    use crate::phonetics::calculate_phonetic_attributes;
    use crate::suffix::PlainApplier;

    fn applier() -> SuffixApplier {
        let graph = Arc::new(SuffixGraph::standard().unwrap());
        SuffixApplier::new(graph, PhoneticsEngine::new(Arc::new(PlainApplier)))
    }

    fn seed(applier: &SuffixApplier, surface: &str, lexeme: Lexeme, state: &str) -> MorphemeContainer {
        let attrs = calculate_phonetic_attributes(surface, lexeme.attributes);
        let root = Arc::new(Root::new(
            surface,
            Arc::new(lexeme),
            attrs,
            PhoneticExpectations::empty(),
        ));
        let state = applier.graph().info(applier.graph().state_id(state).unwrap());
        MorphemeContainer::new(root, state, "")
    }

    fn step(
        applier: &SuffixApplier,
        container: &MorphemeContainer,
        suffix: &str,
        template: &str,
        target: &str,
        input: &str,
    ) -> Option<MorphemeContainer> {
        let graph = applier.graph();
        let form = graph.suffix_form(suffix, template).unwrap();
        let target = graph.info(graph.state_id(target).unwrap());
        applier.try_suffix_form(container, form, target, input)
    }

    #[test]
    fn test_form_realized_against_surface() {
        let applier = applier();
        let ev = seed(
            &applier,
            "ev",
            Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
            "NOUN_ROOT",
        );
        let agr = step(&applier, &ev, "A3Pl_Noun", "lAr", "NOUN_WITH_AGREEMENT", "evler").unwrap();
        let last = agr.last_transition().unwrap();
        assert_eq!(last.application.actual, "ler");
        assert_eq!(agr.surface_so_far().as_str(), "evler");

        assert!(step(&applier, &ev, "A3Pl_Noun", "lAr", "NOUN_WITH_AGREEMENT", "evlar").is_none());
    }

    #[test]
    fn test_one_suffix_per_group() {
        let applier = applier();
        let ev = seed(
            &applier,
            "ev",
            Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
            "NOUN_ROOT",
        );
        let agr = step(&applier, &ev, "A3Sg_Noun", "", "NOUN_WITH_AGREEMENT", "ev").unwrap();
        let a3pl = applier.graph().suffix_id("A3Pl_Noun").unwrap();
        let pnon = applier.graph().suffix_id("Pnon_Noun").unwrap();
        assert!(!applier.transition_allowed_for_suffix(&agr, a3pl));
        assert!(applier.transition_allowed_for_suffix(&agr, pnon));
    }

    #[test]
    fn test_voiced_surface_matches_input() {
        let applier = applier();
        let lexeme = Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
            .with_attributes([LexemeAttribute::Voicing]);
        let kitap = seed(&applier, "kitap", lexeme, "NOUN_ROOT");
        let agr = step(&applier, &kitap, "A3Sg_Noun", "", "NOUN_WITH_AGREEMENT", "kitabı").unwrap();
        let poss = step(&applier, &agr, "P3Sg_Noun", "+sI", "NOUN_WITH_POSSESSION", "kitabı").unwrap();
        assert_eq!(poss.last_transition().unwrap().application.actual, "ı");
        assert_eq!(poss.surface_so_far().as_str(), "kitapı");
        assert!(poss.lexeme_attributes().is_empty());
    }
}
