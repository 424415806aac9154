//! Transitions a freshly seeded path must take before the search starts

use super::applier::SuffixApplier;
use crate::error::{CoreError, Result};
use crate::lexicon::PrimaryPos;
use crate::morpheme::MorphemeContainer;
use crate::morphotactics::{Condition, StateId, StateInfo, SuffixForm};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Step {
    form: Arc<SuffixForm>,
    target: StateInfo,
}

#[derive(Debug, Clone)]
struct Rule {
    condition: Condition,
    source: StateId,
    steps: Vec<Step>,
}

/// Forces roots that only exist before a specific suffix chain through it.
///
/// A progressive-vowel-drop stem like "başl" (başlamak) is only valid in
/// front of the progressive, so it is moved through Pos + Prog(`Iyor`)
/// immediately.
#[derive(Debug, Clone)]
pub struct MandatoryTransitionApplier {
    applier: SuffixApplier,
    rules: Vec<Rule>,
}

impl MandatoryTransitionApplier {
    /// Resolve the rules against the applier's graph
    pub fn new(applier: SuffixApplier) -> Result<Self> {
        let graph = Arc::clone(applier.graph());
        let step = |suffix: &str, template: &str, target: &str| -> Result<Step> {
            let form = graph
                .suffix_form(suffix, template)
                .ok_or_else(|| CoreError::UnknownSuffix {
                    name: format!("{suffix}({template})"),
                })?;
            Ok(Step {
                form,
                target: graph.info(graph.state_id(target)?),
            })
        };

        let progressive_vowel_drop = Rule {
            condition: Condition::RootHasPrimaryPos(PrimaryPos::Verb)
                & Condition::RootHasProgressiveVowelDrop,
            source: graph.state_id("VERB_ROOT")?,
            steps: vec![
                step("Pos", "", "VERB_WITH_POLARITY")?,
                step("Prog", "Iyor", "VERB_WITH_TENSE")?,
            ],
        };

        Ok(Self {
            applier,
            rules: vec![progressive_vowel_drop],
        })
    }

    /// Apply the matching rule to every container.
    ///
    /// Containers no rule matches pass through unchanged; a container a rule
    /// matches but whose surface does not carry the forced forms is dropped.
    ///
    /// # Panics
    ///
    /// When a matching rule's suffix is not allowed on the path, which means
    /// the rule contradicts the graph.
    pub fn apply(
        &self,
        containers: Vec<MorphemeContainer>,
        input: &str,
    ) -> Vec<MorphemeContainer> {
        containers
            .into_iter()
            .filter_map(|container| self.apply_one(container, input))
            .collect()
    }

    fn apply_one(&self, container: MorphemeContainer, input: &str) -> Option<MorphemeContainer> {
        let Some(rule) = self.rules.iter().find(|rule| {
            container.last_state().id == rule.source && rule.condition.is_satisfied_by(&container)
        }) else {
            return Some(container);
        };

        let mut current = container;
        for step in &rule.steps {
            assert!(
                self.applier
                    .transition_allowed_for_suffix(&current, step.form.suffix),
                "mandatory suffix {} is not allowed after {:?}",
                self.applier.graph().suffix(step.form.suffix).name,
                current
            );
            current = self.applier.try_suffix_form(
                &current,
                Arc::clone(&step.form),
                step.target,
                input,
            )?;
        }
        Some(current)
    }
}
