//! Parse paths
//!
//! A [`MorphemeContainer`] is one hypothesis: a root plus the suffix
//! transitions applied so far. Extending a container never touches the
//! original. The transition history is a shared persistent list, so a clone
//! costs a handful of reference-count bumps plus the short per-inflection-group
//! bookkeeping.

use crate::lexicon::{LexemeAttribute, LexemeAttributes, PrimaryPos, Root};
use crate::morphotactics::{GroupId, StateInfo, StateType, SuffixForm, SuffixGraph, SuffixId};
use crate::phonetics::sequence::{char_len, char_tail, is_alphanumeric, is_blank};
use crate::phonetics::{
    calculate_phonetic_attributes, PhoneticAttributes, PhoneticExpectations, TurkishSequence,
};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A suffix form as realized at one position of a surface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuffixFormApplication {
    /// The applied form
    pub form: Arc<SuffixForm>,
    /// Text actually consumed from the surface; may carry a voiced last letter
    pub actual: String,
    /// Text the form realizes to before voicing
    pub fitting: String,
}

impl SuffixFormApplication {
    /// Create an application
    pub fn new(form: Arc<SuffixForm>, actual: impl Into<String>, fitting: impl Into<String>) -> Self {
        Self {
            form,
            actual: actual.into(),
            fitting: fitting.into(),
        }
    }

    /// Suffix of the applied form
    pub fn suffix(&self) -> SuffixId {
        self.form.suffix
    }
}

/// One applied edge of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuffixTransition {
    /// State the edge leaves
    pub source: StateInfo,
    /// The realized form
    pub application: SuffixFormApplication,
    /// State the edge enters
    pub target: StateInfo,
}

impl SuffixTransition {
    /// A transition starts a new inflection group when it leaves a
    /// derivational state
    pub fn is_derivational(&self) -> bool {
        self.source.kind == StateType::Derivational
    }
}

#[derive(Debug)]
struct TransitionLink {
    transition: Arc<SuffixTransition>,
    previous: Option<Arc<TransitionLink>>,
}

type History = SmallVec<[Arc<SuffixTransition>; 4]>;

/// A parse path in progress, or a finished parse
#[derive(Clone)]
pub struct MorphemeContainer {
    root: Arc<Root>,
    root_state: StateInfo,
    surface_so_far: TurkishSequence,
    remaining: String,
    last_link: Option<Arc<TransitionLink>>,
    transition_count: usize,
    last_state: StateInfo,
    phonetic_expectations: PhoneticExpectations,
    lexeme_attributes: LexemeAttributes,
    phonetic_attributes: PhoneticAttributes,
    last_non_blank: Option<Arc<SuffixTransition>>,
    last_derivation: Option<Arc<SuffixTransition>>,
    last_non_blank_derivation: Option<Arc<SuffixTransition>>,
    since_derivation: History,
    from_derivation: History,
    suffixes_since_derivation: SmallVec<[SuffixId; 4]>,
    groups_since_derivation: SmallVec<[GroupId; 4]>,
}

impl MorphemeContainer {
    /// Seed a path at the root's entry state
    pub fn new(root: Arc<Root>, root_state: StateInfo, remaining: impl Into<String>) -> Self {
        Self {
            surface_so_far: root.sequence.clone(),
            phonetic_expectations: root.phonetic_expectations,
            lexeme_attributes: root.lexeme.attributes,
            phonetic_attributes: root.phonetic_attributes,
            root,
            root_state,
            remaining: remaining.into(),
            last_link: None,
            transition_count: 0,
            last_state: root_state,
            last_non_blank: None,
            last_derivation: None,
            last_non_blank_derivation: None,
            since_derivation: History::new(),
            from_derivation: History::new(),
            suffixes_since_derivation: SmallVec::new(),
            groups_since_derivation: SmallVec::new(),
        }
    }

    /// Append a transition out of the current state.
    ///
    /// `group` is the group of the applied suffix, needed for the
    /// one-member-per-group rule.
    pub fn add_transition_in_group(
        &mut self,
        application: SuffixFormApplication,
        target: StateInfo,
        group: Option<GroupId>,
    ) {
        let transition = Arc::new(SuffixTransition {
            source: self.last_state,
            application,
            target,
        });
        let actual = transition.application.actual.as_str();
        let template_is_blank = transition.application.form.sequence.is_blank();

        self.surface_so_far = self.surface_so_far.append(actual);
        self.remaining = if is_blank(&self.remaining) {
            String::new()
        } else {
            char_tail(&self.remaining, char_len(actual)).to_string()
        };
        if !template_is_blank {
            self.phonetic_expectations = PhoneticExpectations::empty();
        }
        self.last_state = target;

        if transition.is_derivational() {
            self.last_derivation = Some(Arc::clone(&transition));
            self.since_derivation.clear();
            self.from_derivation.clear();
            self.from_derivation.push(Arc::clone(&transition));
            self.suffixes_since_derivation.clear();
            self.groups_since_derivation.clear();
            if !template_is_blank {
                self.last_non_blank_derivation = Some(Arc::clone(&transition));
            }
        } else {
            self.since_derivation.push(Arc::clone(&transition));
            self.from_derivation.push(Arc::clone(&transition));
            let suffix = transition.application.suffix();
            if !self.suffixes_since_derivation.contains(&suffix) {
                self.suffixes_since_derivation.push(suffix);
            }
            if let Some(group) = group {
                if !self.groups_since_derivation.contains(&group) {
                    self.groups_since_derivation.push(group);
                }
            }
        }

        if !template_is_blank {
            self.last_non_blank = Some(Arc::clone(&transition));
        }

        self.last_link = Some(Arc::new(TransitionLink {
            transition,
            previous: self.last_link.take(),
        }));
        self.transition_count += 1;

        self.lexeme_attributes = self.find_lexeme_attributes();
        self.phonetic_attributes = self.find_phonetic_attributes();
    }

    /// Append a transition, looking the suffix group up in the graph
    pub fn add_transition_with(
        &mut self,
        graph: &SuffixGraph,
        application: SuffixFormApplication,
        target: StateInfo,
    ) {
        let group = graph.suffix(application.suffix()).group;
        self.add_transition_in_group(application, target, group);
    }

    /// Append a transition of an ungrouped suffix
    pub fn add_transition(&mut self, application: SuffixFormApplication, target: StateInfo) {
        self.add_transition_in_group(application, target, None);
    }

    // Suffixes after a visible morpheme no longer see the root's tags. A verb
    // that just derived, or just took an empty suffix, keeps its last letter
    // as is (yürütemeyecekmişim, not yürüdemeyecekmişim).
    fn find_lexeme_attributes(&self) -> LexemeAttributes {
        if self.last_non_blank.is_none() {
            return self.root.lexeme.attributes;
        }
        if self.last_state.primary_pos != PrimaryPos::Verb {
            return LexemeAttributes::empty();
        }
        let last_is_blank = self
            .last_transition()
            .map_or(true, |t| is_blank(&t.application.actual));
        if self.last_state.kind == StateType::Derivational || last_is_blank {
            LexemeAttributes::from([LexemeAttribute::NoVoicing])
        } else {
            LexemeAttributes::empty()
        }
    }

    fn find_phonetic_attributes(&self) -> PhoneticAttributes {
        let suffixes = char_tail(self.surface_so_far.as_str(), self.root.sequence.len());
        if is_blank(suffixes) || !is_alphanumeric(suffixes) {
            self.root.phonetic_attributes
        } else {
            calculate_phonetic_attributes(self.surface_so_far.as_str(), self.lexeme_attributes)
        }
    }

    /// Replace the remaining surface
    pub fn with_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.remaining = remaining.into();
        self
    }

    /// Replace the pending phonetic expectations
    pub fn overwrite_expectations(&mut self, expectations: PhoneticExpectations) {
        self.phonetic_expectations = expectations;
    }

    /// The root
    pub fn root(&self) -> &Arc<Root> {
        &self.root
    }

    /// Entry state of the root
    pub fn root_state(&self) -> StateInfo {
        self.root_state
    }

    /// State the path currently sits in
    pub fn last_state(&self) -> StateInfo {
        self.last_state
    }

    /// Root plus every consumed suffix
    pub fn surface_so_far(&self) -> &TurkishSequence {
        &self.surface_so_far
    }

    /// Input not consumed yet
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// Consumed plus unconsumed text
    pub fn whole_surface(&self) -> String {
        format!("{}{}", self.surface_so_far, self.remaining)
    }

    /// Expectations the next non-blank suffix must meet
    pub fn phonetic_expectations(&self) -> PhoneticExpectations {
        self.phonetic_expectations
    }

    /// Lexeme tags still in effect
    pub fn lexeme_attributes(&self) -> LexemeAttributes {
        self.lexeme_attributes
    }

    /// Phonetic attributes of the surface so far
    pub fn phonetic_attributes(&self) -> PhoneticAttributes {
        self.phonetic_attributes
    }

    /// Whether any suffix has been applied
    pub fn has_transitions(&self) -> bool {
        self.transition_count > 0
    }

    /// Number of applied transitions
    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Most recent transition
    pub fn last_transition(&self) -> Option<&SuffixTransition> {
        self.last_link.as_deref().map(|link| link.transition.as_ref())
    }

    /// Applied transitions, oldest first
    pub fn transitions(&self) -> impl DoubleEndedIterator<Item = &SuffixTransition> + '_ {
        let mut newest_first = Vec::with_capacity(self.transition_count);
        let mut link = self.last_link.as_deref();
        while let Some(current) = link {
            newest_first.push(current.transition.as_ref());
            link = current.previous.as_deref();
        }
        newest_first.into_iter().rev()
    }

    /// Most recent derivational transition
    pub fn last_derivation_transition(&self) -> Option<&SuffixTransition> {
        self.last_derivation.as_deref()
    }

    /// Most recent derivational transition with a non-empty template
    pub fn last_non_blank_derivation(&self) -> Option<&SuffixTransition> {
        self.last_non_blank_derivation.as_deref()
    }

    /// Transitions after the last derivation
    pub fn transitions_since_derivation(&self) -> &[Arc<SuffixTransition>] {
        &self.since_derivation
    }

    /// The last derivation followed by the transitions after it
    pub fn transitions_from_derivation(&self) -> &[Arc<SuffixTransition>] {
        &self.from_derivation
    }

    /// Suffixes applied after the last derivation
    pub fn suffixes_since_derivation(&self) -> &[SuffixId] {
        &self.suffixes_since_derivation
    }

    /// Groups of the suffixes applied after the last derivation
    pub fn groups_since_derivation(&self) -> &[GroupId] {
        &self.groups_since_derivation
    }

    /// Whether the path is a complete parse
    pub fn is_terminal(&self) -> bool {
        self.last_state.kind == StateType::Terminal && is_blank(&self.remaining)
    }
}

impl fmt::Debug for MorphemeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let forms: Vec<(&str, &str)> = self
            .transitions()
            .map(|t| (t.application.form.template(), t.application.actual.as_str()))
            .collect();
        f.debug_struct("MorphemeContainer")
            .field("root", &self.root.as_str())
            .field("lemma", &self.root.lexeme.lemma)
            .field("surface_so_far", &self.surface_so_far.as_str())
            .field("remaining", &self.remaining)
            .field("transitions", &forms)
            .finish()
    }
}
