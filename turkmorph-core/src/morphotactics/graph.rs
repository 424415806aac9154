//! Morphotactic suffix graph
//!
//! Graph modules register states, suffixes and groups into a shared
//! [`SuffixGraphBuilder`]. Once every module is registered the builder is
//! frozen into an arena-indexed [`SuffixGraph`]; states and suffixes are then
//! referenced by integer handles only.

use super::condition::Condition;
use crate::error::{CoreError, Result};
use crate::lexicon::{LexemeAttribute, PrimaryPos, Root, SecondaryPos};
use crate::suffix::SuffixFormSequence;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handle of a state in a [`SuffixGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

/// Handle of a suffix in a [`SuffixGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuffixId(u32);

/// Handle of a suffix group in a [`SuffixGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u32);

impl StateId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl SuffixId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl GroupId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a morphotactic state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    /// Inflection continues in the same category
    Transfer,
    /// The next suffix starts a new inflection group
    Derivational,
    /// A word may end here
    Terminal,
}

/// The part of a state a transition needs to remember
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateInfo {
    /// State handle
    pub id: StateId,
    /// State kind
    pub kind: StateType,
    /// Category of the state
    pub primary_pos: PrimaryPos,
}

/// Outgoing edge of a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuffixEdge {
    /// Suffix labelling the edge
    pub suffix: SuffixId,
    /// Target state
    pub target: StateId,
}

/// A node of the morphotactic graph
#[derive(Debug, Clone)]
pub struct SuffixGraphState {
    /// Handle of this state
    pub id: StateId,
    /// Unique name
    pub name: String,
    /// State kind
    pub kind: StateType,
    /// Category of the state
    pub primary_pos: PrimaryPos,
    /// Outgoing edges in registration order
    pub out_edges: Vec<SuffixEdge>,
}

impl SuffixGraphState {
    /// Copyable summary of the state
    pub fn info(&self) -> StateInfo {
        StateInfo {
            id: self.id,
            kind: self.kind,
            primary_pos: self.primary_pos,
        }
    }
}

/// How a suffix behaves in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind {
    /// A real morpheme
    Regular,
    /// An invisible hop between states; never shown in formatted output
    Free,
    /// A morpheme with only an empty form, shown as "Zero"
    Zero,
}

/// A morpheme with one or more surface templates
#[derive(Debug, Clone)]
pub struct Suffix {
    /// Handle of this suffix
    pub id: SuffixId,
    /// Unique name
    pub name: String,
    /// Name used in formatted output
    pub pretty_name: String,
    /// Group; two suffixes of one group cannot share an inflection group
    pub group: Option<GroupId>,
    /// Whether the suffix may directly follow itself across a derivation
    pub allow_repetition: bool,
    /// Kind of the suffix
    pub kind: SuffixKind,
    /// Templates in registration order
    pub forms: Vec<Arc<SuffixForm>>,
}

/// A suffix group
#[derive(Debug, Clone)]
pub struct SuffixGroup {
    /// Unique name
    pub name: String,
    /// Members in registration order
    pub members: Vec<SuffixId>,
}

/// A template of a suffix together with its conditions.
///
/// A suffix may carry the same template twice under different conditions;
/// those are distinct forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuffixForm {
    /// Owning suffix
    pub suffix: SuffixId,
    /// Compiled template
    pub sequence: SuffixFormSequence,
    /// Must hold for the container before the form is applied
    pub precondition: Option<Condition>,
    /// Must hold once the next suffix is applied
    pub postcondition: Option<Condition>,
    /// Must hold once the next inflection group starts
    pub post_derivation_condition: Option<Condition>,
}

impl SuffixForm {
    /// Form without conditions, used for hand-built paths
    pub fn forced(suffix: SuffixId, template: &str) -> Self {
        Self {
            suffix,
            sequence: SuffixFormSequence::new(template),
            precondition: None,
            postcondition: None,
            post_derivation_condition: None,
        }
    }

    /// Template text
    pub fn template(&self) -> &str {
        self.sequence.as_str()
    }
}

/// Template plus optional conditions, consumed by [`SuffixGraphBuilder::form`]
#[derive(Debug, Clone)]
pub struct FormSpec {
    template: String,
    precondition: Option<Condition>,
    postcondition: Option<Condition>,
    post_derivation_condition: Option<Condition>,
}

impl FormSpec {
    /// Unconditional template
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            precondition: None,
            postcondition: None,
            post_derivation_condition: None,
        }
    }

    /// Set the precondition
    pub fn pre(mut self, condition: Condition) -> Self {
        self.precondition = Some(condition);
        self
    }

    /// Set the postcondition
    pub fn post(mut self, condition: Condition) -> Self {
        self.postcondition = Some(condition);
        self
    }

    /// Set the post-derivation condition
    pub fn post_derivation(mut self, condition: Condition) -> Self {
        self.post_derivation_condition = Some(condition);
        self
    }
}

impl From<&str> for FormSpec {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

/// Shorthand for [`FormSpec::new`]
pub fn form(template: &str) -> FormSpec {
    FormSpec::new(template)
}

/// Predicate selecting the roots a module sends to one of its states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootMatcher {
    /// Lexeme has the primary category
    Pos(PrimaryPos),
    /// Lexeme has the primary category and carries the attribute
    PosWithAttribute(PrimaryPos, LexemeAttribute),
    /// Lexeme has both categories
    PosWithSecondary(PrimaryPos, SecondaryPos),
    /// Lexeme has the primary category and the root reads exactly so
    PosWithSequence(PrimaryPos, String),
}

impl RootMatcher {
    /// Whether the root is selected
    pub fn matches(&self, root: &Root) -> bool {
        let lexeme = &root.lexeme;
        match self {
            RootMatcher::Pos(pos) => lexeme.primary_pos == *pos,
            RootMatcher::PosWithAttribute(pos, attr) => {
                lexeme.primary_pos == *pos && lexeme.has_attribute(*attr)
            }
            RootMatcher::PosWithSecondary(pos, secondary) => {
                lexeme.primary_pos == *pos && lexeme.secondary_pos == Some(*secondary)
            }
            RootMatcher::PosWithSequence(pos, sequence) => {
                lexeme.primary_pos == *pos && root.as_str() == sequence
            }
        }
    }
}

/// Entry-state selection of one module; the first matching rule wins
#[derive(Debug, Clone, Default)]
pub struct RootDispatch {
    rules: Vec<(RootMatcher, StateId)>,
}

impl RootDispatch {
    /// Empty dispatch
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    pub fn route(mut self, matcher: RootMatcher, state: StateId) -> Self {
        self.rules.push((matcher, state));
        self
    }

    /// Entry state for the root, if any rule matches
    pub fn resolve(&self, root: &Root) -> Option<StateId> {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.matches(root))
            .map(|(_, state)| *state)
    }

    /// Every state a rule can route to
    pub fn entry_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.rules.iter().map(|(_, state)| *state)
    }
}

/// A unit of grammar registered into the shared graph.
///
/// Modules are registered in order; a later module may reference anything an
/// earlier one registered but may not redefine it.
pub trait GraphModule: Send + Sync {
    /// Module name, used in logs
    fn name(&self) -> &'static str;

    /// Register states, suffixes and edges; return the entry-state rules
    fn register(&self, builder: &mut SuffixGraphBuilder) -> Result<RootDispatch>;
}

/// Mutable registries used while modules are being registered
#[derive(Debug, Default)]
pub struct SuffixGraphBuilder {
    states: Vec<SuffixGraphState>,
    suffixes: Vec<Suffix>,
    groups: Vec<SuffixGroup>,
    state_names: HashMap<String, StateId>,
    suffix_names: HashMap<String, SuffixId>,
    group_names: HashMap<String, GroupId>,
}

impl SuffixGraphBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state under a globally unique name
    pub fn register_state(
        &mut self,
        name: &str,
        kind: StateType,
        primary_pos: PrimaryPos,
    ) -> Result<StateId> {
        if self.state_names.contains_key(name) {
            return Err(CoreError::DuplicateState {
                name: name.to_string(),
            });
        }
        let id = StateId(self.states.len() as u32);
        self.states.push(SuffixGraphState {
            id,
            name: name.to_string(),
            kind,
            primary_pos,
            out_edges: Vec::new(),
        });
        self.state_names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Register a suffix group
    pub fn register_group(&mut self, name: &str) -> Result<GroupId> {
        if self.group_names.contains_key(name) {
            return Err(CoreError::DuplicateGroup {
                name: name.to_string(),
            });
        }
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(SuffixGroup {
            name: name.to_string(),
            members: Vec::new(),
        });
        self.group_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn push_suffix(
        &mut self,
        name: &str,
        pretty_name: &str,
        group: Option<GroupId>,
        allow_repetition: bool,
        kind: SuffixKind,
    ) -> Result<SuffixId> {
        if self.suffix_names.contains_key(name) {
            return Err(CoreError::DuplicateSuffix {
                name: name.to_string(),
            });
        }
        let id = SuffixId(self.suffixes.len() as u32);
        self.suffixes.push(Suffix {
            id,
            name: name.to_string(),
            pretty_name: pretty_name.to_string(),
            group,
            allow_repetition,
            kind,
            forms: Vec::new(),
        });
        self.suffix_names.insert(name.to_string(), id);
        if let Some(group) = group {
            self.groups[group.index()].members.push(id);
        }
        Ok(id)
    }

    /// Register an ungrouped suffix
    pub fn register_suffix(&mut self, name: &str, pretty_name: &str) -> Result<SuffixId> {
        self.push_suffix(name, pretty_name, None, false, SuffixKind::Regular)
    }

    /// Register a suffix belonging to `group`
    pub fn register_grouped_suffix(
        &mut self,
        name: &str,
        group: GroupId,
        pretty_name: &str,
    ) -> Result<SuffixId> {
        self.push_suffix(name, pretty_name, Some(group), false, SuffixKind::Regular)
    }

    /// Register a suffix that may follow itself across derivations
    pub fn register_repeatable_suffix(&mut self, name: &str, pretty_name: &str) -> Result<SuffixId> {
        self.push_suffix(name, pretty_name, None, true, SuffixKind::Regular)
    }

    /// Register a free transition with its empty form and wire it
    pub fn free_transition(&mut self, name: &str, from: &str, to: &str) -> Result<SuffixId> {
        let id = self.push_suffix(name, name, None, false, SuffixKind::Free)?;
        self.form(name, "")?;
        self.edge(from, name, to)?;
        Ok(id)
    }

    /// Register a free transition whose empty form is added later with a
    /// condition
    pub fn conditional_free_transition(&mut self, name: &str) -> Result<SuffixId> {
        self.push_suffix(name, name, None, false, SuffixKind::Free)
    }

    /// Register a zero transition with its empty form and wire it
    pub fn zero_transition(&mut self, name: &str, from: &str, to: &str) -> Result<SuffixId> {
        let id = self.push_suffix(name, "Zero", None, false, SuffixKind::Zero)?;
        self.form(name, "")?;
        self.edge(from, name, to)?;
        Ok(id)
    }

    /// Add the edge `from --suffix--> to`
    pub fn edge(&mut self, from: &str, suffix: &str, to: &str) -> Result<()> {
        let from = self.state_id(from)?;
        let suffix = self.suffix_id(suffix)?;
        let target = self.state_id(to)?;
        self.states[from.index()]
            .out_edges
            .push(SuffixEdge { suffix, target });
        Ok(())
    }

    /// Add the edge and then the forms of the suffix
    pub fn connect(
        &mut self,
        from: &str,
        suffix: &str,
        to: &str,
        forms: impl IntoIterator<Item = FormSpec>,
    ) -> Result<()> {
        self.edge(from, suffix, to)?;
        for spec in forms {
            self.form(suffix, spec)?;
        }
        Ok(())
    }

    /// Add a form to a suffix
    pub fn form(&mut self, suffix: &str, spec: impl Into<FormSpec>) -> Result<()> {
        let id = self.suffix_id(suffix)?;
        let spec = spec.into();
        let form = SuffixForm {
            suffix: id,
            sequence: SuffixFormSequence::new(spec.template),
            precondition: spec.precondition,
            postcondition: spec.postcondition,
            post_derivation_condition: spec.post_derivation_condition,
        };
        self.suffixes[id.index()].forms.push(Arc::new(form));
        Ok(())
    }

    /// Handle of a registered state
    pub fn state_id(&self, name: &str) -> Result<StateId> {
        self.state_names
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownState {
                name: name.to_string(),
            })
    }

    /// Handle of a registered suffix
    pub fn suffix_id(&self, name: &str) -> Result<SuffixId> {
        self.suffix_names
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownSuffix {
                name: name.to_string(),
            })
    }

    /// Handle of a registered group
    pub fn group_id(&self, name: &str) -> Result<GroupId> {
        self.group_names
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownGroup {
                name: name.to_string(),
            })
    }

    /// `suffix` occurs in the current inflection group
    pub fn comes_after(&self, suffix: &str) -> Result<Condition> {
        Ok(Condition::comes_after(self.suffix_id(suffix)?))
    }

    /// `suffix` with exactly `template` occurs in the current inflection group
    pub fn comes_after_form(&self, suffix: &str, template: &str) -> Result<Condition> {
        Ok(Condition::comes_after_form(self.suffix_id(suffix)?, template))
    }

    /// The current inflection group was started by `suffix`
    pub fn comes_after_derivation(&self, suffix: &str) -> Result<Condition> {
        Ok(Condition::comes_after_derivation(self.suffix_id(suffix)?))
    }

    /// The current inflection group was started by `suffix` with `template`
    pub fn comes_after_derivation_form(&self, suffix: &str, template: &str) -> Result<Condition> {
        Ok(Condition::comes_after_derivation_form(
            self.suffix_id(suffix)?,
            template,
        ))
    }

    /// The last derivation with a non-empty template was `suffix`
    pub fn comes_after_last_non_blank_derivation(&self, suffix: &str) -> Result<Condition> {
        Ok(Condition::comes_after_last_non_blank_derivation(
            self.suffix_id(suffix)?,
        ))
    }

    /// Postcondition spelling of [`Self::comes_after`]
    pub fn followed_by(&self, suffix: &str) -> Result<Condition> {
        self.comes_after(suffix)
    }

    /// Postcondition spelling of [`Self::comes_after_form`]
    pub fn followed_by_form(&self, suffix: &str, template: &str) -> Result<Condition> {
        self.comes_after_form(suffix, template)
    }

    /// Postcondition spelling of [`Self::comes_after_derivation`]
    pub fn followed_by_derivation(&self, suffix: &str) -> Result<Condition> {
        self.comes_after_derivation(suffix)
    }

    /// Postcondition spelling of [`Self::comes_after_derivation_form`]
    pub fn followed_by_derivation_form(&self, suffix: &str, template: &str) -> Result<Condition> {
        self.comes_after_derivation_form(suffix, template)
    }

    /// Some member of the group occurs in the current inflection group
    pub fn followed_by_one_from_group(&self, group: &str) -> Result<Condition> {
        let group = self.group_id(group)?;
        Ok(Condition::any(
            self.groups[group.index()]
                .members
                .iter()
                .map(|suffix| Condition::comes_after(*suffix)),
        ))
    }

    /// Freeze the registries
    fn finish(self, dispatch: Vec<(&'static str, RootDispatch)>) -> SuffixGraph {
        let mut root_states: Vec<StateId> = Vec::new();
        for (_, module) in &dispatch {
            for state in module.entry_states() {
                if !root_states.contains(&state) {
                    root_states.push(state);
                }
            }
        }
        SuffixGraph {
            states: self.states,
            suffixes: self.suffixes,
            groups: self.groups,
            state_names: self.state_names,
            suffix_names: self.suffix_names,
            dispatch,
            root_states,
        }
    }
}

/// The immutable morphotactic graph
pub struct SuffixGraph {
    states: Vec<SuffixGraphState>,
    suffixes: Vec<Suffix>,
    groups: Vec<SuffixGroup>,
    state_names: HashMap<String, StateId>,
    suffix_names: HashMap<String, SuffixId>,
    dispatch: Vec<(&'static str, RootDispatch)>,
    root_states: Vec<StateId>,
}

impl fmt::Debug for SuffixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixGraph")
            .field("states", &self.states.len())
            .field("suffixes", &self.suffixes.len())
            .field("modules", &self.module_names())
            .finish()
    }
}

impl SuffixGraph {
    /// Register the modules in order and freeze the result
    pub fn new(modules: &[&dyn GraphModule]) -> Result<Self> {
        let mut builder = SuffixGraphBuilder::new();
        let mut dispatch = Vec::with_capacity(modules.len());
        for module in modules {
            let routes = module.register(&mut builder)?;
            tracing::debug!(
                module = module.name(),
                states = builder.states.len(),
                suffixes = builder.suffixes.len(),
                "registered graph module"
            );
            dispatch.push((module.name(), routes));
        }
        Ok(builder.finish(dispatch))
    }

    /// Basic grammar decorated by numerals, proper nouns and the copula
    pub fn standard() -> Result<Self> {
        Self::new(&[
            &super::BasicModule,
            &super::NumeralModule,
            &super::ProperNounModule,
            &super::CopulaModule,
        ])
    }

    /// Names of the registered modules, innermost first
    pub fn module_names(&self) -> Vec<&'static str> {
        self.dispatch.iter().map(|(name, _)| *name).collect()
    }

    /// Entry state of a root. The outermost module is asked first.
    pub fn default_state_for_root(&self, root: &Root) -> Option<StateId> {
        self.dispatch
            .iter()
            .rev()
            .find_map(|(_, routes)| routes.resolve(root))
    }

    /// States a root can enter the graph at
    pub fn root_states(&self) -> &[StateId] {
        &self.root_states
    }

    /// State by handle
    pub fn state(&self, id: StateId) -> &SuffixGraphState {
        &self.states[id.index()]
    }

    /// Copyable summary of a state
    pub fn info(&self, id: StateId) -> StateInfo {
        self.state(id).info()
    }

    /// Handle of a state by name
    pub fn find_state(&self, name: &str) -> Option<StateId> {
        self.state_names.get(name).copied()
    }

    /// Handle of a state by name, failing for unknown names
    pub fn state_id(&self, name: &str) -> Result<StateId> {
        self.find_state(name).ok_or_else(|| CoreError::UnknownState {
            name: name.to_string(),
        })
    }

    /// Suffix by handle
    pub fn suffix(&self, id: SuffixId) -> &Suffix {
        &self.suffixes[id.index()]
    }

    /// Handle of a suffix by name
    pub fn find_suffix(&self, name: &str) -> Option<SuffixId> {
        self.suffix_names.get(name).copied()
    }

    /// Handle of a suffix by name, failing for unknown names
    pub fn suffix_id(&self, name: &str) -> Result<SuffixId> {
        self.find_suffix(name).ok_or_else(|| CoreError::UnknownSuffix {
            name: name.to_string(),
        })
    }

    /// Registered form of a suffix with exactly `template`
    pub fn suffix_form(&self, suffix: &str, template: &str) -> Option<Arc<SuffixForm>> {
        let id = self.find_suffix(suffix)?;
        self.suffix(id)
            .forms
            .iter()
            .find(|form| form.template() == template)
            .cloned()
    }

    /// Group by handle
    pub fn group(&self, id: GroupId) -> &SuffixGroup {
        &self.groups[id.index()]
    }

    /// All states
    pub fn states(&self) -> &[SuffixGraphState] {
        &self.states
    }

    /// All suffixes
    pub fn suffixes(&self) -> &[Suffix] {
        &self.suffixes
    }

    /// Every form of every suffix
    pub fn forms(&self) -> impl Iterator<Item = &Arc<SuffixForm>> {
        self.suffixes.iter().flat_map(|suffix| suffix.forms.iter())
    }

    /// Target of the edge labelled `suffix` leaving `from`
    pub fn target_of(&self, from: StateId, suffix: SuffixId) -> Option<StateId> {
        self.state(from)
            .out_edges
            .iter()
            .find(|edge| edge.suffix == suffix)
            .map(|edge| edge.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexeme;
    use crate::phonetics::{PhoneticAttributes, PhoneticExpectations};

    struct Tiny;

    impl GraphModule for Tiny {
        fn name(&self) -> &'static str {
            "tiny"
        }

        fn register(&self, b: &mut SuffixGraphBuilder) -> Result<RootDispatch> {
            let root = b.register_state("ROOT", StateType::Transfer, PrimaryPos::Noun)?;
            b.register_state("END", StateType::Terminal, PrimaryPos::Noun)?;
            b.register_suffix("Pl", "A3pl")?;
            b.edge("ROOT", "Pl", "END")?;
            b.form("Pl", "lAr")?;
            Ok(RootDispatch::new().route(RootMatcher::Pos(PrimaryPos::Noun), root))
        }
    }

    struct Clashing;

    impl GraphModule for Clashing {
        fn name(&self) -> &'static str {
            "clashing"
        }

        fn register(&self, b: &mut SuffixGraphBuilder) -> Result<RootDispatch> {
            b.register_state("ROOT", StateType::Transfer, PrimaryPos::Verb)?;
            Ok(RootDispatch::new())
        }
    }

    fn root(surface: &str, pos: PrimaryPos) -> Root {
        Root::new(
            surface,
            Arc::new(Lexeme::new(surface, surface, pos, None)),
            PhoneticAttributes::empty(),
            PhoneticExpectations::empty(),
        )
    }

    #[test]
    fn test_build_and_lookup() {
        let graph = SuffixGraph::new(&[&Tiny]).unwrap();
        let root_state = graph.state_id("ROOT").unwrap();
        let pl = graph.suffix_id("Pl").unwrap();
        assert_eq!(graph.target_of(root_state, pl), graph.find_state("END"));
        assert!(graph.suffix_form("Pl", "lAr").is_some());
        assert!(graph.suffix_form("Pl", "").is_none());
        assert_eq!(graph.root_states(), &[root_state]);
        assert_eq!(
            graph.default_state_for_root(&root("ev", PrimaryPos::Noun)),
            Some(root_state)
        );
        assert_eq!(graph.default_state_for_root(&root("gel", PrimaryPos::Verb)), None);
    }

    #[test]
    fn test_duplicate_state_is_rejected() {
        let err = SuffixGraph::new(&[&Tiny, &Clashing]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateState { name } if name == "ROOT"));
    }

    #[test]
    fn test_unknown_references_are_rejected() {
        let mut b = SuffixGraphBuilder::new();
        b.register_state("A", StateType::Transfer, PrimaryPos::Noun).unwrap();
        assert!(matches!(
            b.edge("A", "Missing", "A"),
            Err(CoreError::UnknownSuffix { .. })
        ));
        assert!(matches!(b.comes_after("Missing"), Err(CoreError::UnknownSuffix { .. })));
        assert!(matches!(
            b.followed_by_one_from_group("Missing"),
            Err(CoreError::UnknownGroup { .. })
        ));
    }

    #[test]
    fn test_transition_helpers_add_empty_forms() {
        let mut b = SuffixGraphBuilder::new();
        b.register_state("A", StateType::Transfer, PrimaryPos::Adjective).unwrap();
        b.register_state("B", StateType::Transfer, PrimaryPos::Noun).unwrap();
        b.zero_transition("Adj_to_Noun", "A", "B").unwrap();
        b.free_transition("Free", "B", "A").unwrap();
        let graph = b.finish(Vec::new());
        let zero = graph.suffix(graph.suffix_id("Adj_to_Noun").unwrap());
        assert_eq!(zero.kind, SuffixKind::Zero);
        assert_eq!(zero.pretty_name, "Zero");
        assert_eq!(zero.forms.len(), 1);
        assert!(zero.forms[0].sequence.is_blank());
        let free = graph.suffix(graph.suffix_id("Free").unwrap());
        assert_eq!(free.kind, SuffixKind::Free);
    }
}
