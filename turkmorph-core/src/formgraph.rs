//! Suffix form graph
//!
//! The morphotactic graph says which suffix may follow which; this module
//! compiles it against the phonetic model into a finite automaton whose
//! nodes are (state, phonetic attribute set) pairs and whose edges carry the
//! exact suffix string realized in that context. The parser only ever walks
//! this compiled graph, so applicability and realization are decided once.

use crate::morpheme::SuffixFormApplication;
use crate::morphotactics::{StateId, StateType, SuffixForm, SuffixGraph};
use crate::phonetics::{
    alphabet, append_str, PhoneticAttributes, PhoneticExpectation, PhoneticExpectations,
};
use crate::phonetics::sequence::is_blank;
use crate::suffix::SuffixFormApplier;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Identity of a compiled node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    /// Morphotactic state
    pub state: StateId,
    /// Phonetic attributes of the surface reaching the state
    pub attrs: PhoneticAttributes,
}

impl NodeKey {
    /// Create a key
    pub fn new(state: StateId, attrs: PhoneticAttributes) -> Self {
        Self { state, attrs }
    }
}

/// A concrete suffix application between two compiled nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormEdge {
    /// Node the edge enters
    pub target: NodeKey,
    /// Realized form
    pub application: SuffixFormApplication,
    /// What the next suffix must look like; set on voiced variants only
    pub expectations: PhoneticExpectations,
}

/// A compiled node with its outgoing edges in discovery order
#[derive(Debug, Clone)]
pub struct FormNode {
    /// Identity
    pub key: NodeKey,
    /// Kind of the underlying state
    pub kind: StateType,
    /// Outgoing edges, without duplicates
    pub edges: Vec<FormEdge>,
}

impl FormNode {
    fn new(key: NodeKey, kind: StateType) -> Self {
        Self {
            key,
            kind,
            edges: Vec::new(),
        }
    }

    fn add_edge(&mut self, edge: FormEdge) {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }
}

/// The compiled automaton
pub struct SuffixFormGraph {
    suffix_graph: Arc<SuffixGraph>,
    nodes: HashMap<NodeKey, FormNode>,
}

impl fmt::Debug for SuffixFormGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixFormGraph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}

impl SuffixFormGraph {
    /// Compile every state reachable from a root state.
    ///
    /// Each reachable state gets a node for every valid phonetic attribute
    /// set, since the parser recomputes attributes from the whole surface and
    /// may arrive at any of them.
    pub fn compile(suffix_graph: Arc<SuffixGraph>, applier: &dyn SuffixFormApplier) -> Self {
        let mut compiler = Compiler {
            graph: suffix_graph.as_ref(),
            applier,
            nodes: HashMap::new(),
            explored: HashSet::new(),
        };
        let mut pending: Vec<StateId> = suffix_graph.root_states().iter().rev().copied().collect();
        while let Some(state) = pending.pop() {
            if !compiler.explored.insert(state) {
                continue;
            }
            for target in compiler.explore(state).into_iter().rev() {
                if !compiler.explored.contains(&target) {
                    pending.push(target);
                }
            }
        }

        let states = compiler.explored.len();
        let nodes = compiler.nodes;
        let compiled = Self {
            suffix_graph,
            nodes,
        };
        tracing::debug!(
            states,
            nodes = compiled.nodes.len(),
            edges = compiled.edge_count(),
            "compiled suffix form graph"
        );
        compiled
    }

    /// The abstract graph this was compiled from
    pub fn suffix_graph(&self) -> &Arc<SuffixGraph> {
        &self.suffix_graph
    }

    /// Node for a key, if it was compiled
    pub fn node(&self, key: NodeKey) -> Option<&FormNode> {
        self.nodes.get(&key)
    }

    /// Iterate over all nodes in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &FormNode> {
        self.nodes.values()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges over all nodes
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }
}

struct Compiler<'a> {
    graph: &'a SuffixGraph,
    applier: &'a dyn SuffixFormApplier,
    nodes: HashMap<NodeKey, FormNode>,
    explored: HashSet<StateId>,
}

impl Compiler<'_> {
    /// Build the nodes of one state and return the states its edges enter
    fn explore(&mut self, state: StateId) -> Vec<StateId> {
        let graph = self.graph;
        let source = graph.state(state);
        let mut targets = Vec::with_capacity(source.out_edges.len());

        for attrs in PhoneticAttributes::valid_sets() {
            let key = NodeKey::new(state, *attrs);
            self.ensure_node(key);
            for out in &source.out_edges {
                for form in &graph.suffix(out.suffix).forms {
                    self.add_transition_nodes(key, form, out.target);
                }
            }
        }
        for out in &source.out_edges {
            if !targets.contains(&out.target) {
                targets.push(out.target);
            }
        }
        targets
    }

    fn ensure_node(&mut self, key: NodeKey) {
        let kind = self.graph.state(key.state).kind;
        self.nodes
            .entry(key)
            .or_insert_with(|| FormNode::new(key, kind));
    }

    fn add_transition_nodes(&mut self, source: NodeKey, form: &Arc<SuffixForm>, target: StateId) {
        let sequence = &form.sequence;
        if !sequence.is_blank() && !self.applier.is_applicable(sequence, source.attrs) {
            return;
        }
        let applied = self.applier.apply(sequence, source.attrs);
        self.add_edge(source, form, &applied, &applied, target, PhoneticExpectations::empty());

        if is_blank(&applied) || !sequence.last_letter_can_be_voiced() {
            return;
        }
        let mut chars = applied.chars();
        let Some(voiced) = chars.next_back().and_then(alphabet::voice) else {
            return;
        };
        let mut voiced_form = chars.as_str().to_string();
        voiced_form.push(voiced);
        self.add_edge(
            source,
            form,
            &voiced_form,
            &applied,
            target,
            PhoneticExpectations::from([PhoneticExpectation::VowelStart]),
        );
    }

    fn add_edge(
        &mut self,
        source: NodeKey,
        form: &Arc<SuffixForm>,
        actual: &str,
        fitting: &str,
        target: StateId,
        expectations: PhoneticExpectations,
    ) {
        let target = NodeKey::new(target, append_str(source.attrs, actual));
        self.ensure_node(target);
        let expectations = if is_blank(actual) {
            PhoneticExpectations::empty()
        } else {
            expectations
        };
        let edge = FormEdge {
            target,
            application: SuffixFormApplication::new(Arc::clone(form), actual, fitting),
            expectations,
        };
        if let Some(node) = self.nodes.get_mut(&source) {
            node.add_edge(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexemeAttributes;
    use crate::phonetics::{calculate_phonetic_attributes, PhoneticAttribute};
    use crate::suffix::{PlainApplier, PrecachingApplier};
    use proptest::prelude::*;
    use std::sync::OnceLock;

    fn standard() -> &'static SuffixFormGraph {
        static GRAPH: OnceLock<SuffixFormGraph> = OnceLock::new();
        GRAPH.get_or_init(|| {
            let graph = Arc::new(SuffixGraph::standard().unwrap());
            SuffixFormGraph::compile(graph, &PlainApplier)
        })
    }

    fn snapshot(graph: &SuffixFormGraph) -> Vec<(NodeKey, Vec<(NodeKey, String, String)>)> {
        let mut nodes: Vec<_> = graph
            .nodes()
            .map(|node| {
                let mut edges: Vec<_> = node
                    .edges
                    .iter()
                    .map(|e| {
                        (
                            e.target,
                            e.application.form.template().to_string(),
                            e.application.actual.clone(),
                        )
                    })
                    .collect();
                edges.sort();
                (node.key, edges)
            })
            .collect();
        nodes.sort_by_key(|(key, _)| *key);
        nodes
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let graph = Arc::clone(standard().suffix_graph());
        let again = SuffixFormGraph::compile(graph, &PlainApplier);
        assert_eq!(snapshot(standard()), snapshot(&again));
    }

    #[test]
    fn test_precaching_applier_compiles_the_same_graph() {
        let graph = Arc::clone(standard().suffix_graph());
        let applier = PrecachingApplier::new(graph.forms().map(|form| &form.sequence));
        let cached = SuffixFormGraph::compile(Arc::clone(&graph), &applier);
        assert_eq!(snapshot(standard()), snapshot(&cached));
    }

    #[test]
    fn test_every_root_state_has_every_valid_set() {
        let compiled = standard();
        for state in compiled.suffix_graph().root_states() {
            for attrs in PhoneticAttributes::valid_sets() {
                assert!(compiled.node(NodeKey::new(*state, *attrs)).is_some());
            }
        }
    }

    #[test]
    fn test_dative_after_kitap_has_voiced_variant() {
        let compiled = standard();
        let graph = compiled.suffix_graph();
        let state = graph.state_id("NOUN_WITH_POSSESSION").unwrap();
        let attrs = calculate_phonetic_attributes("kitap", LexemeAttributes::empty());
        let node = compiled.node(NodeKey::new(state, attrs)).unwrap();
        let dat = graph.suffix_id("Dat_Noun").unwrap();
        let mut actuals: Vec<&str> = node
            .edges
            .iter()
            .filter(|e| e.application.suffix() == dat)
            .map(|e| e.application.actual.as_str())
            .collect();
        actuals.sort_unstable();
        assert_eq!(actuals, vec!["a", "na"]);
    }

    #[test]
    fn test_voiced_edges_expect_a_vowel() {
        let compiled = standard();
        let graph = compiled.suffix_graph();
        let state = graph.state_id("VERB_WITH_POLARITY").unwrap();
        let attrs = calculate_phonetic_attributes("gel", LexemeAttributes::empty());
        let node = compiled.node(NodeKey::new(state, attrs)).unwrap();
        let fut_suffix = graph.suffix_id("Fut").unwrap();
        let fut: Vec<&FormEdge> = node
            .edges
            .iter()
            .filter(|e| e.application.suffix() == fut_suffix && e.application.fitting == "ecek")
            .collect();
        assert_eq!(fut.len(), 2);
        // derivations realized as "ecek" share the voicing split
        for edge in node.edges.iter().filter(|e| e.application.actual == "eceğ") {
            assert!(edge.expectations.contains(PhoneticExpectation::VowelStart));
        }
        let voiced = fut
            .iter()
            .find(|e| e.application.actual == "eceğ")
            .unwrap();
        assert!(voiced.expectations.contains(PhoneticExpectation::VowelStart));
        let plain = fut.iter().find(|e| e.application.actual == "ecek").unwrap();
        assert!(plain.expectations.is_empty());
    }

    #[test]
    fn test_no_double_vowels_at_node_boundaries() {
        for node in standard().nodes() {
            if !node.key.attrs.contains(PhoneticAttribute::LastLetterVowel) {
                continue;
            }
            for edge in &node.edges {
                let first = edge.application.actual.chars().next();
                assert!(
                    first.map_or(true, |c| !alphabet::is_vowel(c)),
                    "{:?} realizes {:?} after a vowel",
                    edge.application.form.template(),
                    edge.application.actual
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_registered_forms_never_double_vowels(
            form_index in 0usize..10_000,
            set_index in 0usize..10_000,
        ) {
            let graph = standard().suffix_graph();
            let forms: Vec<_> = graph.forms().collect();
            let sets: Vec<_> = PhoneticAttributes::valid_sets()
                .iter()
                .filter(|set| set.contains(PhoneticAttribute::LastLetterVowel))
                .collect();
            let form = &forms[form_index % forms.len()].sequence;
            let attrs = *sets[set_index % sets.len()];
            if PlainApplier.is_applicable(form, attrs) {
                let applied = PlainApplier.apply(form, attrs);
                prop_assert!(applied.chars().next().map_or(true, |c| !alphabet::is_vowel(c)));
            }
        }
    }
}
