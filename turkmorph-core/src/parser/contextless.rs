//! The search over the compiled suffix form graph

use super::applier::SuffixApplier;
use super::mandatory::MandatoryTransitionApplier;
use super::predefined::PredefinedPaths;
use crate::error::Result;
use crate::formgraph::{FormEdge, NodeKey, SuffixFormGraph};
use crate::lexicon::LexemeAttribute;
use crate::morpheme::MorphemeContainer;
use crate::morphotactics::StateType;
use crate::phonetics::alphabet;
use crate::phonetics::sequence::{char_len, char_slice, char_tail};
use crate::rootfinder::{is_valid_root, RootFinderChain};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Anything that turns a word into its parses
pub trait MorphologicParser: Send + Sync {
    /// Every parse of the word; empty when there is none.
    ///
    /// A parse spells its root the way the lexicon does, so a capitalized
    /// word found through a lowercase entry comes back lowercased: "Kitaba"
    /// yields `surface_so_far() == "kitaba"`. Roots the lexicon spells with
    /// capitals (proper nouns, abbreviations) keep them.
    fn parse(&self, input: &str) -> Vec<MorphemeContainer>;

    /// Parses of each word, in input order
    fn parse_all(&self, inputs: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        inputs.iter().map(|input| self.parse(input)).collect()
    }
}

impl<P: MorphologicParser + ?Sized> MorphologicParser for Arc<P> {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        (**self).parse(input)
    }

    fn parse_all(&self, inputs: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        (**self).parse_all(inputs)
    }
}

/// Observer of paths the search gives up on
pub trait ParseListener: Send + Sync {
    /// A path that cannot be extended and is not a parse: a non-terminal
    /// state with no applicable edge, or a terminal state with input left
    fn dead_end(&self, container: &MorphemeContainer);
}

/// Parser finding every reading of a single word without context.
///
/// Roots are proposed for every prefix of the word, seeded at their entry
/// state (or from their predefined paths), pushed through mandatory
/// transitions, and then extended round by round along the compiled form
/// graph until no path is left.
#[derive(Clone)]
pub struct ContextlessParser {
    form_graph: Arc<SuffixFormGraph>,
    chain: Arc<RootFinderChain>,
    applier: SuffixApplier,
    mandatory: MandatoryTransitionApplier,
    predefined: Option<Arc<PredefinedPaths>>,
    listener: Option<Arc<dyn ParseListener>>,
}

impl fmt::Debug for ContextlessParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextlessParser")
            .field("form_graph", &self.form_graph)
            .field("chain", &self.chain)
            .field(
                "predefined_roots",
                &self.predefined.as_ref().map_or(0, |p| p.root_count()),
            )
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl ContextlessParser {
    /// Create a parser.
    ///
    /// The applier must wrap the same suffix graph the form graph was
    /// compiled from.
    pub fn new(
        form_graph: Arc<SuffixFormGraph>,
        chain: Arc<RootFinderChain>,
        applier: SuffixApplier,
        predefined: Option<Arc<PredefinedPaths>>,
    ) -> Result<Self> {
        let mandatory = MandatoryTransitionApplier::new(applier.clone())?;
        Ok(Self {
            form_graph,
            chain,
            applier,
            mandatory,
            predefined,
            listener: None,
        })
    }

    /// Report dead ends to a listener
    pub fn with_listener(mut self, listener: Arc<dyn ParseListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// The compiled graph the search walks
    pub fn form_graph(&self) -> &Arc<SuffixFormGraph> {
        &self.form_graph
    }

    /// Seeds for every prefix, before mandatory transitions.
    ///
    /// # Panics
    ///
    /// When a validated root has no entry state in the graph.
    fn initial_containers(&self, input: &str) -> Vec<MorphemeContainer> {
        let graph = self.applier.graph();
        let mut seeds = Vec::new();
        for end in 1..=char_len(input) {
            let partial = char_slice(input, 0, end);
            let roots = self.chain.find_roots(partial, input);
            for root in roots.iter().filter(|root| is_valid_root(root, partial)) {
                let state = graph
                    .default_state_for_root(root)
                    .unwrap_or_else(|| panic!("no entry state for root {root:?}"));

                let predefined = self
                    .predefined
                    .as_deref()
                    .filter(|paths| paths.has_paths(root));
                let Some(predefined) = predefined else {
                    let remaining = char_tail(input, root.sequence.len());
                    seeds.push(MorphemeContainer::new(
                        Arc::clone(root),
                        graph.info(state),
                        remaining,
                    ));
                    continue;
                };

                let lowered = alphabet::lowercase(input);
                for path in predefined.paths(root) {
                    let surface = path.surface_so_far();
                    if lowered.starts_with(&alphabet::lowercase(surface.as_str())) {
                        seeds.push(path.clone().with_remaining(char_tail(input, surface.len())));
                    }
                }
            }
        }
        seeds
    }

    /// Compiled edges of the container's node whose text starts the
    /// remaining input and whose suffix is not repeated within the group
    ///
    /// # Panics
    ///
    /// When the container's node was never compiled.
    fn applicable_edges<'g>(&'g self, container: &MorphemeContainer) -> Vec<&'g FormEdge> {
        let key = NodeKey::new(container.last_state().id, container.phonetic_attributes());
        let node = self.form_graph.node(key).unwrap_or_else(|| {
            panic!(
                "form graph has no node for state {} with attributes {:?}",
                self.applier.graph().state(key.state).name,
                key.attrs
            )
        });
        node.edges
            .iter()
            .filter(|edge| container.remaining().starts_with(edge.application.actual.as_str()))
            .filter(|edge| {
                !container
                    .suffixes_since_derivation()
                    .contains(&edge.application.suffix())
            })
            .collect()
    }

    fn extend(&self, container: &MorphemeContainer, input: &str) -> Vec<MorphemeContainer> {
        let surface = matching_surface(container, input);
        let suffix_graph = self.applier.graph();
        self.applicable_edges(container)
            .into_iter()
            .filter_map(|edge| {
                self.applier.try_suffix_form_application(
                    container,
                    &edge.application,
                    suffix_graph.info(edge.target.state),
                    edge.expectations,
                    &surface,
                )
            })
            .collect()
    }

    fn report_dead_end(&self, container: &MorphemeContainer) {
        if let Some(listener) = &self.listener {
            listener.dead_end(container);
        }
    }
}

/// The text a path has to keep spelling out.
///
/// A dictionary root found through a lowercased prefix ("kitab" for
/// "Kitaba") is matched against its own spelling; compound roots are matched
/// against the raw input since their sequence is only the first noun.
fn matching_surface<'a>(container: &MorphemeContainer, input: &'a str) -> Cow<'a, str> {
    let root = container.root();
    if root.lexeme.has_attribute(LexemeAttribute::CompoundP3sg) || input.starts_with(root.as_str())
    {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!(
            "{}{}",
            root.as_str(),
            char_tail(input, root.sequence.len())
        ))
    }
}

impl MorphologicParser for ContextlessParser {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        let seeds = self.initial_containers(input);
        tracing::debug!(input, seeds = seeds.len(), "seeded parse");

        let mut frontier: Vec<MorphemeContainer> = seeds
            .into_iter()
            .flat_map(|seed| {
                let surface = matching_surface(&seed, input).into_owned();
                self.mandatory.apply(vec![seed], &surface)
            })
            .collect();

        let mut results = Vec::new();
        let mut round = 0usize;
        while !frontier.is_empty() {
            round += 1;
            tracing::trace!(input, round, frontier = frontier.len(), "search round");

            let mut next = Vec::new();
            for container in frontier {
                if container.last_state().kind == StateType::Terminal {
                    if container.is_terminal() {
                        results.push(container);
                    } else {
                        tracing::debug!(
                            input,
                            ?container,
                            "terminal state reached with input left"
                        );
                        self.report_dead_end(&container);
                    }
                    continue;
                }

                let extended = self.extend(&container, input);
                if extended.is_empty() {
                    self.report_dead_end(&container);
                }
                next.extend(extended);
            }
            frontier = next;
        }

        tracing::debug!(input, results = results.len(), rounds = round, "parsed");
        results
    }
}
