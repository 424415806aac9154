//! Morphotactics: which suffix may follow which
//!
//! The grammar is split into modules registered in order into one shared
//! namespace:
//!
//! - [`BasicModule`]: nouns, verbs, adjectives, adverbs, pronouns, question
//!   particles and the closed-class terminal roots
//! - [`NumeralModule`]: cardinal, ordinal and digit roots
//! - [`ProperNounModule`]: proper nouns and abbreviations
//! - [`CopulaModule`]: nominal copula, "değil" and explicit `dIr`
//!
//! [`SuffixGraph::standard`] stacks all four.

mod basic;
mod condition;
mod copula;
mod graph;
mod numeral;
mod proper_noun;

pub use basic::BasicModule;
pub use condition::Condition;
pub use copula::CopulaModule;
pub use graph::{
    form, FormSpec, GraphModule, GroupId, RootDispatch, RootMatcher, StateId, StateInfo, StateType,
    Suffix, SuffixEdge, SuffixForm, SuffixGraph, SuffixGraphBuilder, SuffixGraphState,
    SuffixGroup, SuffixId, SuffixKind,
};
pub use numeral::NumeralModule;
pub use proper_noun::ProperNounModule;
