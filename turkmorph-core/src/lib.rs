//! Rule-based Turkish morphological analysis
//!
//! This crate finds every morphological reading of a Turkish word. A word
//! is split into a root and a chain of suffixes by walking a finite
//! automaton compiled from two sources: a morphotactic graph saying which
//! suffix may follow which, and a phonetic model saying how each suffix is
//! spelled after a given surface (vowel harmony, buffer letters, voicing).
//!
//! # Architecture
//!
//! - **Phonetics** ([`phonetics`]): letter classes, surface attributes and
//!   the engine that realizes suffix templates
//! - **Suffix rules** ([`suffix`]): templates such as `+yA` compiled into
//!   rule lists
//! - **Lexicon** ([`lexicon`]): lexemes, roots and the root map
//! - **Morphotactics** ([`morphotactics`]): graph modules registered into
//!   one namespace and frozen into an indexed [`SuffixGraph`]
//! - **Form graph** ([`formgraph`]): the automaton the parser walks
//! - **Root finders** ([`rootfinder`]): dictionary lookup, numerals,
//!   punctuation, proper nouns and brute-force stem guessing
//! - **Parser** ([`parser`]): the search, mandatory transitions, predefined
//!   paths and result formatting
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use turkmorph_core::lexicon::{Lexeme, LexemeAttribute, PrimaryPos, RootGenerator, RootMap};
//! use turkmorph_core::parser::{ContextlessParser, Formatter, MorphologicParser, PredefinedPaths, SuffixApplier};
//! use turkmorph_core::phonetics::PhoneticsEngine;
//! use turkmorph_core::suffix::PlainApplier;
//! use turkmorph_core::{RootFinderChain, SuffixFormGraph, SuffixGraph};
//!
//! let graph = Arc::new(SuffixGraph::standard()?);
//! let form_graph = Arc::new(SuffixFormGraph::compile(Arc::clone(&graph), &PlainApplier));
//!
//! let lexemes = [Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
//!     .with_attributes([LexemeAttribute::Voicing])];
//! let root_map = Arc::new(RootMap::from_lexemes(&RootGenerator::new(), &lexemes));
//! let chain = Arc::new(RootFinderChain::standard(Arc::clone(&root_map), false)?);
//!
//! let applier = SuffixApplier::new(Arc::clone(&graph), PhoneticsEngine::new(Arc::new(PlainApplier)));
//! let predefined = Arc::new(PredefinedPaths::new(&applier, &root_map)?);
//! let parser = ContextlessParser::new(form_graph, chain, applier, Some(predefined))?;
//!
//! let formatter = Formatter::new(&graph);
//! let readings: Vec<String> = parser
//!     .parse("kitaba")
//!     .iter()
//!     .map(|result| formatter.format_with_forms(result))
//!     .collect();
//! assert!(readings.contains(&"kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])".to_string()));
//! # Ok::<(), turkmorph_core::CoreError>(())
//! ```

mod bitset;
pub mod error;
pub mod formgraph;
pub mod lexicon;
pub mod morpheme;
pub mod morphotactics;
pub mod numeral;
pub mod parser;
pub mod phonetics;
pub mod rootfinder;
pub mod suffix;

pub use error::{CoreError, Result};
pub use formgraph::{NodeKey, SuffixFormGraph};
pub use lexicon::{Lexeme, LexemeAttribute, PrimaryPos, Root, RootMap, SecondaryPos};
pub use morpheme::{MorphemeContainer, SuffixFormApplication, SuffixTransition};
pub use morphotactics::SuffixGraph;
pub use parser::{ContextlessParser, Formatter, MorphologicParser, ParseListener};
pub use rootfinder::{FinderPolicy, RootFinder, RootFinderChain};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::PlainApplier;
    use std::sync::Arc;

    #[test]
    fn test_pipeline_integration() {
        let graph = Arc::new(SuffixGraph::standard().unwrap());
        let form_graph = Arc::new(SuffixFormGraph::compile(Arc::clone(&graph), &PlainApplier));
        let lexemes = [Lexeme::new("ev", "ev", PrimaryPos::Noun, None)];
        let root_map = Arc::new(RootMap::from_lexemes(&lexicon::RootGenerator::new(), &lexemes));
        let chain = Arc::new(RootFinderChain::standard(root_map, false).unwrap());
        let applier = parser::SuffixApplier::new(
            Arc::clone(&graph),
            phonetics::PhoneticsEngine::new(Arc::new(PlainApplier)),
        );
        let parser = ContextlessParser::new(form_graph, chain, applier, None).unwrap();

        let formatter = Formatter::new(&graph);
        let readings: Vec<String> = parser.parse("evde").iter().map(|r| formatter.format(r)).collect();
        assert!(readings.contains(&"ev+Noun+A3sg+Pnon+Loc".to_string()));
    }

    #[test]
    fn test_public_exports() {
        let lexeme = Lexeme::new("ev", "ev", PrimaryPos::Noun, None);
        assert!(!lexeme.has_attribute(LexemeAttribute::Voicing));
        assert_eq!(PrimaryPos::Noun.to_string(), "Noun");
        assert_eq!(FinderPolicy::Continue, FinderPolicy::Continue);
    }
}
