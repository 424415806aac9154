//! Test invariants over generated inputs

use proptest::prelude::*;
use std::sync::{Arc, OnceLock};
use turkmorph_core::lexicon::{Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos, RootGenerator, RootMap};
use turkmorph_core::numeral::digits_to_text;
use turkmorph_core::parser::{ContextlessParser, MorphologicParser, SuffixApplier};
use turkmorph_core::phonetics::{alphabet, append_str, calculate_phonetic_attributes, PhoneticsEngine};
use turkmorph_core::suffix::PlainApplier;
use turkmorph_core::{RootFinderChain, SuffixFormGraph, SuffixGraph};

const TAIL: &str = "[abcçdefgğhıijklmnoöprsştuüvyz]{0,6}";
const HEAD: &str = "[abcçdefgğhıijklmnoöprsştuüvyz]{1,8}";
const SHORT_TAIL: &str = "[abcçdefgğhıijklmnoöprsştuüvyz]{0,5}";

fn parser() -> &'static ContextlessParser {
    static PARSER: OnceLock<ContextlessParser> = OnceLock::new();
    PARSER.get_or_init(|| {
        let graph = Arc::new(SuffixGraph::standard().unwrap());
        let form_graph = Arc::new(SuffixFormGraph::compile(Arc::clone(&graph), &PlainApplier));
        let lexemes = [
            Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
            Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
                .with_attributes([LexemeAttribute::Voicing]),
            Lexeme::new("gelmek", "gel", PrimaryPos::Verb, None)
                .with_attributes([LexemeAttribute::NoVoicing]),
            Lexeme::new("güzel", "güzel", PrimaryPos::Adjective, None),
        ];
        let root_map = Arc::new(RootMap::from_lexemes(&RootGenerator::new(), &lexemes));
        let chain = Arc::new(RootFinderChain::standard(root_map, false).unwrap());
        let applier = SuffixApplier::new(graph, PhoneticsEngine::new(Arc::new(PlainApplier)));
        ContextlessParser::new(form_graph, chain, applier, None).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_results_spell_the_word(
        stem in prop::sample::select(vec!["ev", "kitab", "gel", "güzel", "qz"]),
        tail in TAIL,
    ) {
        let word = format!("{stem}{tail}");
        for result in parser().parse(&word) {
            prop_assert!(result.is_terminal());
            prop_assert_eq!(result.surface_so_far().as_str(), word.as_str());
            let rebuilt: String = std::iter::once(result.root().as_str().to_string())
                .chain(result.transitions().map(|t| t.application.actual.clone()))
                .collect();
            prop_assert_eq!(rebuilt, word.clone());
        }
    }

    #[test]
    fn test_incremental_attributes_match_full_computation(
        head in HEAD,
        tail in SHORT_TAIL,
    ) {
        let incremental = append_str(calculate_phonetic_attributes(&head, LexemeAttributes::empty()), &tail);
        let full = calculate_phonetic_attributes(&format!("{head}{tail}"), LexemeAttributes::empty());
        prop_assert_eq!(incremental, full);
    }

    #[test]
    fn test_thousand_separators_do_not_change_reading(n in 0u64..1_000_000_000_000) {
        let plain = n.to_string();
        let mut grouped = String::new();
        for (i, c) in plain.chars().enumerate() {
            if i > 0 && (plain.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        let reading = digits_to_text(&plain).unwrap();
        prop_assert!(!reading.is_empty());
        prop_assert_eq!(digits_to_text(&grouped).unwrap(), reading);
    }

    #[test]
    fn test_lowercase_is_idempotent(word in "[a-zA-ZçÇğĞıIİiöÖşŞüÜ]{0,12}") {
        let once = alphabet::lowercase(&word);
        prop_assert_eq!(alphabet::lowercase(&once), once.clone());
        prop_assert!(!once.contains('I') && !once.contains('İ'));
    }
}
