//! Performance benchmarks for graph compilation and single-word parsing
//!
//! Run with: cargo bench --bench parser_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use turkmorph_core::lexicon::{Lexeme, LexemeAttribute, PrimaryPos, RootGenerator, RootMap};
use turkmorph_core::parser::{ContextlessParser, MorphologicParser, PredefinedPaths, SuffixApplier};
use turkmorph_core::phonetics::PhoneticsEngine;
use turkmorph_core::suffix::{PlainApplier, PrecachingApplier, SuffixFormApplier};
use turkmorph_core::{RootFinderChain, SuffixFormGraph, SuffixGraph};

fn lexemes() -> Vec<Lexeme> {
    vec![
        Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
        Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
            .with_attributes([LexemeAttribute::Voicing]),
        Lexeme::new("gelmek", "gel", PrimaryPos::Verb, None)
            .with_attributes([LexemeAttribute::NoVoicing]),
        Lexeme::new("başlamak", "başla", PrimaryPos::Verb, None)
            .with_attributes([LexemeAttribute::ProgressiveVowelDrop, LexemeAttribute::NoVoicing]),
        Lexeme::new("güzel", "güzel", PrimaryPos::Adjective, None),
    ]
}

fn build_parser(graph: &Arc<SuffixGraph>, brute_force: bool) -> ContextlessParser {
    let form_graph = Arc::new(SuffixFormGraph::compile(Arc::clone(graph), &PlainApplier));
    let root_map = Arc::new(RootMap::from_lexemes(&RootGenerator::new(), &lexemes()));
    let chain = Arc::new(RootFinderChain::standard(Arc::clone(&root_map), brute_force).unwrap());
    let applier = SuffixApplier::new(Arc::clone(graph), PhoneticsEngine::new(Arc::new(PlainApplier)));
    let predefined = Arc::new(PredefinedPaths::new(&applier, &root_map).unwrap());
    ContextlessParser::new(form_graph, chain, applier, Some(predefined)).unwrap()
}

/// Compiling the form graph with and without a precached applier
fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_graph_compile");
    let graph = Arc::new(SuffixGraph::standard().unwrap());
    let precaching = PrecachingApplier::new(graph.forms().map(|form| &form.sequence));

    let appliers: [(&str, &dyn SuffixFormApplier); 2] =
        [("plain", &PlainApplier), ("precaching", &precaching)];
    for (name, applier) in appliers {
        group.bench_function(name, |b| {
            b.iter(|| SuffixFormGraph::compile(Arc::clone(&graph), black_box(applier)));
        });
    }
    group.finish();
}

/// Parsing words of increasing suffix depth
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_word");
    let graph = Arc::new(SuffixGraph::standard().unwrap());

    for brute_force in [false, true] {
        let parser = build_parser(&graph, brute_force);
        let label = if brute_force { "brute_force" } else { "dictionary" };
        for word in ["ev", "kitaba", "evlerimizden", "başlıyorum", "gelemeyecekmişsiniz"] {
            group.bench_with_input(BenchmarkId::new(label, word), word, |b, word| {
                b.iter(|| parser.parse(black_box(word)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_parse);
criterion_main!(benches);
