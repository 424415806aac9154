//! Performance benchmarks for cached and parallel batch parsing
//!
//! Run with: cargo bench --bench bulk_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use turkmorph_core::lexicon::{Lexeme, LexemeAttribute, PrimaryPos};
use turkmorph_engine::{AnalyzerBuilder, CacheKind, EngineConfig};

fn lexemes() -> Vec<Lexeme> {
    vec![
        Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
        Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
            .with_attributes([LexemeAttribute::Voicing]),
        Lexeme::new("gelmek", "gel", PrimaryPos::Verb, None)
            .with_attributes([LexemeAttribute::NoVoicing]),
        Lexeme::new("okumak", "oku", PrimaryPos::Verb, None)
            .with_attributes([LexemeAttribute::NoVoicing]),
    ]
}

/// Generate a corpus with the word repetition of running text
fn generate_corpus(size: usize) -> Vec<&'static str> {
    let base = [
        "ev", "evde", "evlerimizden", "kitaba", "kitaplarımız", "geldim", "geliyorsunuz",
        "okudular", "okuyacağım", "12'ye", "...", "evler", "kitap", "gelmeyecek",
    ];
    base.iter().copied().cycle().take(size).collect()
}

/// Compare cache kinds on the same batch
fn bench_cache_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_kinds");
    let corpus = generate_corpus(2_000);
    group.throughput(Throughput::Elements(corpus.len() as u64));

    for kind in [CacheKind::None, CacheKind::Lru, CacheKind::TwoLevel] {
        let analyzer = AnalyzerBuilder::new()
            .config(EngineConfig {
                cache_kind: kind,
                parallel: false,
                ..EngineConfig::default()
            })
            .lexemes(lexemes())
            .build()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{kind:?}")),
            &corpus,
            |b, corpus| {
                b.iter(|| analyzer.parse_all(black_box(corpus)));
            },
        );
    }
    group.finish();
}

/// Sequential vs parallel parsing without a cache
fn bench_parallel_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_scaling");
    let corpus = generate_corpus(5_000);
    group.throughput(Throughput::Elements(corpus.len() as u64));

    for threads in [1, 2, 4, 8] {
        let analyzer = AnalyzerBuilder::new()
            .config(EngineConfig {
                cache_kind: CacheKind::None,
                threads: Some(threads),
                min_parallel_batch: 64,
                ..EngineConfig::default()
            })
            .lexemes(lexemes())
            .build()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}_threads")),
            &corpus,
            |b, corpus| {
                b.iter(|| analyzer.parse_all(black_box(corpus)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_cache_kinds, bench_parallel_scaling);
criterion_main!(benches);
