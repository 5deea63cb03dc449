// ABOUTME: Criterion benchmarks for the personalization engines
// ABOUTME: Measures sequence ranking, body focus aggregation, and recovery analysis by catalog size
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Criterion benchmarks for the personalization engines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::cast_possible_wrap)]

mod common;

use common::fixtures::{
    generate_catalog, generate_history, generate_logs, reference_time, session_poses,
    CatalogSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use practice_personalization::intelligence::config::{
    BodyMapConfig, RecoveryConfig, SequenceScoringConfig,
};
use practice_personalization::intelligence::{
    BodyFocusAggregator, RecoveryAnalyzer, SequenceRecommender, SessionContext,
};

const SIZES: [CatalogSize; 3] = [CatalogSize::Small, CatalogSize::Medium, CatalogSize::Large];

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_recommend");
    let recommender = SequenceRecommender::with_config(SequenceScoringConfig::default());

    for size in SIZES {
        let catalog = generate_catalog(size.count());
        let context = SessionContext::after(catalog[0].clone())
            .with_session_poses(session_poses(&catalog, 12))
            .with_progress(0.4)
            .with_goals(["flexibility", "strength"]);

        group.throughput(Throughput::Elements(catalog.len() as u64));
        group.bench_with_input(BenchmarkId::new("next", size.count()), &catalog, |b, catalog| {
            b.iter(|| recommender.recommend(black_box(catalog), black_box(&context), 5));
        });
        group.bench_with_input(
            BenchmarkId::new("cooldown", size.count()),
            &catalog,
            |b, catalog| {
                let session = session_poses(catalog, 12);
                b.iter(|| recommender.recommend_cooldown(black_box(catalog), &session, 5));
            },
        );
    }
    group.finish();
}

fn bench_body_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_map");
    let aggregator = BodyFocusAggregator::with_config(BodyMapConfig::default());

    for size in SIZES {
        let history = generate_history(&generate_catalog(size.count()));
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze", size.count()),
            &history,
            |b, history| {
                b.iter(|| aggregator.analyze_body_map(black_box(history), 30));
            },
        );
    }
    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("recovery");
    let analyzer = RecoveryAnalyzer::with_config(RecoveryConfig::default());
    let as_of = reference_time();

    for size in SIZES {
        let catalog = generate_catalog(size.count());
        let logs = generate_logs(&catalog, 7);
        group.bench_with_input(
            BenchmarkId::new("analyze_and_recommend", size.count()),
            &catalog,
            |b, catalog| {
                b.iter(|| {
                    let analysis = analyzer.analyze(black_box(&logs), black_box(catalog), as_of);
                    analyzer.recommend_recovery(&analysis)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sequence, bench_body_map, bench_recovery);
criterion_main!(benches);
