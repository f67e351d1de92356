//! Criterion benchmarks for the per-frame paths.
//!
//! Benchmarks:
//! 1. Composing every tab selection against the bundled dataset
//! 2. Key indicators and the markdown brief

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use conjoncture_core::indicators::KeyIndicators;
use conjoncture_core::report::MarkdownBrief;
use conjoncture_core::{compose, Dataset, PrimaryTab, SecondaryTab};

// ── 1. Compose ───────────────────────────────────────────────────────

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let dataset = Dataset::bundled();

    for primary in PrimaryTab::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(primary.id()),
            &primary,
            |b, &primary| {
                b.iter(|| compose(black_box(primary), SecondaryTab::Unemployment, &dataset));
            },
        );
    }

    group.bench_function("all_employment_sub_tabs", |b| {
        b.iter(|| {
            for secondary in SecondaryTab::ALL {
                black_box(compose(PrimaryTab::Employment, black_box(secondary), &dataset));
            }
        });
    });

    group.finish();
}

// ── 2. Indicators and brief ──────────────────────────────────────────

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");
    let dataset = Dataset::bundled();

    group.bench_function("key_indicators", |b| {
        b.iter(|| KeyIndicators::from_dataset(black_box(&dataset)));
    });

    group.bench_function("markdown_brief", |b| {
        b.iter(|| MarkdownBrief.generate(black_box(&dataset)));
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_summaries);
criterion_main!(benches);
