//! Performance benchmarks for bmfind
//!
//! Run with: cargo bench

use bmfind::bench::{fixture, Engine};
use bmfind::search::{bad_char_table, good_suffix_table, BoyerMoore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const ENGINES: [Engine; 3] = [Engine::BoyerMoore, Engine::Naive, Engine::Memmem];

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");
    for len in [4usize, 32, 256] {
        let (_, needle) = fixture(len, len, false);
        group.bench_with_input(BenchmarkId::new("bad_char", len), &needle, |b, n| {
            b.iter(|| bad_char_table(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("good_suffix", len), &needle, |b, n| {
            b.iter(|| good_suffix_table(black_box(n)))
        });
    }
    group.finish();
}

fn bench_engines(c: &mut Criterion, group_name: &str, plant: bool) {
    let mut group = c.benchmark_group(group_name);
    for (hay, needle) in [(128usize, 32usize), (4096, 32), (65536, 64)] {
        let (haystack, pattern) = fixture(hay, needle, plant);
        for engine in ENGINES {
            let search = engine.searcher();
            group.bench_function(
                BenchmarkId::new(engine.to_string(), format!("{hay}x{needle}")),
                |b| b.iter(|| search(black_box(&haystack), black_box(&pattern))),
            );
        }
    }
    group.finish();
}

fn bench_search_miss(c: &mut Criterion) {
    // Random needle of realistic size virtually never occurs, so this
    // times the skip-heavy miss path.
    bench_engines(c, "search_miss", false);
}

fn bench_search_hit(c: &mut Criterion) {
    // Needle planted at the last valid alignment: full scan plus a match.
    bench_engines(c, "search_hit", true);
}

fn bench_prebuilt_searcher(c: &mut Criterion) {
    // Table reuse across haystacks, versus rebuilding per call
    let (haystack, pattern) = fixture(4096, 32, true);
    let finder = BoyerMoore::new(&pattern);

    let mut group = c.benchmark_group("prebuilt");
    group.bench_function("reused_tables", |b| {
        b.iter(|| finder.find(black_box(&haystack)))
    });
    group.bench_function("tables_per_call", |b| {
        b.iter(|| bmfind::search::find(black_box(&haystack), black_box(&pattern)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_table_build,
    bench_search_miss,
    bench_search_hit,
    bench_prebuilt_searcher,
);

criterion_main!(benches);
