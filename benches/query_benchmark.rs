//! Benchmarks for k2suffix lookup performance.
//!
//! Run with: cargo bench
//!
//! This benchmark suite measures:
//! - Parse throughput for mixed names
//! - Wildcard and exception paths
//! - Scalability with different rule set sizes
//! - Store construction time

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use k2suffix::{ParseOptions, RuleStore};

/// Generate a suffix list with `tld_count` TLDs, each carrying a handful of
/// second-level, wildcard and private rules.
fn generate_list(tld_count: usize) -> String {
    let mut list = String::new();
    let mut private = String::new();

    for i in 0..tld_count {
        list.push_str(&format!("tld{}\n", i));
        list.push_str(&format!("co.tld{}\n", i));
        list.push_str(&format!("org.tld{}\n", i));
        if i % 10 == 0 {
            list.push_str(&format!("*.city.tld{}\n", i));
            list.push_str(&format!("!www.city.tld{}\n", i));
        }
        if i % 5 == 0 {
            private.push_str(&format!("hosted.co.tld{}\n", i));
        }
    }

    list.push_str("// ===BEGIN PRIVATE DOMAINS===\n");
    list.push_str(&private);
    list.push_str("// ===END PRIVATE DOMAINS===\n");
    list
}

fn build_store(tld_count: usize) -> RuleStore {
    RuleStore::from_reader(generate_list(tld_count).as_bytes()).unwrap()
}

/// Generate queries covering plain, wildcard, exception, private and
/// unlisted names.
fn generate_queries(count: usize, tld_count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let tld = (i * 10) % tld_count;
            match i % 5 {
                0 => format!("www.example{}.co.tld{}", i, tld),
                1 => format!("a.b.district.city.tld{}", tld),
                2 => format!("foo.www.city.tld{}", tld),
                3 => format!("site{}.hosted.co.tld{}", i, tld),
                _ => format!("www.unlisted{}.zz", i),
            }
        })
        .collect()
}

/// Benchmark parse throughput over mixed queries.
fn bench_parse(c: &mut Criterion) {
    let store = build_store(1_000);
    let queries = generate_queries(1_000, 1_000);
    let options = ParseOptions::default();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(store.parse(query.as_str(), options));
            }
        })
    });

    group.bench_function("mixed_queries_icann_only", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(store.parse(query.as_str(), ParseOptions::icann_only()));
            }
        })
    });

    group.finish();
}

/// Benchmark individual matching paths.
fn bench_matching_paths(c: &mut Criterion) {
    let store = build_store(1_000);
    let options = ParseOptions::default();

    let mut group = c.benchmark_group("matching_paths");

    group.bench_function("normal", |b| {
        b.iter(|| black_box(store.domain("www.example.co.tld1", false)))
    });

    group.bench_function("wildcard", |b| {
        b.iter(|| black_box(store.domain("a.b.district.city.tld10", false)))
    });

    group.bench_function("exception", |b| {
        b.iter(|| black_box(store.domain("foo.www.city.tld10", false)))
    });

    group.bench_function("deep_subdomain", |b| {
        b.iter(|| black_box(store.domain("a.b.c.d.e.f.example.co.tld1", false)))
    });

    // Falls back to the implicit rule
    group.bench_function("unlisted_tld", |b| {
        b.iter(|| black_box(store.domain("www.example.zz", false)))
    });

    // Rejected before any lookup
    group.bench_function("invalid", |b| {
        b.iter(|| black_box(store.is_valid("http://example.com", options)))
    });

    group.finish();
}

/// Benchmark scalability with different rule set sizes.
fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in [100, 1_000, 10_000].iter() {
        let store = build_store(*size);
        let queries = generate_queries(100, *size);

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_with_input(BenchmarkId::new("tlds", size), size, |b, _| {
            b.iter(|| {
                for query in &queries {
                    black_box(store.domain(query.as_str(), false));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark store construction from list text.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000].iter() {
        let list = generate_list(*size);
        group.bench_with_input(BenchmarkId::new("from_reader", size), size, |b, _| {
            b.iter(|| black_box(RuleStore::from_reader(list.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_matching_paths,
    bench_scalability,
    bench_build,
);

criterion_main!(benches);
