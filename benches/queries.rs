//! Membership benchmarks racing the splay set against the standard ordered
//! and hashed sets.
//!
//! Queries are normally distributed around the middle of the keyspace, so
//! they cluster and splaying has locality to exploit.

use std::collections::{BTreeSet, HashSet};
use std::f64::consts::TAU;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use splaytree::SplaySet;

const DEV_FACTOR: i64 = 4;

fn gen_keys(rng: &mut StdRng, n: usize, keymax: i64) -> Vec<i64> {
    let mut keys = BTreeSet::new();
    while keys.len() < n {
        keys.insert(rng.gen_range(0..=keymax));
    }
    keys.into_iter().collect()
}

fn gen_queries(rng: &mut StdRng, n: usize, keymax: i64) -> Vec<i64> {
    let mean = (keymax / 2) as f64;
    let dev = (keymax / DEV_FACTOR) as f64;

    (0..n)
        .map(|_| {
            let u1 = rng.gen_range(f64::EPSILON..1.0);
            let u2: f64 = rng.gen();
            let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
            (mean + dev * z).round() as i64
        })
        .collect()
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    for size in [1_000, 10_000, 100_000] {
        let keymax = (size as i64) * 4;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let keys = gen_keys(&mut rng, size, keymax);
        let queries = gen_queries(&mut rng, size, keymax);

        let mut splay: SplaySet<i64> = keys.iter().copied().collect();
        let btree: BTreeSet<i64> = keys.iter().copied().collect();
        let hash: HashSet<i64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("SplaySet", size), &size, |b, _| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in &queries {
                    if splay.contains(query) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |b, _| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in &queries {
                    if btree.contains(query) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |b, _| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in &queries {
                    if hash.contains(query) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_membership);
criterion_main!(benches);
