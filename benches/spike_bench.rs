//! Criterion benchmarks for the QUBO optimizers.
//!
//! Uses seeded random sparse instances so that timings measure the search
//! itself, independent of any problem domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spike_qubo::greedy::{GreedyConfig, GreedyRunner};
use spike_qubo::maxcut::{solve_max_cut, Edge, Graph};
use spike_qubo::qubo::{Qubo, SparseEnergy, Term};
use spike_qubo::rng::Lcg;
use spike_qubo::sa::{SaConfig, SaRunner};
use spike_qubo::spike::{SpikeConfig, SpikeRunner};

// ===========================================================================
// Instances
// ===========================================================================

/// Random sparse QUBO with roughly `degree` off-diagonal terms per variable.
fn sparse_qubo(n: usize, degree: usize, seed: i64) -> Qubo {
    let mut rng = Lcg::new(seed);
    let mut terms = Vec::with_capacity(n * (degree + 1));
    for i in 0..n {
        terms.push(Term::new(i, i, rng.uniform() * 2.0 - 1.0));
        for _ in 0..degree / 2 {
            let j = rng.random_index(n);
            if j != i {
                terms.push(Term::new(i.min(j), i.max(j), rng.uniform() * 2.0 - 1.0));
            }
        }
    }
    Qubo::new(n, terms).expect("generated indices are in range")
}

/// Random graph with `m` unit-weight edges.
fn random_graph(n: usize, m: usize, seed: i64) -> Graph {
    let mut rng = Lcg::new(seed);
    let edges = (0..m)
        .map(|_| Edge::new(rng.random_index(n), rng.random_index(n), 1.0))
        .collect();
    Graph::new(n, edges)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_flip_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_delta");

    for &n in &[100usize, 1000, 10_000] {
        let qubo = sparse_qubo(n, 8, 42);
        let eval = SparseEnergy::new(&qubo);
        let x: Vec<u8> = (0..n).map(|i| (i % 2) as u8).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &x, |b, x| {
            b.iter(|| {
                let mut acc = 0.0;
                for k in (0..n).step_by(n / 100) {
                    acc += eval.flip_delta(black_box(x), k);
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_spike(c: &mut Criterion) {
    let mut group = c.benchmark_group("spike");
    group.sample_size(10);

    for &n in &[50usize, 200, 1000] {
        let qubo = sparse_qubo(n, 6, 7);
        let config = SpikeConfig::default().with_max_iterations(5000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(qubo, config), |b, (q, c)| {
            b.iter(|| {
                let result = SpikeRunner::run(black_box(q), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_baselines(c: &mut Criterion) {
    let mut group = c.benchmark_group("baselines");
    group.sample_size(10);

    let qubo = sparse_qubo(200, 6, 7);
    let sa = SaConfig::default().with_max_steps(5000).with_seed(42);
    let greedy = GreedyConfig::default().with_seed(42);

    group.bench_function("sa_n200", |b| {
        b.iter(|| black_box(SaRunner::run(black_box(&qubo), black_box(&sa))))
    });
    group.bench_function("greedy_n200", |b| {
        b.iter(|| black_box(GreedyRunner::run(black_box(&qubo), black_box(&greedy))))
    });
    group.finish();
}

fn bench_max_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_cut");
    group.sample_size(10);

    for &(n, m) in &[(50usize, 150usize), (200, 800)] {
        let graph = random_graph(n, m, 3);
        let config = SpikeConfig::default().with_max_iterations(3000).with_seed(1);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}", n, m), n),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = solve_max_cut(black_box(g), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_flip_delta, bench_spike, bench_baselines, bench_max_cut);
criterion_main!(benches);
