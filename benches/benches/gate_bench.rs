//! # Gate Benchmarks
//!
//! Measures single-qubit and controlled gate application over growing registers.
//! Every gate is O(2^n).
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qel_quantum::{Circuit, CircuitConfig};

fn register(n: usize) -> Circuit {
    Circuit::with_config(n, CircuitConfig::default().with_seed(1)).unwrap()
}

/// Benchmark single-qubit gates
fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");

    for n in [4usize, 10, 16] {
        group.bench_with_input(BenchmarkId::new("hadamard", n), &n, |b, &n| {
            let mut qc = register(n);
            b.iter(|| qc.apply_hadamard(black_box(n / 2)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("rotation_y", n), &n, |b, &n| {
            let mut qc = register(n);
            b.iter(|| qc.apply_rotation_y(black_box(0), black_box(0.3)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark two-qubit gates
fn bench_controlled(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled");

    for n in [4usize, 10, 16] {
        group.bench_with_input(BenchmarkId::new("cnot", n), &n, |b, &n| {
            let mut qc = register(n);
            qc.apply_hadamard(0).unwrap();
            b.iter(|| qc.apply_cnot(black_box(0), black_box(n - 1)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("cz", n), &n, |b, &n| {
            let mut qc = register(n);
            b.iter(|| qc.apply_cz(black_box(0), black_box(n - 1)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_qubit, bench_controlled);
criterion_main!(benches);
