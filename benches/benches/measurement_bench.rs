//! # Measurement Benchmarks
//!
//! Measures sampling + collapse cost for one qubit, a subset and the full register.
//!
//! Run: `cargo bench --bench measurement_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qel_quantum::{Circuit, CircuitConfig};

fn uniform(n: usize) -> Circuit {
    let mut qc = Circuit::with_config(n, CircuitConfig::default().with_seed(7)).unwrap();
    for q in 0..n {
        qc.apply_hadamard(q).unwrap();
    }
    qc
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    for n in [4usize, 8, 12] {
        let prepared = uniform(n);
        let amplitudes = prepared.state_vector();

        group.bench_with_input(BenchmarkId::new("single", n), &n, |b, &n| {
            let mut qc = uniform(n);
            b.iter(|| {
                qc.initialize_state(&amplitudes).unwrap();
                black_box(qc.measure(0).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("subset_half", n), &n, |b, &n| {
            let mut qc = uniform(n);
            let qubits: Vec<usize> = (0..n / 2).collect();
            b.iter(|| {
                qc.initialize_state(&amplitudes).unwrap();
                black_box(qc.measure_subset(&qubits).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("all", n), &n, |b, &n| {
            let mut qc = uniform(n);
            b.iter(|| {
                qc.initialize_state(&amplitudes).unwrap();
                black_box(qc.measure_all().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measure);
criterion_main!(benches);
