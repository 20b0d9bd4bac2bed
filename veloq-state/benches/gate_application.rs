use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veloq_state::StateVector;

fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");
    for num_qubits in [10usize, 16, 20] {
        group.bench_function(format!("hadamard_{}q", num_qubits), |b| {
            let mut state = StateVector::new(num_qubits).unwrap();
            b.iter(|| {
                state
                    .apply_operation(black_box("Hadamard"), &[0], false, &[])
                    .unwrap();
            });
        });
        group.bench_function(format!("rx_{}q", num_qubits), |b| {
            let mut state = StateVector::new(num_qubits).unwrap();
            b.iter(|| {
                state
                    .apply_operation(black_box("RX"), &[num_qubits / 2], false, &[0.3])
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_two_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit");
    for num_qubits in [10usize, 16, 20] {
        group.bench_function(format!("cnot_{}q", num_qubits), |b| {
            let mut state = StateVector::new(num_qubits).unwrap();
            b.iter(|| {
                state
                    .apply_operation(black_box("CNOT"), &[0, num_qubits - 1], false, &[])
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_generic_matrix(c: &mut Criterion) {
    // PauliX supplied as a raw unitary exercises the gather–multiply–scatter
    // fallback instead of the specialised kernel.
    let params = [0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    c.bench_function("qubit_unitary_16q", |b| {
        let mut state = StateVector::new(16).unwrap();
        b.iter(|| {
            state
                .apply_operation(black_box("QubitUnitary"), &[7], false, &params)
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_single_qubit,
    bench_two_qubit,
    bench_generic_matrix
);
criterion_main!(benches);
