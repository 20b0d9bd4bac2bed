//! Specialised kernels against the generic matrix kernel
//!
//! The gather–multiply–scatter kernel is the correctness baseline; every
//! specialised kernel must agree with it on random states, for both the
//! forward and the inverted application, including non-contiguous and
//! out-of-order wire lists.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use veloq_core::Amplitude;
use veloq_gates::{apply_matrix, construct_gate};
use veloq_state::{index_sets, StateVector};

const NUM_QUBITS: usize = 4;
const EPSILON: f64 = 1e-10;

fn random_unit_state(rng: &mut StdRng) -> Vec<Amplitude> {
    let mut amplitudes: Vec<Amplitude> = (0..1usize << NUM_QUBITS)
        .map(|_| Amplitude::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let norm = amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
    for amplitude in &mut amplitudes {
        *amplitude /= norm;
    }
    amplitudes
}

fn check_agreement(label: &str, wires: &[usize], params: &[f64]) {
    let mut rng = StdRng::seed_from_u64(97);
    let gate = construct_gate(label, params).unwrap();
    let matrix = gate.matrix();

    for inverse in [false, true] {
        let initial = random_unit_state(&mut rng);

        let mut specialised = StateVector::from_amplitudes(NUM_QUBITS, &initial).unwrap();
        specialised.apply_gate(&gate, wires, inverse).unwrap();

        let mut generic = initial.clone();
        let (internal, external) = index_sets(wires, NUM_QUBITS);
        apply_matrix(&matrix, &mut generic, &internal, &external, inverse);

        for (s, g) in specialised.as_slice().iter().zip(&generic) {
            assert_relative_eq!(s.re, g.re, epsilon = EPSILON);
            assert_relative_eq!(s.im, g.im, epsilon = EPSILON);
        }
    }
}

#[test]
fn single_qubit_kernels_match_matrix_kernel() {
    check_agreement("PauliX", &[2], &[]);
    check_agreement("PauliY", &[0], &[]);
    check_agreement("PauliZ", &[3], &[]);
    check_agreement("Hadamard", &[1], &[]);
    check_agreement("S", &[2], &[]);
    check_agreement("T", &[0], &[]);
    check_agreement("RX", &[1], &[0.6]);
    check_agreement("RY", &[3], &[-1.2]);
    check_agreement("RZ", &[2], &[0.35]);
    check_agreement("PhaseShift", &[0], &[2.1]);
}

#[test]
fn two_qubit_kernels_match_matrix_kernel() {
    check_agreement("CNOT", &[0, 3], &[]);
    check_agreement("CNOT", &[3, 0], &[]);
    check_agreement("SWAP", &[2, 1], &[]);
    check_agreement("CZ", &[1, 3], &[]);
    check_agreement("CRX", &[0, 2], &[0.8]);
    check_agreement("CRY", &[3, 1], &[1.4]);
    check_agreement("CRZ", &[2, 0], &[-0.7]);
    check_agreement("CRot", &[1, 2], &[0.25, 0.5, 0.75]);
}

#[test]
fn three_qubit_kernels_match_matrix_kernel() {
    check_agreement("Toffoli", &[0, 1, 2], &[]);
    check_agreement("Toffoli", &[3, 1, 0], &[]);
    check_agreement("CSWAP", &[1, 2, 3], &[]);
    check_agreement("CSWAP", &[2, 0, 3], &[]);
}
