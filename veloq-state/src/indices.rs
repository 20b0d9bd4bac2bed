//! Amplitude index generation for gate application
//!
//! A gate on k of n wires touches the state in 2^(n−k) disjoint blocks.
//! The internal patterns are the offsets of the gate's amplitudes within
//! one block; the external patterns are the block base offsets, built the
//! same way over the complement wire set. The emission order of
//! `generate_bit_patterns` is load-bearing: the specialised gate kernels
//! index into it by position.

use veloq_core::{exp2, max_decimal_for_qubit};

/// Returns the wires in [0, n) not present in `excluded`, ascending.
pub fn indices_after_exclusion(excluded: &[usize], num_qubits: usize) -> Vec<usize> {
    (0..num_qubits)
        .filter(|wire| !excluded.contains(wire))
        .collect()
}

/// Generates the 2^|wires| amplitude offsets addressed by the given wires.
///
/// Starts from {0} and, for each wire from last to first, doubles the
/// sequence by adding the wire's bit value 2^(n−1−wire) to every element.
pub fn generate_bit_patterns(wires: &[usize], num_qubits: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity(exp2(wires.len()));
    indices.push(0);
    for &wire in wires.iter().rev() {
        let value = max_decimal_for_qubit(wire, num_qubits);
        let current_size = indices.len();
        for j in 0..current_size {
            indices.push(indices[j] + value);
        }
    }
    indices
}

/// Builds the (internal, external) index-set pair for a gate's wires.
pub fn index_sets(wires: &[usize], num_qubits: usize) -> (Vec<usize>, Vec<usize>) {
    let internal = generate_bit_patterns(wires, num_qubits);
    let external_wires = indices_after_exclusion(wires, num_qubits);
    let external = generate_bit_patterns(&external_wires, num_qubits);
    (internal, external)
}
