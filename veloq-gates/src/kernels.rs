//! In-place gate application kernels
//!
//! Each kernel receives the internal index set (offsets of the amplitudes
//! the gate touches within one block) and the external index set (base
//! offsets of the blocks). Specialised kernels are hard-coded against the
//! emission order of the bit-pattern generator; the generic matrix kernel
//! is the correctness baseline they must agree with.

use rayon::prelude::*;

use crate::gate::Gate;
use veloq_core::{Amplitude, IMAG, PHASE_PI_4, SQRT2_INV, ZERO};

/// Minimum number of external blocks before the matrix kernel fans out
/// across threads.
const PARALLEL_THRESHOLD: usize = 1 << 12;

/// Shared mutable base pointer for the parallel matrix kernel.
///
/// Distinct external offsets address disjoint amplitude subsets, so
/// workers never alias each other's reads or writes.
struct StatePtr(*mut Amplitude);

impl StatePtr {
    // Taking the pointer through &self keeps closures capturing the
    // wrapper rather than the raw field, which would not be Send.
    #[inline]
    fn get(&self) -> *mut Amplitude {
        self.0
    }
}

unsafe impl Send for StatePtr {}
unsafe impl Sync for StatePtr {}

impl Gate {
    /// Applies this gate in place.
    ///
    /// `indices` must be the bit patterns generated for the gate's wires
    /// and `externals` the patterns for the remaining wires; `inverse`
    /// applies the Hermitian conjugate instead.
    pub fn apply(
        &self,
        state: &mut [Amplitude],
        indices: &[usize],
        externals: &[usize],
        inverse: bool,
    ) {
        debug_assert_eq!(indices.len(), self.dim());
        match self {
            Gate::PauliX => {
                for &ext in externals {
                    state.swap(ext + indices[0], ext + indices[1]);
                }
            }
            Gate::PauliY => {
                for &ext in externals {
                    let v0 = state[ext + indices[0]];
                    state[ext + indices[0]] = -IMAG * state[ext + indices[1]];
                    state[ext + indices[1]] = IMAG * v0;
                }
            }
            Gate::PauliZ => {
                for &ext in externals {
                    state[ext + indices[1]] = -state[ext + indices[1]];
                }
            }
            Gate::Hadamard => {
                for &ext in externals {
                    let v0 = state[ext + indices[0]];
                    let v1 = state[ext + indices[1]];
                    state[ext + indices[0]] = SQRT2_INV * (v0 + v1);
                    state[ext + indices[1]] = SQRT2_INV * (v0 - v1);
                }
            }
            Gate::S => {
                let factor = if inverse { -IMAG } else { IMAG };
                for &ext in externals {
                    state[ext + indices[1]] *= factor;
                }
            }
            Gate::T => {
                let shift = if inverse { PHASE_PI_4.conj() } else { PHASE_PI_4 };
                for &ext in externals {
                    state[ext + indices[1]] *= shift;
                }
            }
            Gate::RotationX { c, js } => {
                let js = if inverse { js.conj() } else { *js };
                for &ext in externals {
                    let v0 = state[ext + indices[0]];
                    let v1 = state[ext + indices[1]];
                    state[ext + indices[0]] = c * v0 + js * v1;
                    state[ext + indices[1]] = js * v0 + c * v1;
                }
            }
            Gate::RotationY { c, s } => {
                let s = if inverse { -*s } else { *s };
                for &ext in externals {
                    let v0 = state[ext + indices[0]];
                    let v1 = state[ext + indices[1]];
                    state[ext + indices[0]] = c * v0 - s * v1;
                    state[ext + indices[1]] = s * v0 + c * v1;
                }
            }
            Gate::RotationZ { first, second } => {
                let (first, second) = conj_pair(*first, *second, inverse);
                for &ext in externals {
                    state[ext + indices[0]] *= first;
                    state[ext + indices[1]] *= second;
                }
            }
            Gate::PhaseShift { shift } => {
                let shift = if inverse { shift.conj() } else { *shift };
                for &ext in externals {
                    state[ext + indices[1]] *= shift;
                }
            }
            Gate::Rot { m } => apply_matrix(m, state, indices, externals, inverse),
            Gate::CNot => {
                for &ext in externals {
                    state.swap(ext + indices[2], ext + indices[3]);
                }
            }
            Gate::Swap => {
                for &ext in externals {
                    state.swap(ext + indices[1], ext + indices[2]);
                }
            }
            Gate::CZ => {
                for &ext in externals {
                    state[ext + indices[3]] = -state[ext + indices[3]];
                }
            }
            Gate::CRotationX { c, js } => {
                let js = if inverse { js.conj() } else { *js };
                for &ext in externals {
                    let v0 = state[ext + indices[2]];
                    let v1 = state[ext + indices[3]];
                    state[ext + indices[2]] = c * v0 + js * v1;
                    state[ext + indices[3]] = js * v0 + c * v1;
                }
            }
            Gate::CRotationY { c, s } => {
                let s = if inverse { -*s } else { *s };
                for &ext in externals {
                    let v0 = state[ext + indices[2]];
                    let v1 = state[ext + indices[3]];
                    state[ext + indices[2]] = c * v0 - s * v1;
                    state[ext + indices[3]] = s * v0 + c * v1;
                }
            }
            Gate::CRotationZ { first, second } => {
                let (first, second) = conj_pair(*first, *second, inverse);
                for &ext in externals {
                    state[ext + indices[2]] *= first;
                    state[ext + indices[3]] *= second;
                }
            }
            Gate::CRot { m } => {
                // conjugate transpose of the 2×2 block when inverted
                let block = if inverse {
                    [m[0].conj(), m[2].conj(), m[1].conj(), m[3].conj()]
                } else {
                    *m
                };
                for &ext in externals {
                    let v0 = state[ext + indices[2]];
                    let v1 = state[ext + indices[3]];
                    state[ext + indices[2]] = block[0] * v0 + block[1] * v1;
                    state[ext + indices[3]] = block[2] * v0 + block[3] * v1;
                }
            }
            Gate::Toffoli => {
                for &ext in externals {
                    state.swap(ext + indices[6], ext + indices[7]);
                }
            }
            Gate::CSwap => {
                for &ext in externals {
                    state.swap(ext + indices[5], ext + indices[6]);
                }
            }
            Gate::QubitUnitary { matrix, .. } => {
                apply_matrix(matrix, state, indices, externals, inverse)
            }
        }
    }
}

fn conj_pair(first: Amplitude, second: Amplitude, inverse: bool) -> (Amplitude, Amplitude) {
    if inverse {
        (first.conj(), second.conj())
    } else {
        (first, second)
    }
}

/// Generic gather–multiply–scatter kernel for a dense row-major matrix.
///
/// For each external base offset, gathers the 2^k addressed amplitudes,
/// multiplies by the matrix (conjugate-transposed if `inverse`), and
/// scatters the result back.
pub fn apply_matrix(
    matrix: &[Amplitude],
    state: &mut [Amplitude],
    indices: &[usize],
    externals: &[usize],
    inverse: bool,
) {
    let dim = indices.len();
    debug_assert_eq!(matrix.len(), dim * dim);

    let adjoint;
    let m = if inverse {
        adjoint = conjugate_transpose(matrix, dim);
        adjoint.as_slice()
    } else {
        matrix
    };

    if externals.len() >= PARALLEL_THRESHOLD {
        let shared = StatePtr(state.as_mut_ptr());
        externals.par_iter().for_each_init(
            || vec![ZERO; dim],
            |scratch, &ext| {
                let arr = shared.get();
                unsafe {
                    for (pos, &idx) in indices.iter().enumerate() {
                        scratch[pos] = *arr.add(ext + idx);
                    }
                    for (row, &idx) in indices.iter().enumerate() {
                        let mut acc = ZERO;
                        for (col, v) in scratch.iter().enumerate() {
                            acc += m[row * dim + col] * v;
                        }
                        *arr.add(ext + idx) = acc;
                    }
                }
            },
        );
    } else {
        let mut scratch = vec![ZERO; dim];
        for &ext in externals {
            for (pos, &idx) in indices.iter().enumerate() {
                scratch[pos] = state[ext + idx];
            }
            for (row, &idx) in indices.iter().enumerate() {
                let mut acc = ZERO;
                for (col, v) in scratch.iter().enumerate() {
                    acc += m[row * dim + col] * v;
                }
                state[ext + idx] = acc;
            }
        }
    }
}

fn conjugate_transpose(matrix: &[Amplitude], dim: usize) -> Vec<Amplitude> {
    let mut out = vec![ZERO; dim * dim];
    for row in 0..dim {
        for col in 0..dim {
            out[col * dim + row] = matrix[row * dim + col].conj();
        }
    }
    out
}
