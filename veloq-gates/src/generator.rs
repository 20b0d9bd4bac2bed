//! Hermitian generators of the single-parameter gates
//!
//! A parameterised gate U(θ) exposes a generator G and a real scaling
//! factor s; the adjoint-Jacobian engine applies G in place and folds s
//! into the gradient as −2·s·Im⟨b|G·μ⟩. Generators are Hermitian but not
//! unitary: the projected variants zero out the amplitudes outside their
//! support.

use crate::gate::Gate;
use veloq_core::{Amplitude, IMAG, ZERO};

/// Generator kernels, applied through the same index-set machinery as the
/// gates themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// X, for RX
    PauliX,
    /// Y, for RY
    PauliY,
    /// Z, for RZ
    PauliZ,
    /// |1⟩⟨1| = (I − Z)/2, for PhaseShift
    Projector1,
    /// |1⟩⟨1| ⊗ X, for CRX
    ControlledX,
    /// |1⟩⟨1| ⊗ Y, for CRY
    ControlledY,
    /// |1⟩⟨1| ⊗ Z, for CRZ
    ControlledZ,
}

impl Generator {
    /// Applies the generator in place.
    pub fn apply(&self, state: &mut [Amplitude], indices: &[usize], externals: &[usize]) {
        match self {
            Generator::PauliX => {
                for &ext in externals {
                    state.swap(ext + indices[0], ext + indices[1]);
                }
            }
            Generator::PauliY => {
                for &ext in externals {
                    let v0 = state[ext + indices[0]];
                    state[ext + indices[0]] = -IMAG * state[ext + indices[1]];
                    state[ext + indices[1]] = IMAG * v0;
                }
            }
            Generator::PauliZ => {
                for &ext in externals {
                    state[ext + indices[1]] = -state[ext + indices[1]];
                }
            }
            Generator::Projector1 => {
                for &ext in externals {
                    state[ext + indices[0]] = ZERO;
                }
            }
            Generator::ControlledX => {
                for &ext in externals {
                    state[ext + indices[0]] = ZERO;
                    state[ext + indices[1]] = ZERO;
                    state.swap(ext + indices[2], ext + indices[3]);
                }
            }
            Generator::ControlledY => {
                for &ext in externals {
                    state[ext + indices[0]] = ZERO;
                    state[ext + indices[1]] = ZERO;
                    let v0 = state[ext + indices[2]];
                    state[ext + indices[2]] = -IMAG * state[ext + indices[3]];
                    state[ext + indices[3]] = IMAG * v0;
                }
            }
            Generator::ControlledZ => {
                for &ext in externals {
                    state[ext + indices[0]] = ZERO;
                    state[ext + indices[1]] = ZERO;
                    state[ext + indices[3]] = -state[ext + indices[3]];
                }
            }
        }
    }
}

impl Gate {
    /// The gate's generator and scaling factor, if it is differentiable.
    ///
    /// Multi-parameter gates (Rot, CRot) return `None`; callers must
    /// decompose them before differentiating.
    pub fn generator(&self) -> Option<(Generator, f64)> {
        match self {
            Gate::RotationX { .. } => Some((Generator::PauliX, -0.5)),
            Gate::RotationY { .. } => Some((Generator::PauliY, -0.5)),
            Gate::RotationZ { .. } => Some((Generator::PauliZ, -0.5)),
            Gate::PhaseShift { .. } => Some((Generator::Projector1, 1.0)),
            Gate::CRotationX { .. } => Some((Generator::ControlledX, -0.5)),
            Gate::CRotationY { .. } => Some((Generator::ControlledY, -0.5)),
            Gate::CRotationZ { .. } => Some((Generator::ControlledZ, -0.5)),
            _ => None,
        }
    }
}
