//! The gate catalogue as a closed sum type
//!
//! Every supported gate is one variant; parametric variants store their
//! matrix factors precomputed at construction. Instances are immutable
//! value types that live for the duration of a single application.

use crate::error::{GateError, Result};
use crate::matrices;
use veloq_core::{exp2, Amplitude};

/// A gate instance, ready to be applied to a state vector.
///
/// Construct instances through [`crate::construct_gate`] or the inherent
/// constructors below. The wire list a gate is applied with must have
/// exactly [`Gate::num_qubits`] entries and no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    S,
    T,
    RotationX { c: Amplitude, js: Amplitude },
    RotationY { c: Amplitude, s: Amplitude },
    RotationZ { first: Amplitude, second: Amplitude },
    PhaseShift { shift: Amplitude },
    Rot { m: [Amplitude; 4] },
    CNot,
    Swap,
    CZ,
    CRotationX { c: Amplitude, js: Amplitude },
    CRotationY { c: Amplitude, s: Amplitude },
    CRotationZ { first: Amplitude, second: Amplitude },
    CRot { m: [Amplitude; 4] },
    Toffoli,
    CSwap,
    QubitUnitary { matrix: Vec<Amplitude>, num_qubits: usize },
}

impl Gate {
    /// RX(θ)
    pub fn rotation_x(theta: f64) -> Self {
        let m = matrices::rotation_x(theta);
        Gate::RotationX { c: m[0], js: m[1] }
    }

    /// RY(θ)
    pub fn rotation_y(theta: f64) -> Self {
        let m = matrices::rotation_y(theta);
        Gate::RotationY { c: m[0], s: m[2] }
    }

    /// RZ(θ)
    pub fn rotation_z(theta: f64) -> Self {
        let m = matrices::rotation_z(theta);
        Gate::RotationZ {
            first: m[0],
            second: m[3],
        }
    }

    /// PhaseShift(φ)
    pub fn phase_shift(phi: f64) -> Self {
        let m = matrices::phase_shift(phi);
        Gate::PhaseShift { shift: m[3] }
    }

    /// Rot(φ, θ, ω)
    pub fn rot(phi: f64, theta: f64, omega: f64) -> Self {
        Gate::Rot {
            m: matrices::rot(phi, theta, omega),
        }
    }

    /// CRX(θ)
    pub fn controlled_rotation_x(theta: f64) -> Self {
        let m = matrices::rotation_x(theta);
        Gate::CRotationX { c: m[0], js: m[1] }
    }

    /// CRY(θ)
    pub fn controlled_rotation_y(theta: f64) -> Self {
        let m = matrices::rotation_y(theta);
        Gate::CRotationY { c: m[0], s: m[2] }
    }

    /// CRZ(θ)
    pub fn controlled_rotation_z(theta: f64) -> Self {
        let m = matrices::rotation_z(theta);
        Gate::CRotationZ {
            first: m[0],
            second: m[3],
        }
    }

    /// CRot(φ, θ, ω)
    pub fn controlled_rot(phi: f64, theta: f64, omega: f64) -> Self {
        Gate::CRot {
            m: matrices::rot(phi, theta, omega),
        }
    }

    /// A raw unitary from interleaved (re, im) doubles in row-major order.
    ///
    /// The arity is inferred from the length: 2·(2^k)² doubles describe a
    /// k-qubit unitary. Any other length is rejected.
    pub fn qubit_unitary(params: &[f64]) -> Result<Self> {
        let num_qubits =
            infer_unitary_qubits(params.len()).ok_or(GateError::BadParameterCount {
                gate: "QubitUnitary",
                expected: 8,
                actual: params.len(),
            })?;
        let matrix = params
            .chunks_exact(2)
            .map(|pair| Amplitude::new(pair[0], pair[1]))
            .collect();
        Ok(Gate::QubitUnitary { matrix, num_qubits })
    }

    /// The catalogue label this instance was constructed from.
    pub fn label(&self) -> &'static str {
        match self {
            Gate::PauliX => "PauliX",
            Gate::PauliY => "PauliY",
            Gate::PauliZ => "PauliZ",
            Gate::Hadamard => "Hadamard",
            Gate::S => "S",
            Gate::T => "T",
            Gate::RotationX { .. } => "RX",
            Gate::RotationY { .. } => "RY",
            Gate::RotationZ { .. } => "RZ",
            Gate::PhaseShift { .. } => "PhaseShift",
            Gate::Rot { .. } => "Rot",
            Gate::CNot => "CNOT",
            Gate::Swap => "SWAP",
            Gate::CZ => "CZ",
            Gate::CRotationX { .. } => "CRX",
            Gate::CRotationY { .. } => "CRY",
            Gate::CRotationZ { .. } => "CRZ",
            Gate::CRot { .. } => "CRot",
            Gate::Toffoli => "Toffoli",
            Gate::CSwap => "CSWAP",
            Gate::QubitUnitary { .. } => "QubitUnitary",
        }
    }

    /// Number of wires this gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::PauliX
            | Gate::PauliY
            | Gate::PauliZ
            | Gate::Hadamard
            | Gate::S
            | Gate::T
            | Gate::RotationX { .. }
            | Gate::RotationY { .. }
            | Gate::RotationZ { .. }
            | Gate::PhaseShift { .. }
            | Gate::Rot { .. } => 1,
            Gate::CNot
            | Gate::Swap
            | Gate::CZ
            | Gate::CRotationX { .. }
            | Gate::CRotationY { .. }
            | Gate::CRotationZ { .. }
            | Gate::CRot { .. } => 2,
            Gate::Toffoli | Gate::CSwap => 3,
            Gate::QubitUnitary { num_qubits, .. } => *num_qubits,
        }
    }

    /// Side length of the gate matrix, 2^arity.
    pub fn dim(&self) -> usize {
        exp2(self.num_qubits())
    }

    /// The gate's unitary as a flat row-major matrix.
    pub fn matrix(&self) -> Vec<Amplitude> {
        match self {
            Gate::PauliX => matrices::PAULI_X.to_vec(),
            Gate::PauliY => matrices::PAULI_Y.to_vec(),
            Gate::PauliZ => matrices::PAULI_Z.to_vec(),
            Gate::Hadamard => matrices::HADAMARD.to_vec(),
            Gate::S => matrices::S_GATE.to_vec(),
            Gate::T => matrices::T_GATE.to_vec(),
            Gate::RotationX { c, js } => vec![*c, *js, *js, *c],
            Gate::RotationY { c, s } => vec![*c, -s, *s, *c],
            Gate::RotationZ { first, second } => {
                vec![*first, veloq_core::ZERO, veloq_core::ZERO, *second]
            }
            Gate::PhaseShift { shift } => {
                vec![veloq_core::ONE, veloq_core::ZERO, veloq_core::ZERO, *shift]
            }
            Gate::Rot { m } => m.to_vec(),
            Gate::CNot => matrices::CNOT.to_vec(),
            Gate::Swap => matrices::SWAP.to_vec(),
            Gate::CZ => matrices::CZ.to_vec(),
            Gate::CRotationX { c, js } => matrices::controlled(&[*c, *js, *js, *c]).to_vec(),
            Gate::CRotationY { c, s } => matrices::controlled(&[*c, -s, *s, *c]).to_vec(),
            Gate::CRotationZ { first, second } => {
                matrices::controlled(&[*first, veloq_core::ZERO, veloq_core::ZERO, *second])
                    .to_vec()
            }
            Gate::CRot { m } => matrices::controlled(m).to_vec(),
            Gate::Toffoli => matrices::TOFFOLI.to_vec(),
            Gate::CSwap => matrices::CSWAP.to_vec(),
            Gate::QubitUnitary { matrix, .. } => matrix.clone(),
        }
    }
}

/// Finds k such that `len` = 2·(2^k)², if one exists.
fn infer_unitary_qubits(len: usize) -> Option<usize> {
    if len < 8 || len % 2 != 0 {
        return None;
    }
    let entries = len / 2;
    let dim = (entries as f64).sqrt() as usize;
    if dim * dim != entries || !dim.is_power_of_two() {
        return None;
    }
    Some(dim.trailing_zeros() as usize)
}
