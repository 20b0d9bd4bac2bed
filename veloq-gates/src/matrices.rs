//! Gate matrices, stored flat in row-major order
//!
//! Non-parametric matrices are compile-time constants; parametric gates
//! compute their entries at construction time through the builder
//! functions below.

use veloq_core::{Amplitude, IMAG, ONE, PHASE_PI_4, SQRT2_INV, ZERO};

const NEG_ONE: Amplitude = Amplitude::new(-1.0, 0.0);
const NEG_IMAG: Amplitude = Amplitude::new(0.0, -1.0);
const H: Amplitude = Amplitude::new(SQRT2_INV, 0.0);
const NEG_H: Amplitude = Amplitude::new(-SQRT2_INV, 0.0);

pub static PAULI_X: [Amplitude; 4] = [ZERO, ONE, ONE, ZERO];

pub static PAULI_Y: [Amplitude; 4] = [ZERO, NEG_IMAG, IMAG, ZERO];

pub static PAULI_Z: [Amplitude; 4] = [ONE, ZERO, ZERO, NEG_ONE];

pub static HADAMARD: [Amplitude; 4] = [H, H, H, NEG_H];

pub static S_GATE: [Amplitude; 4] = [ONE, ZERO, ZERO, IMAG];

pub static T_GATE: [Amplitude; 4] = [ONE, ZERO, ZERO, PHASE_PI_4];

#[rustfmt::skip]
pub static CNOT: [Amplitude; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,
    ZERO, ZERO, ONE,  ZERO,
];

#[rustfmt::skip]
pub static SWAP: [Amplitude; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,
];

#[rustfmt::skip]
pub static CZ: [Amplitude; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO,
    ZERO, ZERO, ZERO, NEG_ONE,
];

#[rustfmt::skip]
pub static TOFFOLI: [Amplitude; 64] = [
    ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO,
];

#[rustfmt::skip]
pub static CSWAP: [Amplitude; 64] = [
    ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,
];

/// RX(θ) = [[cos(θ/2), −i·sin(θ/2)], [−i·sin(θ/2), cos(θ/2)]]
pub fn rotation_x(theta: f64) -> [Amplitude; 4] {
    let c = Amplitude::new((theta / 2.0).cos(), 0.0);
    let js = Amplitude::new(0.0, (-theta / 2.0).sin());
    [c, js, js, c]
}

/// RY(θ) = [[cos(θ/2), −sin(θ/2)], [sin(θ/2), cos(θ/2)]]
pub fn rotation_y(theta: f64) -> [Amplitude; 4] {
    let c = Amplitude::new((theta / 2.0).cos(), 0.0);
    let s = Amplitude::new((theta / 2.0).sin(), 0.0);
    [c, -s, s, c]
}

/// RZ(θ) = diag(e^{−iθ/2}, e^{iθ/2})
pub fn rotation_z(theta: f64) -> [Amplitude; 4] {
    let first = Amplitude::from_polar(1.0, -theta / 2.0);
    let second = Amplitude::from_polar(1.0, theta / 2.0);
    [first, ZERO, ZERO, second]
}

/// PhaseShift(φ) = diag(1, e^{iφ})
pub fn phase_shift(phi: f64) -> [Amplitude; 4] {
    [ONE, ZERO, ZERO, Amplitude::from_polar(1.0, phi)]
}

/// Rot(φ, θ, ω) = RZ(ω)·RY(θ)·RZ(φ), written out as a 2×2
pub fn rot(phi: f64, theta: f64, omega: f64) -> [Amplitude; 4] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        c * Amplitude::from_polar(1.0, (-phi - omega) / 2.0),
        -s * Amplitude::from_polar(1.0, (phi - omega) / 2.0),
        s * Amplitude::from_polar(1.0, (-phi + omega) / 2.0),
        c * Amplitude::from_polar(1.0, (phi + omega) / 2.0),
    ]
}

/// Embeds a 2×2 block as the lower-right quadrant of a 4×4 controlled
/// matrix, with the identity on the |0⟩ control subspace.
pub fn controlled(block: &[Amplitude; 4]) -> [Amplitude; 16] {
    [
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ONE, ZERO, ZERO, //
        ZERO, ZERO, block[0], block[1], //
        ZERO, ZERO, block[2], block[3], //
    ]
}
