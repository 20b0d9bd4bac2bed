//! Core numeric types and math utilities for the veloq simulator
//!
//! This crate holds the pieces every other veloq crate depends on: the
//! amplitude precision configuration, the global phase constants, and the
//! small index/vector math helpers used by the gate kernels.

pub mod math;
pub mod types;

pub use math::{exp2, inner_product, max_decimal_for_qubit};
pub use types::{Amplitude, Precision, IMAG, ONE, PHASE_PI_4, SQRT2_INV, ZERO};
