//! Apply driver and adjoint-Jacobian engine
//!
//! The top layer of the simulator: validates and walks gate-descriptor
//! sequences against a state vector, and computes parameter gradients of
//! observable expectations by adjoint differentiation, with a
//! central-difference fallback for validation.

pub mod adjoint;
pub mod driver;
pub mod error;
pub mod finite_diff;

pub use adjoint::adjoint_jacobian;
pub use driver::{apply, apply_operation};
pub use error::{Result, SimError};
pub use finite_diff::finite_difference_jacobian;

use veloq_core::inner_product;
use veloq_state::StateVector;

/// The expectation value Re⟨ψ|O|ψ⟩ of a unitary observable.
pub fn expectation(
    state: &StateVector<'_>,
    observable: &str,
    obs_wires: &[usize],
    obs_params: &[f64],
) -> Result<f64> {
    let mut applied = state.to_managed().map_err(SimError::from)?;
    applied.apply_operation(observable, obs_wires, false, obs_params)?;
    Ok(inner_product(state.as_slice(), applied.as_slice()).re)
}
