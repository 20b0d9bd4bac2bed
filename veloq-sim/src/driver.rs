//! The apply driver
//!
//! Walks a sequence of gate descriptors, resolving each through the
//! dispatch table and applying it to the state in list order. Errors are
//! raised immediately; mutation already applied to the state stays.

use veloq_core::exp2;
use veloq_state::StateVector;

use crate::error::{Result, SimError};

/// Applies a sequence of gates to the state in place.
///
/// `ops`, `wires`, `params`, and `inverse` are parallel arrays describing
/// one gate each; `num_qubits` must match the state's dimension.
pub fn apply(
    state: &mut StateVector<'_>,
    ops: &[&str],
    wires: &[Vec<usize>],
    params: &[Vec<f64>],
    inverse: &[bool],
    num_qubits: usize,
) -> Result<()> {
    if num_qubits == 0 {
        return Err(SimError::InvalidQubitCount);
    }
    let expected = exp2(num_qubits);
    if state.dimension() != expected {
        return Err(SimError::DimensionMismatch {
            expected,
            actual: state.dimension(),
        });
    }
    if ops.len() != wires.len() || ops.len() != params.len() || ops.len() != inverse.len() {
        return Err(SimError::ShapeMismatch(
            "number of operations, wires, and parameters must all be equal".to_string(),
        ));
    }

    for i in 0..ops.len() {
        state.apply_operation(ops[i], &wires[i], inverse[i], &params[i])?;
    }
    Ok(())
}

/// Single-gate convenience wrapper around the state's typed entry point.
pub fn apply_operation(
    state: &mut StateVector<'_>,
    op_name: &str,
    wires: &[usize],
    inverse: bool,
    params: &[f64],
) -> Result<()> {
    state
        .apply_operation(op_name, wires, inverse, params)
        .map_err(SimError::from)
}
