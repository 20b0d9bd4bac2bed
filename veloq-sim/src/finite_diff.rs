//! Central-difference Jacobian, the validation path for the adjoint engine

use veloq_state::StateVector;

use crate::adjoint::is_state_prep;
use crate::error::{Result, SimError};
use crate::expectation;

/// Computes the same Jacobian as [`crate::adjoint_jacobian`] by central
/// differences with the given step, at two circuit evaluations per
/// trainable parameter.
#[allow(clippy::too_many_arguments)]
pub fn finite_difference_jacobian(
    state: &StateVector<'_>,
    observables: &[&str],
    obs_params: &[Vec<f64>],
    obs_wires: &[Vec<usize>],
    operations: &[&str],
    op_params: &[Vec<f64>],
    op_wires: &[Vec<usize>],
    trainable_params: &[usize],
    step: f64,
) -> Result<Vec<f64>> {
    // Flattened parameter index → (operation, parameter slot).
    let mut param_sites = Vec::new();
    for (op_index, params) in op_params.iter().enumerate() {
        if is_state_prep(operations[op_index]) {
            continue;
        }
        for slot in 0..params.len() {
            param_sites.push((op_index, slot));
        }
    }

    let num_trainable = trainable_params.len();
    let mut jac = vec![0.0; observables.len() * num_trainable];

    for (t, &param_index) in trainable_params.iter().enumerate() {
        let &(op_index, slot) = param_sites.get(param_index).ok_or_else(|| {
            SimError::ShapeMismatch(format!(
                "trainable parameter {} does not exist in the circuit",
                param_index,
            ))
        })?;

        let mut shifted: Vec<Vec<f64>> = op_params.to_vec();
        shifted[op_index][slot] += step;
        let plus = evaluate(
            state, observables, obs_params, obs_wires, operations, &shifted, op_wires,
        )?;
        shifted[op_index][slot] -= 2.0 * step;
        let minus = evaluate(
            state, observables, obs_params, obs_wires, operations, &shifted, op_wires,
        )?;

        for j in 0..observables.len() {
            jac[j * num_trainable + t] = (plus[j] - minus[j]) / (2.0 * step);
        }
    }

    Ok(jac)
}

#[allow(clippy::too_many_arguments)]
fn evaluate(
    state: &StateVector<'_>,
    observables: &[&str],
    obs_params: &[Vec<f64>],
    obs_wires: &[Vec<usize>],
    operations: &[&str],
    op_params: &[Vec<f64>],
    op_wires: &[Vec<usize>],
) -> Result<Vec<f64>> {
    let mut lambda = state.to_managed().map_err(SimError::from)?;
    for i in 0..operations.len() {
        if is_state_prep(operations[i]) {
            continue;
        }
        lambda.apply_operation(operations[i], &op_wires[i], false, &op_params[i])?;
    }

    let mut values = Vec::with_capacity(observables.len());
    for j in 0..observables.len() {
        values.push(expectation(
            &lambda,
            observables[j],
            &obs_wires[j],
            &obs_params[j],
        )?);
    }
    Ok(values)
}
