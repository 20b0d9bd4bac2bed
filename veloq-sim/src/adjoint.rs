//! Adjoint-differentiation Jacobian engine
//!
//! Computes ∂⟨O_j⟩/∂θ_t for every observable and trainable parameter in a
//! single backward sweep: the circuit state |λ⟩ is propagated backwards by
//! applying each gate's adjoint while one observable-seeded copy |b_j⟩ per
//! observable is dragged along; at each trainable gate the generator is
//! applied to a saved copy |μ⟩ and the gradient falls out of one inner
//! product per observable. Cost is linear in gates and observables.

use veloq_core::inner_product;
use veloq_gates::construct_gate;
use veloq_state::StateVector;

use crate::error::{Result, SimError};

/// State-preparation markers; they may appear in the operation list but
/// are never dispatched as unitaries.
const STATE_PREP_OPS: [&str; 2] = ["QubitStateVector", "BasisState"];

pub(crate) fn is_state_prep(op: &str) -> bool {
    STATE_PREP_OPS.contains(&op)
}

/// Computes the dense Jacobian of observable expectations with respect to
/// the trainable gate parameters.
///
/// `state` is the register after state preparation; the operations are
/// re-applied internally to reach the end of the circuit. The result is
/// written into `jac` as `jac[j * |trainable| + t]` for observable `j` and
/// trainable slot `t` (slots follow the order trainable parameters occur
/// in the circuit).
///
/// `starting_param_index` is the flattened index of the last operation
/// parameter; unparameterised gates do not consume an index.
#[allow(clippy::too_many_arguments)]
pub fn adjoint_jacobian(
    state: &StateVector<'_>,
    jac: &mut [f64],
    observables: &[&str],
    obs_params: &[Vec<f64>],
    obs_wires: &[Vec<usize>],
    operations: &[&str],
    op_params: &[Vec<f64>],
    op_wires: &[Vec<usize>],
    trainable_params: &[usize],
    starting_param_index: usize,
) -> Result<()> {
    if observables.len() != obs_params.len() || observables.len() != obs_wires.len() {
        return Err(SimError::ShapeMismatch(
            "number of observables, wires, and parameters must all be equal".to_string(),
        ));
    }
    if operations.len() != op_params.len() || operations.len() != op_wires.len() {
        return Err(SimError::ShapeMismatch(
            "number of operations, wires, and parameters must all be equal".to_string(),
        ));
    }
    let num_trainable = trainable_params.len();
    if jac.len() != observables.len() * num_trainable {
        return Err(SimError::ShapeMismatch(format!(
            "jacobian buffer holds {} entries but {} are required",
            jac.len(),
            observables.len() * num_trainable,
        )));
    }

    // Forward: |λ⟩ = U_P … U_1 |φ⟩.
    let mut lambda = state.to_managed().map_err(SimError::from)?;
    for i in 0..operations.len() {
        if is_state_prep(operations[i]) {
            continue;
        }
        lambda.apply_operation(operations[i], &op_wires[i], false, &op_params[i])?;
    }

    // Seed: |b_j⟩ = O_j |λ⟩.
    let mut seeded = Vec::with_capacity(observables.len());
    for j in 0..observables.len() {
        let mut b = lambda.to_managed()?;
        b.apply_operation(observables[j], &obs_wires[j], false, &obs_params[j])?;
        seeded.push(b);
    }

    // One reusable scratch copy for |μ⟩.
    let mut mu = lambda.to_managed()?;

    let mut trainable_slot = num_trainable as i64 - 1;
    let mut param_number = starting_param_index as i64;

    for i in (0..operations.len()).rev() {
        let op = operations[i];
        if is_state_prep(op) {
            continue;
        }
        if op_params[i].len() > 1 {
            return Err(SimError::NonDifferentiable { op: op.to_string() });
        }

        let has_param = op_params[i].len() == 1;
        let wants_gradient = has_param
            && trainable_slot >= 0
            && trainable_params.iter().any(|&p| p as i64 == param_number);

        // |μ⟩ must be saved before |λ⟩ is stepped backwards.
        if wants_gradient {
            mu.copy_from(&lambda)?;
        }

        lambda.apply_operation(op, &op_wires[i], true, &op_params[i])?;

        if wants_gradient {
            let gate = construct_gate(op, &op_params[i])?;
            let (generator, scale) = gate
                .generator()
                .ok_or_else(|| SimError::NonDifferentiable { op: op.to_string() })?;
            mu.apply_generator(generator, &op_wires[i])?;

            for (j, b) in seeded.iter().enumerate() {
                let sum = inner_product(b.as_slice(), mu.as_slice());
                jac[j * num_trainable + trainable_slot as usize] = -2.0 * scale * sum.im;
            }
            trainable_slot -= 1;
        }
        if has_param {
            param_number -= 1;
        }

        if i > 0 {
            for b in seeded.iter_mut() {
                b.apply_operation(op, &op_wires[i], true, &op_params[i])?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_prep_markers_are_recognised() {
        assert!(is_state_prep("QubitStateVector"));
        assert!(is_state_prep("BasisState"));
        assert!(!is_state_prep("RX"));
    }

    #[test]
    fn jacobian_buffer_size_is_validated() {
        let state = StateVector::new(1).unwrap();
        let mut jac = vec![0.0; 3];
        let err = adjoint_jacobian(
            &state,
            &mut jac,
            &["PauliZ"],
            &[vec![]],
            &[vec![0]],
            &["RX"],
            &[vec![0.5]],
            &[vec![0]],
            &[0],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::ShapeMismatch(_)));
    }
}
