//! Adjoint-Jacobian engine against analytic gradients and central
//! differences

use approx::assert_relative_eq;
use veloq_sim::{adjoint_jacobian, finite_difference_jacobian, SimError};
use veloq_state::StateVector;

const FD_STEP: f64 = 1e-5;
const FD_TOLERANCE: f64 = 1e-5;

#[test]
fn rx_ry_circuit_matches_analytic_gradient() {
    // ⟨Z₀⟩ of RX(0.5) on wire 0, RY(0.3) on wire 1 is cos(0.5):
    // the gradient is (−sin(0.5), 0).
    let state = StateVector::new(2).unwrap();
    let mut jac = vec![0.0; 2];
    adjoint_jacobian(
        &state,
        &mut jac,
        &["PauliZ"],
        &[vec![]],
        &[vec![0]],
        &["RX", "RY"],
        &[vec![0.5], vec![0.3]],
        &[vec![0], vec![1]],
        &[0, 1],
        1,
    )
    .unwrap();

    assert_relative_eq!(jac[0], -(0.5f64).sin(), epsilon = 1e-6);
    assert_relative_eq!(jac[1], 0.0, epsilon = 1e-6);

    let fd = finite_difference_jacobian(
        &state,
        &["PauliZ"],
        &[vec![]],
        &[vec![0]],
        &["RX", "RY"],
        &[vec![0.5], vec![0.3]],
        &[vec![0], vec![1]],
        &[0, 1],
        FD_STEP,
    )
    .unwrap();
    assert_relative_eq!(jac[0], fd[0], epsilon = FD_TOLERANCE);
    assert_relative_eq!(jac[1], fd[1], epsilon = FD_TOLERANCE);
}

#[test]
fn mixed_circuit_matches_finite_differences() {
    // Parameterised and bare gates interleaved; bare gates must not
    // consume a parameter index.
    let state = StateVector::new(2).unwrap();
    let operations = ["RX", "Hadamard", "CRY", "RZ", "PhaseShift"];
    let op_params = [
        vec![0.4],
        vec![],
        vec![0.2],
        vec![0.7],
        vec![0.3],
    ];
    let op_wires = [vec![0], vec![1], vec![0, 1], vec![1], vec![0]];
    let observables = ["PauliZ", "PauliX"];
    let obs_params = [vec![], vec![]];
    let obs_wires = [vec![0], vec![1]];
    let trainable = [0, 1, 2, 3];

    let mut jac = vec![0.0; observables.len() * trainable.len()];
    adjoint_jacobian(
        &state,
        &mut jac,
        &observables,
        &obs_params,
        &obs_wires,
        &operations,
        &op_params,
        &op_wires,
        &trainable,
        3,
    )
    .unwrap();

    let fd = finite_difference_jacobian(
        &state,
        &observables,
        &obs_params,
        &obs_wires,
        &operations,
        &op_params,
        &op_wires,
        &trainable,
        FD_STEP,
    )
    .unwrap();

    for (adjoint, central) in jac.iter().zip(&fd) {
        assert_relative_eq!(*adjoint, *central, epsilon = FD_TOLERANCE);
    }
}

#[test]
fn trainable_subset_fills_only_requested_columns() {
    let state = StateVector::new(2).unwrap();
    let operations = ["RX", "CRY", "RZ"];
    let op_params = [vec![0.4], vec![0.2], vec![0.7]];
    let op_wires = [vec![0], vec![0, 1], vec![1]];
    let trainable = [1, 2];

    let mut jac = vec![0.0; 2];
    adjoint_jacobian(
        &state,
        &mut jac,
        &["PauliZ"],
        &[vec![]],
        &[vec![1]],
        &operations,
        &op_params,
        &op_wires,
        &trainable,
        2,
    )
    .unwrap();

    let fd = finite_difference_jacobian(
        &state,
        &["PauliZ"],
        &[vec![]],
        &[vec![1]],
        &operations,
        &op_params,
        &op_wires,
        &trainable,
        FD_STEP,
    )
    .unwrap();

    assert_relative_eq!(jac[0], fd[0], epsilon = FD_TOLERANCE);
    assert_relative_eq!(jac[1], fd[1], epsilon = FD_TOLERANCE);
}

#[test]
fn state_preparation_markers_are_skipped() {
    let state = StateVector::new(2).unwrap();
    let mut jac = vec![0.0; 1];
    adjoint_jacobian(
        &state,
        &mut jac,
        &["PauliZ"],
        &[vec![]],
        &[vec![0]],
        &["QubitStateVector", "RX"],
        &[vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], vec![0.4]],
        &[vec![0, 1], vec![0]],
        &[0],
        0,
    )
    .unwrap();

    assert_relative_eq!(jac[0], -(0.4f64).sin(), epsilon = 1e-6);
}

#[test]
fn multi_parameter_gate_is_rejected() {
    let state = StateVector::new(1).unwrap();
    let mut jac = vec![0.0; 1];
    let err = adjoint_jacobian(
        &state,
        &mut jac,
        &["PauliZ"],
        &[vec![]],
        &[vec![0]],
        &["Rot"],
        &[vec![0.1, 0.2, 0.3]],
        &[vec![0]],
        &[0],
        0,
    )
    .unwrap_err();
    assert!(matches!(err, SimError::NonDifferentiable { .. }));
}

#[test]
fn caller_state_is_left_untouched() {
    let state = StateVector::new(2).unwrap();
    let reference = state.to_managed().unwrap();
    let mut jac = vec![0.0; 1];
    adjoint_jacobian(
        &state,
        &mut jac,
        &["PauliZ"],
        &[vec![]],
        &[vec![0]],
        &["RX"],
        &[vec![0.9]],
        &[vec![0]],
        &[0],
        0,
    )
    .unwrap();
    assert_eq!(state, reference);
}
