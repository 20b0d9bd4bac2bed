//! Error types for the apply driver and the adjoint engine

use thiserror::Error;
use veloq_gates::GateError;
use veloq_state::StateError;

/// Errors that can occur while driving a circuit or computing gradients
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Qubit count of zero
    #[error("must specify one or more qubits")]
    InvalidQubitCount,

    /// State length inconsistent with the given qubit count
    #[error("input state vector length ({actual}) does not match the given number of qubits (expected length {expected})")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Parallel input arrays of unequal length
    #[error("invalid arguments: {0}")]
    ShapeMismatch(String),

    /// Gate whose parameterisation the adjoint method does not support
    #[error("the {op} operation is not supported using the adjoint differentiation method")]
    NonDifferentiable { op: String },

    /// State vector failure
    #[error(transparent)]
    State(StateError),

    /// Gate construction failure
    #[error(transparent)]
    Gate(#[from] GateError),
}

impl From<StateError> for SimError {
    fn from(err: StateError) -> Self {
        // surface gate failures under their own kind even when they were
        // raised through a state entry point
        match err {
            StateError::Gate(gate) => SimError::Gate(gate),
            other => SimError::State(other),
        }
    }
}

/// Result type for driver and adjoint operations
pub type Result<T> = std::result::Result<T, SimError>;
