//! Error types for state vector operations

use thiserror::Error;
use veloq_gates::GateError;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Qubit count of zero
    #[error("must specify one or more qubits")]
    InvalidQubitCount,

    /// State length inconsistent with the qubit count
    #[error("input state vector length ({actual}) does not match the expected length {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Borrowed buffer whose length is not a power of two
    #[error("state vector length {len} is not a power of two")]
    LengthNotPowerOfTwo { len: usize },

    /// Wire index outside [0, n)
    #[error("invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Managed allocation larger than the supported maximum
    #[error("too many qubits: requested {num_qubits}, max supported is {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Memory allocation failure
    #[error("failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },

    /// Gate construction or validation failure
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
