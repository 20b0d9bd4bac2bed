//! Error types for gate construction and application

use thiserror::Error;

/// Errors that can occur while constructing or applying gates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// Label not present in the catalogue
    #[error("{0} is not a supported gate type")]
    UnknownGate(String),

    /// Parameter list length does not match the gate's declared count
    #[error("{gate}: requires {expected} parameters but got {actual} parameters instead")]
    BadParameterCount {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Wire list length does not match the gate's arity
    #[error("the gate of type {gate} requires {expected} wires, but {actual} were supplied")]
    ArityMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
