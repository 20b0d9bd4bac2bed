//! Gate catalogue, dispatch, and application kernels
//!
//! This crate defines the closed family of supported gates as a sum type,
//! the label-to-constructor dispatch table used to parse gate descriptors,
//! the specialised in-place kernels for each gate, and the generic
//! gather–multiply–scatter matrix kernel that serves as their correctness
//! baseline.

pub mod dispatch;
pub mod error;
pub mod gate;
pub mod generator;
pub mod kernels;
pub mod matrices;

pub use dispatch::construct_gate;
pub use error::{GateError, Result};
pub use gate::Gate;
pub use generator::Generator;
pub use kernels::apply_matrix;
