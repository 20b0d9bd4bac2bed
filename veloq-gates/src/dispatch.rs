//! Label-to-constructor dispatch for the gate catalogue
//!
//! The table is populated once on first lookup and read-only afterwards.
//! Labels are case-sensitive.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{GateError, Result};
use crate::gate::Gate;

type Constructor = fn(&[f64]) -> Result<Gate>;

fn fixed_params(label: &'static str, params: &[f64], required: usize) -> Result<()> {
    if params.len() != required {
        return Err(GateError::BadParameterCount {
            gate: label,
            expected: required,
            actual: params.len(),
        });
    }
    Ok(())
}

static DISPATCH_TABLE: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Constructor> = HashMap::new();
    table.insert("PauliX", |p| {
        fixed_params("PauliX", p, 0)?;
        Ok(Gate::PauliX)
    });
    table.insert("PauliY", |p| {
        fixed_params("PauliY", p, 0)?;
        Ok(Gate::PauliY)
    });
    table.insert("PauliZ", |p| {
        fixed_params("PauliZ", p, 0)?;
        Ok(Gate::PauliZ)
    });
    table.insert("Hadamard", |p| {
        fixed_params("Hadamard", p, 0)?;
        Ok(Gate::Hadamard)
    });
    table.insert("S", |p| {
        fixed_params("S", p, 0)?;
        Ok(Gate::S)
    });
    table.insert("T", |p| {
        fixed_params("T", p, 0)?;
        Ok(Gate::T)
    });
    table.insert("RX", |p| {
        fixed_params("RX", p, 1)?;
        Ok(Gate::rotation_x(p[0]))
    });
    table.insert("RY", |p| {
        fixed_params("RY", p, 1)?;
        Ok(Gate::rotation_y(p[0]))
    });
    table.insert("RZ", |p| {
        fixed_params("RZ", p, 1)?;
        Ok(Gate::rotation_z(p[0]))
    });
    table.insert("PhaseShift", |p| {
        fixed_params("PhaseShift", p, 1)?;
        Ok(Gate::phase_shift(p[0]))
    });
    table.insert("Rot", |p| {
        fixed_params("Rot", p, 3)?;
        Ok(Gate::rot(p[0], p[1], p[2]))
    });
    table.insert("CNOT", |p| {
        fixed_params("CNOT", p, 0)?;
        Ok(Gate::CNot)
    });
    table.insert("SWAP", |p| {
        fixed_params("SWAP", p, 0)?;
        Ok(Gate::Swap)
    });
    table.insert("CZ", |p| {
        fixed_params("CZ", p, 0)?;
        Ok(Gate::CZ)
    });
    table.insert("CRX", |p| {
        fixed_params("CRX", p, 1)?;
        Ok(Gate::controlled_rotation_x(p[0]))
    });
    table.insert("CRY", |p| {
        fixed_params("CRY", p, 1)?;
        Ok(Gate::controlled_rotation_y(p[0]))
    });
    table.insert("CRZ", |p| {
        fixed_params("CRZ", p, 1)?;
        Ok(Gate::controlled_rotation_z(p[0]))
    });
    table.insert("CRot", |p| {
        fixed_params("CRot", p, 3)?;
        Ok(Gate::controlled_rot(p[0], p[1], p[2]))
    });
    table.insert("Toffoli", |p| {
        fixed_params("Toffoli", p, 0)?;
        Ok(Gate::Toffoli)
    });
    table.insert("CSWAP", |p| {
        fixed_params("CSWAP", p, 0)?;
        Ok(Gate::CSwap)
    });
    table.insert("QubitUnitary", Gate::qubit_unitary);
    table
});

/// Constructs a gate instance from its catalogue label and parameters.
pub fn construct_gate(label: &str, params: &[f64]) -> Result<Gate> {
    let constructor = DISPATCH_TABLE
        .get(label)
        .ok_or_else(|| GateError::UnknownGate(label.to_string()))?;
    constructor(params)
}
