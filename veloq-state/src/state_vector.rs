//! State vector over managed or borrowed amplitude storage
//!
//! One type covers both lifecycles: the managed form owns an aligned
//! buffer and frees it on drop; the raw form borrows a caller-owned slice
//! and never frees. Gates mutate the amplitudes in place through the
//! typed apply entry points; the norm is not maintained by the vector
//! itself.

use std::fmt;

use veloq_core::{exp2, Amplitude, ONE};
use veloq_gates::{construct_gate, Gate, GateError, Generator};

use crate::aligned::AlignedBuffer;
use crate::error::{Result, StateError};
use crate::indices::index_sets;

/// Largest managed register (2^30 amplitudes, 16 GiB of f64 pairs).
const MAX_QUBITS: usize = 30;

enum Storage<'a> {
    Managed(AlignedBuffer),
    Raw(&'a mut [Amplitude]),
}

/// An n-qubit register of 2^n complex amplitudes.
///
/// Amplitude `i` is the coefficient of the computational basis state whose
/// wire-j bit is `(i >> (n − 1 − j)) & 1`; wire 0 is the most-significant
/// bit.
///
/// # Example
///
/// ```
/// use veloq_state::StateVector;
///
/// let mut state = StateVector::new(2).unwrap();
/// state.apply_operation("Hadamard", &[0], false, &[]).unwrap();
/// assert!((state.norm() - 1.0).abs() < 1e-10);
/// ```
pub struct StateVector<'a> {
    num_qubits: usize,
    storage: Storage<'a>,
}

impl StateVector<'static> {
    /// Creates a managed state initialised to |0…0⟩.
    pub fn new(num_qubits: usize) -> Result<Self> {
        check_managed_size(num_qubits)?;
        let mut buffer = AlignedBuffer::zeroed(exp2(num_qubits))?;
        buffer.as_mut_slice()[0] = ONE;
        Ok(Self {
            num_qubits,
            storage: Storage::Managed(buffer),
        })
    }

    /// Creates a managed state from existing amplitude data.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Amplitude]) -> Result<Self> {
        check_managed_size(num_qubits)?;
        let expected = exp2(num_qubits);
        if amplitudes.len() != expected {
            return Err(StateError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }
        let mut buffer = AlignedBuffer::zeroed(expected)?;
        buffer.as_mut_slice().copy_from_slice(amplitudes);
        Ok(Self {
            num_qubits,
            storage: Storage::Managed(buffer),
        })
    }
}

impl<'a> StateVector<'a> {
    /// Wraps a caller-owned amplitude buffer without taking ownership.
    ///
    /// The length must be a power of two and at least 2; the qubit count
    /// is inferred from it.
    pub fn from_mut_slice(amplitudes: &'a mut [Amplitude]) -> Result<Self> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(StateError::LengthNotPowerOfTwo { len });
        }
        Ok(Self {
            num_qubits: len.trailing_zeros() as usize,
            storage: Storage::Raw(amplitudes),
        })
    }

    /// Number of qubits in the register.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension, 2^n.
    #[inline]
    pub fn dimension(&self) -> usize {
        exp2(self.num_qubits)
    }

    /// The amplitudes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Amplitude] {
        match &self.storage {
            Storage::Managed(buffer) => buffer.as_slice(),
            Storage::Raw(slice) => slice,
        }
    }

    /// The amplitudes as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Amplitude] {
        match &mut self.storage {
            Storage::Managed(buffer) => buffer.as_mut_slice(),
            Storage::Raw(slice) => slice,
        }
    }

    /// Raw amplitude pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const Amplitude {
        self.as_slice().as_ptr()
    }

    /// Raw mutable amplitude pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut Amplitude {
        self.as_mut_slice().as_mut_ptr()
    }

    /// L2 norm of the state.
    pub fn norm(&self) -> f64 {
        self.as_slice()
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Resets the state to |0…0⟩.
    pub fn reset(&mut self) {
        let amplitudes = self.as_mut_slice();
        amplitudes.fill(veloq_core::ZERO);
        amplitudes[0] = ONE;
    }

    /// Copies this state into a new managed vector.
    pub fn to_managed(&self) -> Result<StateVector<'static>> {
        StateVector::from_amplitudes(self.num_qubits, self.as_slice())
    }

    /// Overwrites this state's amplitudes with another's.
    pub fn copy_from(&mut self, other: &StateVector<'_>) -> Result<()> {
        if other.dimension() != self.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        self.as_mut_slice().copy_from_slice(other.as_slice());
        Ok(())
    }

    /// Resolves a gate by label and applies it to the given wires.
    pub fn apply_operation(
        &mut self,
        label: &str,
        wires: &[usize],
        inverse: bool,
        params: &[f64],
    ) -> Result<()> {
        let gate = construct_gate(label, params)?;
        self.apply_gate(&gate, wires, inverse)
    }

    /// Applies an already-constructed gate to the given wires.
    pub fn apply_gate(&mut self, gate: &Gate, wires: &[usize], inverse: bool) -> Result<()> {
        if gate.num_qubits() != wires.len() {
            return Err(StateError::Gate(GateError::ArityMismatch {
                gate: gate.label().to_string(),
                expected: gate.num_qubits(),
                actual: wires.len(),
            }));
        }
        self.check_wires(wires)?;
        let (internal, external) = index_sets(wires, self.num_qubits);
        gate.apply(self.as_mut_slice(), &internal, &external, inverse);
        Ok(())
    }

    /// Applies a gate generator to the given wires.
    pub fn apply_generator(&mut self, generator: Generator, wires: &[usize]) -> Result<()> {
        self.check_wires(wires)?;
        let (internal, external) = index_sets(wires, self.num_qubits);
        generator.apply(self.as_mut_slice(), &internal, &external);
        Ok(())
    }

    fn check_wires(&self, wires: &[usize]) -> Result<()> {
        for &wire in wires {
            if wire >= self.num_qubits {
                return Err(StateError::InvalidQubitIndex {
                    index: wire,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }
}

fn check_managed_size(num_qubits: usize) -> Result<()> {
    if num_qubits == 0 {
        return Err(StateError::InvalidQubitCount);
    }
    if num_qubits > MAX_QUBITS {
        return Err(StateError::TooManyQubits {
            num_qubits,
            max_qubits: MAX_QUBITS,
        });
    }
    Ok(())
}

impl PartialEq for StateVector<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits == other.num_qubits && self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for StateVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVector")
            .field("num_qubits", &self.num_qubits)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for StateVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num_qubits={}", self.num_qubits)?;
        write!(f, "data=[")?;
        for (i, amplitude) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", amplitude)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use veloq_core::ZERO;

    #[test]
    fn new_state_is_ground_state() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.dimension(), 8);
        assert_eq!(state.as_slice()[0], ONE);
        assert!(state.as_slice()[1..].iter().all(|&a| a == ZERO));
    }

    #[test]
    fn zero_qubits_is_rejected() {
        assert_eq!(
            StateVector::new(0).unwrap_err(),
            StateError::InvalidQubitCount
        );
    }

    #[test]
    fn oversized_register_is_rejected() {
        assert!(matches!(
            StateVector::new(31).unwrap_err(),
            StateError::TooManyQubits { .. }
        ));
    }

    #[test]
    fn from_amplitudes_validates_length() {
        let err = StateVector::from_amplitudes(2, &[ONE]).unwrap_err();
        assert_eq!(
            err,
            StateError::DimensionMismatch {
                expected: 4,
                actual: 1,
            }
        );
    }

    #[test]
    fn raw_variant_borrows_without_copy() {
        let mut buffer = vec![ONE, ZERO, ZERO, ZERO];
        {
            let mut state = StateVector::from_mut_slice(&mut buffer).unwrap();
            assert_eq!(state.num_qubits(), 2);
            state.apply_operation("PauliX", &[1], false, &[]).unwrap();
        }
        // mutation is visible in the caller's buffer
        assert_eq!(buffer[0], ZERO);
        assert_eq!(buffer[1], ONE);
    }

    #[test]
    fn raw_variant_rejects_odd_lengths() {
        let mut buffer = vec![ONE, ZERO, ZERO];
        assert_eq!(
            StateVector::from_mut_slice(&mut buffer).unwrap_err(),
            StateError::LengthNotPowerOfTwo { len: 3 }
        );
    }

    #[test]
    fn apply_operation_pauli_x_flips_wire_zero() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_operation("PauliX", &[0], false, &[]).unwrap();
        // wire 0 is the most-significant bit: |00⟩ → |10⟩ (index 2)
        assert_eq!(state.as_slice()[2], ONE);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let mut state = StateVector::new(2).unwrap();
        let err = state
            .apply_operation("CNOT", &[0], false, &[])
            .unwrap_err();
        assert!(matches!(
            err,
            StateError::Gate(GateError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn out_of_range_wire_is_rejected() {
        let mut state = StateVector::new(1).unwrap();
        let err = state
            .apply_operation("PauliX", &[1], false, &[])
            .unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidQubitIndex {
                index: 1,
                num_qubits: 1,
            }
        );
    }

    #[test]
    fn equality_is_element_wise() {
        let a = StateVector::new(2).unwrap();
        let b = StateVector::new(2).unwrap();
        assert_eq!(a, b);

        let mut c = StateVector::new(2).unwrap();
        c.apply_operation("Hadamard", &[0], false, &[]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn copy_and_reset_round_trip() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_operation("Hadamard", &[1], false, &[]).unwrap();
        let copy = state.to_managed().unwrap();
        assert_eq!(state, copy);

        state.reset();
        assert_eq!(state.as_slice()[0], ONE);
        state.copy_from(&copy).unwrap();
        assert_eq!(state, copy);
    }

    #[test]
    fn norm_is_preserved_by_gates() {
        let mut state = StateVector::new(3).unwrap();
        state.apply_operation("Hadamard", &[0], false, &[]).unwrap();
        state
            .apply_operation("RX", &[1], false, &[0.7])
            .unwrap();
        state.apply_operation("CNOT", &[0, 2], false, &[]).unwrap();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn display_lists_amplitudes() {
        let state = StateVector::new(1).unwrap();
        let rendered = format!("{}", state);
        assert!(rendered.starts_with("num_qubits=1"));
        assert!(rendered.contains("data=["));
    }
}
