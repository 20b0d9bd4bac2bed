//! Integer and vector math helpers shared by the gate kernels

use crate::types::Amplitude;

/// 2^n as the natural index type.
#[inline]
pub const fn exp2(n: usize) -> usize {
    1 << n
}

/// Decimal value of the bit owned by `qubit` in an `num_qubits`-wide
/// register, i.e. 2^(n−1−qubit). Wire 0 is the most-significant bit.
#[inline]
pub const fn max_decimal_for_qubit(qubit: usize, num_qubits: usize) -> usize {
    1 << (num_qubits - qubit - 1)
}

/// Inner product ⟨a|b⟩ = Σᵢ conj(a[i])·b[i].
///
/// The conjugate goes on the first argument; the adjoint-Jacobian engine
/// relies on this convention when it takes the imaginary part.
pub fn inner_product(a: &[Amplitude], b: &[Amplitude]) -> Amplitude {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x.conj() * y).sum()
}
