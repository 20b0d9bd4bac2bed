//! Amplitude precision configuration and global constants

use num_complex::Complex;

/// Floating-point precision of all amplitude data.
///
/// The simulator is built for one precision at a time; retarget this alias
/// to `f32` for a single-precision kernel.
pub type Precision = f64;

/// A single state-vector amplitude.
pub type Amplitude = Complex<Precision>;

/// 1/√2, the Hadamard normalisation factor.
pub const SQRT2_INV: Precision = std::f64::consts::FRAC_1_SQRT_2;

/// Complex zero.
pub const ZERO: Amplitude = Amplitude::new(0.0, 0.0);

/// Complex one.
pub const ONE: Amplitude = Amplitude::new(1.0, 0.0);

/// The imaginary unit.
pub const IMAG: Amplitude = Amplitude::new(0.0, 1.0);

/// e^{iπ/4}, the T-gate phase shift.
pub const PHASE_PI_4: Amplitude = Amplitude::new(SQRT2_INV, SQRT2_INV);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn phase_pi_4_matches_euler_form() {
        let phase = Amplitude::from_polar(1.0, std::f64::consts::FRAC_PI_4);
        assert_relative_eq!(PHASE_PI_4.re, phase.re, epsilon = 1e-15);
        assert_relative_eq!(PHASE_PI_4.im, phase.im, epsilon = 1e-15);
    }

    #[test]
    fn imag_squares_to_minus_one() {
        assert_eq!(IMAG * IMAG, Amplitude::new(-1.0, 0.0));
    }
}
