//! Machine constants and the `BesselFloat` trait.

use num_traits::Float;

/// Floating-point trait for cylinder function computation.
///
/// Implemented for `f64` and `f32`. Provides the machine constants and
/// derived thresholds used by the series, continued fractions and
/// asymptotic expansions.
pub trait BesselFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Upper bound on terms for any series or continued fraction.
    const MAX_ITERATIONS: usize;

    /// Infallible conversion from f64.
    ///
    /// All algorithm constants originate as f64 literals, so this
    /// conversion always succeeds for the supported types.
    fn from_f64(x: f64) -> Self;

    /// Relative truncation tolerance for series and continued fractions.
    fn tol() -> Self;
    /// Lower bound on |z| for the large-argument expansion of I.
    fn rl() -> Self;
    /// Largest x for which exp(-x) is still a normal number (less a margin).
    fn elim() -> Self;
}

impl BesselFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MAX_ITERATIONS: usize = 10_000;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn tol() -> f64 {
        2.220446049250313e-16
    }
    #[inline]
    fn rl() -> f64 {
        21.784271729432426
    } // 1.2*DIG + 3
    #[inline]
    fn elim() -> f64 {
        700.9217936944459
    }
}

#[allow(clippy::excessive_precision)]
impl BesselFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MAX_ITERATIONS: usize = 10_000;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn tol() -> f32 {
        1.1920929e-7
    }
    #[inline]
    fn rl() -> f32 {
        11.308427880325882
    } // 1.2*DIG + 3
    #[inline]
    fn elim() -> f32 {
        79.75001000176859
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_matches_core() {
        assert_eq!(<f64 as BesselFloat>::MACH_EPSILON, f64::EPSILON);
        assert_eq!(<f32 as BesselFloat>::MACH_EPSILON, f32::EPSILON);
        assert_eq!(<f64 as BesselFloat>::MACH_TINY, f64::MIN_POSITIVE);
    }

    #[test]
    fn exp_of_minus_elim_is_normal() {
        assert!((-f64::elim()).exp() >= f64::MIN_POSITIVE);
        assert!((-f32::elim()).exp() >= f32::MIN_POSITIVE);
    }
}
