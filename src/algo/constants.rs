//! Shared constants used by multiple algorithm modules.
//!
//! Module-specific coefficient tables remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// 2/π
pub(crate) const FRAC_2_PI: f64 = 6.36619772367581343e-01;

/// ln(π)
pub(crate) const LN_PI: f64 = 1.14472988584940017e+00;

/// ln(2π)
pub(crate) const LN_2PI: f64 = 1.83787706640934548e+00;
