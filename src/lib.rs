//! Cylinder functions of real and complex argument, with argument derivatives.
//!
//! Bessel functions of the first kind (J), second kind (Y), modified first
//! kind (I), modified second kind (K) and Hankel functions (H1, H2), each
//! with its n-th derivative in the argument, plus ln Γ on the real line.
//!
//! A real argument gives a real value for J, Y, I and K (NaN where the
//! function is complex-valued); a complex argument gives a complex value.
//! Hankel functions are always complex.
//!
//! ```
//! use cylinder_functions::{besselj, besselh, HankelKind, Value};
//! use num_complex::Complex64;
//!
//! let j = besselj(0.0, 0.0_f64, 0).unwrap();
//! assert_eq!(j, Value::Real(1.0));
//!
//! // J_0'(x) = -J_1(x)
//! let d = besselj(0.0, 2.0_f64, 1).unwrap().re();
//! let j1 = besselj(1.0, 2.0_f64, 0).unwrap().re();
//! assert!((d + j1).abs() < 1e-15);
//!
//! let h = besselh(0.5, HankelKind::First, Complex64::new(1.0, 1.0), 0).unwrap();
//! assert!(h.as_complex().is_some());
//! ```
//!
//! The numerical work sits behind the [`Kernel`] trait. [`NativeKernel`]
//! ships with the crate; [`Cylinder`] accepts any other implementation.
//!
//! # Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: float math through `libm` for `no_std` targets.

#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod algo;
pub(crate) mod besh;
pub(crate) mod besi;
pub(crate) mod besj;
pub(crate) mod besk;
pub(crate) mod besy;
pub(crate) mod half;
pub mod classify;
pub mod dispatch;
pub mod kernel;
pub mod machine;
pub mod policy;
pub mod recurrence;
pub mod types;
pub(crate) mod utils;

pub use classify::{OrderClass, Path};
pub use dispatch::Cylinder;
pub use kernel::{Kernel, NativeKernel};
pub use machine::BesselFloat;
pub use recurrence::MAX_DERIVATIVE;
pub use types::{Argument, Error, Family, HankelKind, Value};

const NATIVE: Cylinder<NativeKernel> = Cylinder::native();

/// n-th derivative of the Bessel function of the first kind, J_ν(z).
///
/// # Example
///
/// ```
/// use cylinder_functions::besselj;
///
/// // J_1(2) = 0.5767248077568734
/// let v = besselj(1.0, 2.0_f64, 0).unwrap().re();
/// assert!((v - 0.5767248077568734).abs() < 1e-14);
/// ```
pub fn besselj<T: BesselFloat>(nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error> {
    NATIVE.besselj(nu, z, n)
}

/// n-th derivative of the Bessel function of the second kind, Y_ν(z).
pub fn bessely<T: BesselFloat>(nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error> {
    NATIVE.bessely(nu, z, n)
}

/// n-th derivative of the modified Bessel function of the first kind, I_ν(z).
pub fn besseli<T: BesselFloat>(nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error> {
    NATIVE.besseli(nu, z, n)
}

/// n-th derivative of the modified Bessel function of the second kind, K_ν(z).
pub fn besselk<T: BesselFloat>(nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error> {
    NATIVE.besselk(nu, z, n)
}

/// n-th derivative of the Hankel function H_ν^(kind)(z).
///
/// The result is always [`Value::Complex`].
pub fn besselh<T: BesselFloat>(
    nu: T,
    kind: HankelKind,
    z: impl Into<Argument<T>>,
    n: u32,
) -> Result<Value<T>, Error> {
    NATIVE.besselh(nu, kind, z, n)
}

/// ln Γ(x) for real x.
///
/// +∞ at the poles (0, -1, -2, …), NaN where Γ(x) < 0.
pub fn lngamma<T: BesselFloat>(x: T) -> Result<T, Error> {
    NATIVE.lngamma(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn free_functions_use_native_kernel() {
        let c = Cylinder::native();
        let z = Complex64::new(1.5, -0.5);
        assert_eq!(besselj(0.7, z, 2), c.besselj(0.7, z, 2));
        assert_eq!(bessely(0.7, 3.0, 1), c.bessely(0.7, 3.0, 1));
        assert_eq!(besseli(-0.7, z, 0), c.besseli(-0.7, z, 0));
        assert_eq!(besselk(2.0, 0.5, 3), c.besselk(2.0, 0.5, 3));
        assert_eq!(
            besselh(1.0, HankelKind::Second, z, 1),
            c.besselh(1.0, HankelKind::Second, z, 1)
        );
        assert_eq!(lngamma(7.5), c.lngamma(7.5));
    }

    #[test]
    fn single_precision() {
        // J_0(1) = 0.7651976865579666
        let v = besselj(0.0_f32, 1.0_f32, 0).unwrap().re();
        assert!((v - 0.765_197_7).abs() < 1e-6);
        let v = besselk(0.5_f32, Complex32::new(1.0, 0.0), 0).unwrap();
        assert!(v.as_complex().is_some());
        assert_eq!(lngamma(3.0_f32), Ok(2.0_f32.ln()));
    }

    #[test]
    fn hankel_kind_from_integer_selector() {
        let kind = HankelKind::try_from(1).unwrap();
        let v = besselh(0.0_f64, kind, 1.0, 0).unwrap();
        let j: f64 = besselj(0.0, 1.0, 0).unwrap().re();
        let y: f64 = bessely(0.0, 1.0, 0).unwrap().re();
        assert!((v.re() - j).abs() < 1e-14);
        assert!((v.im() - y).abs() < 1e-14);
    }
}
