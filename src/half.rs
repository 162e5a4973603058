//! Elementary closed forms at half-integer orders.
//!
//! With w = √(2/(πz)), the order-1/2 functions are
//!
//! - J = w sin z, Y = -w cos z
//! - I = w sinh z, K = (π/2) w e^{-z}
//! - H(1) = -i w e^{iz}, H(2) = i w e^{-iz}
//!
//! and the order -1/2 partners are w cos z, w sin z, w cosh z, K, w e^{iz}
//! and w e^{-iz}. Higher orders come from the three-term recurrence in the
//! order, run upward only where the wanted function is the dominant
//! solution.

use num_complex::Complex;

use crate::algo::constants::{FRAC_2_PI, PI};
use crate::machine::BesselFloat;
use crate::types::{Family, HankelKind};
use crate::utils::{mul_i, mul_neg_i};

/// Largest number of recurrence steps above order 1/2.
const MAX_STEPS: usize = 32;

/// Compute `family` at the half-integer order `fnu` ≥ 1/2 in closed form.
///
/// Returns `None` when the upward recurrence would lose accuracy, at
/// z = 0 and when the result is not finite; the caller then uses the
/// general routine.
pub(crate) fn zhalf<T: BesselFloat>(family: Family, fnu: T, z: Complex<T>) -> Option<Complex<T>> {
    let zero = T::zero();
    let half = T::from_f64(0.5);

    if fnu < half || (z.re == zero && z.im == zero) {
        return None;
    }
    let steps = (fnu - half).to_usize()?;
    if steps > MAX_STEPS || (steps > 0 && !upward_stable(family, fnu, z)) {
        return None;
    }

    // a signed zero imaginary part is the upper side of the cut
    let z = Complex::new(z.re, if z.im == zero { zero } else { z.im });
    let w = Complex::from(T::from_f64(FRAC_2_PI).sqrt()) / z.sqrt();
    let (mut lo, mut hi) = match family {
        Family::J => (w * z.cos(), w * z.sin()),
        Family::Y => (w * z.sin(), -(w * z.cos())),
        Family::I => (w * z.cosh(), w * z.sinh()),
        Family::K => {
            let k = w * (-z).exp() * T::from_f64(PI * 0.5);
            (k, k)
        }
        Family::H(HankelKind::First) => {
            let e = w * mul_i(z).exp();
            (e, mul_neg_i(e))
        }
        Family::H(HankelKind::Second) => {
            let e = w * mul_neg_i(z).exp();
            (e, mul_i(e))
        }
    };

    let rz = Complex::from(T::from_f64(2.0)) / z;
    let mut order = half;
    for _ in 0..steps {
        let next = match family {
            // K_{ν+1} = K_{ν-1} + (2ν/z) K_ν
            Family::K => lo + rz * order * hi,
            // C_{ν+1} = (2ν/z) C_ν - C_{ν-1}
            _ => rz * order * hi - lo,
        };
        lo = hi;
        hi = next;
        order = order + T::one();
    }

    (hi.re.is_finite() && hi.im.is_finite()).then_some(hi)
}

/// Regions where `family` grows with the order, so the recurrence is stable.
fn upward_stable<T: BesselFloat>(family: Family, fnu: T, z: Complex<T>) -> bool {
    let zero = T::zero();
    let positive_axis = z.im == zero && z.re > zero;
    match family {
        Family::J => positive_axis && z.re >= fnu,
        Family::Y => positive_axis,
        Family::I => false,
        Family::K => z.re >= zero,
        Family::H(HankelKind::First) => z.im >= zero,
        Family::H(HankelKind::Second) => z.im <= zero,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::besh::zbesh;
    use crate::besi::zbesi;
    use crate::besj::zbesj;
    use crate::besk::zbesk;
    use crate::besy::zbesy;
    use crate::types::Error;
    use num_complex::Complex64;

    const FAMILIES: [Family; 6] = [
        Family::J,
        Family::Y,
        Family::I,
        Family::K,
        Family::H(HankelKind::First),
        Family::H(HankelKind::Second),
    ];

    fn general(family: Family, fnu: f64, z: Complex64) -> Result<Complex64, Error> {
        match family {
            Family::J => zbesj(z, fnu),
            Family::Y => zbesy(z, fnu),
            Family::I => zbesi(z, fnu),
            Family::K => zbesk(z, fnu),
            Family::H(kind) => zbesh(z, fnu, kind),
        }
    }

    fn rel(a: Complex64, b: Complex64) -> f64 {
        (a - b).norm() / b.norm()
    }

    #[test]
    fn order_one_half_everywhere() {
        let points = [
            Complex64::new(0.3, 0.0),
            Complex64::new(2.0, 1.0),
            Complex64::new(-2.0, 1.0),
            Complex64::new(-1.5, -0.7),
            Complex64::new(0.4, -3.0),
            Complex64::new(-4.0, 0.0),
        ];
        for f in FAMILIES {
            for z in points {
                let v = zhalf(f, 0.5, z).unwrap();
                let g = general(f, 0.5, z).unwrap();
                assert!(rel(v, g) < 1e-13, "{f}_0.5({z}): {v} vs {g}");
            }
        }
    }

    #[test]
    fn recurrence_on_positive_axis() {
        for x in [0.2, 1.0, 3.7, 12.0, 40.0] {
            let z = Complex64::new(x, 0.0);
            for fnu in [1.5, 2.5, 5.5, 10.5] {
                for f in [Family::Y, Family::K, Family::H(HankelKind::First)] {
                    let v = zhalf(f, fnu, z).unwrap();
                    let g = general(f, fnu, z).unwrap();
                    assert!(rel(v, g) < 1e-13, "{f}_{fnu}({x}): {v} vs {g}");
                }
                if x >= fnu {
                    let v = zhalf(Family::J, fnu, z).unwrap();
                    let g = general(Family::J, fnu, z).unwrap();
                    // J may sit near a zero, so compare against |H|
                    let scale = general(Family::H(HankelKind::First), fnu, z).unwrap().norm();
                    assert!((v - g).norm() < 1e-13 * scale, "J_{fnu}({x}): {v} vs {g}");
                }
            }
        }
    }

    #[test]
    fn recurrence_in_decaying_half_planes() {
        for z in [Complex64::new(1.0, 0.4), Complex64::new(3.0, 5.0), Complex64::new(0.5, -2.0)] {
            let v = zhalf(Family::K, 7.5, z).unwrap();
            assert!(rel(v, zbesk(z, 7.5).unwrap()) < 1e-13);
        }
        let z = Complex64::new(-2.0, 1.5);
        let v = zhalf(Family::H(HankelKind::First), 4.5, z).unwrap();
        assert!(rel(v, zbesh(z, 4.5, HankelKind::First).unwrap()) < 1e-13);
        let v = zhalf(Family::H(HankelKind::Second), 4.5, z.conj()).unwrap();
        assert!(rel(v, zbesh(z.conj(), 4.5, HankelKind::Second).unwrap()) < 1e-13);
    }

    #[test]
    fn unstable_regions_are_declined() {
        // I is recessive in the order
        assert_eq!(zhalf(Family::I, 1.5, Complex64::new(5.0, 0.0)), None);
        // J below the turning point
        assert_eq!(zhalf(Family::J, 3.5, Complex64::new(1.0, 0.0)), None);
        // Y and J off the real axis
        assert_eq!(zhalf(Family::Y, 9.5, Complex64::new(0.2, -6.0)), None);
        assert_eq!(zhalf(Family::J, 1.5, Complex64::new(4.0, 1.0)), None);
        // K in the left half-plane, H(1) below the axis
        assert_eq!(zhalf(Family::K, 2.5, Complex64::new(-7.0, 0.4)), None);
        assert_eq!(zhalf(Family::H(HankelKind::First), 2.5, Complex64::new(1.0, -1.0)), None);
        // too many steps
        assert_eq!(zhalf(Family::K, 40.5, Complex64::new(50.0, 0.0)), None);
    }

    #[test]
    fn zero_and_overflow_fall_back() {
        let origin = Complex64::new(0.0, 0.0);
        assert_eq!(zhalf(Family::J, 0.5, origin), None);
        assert_eq!(zhalf(Family::K, 0.5, origin), None);
        assert_eq!(zhalf(Family::I, 0.5, Complex64::new(800.0, 0.0)), None);
    }

    #[test]
    fn signed_zero_imaginary_part() {
        let upper = zhalf(Family::K, 0.5, Complex64::new(-3.0, 0.0)).unwrap();
        let lower = zhalf(Family::K, 0.5, Complex64::new(-3.0, -0.0)).unwrap();
        assert_eq!(upper, lower);
        let g = zbesk(Complex64::new(-3.0, -0.0), 0.5).unwrap();
        assert!(rel(lower, g) < 1e-13);
    }
}
