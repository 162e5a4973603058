//! Zero-derivative evaluators behind the dispatcher.
//!
//! [`Kernel`] is the seam between the derivative/policy layer and the
//! numerical routines. [`NativeKernel`] implements it with the routines in
//! this crate; any other evaluator (a binding to a system library, a
//! counting wrapper in tests) can be substituted.

use num_complex::Complex;

use crate::algo::constants::FRAC_2_PI;
use crate::algo::gamln::gamln;
use crate::besh::zbesh;
use crate::besi::zbesi;
use crate::besj::zbesj;
use crate::besk::zbesk;
use crate::besy::zbesy;
use crate::classify::OrderClass;
use crate::half::zhalf;
use crate::machine::BesselFloat;
use crate::types::{Error, Family, HankelKind};
use crate::utils::{cis_pi, cospi, sinpi};

/// Order-ν, derivative-0 evaluation of the cylinder function families.
pub trait Kernel<T: BesselFloat> {
    /// Evaluate `family` of order `nu` at the complex argument `z`.
    fn evaluate(&self, family: Family, nu: T, z: Complex<T>) -> Result<Complex<T>, Error>;

    /// Evaluate J, Y, I or K of order `nu` at the real argument `x`.
    ///
    /// Called only where the function is real-valued; for other points the
    /// result is implementation-defined (the native kernel returns NaN).
    fn evaluate_real(&self, family: Family, nu: T, x: T) -> Result<T, Error>;

    /// ln Γ(x) for x > 0.
    fn ln_gamma(&self, x: T) -> Result<T, Error>;
}

/// The built-in evaluator.
///
/// Non-negative orders go to the upper interfaces (`zbesj`, `zbesy`, …),
/// half-integer orders first to their elementary closed forms; negative
/// orders are reflected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeKernel;

impl<T: BesselFloat> Kernel<T> for NativeKernel {
    fn evaluate(&self, family: Family, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
        let nan = T::nan();
        if !nu.is_finite() || !z.re.is_finite() || !z.im.is_finite() {
            return Ok(Complex::new(nan, nan));
        }

        let value = if nu >= T::zero() {
            positive_order(family, nu, z)?
        } else {
            reflect(family, -nu, |f| positive_order(f, -nu, z))?
        };

        let at_origin = z.re == T::zero() && z.im == T::zero();
        if !at_origin && !(value.re.is_finite() && value.im.is_finite()) {
            return Err(Error::Overflow);
        }
        Ok(value)
    }

    fn evaluate_real(&self, family: Family, nu: T, x: T) -> Result<T, Error> {
        let zero = T::zero();
        if nu.is_nan() || x.is_nan() {
            return Ok(T::nan());
        }
        if let Family::H(_) = family {
            return Err(Error::Domain);
        }

        if x < zero {
            // J_n(-x) = (-1)^n J_n(x), I_n(-x) = (-1)^n I_n(x)
            let integer_order = nu == nu.floor();
            return match family {
                Family::J | Family::I if integer_order => {
                    let v = self.evaluate_real(family, nu, -x)?;
                    let odd = (nu * T::from_f64(0.5)).fract() != zero;
                    Ok(if odd { -v } else { v })
                }
                _ => Ok(T::nan()),
            };
        }

        if x == zero {
            let lifted = if nu >= zero {
                origin_limit(family, nu)
            } else {
                reflect(family, -nu, |f| Ok(origin_limit(f, -nu)))?
            };
            return Ok(lifted.re);
        }

        if x.is_infinite() {
            return Ok(match family {
                Family::I => T::infinity(),
                _ => zero,
            });
        }

        Ok(self.evaluate(family, nu, Complex::new(x, zero))?.re)
    }

    fn ln_gamma(&self, x: T) -> Result<T, Error> {
        gamln(x)
    }
}

/// Dispatch a non-negative order to the family's upper interface.
fn positive_order<T: BesselFloat>(
    family: Family,
    fnu: T,
    z: Complex<T>,
) -> Result<Complex<T>, Error> {
    if OrderClass::of(fnu) == OrderClass::HalfInteger {
        if let Some(v) = zhalf(family, fnu, z) {
            return Ok(v);
        }
    }
    match family {
        Family::J => zbesj(z, fnu),
        Family::Y => zbesy(z, fnu),
        Family::I => zbesi(z, fnu),
        Family::K => zbesk(z, fnu),
        Family::H(kind) => zbesh(z, fnu, kind),
    }
}

/// One-sided limits at x = 0+ for fnu ≥ 0, as real values lifted to complex.
fn origin_limit<T: BesselFloat>(family: Family, fnu: T) -> Complex<T> {
    let zero = T::zero();
    let v = match family {
        Family::J | Family::I => {
            if fnu == zero {
                T::one()
            } else {
                zero
            }
        }
        Family::Y => T::neg_infinity(),
        Family::K => T::infinity(),
        Family::H(_) => T::nan(),
    };
    Complex::new(v, zero)
}

/// Evaluate order -mu (mu > 0) from order mu:
///
/// - J_{-μ} = cos(πμ) J_μ - sin(πμ) Y_μ
/// - Y_{-μ} = sin(πμ) J_μ + cos(πμ) Y_μ
/// - I_{-μ} = I_μ + (2/π) sin(πμ) K_μ
/// - K_{-μ} = K_μ
/// - H1_{-μ} = e^{iπμ} H1_μ, H2_{-μ} = e^{-iπμ} H2_μ
///
/// A term whose trigonometric factor is exactly zero is not evaluated, so
/// integer and half-integer orders never form 0·∞.
fn reflect<T, F>(family: Family, mu: T, mut positive: F) -> Result<Complex<T>, Error>
where
    T: BesselFloat,
    F: FnMut(Family) -> Result<Complex<T>, Error>,
{
    let zero = T::zero();
    let czero = Complex::new(zero, zero);
    let c = cospi(mu);
    let s = sinpi(mu);

    match family {
        Family::J => {
            let mut v = czero;
            if c != zero {
                v = v + positive(Family::J)? * c;
            }
            if s != zero {
                v = v - positive(Family::Y)? * s;
            }
            Ok(v)
        }
        Family::Y => {
            let mut v = czero;
            if s != zero {
                v = v + positive(Family::J)? * s;
            }
            if c != zero {
                v = v + positive(Family::Y)? * c;
            }
            Ok(v)
        }
        Family::I => {
            let mut v = positive(Family::I)?;
            if s != zero {
                // K_μ is negligible against I_μ once it underflows
                match positive(Family::K) {
                    Ok(k) => v = v + k * (T::from_f64(FRAC_2_PI) * s),
                    Err(Error::Underflow) => {}
                    Err(e) => return Err(e),
                }
            }
            Ok(v)
        }
        Family::K => positive(Family::K),
        Family::H(kind) => {
            let h = positive(family)?;
            let phase = match kind {
                HankelKind::First => cis_pi(mu),
                HankelKind::Second => cis_pi(mu).conj(),
            };
            Ok(h * phase)
        }
    }
}
