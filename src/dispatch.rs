//! Caller-facing evaluation over an arbitrary [`Kernel`].

use log::debug;

use crate::algo::constants::LN_PI;
use crate::classify::{real_representable, Path};
use crate::kernel::{Kernel, NativeKernel};
use crate::machine::BesselFloat;
use crate::policy::reconcile;
use crate::recurrence::{derivative, MAX_DERIVATIVE};
use crate::types::{Argument, Error, Family, HankelKind, Value};
use crate::utils::sinpi;

/// Cylinder functions and their argument derivatives over a kernel `K`.
///
/// Every operation routes the argument once, builds the n-th derivative
/// from n+1 zero-derivative kernel calls, and reconciles each term and the
/// combined result at the known singular points.
///
/// ```
/// use cylinder_functions::{Cylinder, Value};
///
/// let c = Cylinder::native();
/// let v = c.besselj(0.0, 0.0_f64, 0).unwrap();
/// assert_eq!(v, Value::Real(1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cylinder<K> {
    kernel: K,
}

impl Cylinder<NativeKernel> {
    /// Dispatcher over the built-in kernel.
    pub const fn native() -> Self {
        Cylinder {
            kernel: NativeKernel,
        }
    }
}

impl<K> Cylinder<K> {
    /// Dispatcher over `kernel`.
    pub const fn new(kernel: K) -> Self {
        Cylinder { kernel }
    }

    /// The underlying kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// n-th derivative of `family` of order `nu` at `z`.
    ///
    /// # Errors
    /// - `Domain`: `n > MAX_DERIVATIVE`, or a point outside the domain that
    ///   is not a reconciled singular point
    /// - `Overflow`, `ConvergenceFailure`: passed through from the kernel
    pub fn evaluate<T>(
        &self,
        family: Family,
        nu: T,
        z: Argument<T>,
        n: u32,
    ) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        if n > MAX_DERIVATIVE {
            return Err(Error::Domain);
        }

        let path = Path::route(family, z);
        if let Path::Real(x) = path {
            if !real_representable(family, nu, x) {
                debug!("{family}_{nu:?}({x:?}) is complex-valued; returning NaN");
                return Ok(Value::Real(T::nan()));
            }
        }

        let raw = derivative(family, nu, n, |order| {
            reconcile(self.term(family, order, path), family, order, path, 0)
        });
        reconcile(raw, family, nu, path, n)
    }

    fn term<T>(&self, family: Family, nu: T, path: Path<T>) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        match path {
            Path::Real(x) => self.kernel.evaluate_real(family, nu, x).map(Value::Real),
            Path::Complex(z) => self.kernel.evaluate(family, nu, z).map(Value::Complex),
        }
    }

    /// d^n/dz^n J_ν(z).
    pub fn besselj<T>(&self, nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        self.evaluate(Family::J, nu, z.into(), n)
    }

    /// d^n/dz^n Y_ν(z).
    pub fn bessely<T>(&self, nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        self.evaluate(Family::Y, nu, z.into(), n)
    }

    /// d^n/dz^n I_ν(z).
    pub fn besseli<T>(&self, nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        self.evaluate(Family::I, nu, z.into(), n)
    }

    /// d^n/dz^n K_ν(z).
    pub fn besselk<T>(&self, nu: T, z: impl Into<Argument<T>>, n: u32) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        self.evaluate(Family::K, nu, z.into(), n)
    }

    /// d^n/dz^n H_ν^(kind)(z). Always complex, also for a real `z`.
    pub fn besselh<T>(
        &self,
        nu: T,
        kind: HankelKind,
        z: impl Into<Argument<T>>,
        n: u32,
    ) -> Result<Value<T>, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        self.evaluate(Family::H(kind), nu, z.into(), n)
    }

    /// ln Γ(x) on the whole real line.
    ///
    /// Negative non-integers use Γ(x)Γ(1-x) = π / sin(πx). Where Γ(x) < 0
    /// the logarithm is not real and NaN is returned; the poles at
    /// non-positive integers give +∞.
    pub fn lngamma<T>(&self, x: T) -> Result<T, Error>
    where
        T: BesselFloat,
        K: Kernel<T>,
    {
        let zero = T::zero();
        if x.is_nan() {
            return Ok(x);
        }
        if x > zero {
            if x.is_infinite() {
                return Ok(x);
            }
            return self.kernel.ln_gamma(x);
        }
        if x.is_infinite() {
            return Ok(T::nan());
        }

        let s = sinpi(x);
        if s == zero {
            debug!("lngamma({x:?}): pole");
            return Ok(T::infinity());
        }
        if s < zero {
            debug!("lngamma({x:?}): Γ(x) < 0");
            return Ok(T::nan());
        }
        let reflected = self.kernel.ln_gamma(T::one() - x)?;
        Ok(T::from_f64(LN_PI) - s.ln() - reflected)
    }
}
