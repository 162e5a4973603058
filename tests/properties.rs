//! Property-based tests for the derivative engine and the result domain.

use num_complex::Complex64;
use proptest::prelude::*;

use cylinder_functions::{Cylinder, Family, HankelKind, Value};

fn family() -> impl Strategy<Value = Family> {
    prop_oneof![
        Just(Family::J),
        Just(Family::Y),
        Just(Family::I),
        Just(Family::K),
        Just(Family::H(HankelKind::First)),
        Just(Family::H(HankelKind::Second)),
    ]
}

fn bits(v: Value<f64>) -> (u64, u64) {
    let z = v.to_complex();
    (z.re.to_bits(), z.im.to_bits())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn repeated_calls_are_bit_identical(
        f in family(),
        nu in -4.0f64..4.0,
        re in -8.0f64..8.0,
        im in -8.0f64..8.0,
        n in 0u32..4,
    ) {
        let c = Cylinder::native();
        let z = Complex64::new(re, im);
        let a = c.evaluate(f, nu, z.into(), n);
        let b = c.evaluate(f, nu, z.into(), n);
        prop_assert_eq!(a.map(bits), b.map(bits));
    }

    #[test]
    fn derivative_matches_central_difference(
        f in family(),
        nu in 0.0f64..3.0,
        x in 1.0f64..10.0,
        n in 1u32..4,
    ) {
        let c = Cylinder::native();
        let h = 1e-5;
        let at = |t: f64, k: u32| c.evaluate(f, nu, Complex64::new(t, 0.5).into(), k).unwrap().to_complex();
        let exact = at(x, n);
        let estimate = (at(x + h, n - 1) - at(x - h, n - 1)) / (2.0 * h);
        let scale = exact.norm().max(1.0);
        prop_assert!(
            (exact - estimate).norm() <= 1e-6 * scale,
            "{f}_{nu}^({n})({x}+0.5i): {exact} vs {estimate}"
        );
    }

    #[test]
    fn real_derivative_matches_central_difference(
        f in prop_oneof![Just(Family::J), Just(Family::Y), Just(Family::I), Just(Family::K)],
        nu in -4.0f64..4.0,
        x in 1.0f64..10.0,
        n in 1u32..4,
    ) {
        let c = Cylinder::native();
        let h = 1e-5;
        let at = |t: f64, k: u32| c.evaluate(f, nu, t.into(), k).unwrap().re();
        let exact = at(x, n);
        let estimate = (at(x + h, n - 1) - at(x - h, n - 1)) / (2.0 * h);
        let scale = exact.abs().max(1.0);
        prop_assert!(
            (exact - estimate).abs() <= 1e-6 * scale,
            "{f}_{nu}^({n})({x}): {exact} vs {estimate}"
        );
    }

    #[test]
    fn hankel_is_always_complex(
        nu in -4.0f64..4.0,
        x in -10.0f64..10.0,
        n in 0u32..5,
        second in any::<bool>(),
    ) {
        let kind = if second { HankelKind::Second } else { HankelKind::First };
        let c = Cylinder::native();
        if let Ok(v) = c.besselh(nu, kind, x, n) {
            prop_assert!(matches!(v, Value::Complex(_)));
        }
    }

    #[test]
    fn real_argument_gives_real_value(
        nu in -4.0f64..4.0,
        x in -10.0f64..10.0,
        n in 0u32..5,
    ) {
        let c = Cylinder::native();
        for f in [Family::J, Family::Y, Family::I, Family::K] {
            if let Ok(v) = c.evaluate(f, nu, x.into(), n) {
                prop_assert!(matches!(v, Value::Real(_)));
            }
        }
    }
}
