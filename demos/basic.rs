use cylinder_functions::*;
use num_complex::Complex;

fn main() {
    let x = 2.5_f64;
    let z = Complex::new(1.0_f64, 2.0);

    // -- Real argument: real values --
    println!("=== Real argument (f64) ===");
    let j = besselj(0.5, x, 0).unwrap();
    println!("J_0.5({x}) = {j}");

    let y = bessely(1.0, x, 0).unwrap();
    println!("Y_1({x}) = {y}");

    let i = besseli(0.0, x, 0).unwrap();
    println!("I_0({x}) = {i}");

    let k = besselk(1.0, x, 0).unwrap();
    println!("K_1({x}) = {k}");

    // Hankel functions are complex even on the real axis
    let h1 = besselh(0.0, HankelKind::First, x, 0).unwrap();
    println!("H^(1)_0({x}) = {h1}");

    // -- Complex argument: complex values --
    println!("\n=== Complex argument ===");
    let j = besselj(0.5, z, 0).unwrap();
    println!("J_0.5({z}) = {j}");

    let h2 = besselh(0.0, HankelKind::Second, z, 0).unwrap();
    println!("H^(2)_0({z}) = {h2}");

    // -- Derivatives --
    println!("\n=== Derivatives ===");
    for n in 0..4 {
        let d = besselj(0.0, x, n).unwrap();
        println!("d^{n}/dx^{n} J_0({x}) = {d}");
    }
    let dj = besselj(0.0, x, 1).unwrap();
    let j1 = besselj(1.0, x, 0).unwrap();
    println!("J_0'({x}) = {dj}, -J_1({x}) = {}  (should be equal)", -j1.re());

    let dk = besselk(1.0, z, 2).unwrap();
    println!("K_1''({z}) = {dk}");

    // -- Negative order --
    println!("\n=== Negative order ===");
    let j_neg = besselj(-0.5, x, 0).unwrap();
    println!("J_-0.5({x}) = {j_neg}");

    let k_neg = besselk(-3.0, z, 0).unwrap();
    let k_pos = besselk(3.0, z, 0).unwrap();
    println!("K_-3({z}) = {k_neg}");
    println!("K_3({z})  = {k_pos}  (should be equal)");

    // -- Singular points and complex-valued real points --
    println!("\n=== Special points ===");
    println!("I_-1.5(0) = {}", besseli(-1.5, 0.0_f64, 0).unwrap());
    println!("Y_0'(0)   = {}", bessely(0.0, 0.0_f64, 1).unwrap());
    println!("Y_0(-2)   = {}  (complex-valued, so NaN)", bessely(0.0, -2.0_f64, 0).unwrap());
    println!("J_2(-2)   = {}", besselj(2.0, -2.0_f64, 0).unwrap());
    match besselk(0.0, Complex::new(0.0_f64, 0.0), 0) {
        Ok(v) => println!("K_0(0+0i) = {v}"),
        Err(e) => println!("K_0(0+0i): {e}"),
    }

    // -- Log gamma --
    println!("\n=== ln Gamma ===");
    for t in [0.5_f64, 7.3, -1.5, -2.5, -3.0] {
        println!("lngamma({t}) = {}", lngamma(t).unwrap());
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let j32 = besselj(0.5_f32, 2.5_f32, 1).unwrap();
    println!("J_0.5'(2.5) = {j32} (f32)");
}
