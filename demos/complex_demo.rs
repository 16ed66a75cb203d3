use numerics::prelude::*;

fn complex_operations<T: Real>(z1: Complex<T>, z2: Complex<T>) -> (Complex<T>, T, T) {
    let sum = z1 + z2;
    let length = z1.length();
    let phase = z1.phase();

    println!("z1 = {}", z1);
    println!("z2 = {}", z2);
    println!("z1 + z2 = {}", sum);
    println!("z1 / z2 = {}", z1 / z2);
    println!("|z1| = {}", length);
    println!("arg(z1) = {}", phase);
    println!("z1* = {}", z1.conj());
    println!("exp(z1) = {}", z1.exp());
    println!("ln(z1) = {}", z1.ln());
    println!("sqrt(z1) = {}", z1.sqrt());
    println!("sin(z1) = {}", z1.sin());

    (sum, length, phase)
}

fn main() {
    println!("=== Using Complex<f64> ===");
    complex_operations(Complex64::new(3.0, 4.0), Complex64::new(1.0, 2.0));

    println!("\n=== Using Complex<f32> ===");
    complex_operations(Complex32::new(3.0, 4.0), Complex32::new(1.0, 2.0));

    println!("\n=== Zero and infinity ===");
    let one = Complex64::ONE;
    println!("1 / 0 = {}", one / Complex64::ZERO);
    println!("1 / inf = {}", one / Complex64::INFINITY);
    println!(
        "(inf, 0) == (0, NaN): {}",
        Complex64::new(f64::INFINITY, 0.0) == Complex64::new(0.0, f64::NAN)
    );
    println!("-0 == 0: {}", Complex64::new(-0.0, 0.0) == Complex64::ZERO);

    println!("\n=== Division near the ends of the exponent range ===");
    let m = <f64 as Real>::MIN_SUBNORMAL;
    let z = Complex64::new(m, m);
    let w = Complex64::new(2.0 * m, m);
    println!("{} / {} = {}", z, w, z / w);
    let big = Complex64::new(f64::MAX, f64::MAX / 2.0);
    println!("{} / {} = {}", big, big.conj(), big / big.conj());
    match Complex64::new(1e-310, 0.0).reciprocal() {
        Some(r) => println!("reciprocal of 1e-310 = {}", r),
        None => println!("1e-310 has no usable reciprocal"),
    }

    println!("\n=== Roots of unity ===");
    for k in 0..6 {
        println!("w(6)^{} = {:.6}", k, Complex64::root_of_unity(k, 6));
    }

    println!("\n=== Polar form ===");
    if let Some(z) = Complex64::from_polar(2.0, std::f64::consts::FRAC_PI_3) {
        println!("2 * e^(i pi/3) = {:.6}", z);
    }
    println!("negative length: {:?}", Complex64::from_polar(-1.0, 0.0));

    println!("\n=== Parsing ===");
    match "(1.5, -2.25)".parse::<Complex64>() {
        Ok(z) => println!("parsed {}", z),
        Err(e) => println!("parse error: {}", e),
    }
    match "1.5 - 2.25i".parse::<Complex64>() {
        Ok(z) => println!("parsed {}", z),
        Err(e) => println!("parse error: {}", e),
    }

    println!("\n=== Real functions ===");
    for x in [0.5f64, 1.0, 4.5] {
        println!(
            "x = {}: gamma = {:.6}, ln_gamma = {:.6}, erf = {:.6}",
            x,
            RealFunctions::gamma(&x),
            RealFunctions::ln_gamma(&x),
            RealFunctions::erf(&x)
        );
    }
}
