use approx::assert_relative_eq;
use float_cmp::approx_eq;
use num_bigint::BigInt;
use numerics::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Generic code written against each level of the hierarchy.

fn logistic<T: ElementaryFunctions + std::ops::Add<Output = T> + std::ops::Div<Output = T>>(
    x: T,
    one: T,
) -> T {
    one / (one + x.exp())
}

fn normal_cdf<T: Real>(x: T) -> T {
    let root_two = T::from_f64(2.0).sqrt();
    T::from_f64(0.5) * (x / root_two).erfc()
}

fn binade_split<T: Real>(x: T) -> (T, i32) {
    let e = x.exponent();
    (x.scale_b(-e), e)
}

#[test]
fn test_generic_elementary_code_accepts_real_and_complex() {
    assert_relative_eq!(logistic(0.0f64, 1.0), 0.5);
    assert_relative_eq!(logistic(0.0f32, 1.0), 0.5);
    let z = logistic(Complex64::ZERO, Complex64::ONE);
    assert_eq!(z, Complex64::new(0.5, 0.0));
}

#[test]
fn test_real_functions_through_the_trait() {
    // P(X > -x) for the standard normal, written via erfc
    assert!(approx_eq!(f64, normal_cdf(0.0f64), 0.5, ulps = 2));
    assert!((normal_cdf(-1.0f64) - 0.841_344_746_068_542_9).abs() < 1e-14);
    assert!((normal_cdf(-1.0f32) - 0.841_344_7).abs() < 1e-6);
}

#[test]
fn test_exponent_and_scale_b_split_every_finite_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..5000 {
        let bits: u64 = rng.random();
        let x = f64::from_bits(bits);
        if !x.is_finite() || x == 0.0 {
            continue;
        }
        let (significand, e) = binade_split(x);
        assert!((1.0..2.0).contains(&significand.abs()), "{:e}", x);
        assert_eq!(significand.scale_b(e), x);
    }
}

#[test]
fn test_ulp_is_spacing_to_next_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for _ in 0..5000 {
        let bits: u32 = rng.random();
        let x = f32::from_bits(bits).abs();
        if !x.is_finite() || x == f32::MAX {
            continue;
        }
        let next = f32::from_bits(x.to_bits() + 1);
        assert_eq!(Real::ulp(&x), next - x, "{:e}", x);
    }
}

#[test]
fn test_exactly_agrees_with_lossless_conversion() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..5000 {
        let n: i64 = rng.random();
        let shift = rng.random_range(0..64u32);
        let n = n >> shift;
        let lossless = (n as f64) as i64 == n && n != i64::MAX;
        match f64::exactly(&BigInt::from(n)) {
            Some(x) => {
                assert!(lossless, "{}", n);
                assert_eq!(x, n as f64);
            }
            None => assert!(!lossless, "{}", n),
        }
    }
}

#[test]
fn test_precision_constants() {
    fn check<T: Real>() {
        assert!(T::MIN_SUBNORMAL > T::ZERO);
        assert!(T::MIN_SUBNORMAL < T::MIN_POSITIVE);
        assert_eq!(T::MIN_SUBNORMAL.ulp(), T::MIN_SUBNORMAL);
        assert_eq!(T::ONE.ulp(), T::EPSILON);
        assert_eq!(T::RADIX, 2);
        assert_eq!(T::MAX.exponent(), T::MAX_EXP - 1);
        assert_eq!(T::MIN_POSITIVE.exponent(), T::MIN_EXP - 1);
        assert_eq!(-T::MAX, T::MIN);
        assert!(T::NAN.is_nan());
        assert!(T::NEG_INFINITY.is_infinite() && T::NEG_INFINITY.is_sign_negative());
        assert_eq!(T::from_usize(T::MANTISSA_DIGITS as usize).to_f64(), T::MANTISSA_DIGITS as f64);
    }
    check::<f32>();
    check::<f64>();
}
