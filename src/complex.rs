use crate::real::Real;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{ConstOne, ConstZero, Inv, One, Zero};
use regex::Regex;
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, SerializeTuple, Serializer},
};
use simple_error::{bail, SimpleError};
use std::{fmt, str::FromStr, sync::OnceLock};

mod arithmetic;
mod division;
mod elementary;

/// A complex number `re + im·i` over a real type `T`.
///
/// Values are compared on the Riemann sphere rather than bit for bit:
///
/// - every value with both components equal to zero is the same zero,
///   whatever the signs of those zeros;
/// - every value with a non-finite component (infinite or NaN) is the same
///   single point at infinity;
/// - every other value is a finite point, equal only to values with
///   identical components.
///
/// Arithmetic does not try to tell the different infinities apart. Any
/// operation that produces a non-finite component yields the point at
/// infinity.
#[derive(Copy, Clone, Debug, Default)]
pub struct Complex<T> {
    re: T,
    im: T,
}

/// Single precision complex number
pub type Complex32 = Complex<f32>;

/// Double precision complex number
pub type Complex64 = Complex<f64>;

impl<T: Real> Complex<T> {
    /// A constant `Complex` 0.
    pub const ZERO: Self = Self {
        re: T::ZERO,
        im: T::ZERO,
    };

    /// A constant `Complex` 1.
    pub const ONE: Self = Self {
        re: T::ONE,
        im: T::ZERO,
    };

    /// A constant `Complex` _i_, the imaginary unit.
    pub const I: Self = Self {
        re: T::ZERO,
        im: T::ONE,
    };

    /// The point at infinity.
    pub const INFINITY: Self = Self {
        re: T::INFINITY,
        im: T::ZERO,
    };

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: T) -> Self {
        Complex::new(re, T::ZERO)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub fn from_imag(im: T) -> Self {
        Complex::new(T::ZERO, im)
    }

    /// Create a new complex number from a length and a phase in radians.
    ///
    /// Returns `None` when `length` is negative or either argument is not
    /// finite, since no finite complex value corresponds to that input.
    pub fn from_polar(length: T, phase: T) -> Option<Self> {
        if !length.is_finite() || !phase.is_finite() || length < T::ZERO {
            return None;
        }
        Some(Complex::new(length * phase.cos(), length * phase.sin()))
    }

    /// The `k`-th of the `n` complex `n`-th roots of unity, exp(2πik/n).
    ///
    /// # Panics
    ///
    /// Panics unless `k < n`.
    pub fn root_of_unity(k: usize, n: usize) -> Self {
        assert!(k < n, "root of unity index {} out of range 0..{}", k, n);

        // Quarter turns are exact.
        if k == 0 {
            return Self::ONE;
        }
        if n % 2 == 0 && k == n / 2 {
            return -Self::ONE;
        }
        if n % 4 == 0 {
            let quarter = n / 4;
            if k == quarter {
                return Self::I;
            }
            if k == 3 * quarter {
                return -Self::I;
            }
        }
        let phase = T::from_f64(2.0) * T::PI * T::from_usize(k) / T::from_usize(n);
        Complex::new(phase.cos(), phase.sin())
    }

    /// Get the real part
    pub fn re(&self) -> T {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> T {
        self.im
    }

    /// The Euclidean norm, computed without intermediate overflow or underflow.
    ///
    /// Infinite for the point at infinity.
    pub fn length(&self) -> T {
        if !self.is_finite() {
            return T::INFINITY;
        }
        self.re.hypot(&self.im)
    }

    /// re² + im², which may overflow or underflow where `length` does not
    pub fn length_squared(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// The infinity norm, max(|re|, |im|)
    pub fn magnitude(&self) -> T {
        if !self.is_finite() {
            return T::INFINITY;
        }
        let (a, b) = (self.re.abs(), self.im.abs());
        if a > b {
            a
        } else {
            b
        }
    }

    /// The argument in [-π, π], signed like `atan2(im, re)`.
    ///
    /// Zero for the zero value and NaN for the point at infinity, which
    /// have no direction.
    pub fn phase(&self) -> T {
        if !self.is_finite() {
            return T::NAN;
        }
        if self.is_zero() {
            return T::ZERO;
        }
        self.im.atan2(&self.re)
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// Both components are zero
    pub fn is_zero(&self) -> bool {
        self.re == T::ZERO && self.im == T::ZERO
    }

    /// Both components are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Finite, with at least one normal component
    pub fn is_normal(&self) -> bool {
        self.is_finite() && (self.re.is_normal() || self.im.is_normal())
    }

    /// Finite, non-zero, and not normal
    pub fn is_subnormal(&self) -> bool {
        self.is_finite() && !self.is_zero() && !self.is_normal()
    }

    /// The representative encoding of this value: `ZERO` for every zero,
    /// `INFINITY` for every non-finite value, the value itself otherwise.
    pub fn canonicalized(&self) -> Self {
        if !self.is_finite() {
            Self::INFINITY
        } else if self.is_zero() {
            Self::ZERO
        } else {
            *self
        }
    }
}

impl<T: Real> PartialEq for Complex<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_finite(), other.is_finite()) {
            // IEEE equality already treats +0 and -0 as equal.
            (true, true) => self.re == other.re && self.im == other.im,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Real> Eq for Complex<T> {}

impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.re, p, self.im),
            None => write!(f, "({:?}, {:?})", self.re, self.im),
        }
    }
}

static ORDERED_PAIR: OnceLock<Regex> = OnceLock::new();

/// The `(re, im)` pattern, compiled on first use.
fn ordered_pair() -> &'static Regex {
    ORDERED_PAIR.get_or_init(|| {
        Regex::new(r"^\s*\(\s*(?<re>[^\s,()]+)\s*,\s*(?<im>[^\s,()]+)\s*\)\s*$")
            .expect("Invalid regex!")
    })
}

impl<T: Real + FromStr> FromStr for Complex<T> {
    type Err = SimpleError;

    /// Parses the `(re, im)` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, SimpleError> {
        let Some(caps) = ordered_pair().captures(s) else {
            bail!("string not an ordered pair (re, im)");
        };
        let re = caps["re"].parse::<T>().map_err(|_| {
            SimpleError::new(format!("real part \"{}\" not a number", &caps["re"]))
        })?;
        let im = caps["im"].parse::<T>().map_err(|_| {
            SimpleError::new(format!("imaginary part \"{}\" not a number", &caps["im"]))
        })?;
        Ok(Complex::new(re, im))
    }
}

impl<T: Real + Serialize> Serialize for Complex<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.re)?;
        tup.serialize_element(&self.im)?;
        tup.end()
    }
}

impl<'de, T: Real + Deserialize<'de>> Deserialize<'de> for Complex<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (re, im) = <(T, T)>::deserialize(deserializer)?;
        Ok(Complex::new(re, im))
    }
}

impl<T: Real> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Complex::from_real(re)
    }
}

impl<T: Real> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Complex::new(re, im)
    }
}

impl<T: Real> From<num_complex::Complex<T>> for Complex<T> {
    fn from(num: num_complex::Complex<T>) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl<T: Real> From<Complex<T>> for num_complex::Complex<T> {
    fn from(num: Complex<T>) -> Self {
        num_complex::Complex::new(num.re, num.im)
    }
}

impl<T: Real> Zero for Complex<T> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl<T: Real> ConstZero for Complex<T> {
    const ZERO: Self = Self::ZERO;
}

impl<T: Real> One for Complex<T> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<T: Real> ConstOne for Complex<T> {
    const ONE: Self = Self::ONE;
}

impl<T: Real> Inv for Complex<T> {
    type Output = Self;

    fn inv(self) -> Self {
        Self::ONE / self
    }
}

impl<T: Real + AbsDiffEq<Epsilon = T>> AbsDiffEq for Complex<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        match (self.is_finite(), other.is_finite()) {
            (true, true) => {
                self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
            }
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Real + RelativeEq<Epsilon = T>> RelativeEq for Complex<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        match (self.is_finite(), other.is_finite()) {
            (true, true) => {
                self.re.relative_eq(&other.re, epsilon, max_relative)
                    && self.im.relative_eq(&other.im, epsilon, max_relative)
            }
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Real + UlpsEq<Epsilon = T>> UlpsEq for Complex<T> {
    fn default_max_ulps() -> u32 {
        4
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        match (self.is_finite(), other.is_finite()) {
            (true, true) => {
                self.re.ulps_eq(&other.re, epsilon, max_ulps)
                    && self.im.ulps_eq(&other.im, epsilon, max_ulps)
            }
            (false, false) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod complex_tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_creation() {
        let z = Complex64::new(2.0, 3.0);
        assert_eq!(z.re(), 2.0);
        assert_eq!(z.im(), 3.0);
        assert_eq!(Complex64::from_real(4.0), Complex64::new(4.0, 0.0));
        assert_eq!(Complex64::from_imag(4.0), Complex64::new(0.0, 4.0));
        assert_eq!(Complex32::from(1.5), Complex32::new(1.5, 0.0));
        assert_eq!(Complex64::from((1.0, -1.0)), Complex64::new(1.0, -1.0));
    }

    #[test]
    fn test_zero_equality_ignores_sign() {
        let zeros = [
            Complex64::new(0.0, 0.0),
            Complex64::new(-0.0, 0.0),
            Complex64::new(0.0, -0.0),
            Complex64::new(-0.0, -0.0),
        ];
        for a in zeros.iter() {
            assert!(a.is_zero());
            for b in zeros.iter() {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_infinity_equality() {
        let infinities = [
            Complex64::new(f64::INFINITY, 0.0),
            Complex64::new(0.0, -f64::NAN),
            Complex64::new(f64::NEG_INFINITY, f64::INFINITY),
            Complex64::new(f64::NAN, f64::NAN),
            Complex64::new(1.0, f64::NEG_INFINITY),
            Complex64::INFINITY,
        ];
        for a in infinities.iter() {
            assert!(!a.is_finite());
            for b in infinities.iter() {
                assert_eq!(a, b);
            }
            assert_ne!(*a, Complex64::new(1.0, 1.0));
            assert_ne!(*a, Complex64::ZERO);
        }
    }

    #[test]
    fn test_finite_equality_is_exact() {
        let a = Complex64::new(1.0, 2.0);
        assert_eq!(a, Complex64::new(1.0, 2.0));
        assert_ne!(a, Complex64::new(1.0, 2.0 + f64::EPSILON * 2.0));
        assert_ne!(a, Complex64::new(2.0, 1.0));
    }

    #[test]
    fn test_classification() {
        let tiny = f64::from_bits(1);
        assert!(Complex64::new(1.0, tiny).is_normal());
        assert!(Complex64::new(tiny, tiny).is_subnormal());
        assert!(!Complex64::ZERO.is_normal());
        assert!(!Complex64::ZERO.is_subnormal());
        assert!(!Complex64::INFINITY.is_normal());
    }

    #[test]
    fn test_canonicalized() {
        let z = Complex64::new(-0.0, -0.0).canonicalized();
        assert!(z.re().is_sign_positive() && z.im().is_sign_positive());
        let w = Complex64::new(f64::NAN, 3.0).canonicalized();
        assert_eq!(w.re(), f64::INFINITY);
        assert_eq!(w.im(), 0.0);
        let v = Complex64::new(1.0, 2.0);
        assert_eq!(v.canonicalized().re(), 1.0);
    }

    #[test]
    fn test_polar() {
        let z = Complex64::from_polar(2.0, PI / 2.0).unwrap();
        assert!(z.re().abs() < 1e-15);
        assert_eq!(z.im(), 2.0);
        assert_eq!(Complex64::from_polar(0.0, 1.0), Some(Complex64::ZERO));
        assert_eq!(Complex64::from_polar(-1.0, 0.0), None);
        assert_eq!(Complex64::from_polar(f64::INFINITY, 0.0), None);
        assert_eq!(Complex64::from_polar(1.0, f64::NAN), None);
        assert_eq!(Complex64::from_polar(f64::NAN, 0.0), None);
    }

    #[test]
    fn test_length_and_phase() {
        let z = Complex64::new(3.0, 4.0);
        assert_eq!(z.length(), 5.0);
        assert_eq!(z.length_squared(), 25.0);
        assert_eq!(z.magnitude(), 4.0);
        assert_eq!(Complex64::new(-1.0, 0.0).phase(), PI);
        assert_eq!(Complex64::new(-1.0, -0.0).phase(), -PI);
        assert_eq!(Complex64::ZERO.phase(), 0.0);
        assert!(Complex64::INFINITY.phase().is_nan());
        assert_eq!(Complex64::INFINITY.length(), f64::INFINITY);

        let huge = Complex64::new(1e300, 1e300);
        assert!(huge.length_squared().is_infinite());
        assert!((huge.length() / (1e300 * 2f64.sqrt()) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_root_of_unity() {
        assert_eq!(Complex64::root_of_unity(0, 4), Complex64::new(1.0, 0.0));
        assert_eq!(Complex64::root_of_unity(1, 4), Complex64::new(0.0, 1.0));
        assert_eq!(Complex64::root_of_unity(2, 4), Complex64::new(-1.0, 0.0));
        assert_eq!(Complex64::root_of_unity(3, 4), Complex64::new(0.0, -1.0));

        let w = Complex64::root_of_unity(1, 3);
        assert!((w.re() + 0.5).abs() < 1e-15);
        assert!((w.im() - 3f64.sqrt() / 2.0).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_root_of_unity_rejects_k_equal_n() {
        Complex64::root_of_unity(4, 4);
    }

    #[test]
    fn test_root_of_unity_of_huge_order() {
        let n = usize::MAX;
        let w = Complex64::root_of_unity(n / 2, n);
        assert!(w.is_finite());
        approx::assert_relative_eq!(w.re(), -1.0);
        assert!(w.im().abs() < 1e-15);

        // usize::MAX - 3 is a multiple of four
        let n = usize::MAX - 3;
        assert_eq!(Complex64::root_of_unity(n / 4, n), Complex64::I);
        assert_eq!(Complex64::root_of_unity(n / 2, n), -Complex64::ONE);
        assert_eq!(Complex64::root_of_unity(3 * (n / 4), n), -Complex64::I);
        assert!(Complex64::root_of_unity(n - 1, n).is_normal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex64::new(2.0, 3.0).to_string(), "(2.0, 3.0)");
        assert_eq!(Complex64::new(-0.5, 1e300).to_string(), "(-0.5, 1e300)");
        assert_eq!(Complex32::new(1.0, -2.0).to_string(), "(1.0, -2.0)");
        assert_eq!(format!("{:.2}", Complex64::new(PI, 1.0)), "(3.14, 1.00)");
    }

    #[test]
    fn test_parse() {
        let z: Complex64 = "(2.0, 3.0)".parse().unwrap();
        assert_eq!(z, Complex64::new(2.0, 3.0));
        let w: Complex32 = " ( -1.5e3 ,0.25 ) ".parse().unwrap();
        assert_eq!(w, Complex32::new(-1500.0, 0.25));
        let v: Complex64 = "(inf, NaN)".parse().unwrap();
        assert_eq!(v, Complex64::INFINITY);

        let z = Complex64::new(0.1, -7.25e-12);
        assert_eq!(z.to_string().parse::<Complex64>().unwrap(), z);

        assert!("2 + 3i".parse::<Complex64>().is_err());
        assert!("(2.0, x)".parse::<Complex64>().is_err());
        assert!("(2.0, 3.0, 4.0)".parse::<Complex64>().is_err());
    }

    #[test]
    fn test_pattern_compiled_once() {
        let first = ordered_pair();
        let _: Complex64 = "(1.0, 2.0)".parse().unwrap();
        let _: Complex32 = "(3.0, 4.0)".parse().unwrap();
        assert!(std::ptr::eq(first, ordered_pair()));
    }

    #[test]
    fn test_serde() {
        let z = Complex64::new(2.0, -3.5);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, "[2.0,-3.5]");
        let back: Complex64 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, z);
    }

    #[test]
    fn test_num_complex_interop() {
        let z = Complex64::new(1.0, 2.0);
        let n: num_complex::Complex<f64> = z.into();
        assert_eq!(n, num_complex::Complex::new(1.0, 2.0));
        assert_eq!(Complex64::from(n), z);
    }

    #[test]
    fn test_num_traits() {
        assert!(<Complex64 as Zero>::is_zero(&Complex64::new(-0.0, 0.0)));
        assert_eq!(<Complex64 as One>::one(), Complex64::ONE);
        assert_eq!(<Complex64 as ConstZero>::ZERO, Complex64::ZERO);
        assert_eq!(Complex64::new(0.0, 2.0).inv(), Complex64::new(0.0, -0.5));
    }

    #[test]
    fn test_approx() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(1.0 + f64::EPSILON, 2.0);
        approx::assert_ulps_eq!(a, b);
        approx::assert_relative_eq!(a, b);
        approx::assert_abs_diff_eq!(Complex64::INFINITY, Complex64::new(f64::NAN, 0.0));
        approx::assert_ulps_ne!(a, Complex64::INFINITY);
    }
}
