/// Elementary transcendental functions over a floating-point-like value.
///
/// Every function is total: inputs outside the mathematical domain produce a
/// NaN-bearing result (for real types) or the point at infinity (for
/// [`Complex`](crate::complex::Complex)) instead of an error.
pub trait ElementaryFunctions: Sized + Copy {
    // ========== Exponential functions ==========
    /// Returns e^(self)
    fn exp(&self) -> Self;

    /// Returns e^(self) - 1, accurate even if the number is close to zero
    fn exp_m1(&self) -> Self;

    /// Returns the natural logarithm of the number
    fn ln(&self) -> Self;

    /// Returns ln(1 + self), accurate even if the number is close to zero
    fn ln_1p(&self) -> Self;

    // ========== Trigonometric functions ==========
    /// Computes the cosine of a number (in radians)
    fn cos(&self) -> Self;

    /// Computes the sine of a number (in radians)
    fn sin(&self) -> Self;

    /// Computes the tangent of a number (in radians)
    fn tan(&self) -> Self;

    /// Computes the arccosine of a number
    fn acos(&self) -> Self;

    /// Computes the arcsine of a number
    fn asin(&self) -> Self;

    /// Computes the arctangent of a number
    fn atan(&self) -> Self;

    // ========== Hyperbolic functions ==========
    /// Hyperbolic cosine function
    fn cosh(&self) -> Self;

    /// Hyperbolic sine function
    fn sinh(&self) -> Self;

    /// Hyperbolic tangent function
    fn tanh(&self) -> Self;

    /// Inverse hyperbolic cosine function
    fn acosh(&self) -> Self;

    /// Inverse hyperbolic sine function
    fn asinh(&self) -> Self;

    /// Inverse hyperbolic tangent function
    fn atanh(&self) -> Self;

    // ========== Powers and roots ==========
    /// Raises self to the power `exponent`
    fn pow(&self, exponent: &Self) -> Self;

    /// Raises self to an integer power
    fn powi(&self, n: i32) -> Self;

    /// Returns the square root of a number
    fn sqrt(&self) -> Self;

    /// Returns the `n`-th root of a number.
    ///
    /// For real types a negative `self` only has a root when `n` is odd.
    fn root(&self, n: i32) -> Self;
}

macro_rules! impl_elementary_functions {
    ($t:ident) => {
        impl ElementaryFunctions for $t {
            fn exp(&self) -> Self {
                $t::exp(*self)
            }

            fn exp_m1(&self) -> Self {
                $t::exp_m1(*self)
            }

            fn ln(&self) -> Self {
                $t::ln(*self)
            }

            fn ln_1p(&self) -> Self {
                $t::ln_1p(*self)
            }

            fn cos(&self) -> Self {
                $t::cos(*self)
            }

            fn sin(&self) -> Self {
                $t::sin(*self)
            }

            fn tan(&self) -> Self {
                $t::tan(*self)
            }

            fn acos(&self) -> Self {
                $t::acos(*self)
            }

            fn asin(&self) -> Self {
                $t::asin(*self)
            }

            fn atan(&self) -> Self {
                $t::atan(*self)
            }

            fn cosh(&self) -> Self {
                $t::cosh(*self)
            }

            fn sinh(&self) -> Self {
                $t::sinh(*self)
            }

            fn tanh(&self) -> Self {
                $t::tanh(*self)
            }

            fn acosh(&self) -> Self {
                $t::acosh(*self)
            }

            fn asinh(&self) -> Self {
                $t::asinh(*self)
            }

            fn atanh(&self) -> Self {
                $t::atanh(*self)
            }

            fn pow(&self, exponent: &Self) -> Self {
                $t::powf(*self, *exponent)
            }

            fn powi(&self, n: i32) -> Self {
                $t::powi(*self, n)
            }

            fn sqrt(&self) -> Self {
                $t::sqrt(*self)
            }

            fn root(&self, n: i32) -> Self {
                let x = *self;
                if n == 0 || (x < 0.0 && n % 2 == 0) {
                    return $t::NAN;
                }
                if n == 3 {
                    return $t::cbrt(x);
                }
                $t::abs(x).powf(1.0 / n as $t).copysign(x)
            }
        }
    };
}

impl_elementary_functions!(f32);
impl_elementary_functions!(f64);

#[cfg(test)]
mod elementary_tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_nan() {
        assert!(ElementaryFunctions::sqrt(&-1.0f64).is_nan());
        assert!(ElementaryFunctions::ln(&-1.0f64).is_nan());
        assert_eq!(ElementaryFunctions::ln(&0.0f64), f64::NEG_INFINITY);
        assert!(ElementaryFunctions::acos(&2.0f32).is_nan());
    }

    #[test]
    fn test_near_zero_accuracy() {
        let x = 1e-20f64;
        assert_eq!(ElementaryFunctions::exp_m1(&x), 1e-20);
        assert_eq!(ElementaryFunctions::ln_1p(&x), 1e-20);
    }

    #[test]
    fn test_root() {
        assert_eq!(ElementaryFunctions::root(&-8.0f64, 3), -2.0);
        assert_eq!(ElementaryFunctions::root(&27.0f32, 3), 3.0);
        assert!((ElementaryFunctions::root(&-32.0f64, 5) + 2.0).abs() < 1e-14);
        assert!((ElementaryFunctions::root(&16.0f64, 4) - 2.0).abs() < 1e-15);
        assert!((ElementaryFunctions::root(&4.0f64, -2) - 0.5).abs() < 1e-15);
        assert!(ElementaryFunctions::root(&-16.0f64, 4).is_nan());
        assert!(ElementaryFunctions::root(&2.0f64, 0).is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(ElementaryFunctions::pow(&2.0f64, &10.0), 1024.0);
        assert_eq!(ElementaryFunctions::powi(&3.0f32, 4), 81.0);
        assert!((ElementaryFunctions::pow(&9.0f64, &0.5) - 3.0).abs() < 1e-15);
    }
}
