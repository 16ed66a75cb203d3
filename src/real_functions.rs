use crate::elementary::ElementaryFunctions;
use crate::special;

/// Functions that are well defined for real arguments but not over a
/// generic field such as the complex numbers.
pub trait RealFunctions: ElementaryFunctions {
    /// Computes the four quadrant arctangent of self (y) and `x`, in (-pi, pi]
    fn atan2(&self, x: &Self) -> Self;

    /// Computes sqrt(self^2 + other^2) without intermediate overflow or underflow
    fn hypot(&self, other: &Self) -> Self;

    /// The error function
    fn erf(&self) -> Self;

    /// The complementary error function, 1 - erf(self)
    fn erfc(&self) -> Self;

    /// Returns 2^(self)
    fn exp2(&self) -> Self;

    /// Returns 10^(self)
    fn exp10(&self) -> Self;

    /// Returns the base 2 logarithm of the number
    fn log2(&self) -> Self;

    /// Returns the base 10 logarithm of the number
    fn log10(&self) -> Self;

    /// The gamma function. Infinite at zero and at the negative integers.
    fn gamma(&self) -> Self;

    /// The logarithm of the magnitude of the gamma function
    fn ln_gamma(&self) -> Self;

    /// The sign of the gamma function, +1 or -1.
    ///
    /// Kept separate from [`ln_gamma`](RealFunctions::ln_gamma) because gamma
    /// itself may overflow or underflow while its sign stays well defined.
    fn sign_gamma(&self) -> Self;
}

macro_rules! impl_real_functions {
    ($t:ident) => {
        impl RealFunctions for $t {
            fn atan2(&self, x: &Self) -> Self {
                $t::atan2(*self, *x)
            }

            fn hypot(&self, other: &Self) -> Self {
                $t::hypot(*self, *other)
            }

            fn erf(&self) -> Self {
                special::erf(*self as f64) as $t
            }

            fn erfc(&self) -> Self {
                special::erfc(*self as f64) as $t
            }

            fn exp2(&self) -> Self {
                $t::exp2(*self)
            }

            fn exp10(&self) -> Self {
                (10.0 as $t).powf(*self)
            }

            fn log2(&self) -> Self {
                $t::log2(*self)
            }

            fn log10(&self) -> Self {
                $t::log10(*self)
            }

            fn gamma(&self) -> Self {
                special::gamma(*self as f64) as $t
            }

            fn ln_gamma(&self) -> Self {
                special::ln_gamma(*self as f64).0 as $t
            }

            fn sign_gamma(&self) -> Self {
                special::ln_gamma(*self as f64).1 as $t
            }
        }
    };
}

impl_real_functions!(f32);
impl_real_functions!(f64);
