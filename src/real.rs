use crate::real_functions::RealFunctions;
use num_bigint::BigInt;
use num_traits::{ConstOne, ConstZero, NumOps, ToPrimitive, Zero};
use std::{fmt, ops::Neg};

/// A concrete binary floating-point precision.
///
/// This is the bound most generic numeric code should be written against:
/// it carries every function of [`RealFunctions`] plus the primitive
/// operations each precision supplies natively.
pub trait Real:
    RealFunctions
    + PartialOrd
    + NumOps
    + Neg<Output = Self>
    + ConstZero
    + ConstOne
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Archimedes' constant (pi)
    const PI: Self;

    /// A positive infinite value
    const INFINITY: Self;

    /// A negative infinite value
    const NEG_INFINITY: Self;

    /// Not a number
    const NAN: Self;

    /// Largest finite value
    const MAX: Self;

    /// Smallest finite value
    const MIN: Self;

    /// Smallest positive normal value
    const MIN_POSITIVE: Self;

    /// Smallest positive subnormal value
    const MIN_SUBNORMAL: Self;

    /// The difference between 1.0 and the next representable value
    const EPSILON: Self;

    /// The radix of the internal representation
    const RADIX: u32;

    /// Number of significant digits in base `RADIX`
    const MANTISSA_DIGITS: u32;

    /// One greater than the largest possible exponent
    const MAX_EXP: i32;

    /// One greater than the smallest possible normal exponent
    const MIN_EXP: i32;

    // ========== Conversions ==========
    /// Create from f64, rounding to nearest
    fn from_f64(value: f64) -> Self;

    /// Create from usize, rounding to nearest
    fn from_usize(value: usize) -> Self;

    /// Convert to f64
    fn to_f64(&self) -> f64;

    /// Create from an integer only if it is exactly representable.
    fn exactly(value: &BigInt) -> Option<Self>;

    /// [`exactly`](Real::exactly) for anything convertible into a `BigInt`.
    fn exactly_from<I: Into<BigInt>>(value: I) -> Option<Self> {
        Self::exactly(&value.into())
    }

    // ========== Classification methods ==========
    /// Returns true if this number is neither infinite nor NaN
    fn is_finite(&self) -> bool;

    /// Returns true if this value is positive infinity or negative infinity
    fn is_infinite(&self) -> bool;

    /// Returns true if this value is NaN
    fn is_nan(&self) -> bool;

    /// Returns true if the number is neither zero, infinite, subnormal, or NaN
    fn is_normal(&self) -> bool;

    /// Returns true if the number is subnormal
    fn is_subnormal(&self) -> bool;

    /// Returns true if the sign bit is set
    fn is_sign_negative(&self) -> bool;

    /// Returns true if the sign bit is clear
    fn is_sign_positive(&self) -> bool;

    // ========== Sign and magnitude ==========
    /// Computes the absolute value of self
    fn abs(&self) -> Self;

    /// Returns a number composed of the magnitude of self and the sign of `sign`
    fn copysign(&self, sign: &Self) -> Self;

    /// The unit in the last place of self.
    ///
    /// Zero and subnormals share the spacing `MIN_SUBNORMAL`. NaN for
    /// non-finite values.
    fn ulp(&self) -> Self;

    /// floor(log2(|self|)), also for subnormals.
    ///
    /// `i32::MIN` for zero and `i32::MAX` for non-finite values.
    fn exponent(&self) -> i32;

    /// self * 2^n with a single rounding.
    fn scale_b(&self, n: i32) -> Self;
}

macro_rules! impl_real {
    ($t:ident, $bits:ty, $pi:expr, $min_subnormal:expr) => {
        impl Real for $t {
            const PI: Self = $pi;
            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;
            const NAN: Self = $t::NAN;
            const MAX: Self = $t::MAX;
            const MIN: Self = $t::MIN;
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
            const MIN_SUBNORMAL: Self = $min_subnormal;
            const EPSILON: Self = $t::EPSILON;
            const RADIX: u32 = $t::RADIX;
            const MANTISSA_DIGITS: u32 = $t::MANTISSA_DIGITS;
            const MAX_EXP: i32 = $t::MAX_EXP;
            const MIN_EXP: i32 = $t::MIN_EXP;

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn from_usize(value: usize) -> Self {
                value as $t
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn exactly(value: &BigInt) -> Option<Self> {
                if value.is_zero() {
                    return Some(0.0);
                }
                let bits = value.bits();
                let shift = value.trailing_zeros().unwrap_or(0);
                if bits - shift > $t::MANTISSA_DIGITS as u64 || bits > $t::MAX_EXP as u64 {
                    return None;
                }
                let significand = (value >> shift).to_f64()? as $t;
                Some(significand.scale_b(shift as i32))
            }

            fn is_finite(&self) -> bool {
                $t::is_finite(*self)
            }

            fn is_infinite(&self) -> bool {
                $t::is_infinite(*self)
            }

            fn is_nan(&self) -> bool {
                $t::is_nan(*self)
            }

            fn is_normal(&self) -> bool {
                $t::is_normal(*self)
            }

            fn is_subnormal(&self) -> bool {
                $t::is_subnormal(*self)
            }

            fn is_sign_negative(&self) -> bool {
                $t::is_sign_negative(*self)
            }

            fn is_sign_positive(&self) -> bool {
                $t::is_sign_positive(*self)
            }

            fn abs(&self) -> Self {
                $t::abs(*self)
            }

            fn copysign(&self, sign: &Self) -> Self {
                $t::copysign(*self, *sign)
            }

            fn ulp(&self) -> Self {
                if !$t::is_finite(*self) {
                    return $t::NAN;
                }
                let e = Real::exponent(self);
                if e < $t::MIN_EXP - 1 {
                    $min_subnormal
                } else {
                    (1.0 as $t).scale_b(e - ($t::MANTISSA_DIGITS as i32 - 1))
                }
            }

            fn exponent(&self) -> i32 {
                const SIGNIFICAND_BITS: u32 = $t::MANTISSA_DIGITS - 1;
                const BIAS: i32 = $t::MAX_EXP - 1;

                if !$t::is_finite(*self) {
                    return i32::MAX;
                }
                if *self == 0.0 {
                    return i32::MIN;
                }
                let magnitude = $t::abs(*self).to_bits();
                let biased = (magnitude >> SIGNIFICAND_BITS) as i32;
                if biased == 0 {
                    let top = (<$bits>::BITS - 1 - magnitude.leading_zeros()) as i32;
                    top + 1 - BIAS - SIGNIFICAND_BITS as i32
                } else {
                    biased - BIAS
                }
            }

            fn scale_b(&self, n: i32) -> Self {
                const SIGNIFICAND_BITS: u32 = $t::MANTISSA_DIGITS - 1;
                const BIAS: i32 = $t::MAX_EXP - 1;
                const MAX_SCALE: i32 = $t::MAX_EXP - 1;
                const MIN_SCALE: i32 = $t::MIN_EXP - 1;
                // Steps below MIN_SCALE keep the intermediate normal so the
                // final multiplication rounds once. After a step n < -MANTISSA_DIGITS,
                // so a step that already lands subnormal leaves an exact result
                // below half of MIN_SUBNORMAL, which every rounding takes to zero.
                const LOW_STEP: i32 = MIN_SCALE + $t::MANTISSA_DIGITS as i32;

                fn pow2(n: i32) -> $t {
                    $t::from_bits(((n + BIAS) as $bits) << SIGNIFICAND_BITS)
                }

                let mut y = *self;
                let mut n = n;
                if n > MAX_SCALE {
                    y *= pow2(MAX_SCALE);
                    n -= MAX_SCALE;
                    if n > MAX_SCALE {
                        y *= pow2(MAX_SCALE);
                        n -= MAX_SCALE;
                        if n > MAX_SCALE {
                            n = MAX_SCALE;
                        }
                    }
                } else if n < MIN_SCALE {
                    y *= pow2(LOW_STEP);
                    n -= LOW_STEP;
                    if n < MIN_SCALE {
                        y *= pow2(LOW_STEP);
                        n -= LOW_STEP;
                        if n < MIN_SCALE {
                            n = MIN_SCALE;
                        }
                    }
                }
                y * pow2(n)
            }
        }
    };
}

impl_real!(f32, u32, std::f32::consts::PI, 1.401_298_5e-45);
impl_real!(f64, u64, std::f64::consts::PI, 4.940_656_458_412_465_4e-324);
