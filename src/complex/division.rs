use super::Complex;
use crate::real::Real;

#[inline]
fn max_abs<T: Real>(a: T, b: T) -> T {
    let (a, b) = (a.abs(), b.abs());
    if a > b {
        a
    } else {
        b
    }
}

/// Bounds on the infinity norm of both operands inside which the textbook
/// formula can neither overflow nor lose precision to underflow.
///
/// Both bounds are constant expressions for a given precision.
#[inline]
fn well_scaled_bounds<T: Real>() -> (T, T) {
    let lower = (T::MIN_POSITIVE / T::EPSILON).sqrt();
    let upper = T::MAX.sqrt() * T::from_f64(0.5);
    (lower, upper)
}

/// z / w.
///
/// Operands of moderate size go straight through
/// `(z * conj(w)) / |w|²`. Everything else is rescaled by powers of two
/// first, which is exact, so results stay accurate for operands near the
/// edges of the exponent range.
pub(super) fn divide<T: Real>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    let (lower, upper) = well_scaled_bounds::<T>();
    let zm = max_abs(z.re, z.im);
    let wm = max_abs(w.re, w.im);
    // NaN fails every comparison and falls through to the slow path.
    if zm >= lower && zm <= upper && wm >= lower && wm <= upper {
        let len_sq = w.re * w.re + w.im * w.im;
        return Complex::new(
            (z.re * w.re + z.im * w.im) / len_sq,
            (z.im * w.re - z.re * w.im) / len_sq,
        );
    }
    rescaled_divide(z, w)
}

#[cold]
fn rescaled_divide<T: Real>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    if !z.is_finite() || w.is_zero() {
        return Complex::INFINITY;
    }
    if !w.is_finite() || z.is_zero() {
        return Complex::ZERO;
    }

    // Bring both operands to unit scale, divide, then restore the scale.
    let ew = max_abs(w.re, w.im).exponent();
    let ez = max_abs(z.re, z.im).exponent();
    let (c, d) = (w.re.scale_b(-ew), w.im.scale_b(-ew));
    let (a, b) = (z.re.scale_b(-ez), z.im.scale_b(-ez));

    let len_sq = c * c + d * d;
    let re = (a * c + b * d) / len_sq;
    let im = (b * c - a * d) / len_sq;
    let shift = ez - ew;
    Complex::new(re.scale_b(shift), im.scale_b(shift))
}

impl<T: Real> Complex<T> {
    /// 1 / self, when multiplying by it is as good as dividing.
    ///
    /// Returns `None` when the reciprocal is not normal, where
    /// `z * w.reciprocal()` could lose accuracy against `z / w` through
    /// overflow or underflow. Zero and infinity always have reciprocals
    /// (each other).
    pub fn reciprocal(&self) -> Option<Self> {
        let recip = divide(Self::ONE, *self);
        if recip.is_normal() || self.is_zero() || !self.is_finite() {
            Some(recip)
        } else {
            None
        }
    }

    /// Divide every element of `values` by `divisor`.
    ///
    /// Uses a single reciprocal and multiplications when one is available,
    /// otherwise divides each element.
    pub fn divide_all(values: &[Self], divisor: Self) -> Vec<Self> {
        match divisor.reciprocal() {
            Some(recip) => values.iter().map(|z| z * recip).collect(),
            None => values.iter().map(|z| z / divisor).collect(),
        }
    }
}
