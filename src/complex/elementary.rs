use super::Complex;
use crate::elementary::ElementaryFunctions;
use crate::real::Real;

// Every function maps non-finite input to the point at infinity; the
// component formulas below only see finite values.

#[inline]
fn half<T: Real>() -> T {
    T::from_f64(0.5)
}

#[inline]
fn two<T: Real>() -> T {
    T::from_f64(2.0)
}

/// |z| beyond which 1 is negligible against z² in asinh and acosh.
#[inline]
fn asymptotic_threshold<T: Real>() -> T {
    T::ONE / T::EPSILON.sqrt()
}

/// Multiply `e^x` (which may overflow on its own) by `t` with |t| <= 1.
///
/// Applies e^(x/2) twice so a finite product is not lost to an infinite
/// intermediate.
#[inline]
fn scaled_exp<T: Real>(x: T, t: T) -> T {
    let h = (x * half()).exp();
    h * t * h
}

impl<T: Real> Complex<T> {
    /// i·self
    #[inline]
    fn rotated(self) -> Self {
        Complex::new(-self.im, self.re)
    }

    /// -i·self
    #[inline]
    fn unrotated(self) -> Self {
        Complex::new(self.im, -self.re)
    }

    /// ln(2z) for |z| large enough that z² alone overflows.
    fn ln_double(self) -> Self {
        let ln = self.ln();
        Complex::new(ln.re + two::<T>().ln(), ln.im)
    }
}

impl<T: Real> ElementaryFunctions for Complex<T> {
    fn exp(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let (x, y) = (self.re, self.im);
        let (c, s) = (y.cos(), y.sin());
        let e = x.exp();
        if e.is_finite() {
            return Complex::new(e * c, e * s);
        }
        Complex::new(scaled_exp(x, c), scaled_exp(x, s))
    }

    fn exp_m1(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let (x, y) = (self.re, self.im);
        // e^x cos y - 1 = expm1(x) cos y - 2 sin²(y/2)
        let s = (y * half()).sin();
        let re = x.exp_m1() * y.cos() - two::<T>() * s * s;
        let im = x.exp() * y.sin();
        if re.is_finite() && im.is_finite() {
            return Complex::new(re, im);
        }
        self.exp() - Self::ONE
    }

    fn ln(&self) -> Self {
        if !self.is_finite() || self.is_zero() {
            return Self::INFINITY;
        }
        let (ax, ay) = (self.re.abs(), self.im.abs());
        let (u, v) = if ax > ay { (ax, ay) } else { (ay, ax) };
        let phase = self.im.atan2(&self.re);
        if u > half() && u < two() {
            // ln|z| = ln_1p(|z|² - 1) / 2, with |z|² - 1 formed without cancellation.
            let re = half::<T>() * ((u - T::ONE) * (u + T::ONE) + v * v).ln_1p();
            return Complex::new(re, phase);
        }
        if u > T::MAX * half::<T>() || u < T::MIN_POSITIVE {
            // hypot overflows or loses bits here; take |z| at unit scale.
            let e = u.exponent();
            let w = Complex::new(self.re.scale_b(-e), self.im.scale_b(-e));
            let re = w.length().ln() + T::from_f64(e as f64) * two::<T>().ln();
            return Complex::new(re, phase);
        }
        Complex::new(self.length().ln(), phase)
    }

    fn ln_1p(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let (x, y) = (self.re, self.im);
        if self.magnitude() < half() {
            // |1 + z|² - 1 = x(2 + x) + y²
            let re = half::<T>() * (x * (two::<T>() + x) + y * y).ln_1p();
            let im = y.atan2(&(T::ONE + x));
            return Complex::new(re, im);
        }
        (Self::ONE + *self).ln()
    }

    fn cos(&self) -> Self {
        self.rotated().cosh()
    }

    fn sin(&self) -> Self {
        self.rotated().sinh().unrotated()
    }

    fn tan(&self) -> Self {
        self.rotated().tanh().unrotated()
    }

    fn acos(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let s = self.asin();
        Complex::new(T::PI * half() - s.re, -s.im)
    }

    fn asin(&self) -> Self {
        self.rotated().asinh().unrotated()
    }

    fn atan(&self) -> Self {
        self.rotated().atanh().unrotated()
    }

    fn cosh(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let (x, y) = (self.re, self.im);
        let ch = x.cosh();
        if ch.is_finite() {
            return Complex::new(ch * y.cos(), x.sinh() * y.sin());
        }
        // cosh x and |sinh x| both round to e^|x| / 2 here.
        let re = scaled_exp(x.abs(), half::<T>() * y.cos());
        let im = scaled_exp(x.abs(), half::<T>() * y.sin());
        Complex::new(re, if x.is_sign_negative() { -im } else { im })
    }

    fn sinh(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let (x, y) = (self.re, self.im);
        let ch = x.cosh();
        if ch.is_finite() {
            return Complex::new(x.sinh() * y.cos(), ch * y.sin());
        }
        let re = scaled_exp(x.abs(), half::<T>() * y.cos());
        let im = scaled_exp(x.abs(), half::<T>() * y.sin());
        Complex::new(if x.is_sign_negative() { -re } else { re }, im)
    }

    fn tanh(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        let (x, y) = (self.re, self.im);
        if x.abs() > T::from_f64(22.0) {
            // tanh x has rounded to ±1
            let e = (-two::<T>() * x.abs()).exp();
            let im = T::from_f64(4.0) * y.sin() * y.cos() * e;
            return Complex::new(T::ONE.copysign(&x), im);
        }
        // Kahan, "Branch Cuts for Complex Elementary Functions"
        let t = y.tan();
        let beta = T::ONE + t * t;
        let s = x.sinh();
        let rho = (T::ONE + s * s).sqrt();
        let denom = T::ONE + beta * s * s;
        Complex::new(beta * rho * s / denom, t / denom)
    }

    fn acosh(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        if self.magnitude() > asymptotic_threshold() {
            return self.ln_double();
        }
        let root = (*self + Self::ONE).sqrt() * (*self - Self::ONE).sqrt();
        (*self + root).ln()
    }

    fn asinh(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        if self.re.is_sign_negative() {
            return -(-*self).asinh();
        }
        if self.magnitude() > asymptotic_threshold() {
            return self.ln_double();
        }
        // z + sqrt(z² + 1) - 1 = z + z² / (1 + sqrt(z² + 1))
        let z2 = *self * *self;
        let root = (z2 + Self::ONE).sqrt();
        (*self + z2 / (Self::ONE + root)).ln_1p()
    }

    fn atanh(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        (self.ln_1p() - (-*self).ln_1p()) * half::<T>()
    }

    fn pow(&self, exponent: &Self) -> Self {
        if self.is_zero() {
            return if exponent.is_finite() && exponent.re > T::ZERO {
                Self::ZERO
            } else {
                Self::INFINITY
            };
        }
        (*exponent * self.ln()).exp()
    }

    fn powi(&self, n: i32) -> Self {
        let mut base = *self;
        let mut k = n.unsigned_abs();
        let mut acc = Self::ONE;
        while k > 0 {
            if k & 1 == 1 {
                acc = acc * base;
            }
            k >>= 1;
            if k > 0 {
                base = base * base;
            }
        }
        if n < 0 {
            Self::ONE / acc
        } else {
            acc
        }
    }

    fn sqrt(&self) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        if self.magnitude() > T::MAX * T::from_f64(0.25) {
            return (*self * T::from_f64(0.25)).sqrt() * two::<T>();
        }
        if self.magnitude() < T::MIN_POSITIVE {
            // (|x| + |z|) / 2 would lose bits or vanish
            let k = T::MANTISSA_DIGITS as i32;
            let r = Complex::new(self.re.scale_b(2 * k), self.im.scale_b(2 * k)).sqrt();
            return Complex::new(r.re.scale_b(-k), r.im.scale_b(-k));
        }
        let (x, y) = (self.re, self.im);
        let t = ((x.abs() + self.length()) * half()).sqrt();
        if x.is_sign_positive() {
            Complex::new(t, y / (two::<T>() * t))
        } else {
            Complex::new(y.abs() / (two::<T>() * t), t.copysign(&y))
        }
    }

    fn root(&self, n: i32) -> Self {
        if n == 0 || !self.is_finite() {
            return Self::INFINITY;
        }
        if self.is_zero() {
            return if n > 0 { Self::ZERO } else { Self::INFINITY };
        }
        (self.ln() / T::from_f64(n as f64)).exp()
    }
}
