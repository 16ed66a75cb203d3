use super::{division::divide, Complex};
use crate::real::Real;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[inline]
fn add<T: Real>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    Complex::new(z.re + w.re, z.im + w.im)
}

#[inline]
fn sub<T: Real>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    Complex::new(z.re - w.re, z.im - w.im)
}

#[inline]
fn mul<T: Real>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    Complex::new(z.re * w.re - z.im * w.im, z.re * w.im + z.im * w.re)
}

macro_rules! impl_self_math_op(
    ($trt:ident, $mth:ident, $func:ident) => (
        impl<T: Real> $trt for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: Complex<T>) -> Complex<T> {
                $func(self, other)
            }
        }

        impl<T: Real> $trt<&Complex<T>> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: &Complex<T>) -> Complex<T> {
                $func(self, *other)
            }
        }

        impl<T: Real> $trt<Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: Complex<T>) -> Complex<T> {
                $func(*self, other)
            }
        }

        impl<T: Real> $trt<&Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: &Complex<T>) -> Complex<T> {
                $func(*self, *other)
            }
        }
    )
);

impl_self_math_op!(Add, add, add);
impl_self_math_op!(Sub, sub, sub);
impl_self_math_op!(Mul, mul, mul);
impl_self_math_op!(Div, div, divide);

// Complex op real scalar. Adding a real only moves the real part; scaling
// by a real scales both parts, which is already exact up to rounding.
macro_rules! impl_scalar_math_op(
    ($trt:ident, $mth:ident, $operator:tt, real) => (
        impl<T: Real> $trt<T> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: T) -> Complex<T> {
                Complex::new(self.re $operator other, self.im)
            }
        }

        impl<T: Real> $trt<T> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: T) -> Complex<T> {
                Complex::new(self.re $operator other, self.im)
            }
        }
    );
    ($trt:ident, $mth:ident, $operator:tt, both) => (
        impl<T: Real> $trt<T> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: T) -> Complex<T> {
                Complex::new(self.re $operator other, self.im $operator other)
            }
        }

        impl<T: Real> $trt<T> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $mth(self, other: T) -> Complex<T> {
                Complex::new(self.re $operator other, self.im $operator other)
            }
        }
    );
);

impl_scalar_math_op!(Add, add, +, real);
impl_scalar_math_op!(Sub, sub, -, real);
impl_scalar_math_op!(Mul, mul, *, both);
impl_scalar_math_op!(Div, div, /, both);

// Real scalar op complex, for the concrete precisions.
macro_rules! impl_left_scalar_math_op(
    ($t:ty) => (
        impl Add<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn add(self, other: Complex<$t>) -> Complex<$t> {
                Complex::new(self + other.re, other.im)
            }
        }

        impl Sub<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn sub(self, other: Complex<$t>) -> Complex<$t> {
                Complex::new(self - other.re, -other.im)
            }
        }

        impl Mul<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn mul(self, other: Complex<$t>) -> Complex<$t> {
                Complex::new(self * other.re, self * other.im)
            }
        }

        impl Div<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn div(self, other: Complex<$t>) -> Complex<$t> {
                divide(Complex::from_real(self), other)
            }
        }
    )
);

impl_left_scalar_math_op!(f32);
impl_left_scalar_math_op!(f64);

macro_rules! impl_math_assign_op(
    ($trt:ident, $mth:ident, $operator:tt) => (
        impl<T: Real> $trt for Complex<T> {
            #[inline]
            fn $mth(&mut self, other: Complex<T>) {
                *self = *self $operator other;
            }
        }

        impl<T: Real> $trt<&Complex<T>> for Complex<T> {
            #[inline]
            fn $mth(&mut self, other: &Complex<T>) {
                *self = *self $operator *other;
            }
        }

        impl<T: Real> $trt<T> for Complex<T> {
            #[inline]
            fn $mth(&mut self, other: T) {
                *self = *self $operator other;
            }
        }
    )
);

impl_math_assign_op!(AddAssign, add_assign, +);
impl_math_assign_op!(SubAssign, sub_assign, -);
impl_math_assign_op!(MulAssign, mul_assign, *);
impl_math_assign_op!(DivAssign, div_assign, /);

impl<T: Real> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        Complex::new(-self.re, -self.im)
    }
}

impl<T: Real> Neg for &Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        -*self
    }
}

impl<T: Real> Sum for Complex<T> {
    fn sum<I: Iterator<Item = Complex<T>>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a, T: Real> Sum<&'a Complex<T>> for Complex<T> {
    fn sum<I: Iterator<Item = &'a Complex<T>>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<T: Real> Product for Complex<T> {
    fn product<I: Iterator<Item = Complex<T>>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a, T: Real> Product<&'a Complex<T>> for Complex<T> {
    fn product<I: Iterator<Item = &'a Complex<T>>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}
