//! Generic real and complex floating-point numerics.
//!
//! Real types are described by three nested capability traits:
//! [`ElementaryFunctions`](elementary::ElementaryFunctions) (exp, log, trig,
//! powers), [`RealFunctions`](real_functions::RealFunctions) (functions that
//! only make sense on the real line), and [`Real`](real::Real) (a concrete
//! binary precision, implemented for `f32` and `f64`).
//!
//! [`Complex<T>`](complex::Complex) is generic over any `T: Real` and treats
//! all zeros as one value and all non-finite values as one point at infinity.
//!
//! ```
//! use numerics::prelude::*;
//!
//! let z = Complex64::new(1.0, 1.0);
//! assert_eq!(z * z, Complex64::new(0.0, 2.0));
//! assert_eq!(Complex64::ONE / Complex64::ZERO, Complex64::INFINITY);
//! ```
pub mod complex;
pub mod elementary;
pub mod prelude;
pub mod real;
pub mod real_functions;

mod special;
