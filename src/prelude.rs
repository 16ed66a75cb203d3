//! numerics prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use numerics::prelude::*;
//!
//! let w = Complex32::root_of_unity(1, 4);
//! assert_eq!(w, Complex32::I);
//! ```

#[doc(no_inline)]
pub use crate::complex::{Complex, Complex32, Complex64};

#[doc(no_inline)]
pub use crate::elementary::ElementaryFunctions;
#[doc(no_inline)]
pub use crate::real::Real;
#[doc(no_inline)]
pub use crate::real_functions::RealFunctions;
