//! Double-double arithmetic: ~31 decimal digits in two binary64 words.
//!
//! A [`DoubleDouble`] stores a value as an unevaluated sum `hi + lo` of
//! two IEEE-754 doubles, giving a 106-bit significand while keeping the
//! binary64 exponent range. The kernels are built on error-free
//! transformations (Dekker/Knuth two-sum and two-product), so the usual
//! algebraic operators, roots, exponentials, logarithms, trigonometric
//! and hyperbolic functions are all faithfully rounded, and decimal
//! conversion in both directions rounds correctly at up to 31 digits.
//!
//! ```
//! use ddfloat::DoubleDouble;
//!
//! let a: DoubleDouble = "0.1".parse().unwrap();
//! let b: DoubleDouble = "0.2".parse().unwrap();
//! assert_eq!((a + b).show(), "0.3");
//!
//! let p = DoubleDouble::from(2.0).powi(100);
//! assert_eq!(p.show(), "1267650600228229401496703205376");
//! ```
//!
//! Arithmetic never panics: domain errors come back as NaN and range
//! errors as ±infinity, exactly like the underlying doubles. The host
//! must run with round-to-nearest-even and without contracting
//! floating-point expressions; both are the Rust defaults.

mod arith;
mod dd;
mod eft;
mod exp;
mod fmt;
mod hyp;
mod parse;
mod pow;
mod round;
mod trig;

pub mod consts;

pub use dd::DoubleDouble;
pub use parse::ParseDdError;
