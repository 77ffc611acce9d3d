//! An explicit success-or-error union for expected failure paths.
//!
//! A [`Result`] holds either a success value or a domain [`Error`], in place
//! of a thrown exception. Failures are plain values: construct one of the
//! [`Error`] variants, lift it into a result and let [`Result::and_then`]
//! short-circuit the rest of the pipeline.
//!
//! ```
//! use verdict::{Error, FieldError, Result};
//!
//! fn parse_age(raw: &str) -> Result<u8> {
//!     match raw.parse() {
//!         Ok(age) => Result::success(age),
//!         Err(_) => Error::validation(
//!             "bad age",
//!             [FieldError::new("age", "must be a small positive number")],
//!         )
//!         .into_result(),
//!     }
//! }
//!
//! let code = parse_age("-3").fold(|_| "ok".to_string(), |err| err.code().to_string());
//! assert_eq!(code, "ValidationError");
//! ```

#![deny(missing_debug_implementations)]

mod convert;
pub mod error;
pub mod result;
pub mod unit;

pub use crate::{
    error::{Error, FieldError},
    result::Result,
    unit::UnitResult,
};
