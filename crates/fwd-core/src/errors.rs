//! Error types for fwdcurve.
//!
//! Domain errors of the numeric core (a negative time, mismatched slices)
//! never reach this module: they are signalled by returning NaN. The enum
//! below covers the configuration checks performed by owning constructors
//! such as `PwFlatCurve::new`, which validate what the primitives merely
//! assume.

use thiserror::Error;

/// The top-level error type used throughout fwdcurve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout fwdcurve.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fwd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> fwd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
