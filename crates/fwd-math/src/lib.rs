//! # fwd-math
//!
//! Numeric building blocks for piecewise-flat forward curves: lookup,
//! integration, discounting and spot rates over sorted knot arrays, the
//! in-place time translation with its scoped guard, and floating-point
//! comparison helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Knot-array primitives for piecewise-flat functions.
pub mod pwflat;

/// Re-anchoring knot times to a new origin.
pub mod translate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::close_enough;
pub use translate::{translate, Translated};
