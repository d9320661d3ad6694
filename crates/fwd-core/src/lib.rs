//! # fwd-core
//!
//! Core types, error definitions, and settings for fwdcurve.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: the default numeric type, the error type
//! with its `ensure!` macro, and the process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (default extrapolation value).
pub mod settings;

// ── Default numeric type ──────────────────────────────────────────────────────

/// Floating-point type used by default throughout the library.
pub type Real = f64;

// ── Numeric bound ─────────────────────────────────────────────────────────────

/// Floating-point types usable as curve times and values.
///
/// Blanket-implemented for every `num_traits::Float` that can be shared
/// across threads and printed, which covers `f64` and `f32`.
pub trait Scalar: num_traits::Float + std::fmt::Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: num_traits::Float + std::fmt::Debug + Send + Sync + 'static {}

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedExtrapolation, Settings};
