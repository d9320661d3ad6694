//! # fwd-curves
//!
//! Forward curves evaluated through one contract.
//!
//! * [`Curve`] — the capability set every curve implements: forward value,
//!   integral, extrapolation value, and last knot.
//! * [`CurveExt`] — forward, discount and spot, derived once from [`Curve`]
//!   for every implementor.
//! * [`ConstantCurve`], [`PwFlatCurve`] / [`PwFlatView`] — concrete curves.
//! * [`Plus`] — the sum of two curves, built with `&f + &g` or `&f + spread`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Curve` and `CurveExt` — the curve contract.
pub mod curve;

/// `ConstantCurve` — the same forward at every time.
pub mod constant;

/// `PwFlatCurve` — piecewise-flat forward curve over owned knots.
pub mod pwflat_curve;

/// `Plus` — additive combination of two curves.
pub mod plus;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use constant::ConstantCurve;
pub use curve::{Curve, CurveExt};
pub use plus::Plus;
pub use pwflat_curve::{PwFlatCurve, PwFlatView};
