//! # fwdcurve
//!
//! Piecewise-flat forward curves: lookup, integration, discounting,
//! composition and cash-flow valuation.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fwd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fwdcurve = "0.1"
//! ```
//!
//! ```rust
//! use fwdcurve::cashflows::{npv, CashFlows};
//! use fwdcurve::curves::{Curve, CurveExt, PwFlatCurve};
//!
//! let curve = PwFlatCurve::new(&[1.0, 2.0, 3.0], &[0.02, 0.03, 0.04], 0.04)?;
//! assert_eq!(curve.value(1.5), 0.03);
//! assert!((curve.discount(1.5, 0.0) - (-0.035_f64).exp()).abs() < 1e-15);
//!
//! let bumped = &curve + 0.0001;
//! assert!(bumped.spot(2.0, 0.0) > curve.spot(2.0, 0.0));
//!
//! let mut flows = CashFlows::new();
//! flows.push(1.0, 0.05)?.push(2.0, 1.05)?;
//! assert!(npv(&flows, &bumped) < npv(&flows, &curve));
//! # Ok::<(), fwdcurve::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and settings.
pub use fwd_core as core;

/// Knot-array primitives, time translation and float comparison.
pub use fwd_math as math;

/// The curve contract and its implementations.
pub use fwd_curves as curves;

/// Cash-flow streams and their valuation.
pub use fwd_cashflows as cashflows;
