//! # fwd-cashflows
//!
//! Streams of `(time, cash)` pairs and their valuation against any
//! [`Curve`](fwd_curves::Curve).
//!
//! * [`Instrument`] — read access to the payment times and amounts.
//! * [`CashFlowView`] / [`CashFlows`] — borrowed and owned streams.
//! * [`npv`], [`bps`], [`duration`] — present value and sensitivities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Instrument`, `CashFlowView` and `CashFlows`.
pub mod instrument;

/// Present value, basis-point sensitivity and duration.
pub mod cashflows;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cashflows::{bps, duration, npv};
pub use instrument::{CashFlowView, CashFlows, Instrument};
