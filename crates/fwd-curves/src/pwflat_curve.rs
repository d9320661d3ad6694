//! `PwFlatCurve` — a piecewise-flat forward curve over owned knots.
//!
//! The curve owns a strictly increasing array of knot times and the forward
//! in force up to each of them, plus the extrapolation value used past the
//! last knot. Evaluation delegates to [`fwd_math::pwflat`].
//!
//! [`PwFlatView`] is the same curve over borrowed knots. It is what
//! [`PwFlatCurve::with_translation`] hands out: the curve re-anchored at a
//! later time without copying or permanently altering the knot storage.

use crate::curve::Curve;
use fwd_core::{errors::Result, Real, Scalar, Settings};
use fwd_math::{pwflat, Translated};

/// A piecewise-flat forward curve.
///
/// Holds at least one knot, so [`back`](Curve::back) always has a last knot
/// to report.
#[derive(Debug, Clone, PartialEq)]
pub struct PwFlatCurve<T: Scalar = Real> {
    times: Vec<T>,
    forwards: Vec<T>,
    extrapolation: T,
}

impl<T: Scalar> PwFlatCurve<T> {
    /// Build a curve from knot times, the forwards in force up to each of
    /// them, and the value to use after the last knot.
    ///
    /// The knots are copied.
    ///
    /// # Errors
    /// Returns a precondition error if there are no knots, the slices have
    /// different lengths, or the times are not strictly increasing.
    pub fn new(times: &[T], forwards: &[T], extrapolation: T) -> Result<Self> {
        fwd_core::ensure!(
            !times.is_empty(),
            "a piecewise-flat curve needs at least one knot"
        );
        pwflat::validate(times, forwards)?;

        tracing::debug!(
            knots = times.len(),
            extrapolation = ?extrapolation,
            "piecewise-flat curve built"
        );

        Ok(Self {
            times: times.to_vec(),
            forwards: forwards.to_vec(),
            extrapolation,
        })
    }

    /// Build a curve extrapolated with the configured default value.
    ///
    /// # Errors
    /// As for [`new`](Self::new).
    pub fn from_knots(times: &[T], forwards: &[T]) -> Result<Self> {
        Self::new(
            times,
            forwards,
            Settings::instance().default_extrapolation_as(),
        )
    }

    /// The knot times.
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// The forward in force up to each knot time.
    pub fn forwards(&self) -> &[T] {
        &self.forwards
    }

    /// Number of knots (at least one).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the curve has no knots. Construction requires at least one,
    /// so this is `false` for every curve.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Borrow the curve as a [`PwFlatView`].
    pub fn as_view(&self) -> PwFlatView<'_, T> {
        PwFlatView {
            times: &self.times,
            forwards: &self.forwards,
            extrapolation: self.extrapolation,
        }
    }

    /// Evaluate `f` on the curve as seen from time `u`.
    ///
    /// The knot times are shifted by `-u` for the duration of the call and
    /// restored exactly afterwards, even if `f` panics or the shift is lossy. Knots at or before `u`
    /// are not part of the view. Passing the view time `s` to `f` evaluates
    /// the original curve at `u + s`.
    pub fn with_translation<R>(&mut self, u: T, f: impl FnOnce(&PwFlatView<'_, T>) -> R) -> R {
        let extrapolation = self.extrapolation;
        let forwards = &self.forwards;
        let times = Translated::new(u, &mut self.times);
        let view = PwFlatView {
            times: times.as_slice(),
            forwards: times.visible(forwards),
            extrapolation,
        };

        f(&view)
    }

    /// An owned copy of the curve re-anchored at time `u`.
    ///
    /// Returns `None` when no knot lies strictly after `u`.
    pub fn translated(&self, u: T) -> Option<Self> {
        let mut scratch = self.clone();
        scratch.with_translation(u, |view| view.to_curve())
    }
}

impl<T: Scalar> Curve<T> for PwFlatCurve<T> {
    fn value(&self, u: T) -> T {
        self.as_view().value(u)
    }

    fn integral(&self, u: T, t: T) -> T {
        self.as_view().integral(u, t)
    }

    fn extrapolation(&self) -> T {
        self.extrapolation
    }

    fn set_extrapolation(&mut self, extrapolation: T) {
        self.extrapolation = extrapolation;
    }

    fn back(&self) -> (T, T) {
        // Non-empty by construction.
        let n = self.times.len() - 1;
        (self.times[n], self.forwards[n])
    }
}

/// A piecewise-flat curve over borrowed knots.
///
/// Unlike [`PwFlatCurve`] the view may have no knots at all, in which case
/// it is flat at its extrapolation value and [`back`](Curve::back) reports
/// `(+∞, extrapolation)`. Setting the extrapolation on a view changes the
/// view only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PwFlatView<'a, T: Scalar = Real> {
    times: &'a [T],
    forwards: &'a [T],
    extrapolation: T,
}

impl<'a, T: Scalar> PwFlatView<'a, T> {
    /// View over caller-owned knots.
    ///
    /// No checks are made: `times` must be strictly increasing and as long
    /// as `forwards`, otherwise evaluation returns NaN or wrong values.
    pub fn new(times: &'a [T], forwards: &'a [T], extrapolation: T) -> Self {
        Self {
            times,
            forwards,
            extrapolation,
        }
    }

    /// The knot times.
    pub fn times(&self) -> &'a [T] {
        self.times
    }

    /// The forward in force up to each knot time.
    pub fn forwards(&self) -> &'a [T] {
        self.forwards
    }

    /// Discount factor `exp(-∫₀ᵘ f)`.
    pub fn discount_at(&self, u: T) -> T {
        pwflat::discount(u, self.times, self.forwards, self.extrapolation)
    }

    /// Spot rate, the average forward over `[0, u]`.
    ///
    /// Unlike the two-time [`CurveExt::spot`](crate::CurveExt::spot), this
    /// is defined at `u = 0`, where it equals the first forward.
    pub fn spot_at(&self, u: T) -> T {
        pwflat::spot(u, self.times, self.forwards, self.extrapolation)
    }

    /// Copy the view into an owned curve; `None` if it has no knots.
    pub fn to_curve(&self) -> Option<PwFlatCurve<T>> {
        PwFlatCurve::new(self.times, self.forwards, self.extrapolation).ok()
    }
}

impl<T: Scalar> Curve<T> for PwFlatView<'_, T> {
    fn value(&self, u: T) -> T {
        pwflat::value(u, self.times, self.forwards, self.extrapolation)
    }

    fn integral(&self, u: T, t: T) -> T {
        pwflat::integral(u, self.times, self.forwards, self.extrapolation)
            - pwflat::integral(t, self.times, self.forwards, self.extrapolation)
    }

    fn extrapolation(&self) -> T {
        self.extrapolation
    }

    fn set_extrapolation(&mut self, extrapolation: T) {
        self.extrapolation = extrapolation;
    }

    fn back(&self) -> (T, T) {
        match (self.times.last(), self.forwards.last()) {
            (Some(&t), Some(&f)) => (t, f),
            _ => (T::infinity(), self.extrapolation),
        }
    }
}
