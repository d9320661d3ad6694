//! `ConstantCurve` — a forward curve with the same value at every time.

use crate::curve::Curve;
use fwd_core::{Real, Scalar, Settings};

/// A flat forward curve.
///
/// Its single scalar doubles as the extrapolation value, and it has no last
/// knot: [`back`](Curve::back) returns `(+∞, c)`. As for every curve, the
/// value at a negative time is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurve<T: Scalar = Real> {
    f: T,
}

impl<T: Scalar> ConstantCurve<T> {
    /// A curve equal to `f` everywhere.
    pub fn new(f: T) -> Self {
        Self { f }
    }

    /// The constant forward.
    pub fn rate(&self) -> T {
        self.f
    }
}

impl<T: Scalar> Default for ConstantCurve<T> {
    /// A curve at the configured default extrapolation value (NaN unless set
    /// through [`Settings`]).
    fn default() -> Self {
        Self::new(Settings::instance().default_extrapolation_as())
    }
}

impl<T: Scalar> Curve<T> for ConstantCurve<T> {
    fn value(&self, u: T) -> T {
        if !(u >= T::zero()) {
            return T::nan();
        }
        self.f
    }

    fn integral(&self, u: T, t: T) -> T {
        self.f * (u - t)
    }

    fn extrapolation(&self) -> T {
        self.f
    }

    fn set_extrapolation(&mut self, extrapolation: T) {
        self.f = extrapolation;
    }

    fn back(&self) -> (T, T) {
        (T::infinity(), self.f)
    }
}
