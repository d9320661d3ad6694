//! `Plus` — the sum of two curves.
//!
//! `Plus` borrows its operands, so it cannot outlive them and never copies
//! their knots. The right operand may instead be a constant spread, held by
//! value.
//!
//! Two behaviours are narrower than the general [`Curve`]
//! contract:
//!
//! * [`integral`](Curve::integral) ignores its lower bound and integrates
//!   both operands from time zero. Callers needing `∫ₜᵘ` must difference two
//!   calls.
//! * [`set_extrapolation`](Curve::set_extrapolation) leaves the operands
//!   alone. Extrapolate the operands before combining them.

use crate::constant::ConstantCurve;
use crate::curve::Curve;
use crate::pwflat_curve::{PwFlatCurve, PwFlatView};
use fwd_core::{Real, Scalar};
use std::ops::Add;

/// Right-hand operand of a [`Plus`].
#[derive(Debug, Clone, Copy)]
enum Operand<'a, T: Scalar> {
    Curve(&'a dyn Curve<T>),
    Spread(ConstantCurve<T>),
}

impl<T: Scalar> Operand<'_, T> {
    fn as_curve(&self) -> &dyn Curve<T> {
        match self {
            Operand::Curve(c) => *c,
            Operand::Spread(s) => s,
        }
    }
}

/// The pointwise sum `f + g` of two curves.
///
/// ```
/// use fwd_curves::{ConstantCurve, Curve, PwFlatCurve};
///
/// let base = PwFlatCurve::<f64>::new(&[1.0, 2.0], &[0.01, 0.02], 0.03).unwrap();
/// let spread = ConstantCurve::new(0.005);
///
/// let sum = &base + &spread;
/// assert_eq!(sum.value(1.5), 0.02 + 0.005);
///
/// let bumped = &base + 0.0001;
/// assert_eq!(bumped.back(), (2.0, 0.02 + 0.0001));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Plus<'a, T: Scalar = Real> {
    f: &'a dyn Curve<T>,
    g: Operand<'a, T>,
}

impl<'a, T: Scalar> Plus<'a, T> {
    /// The sum of two borrowed curves.
    pub fn new(f: &'a dyn Curve<T>, g: &'a dyn Curve<T>) -> Self {
        Self {
            f,
            g: Operand::Curve(g),
        }
    }

    /// `f` shifted by a constant spread `s`.
    pub fn spread(f: &'a dyn Curve<T>, s: T) -> Self {
        Self {
            f,
            g: Operand::Spread(ConstantCurve::new(s)),
        }
    }

    /// The left operand.
    pub fn left(&self) -> &'a dyn Curve<T> {
        self.f
    }

    /// The right operand.
    pub fn right(&self) -> &dyn Curve<T> {
        self.g.as_curve()
    }
}

impl<T: Scalar> Curve<T> for Plus<'_, T> {
    fn value(&self, u: T) -> T {
        self.f.value(u) + self.right().value(u)
    }

    fn integral(&self, u: T, _t: T) -> T {
        self.f.integral_from_origin(u) + self.right().integral_from_origin(u)
    }

    fn extrapolation(&self) -> T {
        self.f.extrapolation() + self.right().extrapolation()
    }

    fn set_extrapolation(&mut self, extrapolation: T) {
        tracing::debug!(
            extrapolation = ?extrapolation,
            "extrapolation of a curve sum is not forwarded to its operands"
        );
    }

    /// The earlier of the two last knots, with the summed knot values.
    fn back(&self) -> (T, T) {
        let (ft, fv) = self.f.back();
        let (gt, gv) = self.right().back();

        (ft.min(gt), fv + gv)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl<'a, T: Scalar, R: Curve<T>> Add<&'a R> for &'a ConstantCurve<T> {
    type Output = Plus<'a, T>;

    fn add(self, g: &'a R) -> Plus<'a, T> {
        Plus::new(self, g)
    }
}

impl<'a, T: Scalar, R: Curve<T>> Add<&'a R> for &'a PwFlatCurve<T> {
    type Output = Plus<'a, T>;

    fn add(self, g: &'a R) -> Plus<'a, T> {
        Plus::new(self, g)
    }
}

impl<'a, 'b: 'a, T: Scalar, R: Curve<T>> Add<&'a R> for &'a PwFlatView<'b, T> {
    type Output = Plus<'a, T>;

    fn add(self, g: &'a R) -> Plus<'a, T> {
        Plus::new(self, g)
    }
}

impl<'a, 'b: 'a, T: Scalar, R: Curve<T>> Add<&'a R> for &'a Plus<'b, T> {
    type Output = Plus<'a, T>;

    fn add(self, g: &'a R) -> Plus<'a, T> {
        Plus::new(self, g)
    }
}

macro_rules! impl_add_spread {
    ($($float:ty),*) => {$(
        impl<'a> Add<$float> for &'a ConstantCurve<$float> {
            type Output = Plus<'a, $float>;

            fn add(self, s: $float) -> Plus<'a, $float> {
                Plus::spread(self, s)
            }
        }

        impl<'a> Add<$float> for &'a PwFlatCurve<$float> {
            type Output = Plus<'a, $float>;

            fn add(self, s: $float) -> Plus<'a, $float> {
                Plus::spread(self, s)
            }
        }

        impl<'a, 'b: 'a> Add<$float> for &'a PwFlatView<'b, $float> {
            type Output = Plus<'a, $float>;

            fn add(self, s: $float) -> Plus<'a, $float> {
                Plus::spread(self, s)
            }
        }

        impl<'a, 'b: 'a> Add<$float> for &'a Plus<'b, $float> {
            type Output = Plus<'a, $float>;

            fn add(self, s: $float) -> Plus<'a, $float> {
                Plus::spread(self, s)
            }
        }
    )*};
}

impl_add_spread!(f64, f32);
