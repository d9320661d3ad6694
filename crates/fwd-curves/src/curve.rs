//! `Curve` — the contract shared by every forward curve.
//!
//! A curve is a forward-rate function of time `u >= 0` (years since the
//! valuation date) with:
//!
//! * **value** — the instantaneous forward at `u`;
//! * **integral** — `∫ₜᵘ value(s) ds`;
//! * **extrapolation** — the value used beyond the last knot, readable and
//!   replaceable in place;
//! * **back** — the last knot `(time, value)`, `(+∞, c)` for a curve that is
//!   flat everywhere.
//!
//! Discount factors, spot rates and shifted forwards follow from these and
//! are provided by [`CurveExt`] for every curve, trait objects included.

use fwd_core::{Real, Scalar};
use fwd_math::close_enough;

/// A forward curve.
///
/// The trait is object safe; `&dyn Curve<T>` is how curves of different
/// construction are combined (see [`Plus`](crate::Plus)).
pub trait Curve<T: Scalar = Real>: std::fmt::Debug + Send + Sync {
    /// Forward value at time `u`.
    ///
    /// NaN when `u` is outside the curve's domain.
    fn value(&self, u: T) -> T;

    /// Integral of the forward from `t` to `u`.
    fn integral(&self, u: T, t: T) -> T;

    /// The current extrapolation value.
    fn extrapolation(&self) -> T;

    /// Replace the extrapolation value.
    fn set_extrapolation(&mut self, extrapolation: T);

    /// Last knot `(time, value)` of the curve.
    fn back(&self) -> (T, T);

    /// Integral of the forward from `0` to `u`.
    fn integral_from_origin(&self, u: T) -> T {
        self.integral(u, T::zero())
    }

    /// Replace the extrapolation value and return the curve for chaining.
    fn extrapolate(&mut self, extrapolation: T) -> &mut Self
    where
        Self: Sized,
    {
        self.set_extrapolation(extrapolation);
        self
    }
}

/// Quantities derived from a [`Curve`].
///
/// Blanket-implemented for every curve, so the definitions below hold for
/// all of them and cannot be replaced by an implementor.
pub trait CurveExt<T: Scalar = Real>: Curve<T> {
    /// Forward at `u` as seen from time `t`: `value(u + t)`.
    fn forward(&self, u: T, t: T) -> T {
        self.value(u + t)
    }

    /// Discount factor from `t` to `u`: `exp(-∫ₜᵘ f)`.
    fn discount(&self, u: T, t: T) -> T {
        (-self.integral(u, t)).exp()
    }

    /// Continuously compounded spot rate `r` with
    /// `discount(u, t) = exp(-r (u - t))`.
    ///
    /// When `u` and `t` coincide (to a few ulps) the quotient is 0/0 and the
    /// limit, the forward at `u`, is returned instead.
    fn spot(&self, u: T, t: T) -> T {
        if close_enough(u, t, 4) {
            return self.value(u);
        }
        -self.discount(u, t).ln() / (u - t)
    }
}

impl<T: Scalar, C: Curve<T> + ?Sized> CurveExt<T> for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Linear forward f(u) = a + b·u, to exercise the derived operations on
    // something that is not piecewise flat.
    #[derive(Debug)]
    struct Linear {
        a: f64,
        b: f64,
    }

    impl Curve for Linear {
        fn value(&self, u: f64) -> f64 {
            if u < 0.0 {
                return f64::NAN;
            }
            self.a + self.b * u
        }

        fn integral(&self, u: f64, t: f64) -> f64 {
            let prim = |x: f64| self.a * x + 0.5 * self.b * x * x;
            prim(u) - prim(t)
        }

        fn extrapolation(&self) -> f64 {
            self.a
        }

        fn set_extrapolation(&mut self, extrapolation: f64) {
            self.a = extrapolation;
        }

        fn back(&self) -> (f64, f64) {
            (f64::INFINITY, f64::INFINITY)
        }
    }

    #[test]
    fn forward_shifts_time() {
        let c = Linear { a: 0.01, b: 0.002 };
        assert_abs_diff_eq!(c.forward(1.0, 2.0), c.value(3.0), epsilon = 1e-15);
        assert_abs_diff_eq!(c.forward(1.0, 0.0), 0.012, epsilon = 1e-15);
    }

    #[test]
    fn discount_and_spot() {
        let c = Linear { a: 0.01, b: 0.002 };
        let i: f64 = 0.01 * 2.0 + 0.001 * 4.0;
        assert_abs_diff_eq!(c.discount(2.0, 0.0), (-i).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(c.discount(0.0, 0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.spot(2.0, 0.0), i / 2.0, epsilon = 1e-14);

        // Between 1 and 3 the average of a + b·s is a + 2b.
        assert_abs_diff_eq!(c.spot(3.0, 1.0), 0.014, epsilon = 1e-14);
    }

    #[test]
    fn spot_at_coincident_times_is_the_forward() {
        let c = Linear { a: 0.01, b: 0.002 };
        assert_eq!(c.spot(1.5, 1.5), c.value(1.5));
        assert_eq!(c.spot(0.0, 0.0), 0.01);
    }

    #[test]
    fn extrapolate_chains() {
        let mut c = Linear { a: 0.01, b: 0.0 };
        let v = c.extrapolate(0.02).value(5.0);
        assert_eq!(v, 0.02);
        assert_eq!(c.extrapolation(), 0.02);
        assert_eq!(c.integral_from_origin(2.0), 0.04);
    }

    #[test]
    fn derived_operations_through_trait_object() {
        let c = Linear { a: 0.03, b: 0.0 };
        let dynamic: &dyn Curve = &c;
        assert_abs_diff_eq!(dynamic.discount(1.0, 0.0), (-0.03_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(dynamic.spot(4.0, 0.0), 0.03, epsilon = 1e-14);
    }
}
