//! Cash-flow analysis against a forward curve.
//!
//! Every function discounts each payment from its time back to zero:
//! - `npv` — present value `Σ cᵢ D(uᵢ)`
//! - `bps` — basis-point sensitivity `Σ uᵢ cᵢ D(uᵢ) · 10⁻⁴`
//! - `duration` — Macaulay duration `Σ uᵢ cᵢ D(uᵢ) / npv`
//!
//! Payments at negative times have no discount factor; they make the result
//! NaN and are reported with a `warn` event.

use crate::instrument::Instrument;
use fwd_core::Scalar;
use fwd_curves::{Curve, CurveExt};

/// One basis point.
const BASIS_POINT: f64 = 1.0e-4;

/// `(time, cash, discount)` for every payment.
fn discounted<'a, T, I, C>(instrument: &'a I, curve: &'a C) -> impl Iterator<Item = (T, T, T)> + 'a
where
    T: Scalar,
    I: Instrument<T> + ?Sized,
    C: Curve<T> + ?Sized,
{
    instrument
        .times()
        .iter()
        .zip(instrument.cash())
        .map(move |(&u, &c)| {
            let d = curve.discount(u, T::zero());
            if d.is_nan() {
                tracing::warn!(time = ?u, cash = ?c, "no discount factor for cash flow");
            }
            (u, c, d)
        })
}

/// Net present value of `instrument` under `curve`.
pub fn npv<T, I, C>(instrument: &I, curve: &C) -> T
where
    T: Scalar,
    I: Instrument<T> + ?Sized,
    C: Curve<T> + ?Sized,
{
    discounted(instrument, curve).fold(T::zero(), |acc, (_, c, d)| acc + c * d)
}

/// Basis-point sensitivity of `instrument` under `curve`.
///
/// This is the first-order change in NPV for a 1bp parallel shift of the
/// forwards, with the sign dropped: `Σ uᵢ cᵢ D(uᵢ) · 10⁻⁴`.
pub fn bps<T, I, C>(instrument: &I, curve: &C) -> T
where
    T: Scalar,
    I: Instrument<T> + ?Sized,
    C: Curve<T> + ?Sized,
{
    let bp = T::from(BASIS_POINT).unwrap_or_else(T::nan);
    discounted(instrument, curve).fold(T::zero(), |acc, (u, c, d)| acc + u * c * d) * bp
}

/// Macaulay duration of `instrument` under `curve`.
///
/// NaN when the present value is zero, which includes an empty instrument.
pub fn duration<T, I, C>(instrument: &I, curve: &C) -> T
where
    T: Scalar,
    I: Instrument<T> + ?Sized,
    C: Curve<T> + ?Sized,
{
    let (pv, weighted) = discounted(instrument, curve).fold(
        (T::zero(), T::zero()),
        |(pv, weighted), (u, c, d)| (pv + c * d, weighted + u * c * d),
    );
    if pv == T::zero() {
        return T::nan();
    }
    weighted / pv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{CashFlowView, CashFlows};
    use approx::assert_abs_diff_eq;
    use fwd_curves::{ConstantCurve, PwFlatCurve};
    use proptest::prelude::*;

    fn curve() -> PwFlatCurve {
        PwFlatCurve::new(&[1.0, 2.0, 3.0], &[0.02, 0.03, 0.04], 0.05).unwrap()
    }

    #[test]
    fn single_unit_flow() {
        let f = curve();
        for u in [0.0, 0.5, 1.0, 2.5, 4.0] {
            let flows = CashFlows::try_from(&[(u, 1.0)][..]).unwrap();
            assert_eq!(npv(&flows, &f), f.discount(u, 0.0));
            assert_abs_diff_eq!(duration(&flows, &f), u, epsilon = 1e-15);
            assert_abs_diff_eq!(bps(&flows, &f), u * f.discount(u, 0.0) * 1e-4, epsilon = 1e-18);
        }
    }

    #[test]
    fn two_flows() {
        let f = curve();
        let times = [1.0, 2.0];
        let cash = [5.0, 105.0];
        let view = CashFlowView::new(&times, &cash).unwrap();

        let d1 = (-0.02_f64).exp();
        let d2 = (-0.05_f64).exp();
        let pv = 5.0 * d1 + 105.0 * d2;

        assert_abs_diff_eq!(npv(&view, &f), pv, epsilon = 1e-12);
        assert_abs_diff_eq!(bps(&view, &f), (5.0 * d1 + 210.0 * d2) * 1e-4, epsilon = 1e-15);
        assert_abs_diff_eq!(duration(&view, &f), (5.0 * d1 + 210.0 * d2) / pv, epsilon = 1e-12);
    }

    #[test]
    fn empty_instrument() {
        let f = curve();
        let empty = CashFlowView::<f64>::default();
        assert_eq!(npv(&empty, &f), 0.0);
        assert_eq!(bps(&empty, &f), 0.0);
        assert!(duration(&empty, &f).is_nan());
    }

    #[test]
    fn zero_present_value_has_no_duration() {
        let c = ConstantCurve::<f64>::new(0.0);
        let flows = CashFlows::try_from(&[(1.0, 1.0), (2.0, -1.0)][..]).unwrap();
        assert_eq!(npv(&flows, &c), 0.0);
        assert!(duration(&flows, &c).is_nan());
    }

    #[test]
    fn negative_time_is_nan() {
        let f = curve();
        let flows = CashFlows::try_from(&[(-0.5, 1.0), (1.0, 1.0)][..]).unwrap();
        assert!(npv(&flows, &f).is_nan());
        assert!(bps(&flows, &f).is_nan());
        assert!(duration(&flows, &f).is_nan());
    }

    #[test]
    fn dynamic_arguments() {
        let f = curve();
        let flows = CashFlows::try_from(&[(1.0, 1.0), (3.0, 1.0)][..]).unwrap();
        let instrument: &dyn Instrument = &flows;
        let spread = &f + 0.01;
        let dynamic: &dyn Curve = &spread;

        let expected = (-0.03_f64).exp() + (-0.12_f64).exp();
        assert_abs_diff_eq!(npv(instrument, dynamic), expected, epsilon = 1e-12);
    }

    #[test]
    fn single_precision() {
        let c = ConstantCurve::new(0.05_f32);
        let flows = CashFlows::try_from(&[(1.0_f32, 100.0_f32)][..]).unwrap();
        assert_abs_diff_eq!(npv(&flows, &c), 100.0 * (-0.05_f32).exp(), epsilon = 1e-4);
        assert_abs_diff_eq!(duration(&flows, &c), 1.0, epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn npv_is_linear_in_cash(
            cash in prop::collection::vec(-100.0..100.0_f64, 1..12),
            scale in -3.0..3.0_f64,
        ) {
            let f = curve();
            let times: Vec<f64> = (1..=cash.len()).map(|i| 0.5 * i as f64).collect();
            let scaled: Vec<f64> = cash.iter().map(|c| c * scale).collect();
            let a = CashFlowView::new(&times, &cash).unwrap();
            let b = CashFlowView::new(&times, &scaled).unwrap();

            prop_assert!((npv(&b, &f) - scale * npv(&a, &f)).abs() < 1e-9);
        }

        #[test]
        fn duration_lies_within_payment_times(
            cash in prop::collection::vec(0.01..100.0_f64, 1..12),
        ) {
            let f = curve();
            let times: Vec<f64> = (1..=cash.len()).map(|i| 0.5 * i as f64).collect();
            let view = CashFlowView::new(&times, &cash).unwrap();
            let d = duration(&view, &f);

            prop_assert!(d >= times[0] - 1e-12);
            prop_assert!(d <= times[times.len() - 1] + 1e-12);
        }
    }
}
