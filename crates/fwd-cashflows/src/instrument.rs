//! Cash-flow streams: payment times paired with amounts.
//!
//! Times are in years from the valuation date, as for curves. The streams
//! here only carry the pairs; schedules and day counts that produce them are
//! the caller's business.

use fwd_core::{ensure, Error, Real, Result, Scalar};

/// A stream of cash flows.
pub trait Instrument<T: Scalar = Real>: std::fmt::Debug {
    /// Payment times.
    fn times(&self) -> &[T];

    /// Payment amounts, one per time.
    fn cash(&self) -> &[T];

    /// Number of payments.
    fn len(&self) -> usize {
        self.times().len()
    }

    /// Whether there are no payments.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The last `(time, cash)` pair.
    fn back(&self) -> Option<(T, T)> {
        Some((*self.times().last()?, *self.cash().last()?))
    }
}

/// A borrowed stream over two caller-owned slices.
///
/// Equality compares contents, not addresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowView<'a, T: Scalar = Real> {
    times: &'a [T],
    cash: &'a [T],
}

impl<'a, T: Scalar> CashFlowView<'a, T> {
    /// View `times` and `cash` as a stream.
    ///
    /// # Errors
    ///
    /// [`Error::Precondition`] when the slices differ in length.
    pub fn new(times: &'a [T], cash: &'a [T]) -> Result<Self> {
        ensure!(
            times.len() == cash.len(),
            "{} times but {} cash amounts",
            times.len(),
            cash.len()
        );
        Ok(Self { times, cash })
    }
}

impl<T: Scalar> Default for CashFlowView<'_, T> {
    fn default() -> Self {
        Self {
            times: &[],
            cash: &[],
        }
    }
}

impl<T: Scalar> Instrument<T> for CashFlowView<'_, T> {
    fn times(&self) -> &[T] {
        self.times
    }

    fn cash(&self) -> &[T] {
        self.cash
    }
}

/// An owned stream, built one payment at a time in time order.
///
/// ```
/// use fwd_cashflows::{CashFlows, Instrument};
///
/// let mut bond = CashFlows::new();
/// bond.push(0.5, 2.5)?.push(1.0, 102.5)?;
/// assert_eq!(bond.back(), Some((1.0, 102.5)));
/// assert!(bond.push(1.0, 1.0).is_err());
/// # Ok::<(), fwd_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlows<T: Scalar = Real> {
    times: Vec<T>,
    cash: Vec<T>,
}

impl<T: Scalar> CashFlows<T> {
    /// An empty stream.
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            cash: Vec::new(),
        }
    }

    /// An empty stream with room for `n` payments.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            cash: Vec::with_capacity(n),
        }
    }

    /// Append a payment of `cash` at `time`.
    ///
    /// # Errors
    ///
    /// [`Error::Precondition`] unless `time` is later than the last payment.
    pub fn push(&mut self, time: T, cash: T) -> Result<&mut Self> {
        if let Some(&last) = self.times.last() {
            ensure!(
                time > last,
                "cash-flow times must be strictly increasing: {:?} after {:?}",
                time,
                last
            );
        }
        self.times.push(time);
        self.cash.push(cash);
        Ok(self)
    }

    /// Borrow the stream as a [`CashFlowView`].
    pub fn view(&self) -> CashFlowView<'_, T> {
        CashFlowView {
            times: &self.times,
            cash: &self.cash,
        }
    }
}

impl<T: Scalar> Default for CashFlows<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Scalar> TryFrom<&'a [(T, T)]> for CashFlows<T> {
    type Error = Error;

    fn try_from(pairs: &'a [(T, T)]) -> Result<Self> {
        let mut flows = Self::with_capacity(pairs.len());
        for &(time, cash) in pairs {
            flows.push(time, cash)?;
        }
        Ok(flows)
    }
}

impl<T: Scalar> Instrument<T> for CashFlows<T> {
    fn times(&self) -> &[T] {
        &self.times
    }

    fn cash(&self) -> &[T] {
        &self.cash
    }
}
