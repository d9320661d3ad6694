//! Re-anchoring knot times to a new origin.
//!
//! [`translate`] shifts a knot array in place so that time `u` becomes the
//! new time zero, and returns the knots still in the future. Knots at or
//! before the new origin stay in storage but drop out of the returned view.
//!
//! [`Translated`] is the scoped form: it shifts on construction, exposes the
//! visible knots while alive, and writes the original times back when
//! dropped, on every exit path including early returns and unwinding. The
//! restore copies a snapshot rather than adding `u` back, so it is exact
//! even when `t[i] - u` rounds (a large or NaN shift). The guard holds the
//! unique borrow of the storage for its whole lifetime, so nothing else can
//! observe the re-anchored times.

use num_traits::Float;
use std::ops::Deref;

/// Shift every time in `t` by `-u` and return the knots with shifted time
/// `> 0`.
///
/// `t` is assumed strictly increasing. `translate(0, t)` is the identity and
/// `translate(u, ..)` followed by `translate(-u, ..)` on the same storage
/// undoes it (exactly, whenever `t[i] - u` is representable).
pub fn translate<T: Float>(u: T, t: &mut [T]) -> &mut [T] {
    for ti in t.iter_mut() {
        *ti = *ti - u;
    }
    let m = t.partition_point(|&ti| ti <= T::zero());

    &mut t[m..]
}

/// Scoped translation of a knot array.
///
/// ```
/// use fwd_math::Translated;
///
/// let mut t = [1.0, 2.0, 4.0];
/// {
///     let view = Translated::new(1.0, &mut t);
///     assert_eq!(&*view, &[1.0, 3.0]);
///     assert_eq!(view.offset(), 1);
/// }
/// assert_eq!(t, [1.0, 2.0, 4.0]);
/// ```
#[derive(Debug)]
#[must_use = "the translation is undone as soon as the guard is dropped"]
pub struct Translated<'a, T: Float> {
    shift: T,
    knots: &'a mut [T],
    saved: Vec<T>,
    offset: usize,
}

impl<'a, T: Float> Translated<'a, T> {
    /// Shift `knots` by `-shift` until the guard is dropped.
    pub fn new(shift: T, knots: &'a mut [T]) -> Self {
        let saved = knots.to_vec();
        let visible = translate(shift, knots).len();
        let offset = knots.len() - visible;
        tracing::trace!(offset, visible, "knot times translated");

        Self {
            shift,
            knots,
            saved,
            offset,
        }
    }

    /// The amount subtracted from every knot time.
    pub fn shift(&self) -> T {
        self.shift
    }

    /// Number of knots hidden because they fall at or before the new origin.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The knot times strictly after the new origin, re-expressed relative
    /// to it.
    pub fn as_slice(&self) -> &[T] {
        &self.knots[self.offset..]
    }

    /// The entries of a parallel array (e.g. forward values) that belong to
    /// the visible knots.
    ///
    /// Returns an empty slice if `values` is shorter than the hidden prefix.
    pub fn visible<'b, V>(&self, values: &'b [V]) -> &'b [V] {
        values.get(self.offset..).unwrap_or(&[])
    }
}

impl<T: Float> Deref for Translated<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Float> Drop for Translated<'_, T> {
    fn drop(&mut self) {
        self.knots.copy_from_slice(&self.saved);
        tracing::trace!(offset = self.offset, "knot times restored");
    }
}
