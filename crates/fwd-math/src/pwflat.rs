//! Knot-array primitives for piecewise-flat functions.
//!
//! A knot array is a strictly increasing slice of times `t` paired with a
//! slice of values `f` of the same length, plus one extrapolation value `_f`:
//!
//! ```text
//!          { NaN    if u < 0
//!   f(u) = { f[i]   if t[i-1] < u <= t[i]    (t[-1] = 0, u = 0 maps to f[0])
//!          { _f     if u > t[n-1]
//!
//!   F                                      _f
//!   |        f[1]              f[n-1] o---------
//!   | f[0] o------           o--------x
//!   x------x      ...  ------x
//!   |
//!   0-----t[0]---  ...  ---t[n-2]---t[n-1]------ u
//! ```
//!
//! Every function here is pure and generic over [`num_traits::Float`].
//! Domain errors (negative or NaN time, slices of different length) are
//! reported by returning NaN; nothing panics. Sortedness of `t` is a
//! precondition: the lookup relies on it and silently returns wrong values
//! when it does not hold. Use [`monotonic`] or [`validate`] first.

use fwd_core::errors::Result;
use num_traits::Float;

/// Return `true` if `t` is strictly increasing.
///
/// Empty and single-element slices are vacuously monotonic. A slice holding
/// NaN is not.
pub fn monotonic<T: PartialOrd>(t: &[T]) -> bool {
    t.windows(2).all(|w| w[0] < w[1])
}

/// Check that `(t, f)` form a usable knot array.
///
/// # Errors
/// Returns a precondition error if the lengths differ or `t` is not strictly
/// increasing.
pub fn validate<T: Float>(t: &[T], f: &[T]) -> Result<()> {
    fwd_core::ensure!(
        t.len() == f.len(),
        "{} knot times but {} knot values",
        t.len(),
        f.len()
    );
    let unsorted = t.windows(2).position(|w| !(w[0] < w[1]));
    fwd_core::ensure!(
        unsorted.is_none(),
        "knot times must be strictly increasing (index {})",
        unsorted.map_or(0, |i| i + 1)
    );
    Ok(())
}

/// `true` when `u` is a valid query time (non-negative, not NaN).
#[inline]
fn in_domain<T: Float>(u: T) -> bool {
    u >= T::zero()
}

/// Forward value at time `u`.
///
/// Finds the first knot with `t[i] >= u` by binary search and returns
/// `f[i]`, or `extrapolation` past the last knot.
pub fn value<T: Float>(u: T, t: &[T], f: &[T], extrapolation: T) -> T {
    if t.len() != f.len() || !in_domain(u) {
        return T::nan();
    }

    let i = t.partition_point(|&ti| ti < u);

    f.get(i).copied().unwrap_or(extrapolation)
}

/// Integral of the forward from `0` to `u`.
///
/// The result is continuous and piecewise linear in `u`.
pub fn integral<T: Float>(u: T, t: &[T], f: &[T], extrapolation: T) -> T {
    if t.len() != f.len() || !in_domain(u) {
        return T::nan();
    }
    if u == T::zero() {
        return T::zero();
    }

    let mut sum = T::zero();
    let mut t_ = T::zero();
    let mut i = 0;
    while i < t.len() && t[i] <= u {
        sum = sum + f[i] * (t[i] - t_);
        t_ = t[i];
        i += 1;
    }
    if u > t_ {
        sum = sum + f.get(i).copied().unwrap_or(extrapolation) * (u - t_);
    }

    sum
}

/// Discount factor `exp(-∫₀ᵘ f)`.
pub fn discount<T: Float>(u: T, t: &[T], f: &[T], extrapolation: T) -> T {
    (-integral(u, t, f, extrapolation)).exp()
}

/// Spot rate, the average forward over `[0, u]`.
///
/// Up to the first knot the function is flat, so the spot equals the
/// forward there, `u = 0` included. Without knots it is `extrapolation`
/// for every `u >= 0`.
pub fn spot<T: Float>(u: T, t: &[T], f: &[T], extrapolation: T) -> T {
    if t.len() != f.len() || !in_domain(u) {
        return T::nan();
    }

    match t.first() {
        None => extrapolation,
        Some(&t0) if u <= t0 => value(u, t, f, extrapolation),
        Some(_) => integral(u, t, f, extrapolation) / u,
    }
}
