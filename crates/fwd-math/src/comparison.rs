//! Floating-point comparison utilities.

use num_traits::Float;

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
#[inline]
pub fn close_enough<T: Float>(a: T, b: T, n: u32) -> bool {
    if a == b {
        return true;
    }
    let scale = T::from(n).unwrap_or_else(T::one);
    let eps = a.abs().max(b.abs()) * T::epsilon() * scale;
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_enough_basic() {
        assert!(close_enough(1.0, 1.0, 10));
        assert!(close_enough(1.0, 1.0 + f64::EPSILON * 5.0, 10));
        assert!(!close_enough(1.0, 1.0 + 1e-12, 10));
    }

    #[test]
    fn close_enough_scales_with_magnitude() {
        assert!(close_enough(1.0e6, 1.0e6 + 1.0e-10, 4));
        assert!(!close_enough(1.0e-6, 1.0e-6 + 1.0e-10, 4));
        assert!(close_enough(0.0, 0.0, 0));
    }

    #[test]
    fn close_enough_f32() {
        assert!(close_enough(2.0_f32, 2.0 + f32::EPSILON, 4));
    }

    #[test]
    fn nan_is_never_close() {
        assert!(!close_enough(f64::NAN, f64::NAN, 100));
        assert!(!close_enough(f64::NAN, 1.0, 100));
    }
}
