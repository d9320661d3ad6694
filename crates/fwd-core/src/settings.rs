//! Global library settings.
//!
//! [`Settings`] holds the **default extrapolation value**: the tail value a
//! curve receives when it is built without an explicit one. It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`. Out of the
//! box it is NaN, so evaluating an unconfigured curve beyond its last knot
//! yields NaN rather than an invented rate.
//!
//! Thread safety: the value is stored behind a `Mutex` so that it can be
//! changed from any thread. Code that changes it temporarily should use
//! [`ScopedExtrapolation`], which restores the previous value on drop.

use crate::Real;
use num_traits::Float;
use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the fwdcurve library.
pub struct Settings {
    default_extrapolation: Mutex<Real>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_extrapolation: Mutex::new(Real::NAN),
        })
    }

    /// The extrapolation value given to curves built without one.
    pub fn default_extrapolation(&self) -> Real {
        *self
            .default_extrapolation
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// The default extrapolation value converted to `T`.
    ///
    /// Values not representable in `T` become NaN.
    pub fn default_extrapolation_as<T: Float>(&self) -> T {
        T::from(self.default_extrapolation()).unwrap_or_else(T::nan)
    }

    /// Set the default extrapolation value.
    pub fn set_default_extrapolation(&self, value: Real) {
        *self
            .default_extrapolation
            .lock()
            .expect("Settings mutex poisoned") = value;
    }

    /// Reset the default extrapolation value to NaN.
    pub fn reset_default_extrapolation(&self) {
        self.set_default_extrapolation(Real::NAN);
    }
}

/// Sets the default extrapolation value for the lifetime of the guard.
///
/// The previous value is restored when the guard is dropped.
#[must_use = "the previous value is restored as soon as the guard is dropped"]
pub struct ScopedExtrapolation {
    previous: Real,
}

impl ScopedExtrapolation {
    /// Install `value` as the default extrapolation.
    pub fn new(value: Real) -> Self {
        let settings = Settings::instance();
        let previous = settings.default_extrapolation();
        settings.set_default_extrapolation(value);
        Self { previous }
    }
}

impl Drop for ScopedExtrapolation {
    fn drop(&mut self) {
        Settings::instance().set_default_extrapolation(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests in this module share the singleton.
    static LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn default_is_nan() {
        let _lock = LOCK.lock().unwrap();
        assert!(Settings::instance().default_extrapolation().is_nan());
    }

    #[test]
    fn set_and_reset() {
        let _lock = LOCK.lock().unwrap();
        let s = Settings::instance();
        s.set_default_extrapolation(0.03);
        assert_eq!(s.default_extrapolation(), 0.03);
        assert_eq!(s.default_extrapolation_as::<f32>(), 0.03_f32);
        s.reset_default_extrapolation();
        assert!(s.default_extrapolation().is_nan());
    }

    #[test]
    fn scoped_value_is_restored() {
        let _lock = LOCK.lock().unwrap();
        {
            let _guard = ScopedExtrapolation::new(0.05);
            assert_eq!(Settings::instance().default_extrapolation(), 0.05);
            {
                let _inner = ScopedExtrapolation::new(0.07);
                assert_eq!(Settings::instance().default_extrapolation(), 0.07);
            }
            assert_eq!(Settings::instance().default_extrapolation(), 0.05);
        }
        assert!(Settings::instance().default_extrapolation().is_nan());
    }
}
