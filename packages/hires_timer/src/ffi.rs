//! JNI entry points.
//!
//! The JVM calls [`JNI_OnLoad`] once when `System.loadLibrary` loads this library, which creates
//! the process-wide [`HighResTimer`]. After that, the Java class `hires_timer.HighResTimer` can
//! call its native method:
//!
//! ```java
//! package hires_timer;
//!
//! public final class HighResTimer {
//!     static {
//!         System.loadLibrary("hires_timer");
//!     }
//!
//!     public static native double getTime();
//! }
//! ```
//!
//! Nothing crosses this boundary as an error. If the platform has no usable counter, loading still
//! succeeds and every `getTime()` call returns `NaN`. The one exception is a failure of the OS
//! counter query itself, which Windows documents as impossible: it panics, and since a panic cannot
//! unwind out of an `extern "system"` function, the JVM process aborts rather than receiving `NaN`.
//!
//! Debug builds (and release builds with the `stderr_log` feature) install a `tracing` subscriber
//! writing to stderr on load, so the diagnostics emitted during initialization are visible.

use std::ffi::c_void;
use std::sync::OnceLock;

use jni_sys::{JNI_VERSION_1_2, JNIEnv, JavaVM, jclass, jdouble, jint};

use crate::{HighResTimer, Result};

/// The JNI version this library requires from the JVM.
pub const REQUIRED_JNI_VERSION: jint = JNI_VERSION_1_2;

static TIMER: OnceLock<HighResTimer> = OnceLock::new();

/// Called by the JVM when the library is loaded.
///
/// Sets up the process-wide timer and returns [`REQUIRED_JNI_VERSION`] regardless of whether the
/// platform counter turned out to be usable.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    #[cfg(any(debug_assertions, feature = "stderr_log"))]
    install_stderr_subscriber();

    on_load(&TIMER, HighResTimer::new)
}

/// Implements `static native double getTime()` of the Java class `hires_timer.HighResTimer`.
///
/// Returns the current timestamp in fractional milliseconds, or `NaN` if no usable timer exists.
#[unsafe(no_mangle)]
pub extern "system" fn Java_hires_1timer_HighResTimer_getTime(
    _env: *mut JNIEnv,
    _class: jclass,
) -> jdouble {
    get_time(&TIMER)
}

fn on_load(timer: &OnceLock<HighResTimer>, create: impl FnOnce() -> Result<HighResTimer>) -> jint {
    if timer.get().is_some() {
        tracing::warn!("library loaded more than once; keeping the existing timer");
        return REQUIRED_JNI_VERSION;
    }

    match create() {
        Ok(created) => {
            if timer.set(created).is_err() {
                tracing::warn!("timer was installed concurrently; keeping the existing timer");
            }
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "high-resolution timer is unavailable; getTime() will return NaN"
            );
        }
    }

    REQUIRED_JNI_VERSION
}

fn get_time(timer: &OnceLock<HighResTimer>) -> jdouble {
    timer.get().map_or(f64::NAN, HighResTimer::now_millis)
}

#[cfg(any(debug_assertions, feature = "stderr_log"))]
fn install_stderr_subscriber() {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    if installed.is_err() {
        tracing::debug!("a tracing subscriber is already installed; not replacing it");
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Error;
    use crate::pal::{MockPlatform, PlatformFacade};

    fn mock_timer(ticks_per_second: u64, counter: u64) -> Result<HighResTimer> {
        let mut platform = MockPlatform::new();
        platform
            .expect_counter_frequency()
            .return_const(ticks_per_second);
        platform.expect_counter_value().return_const(counter);

        HighResTimer::from_pal(PlatformFacade::from(platform))
    }

    #[test]
    fn get_time_before_load_is_nan() {
        let timer = OnceLock::new();

        assert!(get_time(&timer).is_nan());
    }

    #[test]
    fn load_then_get_time() {
        let timer = OnceLock::new();

        let version = on_load(&timer, || mock_timer(1_000_000, 2_000_000));

        assert_eq!(version, JNI_VERSION_1_2);
        assert!((get_time(&timer) - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unsupported_counter_still_loads_and_yields_nan() {
        let timer = OnceLock::new();

        let version = on_load(&timer, || mock_timer(0, 2_000_000));

        assert_eq!(version, JNI_VERSION_1_2);
        assert!(timer.get().is_none());
        assert!(get_time(&timer).is_nan());
    }

    #[test]
    fn creation_failure_is_not_fatal() {
        let timer = OnceLock::new();

        let version = on_load(&timer, || Err(Error::CounterUnavailable));

        assert_eq!(version, REQUIRED_JNI_VERSION);
        assert!(!get_time(&timer).is_finite());
    }

    #[test]
    fn second_load_keeps_first_timer() {
        let timer = OnceLock::new();

        on_load(&timer, || mock_timer(1_000_000, 2_000_000));
        on_load(&timer, || panic!("existing timer must not be replaced"));

        let scale = timer.get().unwrap().scale_factor();
        assert!((scale.ticks_per_millisecond() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn failed_load_is_retried_by_next_load() {
        let timer = OnceLock::new();

        on_load(&timer, || Err(Error::CounterUnavailable));
        assert!(get_time(&timer).is_nan());

        on_load(&timer, || mock_timer(1_000_000, 2_000_000));

        assert!(timer.get().is_some());
        assert!((get_time(&timer) - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn concurrently_installed_timer_wins() {
        let timer = OnceLock::new();

        // Another thread installs its timer while this load is still creating one.
        on_load(&timer, || {
            timer
                .set(mock_timer(1_000_000, 2_000_000).unwrap())
                .unwrap();
            mock_timer(4_000_000, 2_000_000)
        });

        let scale = timer.get().unwrap().scale_factor();
        assert!((scale.ticks_per_millisecond() - 1000.0).abs() < f64::EPSILON);
        assert!((get_time(&timer) - 2000.0).abs() < f64::EPSILON);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_build_installs_stderr_subscriber() {
        install_stderr_subscriber();

        assert!(tracing::dispatcher::has_been_set());

        // A second install keeps whichever subscriber is already there.
        install_stderr_subscriber();
        assert!(tracing::dispatcher::has_been_set());
    }

    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    #[test]
    fn exported_entry_points_work_against_real_platform() {
        use std::ptr;

        let version = JNI_OnLoad(ptr::null_mut(), ptr::null_mut());
        assert_eq!(version, REQUIRED_JNI_VERSION);

        let first = Java_hires_1timer_HighResTimer_getTime(ptr::null_mut(), ptr::null_mut());
        let second = Java_hires_1timer_HighResTimer_getTime(ptr::null_mut(), ptr::null_mut());

        assert!(first.is_finite());
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
