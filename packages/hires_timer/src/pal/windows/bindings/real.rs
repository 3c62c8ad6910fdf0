use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn query_performance_frequency(&self) -> Option<i64> {
        let mut frequency = 0_i64;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&raw mut frequency) }
            .ok()
            .map(|()| frequency)
    }

    fn query_performance_counter(&self) -> i64 {
        let mut counter = 0_i64;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        let result = unsafe { QueryPerformanceCounter(&raw mut counter) };

        // Documented to never fail on Windows XP and newer.
        if let Err(e) = result {
            panic!("QueryPerformanceCounter failed: {e}");
        }

        counter
    }
}
