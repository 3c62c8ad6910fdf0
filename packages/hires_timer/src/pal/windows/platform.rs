use crate::pal::Platform;
use crate::pal::windows::{Bindings, BindingsFacade};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::real());

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    // Only executed in const context.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl Platform for BuildTargetPlatform {
    fn counter_frequency(&self) -> u64 {
        // A failed query and a non-positive frequency both mean there is no usable counter.
        self.bindings
            .query_performance_frequency()
            .and_then(|frequency| u64::try_from(frequency).ok())
            .unwrap_or_default()
    }

    fn counter_value(&self) -> u64 {
        u64::try_from(self.bindings.query_performance_counter())
            .expect("performance counter is never negative on a functioning system")
    }
}
