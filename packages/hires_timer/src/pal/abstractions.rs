use std::fmt::Debug;

/// The high-resolution counter of the platform the build targets.
///
/// Both readings are expected to be cheap and safe to take concurrently from any thread.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Counter ticks per second. Zero means the platform has no usable counter.
    fn counter_frequency(&self) -> u64;

    /// Current counter value, relative to an arbitrary platform-defined reference point.
    fn counter_value(&self) -> u64;
}
