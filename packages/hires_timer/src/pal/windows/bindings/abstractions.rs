use std::fmt::Debug;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// `QueryPerformanceFrequency`, or `None` if the call reports failure.
    fn query_performance_frequency(&self) -> Option<i64>;

    fn query_performance_counter(&self) -> i64;
}
