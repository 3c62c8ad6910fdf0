use std::sync::LazyLock;
use std::time::Instant;

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = RustPlatform;

pub(crate) type BuildTargetPlatform = RustPlatform;

/// Reference point for the portable counter. Fixed the first time the counter is read.
static COUNTER_EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// We use this where there is no native performance counter binding (non-Windows targets) and
/// under Miri, which cannot talk to a real OS although Rust std time still works.
///
/// The counter ticks once per nanosecond of [`Instant`] time.
#[derive(Debug)]
pub(crate) struct RustPlatform;

impl Platform for RustPlatform {
    fn counter_frequency(&self) -> u64 {
        NANOS_PER_SECOND
    }

    fn counter_value(&self) -> u64 {
        u64::try_from(COUNTER_EPOCH.elapsed().as_nanos())
            .expect("unrealistically long process lifetime, never going to happen with real clocks")
    }
}
