use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Result, ScaleFactor};

/// A millisecond timestamp source backed by the platform's high-resolution performance counter.
///
/// Creating a timer reads the counter frequency once and fixes the [`ScaleFactor`] for the
/// lifetime of the timer. Each reading takes the raw counter value and divides it by that factor.
/// Holding a `HighResTimer` is proof that the counter is usable, so there is no way to take a
/// reading before initialization.
///
/// Readings are relative to an arbitrary reference point fixed by the platform (typically boot).
/// They are monotonically non-decreasing as long as the underlying platform counter is, which
/// this type does not independently enforce.
///
/// The timer is cheap to clone and can be shared between threads; readings never mutate it.
#[derive(Clone, Debug)]
pub struct HighResTimer {
    scale: ScaleFactor,
    ticks_per_second: u64,

    pal: PlatformFacade,
}

impl HighResTimer {
    /// Reads the counter frequency of the current platform and prepares the timer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterUnavailable`] if the platform reports a counter frequency of zero.
    pub fn new() -> Result<Self> {
        Self::from_pal(PlatformFacade::real())
    }

    pub(crate) fn from_pal(pal: PlatformFacade) -> Result<Self> {
        let ticks_per_second = pal.counter_frequency();

        tracing::debug!(ticks_per_second, "performance counter frequency");

        let scale = ScaleFactor::from_ticks_per_second(ticks_per_second);

        if scale.is_zero() {
            return Err(Error::CounterUnavailable);
        }

        Ok(Self {
            scale,
            ticks_per_second,
            pal,
        })
    }

    /// The current timestamp in (fractional) milliseconds.
    #[must_use]
    pub fn now_millis(&self) -> f64 {
        self.scale.ticks_to_millis(self.now_ticks())
    }

    /// The current raw counter value.
    #[must_use]
    pub fn now_ticks(&self) -> u64 {
        self.pal.counter_value()
    }

    /// Milliseconds elapsed since an earlier [`now_millis()`][Self::now_millis] reading.
    ///
    /// Saturates at zero if the earlier reading is ahead of the counter.
    #[must_use]
    pub fn elapsed_millis_since(&self, earlier_millis: f64) -> f64 {
        (self.now_millis() - earlier_millis).max(0.0)
    }

    /// The ticks-per-millisecond factor fixed when the timer was created.
    #[must_use]
    pub fn scale_factor(&self) -> ScaleFactor {
        self.scale
    }

    /// The counter frequency reported by the platform when the timer was created.
    #[must_use]
    pub fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }
}
