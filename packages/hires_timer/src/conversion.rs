const MILLIS_PER_SECOND: f64 = 1000.0;

/// Converts raw performance counter ticks into milliseconds.
///
/// The factor is the number of counter ticks per millisecond, derived once from the
/// frequency (ticks per second) that the operating system reports for its counter.
///
/// A factor of zero is representable: it is what an unsupported counter produces. Converting
/// with a zero factor yields a non-finite value rather than panicking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor {
    ticks_per_millisecond: f64,
}

impl ScaleFactor {
    /// Derives the factor from a counter frequency expressed in ticks per second.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "real counter frequencies are far below 2^53 ticks per second"
    )]
    pub fn from_ticks_per_second(ticks_per_second: u64) -> Self {
        Self {
            ticks_per_millisecond: ticks_per_second as f64 / MILLIS_PER_SECOND,
        }
    }

    /// Number of counter ticks that make up one millisecond.
    #[must_use]
    pub fn ticks_per_millisecond(self) -> f64 {
        self.ticks_per_millisecond
    }

    /// Whether this factor came from a counter that reported no frequency at all.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.ticks_per_millisecond == 0.0
    }

    /// Converts a raw counter reading into milliseconds.
    ///
    /// Returns positive infinity (or NaN for a zero reading) if the factor is zero.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "millisecond timestamps only need f64 precision, same as the JVM consumer"
    )]
    pub fn ticks_to_millis(self, ticks: u64) -> f64 {
        ticks as f64 / self.ticks_per_millisecond
    }
}
