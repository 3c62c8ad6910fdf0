use thiserror::Error;

/// Errors that can occur when setting up a [`HighResTimer`][crate::HighResTimer].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operating system reports a counter frequency of zero, which means the hardware
    /// provides no high-resolution performance counter. Any reading would be meaningless.
    #[error("no high-resolution performance counter is available (reported frequency is zero)")]
    CounterUnavailable,
}

/// A specialized `Result` type for timer operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
