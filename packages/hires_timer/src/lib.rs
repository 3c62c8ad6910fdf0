#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Exposes the operating system's high-resolution performance counter as a fractional
//! millisecond timestamp, both to Rust callers and to the JVM through JNI.
//!
//! The counter frequency is read once, when a [`HighResTimer`] is created, and turned into a
//! [`ScaleFactor`] (ticks per millisecond). Every subsequent reading divides the raw counter value
//! by that factor.
//!
//! On Windows the counter is `QueryPerformanceCounter`. Other targets use a portable counter
//! derived from [`std::time::Instant`] so the package can be built and tested anywhere.
//!
//! Timestamps are relative to an arbitrary reference point. They are only meaningful when
//! compared with other timestamps from the same process, e.g. to measure elapsed time.
//!
//! # Example
//!
//! ```rust
//! use hires_timer::HighResTimer;
//!
//! let timer = HighResTimer::new()?;
//!
//! let start = timer.now_millis();
//! std::thread::sleep(std::time::Duration::from_millis(5));
//! let elapsed = timer.elapsed_millis_since(start);
//!
//! assert!(elapsed >= 0.0);
//! println!("Operation took {elapsed:.3} ms");
//! # Ok::<(), hires_timer::Error>(())
//! ```
//!
//! # JVM integration
//!
//! With the default `jni` feature the `cdylib` build exports `JNI_OnLoad` and the native method
//! `static native double getTime()` of the Java class `hires_timer.HighResTimer`. See [`ffi`].

mod pal;

mod conversion;
mod error;
mod source;

#[cfg(feature = "jni")]
pub mod ffi;

pub use conversion::*;
pub use error::*;
pub use source::*;
