mod abstractions;
mod facade;

pub(crate) use abstractions::*;
pub(crate) use facade::*;

#[cfg(all(windows, not(miri)))]
mod windows;
#[cfg(all(windows, not(miri)))]
pub(crate) use windows::*;

#[cfg(any(miri, not(windows)))]
mod rust;
#[cfg(any(miri, not(windows)))]
pub(crate) use rust::*;
