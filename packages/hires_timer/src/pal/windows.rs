mod bindings;
mod platform;

use bindings::*;
pub(crate) use platform::*;
