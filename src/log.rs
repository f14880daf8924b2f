//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these are the real `tracing` macros;
//! without it they expand to nothing, so the geometry paths carry no
//! logging overhead in release builds of host applications.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
