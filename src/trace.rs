//! Feature-gated tracing hooks.
//!
//! With the `tracing` feature these forward to the `tracing` macros; without
//! it they expand to nothing, so the arguments are never evaluated.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
