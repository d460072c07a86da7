//! Internal logging macros.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise, so call sites never need their own `cfg`.

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_event_macros_expand_in_statement_position() {
        let key = 7;
        debug_event!(key, "rejected");
        trace_event!(count = 3_usize, "finished");
        assert_eq!(key, 7);
    }
}
