#![forbid(unsafe_code)]

//! Diagnostics used by the solver.
//!
//! The solver only emits `debug!` and `trace!` events inside a `debug_span!`
//! per update. With the `tracing` feature these are the `tracing` macros.
//! Without it, macros of the same names expand to nothing (or to a
//! [`NoopSpan`]), so call sites read the same in both builds.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Discards a debug event.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Discards a trace event.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Stands in for a debug-level span.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span returned by `debug_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn disabled_macros_accept_tracing_syntax() {
        crate::debug!(id = "root", width = 10.0, "solved");
        crate::trace!("child {} placed", 3);
        let span = crate::debug_span!("lac.update", id = %"root");
        let _guard = span.enter();
    }
}
