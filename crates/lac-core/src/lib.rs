#![forbid(unsafe_code)]

//! Core: geometry primitives and logging shims shared by the lac crates.

pub mod geometry;
pub mod logging;

// With tracing on, the macros live at the crate root like the no-op ones do.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
