#![forbid(unsafe_code)]

//! Headless driver for lac layouts.
//!
//! Replays deterministic window resize sequences against a container tree,
//! solving and auditing every frame and logging the results as JSONL.
//!
//! - [`resize`] - seeded resize sequences (sweep, burst, oscillate, pathological)
//! - [`frame`] - the per-frame loop and its JSONL records
//! - [`audit`] - non-overlap, containment and size checks on snapshots
//! - [`demo`] - the reference dashboard layout
//! - [`config`] - `LAC_HARNESS_*` environment configuration

pub mod audit;
pub mod config;
pub mod demo;
pub mod error;
pub mod frame;
pub mod resize;

use std::io::Write;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use frame::{FrameDriver, FrameRecord, RunSummary};

/// Build the dashboard, generate the configured sequence and run it, writing
/// JSONL to `out`.
pub fn run<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<RunSummary, HarnessError> {
    let initial_gap = config.gap_fraction * f64::from(config.width);
    let root = demo::dashboard(config.padding, initial_gap)?;
    root.validate()?;

    let sequence = resize::ResizeSequence::new(config.resize_config()?);
    tracing::debug!(
        pattern = %config.pattern,
        events = sequence.events().len(),
        checksum = %sequence.sequence_checksum(),
        "sequence generated"
    );

    FrameDriver::new(root, config.gap_fraction)
        .with_layout(config.emit_layout)
        .run(&sequence, out)
}
