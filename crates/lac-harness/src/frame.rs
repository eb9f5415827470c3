#![forbid(unsafe_code)]

//! Headless frame loop.
//!
//! Each frame mirrors what an interactive host does on every tick: size the
//! root to the window, derive the gap from the window width, solve, and read
//! the snapshot back. The driver then audits the snapshot and records a
//! [`FrameRecord`].
//!
//! # JSONL Schema
//!
//! ```json
//! {"event":"start","pattern":"sweep","seed":0,"event_count":60,"sequence_checksum":"..."}
//! {"event":"frame","index":0,"width":1200,"height":900,"gap":24.0,"nodes":20,"checksum":"...","audit":{"issues":[]}}
//! {"event":"complete","frames":60,"frames_with_issues":0,"total_issues":0,"checksum":"...","outcome":"pass"}
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;

use lac_layout::{Container, LayoutSnapshot};
use serde::Serialize;

use crate::audit::{AuditReport, audit};
use crate::error::HarnessError;
use crate::resize::{ResizeEvent, ResizeSequence};

/// Default slack for containment and overlap checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Outcome of one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub gap: f64,
    pub nodes: usize,
    /// Digest of every rectangle in the snapshot.
    pub checksum: String,
    pub audit: AuditReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSnapshot>,
}

/// Totals for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: usize,
    pub frames_with_issues: usize,
    pub total_issues: usize,
    /// Digest over all frame checksums, in order.
    pub checksum: String,
    pub outcome: &'static str,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.frames_with_issues == 0
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum LogLine<'a> {
    Start {
        pattern: &'a str,
        seed: u64,
        event_count: usize,
        sequence_checksum: String,
    },
    Frame(&'a FrameRecord),
    Complete(&'a RunSummary),
}

/// Drives a container tree through a resize sequence.
pub struct FrameDriver {
    root: Container,
    gap_fraction: f64,
    tolerance: f64,
    emit_layout: bool,
    records: Vec<FrameRecord>,
}

impl FrameDriver {
    pub fn new(root: Container, gap_fraction: f64) -> Self {
        Self {
            root,
            gap_fraction,
            tolerance: DEFAULT_TOLERANCE,
            emit_layout: false,
            records: Vec::new(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Keep the full snapshot in every record.
    pub fn with_layout(mut self, emit_layout: bool) -> Self {
        self.emit_layout = emit_layout;
        self
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// Solve one frame at the event's window size.
    pub fn step(&mut self, event: &ResizeEvent) -> Result<&FrameRecord, HarnessError> {
        let width = f64::from(event.width);
        let height = f64::from(event.height);
        let gap = self.gap_fraction * width;

        self.root.set_size(width, height);
        // Non-positive gaps are ignored per node, so a zero-width window keeps
        // the previous frame's gaps.
        self.root.for_each_mut(&mut |c| c.set_gap(gap));
        self.root.update()?;

        let snapshot = self.root.layout();
        let mut report = audit(&snapshot, self.tolerance);
        report.check_min_sizes(&self.root);

        if !report.is_clean() {
            tracing::warn!(
                frame = event.index,
                width = event.width,
                height = event.height,
                errors = report.error_count(),
                "layout audit failed"
            );
        }

        let slot = self.records.len();
        self.records.push(FrameRecord {
            index: event.index,
            width: event.width,
            height: event.height,
            gap,
            nodes: snapshot.len(),
            checksum: snapshot_checksum(&snapshot),
            audit: report,
            layout: self.emit_layout.then_some(snapshot),
        });
        Ok(&self.records[slot])
    }

    /// Run every event and write one JSONL line per frame plus start and
    /// completion lines.
    pub fn run<W: Write>(
        &mut self,
        sequence: &ResizeSequence,
        out: &mut W,
    ) -> Result<RunSummary, HarnessError> {
        let span = tracing::info_span!(
            "lac.harness.run",
            pattern = sequence.config().pattern.name(),
            seed = sequence.config().seed
        );
        let _guard = span.enter();

        write_line(
            out,
            &LogLine::Start {
                pattern: sequence.config().pattern.name(),
                seed: sequence.config().seed,
                event_count: sequence.events().len(),
                sequence_checksum: sequence.sequence_checksum(),
            },
        )?;

        let first = self.records.len();
        for event in sequence.events() {
            let record = self.step(event)?;
            write_line(out, &LogLine::Frame(record))?;
        }

        let summary = summarize(&self.records[first..]);
        write_line(out, &LogLine::Complete(&summary))?;
        out.flush()?;

        tracing::info!(
            frames = summary.frames,
            frames_with_issues = summary.frames_with_issues,
            outcome = summary.outcome,
            "run complete"
        );
        Ok(summary)
    }
}

fn write_line<W: Write>(out: &mut W, line: &LogLine<'_>) -> Result<(), HarnessError> {
    serde_json::to_writer(&mut *out, line)?;
    out.write_all(b"\n")?;
    Ok(())
}

fn summarize(records: &[FrameRecord]) -> RunSummary {
    let mut hasher = DefaultHasher::new();
    let mut frames_with_issues = 0;
    let mut total_issues = 0;
    for record in records {
        record.checksum.hash(&mut hasher);
        let errors = record.audit.error_count();
        if errors > 0 {
            frames_with_issues += 1;
        }
        total_issues += errors;
    }
    RunSummary {
        frames: records.len(),
        frames_with_issues,
        total_issues,
        checksum: format!("{:016x}", hasher.finish()),
        outcome: if frames_with_issues == 0 { "pass" } else { "issues" },
    }
}

/// Digest of ids and rectangle bits in walk order.
pub fn snapshot_checksum(snapshot: &LayoutSnapshot) -> String {
    let mut hasher = DefaultHasher::new();
    for entry in snapshot.walk() {
        entry.id.hash(&mut hasher);
        entry.depth.hash(&mut hasher);
        for v in [entry.rect.x, entry.rect.y, entry.rect.width, entry.rect.height] {
            v.to_bits().hash(&mut hasher);
        }
    }
    format!("{:016x}", hasher.finish())
}
