#![forbid(unsafe_code)]

//! Headless layout harness.
//!
//! ```sh
//! LAC_HARNESS_PATTERN=burst LAC_HARNESS_FRAMES=200 cargo run -p lac-harness
//! ```
//!
//! Frames are written to stdout (or `LAC_HARNESS_OUTPUT`) as JSONL;
//! diagnostics go to stderr, filtered by `RUST_LOG`. The exit code is 0 when
//! every frame passes its audit, 1 when some frame has issues and 2 on error.

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use lac_harness::{HarnessConfig, HarnessError};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn run(config: &HarnessConfig) -> Result<bool, HarnessError> {
    let summary = match &config.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            lac_harness::run(config, &mut out)?
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            lac_harness::run(config, &mut out)?
        }
    };
    Ok(summary.is_clean())
}

fn main() -> ExitCode {
    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lac-harness: {err}");
            return ExitCode::from(2);
        }
    };
    init_tracing(config.log_json);
    tracing::info!(
        pattern = %config.pattern,
        seed = config.seed,
        frames = config.frames,
        width = config.width,
        height = config.height,
        "starting"
    );

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, "harness failed");
            ExitCode::from(2)
        }
    }
}
