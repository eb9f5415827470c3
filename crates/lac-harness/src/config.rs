#![forbid(unsafe_code)]

//! Harness configuration from `LAC_HARNESS_*` environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `LAC_HARNESS_PATTERN` | `sweep` (`sweep`, `burst`, `oscillate`, `pathological`) |
//! | `LAC_HARNESS_SEED` | `0` |
//! | `LAC_HARNESS_FRAMES` | `60` |
//! | `LAC_HARNESS_PADDING` | `20` |
//! | `LAC_HARNESS_GAP_FRACTION` | `0.02` |
//! | `LAC_HARNESS_WIDTH` / `LAC_HARNESS_HEIGHT` | `1200` / `900` |
//! | `LAC_HARNESS_OUTPUT` | stdout |
//! | `LAC_HARNESS_EMIT_LAYOUT` | off |
//! | `LAC_HARNESS_LOG_JSON` | off |

use std::path::PathBuf;
use std::str::FromStr;

use crate::demo::{DEFAULT_GAP_FRACTION, DEFAULT_PADDING};
use crate::error::HarnessError;
use crate::resize::{ResizeConfig, ResizePattern};

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub pattern: String,
    pub seed: u64,
    pub frames: usize,
    pub padding: f64,
    pub gap_fraction: f64,
    pub width: u32,
    pub height: u32,
    /// JSONL destination; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Attach the full layout snapshot to every frame line.
    pub emit_layout: bool,
    /// Format diagnostics on stderr as JSON.
    pub log_json: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pattern: "sweep".into(),
            seed: 0,
            frames: 60,
            padding: DEFAULT_PADDING,
            gap_fraction: DEFAULT_GAP_FRACTION,
            width: 1200,
            height: 900,
            output: None,
            emit_layout: false,
            log_json: false,
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset or blank variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HarnessError> {
        let get = |name: &str| {
            lookup(name).and_then(|value| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
        };
        let mut config = Self::default();

        if let Some(pattern) = get("LAC_HARNESS_PATTERN") {
            if ResizePattern::from_name(&pattern, 1, (1, 1)).is_none() {
                return Err(HarnessError::InvalidEnv {
                    name: "LAC_HARNESS_PATTERN",
                    value: pattern,
                });
            }
            config.pattern = pattern;
        }
        parse_into(&get, "LAC_HARNESS_SEED", &mut config.seed)?;
        parse_into(&get, "LAC_HARNESS_FRAMES", &mut config.frames)?;
        parse_into(&get, "LAC_HARNESS_PADDING", &mut config.padding)?;
        parse_into(&get, "LAC_HARNESS_GAP_FRACTION", &mut config.gap_fraction)?;
        parse_into(&get, "LAC_HARNESS_WIDTH", &mut config.width)?;
        parse_into(&get, "LAC_HARNESS_HEIGHT", &mut config.height)?;
        config.output = get("LAC_HARNESS_OUTPUT").map(PathBuf::from);
        config.emit_layout = get("LAC_HARNESS_EMIT_LAYOUT").is_some_and(|v| flag(&v));
        config.log_json = get("LAC_HARNESS_LOG_JSON").is_some_and(|v| flag(&v));
        Ok(config)
    }

    /// Resize sequence described by this configuration.
    pub fn resize_config(&self) -> Result<ResizeConfig, HarnessError> {
        let pattern = ResizePattern::from_name(&self.pattern, self.frames, (self.width, self.height))
            .ok_or_else(|| HarnessError::InvalidEnv {
                name: "LAC_HARNESS_PATTERN",
                value: self.pattern.clone(),
            })?;
        Ok(ResizeConfig::default()
            .with_seed(self.seed)
            .with_initial_size(self.width, self.height)
            .with_pattern(pattern))
    }
}

fn parse_into<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    slot: &mut T,
) -> Result<(), HarnessError> {
    if let Some(value) = get(name) {
        *slot = value
            .parse()
            .map_err(|_| HarnessError::InvalidEnv { name, value })?;
    }
    Ok(())
}

fn flag(value: &str) -> bool {
    matches!(
        value,
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    )
}
