#![forbid(unsafe_code)]

//! Deterministic window resize sequences.
//!
//! The same seed and pattern always produce the same sequence, so a run can be
//! replayed exactly from its `start` log line.
//!
//! ```
//! use lac_harness::resize::{ResizeConfig, ResizePattern, ResizeSequence};
//!
//! let config = ResizeConfig::default()
//!     .with_seed(42)
//!     .with_pattern(ResizePattern::Burst { count: 20 });
//! let sequence = ResizeSequence::new(config);
//! assert_eq!(sequence.events().len(), 20);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

// ============================================================================
// Configuration
// ============================================================================

/// Shape of a resize sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizePattern {
    /// Linear interpolation between two window sizes.
    Sweep {
        start: (u32, u32),
        end: (u32, u32),
        steps: usize,
    },
    /// Small random steps around the current size.
    Burst { count: usize },
    /// `count` events alternating between two sizes, starting with `size_a`.
    Oscillate {
        size_a: (u32, u32),
        size_b: (u32, u32),
        count: usize,
    },
    /// Degenerate and extreme sizes: zero, one pixel, bounds, very large.
    Pathological { count: usize },
}

impl ResizePattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sweep { .. } => "sweep",
            Self::Burst { .. } => "burst",
            Self::Oscillate { .. } => "oscillate",
            Self::Pathological { .. } => "pathological",
        }
    }

    /// Number of events the pattern generates.
    pub fn event_count(&self) -> usize {
        match self {
            Self::Sweep { steps, .. } => *steps,
            Self::Burst { count }
            | Self::Pathological { count }
            | Self::Oscillate { count, .. } => *count,
        }
    }

    /// Build a pattern of exactly `frames` events by name.
    ///
    /// Sweeps shrink from `initial` to half its size; oscillation alternates
    /// between `initial` and half of it.
    pub fn from_name(name: &str, frames: usize, initial: (u32, u32)) -> Option<Self> {
        let half = (initial.0 / 2, initial.1 / 2);
        match name {
            "sweep" => Some(Self::Sweep {
                start: initial,
                end: half,
                steps: frames,
            }),
            "burst" => Some(Self::Burst { count: frames }),
            "oscillate" => Some(Self::Oscillate {
                size_a: initial,
                size_b: half,
                count: frames,
            }),
            "pathological" => Some(Self::Pathological { count: frames }),
            _ => None,
        }
    }
}

impl Default for ResizePattern {
    fn default() -> Self {
        Self::Burst { count: 50 }
    }
}

/// Configuration for sequence generation.
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub seed: u64,
    pub pattern: ResizePattern,
    /// Window size before the first event; bursts start from here.
    pub initial_size: (u32, u32),
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pattern: ResizePattern::default(),
            initial_size: (1200, 900),
            min_width: 320,
            max_width: 2560,
            min_height: 240,
            max_height: 1600,
        }
    }
}

impl ResizeConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_pattern(mut self, pattern: ResizePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_initial_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    pub fn with_size_bounds(
        mut self,
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    ) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }
}

// ============================================================================
// Seeded RNG
// ============================================================================

/// LCG with the Numerical Recipes constants.
#[derive(Debug, Clone)]
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % u64::from(max - min)) as u32
    }

    fn chance(&mut self, p: f64) -> bool {
        (self.next_u64() as f64) / (u64::MAX as f64) < p
    }
}

// ============================================================================
// Events
// ============================================================================

/// One window size in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResizeEvent {
    pub index: usize,
    pub width: u32,
    pub height: u32,
}

impl ResizeEvent {
    pub fn new(index: usize, width: u32, height: u32) -> Self {
        Self {
            index,
            width,
            height,
        }
    }
}

/// A generated, replayable sequence of window sizes.
#[derive(Debug, Clone)]
pub struct ResizeSequence {
    config: ResizeConfig,
    events: Vec<ResizeEvent>,
}

impl ResizeSequence {
    pub fn new(config: ResizeConfig) -> Self {
        let mut rng = SeededRng::new(config.seed);
        let events = match &config.pattern {
            ResizePattern::Sweep { start, end, steps } => sweep(*start, *end, *steps),
            ResizePattern::Burst { count } => burst(&config, &mut rng, *count),
            ResizePattern::Oscillate {
                size_a,
                size_b,
                count,
            } => (0..*count)
                .map(|i| {
                    let (w, h) = if i % 2 == 0 { *size_a } else { *size_b };
                    ResizeEvent::new(i, w, h)
                })
                .collect(),
            ResizePattern::Pathological { count } => pathological(&config, &mut rng, *count),
        };
        Self { config, events }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn events(&self) -> &[ResizeEvent] {
        &self.events
    }

    /// Hex digest of the event list.
    ///
    /// Uses the std `DefaultHasher`, so digests compare equal only between
    /// runs of the same build.
    pub fn sequence_checksum(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.events.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

fn sweep(start: (u32, u32), end: (u32, u32), steps: usize) -> Vec<ResizeEvent> {
    let lerp = |a: u32, b: u32, t: f64| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u32;
    (0..steps)
        .map(|i| {
            let t = if steps > 1 {
                i as f64 / (steps - 1) as f64
            } else {
                1.0
            };
            ResizeEvent::new(i, lerp(start.0, end.0, t), lerp(start.1, end.1, t))
        })
        .collect()
}

fn burst(config: &ResizeConfig, rng: &mut SeededRng, count: usize) -> Vec<ResizeEvent> {
    let (mut width, mut height) = config.initial_size;
    let mut events = Vec::with_capacity(count);
    for i in 0..count {
        if rng.chance(0.7) {
            width = step(rng, width, 40, config.min_width, config.max_width);
        }
        if rng.chance(0.7) {
            height = step(rng, height, 30, config.min_height, config.max_height);
        }
        events.push(ResizeEvent::new(i, width, height));
    }
    events
}

fn step(rng: &mut SeededRng, value: u32, max_delta: u32, min: u32, max: u32) -> u32 {
    let delta = rng.next_range(1, max_delta);
    let moved = if rng.chance(0.5) {
        value.saturating_add(delta)
    } else {
        value.saturating_sub(delta)
    };
    moved.clamp(min, max.max(min))
}

fn pathological(config: &ResizeConfig, rng: &mut SeededRng, count: usize) -> Vec<ResizeEvent> {
    (0..count)
        .map(|i| {
            let (w, h) = match i % 7 {
                0 => (0, 0),
                1 => (1, 1),
                2 => (config.min_width, config.min_height),
                3 => (config.max_width, config.max_height),
                4 => (
                    rng.next_range(0, config.max_width),
                    rng.next_range(0, config.max_height),
                ),
                5 => (config.max_width, 1),
                _ => (1, config.max_height),
            };
            ResizeEvent::new(i, w, h)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let config = ResizeConfig::default()
            .with_seed(7)
            .with_pattern(ResizePattern::Burst { count: 30 });
        let a = ResizeSequence::new(config.clone());
        let b = ResizeSequence::new(config);
        assert_eq!(a.events(), b.events());
        assert_eq!(a.sequence_checksum(), b.sequence_checksum());
    }

    #[test]
    fn different_seeds_diverge() {
        let pattern = ResizePattern::Burst { count: 30 };
        let a = ResizeSequence::new(ResizeConfig::default().with_seed(1).with_pattern(pattern.clone()));
        let b = ResizeSequence::new(ResizeConfig::default().with_seed(2).with_pattern(pattern));
        assert_ne!(a.events(), b.events());
    }

    #[test]
    fn burst_stays_in_bounds() {
        let config = ResizeConfig::default()
            .with_seed(3)
            .with_size_bounds(400, 800, 300, 600)
            .with_initial_size(600, 450)
            .with_pattern(ResizePattern::Burst { count: 200 });
        for e in ResizeSequence::new(config).events() {
            assert!((400..=800).contains(&e.width), "{e:?}");
            assert!((300..=600).contains(&e.height), "{e:?}");
        }
    }

    #[test]
    fn sweep_hits_both_ends() {
        let events = sweep((1000, 800), (500, 400), 11);
        assert_eq!(events.first().map(|e| (e.width, e.height)), Some((1000, 800)));
        assert_eq!(events.last().map(|e| (e.width, e.height)), Some((500, 400)));
        assert_eq!(events[5].width, 750);
    }

    #[test]
    fn oscillate_alternates() {
        let seq = ResizeSequence::new(ResizeConfig::default().with_pattern(
            ResizePattern::Oscillate {
                size_a: (10, 20),
                size_b: (30, 40),
                count: 5,
            },
        ));
        let sizes: Vec<(u32, u32)> = seq.events().iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(sizes, [(10, 20), (30, 40), (10, 20), (30, 40), (10, 20)]);
    }

    #[test]
    fn pathological_includes_empty_window() {
        let seq = ResizeSequence::new(
            ResizeConfig::default().with_pattern(ResizePattern::Pathological { count: 12 }),
        );
        assert_eq!(seq.events().len(), 12);
        assert!(seq.events().iter().any(|e| e.width == 0 && e.height == 0));
    }

    #[test]
    fn patterns_by_name() {
        for name in ["sweep", "burst", "oscillate", "pathological"] {
            let pattern = ResizePattern::from_name(name, 10, (1200, 900)).expect(name);
            assert_eq!(pattern.name(), name);
            assert_eq!(pattern.event_count(), 10);
        }
        for frames in [1, 7] {
            let pattern =
                ResizePattern::from_name("oscillate", frames, (1200, 900)).expect("oscillate");
            let seq = ResizeSequence::new(ResizeConfig::default().with_pattern(pattern));
            assert_eq!(seq.events().len(), frames);
        }
        assert!(ResizePattern::from_name("storm", 10, (1, 1)).is_none());
    }
}
