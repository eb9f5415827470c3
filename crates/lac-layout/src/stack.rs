//! Weighted one-dimensional stacks.

use lac_core::geometry::Rect;

/// The axis a stack distributes space along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Stack settings: direction and the gap between adjacent children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stack {
    direction: Direction,
    gap: f64,
}

impl Stack {
    pub const fn new(direction: Direction, gap: f64) -> Self {
        Self { direction, gap }
    }

    pub const fn vertical() -> Self {
        Self::new(Direction::Vertical, 0.0)
    }

    pub const fn horizontal() -> Self {
        Self::new(Direction::Horizontal, 0.0)
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Replace the gap only when `gap` is positive.
    ///
    /// Returns whether the value was applied.
    pub fn set_gap(&mut self, gap: f64) -> bool {
        if gap > 0.0 {
            self.gap = gap;
            true
        } else {
            false
        }
    }

    /// Split `area` into one rectangle per weight.
    ///
    /// Children span the full cross axis. Along the primary axis each child gets
    /// `available * weight / sum(weights)`, where `available` is the primary
    /// extent minus `gap * (n - 1)`, clamped at zero. A zero weight sum yields
    /// zero-length rectangles rather than NaN.
    pub fn split(&self, area: Rect, weights: &[u32]) -> Vec<Rect> {
        let count = weights.len();
        if count == 0 {
            return Vec::new();
        }

        let total_gap = self.gap * (count - 1) as f64;
        let primary = match self.direction {
            Direction::Horizontal => area.width,
            Direction::Vertical => area.height,
        };
        let available = (primary - total_gap).max(0.0);
        let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();

        let mut rects = Vec::with_capacity(count);
        let mut cursor = match self.direction {
            Direction::Horizontal => area.x,
            Direction::Vertical => area.y,
        };

        for &weight in weights {
            let length = if weight_sum == 0 {
                0.0
            } else {
                available * f64::from(weight) / weight_sum as f64
            };
            let rect = match self.direction {
                Direction::Horizontal => Rect::new(cursor, area.y, length, area.height),
                Direction::Vertical => Rect::new(area.x, cursor, area.width, length),
            };
            rects.push(rect);
            cursor += length + self.gap;
        }

        rects
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::vertical()
    }
}
