#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates live in one global space with the origin at the top-left
//! corner; `x` grows to the right and `y` grows downward.

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise maximum with zero.
    #[inline]
    pub fn clamp_non_negative(self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }
}

/// An axis-aligned rectangle used for layout bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Build a rectangle from its top-left corner and size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (right/bottom exclusive).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether `other` lies inside `self`, allowing `tolerance` slack on
    /// every edge.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// Check whether the two rectangles share more than `tolerance` of extent
    /// on both axes. Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Rect, tolerance: f64) -> bool {
        let overlap_w = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        overlap_w > tolerance && overlap_h > tolerance
    }

    /// Shrink the rectangle by the given insets.
    ///
    /// Width and height never go below zero.
    pub fn inner(&self, insets: Sides) -> Rect {
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Per-edge insets used for padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Sides {
    /// No insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Same inset on every edge.
    pub const fn all(val: f64) -> Self {
        Self {
            left: val,
            right: val,
            top: val,
            bottom: val,
        }
    }

    /// Insets on the left and right edges only.
    pub const fn horizontal(val: f64) -> Self {
        Self {
            left: val,
            right: val,
            top: 0.0,
            bottom: 0.0,
        }
    }

    /// Insets on the top and bottom edges only.
    pub const fn vertical(val: f64) -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            top: val,
            bottom: val,
        }
    }

    /// Explicit insets in `(left, right, top, bottom)` order.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

/// `(sides, ends)`: the first value insets the left and right edges, the
/// second the top and bottom edges.
impl From<(f64, f64)> for Sides {
    fn from((sides, ends): (f64, f64)) -> Self {
        Self::new(sides, sides, ends, ends)
    }
}

/// `(left, right, top, bottom)`.
impl From<(f64, f64, f64, f64)> for Sides {
    fn from((left, right, top, bottom): (f64, f64, f64, f64)) -> Self {
        Self::new(left, right, top, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Sides, Size};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(2.0, 3.0));
        assert!(rect.contains(5.5, 7.5));
        assert!(!rect.contains(6.0, 3.0));
        assert!(!rect.contains(2.0, 8.0));
    }

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = rect.inner(Sides::new(4.0, 2.0, 1.0, 3.0));
        assert_eq!(inner, Rect::new(4.0, 1.0, 4.0, 6.0));
    }

    #[test]
    fn rect_inner_never_negative() {
        let rect = Rect::new(5.0, 5.0, 10.0, 4.0);
        let inner = rect.inner(Sides::all(8.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
        assert_eq!(inner.origin(), Point::new(13.0, 13.0));
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 100.0);
        let b = Rect::new(50.0, 0.0, 50.0, 100.0);
        assert!(!a.overlaps(&b, 1e-9));
        assert!(a.overlaps(&Rect::new(49.0, 10.0, 5.0, 5.0), 1e-9));
    }

    #[test]
    fn contains_rect_with_tolerance() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 80.0, 80.0), 0.0));
        assert!(!outer.contains_rect(&Rect::new(10.0, 10.0, 90.000_1, 80.0), 0.0));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 90.000_1, 80.0), 1e-3));
    }

    #[test]
    fn intersection_and_union() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.intersection_opt(&b), Some(Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 6.0, 6.0));
        assert_eq!(a.intersection_opt(&Rect::new(4.0, 0.0, 1.0, 1.0)), None);
    }

    #[test]
    fn sides_conversions() {
        assert_eq!(Sides::from(3.0), Sides::all(3.0));
        assert_eq!(
            Sides::from((1.0, 2.0)),
            Sides {
                left: 1.0,
                right: 1.0,
                top: 2.0,
                bottom: 2.0,
            }
        );
        assert_eq!(
            Sides::from((1.0, 2.0, 3.0, 4.0)),
            Sides {
                left: 1.0,
                right: 2.0,
                top: 3.0,
                bottom: 4.0,
            }
        );
        assert_eq!(Sides::horizontal(2.0).vertical_sum(), 0.0);
        assert_eq!(Sides::vertical(2.0).vertical_sum(), 4.0);
    }

    #[test]
    fn size_helpers() {
        assert!(Size::ZERO.is_empty());
        assert_eq!(Size::new(-1.0, 3.0).clamp_non_negative(), Size::new(0.0, 3.0));
        let r = Rect::from_origin_size(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(r.size(), Size::new(3.0, 4.0));
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
        assert_eq!(r.area(), 12.0);
    }
}
