//! Read-only geometry snapshots produced by [`Container::layout`](crate::Container::layout).
//!
//! A snapshot mirrors the container tree: every node carries its own rectangle,
//! its padded interior, and its children keyed by id, in insertion order. The
//! interior is not serialized. Serialized, a node becomes
//! a map with the rectangle under [`DIM_KEY`] as `[x, y, width, height]` and one
//! entry per child id:
//!
//! ```json
//! {"dim": [0.0, 0.0, 100.0, 100.0], "top": {"dim": [0.0, 0.0, 100.0, 50.0]}}
//! ```

use lac_core::geometry::Rect;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key holding a node's own rectangle in serialized snapshots.
pub const DIM_KEY: &str = "dim";

/// Geometry of one container and its descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    id: String,
    rect: Rect,
    interior: Rect,
    children: Vec<LayoutSnapshot>,
}

impl LayoutSnapshot {
    /// A node without padding: its interior is its rectangle.
    pub(crate) fn new(id: String, rect: Rect, children: Vec<LayoutSnapshot>) -> Self {
        Self {
            id,
            rect,
            interior: rect,
            children,
        }
    }

    pub(crate) fn with_interior(mut self, interior: Rect) -> Self {
        self.interior = interior;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// The rectangle left for children once padding is removed.
    #[must_use]
    pub const fn interior(&self) -> Rect {
        self.interior
    }

    /// Direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[LayoutSnapshot] {
        &self.children
    }

    /// Direct child with the given id.
    #[must_use]
    pub fn child(&self, id: &str) -> Option<&LayoutSnapshot> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Any node in this subtree (including `self`) with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&LayoutSnapshot> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Rectangle of any node in this subtree.
    #[must_use]
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.find(id).map(|s| s.rect)
    }

    /// Pre-order walk: parents are yielded before their children, siblings in
    /// insertion order. This is the order a painter should draw in.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, 0)],
        }
    }

    /// Number of nodes in this subtree.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(LayoutSnapshot::len).sum::<usize>()
    }

    /// A snapshot always contains at least its own node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One node visited by [`LayoutSnapshot::walk`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkEntry<'a> {
    pub id: &'a str,
    pub rect: Rect,
    pub depth: usize,
    pub node: &'a LayoutSnapshot,
}

/// Pre-order iterator over a snapshot.
pub struct Walk<'a> {
    stack: Vec<(&'a LayoutSnapshot, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Push in reverse so the first child is visited next.
        for child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some(WalkEntry {
            id: &node.id,
            rect: node.rect,
            depth,
            node,
        })
    }
}

struct Dim(Rect);

impl Serialize for Dim {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.0.x, self.0.y, self.0.width, self.0.height].serialize(serializer)
    }
}

impl Serialize for LayoutSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len() + 1))?;
        map.serialize_entry(DIM_KEY, &Dim(self.rect))?;
        for child in &self.children {
            map.serialize_entry(&child.id, child)?;
        }
        map.end()
    }
}
