//! The container tree.
//!
//! A [`Container`] owns its geometry and its children. What it does with the
//! children on [`update`](Container::update) is decided by its
//! [`Arrangement`]: leaves do nothing, stacks split along one axis by weight,
//! grids place children into equal cells.

use std::collections::BTreeSet;

use lac_core::geometry::{Point, Rect, Sides, Size};

use crate::grid::{FillOrder, Grid};
use crate::padding::IntoPadding;
use crate::params::{
    ContainerConfig, ContainerParams, GridConfig, GridParams, StackConfig, StackParams,
};
use crate::snapshot::{DIM_KEY, LayoutSnapshot};
use crate::stack::{Direction, Stack};
use crate::LayoutError;

/// How a container distributes its interior among its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Arrangement {
    /// No distribution; geometry is whatever was set from outside.
    Leaf,
    Stack(Stack),
    Grid(Grid),
}

/// A rectangular layout node.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: String,
    position: Point,
    size: Size,
    min_size: Size,
    padding: Sides,
    children: Vec<Container>,
    weights: Vec<u32>,
    arrangement: Arrangement,
}

impl Container {
    fn from_config(id: String, config: ContainerConfig, arrangement: Arrangement) -> Self {
        Self {
            id,
            position: config.position,
            size: config.size,
            min_size: config.min_size,
            padding: config.padding,
            children: Vec::new(),
            weights: Vec::new(),
            arrangement,
        }
    }

    /// A leaf with default geometry.
    pub fn leaf(id: impl Into<String>) -> Self {
        Self::leaf_with(id, &ContainerParams::default())
    }

    pub fn leaf_with(id: impl Into<String>, params: &ContainerParams) -> Self {
        let config = params.resolve(&ContainerConfig::default());
        Self::from_config(id.into(), config, Arrangement::Leaf)
    }

    /// A stack laying children out top to bottom.
    pub fn vstack(id: impl Into<String>) -> Self {
        Self::stack_with(id, Direction::Vertical, &StackParams::default())
    }

    /// A stack laying children out left to right.
    pub fn hstack(id: impl Into<String>) -> Self {
        Self::stack_with(id, Direction::Horizontal, &StackParams::default())
    }

    /// A stack with explicit parameters. Non-positive gaps are ignored, as
    /// with [`Container::set_gap`].
    pub fn stack_with(id: impl Into<String>, direction: Direction, params: &StackParams) -> Self {
        let config = params.resolve(&StackConfig::default());
        let mut stack = Stack::new(direction, 0.0);
        stack.set_gap(config.gap);
        Self::from_config(id.into(), config.container, Arrangement::Stack(stack))
    }

    /// A `rows x columns` grid. Fails when either dimension is zero or the
    /// cell count overflows.
    pub fn grid(id: impl Into<String>, rows: usize, columns: usize) -> Result<Self, LayoutError> {
        Self::grid_with(id, rows, columns, &GridParams::default())
    }

    pub fn grid_with(
        id: impl Into<String>,
        rows: usize,
        columns: usize,
        params: &GridParams,
    ) -> Result<Self, LayoutError> {
        let id = id.into();
        let config = params.resolve(&GridConfig::default());
        let mut grid = Grid::new(&id, rows, columns)?;
        grid.set_gaps(config.gap_h, config.gap_v);
        grid.set_fill(config.fill);
        Ok(Self::from_config(id, config.container, Arrangement::Grid(grid)))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub const fn min_size(&self) -> Size {
        self.min_size
    }

    #[must_use]
    pub const fn padding(&self) -> Sides {
        self.padding
    }

    /// Outer rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Rectangle left for children once padding is removed.
    #[must_use]
    pub fn interior(&self) -> Rect {
        self.rect().inner(self.padding)
    }

    #[must_use]
    pub fn children(&self) -> &[Container] {
        &self.children
    }

    #[must_use]
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    #[must_use]
    pub const fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.arrangement, Arrangement::Leaf)
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    pub fn set_width(&mut self, width: f64) {
        self.size.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.size.height = height;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    pub fn set_min_size(&mut self, min_width: f64, min_height: f64) {
        self.min_size = Size::new(min_width, min_height);
    }

    /// Set padding from one, two or four values (see [`IntoPadding`]).
    ///
    /// On error the previous padding is kept.
    pub fn set_padding(&mut self, padding: impl IntoPadding) -> Result<(), LayoutError> {
        self.padding = padding.into_padding()?;
        Ok(())
    }

    /// Raise-if-positive gap setter.
    ///
    /// Stacks take the value as their gap, grids as both gaps. Non-positive
    /// values and leaves are ignored.
    pub fn set_gap(&mut self, gap: f64) {
        let applied = match &mut self.arrangement {
            Arrangement::Stack(stack) => stack.set_gap(gap),
            Arrangement::Grid(grid) => grid.set_gap(gap),
            Arrangement::Leaf => false,
        };
        if !applied {
            lac_core::trace!(id = %self.id, gap, "gap ignored");
        }
    }

    /// Per-axis gap setter; only grids have independent gaps.
    pub fn set_gaps(&mut self, gap_h: f64, gap_v: f64) {
        let applied = match &mut self.arrangement {
            Arrangement::Grid(grid) => grid.set_gaps(gap_h, gap_v),
            _ => false,
        };
        if !applied {
            lac_core::trace!(id = %self.id, gap_h, gap_v, "gaps ignored");
        }
    }

    /// Literal grid fill flag: `true` fills down each column first.
    pub fn set_fill_order(&mut self, row_first: bool) {
        self.set_fill(FillOrder::from_row_first(row_first));
    }

    pub fn set_fill(&mut self, fill: FillOrder) {
        if let Arrangement::Grid(grid) = &mut self.arrangement {
            grid.set_fill(fill);
        }
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    /// Append a child with a weight.
    ///
    /// Weights only matter to stacks. Grids drop the child silently once every
    /// cell is taken.
    pub fn add(&mut self, child: Container, weight: u32) {
        if let Arrangement::Grid(grid) = &self.arrangement {
            let capacity = grid.capacity();
            if self.children.len() >= capacity {
                lac_core::debug!(
                    id = %self.id,
                    child = %child.id,
                    capacity,
                    "grid full, child dropped"
                );
                return;
            }
        }
        self.children.push(child);
        self.weights.push(weight);
    }

    /// Append a child with weight 1.
    pub fn add_child(&mut self, child: Container) {
        self.add(child, 1);
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with_child(mut self, child: Container, weight: u32) -> Self {
        self.add(child, weight);
        self
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Any container in this subtree (including `self`) with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Container> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Container> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Visit every container in pre-order.
    pub fn for_each(&self, f: &mut impl FnMut(&Container)) {
        f(self);
        for child in &self.children {
            child.for_each(f);
        }
    }

    /// Visit every container in pre-order, mutably.
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Container)) {
        f(self);
        for child in &mut self.children {
            child.for_each_mut(f);
        }
    }

    /// Number of containers in this subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Container::node_count).sum::<usize>()
    }

    // ------------------------------------------------------------------
    // Solving
    // ------------------------------------------------------------------

    /// Check that every container in the subtree can be solved and that ids
    /// are unique.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.check_solvable()?;
        let mut seen = BTreeSet::new();
        self.check_ids(&mut seen)
    }

    fn check_ids<'a>(&'a self, seen: &mut BTreeSet<&'a str>) -> Result<(), LayoutError> {
        if self.id == DIM_KEY {
            return Err(LayoutError::ReservedId {
                id: self.id.clone(),
            });
        }
        if !seen.insert(self.id.as_str()) {
            return Err(LayoutError::DuplicateId {
                id: self.id.clone(),
            });
        }
        self.children.iter().try_for_each(|c| c.check_ids(seen))
    }

    fn check_solvable(&self) -> Result<(), LayoutError> {
        if matches!(self.arrangement, Arrangement::Stack(_))
            && !self.children.is_empty()
            && self.weights.iter().all(|&w| w == 0)
        {
            return Err(LayoutError::ZeroWeightSum {
                id: self.id.clone(),
            });
        }
        self.children.iter().try_for_each(Container::check_solvable)
    }

    /// Recompute the geometry of every descendant from this container's own
    /// position, size and padding.
    ///
    /// The whole subtree is checked first; on error no geometry is written.
    /// Leaves do nothing.
    pub fn update(&mut self) -> Result<(), LayoutError> {
        let span = lac_core::debug_span!("lac.update", id = %self.id);
        let _guard = span.enter();

        self.check_solvable()?;
        self.solve();
        Ok(())
    }

    fn solve(&mut self) {
        let interior = self.interior();
        let rects = match &self.arrangement {
            Arrangement::Leaf => return,
            Arrangement::Stack(stack) => stack.split(interior, &self.weights),
            Arrangement::Grid(grid) => grid.split(interior, self.children.len()),
        };

        for (child, rect) in self.children.iter_mut().zip(rects) {
            lac_core::trace!(
                parent = %self.id,
                child = %child.id,
                x = rect.x,
                y = rect.y,
                width = rect.width,
                height = rect.height,
                "placed"
            );
            child.position = rect.origin();
            child.size = rect.size();
            child.solve();
        }
    }

    /// Snapshot the current geometry of this subtree.
    #[must_use]
    pub fn layout(&self) -> LayoutSnapshot {
        LayoutSnapshot::new(
            self.id.clone(),
            self.rect(),
            self.children.iter().map(Container::layout).collect(),
        )
        .with_interior(self.interior())
    }
}
