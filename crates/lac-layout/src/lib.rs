#![forbid(unsafe_code)]

//! Container layout.
//!
//! A layout is a tree of [`Container`]s. Each container has a position, a
//! size and padding; calling [`Container::update`] on a node recomputes the
//! rectangles of every descendant from the node's interior:
//!
//! - [`Stack`] - children side by side along one axis, sized by weight
//! - [`Grid`] - `rows x columns` equal cells, filled in a configurable order
//! - leaves - no distribution at all
//!
//! [`Container::layout`] returns a [`LayoutSnapshot`] that serializes to a
//! nested map keyed by child id.
//!
//! ```
//! use lac_layout::{Container, Rect};
//!
//! let mut root = Container::vstack("root");
//! root.set_size(100.0, 100.0);
//! root.add(Container::leaf("top"), 1);
//! root.add(Container::leaf("bottom"), 3);
//! root.update().unwrap();
//!
//! let snap = root.layout();
//! assert_eq!(snap.rect_of("bottom"), Some(Rect::new(0.0, 25.0, 100.0, 75.0)));
//! ```

pub mod container;
pub mod error;
pub mod grid;
pub mod padding;
pub mod params;
pub mod snapshot;
pub mod stack;

pub use container::{Arrangement, Container};
pub use error::{LayoutError, LayoutErrorKind};
pub use grid::{FillOrder, Grid};
pub use lac_core::geometry::{Point, Rect, Sides, Size};
pub use padding::IntoPadding;
pub use params::{
    ContainerConfig, ContainerParams, GridConfig, GridParams, StackConfig, StackParams,
};
pub use snapshot::{DIM_KEY, LayoutSnapshot, Walk, WalkEntry};
pub use stack::{Direction, Stack};
