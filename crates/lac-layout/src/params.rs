//! Layered construction parameters.
//!
//! Each container kind has a fully-populated `*Config` whose `Default` holds the
//! built-in values, and a `*Params` overlay whose `None` fields fall through to
//! the layer below when [`resolve`](ContainerParams::resolve)d.

use lac_core::geometry::{Point, Sides, Size};

use crate::grid::FillOrder;

/// Resolved geometry shared by every container kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerConfig {
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    pub padding: Sides,
}

/// Overrides for [`ContainerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerParams {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub padding: Option<Sides>,
}

impl ContainerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = Some(min_width);
        self.min_height = Some(min_height);
        self
    }

    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Merge these overrides over `base`.
    #[must_use]
    pub fn resolve(&self, base: &ContainerConfig) -> ContainerConfig {
        ContainerConfig {
            position: Point::new(
                self.x.unwrap_or(base.position.x),
                self.y.unwrap_or(base.position.y),
            ),
            size: Size::new(
                self.width.unwrap_or(base.size.width),
                self.height.unwrap_or(base.size.height),
            ),
            min_size: Size::new(
                self.min_width.unwrap_or(base.min_size.width),
                self.min_height.unwrap_or(base.min_size.height),
            ),
            padding: self.padding.unwrap_or(base.padding),
        }
    }
}

/// Resolved stack settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StackConfig {
    pub container: ContainerConfig,
    pub gap: f64,
}

/// Overrides for [`StackConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StackParams {
    pub container: ContainerParams,
    pub gap: Option<f64>,
}

impl StackParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, container: ContainerParams) -> Self {
        self.container = container;
        self
    }

    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.container = self.container.padding(padding);
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    #[must_use]
    pub fn resolve(&self, base: &StackConfig) -> StackConfig {
        StackConfig {
            container: self.container.resolve(&base.container),
            gap: self.gap.unwrap_or(base.gap),
        }
    }
}

/// Resolved grid settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub container: ContainerConfig,
    /// Horizontal gap between columns.
    pub gap_h: f64,
    /// Vertical gap between rows.
    pub gap_v: f64,
    pub fill: FillOrder,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            container: ContainerConfig::default(),
            gap_h: 0.0,
            gap_v: 0.0,
            fill: FillOrder::from_row_first(true),
        }
    }
}

/// Overrides for [`GridConfig`].
///
/// A non-zero uniform `gap` wins over `gap_h`/`gap_v`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridParams {
    pub container: ContainerParams,
    pub gap: Option<f64>,
    pub gap_h: Option<f64>,
    pub gap_v: Option<f64>,
    pub row_first: Option<bool>,
}

impl GridParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, container: ContainerParams) -> Self {
        self.container = container;
        self
    }

    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.container = self.container.padding(padding);
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn gaps(mut self, gap_h: f64, gap_v: f64) -> Self {
        self.gap_h = Some(gap_h);
        self.gap_v = Some(gap_v);
        self
    }

    /// Literal fill flag: `true` fills down each column first.
    pub fn row_first(mut self, row_first: bool) -> Self {
        self.row_first = Some(row_first);
        self
    }

    #[must_use]
    pub fn resolve(&self, base: &GridConfig) -> GridConfig {
        let (gap_h, gap_v) = match self.gap {
            Some(gap) if gap != 0.0 => (gap, gap),
            _ => (
                self.gap_h.unwrap_or(base.gap_h),
                self.gap_v.unwrap_or(base.gap_v),
            ),
        };
        GridConfig {
            container: self.container.resolve(&base.container),
            gap_h,
            gap_v,
            fill: self
                .row_first
                .map(FillOrder::from_row_first)
                .unwrap_or(base.fill),
        }
    }
}
