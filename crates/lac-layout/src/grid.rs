//! Fixed-size grids of equal cells.

use lac_core::geometry::Rect;

use crate::LayoutError;

/// Order in which grid children are assigned to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillOrder {
    /// Fill down each column before moving to the next column.
    ColumnMajor,
    /// Fill across each row before moving to the next row.
    RowMajor,
}

impl FillOrder {
    /// Map the `row_first` flag to a fill order.
    ///
    /// `true` walks columns in the outer loop and rows in the inner loop, so
    /// it selects [`FillOrder::ColumnMajor`] despite the flag's name.
    #[must_use]
    pub const fn from_row_first(row_first: bool) -> Self {
        if row_first {
            Self::ColumnMajor
        } else {
            Self::RowMajor
        }
    }

    /// Inverse of [`from_row_first`](Self::from_row_first).
    #[must_use]
    pub const fn row_first(self) -> bool {
        matches!(self, Self::ColumnMajor)
    }
}

/// A `rows x columns` matrix of equal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    gap_h: f64,
    gap_v: f64,
    fill: FillOrder,
}

impl Grid {
    /// Create a grid; `id` only labels the error.
    ///
    /// Fails when either dimension is zero or when the cell count does not
    /// fit in a `usize`.
    pub fn new(id: &str, rows: usize, columns: usize) -> Result<Self, LayoutError> {
        if rows == 0 || columns == 0 {
            return Err(LayoutError::EmptyGrid {
                id: id.to_string(),
                rows,
                columns,
            });
        }
        if rows.checked_mul(columns).is_none() {
            return Err(LayoutError::GridTooLarge {
                id: id.to_string(),
                rows,
                columns,
            });
        }
        Ok(Self {
            rows,
            columns,
            gap_h: 0.0,
            gap_v: 0.0,
            fill: FillOrder::from_row_first(true),
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells, and so the maximum number of children.
    ///
    /// Cannot overflow: [`Grid::new`] rejects dimensions whose product does.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Horizontal and vertical gaps.
    #[must_use]
    pub const fn gaps(&self) -> (f64, f64) {
        (self.gap_h, self.gap_v)
    }

    #[must_use]
    pub const fn fill(&self) -> FillOrder {
        self.fill
    }

    pub fn set_fill(&mut self, fill: FillOrder) {
        self.fill = fill;
    }

    /// Set both gaps when `gap` is positive. Returns whether it was applied.
    pub fn set_gap(&mut self, gap: f64) -> bool {
        if gap > 0.0 {
            self.gap_h = gap;
            self.gap_v = gap;
            true
        } else {
            false
        }
    }

    /// Set each gap independently when positive. Returns whether either was applied.
    pub fn set_gaps(&mut self, gap_h: f64, gap_v: f64) -> bool {
        let mut applied = false;
        if gap_h > 0.0 {
            self.gap_h = gap_h;
            applied = true;
        }
        if gap_v > 0.0 {
            self.gap_v = gap_v;
            applied = true;
        }
        applied
    }

    /// Size of one cell inside `area`, clamped at zero.
    #[must_use]
    pub fn cell_size(&self, area: Rect) -> (f64, f64) {
        let columns = self.columns as f64;
        let rows = self.rows as f64;
        let cell_w = ((area.width - self.gap_h * (columns - 1.0)) / columns).max(0.0);
        let cell_h = ((area.height - self.gap_v * (rows - 1.0)) / rows).max(0.0);
        (cell_w, cell_h)
    }

    /// Rectangles for the first `count` cells in fill order.
    ///
    /// At most [`capacity`](Self::capacity) rectangles are returned; cells past
    /// `count` are left out.
    pub fn split(&self, area: Rect, count: usize) -> Vec<Rect> {
        let count = count.min(self.capacity());
        let (cell_w, cell_h) = self.cell_size(area);
        let step_x = cell_w + self.gap_h;
        let step_y = cell_h + self.gap_v;

        (0..count)
            .map(|i| {
                let (column, row) = match self.fill {
                    FillOrder::ColumnMajor => (i / self.rows, i % self.rows),
                    FillOrder::RowMajor => (i % self.columns, i / self.columns),
                };
                Rect::new(
                    area.x + column as f64 * step_x,
                    area.y + row as f64 * step_y,
                    cell_w,
                    cell_h,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new("g", rows, columns).expect("non-empty grid")
    }

    #[test]
    fn zero_rows_or_columns_rejected() {
        assert_eq!(
            Grid::new("g", 0, 3),
            Err(LayoutError::EmptyGrid {
                id: "g".into(),
                rows: 0,
                columns: 3
            })
        );
        assert!(Grid::new("g", 2, 0).is_err());
    }

    #[test]
    fn overflowing_cell_count_rejected() {
        assert_eq!(
            Grid::new("g", usize::MAX, 2),
            Err(LayoutError::GridTooLarge {
                id: "g".into(),
                rows: usize::MAX,
                columns: 2
            })
        );
        let wide = grid(1, usize::MAX);
        assert_eq!(wide.capacity(), usize::MAX);
        assert_eq!(wide.split(Rect::from_size(10.0, 10.0), 2).len(), 2);
    }

    #[test]
    fn default_fill_walks_down_columns() {
        let rects = grid(2, 2).split(Rect::from_size(100.0, 100.0), 4);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(rects[1], Rect::new(0.0, 50.0, 50.0, 50.0));
        assert_eq!(rects[2], Rect::new(50.0, 0.0, 50.0, 50.0));
        assert_eq!(rects[3], Rect::new(50.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn row_major_walks_across_rows() {
        let mut g = grid(2, 2);
        g.set_fill(FillOrder::from_row_first(false));
        let rects = g.split(Rect::from_size(100.0, 100.0), 2);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(rects[1], Rect::new(50.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn gaps_shrink_cells_per_axis() {
        let mut g = grid(2, 3);
        assert!(g.set_gaps(10.0, 20.0));
        let (w, h) = g.cell_size(Rect::from_size(320.0, 220.0));
        // (320 - 2*10) / 3 = 100, (220 - 20) / 2 = 100
        assert_eq!((w, h), (100.0, 100.0));

        let rects = g.split(Rect::from_size(320.0, 220.0), 6);
        assert_eq!(rects[1], Rect::new(0.0, 120.0, 100.0, 100.0));
        assert_eq!(rects[2], Rect::new(110.0, 0.0, 100.0, 100.0));
        assert_eq!(rects[5], Rect::new(220.0, 120.0, 100.0, 100.0));
    }

    #[test]
    fn split_never_exceeds_capacity() {
        assert_eq!(grid(2, 2).split(Rect::from_size(10.0, 10.0), 9).len(), 4);
    }

    #[test]
    fn gap_setters_ignore_non_positive() {
        let mut g = grid(1, 1);
        assert!(g.set_gap(3.0));
        assert!(!g.set_gap(0.0));
        assert!(g.set_gaps(-1.0, 5.0));
        assert_eq!(g.gaps(), (3.0, 5.0));
        assert!(!g.set_gaps(0.0, -2.0));
        assert_eq!(g.gaps(), (3.0, 5.0));
    }

    #[test]
    fn row_first_flag_round_trips() {
        assert!(FillOrder::from_row_first(true).row_first());
        assert!(!FillOrder::from_row_first(false).row_first());
    }
}
