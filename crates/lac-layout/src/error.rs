//! Layout errors.

use std::fmt;

/// Broad classification of a [`LayoutError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutErrorKind {
    /// A setter received a malformed value.
    InvalidArgument,
    /// The tree holds parameters that cannot be solved.
    InvalidConfiguration,
}

/// Errors raised while configuring or solving a container tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Padding given as a sequence whose length is neither 2 nor 4.
    PaddingArity { len: usize },
    /// A stack with children whose weights add up to zero.
    ZeroWeightSum { id: String },
    /// A grid declared with zero rows or zero columns.
    EmptyGrid {
        id: String,
        rows: usize,
        columns: usize,
    },
    /// A grid whose cell count overflows `usize`.
    GridTooLarge {
        id: String,
        rows: usize,
        columns: usize,
    },
    /// Two containers in the same tree share an id.
    DuplicateId { id: String },
    /// A container uses the key that snapshots reserve for their own rectangle.
    ReservedId { id: String },
}

impl LayoutError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> LayoutErrorKind {
        match self {
            Self::PaddingArity { .. } => LayoutErrorKind::InvalidArgument,
            Self::ZeroWeightSum { .. }
            | Self::EmptyGrid { .. }
            | Self::GridTooLarge { .. }
            | Self::DuplicateId { .. }
            | Self::ReservedId { .. } => LayoutErrorKind::InvalidConfiguration,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaddingArity { len } => write!(
                f,
                "padding expects one value or a list of 2 or 4 values, got a list of {len}"
            ),
            Self::ZeroWeightSum { id } => {
                write!(f, "stack {id:?} has children but their weights sum to zero")
            }
            Self::EmptyGrid { id, rows, columns } => {
                write!(f, "grid {id:?} has no cells ({rows} rows x {columns} columns)")
            }
            Self::GridTooLarge { id, rows, columns } => {
                write!(f, "grid {id:?} has too many cells ({rows} rows x {columns} columns)")
            }
            Self::DuplicateId { id } => write!(f, "container id {id:?} appears more than once"),
            Self::ReservedId { id } => write!(f, "container id {id:?} is reserved"),
        }
    }
}

impl std::error::Error for LayoutError {}
