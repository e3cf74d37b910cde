//! Cells, directions and coordinates of the alignment matrix.

use crate::Score;

/// The direction the traceback takes out of a cell.
///
/// The traceback walks from the top-left of the matrix towards the
/// bottom-right, so every move increases at least one of the offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The end of an alignment, and the boundary row of the matrix.
    #[default]
    Stop,
    /// Diagonal (Down and Right) for a match or substitution.
    Diagonal,
    /// Right for a gap in the reference.
    Horizontal,
    /// Down for a gap in the query.
    Vertical,
}

impl Direction {
    /// The code stored in the high bits of a packed cell.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Stop => 0,
            Self::Diagonal => 1,
            Self::Horizontal => 2,
            Self::Vertical => 3,
        }
    }

    /// The direction for a code stored in a packed cell.
    ///
    /// Only the two lowest bits are read.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code & 0b11 {
            0 => Self::Stop,
            1 => Self::Diagonal,
            2 => Self::Horizontal,
            _ => Self::Vertical,
        }
    }

    /// A single character for dumping a matrix.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Stop => '.',
            Self::Diagonal => '\\',
            Self::Horizontal => '-',
            Self::Vertical => '|',
        }
    }
}

/// A cell of the alignment matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Cell<T: Score> {
    /// The best score of an alignment starting at this cell.
    pub score: T,
    /// The first move of that alignment.
    pub direction: Direction,
}

impl<T: Score> Cell<T> {
    /// Create a new cell.
    pub const fn new(score: T, direction: Direction) -> Self {
        Self { score, direction }
    }
}

/// A position in the alignment matrix.
///
/// `x` is the offset along the query (the columns) and `y` is the offset
/// along the reference (the rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coordinate {
    /// The offset along the query.
    pub x: usize,
    /// The offset along the reference.
    pub y: usize,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One step along the query.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// One step back along the query, if possible.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self.x.checked_sub(1) {
            Some(x) => Some(Self::new(x, self.y)),
            None => None,
        }
    }

    /// One step along the reference.
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// One step back along the reference, if possible.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        match self.y.checked_sub(1) {
            Some(y) => Some(Self::new(self.x, y)),
            None => None,
        }
    }

    /// One step along both sequences.
    #[must_use]
    pub const fn down_right(self) -> Self {
        Self::new(self.x + 1, self.y + 1)
    }

    /// The `(row, col)` of this coordinate in the matrix.
    #[must_use]
    pub const fn row_col(self) -> (usize, usize) {
        (self.y, self.x)
    }
}
