//! Storage for the cells of an alignment matrix.

use crate::{AlignError, Score};

use super::{Cell, Direction};

/// Storage for a `rows x cols` grid of cells.
///
/// A new store has every cell set to `(0, Stop)`. Cells are addressed by
/// `(row, col)` and are stored row-major.
pub trait CellStore<T: Score>: Sized {
    /// A name for the storage strategy, used in logs.
    const NAME: &'static str;

    /// Create a store for a grid of the given shape.
    ///
    /// # Errors
    ///
    /// * If the number of cells overflows `usize`.
    fn with_shape(rows: usize, cols: usize) -> Result<Self, AlignError>;

    /// The `(rows, cols)` of the grid.
    fn shape(&self) -> (usize, usize);

    /// Read the cell at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> Cell<T>;

    /// Write the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// * If the storage cannot represent the score of the cell.
    fn set(&mut self, row: usize, col: usize, cell: Cell<T>) -> Result<(), AlignError>;

    /// The number of bytes used by the cells.
    fn num_bytes(&self) -> usize;
}

/// The number of cells in a `rows x cols` grid.
fn num_cells(rows: usize, cols: usize) -> Result<usize, AlignError> {
    rows.checked_mul(cols).ok_or(AlignError::MatrixTooLarge { rows, cols })
}

/// Stores each cell as a `(score, direction)` record.
#[derive(Clone, Debug)]
pub struct Records<T: Score> {
    /// The number of columns.
    cols: usize,
    /// The cells, row-major.
    cells: Vec<Cell<T>>,
}

impl<T: Score> CellStore<T> for Records<T> {
    const NAME: &'static str = "records";

    fn with_shape(rows: usize, cols: usize) -> Result<Self, AlignError> {
        Ok(Self {
            cols,
            cells: vec![Cell::default(); num_cells(rows, cols)?],
        })
    }

    fn shape(&self) -> (usize, usize) {
        (self.cells.len() / self.cols.max(1), self.cols)
    }

    fn get(&self, row: usize, col: usize) -> Cell<T> {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell<T>) -> Result<(), AlignError> {
        self.cells[row * self.cols + col] = cell;
        Ok(())
    }

    fn num_bytes(&self) -> usize {
        self.cells.len() * core::mem::size_of::<Cell<T>>()
    }
}

/// Packs each cell into a single `u32`.
///
/// The score occupies the low 28 bits in two's complement and the direction
/// occupies the high bits. Three bits are reserved for the direction but only
/// two are used. Scores outside `[-2^27, 2^27 - 1]` cannot be stored.
#[derive(Clone, Debug)]
pub struct Packed {
    /// The number of columns.
    cols: usize,
    /// The packed cells, row-major.
    words: Vec<u32>,
}

impl Packed {
    /// The number of bits used for the score.
    pub const SCORE_BITS: u32 = 28;

    /// The smallest score that can be stored.
    pub const MIN_SCORE: i64 = -(1 << (Self::SCORE_BITS - 1));

    /// The largest score that can be stored.
    pub const MAX_SCORE: i64 = (1 << (Self::SCORE_BITS - 1)) - 1;

    /// The mask for the score bits.
    const SCORE_MASK: u32 = (1 << Self::SCORE_BITS) - 1;

    /// Packs a score and a direction into a word.
    ///
    /// # Errors
    ///
    /// * If the score is outside `[MIN_SCORE, MAX_SCORE]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn pack(score: i64, direction: Direction) -> Result<u32, AlignError> {
        if score < Self::MIN_SCORE || score > Self::MAX_SCORE {
            return Err(AlignError::PackedScoreOutOfRange(score));
        }
        Ok((direction.code() << Self::SCORE_BITS) | (score as u32 & Self::SCORE_MASK))
    }

    /// Unpacks a word into a score and a direction.
    ///
    /// The score is sign-extended by shifting it to the top of the word and
    /// arithmetically shifting it back down.
    #[allow(clippy::cast_possible_wrap)]
    #[must_use]
    pub const fn unpack(word: u32) -> (i64, Direction) {
        let shift = u32::BITS - Self::SCORE_BITS;
        let score = ((word << shift) as i32) >> shift;
        (score as i64, Direction::from_code(word >> Self::SCORE_BITS))
    }
}

impl<T: Score> CellStore<T> for Packed {
    const NAME: &'static str = "packed";

    fn with_shape(rows: usize, cols: usize) -> Result<Self, AlignError> {
        Ok(Self {
            cols,
            words: vec![0; num_cells(rows, cols)?],
        })
    }

    fn shape(&self) -> (usize, usize) {
        (self.words.len() / self.cols.max(1), self.cols)
    }

    fn get(&self, row: usize, col: usize) -> Cell<T> {
        let (score, direction) = Self::unpack(self.words[row * self.cols + col]);
        let score = T::from_i64(score)
            .unwrap_or_else(|| unreachable!("Only scores of type {} were packed.", T::type_name()));
        Cell::new(score, direction)
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell<T>) -> Result<(), AlignError> {
        self.words[row * self.cols + col] = Self::pack(cell.score.as_i64(), cell.direction)?;
        Ok(())
    }

    fn num_bytes(&self) -> usize {
        self.words.len() * core::mem::size_of::<u32>()
    }
}
