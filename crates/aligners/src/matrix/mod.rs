//! The dynamic programming matrix shared by the local and global aligners.
//!
//! The matrix has one row per symbol of the reference and one column per
//! symbol of the query, plus a boundary row and a boundary column at the far
//! ends. The value of the cell at `(row, col)` is the best score of an
//! alignment of `reference[row..]` against `query[col..]` that starts with the
//! move stored in that cell. The matrix is therefore evaluated from the
//! bottom-right corner towards the top-left, and the traceback walks from
//! the top-left towards the bottom-right.

mod ops;
mod store;

pub use ops::{Cell, Coordinate, Direction};
pub use store::{CellStore, Packed, Records};

use crate::{AlignError, Axis, GapPenalty, Score, SubstitutionScorer, Symbol};

/// A fully evaluated alignment matrix.
///
/// # Type Parameters
///
/// * `A`: The type of the symbols in the sequences.
/// * `T`: The type of the scores.
/// * `C`: The storage for the cells.
#[derive(Clone, Debug)]
pub struct AlignmentMatrix<'s, A: Symbol, T: Score, C: CellStore<T> = Records<T>> {
    /// The sequence laid along the rows.
    reference: &'s [A],
    /// The sequence laid along the columns.
    query: &'s [A],
    /// The cells.
    store: C,
    /// The best evaluated cell.
    best: Coordinate,
    /// The score of the best evaluated cell.
    best_score: T,
}

impl<'s, A: Symbol, T: Score, C: CellStore<T>> AlignmentMatrix<'s, A, T, C> {
    /// Evaluates the alignment matrix for two sequences.
    ///
    /// # Arguments
    ///
    /// * `reference`: The sequence laid along the rows.
    /// * `query`: The sequence laid along the columns.
    /// * `scorer`: The substitution scores.
    /// * `gap`: The gap penalty. A fresh `GapCounter` is used for this matrix.
    ///
    /// # Errors
    ///
    /// * If either sequence is empty.
    /// * If the grid has more cells than can be addressed.
    /// * If a score overflows `T`.
    /// * If the storage cannot represent a score.
    pub fn new<M: SubstitutionScorer<A, T>>(
        reference: &'s [A],
        query: &'s [A],
        scorer: &M,
        gap: GapPenalty<T>,
    ) -> Result<Self, AlignError> {
        if reference.is_empty() {
            return Err(AlignError::EmptySequence(Axis::Reference));
        }
        if query.is_empty() {
            return Err(AlignError::EmptySequence(Axis::Query));
        }

        let (rows, cols) = (reference.len() + 1, query.len() + 1);
        let mut store = C::with_shape(rows, cols)?;
        let mut counter = gap.counter();

        // The last column lets a gap in the reference run off the end of the
        // query.
        for row in 0..rows {
            store.set(row, cols - 1, Cell::new(T::ZERO, Direction::Horizontal))?;
        }
        counter.reset();

        // The last row ends every alignment, including the corner.
        for col in 0..cols {
            store.set(rows - 1, col, Cell::new(T::ZERO, Direction::Stop))?;
        }
        counter.reset();

        let mut best = Coordinate::default();
        let mut best_score = T::MIN;

        for (row, &r) in reference.iter().enumerate().rev() {
            for (col, &q) in query.iter().enumerate().rev() {
                let overflow = || AlignError::ScoreOverflow { row, col };

                let substitution = scorer.score(r, q);
                let gap = counter.next_penalty();

                let diag = substitution
                    .checked_add(store.get(row + 1, col + 1).score)
                    .ok_or_else(overflow)?;
                let horiz = gap.checked_add(store.get(row, col + 1).score).ok_or_else(overflow)?;
                let vert = gap.checked_add(store.get(row + 1, col).score).ok_or_else(overflow)?;

                // Ties prefer the diagonal, then the horizontal move.
                let cell = if diag >= horiz && diag >= vert {
                    counter.reset();
                    Cell::new(diag, Direction::Diagonal)
                } else if horiz >= vert {
                    Cell::new(horiz, Direction::Horizontal)
                } else {
                    Cell::new(vert, Direction::Vertical)
                };
                store.set(row, col, cell)?;

                if cell.score >= best_score {
                    best_score = cell.score;
                    best = Coordinate::new(col, row);
                }
            }
        }

        Ok(Self {
            reference,
            query,
            store,
            best,
            best_score,
        })
    }

    /// The sequence laid along the rows.
    #[must_use]
    pub const fn reference(&self) -> &'s [A] {
        self.reference
    }

    /// The sequence laid along the columns.
    #[must_use]
    pub const fn query(&self) -> &'s [A] {
        self.query
    }

    /// The number of rows, including the boundary row.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.reference.len() + 1
    }

    /// The number of columns, including the boundary column.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.query.len() + 1
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// * If `(row, col)` is outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell<T> {
        self.store.get(row, col)
    }

    /// The cell at a coordinate.
    #[must_use]
    pub fn cell(&self, at: Coordinate) -> Cell<T> {
        let (row, col) = at.row_col();
        self.get(row, col)
    }

    /// The score of the cell at `(row, col)`.
    #[must_use]
    pub fn score_at(&self, row: usize, col: usize) -> T {
        self.get(row, col).score
    }

    /// The direction of the cell at `(row, col)`.
    #[must_use]
    pub fn direction_at(&self, row: usize, col: usize) -> Direction {
        self.get(row, col).direction
    }

    /// The best evaluated cell.
    ///
    /// Among cells with equal scores, the one evaluated last wins, i.e. the
    /// one closest to the top-left of the matrix.
    #[must_use]
    pub const fn best(&self) -> Coordinate {
        self.best
    }

    /// The score of the best evaluated cell.
    #[must_use]
    pub const fn best_score(&self) -> T {
        self.best_score
    }

    /// The best evaluated cell in a row, with the same tie-break as `best`.
    ///
    /// Returns `None` for the boundary row and for rows outside the matrix.
    #[must_use]
    pub fn best_in_row(&self, row: usize) -> Option<Coordinate> {
        if row >= self.reference.len() {
            return None;
        }

        let mut best = Coordinate::new(self.query.len() - 1, row);
        let mut best_score = self.score_at(row, best.x);
        for col in (0..self.query.len()).rev() {
            let score = self.score_at(row, col);
            if score >= best_score {
                best_score = score;
                best = Coordinate::new(col, row);
            }
        }
        Some(best)
    }

    /// The number of bytes used by the cells.
    #[must_use]
    pub fn num_bytes(&self) -> usize {
        self.store.num_bytes()
    }

    /// Renders the scores and directions of every cell as text.
    ///
    /// Each cell is written as its score followed by the symbol of its
    /// direction. Rows are labelled with their reference offset and columns
    /// with their query offset.
    #[must_use]
    pub fn dump(&self) -> String {
        let width = (0..self.rows())
            .flat_map(|row| (0..self.cols()).map(move |col| (row, col)))
            .map(|(row, col)| self.score_at(row, col).to_string().len())
            .max()
            .unwrap_or(1)
            + 1;

        let mut lines = Vec::with_capacity(self.rows() + 1);

        let header = (0..self.cols())
            .map(|col| format!("{col:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{:>5} {header}", ""));

        for row in 0..self.rows() {
            let cells = (0..self.cols())
                .map(|col| {
                    let Cell { score, direction } = self.get(row, col);
                    format!("{:>w$}{}", score, direction.symbol(), w = width - 1)
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("{row:>5} {cells}"));
        }

        lines.join("\n")
    }
}

impl<A: Symbol, T: Score, C: CellStore<T>> core::fmt::Display for AlignmentMatrix<'_, A, T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.dump())
    }
}
