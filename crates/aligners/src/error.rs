//! Errors raised while configuring or running an alignment.

/// The axis of the alignment matrix a sequence is laid along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The rows of the matrix.
    Reference,
    /// The columns of the matrix.
    Query,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// Errors for the aligners.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AlignError {
    /// One of the sequences has no symbols.
    #[error("the {0} sequence is empty")]
    EmptySequence(Axis),
    /// The grid of cells for two sequences has too many cells to address.
    #[error("a matrix of {rows}x{cols} cells is too large")]
    MatrixTooLarge {
        /// The number of rows.
        rows: usize,
        /// The number of columns.
        cols: usize,
    },
    /// A gap penalty was configured with a positive cost.
    #[error("invalid gap penalty: {0}")]
    InvalidGapPenalty(String),
    /// A substitution matrix could not be built.
    #[error("invalid substitution scorer: {0}")]
    InvalidScorer(String),
    /// A score did not fit in the score type.
    #[error("score overflow while evaluating cell ({row}, {col})")]
    ScoreOverflow {
        /// The row of the cell.
        row: usize,
        /// The column of the cell.
        col: usize,
    },
    /// A score did not fit in the 28 bits of a packed cell.
    #[error("score {0} does not fit in a packed cell")]
    PackedScoreOutOfRange(i64),
    /// The parts of an alignment result are inconsistent.
    #[error("invalid alignment result: {0}")]
    InvalidResult(String),
    /// The traceback did not visit a single cell.
    #[error("the traceback produced an empty alignment")]
    EmptyAlignment,
}
