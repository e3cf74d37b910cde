//! Gap penalties for the alignment matrix.

use crate::{AlignError, Score};

/// The cost of extending a gap by one more position.
///
/// A `GapPenalty` only describes the costs. The position within the current
/// run of gaps is tracked by a `GapCounter`, of which each evaluation of an
/// alignment matrix owns exactly one. This lets a single `GapPenalty` be
/// shared by any number of alignments, including concurrent ones.
///
/// All costs are expected to be non-positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GapPenalty<T: Score> {
    /// Every gap position has the same cost.
    Constant(T),
    /// The first gap position costs `opening` and every further position in
    /// the same run costs `extension` more than the one before it.
    Affine {
        /// The cost of the first position in a run of gaps.
        opening: T,
        /// The additional cost of each further position in the run.
        extension: T,
    },
}

impl<T: Score> Default for GapPenalty<T> {
    fn default() -> Self {
        Self::Constant(-T::ONE)
    }
}

impl<T: Score> GapPenalty<T> {
    /// Create an affine gap penalty.
    #[must_use]
    pub const fn affine(opening: T, extension: T) -> Self {
        Self::Affine { opening, extension }
    }

    /// Checks that none of the costs are positive.
    ///
    /// # Errors
    ///
    /// * If any cost is greater than zero.
    pub fn validate(&self) -> Result<(), AlignError> {
        match *self {
            Self::Constant(p) if p > T::ZERO => Err(AlignError::InvalidGapPenalty(format!(
                "constant penalty must not be positive, got {p}"
            ))),
            Self::Affine { opening, .. } if opening > T::ZERO => Err(AlignError::InvalidGapPenalty(format!(
                "opening penalty must not be positive, got {opening}"
            ))),
            Self::Affine { extension, .. } if extension > T::ZERO => Err(AlignError::InvalidGapPenalty(format!(
                "extension penalty must not be positive, got {extension}"
            ))),
            _ => Ok(()),
        }
    }

    /// The cost of the `n`-th position in a run of gaps, counting from 1.
    ///
    /// The affine cost saturates at `T::MIN` for absurdly long runs.
    #[must_use]
    pub fn nth(&self, n: usize) -> T {
        match *self {
            Self::Constant(p) => p,
            Self::Affine { opening, extension } => {
                opening.saturating_add(extension.saturating_mul_count(n.saturating_sub(1)))
            }
        }
    }

    /// Starts a new run of gaps for one evaluation of a matrix.
    #[must_use]
    pub const fn counter(self) -> GapCounter<T> {
        GapCounter { penalty: self, run: 0 }
    }
}

/// The state of a `GapPenalty` during the evaluation of one matrix.
///
/// `next_penalty` charges one more position of the current run and `reset`
/// ends the run. The matrix calls `reset` after each boundary edge and after
/// every cell that resolves to a diagonal move; without those resets an affine
/// penalty would keep growing across the whole matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapCounter<T: Score> {
    /// The costs.
    penalty: GapPenalty<T>,
    /// The number of positions charged since the last reset.
    run: usize,
}

impl<T: Score> GapCounter<T> {
    /// Returns the cost of extending the current run by one position.
    pub fn next_penalty(&mut self) -> T {
        self.run += 1;
        self.penalty.nth(self.run)
    }

    /// Ends the current run so that the next position costs the opening
    /// penalty again.
    pub fn reset(&mut self) {
        self.run = 0;
    }

    /// The number of positions charged since the last reset.
    #[must_use]
    pub const fn run(&self) -> usize {
        self.run
    }

    /// The costs this counter charges.
    #[must_use]
    pub const fn penalty(&self) -> GapPenalty<T> {
        self.penalty
    }
}
