//! The result of aligning two sequences.

use serde::{Deserialize, Serialize};

/// An alignment of a query against a reference.
///
/// Coordinates are 1-based and refer to residues of the sequences. Gap
/// positions are 0-based offsets: a gap in the reference is recorded at the
/// query offset it faces, and a gap in the query at the reference offset it
/// faces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// The first residue of the reference in the alignment.
    reference_begin: usize,
    /// The last residue of the reference in the alignment.
    reference_end: usize,
    /// The first residue of the query in the alignment.
    query_begin: usize,
    /// The last residue of the query in the alignment.
    query_end: usize,
    /// Query offsets facing a gap in the reference.
    reference_gaps: Vec<usize>,
    /// Reference offsets facing a gap in the query.
    query_gaps: Vec<usize>,
    /// The number of columns in the alignment.
    length: usize,
    /// The number of columns with identical symbols.
    matches: usize,
    /// The score of the alignment.
    score: f64,
}

impl AlignmentResult {
    /// Start building a result.
    pub fn builder() -> AlignmentResultBuilder {
        AlignmentResultBuilder::default()
    }

    /// The first residue of the reference in the alignment.
    #[must_use]
    pub const fn reference_begin(&self) -> usize {
        self.reference_begin
    }

    /// The last residue of the reference in the alignment.
    #[must_use]
    pub const fn reference_end(&self) -> usize {
        self.reference_end
    }

    /// The first residue of the query in the alignment.
    #[must_use]
    pub const fn query_begin(&self) -> usize {
        self.query_begin
    }

    /// The last residue of the query in the alignment.
    #[must_use]
    pub const fn query_end(&self) -> usize {
        self.query_end
    }

    /// Query offsets facing a gap in the reference.
    #[must_use]
    pub fn reference_gaps(&self) -> &[usize] {
        &self.reference_gaps
    }

    /// Reference offsets facing a gap in the query.
    #[must_use]
    pub fn query_gaps(&self) -> &[usize] {
        &self.query_gaps
    }

    /// The number of columns in the alignment.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The number of columns with identical symbols.
    #[must_use]
    pub const fn matches(&self) -> usize {
        self.matches
    }

    /// The fraction of columns with identical symbols, in `[0, 1]`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn identity(&self) -> f64 {
        self.matches as f64 / self.length as f64
    }

    /// The score of the alignment.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

impl core::fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "reference {}..{}, query {}..{}, score {}, identity {:.2}% ({}/{}), gaps {}/{}",
            self.reference_begin,
            self.reference_end,
            self.query_begin,
            self.query_end,
            self.score,
            100.0 * self.identity(),
            self.matches,
            self.length,
            self.reference_gaps.len(),
            self.query_gaps.len(),
        )
    }
}

/// Builds an `AlignmentResult`.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct AlignmentResultBuilder {
    /// The first residue of the reference.
    reference_begin: usize,
    /// The last residue of the reference.
    reference_end: usize,
    /// The first residue of the query.
    query_begin: usize,
    /// The last residue of the query.
    query_end: usize,
    /// Query offsets facing a gap in the reference.
    reference_gaps: Vec<usize>,
    /// Reference offsets facing a gap in the query.
    query_gaps: Vec<usize>,
    /// The number of columns.
    length: usize,
    /// The number of identical columns.
    matches: usize,
    /// The score.
    score: f64,
}

impl AlignmentResultBuilder {
    /// Set the 1-based residue range of the reference.
    pub const fn reference(mut self, begin: usize, end: usize) -> Self {
        self.reference_begin = begin;
        self.reference_end = end;
        self
    }

    /// Set the 1-based residue range of the query.
    pub const fn query(mut self, begin: usize, end: usize) -> Self {
        self.query_begin = begin;
        self.query_end = end;
        self
    }

    /// Set the query offsets facing a gap in the reference.
    pub fn reference_gaps(mut self, gaps: Vec<usize>) -> Self {
        self.reference_gaps = gaps;
        self
    }

    /// Set the reference offsets facing a gap in the query.
    pub fn query_gaps(mut self, gaps: Vec<usize>) -> Self {
        self.query_gaps = gaps;
        self
    }

    /// Set the number of columns and of identical columns.
    pub const fn columns(mut self, length: usize, matches: usize) -> Self {
        self.length = length;
        self.matches = matches;
        self
    }

    /// Set the score.
    pub const fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Build the result.
    ///
    /// # Errors
    ///
    /// * If the alignment has no columns.
    /// * If there are more identical columns than columns.
    pub fn build(self) -> Result<AlignmentResult, crate::AlignError> {
        if self.length == 0 {
            return Err(crate::AlignError::EmptyAlignment);
        }
        if self.matches > self.length {
            return Err(crate::AlignError::InvalidResult(format!(
                "{} matches in {} columns",
                self.matches, self.length
            )));
        }

        Ok(AlignmentResult {
            reference_begin: self.reference_begin,
            reference_end: self.reference_end,
            query_begin: self.query_begin,
            query_end: self.query_end,
            reference_gaps: self.reference_gaps,
            query_gaps: self.query_gaps,
            length: self.length,
            matches: self.matches,
            score: self.score,
        })
    }
}
