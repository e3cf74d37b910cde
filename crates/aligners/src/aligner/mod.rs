//! Local and global pairwise aligners.
//!
//! Both aligners evaluate the same `AlignmentMatrix` and differ only in the
//! cell from which the traceback starts, which is chosen by a
//! `StartSelector`.

mod result;

use core::marker::PhantomData;

use rayon::prelude::*;

pub use result::{AlignmentResult, AlignmentResultBuilder};

use crate::{
    matrix::{AlignmentMatrix, CellStore, Coordinate, Direction, Records},
    AlignError, GapPenalty, Score, SubstitutionScorer, Symbol,
};

/// Chooses the cell from which the traceback starts.
pub trait StartSelector: Default + Copy + Send + Sync {
    /// The name of the alignment mode, used in logs.
    const NAME: &'static str;

    /// Chooses the start of the traceback in an evaluated matrix.
    fn select<A: Symbol, T: Score, C: CellStore<T>>(matrix: &AlignmentMatrix<A, T, C>) -> Coordinate;
}

/// Starts the traceback at the best cell anywhere in the matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Local;

impl StartSelector for Local {
    const NAME: &'static str = "local";

    fn select<A: Symbol, T: Score, C: CellStore<T>>(matrix: &AlignmentMatrix<A, T, C>) -> Coordinate {
        matrix.best()
    }
}

/// Starts the traceback at the best cell in the first row of the matrix, so
/// that the alignment is anchored at the start of the reference.
///
/// This is not an end-to-end alignment: the query may still be clipped at
/// both ends and the reference at its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

impl StartSelector for Global {
    const NAME: &'static str = "global";

    fn select<A: Symbol, T: Score, C: CellStore<T>>(matrix: &AlignmentMatrix<A, T, C>) -> Coordinate {
        matrix
            .best_in_row(0)
            .unwrap_or_else(|| unreachable!("The reference is never empty in an evaluated matrix."))
    }
}

/// A local aligner.
pub type SmithWaterman<'a, A, T, M> = Aligner<'a, A, T, M, Local>;

/// A global aligner, anchored at the start of the reference.
pub type NeedlemanWunsch<'a, A, T, M> = Aligner<'a, A, T, M, Global>;

/// A pairwise aligner.
///
/// # Type Parameters
///
/// * `A`: The type of the symbols in the sequences.
/// * `T`: The type of the scores.
/// * `M`: The substitution scores.
/// * `P`: The choice of the start of the traceback.
pub struct Aligner<'a, A: Symbol, T: Score, M: SubstitutionScorer<A, T>, P: StartSelector> {
    /// The substitution scores.
    scorer: &'a M,
    /// The gap penalty. Each matrix gets its own counter.
    gap: GapPenalty<T>,
    /// Marker for the symbols and the start selector.
    _a: PhantomData<(A, P)>,
}

impl<'a, A: Symbol, T: Score, M: SubstitutionScorer<A, T>, P: StartSelector> Aligner<'a, A, T, M, P> {
    /// Create a new aligner.
    ///
    /// # Arguments
    ///
    /// * `scorer`: The substitution scores.
    /// * `gap`: The gap penalty.
    ///
    /// # Errors
    ///
    /// * If the gap penalty has a positive cost.
    pub fn new(scorer: &'a M, gap: GapPenalty<T>) -> Result<Self, AlignError> {
        gap.validate()?;
        Ok(Self {
            scorer,
            gap,
            _a: PhantomData,
        })
    }

    /// The substitution scores.
    #[must_use]
    pub const fn scorer(&self) -> &M {
        self.scorer
    }

    /// The gap penalty.
    #[must_use]
    pub const fn gap(&self) -> GapPenalty<T> {
        self.gap
    }

    /// Evaluates the alignment matrix for two sequences.
    ///
    /// # Errors
    ///
    /// See `AlignmentMatrix::new`.
    pub fn matrix<'s, C: CellStore<T>, R: AsRef<[A]> + ?Sized, Q: AsRef<[A]> + ?Sized>(
        &self,
        reference: &'s R,
        query: &'s Q,
    ) -> Result<AlignmentMatrix<'s, A, T, C>, AlignError> {
        AlignmentMatrix::new(reference.as_ref(), query.as_ref(), self.scorer, self.gap)
    }

    /// Aligns `query` against `reference`, storing the matrix as records.
    ///
    /// # Errors
    ///
    /// * If either sequence is empty.
    /// * If a score overflows `T`.
    pub fn align<R: AsRef<[A]> + ?Sized, Q: AsRef<[A]> + ?Sized>(
        &self,
        reference: &R,
        query: &Q,
    ) -> Result<AlignmentResult, AlignError> {
        self.align_with::<Records<T>, _, _>(reference, query)
    }

    /// Aligns `query` against `reference` with the given storage for the
    /// matrix.
    ///
    /// # Errors
    ///
    /// * If either sequence is empty.
    /// * If a score overflows `T`.
    /// * If the storage cannot represent a score.
    pub fn align_with<C: CellStore<T>, R: AsRef<[A]> + ?Sized, Q: AsRef<[A]> + ?Sized>(
        &self,
        reference: &R,
        query: &Q,
    ) -> Result<AlignmentResult, AlignError> {
        let matrix = self.matrix::<C, _, _>(reference, query)?;
        ftlog::debug!(
            "Evaluated {} matrix of {}x{} cells with {} scores in {} storage using {}",
            P::NAME,
            matrix.rows(),
            matrix.cols(),
            T::type_name(),
            C::NAME,
            self.scorer.name()
        );
        ftlog::trace!("\n{matrix}");

        let start = P::select(&matrix);
        trace_back(&matrix, start, self.scorer)
    }

    /// Aligns many pairs of sequences in parallel, one pair per task, storing
    /// each matrix as records.
    ///
    /// The results are in the same order as the pairs.
    ///
    /// # Arguments
    ///
    /// * `pairs`: The `(reference, query)` pairs.
    pub fn par_align_batch<S: AsRef<[A]> + Send + Sync>(&self, pairs: &[(S, S)]) -> Vec<Result<AlignmentResult, AlignError>>
    where
        M: Sync,
    {
        self.par_align_batch_with::<Records<T>, S>(pairs)
    }

    /// Aligns many pairs of sequences in parallel with the given storage for
    /// the matrices.
    pub fn par_align_batch_with<C: CellStore<T>, S: AsRef<[A]> + Send + Sync>(
        &self,
        pairs: &[(S, S)],
    ) -> Vec<Result<AlignmentResult, AlignError>>
    where
        M: Sync,
    {
        ftlog::debug!(
            "Aligning {} pairs with the {} aligner in {} storage",
            pairs.len(),
            P::NAME,
            C::NAME
        );
        pairs
            .par_iter()
            .map(|(reference, query)| self.align_with::<C, _, _>(reference, query))
            .collect()
    }
}

/// Walks the matrix from `start` until the alignment stops or runs off the
/// end of either sequence.
///
/// A diagonal move is a match when the scorer considers both symbols the
/// same.
fn trace_back<A: Symbol, T: Score, C: CellStore<T>, M: SubstitutionScorer<A, T>>(
    matrix: &AlignmentMatrix<A, T, C>,
    start: Coordinate,
    scorer: &M,
) -> Result<AlignmentResult, AlignError> {
    let (reference, query) = (matrix.reference(), matrix.query());

    let mut cursor = start;
    let (mut length, mut matches) = (0, 0);
    let (mut reference_gaps, mut query_gaps) = (Vec::new(), Vec::new());

    while cursor.x < query.len() && cursor.y < reference.len() {
        match matrix.cell(cursor).direction {
            Direction::Stop => break,
            Direction::Diagonal => {
                if scorer.same_symbol(reference[cursor.y], query[cursor.x]) {
                    matches += 1;
                }
                cursor = cursor.down_right();
            }
            Direction::Horizontal => {
                reference_gaps.push(cursor.x);
                cursor = cursor.right();
            }
            Direction::Vertical => {
                query_gaps.push(cursor.y);
                cursor = cursor.down();
            }
        }
        length += 1;
    }

    AlignmentResult::builder()
        .reference(start.y + 1, cursor.y)
        .query(start.x + 1, cursor.x)
        .reference_gaps(reference_gaps)
        .query_gaps(query_gaps)
        .columns(length, matches)
        .score(matrix.cell(start).score.as_f64())
        .build()
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::{matrix::Packed, SubstitutionMatrix, SubstitutionMatrixBuilder};

    fn dna() -> SubstitutionMatrix<u8, i32> {
        SubstitutionMatrix::nucleotide(5, -4)
    }

    #[test]
    fn identical() -> Result<(), AlignError> {
        let scorer = dna();
        let aligner = SmithWaterman::new(&scorer, GapPenalty::Constant(-3))?;
        let result = aligner.align(b"ACGT", b"ACGT")?;

        assert!(approx_eq!(f64, result.score(), 20.0));
        assert!(approx_eq!(f64, result.identity(), 1.0));
        assert_eq!(result.length(), 4);
        assert!(result.reference_gaps().is_empty());
        assert!(result.query_gaps().is_empty());
        assert_eq!((result.reference_begin(), result.reference_end()), (1, 4));
        assert_eq!((result.query_begin(), result.query_end()), (1, 4));

        Ok(())
    }

    #[test]
    fn gap_in_query() -> Result<(), AlignError> {
        let scorer = dna();
        let aligner = SmithWaterman::new(&scorer, GapPenalty::Constant(-3))?;
        let result = aligner.align(b"ACGT", b"ACT")?;

        let expected = AlignmentResult::builder()
            .reference(1, 4)
            .query(1, 3)
            .query_gaps(vec![2])
            .columns(4, 3)
            .score(12.0)
            .build()?;
        assert_eq!(result, expected);

        let global = NeedlemanWunsch::new(&scorer, GapPenalty::Constant(-3))?;
        assert_eq!(global.align(b"ACGT", b"ACT")?, expected);

        Ok(())
    }

    #[test]
    fn gap_in_reference() -> Result<(), AlignError> {
        let scorer = dna();
        let aligner = SmithWaterman::new(&scorer, GapPenalty::Constant(-3))?;
        let result = aligner.align(b"ACT", b"ACGT")?;

        let expected = AlignmentResult::builder()
            .reference(1, 3)
            .query(1, 4)
            .reference_gaps(vec![2])
            .columns(4, 3)
            .score(12.0)
            .build()?;
        assert_eq!(result, expected);

        Ok(())
    }

    #[test]
    fn local_and_global_starts() -> Result<(), AlignError> {
        let scorer = dna();
        let gap = GapPenalty::Constant(-3);

        let local = SmithWaterman::new(&scorer, gap)?.align(b"GA", b"A")?;
        let expected = AlignmentResult::builder()
            .reference(2, 2)
            .query(1, 1)
            .columns(1, 1)
            .score(5.0)
            .build()?;
        assert_eq!(local, expected);

        let global = NeedlemanWunsch::new(&scorer, gap)?.align(b"GA", b"A")?;
        let expected = AlignmentResult::builder()
            .reference(1, 2)
            .query(1, 1)
            .query_gaps(vec![0])
            .columns(2, 1)
            .score(2.0)
            .build()?;
        assert_eq!(global, expected);
        assert!(local.score() >= global.score());

        Ok(())
    }

    #[test]
    fn packed_storage() -> Result<(), AlignError> {
        let scorer = SubstitutionMatrix::<u8, i32>::blosum62();
        let aligner = SmithWaterman::new(&scorer, GapPenalty::affine(-11, -1))?;

        let reference = "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQ";
        let query = "MKTAYIAKQRQISFVKAHFSRQGLIEVQAPILSRVGDGTQDNLSGAEKAVKVKALPDAQFEVV";

        let records = aligner.align(reference, query)?;
        let packed = aligner.align_with::<Packed, _, _>(reference, query)?;
        assert_eq!(records, packed);
        assert!(records.score() > 0.0);
        assert!((0.0..=1.0).contains(&records.identity()));

        Ok(())
    }

    #[test]
    fn errors() -> Result<(), AlignError> {
        let scorer = dna();
        assert!(SmithWaterman::new(&scorer, GapPenalty::Constant(3)).is_err());
        assert!(NeedlemanWunsch::new(&scorer, GapPenalty::affine(-3, 1)).is_err());

        let aligner = NeedlemanWunsch::new(&scorer, GapPenalty::default())?;
        assert!(matches!(aligner.align(b"", b"ACGT"), Err(AlignError::EmptySequence(_))));
        assert!(matches!(aligner.align(b"ACGT", b""), Err(AlignError::EmptySequence(_))));

        Ok(())
    }

    #[test]
    fn batch() -> Result<(), AlignError> {
        let scorer = dna();
        let aligner = SmithWaterman::new(&scorer, GapPenalty::affine(-4, -1))?;

        let pairs = vec![
            ("ACGT".to_string(), "ACT".to_string()),
            ("GATTACA".to_string(), "GCATGCT".to_string()),
            (String::new(), "A".to_string()),
            ("TTTTTTTT".to_string(), "TTTT".to_string()),
        ];
        let results = aligner.par_align_batch(&pairs);

        assert_eq!(results.len(), pairs.len());
        for ((reference, query), result) in pairs.iter().zip(results) {
            assert_eq!(result, aligner.align(reference, query));
        }

        Ok(())
    }

    #[test]
    fn generic_symbols() -> Result<(), AlignError> {
        let scorer = SubstitutionMatrixBuilder::<char, i64>::new("greek", "αβγδ".chars(), 'δ', -2)
            .identical(3)
            .build()?;
        let aligner = SmithWaterman::new(&scorer, GapPenalty::Constant(-2))?;

        let reference = "αββγα".chars().collect::<Vec<_>>();
        let result = aligner.align(&reference, &reference)?;
        assert_eq!(result.length(), reference.len());
        assert_eq!(result.matches(), reference.len());
        assert!(approx_eq!(f64, result.score(), 15.0));

        Ok(())
    }
}
