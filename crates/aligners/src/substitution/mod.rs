//! Substitution scores for pairs of symbols.

mod builder;
mod presets;

use core::{fmt::Debug, hash::Hash};

pub use builder::{SubstitutionMatrix, SubstitutionMatrixBuilder};

use crate::Score;

/// A symbol in a sequence, e.g. a nucleotide or an amino acid.
///
/// This is implemented for every type that can be copied, compared and hashed,
/// which includes `u8` and `char`.
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync {}

impl<S: Copy + Eq + Hash + Debug + Send + Sync> Symbol for S {}

/// Scores for aligning one symbol against another.
///
/// Implementations must be symmetric, i.e. `score(a, b) == score(b, a)`.
pub trait SubstitutionScorer<A: Symbol, T: Score> {
    /// The score for aligning `a` against `b`.
    ///
    /// Symbols outside the alphabet are scored as the default symbol.
    fn score(&self, a: A, b: A) -> T;

    /// The symbol used in place of any symbol outside the alphabet.
    fn default_symbol(&self) -> A;

    /// A name for the scorer, used only for diagnostics.
    fn name(&self) -> &str;

    /// Whether the symbol is part of the alphabet.
    fn contains(&self, a: A) -> bool;

    /// Replaces a symbol outside the alphabet with the default symbol.
    ///
    /// Scorers with alternative spellings of symbols should also map those to
    /// the canonical symbol.
    fn normalize(&self, a: A) -> A {
        if self.contains(a) {
            a
        } else {
            self.default_symbol()
        }
    }

    /// Whether `a` and `b` are the same symbol of the alphabet, up to
    /// alternative spellings.
    ///
    /// Two different symbols outside the alphabet are never the same, even
    /// though both are scored as the default symbol.
    fn same_symbol(&self, a: A, b: A) -> bool {
        a == b || (self.contains(a) && self.contains(b) && self.normalize(a) == self.normalize(b))
    }
}
