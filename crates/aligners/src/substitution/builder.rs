//! A substitution matrix over a finite alphabet and its builder.

use std::collections::HashMap;

use crate::{AlignError, Score};

use super::{SubstitutionScorer, Symbol};

/// A symmetric table of substitution scores over a finite alphabet.
///
/// Use `SubstitutionMatrixBuilder` to create one, or one of the presets such
/// as `SubstitutionMatrix::nucleotide` and `SubstitutionMatrix::blosum62`.
#[derive(Clone, Debug)]
pub struct SubstitutionMatrix<A: Symbol, T: Score> {
    /// The name of the matrix.
    name: String,
    /// The symbols of the alphabet, in the order of the rows of `scores`.
    alphabet: Vec<A>,
    /// The row of each symbol, including aliases.
    index: HashMap<A, usize>,
    /// The scores, stored row-major.
    scores: Vec<T>,
    /// The row of the default symbol.
    default: usize,
}

impl<A: Symbol, T: Score> SubstitutionMatrix<A, T> {
    /// The symbols of the alphabet, without aliases.
    #[must_use]
    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }

    /// The row of a symbol, falling back to the default symbol.
    fn row_of(&self, a: A) -> usize {
        self.index.get(&a).copied().unwrap_or(self.default)
    }
}

impl<A: Symbol, T: Score> SubstitutionScorer<A, T> for SubstitutionMatrix<A, T> {
    fn score(&self, a: A, b: A) -> T {
        self.scores[self.row_of(a) * self.alphabet.len() + self.row_of(b)]
    }

    fn default_symbol(&self) -> A {
        self.alphabet[self.default]
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, a: A) -> bool {
        self.index.contains_key(&a)
    }

    fn normalize(&self, a: A) -> A {
        self.alphabet[self.row_of(a)]
    }
}

/// Builds a `SubstitutionMatrix`.
///
/// Every pair starts at the uniform score given to `new`. At `build` time the
/// remaining settings are applied in a fixed order, so that later ones win:
///
/// 1. `identical` overrides the diagonal.
/// 2. `non_identical` overrides everything off the diagonal.
/// 3. `pair` overrides individual pairs, in the order they were given.
///
/// Setting the score of `(a, b)` also sets the score of `(b, a)`.
#[derive(Clone, Debug)]
#[must_use]
pub struct SubstitutionMatrixBuilder<A: Symbol, T: Score> {
    /// The name of the matrix.
    name: String,
    /// The symbols of the alphabet.
    alphabet: Vec<A>,
    /// The symbol used in place of unknown symbols.
    default_symbol: A,
    /// The starting score of every pair.
    uniform: T,
    /// The score of aligning a symbol against itself.
    identical: Option<T>,
    /// The score of aligning two different symbols.
    non_identical: Option<T>,
    /// Scores of individual pairs.
    pairs: Vec<(A, A, T)>,
    /// Alternative spellings of symbols, e.g. lower-case nucleotides.
    aliases: Vec<(A, A)>,
}

impl<A: Symbol, T: Score> SubstitutionMatrixBuilder<A, T> {
    /// Create a new builder.
    ///
    /// # Arguments
    ///
    /// * `name`: A name for the matrix, used only for diagnostics.
    /// * `alphabet`: The symbols of the alphabet.
    /// * `default_symbol`: The symbol used in place of unknown symbols. It must
    ///   be a member of `alphabet`.
    /// * `uniform`: The starting score of every pair.
    pub fn new<I: IntoIterator<Item = A>>(name: &str, alphabet: I, default_symbol: A, uniform: T) -> Self {
        Self {
            name: name.to_string(),
            alphabet: alphabet.into_iter().collect(),
            default_symbol,
            uniform,
            identical: None,
            non_identical: None,
            pairs: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Set the score of aligning any symbol against itself.
    pub const fn identical(mut self, score: T) -> Self {
        self.identical = Some(score);
        self
    }

    /// Set the score of aligning any two different symbols.
    pub const fn non_identical(mut self, score: T) -> Self {
        self.non_identical = Some(score);
        self
    }

    /// Set the score of aligning `a` against `b`, and `b` against `a`.
    pub fn pair(mut self, a: A, b: A, score: T) -> Self {
        self.pairs.push((a, b, score));
        self
    }

    /// Let `alias` be scored exactly as `canonical`.
    ///
    /// The alias is not part of the alphabet, and `normalize` replaces it with
    /// `canonical`.
    pub fn alias(mut self, alias: A, canonical: A) -> Self {
        self.aliases.push((alias, canonical));
        self
    }

    /// Build the matrix.
    ///
    /// # Errors
    ///
    /// * If the alphabet is empty.
    /// * If a symbol appears more than once in the alphabet.
    /// * If the default symbol, a symbol in a pair, or the target of an alias
    ///   is not in the alphabet.
    /// * If an alias is itself a member of the alphabet.
    pub fn build(self) -> Result<SubstitutionMatrix<A, T>, AlignError> {
        if self.alphabet.is_empty() {
            return Err(AlignError::InvalidScorer(format!("{}: the alphabet is empty", self.name)));
        }

        let mut index = HashMap::with_capacity(self.alphabet.len() + self.aliases.len());
        for (i, &a) in self.alphabet.iter().enumerate() {
            if index.insert(a, i).is_some() {
                return Err(AlignError::InvalidScorer(format!(
                    "{}: symbol {a:?} appears more than once",
                    self.name
                )));
            }
        }

        let row_of = |a: A| {
            index
                .get(&a)
                .copied()
                .ok_or_else(|| AlignError::InvalidScorer(format!("{}: symbol {a:?} is not in the alphabet", self.name)))
        };

        let default = row_of(self.default_symbol)?;

        let n = self.alphabet.len();
        let mut scores = vec![self.uniform; n * n];

        if let Some(score) = self.identical {
            (0..n).for_each(|i| scores[i * n + i] = score);
        }

        if let Some(score) = self.non_identical {
            for i in 0..n {
                for j in (0..n).filter(|&j| j != i) {
                    scores[i * n + j] = score;
                }
            }
        }

        for &(a, b, score) in &self.pairs {
            let (i, j) = (row_of(a)?, row_of(b)?);
            scores[i * n + j] = score;
            scores[j * n + i] = score;
        }

        let mut aliases = Vec::with_capacity(self.aliases.len());
        for &(alias, canonical) in &self.aliases {
            if index.contains_key(&alias) {
                return Err(AlignError::InvalidScorer(format!(
                    "{}: alias {alias:?} is already in the alphabet",
                    self.name
                )));
            }
            aliases.push((alias, row_of(canonical)?));
        }
        index.extend(aliases);

        Ok(SubstitutionMatrix {
            name: self.name,
            alphabet: self.alphabet,
            index,
            scores,
            default,
        })
    }
}
