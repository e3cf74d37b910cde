//! Commonly used substitution matrices.

use crate::Score;

use super::{SubstitutionMatrix, SubstitutionMatrixBuilder};

/// Converts a small constant into a score.
fn score<T: Score>(value: i8) -> T {
    T::from_i64(i64::from(value)).unwrap_or_else(|| unreachable!("{value} fits in every score type"))
}

impl<T: Score> SubstitutionMatrix<u8, T> {
    /// A nucleotide matrix over `ACGTN`.
    ///
    /// `N` is the default symbol and scores `non_identical` against every
    /// symbol, itself included. Lower-case nucleotides and `U` (`u`) are
    /// aliases of their upper-case DNA counterparts.
    ///
    /// # Arguments
    ///
    /// * `identical`: The score of aligning a nucleotide against itself.
    /// * `non_identical`: The score of aligning two different nucleotides.
    #[must_use]
    pub fn nucleotide(identical: T, non_identical: T) -> Self {
        let alphabet = *b"ACGTN";

        let builder = alphabet.iter().fold(
            SubstitutionMatrixBuilder::new("nucleotide", alphabet, b'N', non_identical)
                .identical(identical)
                .non_identical(non_identical)
                .alias(b'U', b'T')
                .alias(b'u', b'T'),
            |builder, &c| builder.pair(b'N', c, non_identical),
        );

        alphabet
            .iter()
            .fold(builder, |builder, &c| builder.alias(c.to_ascii_lowercase(), c))
            .build()
            .unwrap_or_else(|e| unreachable!("The nucleotide alphabet is valid: {e}"))
    }

    /// The BLOSUM62 substitution matrix for proteins.
    ///
    /// `X` is the default symbol and scores `-1` against every amino acid,
    /// itself included. Lower-case codes are aliases of the upper-case ones.
    ///
    /// See [here](https://en.wikipedia.org/wiki/BLOSUM) for more information.
    #[must_use]
    pub fn blosum62() -> Self {
        #[rustfmt::skip]
        let scores: [&[i8]; 20] = [
            &[ 9],  // C
            &[-1,  4],  // S
            &[-1,  1,  5],  // T
            &[ 0,  1,  0,  4],  // A
            &[-3,  0, -2,  0,  6],  // G
            &[-3, -1, -1, -1, -2,  7],  // P
            &[-3,  0, -1, -2, -1, -1,  6],  // D
            &[-4,  0, -1, -1, -2, -1,  2,  5],  // E
            &[-3,  0, -1, -1, -2, -1,  0,  2,  5],  // Q
            &[-3,  1,  0, -2,  0, -2,  1,  0,  0,  6],  // N
            &[-3, -1, -2, -2, -2, -2,  1,  0,  0,  1,  8],  // H
            &[-3, -1, -1, -1, -2, -2, -2,  0,  1,  0,  0,  5],  // R
            &[-3,  0, -1, -1, -2, -1, -1,  1,  1,  0, -1,  2,  5],  // K
            &[-1, -1, -1, -1, -3, -2, -3, -2,  0, -2, -2, -1, -1,  5],  // M
            &[-1, -2, -1, -1, -4, -3, -3, -3, -3, -3, -3, -3, -3,  1,  4],  // I
            &[-1, -2, -1, -1, -4, -3, -4, -3, -2, -3, -3, -2, -2,  2,  2,  4],  // L
            &[-1, -2,  0,  0, -3, -2, -3, -2, -2, -3, -3, -3, -2,  1,  3,  1,  4],  // V
            &[-2, -3, -2, -3, -2, -4, -4, -3, -2, -4, -2, -3, -3, -1, -3, -2, -3, 11],  // W
            &[-2, -2, -2, -2, -3, -3, -3, -2, -1, -2,  2, -2, -2, -1, -1, -1, -1,  2,  7],  // Y
            &[-2, -2, -2, -2, -3, -4, -3, -3, -3, -3, -1, -3, -3,  0,  0,  0, -1,  1,  3,  6],  // F
        ];

        // The amino acid codes, in the order of the rows above.
        let codes = b"CSTAGPDEQNHRKMILVWYF";

        let alphabet = codes.iter().copied().chain(core::iter::once(b'X'));
        let builder = SubstitutionMatrixBuilder::new("blosum62", alphabet, b'X', score(-1));

        // The table is lower-triangular; `pair` fills in the upper triangle.
        let builder = codes
            .iter()
            .zip(scores.iter())
            .flat_map(|(&a, row)| codes.iter().zip(row.iter()).map(move |(&b, &s)| (a, b, s)))
            .fold(builder, |builder, (a, b, s)| builder.pair(a, b, score(s)));

        codes
            .iter()
            .chain(core::iter::once(&b'X'))
            .fold(builder, |builder, &c| builder.alias(c.to_ascii_lowercase(), c))
            .build()
            .unwrap_or_else(|e| unreachable!("The BLOSUM62 alphabet is valid: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{SubstitutionMatrix, SubstitutionScorer};

    #[test_case(b'A', b'A', 5; "identical")]
    #[test_case(b'A', b'C', -4; "non-identical")]
    #[test_case(b'N', b'N', -4; "n against itself")]
    #[test_case(b'a', b'A', 5; "lower case")]
    #[test_case(b'U', b'T', 5; "uracil")]
    #[test_case(b'u', b'g', -4; "lower case uracil")]
    #[test_case(b'R', b'A', -4; "unknown")]
    fn nucleotide(a: u8, b: u8, expected: i32) {
        let matrix = SubstitutionMatrix::<u8, i32>::nucleotide(5, -4);
        assert_eq!(matrix.score(a, b), expected);
        assert_eq!(matrix.score(b, a), expected);
    }

    #[test_case(b'C', b'C', 9; "cysteine")]
    #[test_case(b'W', b'W', 11; "tryptophan")]
    #[test_case(b'A', b'S', 1; "alanine serine")]
    #[test_case(b'F', b'Y', 3; "phenylalanine tyrosine")]
    #[test_case(b'I', b'G', -4; "isoleucine glycine")]
    #[test_case(b'w', b'c', -2; "lower case")]
    #[test_case(b'X', b'X', -1; "unknown against itself")]
    #[test_case(b'B', b'A', -1; "unknown")]
    fn blosum62(a: u8, b: u8, expected: i16) {
        let matrix = SubstitutionMatrix::<u8, i16>::blosum62();
        assert_eq!(matrix.score(a, b), expected);
        assert_eq!(matrix.score(b, a), expected);
    }

    #[test]
    fn symmetric() {
        let matrix = SubstitutionMatrix::<u8, i32>::blosum62();
        for &a in matrix.alphabet() {
            for &b in matrix.alphabet() {
                assert_eq!(matrix.score(a, b), matrix.score(b, a), "{} {}", a as char, b as char);
            }
        }

        let matrix = SubstitutionMatrix::<u8, i64>::nucleotide(2, -1);
        for &a in matrix.alphabet() {
            for &b in matrix.alphabet() {
                assert_eq!(matrix.score(a, b), matrix.score(b, a));
            }
        }
    }
}
