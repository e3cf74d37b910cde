//! A complete scoring setup for aligning nucleotide or protein sequences.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    matrix::{Packed, Records},
    AlignError, AlignmentResult, GapPenalty, NeedlemanWunsch, SmithWaterman, SubstitutionMatrix,
};

/// Where the traceback starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Smith-Waterman, from the best cell anywhere.
    #[default]
    Local,
    /// Needleman-Wunsch, from the best cell at the start of the reference.
    Global,
}

/// The built-in substitution matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `SubstitutionMatrix::nucleotide` with the configured scores.
    #[default]
    Nucleotide,
    /// `SubstitutionMatrix::blosum62`. The configured identical and
    /// non-identical scores are ignored.
    Blosum62,
}

/// The configuration of an alignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Local or global alignment.
    pub mode: Mode,
    /// The substitution matrix.
    pub matrix: Preset,
    /// The score of two identical nucleotides.
    pub identical: i32,
    /// The score of two different nucleotides.
    pub non_identical: i32,
    /// The constant gap penalty, or the opening penalty of an affine one.
    pub gap_open: i32,
    /// The extension penalty. Without one the gap penalty is constant.
    pub gap_extend: Option<i32>,
    /// Whether to store the matrix as packed 32-bit cells.
    pub packed: bool,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Local,
            matrix: Preset::Nucleotide,
            identical: 5,
            non_identical: -4,
            gap_open: -3,
            gap_extend: None,
            packed: false,
        }
    }
}

impl AlignerConfig {
    /// Builds the substitution matrix.
    #[must_use]
    pub fn scorer(&self) -> SubstitutionMatrix<u8, i32> {
        match self.matrix {
            Preset::Nucleotide => SubstitutionMatrix::nucleotide(self.identical, self.non_identical),
            Preset::Blosum62 => SubstitutionMatrix::blosum62(),
        }
    }

    /// Builds the gap penalty.
    ///
    /// # Errors
    ///
    /// * If a gap cost is positive.
    pub fn gap_penalty(&self) -> Result<GapPenalty<i32>, AlignError> {
        let gap = self.gap_extend.map_or(GapPenalty::Constant(self.gap_open), |extension| {
            GapPenalty::affine(self.gap_open, extension)
        });
        gap.validate()?;
        Ok(gap)
    }

    /// Aligns `query` against `reference` with this configuration.
    ///
    /// # Errors
    ///
    /// * If a gap cost is positive.
    /// * If either sequence is empty.
    /// * If a score overflows, or does not fit in a packed cell.
    pub fn align(&self, reference: &[u8], query: &[u8]) -> Result<AlignmentResult, AlignError> {
        let scorer = self.scorer();
        let gap = self.gap_penalty()?;

        match (self.mode, self.packed) {
            (Mode::Local, false) => SmithWaterman::new(&scorer, gap)?.align_with::<Records<_>, _, _>(reference, query),
            (Mode::Local, true) => SmithWaterman::new(&scorer, gap)?.align_with::<Packed, _, _>(reference, query),
            (Mode::Global, false) => {
                NeedlemanWunsch::new(&scorer, gap)?.align_with::<Records<_>, _, _>(reference, query)
            }
            (Mode::Global, true) => NeedlemanWunsch::new(&scorer, gap)?.align_with::<Packed, _, _>(reference, query),
        }
    }

    /// Aligns many `(reference, query)` pairs in parallel with this
    /// configuration.
    ///
    /// The results are in the same order as the pairs.
    ///
    /// # Errors
    ///
    /// * If a gap cost is positive. Errors of individual pairs are returned in
    ///   their place in the results.
    pub fn align_batch<S: AsRef<[u8]> + Send + Sync>(
        &self,
        pairs: &[(S, S)],
    ) -> Result<Vec<Result<AlignmentResult, AlignError>>, AlignError> {
        let scorer = self.scorer();
        let gap = self.gap_penalty()?;

        let results = match (self.mode, self.packed) {
            (Mode::Local, false) => SmithWaterman::new(&scorer, gap)?.par_align_batch_with::<Records<_>, _>(pairs),
            (Mode::Local, true) => SmithWaterman::new(&scorer, gap)?.par_align_batch_with::<Packed, _>(pairs),
            (Mode::Global, false) => NeedlemanWunsch::new(&scorer, gap)?.par_align_batch_with::<Records<_>, _>(pairs),
            (Mode::Global, true) => NeedlemanWunsch::new(&scorer, gap)?.par_align_batch_with::<Packed, _>(pairs),
        };
        Ok(results)
    }

    /// Renders the evaluated matrix for `query` against `reference`.
    ///
    /// # Errors
    ///
    /// See `align`.
    pub fn dump(&self, reference: &[u8], query: &[u8]) -> Result<String, AlignError> {
        let scorer = self.scorer();
        let aligner = SmithWaterman::new(&scorer, self.gap_penalty()?)?;
        let dump = if self.packed {
            aligner.matrix::<Packed, _, _>(reference, query)?.dump()
        } else {
            aligner.matrix::<Records<_>, _, _>(reference, query)?.dump()
        };
        Ok(dump)
    }

    /// Save the configuration to a given path.
    ///
    /// # Errors
    ///
    /// * If there is an error creating the file.
    /// * If there is an error serializing the configuration.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let file = std::fs::File::create(path).map_err(|e| format!("Error creating file: {e}"))?;
        bincode::serialize_into(file, self).map_err(|e| format!("Error serializing: {e}"))?;
        Ok(())
    }

    /// Load a configuration from a given path.
    ///
    /// # Errors
    ///
    /// * If there is an error opening the file.
    /// * If there is an error deserializing the configuration.
    pub fn load(path: &Path) -> Result<Self, String> {
        let file = std::fs::File::open(path).map_err(|e| format!("Error opening file: {e}"))?;
        let config = bincode::deserialize_from(file).map_err(|e| format!("Error deserializing: {e}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn default_alignment() -> Result<(), AlignError> {
        let config = AlignerConfig::default();
        let result = config.align(b"ACGT", b"ACT")?;

        assert!(approx_eq!(f64, result.score(), 12.0));
        assert_eq!(result.query_gaps(), &[2]);
        assert_eq!(result, AlignerConfig { packed: true, ..config.clone() }.align(b"ACGT", b"ACT")?);

        Ok(())
    }

    #[test]
    fn modes() -> Result<(), AlignError> {
        let local = AlignerConfig::default();
        let global = AlignerConfig {
            mode: Mode::Global,
            ..AlignerConfig::default()
        };

        let l = local.align(b"GA", b"A")?;
        let g = global.align(b"GA", b"A")?;
        assert!(approx_eq!(f64, l.score(), 5.0));
        assert!(approx_eq!(f64, g.score(), 2.0));

        Ok(())
    }

    #[test]
    fn gap_penalty() -> Result<(), AlignError> {
        let mut config = AlignerConfig::default();
        assert_eq!(config.gap_penalty()?, GapPenalty::Constant(-3));

        config.gap_extend = Some(-1);
        assert_eq!(config.gap_penalty()?, GapPenalty::affine(-3, -1));

        config.gap_open = 2;
        assert!(config.gap_penalty().is_err());
        assert!(config.align(b"ACGT", b"ACGT").is_err());

        Ok(())
    }

    #[test]
    fn proteins() -> Result<(), AlignError> {
        let config = AlignerConfig {
            matrix: Preset::Blosum62,
            gap_open: -11,
            gap_extend: Some(-1),
            ..AlignerConfig::default()
        };
        let result = config.align(b"HEAGAWGHEE", b"HEAGAWGHEE")?;
        assert!(approx_eq!(f64, result.identity(), 1.0));
        assert_eq!(result.length(), 10);

        Ok(())
    }

    #[test]
    fn serde() -> Result<(), String> {
        let config = AlignerConfig {
            mode: Mode::Global,
            gap_extend: Some(-2),
            packed: true,
            ..AlignerConfig::default()
        };

        let bytes = bincode::serialize(&config).map_err(|e| e.to_string())?;
        let decoded: AlignerConfig = bincode::deserialize(&bytes).map_err(|e| e.to_string())?;
        assert_eq!(decoded, config);

        let path = std::env::temp_dir().join(format!("aligner-config-{}.bin", std::process::id()));
        config.save(&path)?;
        assert_eq!(AlignerConfig::load(&path)?, config);
        std::fs::remove_file(&path).map_err(|e| e.to_string())?;

        Ok(())
    }

    #[test]
    fn batch() -> Result<(), AlignError> {
        let config = AlignerConfig {
            mode: Mode::Global,
            packed: true,
            ..AlignerConfig::default()
        };
        let pairs = [("ACGT", "ACT"), ("GA", "A"), ("", "A")];
        let results = config.align_batch(&pairs)?;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], config.align(b"ACGT", b"ACT"));
        assert_eq!(results[1], config.align(b"GA", b"A"));
        assert!(results[2].is_err());

        Ok(())
    }

    #[test]
    fn dump() -> Result<(), AlignError> {
        let config = AlignerConfig::default();
        assert_eq!(config.dump(b"GA", b"A")?.lines().count(), 4);
        assert_eq!(config.dump(b"GA", b"A")?, AlignerConfig { packed: true, ..config }.dump(b"GA", b"A")?);

        Ok(())
    }
}
