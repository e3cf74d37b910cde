#![doc = include_str!("../README.md")]

mod aligner;
pub mod config;
mod error;
mod gap;
pub mod matrix;
pub mod number;
mod substitution;

pub use aligner::{
    Aligner, AlignmentResult, AlignmentResultBuilder, Global, Local, NeedlemanWunsch, SmithWaterman, StartSelector,
};
pub use config::AlignerConfig;
pub use error::{AlignError, Axis};
pub use gap::{GapCounter, GapPenalty};
pub use matrix::AlignmentMatrix;
pub use number::Score;
pub use substitution::{SubstitutionMatrix, SubstitutionMatrixBuilder, SubstitutionScorer, Symbol};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
