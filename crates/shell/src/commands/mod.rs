//! The commands under the `shell` CLI.

pub mod align;
pub mod batch;

use std::path::PathBuf;

use clap::Subcommand;

use crate::scoring::ScoringArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align a query against a reference.
    Align {
        /// The reference sequence.
        #[arg(short('r'), long)]
        reference: String,

        /// The query sequence.
        #[arg(short('q'), long)]
        query: String,

        /// Whether to print the evaluated matrix.
        #[arg(short('d'), long, default_value_t = false)]
        dump: bool,

        /// The path at which to save the result.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,

        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Align many pairs of sequences in parallel.
    Batch {
        /// The path to a file with one tab-separated reference and query per
        /// line.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The path at which to save the results.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,

        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

/// Writes a value to `path` with bincode.
fn save<T: serde::Serialize, P: AsRef<std::path::Path>>(value: &T, path: P) -> Result<(), String> {
    let file = std::fs::File::create(path).map_err(|e| format!("Error creating file: {e}"))?;
    bincode::serialize_into(file, value).map_err(|e| format!("Error serializing: {e}"))
}
