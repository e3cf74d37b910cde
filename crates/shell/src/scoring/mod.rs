//! Scoring options for the CLI.

use aligners::{
    config::{Mode, Preset},
    AlignerConfig,
};

/// The alignment modes.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum AlignMode {
    #[clap(name = "local")]
    Local,
    #[clap(name = "global")]
    Global,
}

impl AlignMode {
    /// Get the `Mode` used by the aligners.
    pub const fn mode(self) -> Mode {
        match self {
            Self::Local => Mode::Local,
            Self::Global => Mode::Global,
        }
    }
}

/// The substitution matrices.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Matrix {
    #[clap(name = "nucleotide")]
    Nucleotide,
    #[clap(name = "blosum62")]
    Blosum62,
}

impl Matrix {
    /// Get the `Preset` used by the aligners.
    pub const fn preset(self) -> Preset {
        match self {
            Self::Nucleotide => Preset::Nucleotide,
            Self::Blosum62 => Preset::Blosum62,
        }
    }
}

/// The scoring options shared by all subcommands.
#[derive(clap::Args, Debug)]
pub struct ScoringArgs {
    /// Path to a configuration saved with `--save-config`. When given, the
    /// other scoring options are ignored.
    #[arg(short('c'), long)]
    config: Option<std::path::PathBuf>,

    /// Path at which to save the configuration.
    #[arg(long)]
    save_config: Option<std::path::PathBuf>,

    /// Where the traceback starts.
    #[arg(short('m'), long, default_value = "local")]
    mode: AlignMode,

    /// The substitution matrix.
    #[arg(short('x'), long, default_value = "nucleotide")]
    matrix: Matrix,

    /// The score of two identical nucleotides.
    #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
    identical: i32,

    /// The score of two different nucleotides.
    #[arg(long, default_value_t = -4, allow_hyphen_values = true)]
    mismatch: i32,

    /// The constant gap penalty, or the opening penalty with `--gap-extend`.
    #[arg(long, default_value_t = -3, allow_hyphen_values = true)]
    gap_open: i32,

    /// The extension penalty of an affine gap penalty.
    #[arg(long, allow_hyphen_values = true)]
    gap_extend: Option<i32>,

    /// Whether to store the matrix as packed 32-bit cells.
    #[arg(short('p'), long, default_value_t = false)]
    packed: bool,
}

impl ScoringArgs {
    /// Builds the configuration, loading or saving it as requested.
    pub fn config(&self) -> Result<AlignerConfig, String> {
        let config = match &self.config {
            Some(path) => {
                ftlog::info!("Loading configuration from {path:?}");
                AlignerConfig::load(path)?
            }
            None => AlignerConfig {
                mode: self.mode.mode(),
                matrix: self.matrix.preset(),
                identical: self.identical,
                non_identical: self.mismatch,
                gap_open: self.gap_open,
                gap_extend: self.gap_extend,
                packed: self.packed,
            },
        };

        config.gap_penalty().map_err(|e| e.to_string())?;

        if let Some(path) = &self.save_config {
            ftlog::info!("Saving configuration to {path:?}");
            config.save(path)?;
        }

        Ok(config)
    }
}
