//! CLI for aligning nucleotide and protein sequences.

mod commands;
mod scoring;
mod utils;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The maximum level of the messages written to `./logs`.
    #[arg(short('l'), long, default_value = "info")]
    log_level: utils::LogLevel,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger("aligners", args.log_level.filter())?;
    ftlog::info!("Args: {args:?}");
    ftlog::info!("Logging to {log_path:?}");

    match args.command {
        Commands::Align {
            reference,
            query,
            dump,
            out_path,
            scoring,
        } => commands::align::align(&reference, &query, &scoring.config()?, dump, out_path)?,
        Commands::Batch {
            inp_path,
            out_path,
            scoring,
        } => commands::batch::align_batch(inp_path, &scoring.config()?, out_path)?,
    }

    Ok(())
}
