//! Aligning a single pair of sequences.

use std::path::Path;

use aligners::AlignerConfig;

/// Aligns `query` against `reference` and prints the result.
pub fn align<P: AsRef<Path>>(
    reference: &str,
    query: &str,
    config: &AlignerConfig,
    dump: bool,
    out_path: Option<P>,
) -> Result<(), String> {
    ftlog::info!(
        "Aligning a query of length {} against a reference of length {} with {config:?}",
        query.len(),
        reference.len()
    );

    if dump {
        let matrix = config
            .dump(reference.as_bytes(), query.as_bytes())
            .map_err(|e| e.to_string())?;
        println!("{matrix}");
    }

    let result = config
        .align(reference.as_bytes(), query.as_bytes())
        .map_err(|e| e.to_string())?;
    ftlog::info!("Result: {result}");
    println!("{result}");

    if let Some(path) = out_path {
        ftlog::info!("Saving result to {:?}", path.as_ref());
        super::save(&result, path)?;
    }

    Ok(())
}
