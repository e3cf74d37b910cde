//! Aligning many pairs of sequences.

use std::path::Path;

use aligners::AlignerConfig;

/// Reads `(reference, query)` pairs, one tab-separated pair per line.
///
/// Empty lines are skipped. Every other line must have exactly two fields.
fn read_pairs<P: AsRef<Path>>(inp_path: P) -> Result<Vec<(String, String)>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_path(inp_path)
        .map_err(|e| e.to_string())?;

    reader
        .records()
        .map(|record| {
            let record = record.map_err(|e| e.to_string())?;
            if record.len() != 2 {
                return Err(format!("Invalid record length. Should have 2 parts: {record:?}"));
            }
            record.deserialize::<(String, String)>(None).map_err(|e| e.to_string())
        })
        .collect()
}

/// Aligns every pair in `inp_path` in parallel and prints one result per line.
pub fn align_batch<P: AsRef<Path>>(inp_path: P, config: &AlignerConfig, out_path: Option<P>) -> Result<(), String> {
    let pairs = read_pairs(&inp_path)?;
    ftlog::info!("Read {} pairs from {:?}", pairs.len(), inp_path.as_ref());

    let results = config.align_batch(&pairs).map_err(|e| e.to_string())?;

    let mut n_failed = 0;
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(result) => println!("{i}\t{result}"),
            Err(e) => {
                ftlog::warn!("Pair {i} failed: {e}");
                println!("{i}\terror: {e}");
                n_failed += 1;
            }
        }
    }
    ftlog::info!("Aligned {} pairs, {n_failed} failed", results.len());

    if let Some(path) = out_path {
        ftlog::info!("Saving results to {:?}", path.as_ref());
        let results = results.into_iter().map(|r| r.map_err(|e| e.to_string())).collect::<Vec<_>>();
        super::save(&results, path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::read_pairs;

    fn write_tsv(name: &str, contents: &str) -> Result<PathBuf, String> {
        let path = std::env::temp_dir().join(format!("{name}-{}.tsv", std::process::id()));
        std::fs::write(&path, contents).map_err(|e| e.to_string())?;
        Ok(path)
    }

    #[test]
    fn pairs() -> Result<(), String> {
        let path = write_tsv("pairs", "ACGT\tACT\n\nGA\t A\n")?;
        let pairs = read_pairs(&path);
        std::fs::remove_file(&path).map_err(|e| e.to_string())?;

        let expected = vec![
            ("ACGT".to_string(), "ACT".to_string()),
            ("GA".to_string(), "A".to_string()),
        ];
        assert_eq!(pairs?, expected);

        Ok(())
    }

    #[test]
    fn extra_fields() -> Result<(), String> {
        let path = write_tsv("extra-fields", "ACGT\tAC\tGT\n")?;
        let pairs = read_pairs(&path);
        std::fs::remove_file(&path).map_err(|e| e.to_string())?;
        assert!(pairs.is_err());

        let path = write_tsv("ragged", "ACGT\tACT\nGA\tA\tT\n")?;
        let pairs = read_pairs(&path);
        std::fs::remove_file(&path).map_err(|e| e.to_string())?;
        assert!(pairs.is_err());

        Ok(())
    }

    #[test]
    fn missing_field() -> Result<(), String> {
        let path = write_tsv("missing-field", "ACGT\n")?;
        let pairs = read_pairs(&path);
        std::fs::remove_file(&path).map_err(|e| e.to_string())?;
        assert!(pairs.is_err());

        Ok(())
    }
}
