use crate::error::{CliError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Expands the user-supplied glob patterns into a sorted, deduplicated list of
/// input files. Directories matched by a pattern are skipped; matching zero
/// files overall is an error (a silent empty batch hides typos).
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| CliError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        for entry in entries {
            let path = entry.map_err(|source| CliError::Glob {
                pattern: pattern.clone(),
                source,
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }

    paths.sort();
    paths.dedup();

    if paths.is_empty() {
        return Err(CliError::NoInputs {
            patterns: patterns.to_vec(),
        });
    }
    debug!(
        "Expanded {} pattern(s) into {} input file(s)",
        patterns.len(),
        paths.len()
    );
    Ok(paths)
}
