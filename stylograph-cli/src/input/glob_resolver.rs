//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve sample file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoSamplesFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_literal_paths_and_globs() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "one").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "two").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn missing_files_produce_an_error() {
        let result = resolve_patterns(&["/no/such/place/*.txt".to_string()]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No sample files found"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let result = resolve_patterns(&["[bad".to_string()]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid file pattern"));
    }

    #[test]
    fn duplicate_matches_are_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "one").unwrap();

        let literal = file.display().to_string();
        let globbed = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[literal, globbed]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
