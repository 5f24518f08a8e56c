//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No files matched the sample patterns
    NoSamplesFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Analysis error from the core engine
    AnalysisError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoSamplesFound(patterns) => {
                write!(f, "No sample files found matching: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AnalysisError(msg) => write!(f, "Analysis error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_samples_found_display() {
        let error = CliError::NoSamplesFound("samples/*.txt".to_string());
        assert_eq!(
            error.to_string(),
            "No sample files found matching: samples/*.txt"
        );
    }

    #[test]
    fn invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn analysis_error_display() {
        let error = CliError::AnalysisError("no samples added to analyze".to_string());
        assert_eq!(
            error.to_string(),
            "Analysis error: no samples added to analyze"
        );
    }

    #[test]
    fn error_trait_implementation() {
        let error = CliError::ConfigError("bad threshold".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("ConfigError"));
    }
}
