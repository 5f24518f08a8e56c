//! Engine error types

use thiserror::Error;

/// Errors produced by the analysis engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// No non-empty sample was added before `analyze` was called
    #[error("no samples added to analyze")]
    EmptyInput,

    /// Invalid analyzer configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, AnalyzeError>;
