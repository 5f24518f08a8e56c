//! Public API surface for the style engine
//!
//! This module exposes the analyzer entry point, its configuration, and the
//! profile data model handed to downstream consumers.

pub mod analyzer;
pub mod config;
pub mod profile;

pub use analyzer::StyleAnalyzer;
pub use config::{AnalyzerConfig, ExcerptPolicy};
pub use profile::StyleProfile;
