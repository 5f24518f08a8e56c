//! Style-fingerprinting engine
//!
//! This crate derives a structured style profile from one or more writing
//! samples: sentence and word statistics, punctuation habits, recurring
//! phrases, rhythm classification, representative excerpts, and a synthesized
//! natural-language description plus mimicry instructions for a downstream
//! text generator.
//!
//! The engine is purely computational: no I/O, no shared state, one
//! [`StyleAnalyzer`] per logical analysis request.
//!
//! ```
//! use stylograph_core::StyleAnalyzer;
//!
//! let mut analyzer = StyleAnalyzer::new();
//! analyzer.add_sample("Short sentences. Everywhere. They set the pace.");
//! let profile = analyzer.analyze_seeded(42).unwrap();
//! assert!(!profile.excerpts.is_empty());
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod compose;
pub mod domain;
pub mod error;

// Re-export key types
pub use api::analyzer::StyleAnalyzer;
pub use api::config::AnalyzerConfig;
pub use api::profile::{
    DistinctivePatterns, LengthConsistency, LengthDistribution, ParagraphPatterns,
    PunctuationHabits, PunctuationPatterns, QuoteStyle, RhythmPattern, SentenceStats,
    SentenceTypes, StarterUsage, StructureStats, StyleProfile, WordStats,
};
pub use error::{AnalyzeError, Result};

/// Analyze a single text with default configuration (convenience function)
pub fn analyze_text(text: &str) -> Result<StyleProfile> {
    let mut analyzer = StyleAnalyzer::new();
    analyzer.add_sample(text);
    analyzer.analyze()
}
