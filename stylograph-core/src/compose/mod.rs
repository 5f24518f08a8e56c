//! Profile composition
//!
//! Synthesizes the natural-language `description` and the
//! `mimicry_instructions` from already-computed profile fields. Both
//! generators are explicit ordered rule lists: each rule is a pure function
//! of the structured data, so every clause is unit-testable on its own.

pub mod description;
pub mod instructions;

use crate::api::profile::{DistinctivePatterns, SentenceStats, StructureStats, WordStats};

pub use description::describe;
pub use instructions::mimicry_instructions;

/// Borrowed view over the structured profile sections
#[derive(Debug, Clone, Copy)]
pub struct ProfileFacts<'a> {
    /// Sentence-level statistics
    pub sentence: &'a SentenceStats,
    /// Word-level statistics
    pub word: &'a WordStats,
    /// Paragraph and punctuation structure
    pub structure: &'a StructureStats,
    /// Signature phrases, quirks, and rhythm
    pub distinctive: &'a DistinctivePatterns,
}

/// Threshold bands for the synthesized text
///
/// Calibration constants; change them only with evidence.
pub mod bands {
    /// Average sentence length below this reads as very short
    pub const VERY_SHORT_AVG: f64 = 10.0;
    /// Average sentence length below this reads as relatively short
    pub const SHORT_AVG: f64 = 15.0;
    /// Average sentence length below this reads as medium
    pub const MEDIUM_AVG: f64 = 20.0;
    /// Bucket share (percent) above which the distribution is skewed
    pub const SKEWED_SHARE: f64 = 60.0;
    /// Sentence-length standard deviation above this is notable variation
    pub const NOTABLE_STD_DEV: f64 = 10.0;
    /// Lexical diversity below this reads as repetitive
    pub const LOW_DIVERSITY: f64 = 0.3;
    /// Lexical diversity below this reads as moderate
    pub const MODERATE_DIVERSITY: f64 = 0.5;
    /// Lexical diversity below this reads as varied; above, exceptional
    pub const RICH_DIVERSITY: f64 = 0.7;
    /// Semicolons per 1000 words above this are a stylistic element
    pub const NOTABLE_SEMICOLON_RATE: f64 = 2.0;
    /// Exclamations per 1000 words above this are a stylistic element
    pub const NOTABLE_EXCLAMATION_RATE: f64 = 2.0;
    /// Em-dash count above this is a stylistic element
    pub const NOTABLE_EM_DASH_COUNT: usize = 3;
    /// Parenthetical count above this is a stylistic element
    pub const NOTABLE_PARENTHETICAL_COUNT: usize = 3;
}

/// Join items as a quoted, comma-separated list: `'a', 'b'`
pub(crate) fn quoted<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
