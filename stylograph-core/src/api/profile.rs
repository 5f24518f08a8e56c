//! Style profile data model
//!
//! The sole durable output of an analysis run. Field names are stable: the
//! serialized shape is the contract with the downstream content generator
//! and with opaque profile storage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Complete style profile for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Sentence-level statistics
    pub sentence_stats: SentenceStats,
    /// Word-level statistics
    pub word_stats: WordStats,
    /// Paragraph and punctuation structure
    pub structure_stats: StructureStats,
    /// Signature phrases, quirks, and rhythm
    pub distinctive_patterns: DistinctivePatterns,
    /// Representative sentences, verbatim from the input
    pub excerpts: Vec<String>,
    /// Human-readable summary of the style
    pub description: String,
    /// Imperative guidance for reproducing the style
    pub mimicry_instructions: String,
}

/// Sentence-level statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceStats {
    /// Mean sentence length in word tokens
    pub avg_length: f64,
    /// Population standard deviation of sentence lengths
    pub std_dev: f64,
    /// Shortest sentence length (0 when no sentences)
    pub min_length: usize,
    /// Longest sentence length (0 when no sentences)
    pub max_length: usize,
    /// Share of short/medium/long sentences, in percent
    pub length_distribution: LengthDistribution,
    /// Most frequent opening phrases with their share of sentences
    pub common_starters: Vec<StarterUsage>,
    /// Sentence type shares, in percent
    pub sentence_types: SentenceTypes,
}

/// Distribution of sentence lengths over three buckets, in percent
///
/// The three buckets sum to 100 whenever at least one sentence exists,
/// and are all 0 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthDistribution {
    /// Sentences under the short bound
    pub short: f64,
    /// Sentences between the bounds, inclusive
    pub medium: f64,
    /// Sentences above the long bound
    pub long: f64,
}

/// One sentence-opening phrase with its frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterUsage {
    /// The lowercased one- or two-word opening phrase
    pub phrase: String,
    /// Share of sentences opening with this phrase, in percent
    pub percent: f64,
}

/// Sentence type classification, in percent of all sentences
///
/// The first four categories are mutually exclusive; `quote_containing`
/// is tallied independently and may overlap any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceTypes {
    /// Contains a question mark
    pub question: f64,
    /// Contains an exclamation mark (and no question mark)
    pub exclamation: f64,
    /// Contains a semicolon or a ", and"/", but" conjunction
    pub complex: f64,
    /// None of the above
    pub simple: f64,
    /// Contains a quote character (additive tag)
    pub quote_containing: f64,
}

/// Word-level statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    /// Mean length of alphabetic tokens
    pub avg_length: f64,
    /// Population variance of alphabetic token lengths
    pub length_variance: f64,
    /// Count of distinct lowercased alphabetic tokens
    pub vocabulary_size: usize,
    /// Distinct tokens divided by total tokens, in [0, 1]
    pub lexical_diversity: f64,
    /// Frequent words characteristic of the author
    pub distinctive_words: Vec<String>,
    /// Long words used only once or twice
    pub rare_words: Vec<String>,
}

/// Paragraph and punctuation structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureStats {
    /// Mean sentences per paragraph
    pub avg_paragraph_sentences: f64,
    /// Paragraph length habits
    pub paragraph_patterns: ParagraphPatterns,
    /// Punctuation usage over the combined text
    pub punctuation_patterns: PunctuationPatterns,
    /// Connector words found opening sentences or after commas
    pub transition_phrases: Vec<String>,
}

/// Paragraph length habits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphPatterns {
    /// Mean sentences per paragraph
    pub avg_sentences: f64,
    /// Population standard deviation of paragraph lengths
    pub length_variation: f64,
    /// Whether paragraph lengths are consistent or varied
    pub length_consistency: LengthConsistency,
    /// At least one paragraph is a single sentence
    pub uses_one_sentence_paragraphs: bool,
    /// At least one paragraph exceeds the long-paragraph bound
    pub uses_long_paragraphs: bool,
}

/// Consistency label for paragraph lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthConsistency {
    /// Standard deviation below the consistency bound
    Consistent,
    /// Standard deviation at or above the consistency bound
    Varied,
}

impl fmt::Display for LengthConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthConsistency::Consistent => write!(f, "consistent"),
            LengthConsistency::Varied => write!(f, "varied"),
        }
    }
}

/// Punctuation usage over the combined text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctuationPatterns {
    /// Raw counts per tracked mark
    pub counts: BTreeMap<String, usize>,
    /// Total marks per 100 alphabetic words
    pub density: f64,
    /// Derived sub-patterns
    pub patterns: PunctuationHabits,
}

/// Derived punctuation sub-patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctuationHabits {
    /// Em dashes plus double-hyphen dashes
    pub em_dash_usage: usize,
    /// Three-dot ellipses
    pub ellipsis_usage: usize,
    /// Semicolons per 1000 words
    pub semicolon_frequency: f64,
    /// Exclamation marks per 1000 words
    pub exclamation_frequency: f64,
    /// Matched parenthesis pairs: min(open, close)
    pub parenthetical_usage: usize,
    /// Dominant quotation mark
    pub quote_style: QuoteStyle,
}

/// Dominant quotation mark style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Double quotes outnumber single quotes
    Double,
    /// Single quotes are at least as frequent
    Single,
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Double => write!(f, "double"),
            QuoteStyle::Single => write!(f, "single"),
        }
    }
}

/// Signature phrases, quirks, and rhythm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistinctivePatterns {
    /// Recurring multi-word phrases, generic connectors excluded
    pub signature_phrases: Vec<String>,
    /// Detected stylistic habits, as description strings
    pub quirks: Vec<String>,
    /// Shape of the sentence-length sequence
    pub rhythm_pattern: RhythmPattern,
}

/// Qualitative shape of the sentence-length sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RhythmPattern {
    /// Fewer than three sentences
    #[serde(rename = "insufficient data")]
    InsufficientData,
    /// Lengths alternate up and down throughout
    #[serde(rename = "alternating")]
    Alternating,
    /// Every sentence longer than the last
    #[serde(rename = "ascending")]
    Ascending,
    /// Every sentence shorter than the last
    #[serde(rename = "descending")]
    Descending,
    /// More than the skew share of sentences are short
    #[serde(rename = "predominantly short")]
    PredominantlyShort,
    /// More than the skew share of sentences are long
    #[serde(rename = "predominantly long")]
    PredominantlyLong,
    /// No dominant shape
    #[serde(rename = "mixed")]
    Mixed,
}

impl RhythmPattern {
    /// Whether the pattern carries a usable signal for mimicry guidance
    pub fn is_informative(&self) -> bool {
        !matches!(self, RhythmPattern::InsufficientData | RhythmPattern::Mixed)
    }
}

impl fmt::Display for RhythmPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RhythmPattern::InsufficientData => "insufficient data",
            RhythmPattern::Alternating => "alternating",
            RhythmPattern::Ascending => "ascending",
            RhythmPattern::Descending => "descending",
            RhythmPattern::PredominantlyShort => "predominantly short",
            RhythmPattern::PredominantlyLong => "predominantly long",
            RhythmPattern::Mixed => "mixed",
        };
        write!(f, "{name}")
    }
}
