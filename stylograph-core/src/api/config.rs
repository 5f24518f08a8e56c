//! Analyzer configuration
//!
//! Every heuristic threshold the engine applies is a tunable parameter.
//! The defaults are calibration constants; change them only with evidence.

use crate::error::{AnalyzeError, Result};
use serde::{Deserialize, Serialize};

/// Default threshold constants
pub mod defaults {
    /// Pool of most-frequent words considered for distinctive words
    pub const DISTINCTIVE_POOL: usize = 50;
    /// Maximum distinctive words reported
    pub const DISTINCTIVE_WORD_LIMIT: usize = 10;
    /// Minimum character length for a distinctive word
    pub const DISTINCTIVE_MIN_CHARS: usize = 4;
    /// Maximum rare words reported
    pub const RARE_WORD_LIMIT: usize = 5;
    /// Minimum character length for a rare word
    pub const RARE_MIN_CHARS: usize = 6;
    /// Maximum occurrences for a word to count as rare
    pub const RARE_MAX_COUNT: usize = 2;

    /// Sentences under this token count are short
    pub const SHORT_SENTENCE_UNDER: usize = 10;
    /// Sentences over this token count are long
    pub const LONG_SENTENCE_OVER: usize = 20;
    /// Maximum starter phrases reported
    pub const STARTER_LIMIT: usize = 10;

    /// Paragraph lengths with a standard deviation below this are consistent
    pub const CONSISTENCY_STD_DEV: f64 = 1.5;
    /// Paragraphs with more sentences than this are long
    pub const LONG_PARAGRAPH_OVER: usize = 5;

    /// Maximum signature phrases reported
    pub const SIGNATURE_PHRASE_CAP: usize = 10;
    /// Top bigrams considered for signature phrases
    pub const BIGRAM_POOL: usize = 20;
    /// Top trigrams considered for signature phrases
    pub const TRIGRAM_POOL: usize = 10;
    /// Bucket share above which rhythm is predominantly short/long
    pub const RHYTHM_SKEW_SHARE: f64 = 0.6;
    /// "I think" occurrences above this trigger the qualifier quirk
    pub const I_THINK_OVER: usize = 2;
    /// Conjunction-led starter phrases at or above this trigger the quirk
    pub const CONJUNCTION_STARTERS_MIN: usize = 2;
    /// Em-dash count above this triggers the quirk
    pub const EM_DASH_OVER: usize = 3;
    /// Parenthetical count above this triggers the quirk
    pub const PARENTHETICAL_OVER: usize = 3;
    /// Sentences under this token count are fragments
    pub const FRAGMENT_UNDER: usize = 5;
    /// Fragment count above this triggers the quirk
    pub const FRAGMENTS_OVER: usize = 2;

    /// Number of excerpts to select
    pub const EXCERPT_COUNT: usize = 3;
    /// Excerpt bucket: sentences under this token count are short
    pub const EXCERPT_SHORT_UNDER: usize = 20;
    /// Excerpt bucket: sentences over this token count are long
    pub const EXCERPT_LONG_OVER: usize = 40;
}

/// Complete analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Vocabulary thresholds
    pub lexical: LexicalThresholds,
    /// Sentence bucketing and starter thresholds
    pub sentence: SentenceThresholds,
    /// Paragraph thresholds
    pub paragraph: ParagraphThresholds,
    /// Phrase, rhythm, and quirk thresholds
    pub patterns: PatternThresholds,
    /// Excerpt selection policy
    pub excerpts: ExcerptPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lexical: LexicalThresholds::default(),
            sentence: SentenceThresholds::default(),
            paragraph: ParagraphThresholds::default(),
            patterns: PatternThresholds::default(),
            excerpts: ExcerptPolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Validate threshold consistency
    pub fn validate(&self) -> Result<()> {
        if self.excerpts.count == 0 {
            return Err(AnalyzeError::InvalidConfig(
                "excerpt count must be at least 1".into(),
            ));
        }
        if self.sentence.short_under > self.sentence.long_over {
            return Err(AnalyzeError::InvalidConfig(
                "short sentence bound must not exceed long sentence bound".into(),
            ));
        }
        if self.excerpts.short_under > self.excerpts.long_over {
            return Err(AnalyzeError::InvalidConfig(
                "excerpt short bound must not exceed excerpt long bound".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.patterns.rhythm_skew_share) {
            return Err(AnalyzeError::InvalidConfig(
                "rhythm skew share must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Vocabulary thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalThresholds {
    /// Pool of most-frequent words considered for distinctive words
    pub distinctive_pool: usize,
    /// Maximum distinctive words reported
    pub distinctive_word_limit: usize,
    /// Minimum character length for a distinctive word
    pub distinctive_min_chars: usize,
    /// Maximum rare words reported
    pub rare_word_limit: usize,
    /// Minimum character length for a rare word
    pub rare_min_chars: usize,
    /// Maximum occurrences for a word to count as rare
    pub rare_max_count: usize,
}

impl Default for LexicalThresholds {
    fn default() -> Self {
        Self {
            distinctive_pool: defaults::DISTINCTIVE_POOL,
            distinctive_word_limit: defaults::DISTINCTIVE_WORD_LIMIT,
            distinctive_min_chars: defaults::DISTINCTIVE_MIN_CHARS,
            rare_word_limit: defaults::RARE_WORD_LIMIT,
            rare_min_chars: defaults::RARE_MIN_CHARS,
            rare_max_count: defaults::RARE_MAX_COUNT,
        }
    }
}

/// Sentence bucketing and starter thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceThresholds {
    /// Sentences under this token count are short
    pub short_under: usize,
    /// Sentences over this token count are long
    pub long_over: usize,
    /// Maximum starter phrases reported
    pub starter_limit: usize,
}

impl Default for SentenceThresholds {
    fn default() -> Self {
        Self {
            short_under: defaults::SHORT_SENTENCE_UNDER,
            long_over: defaults::LONG_SENTENCE_OVER,
            starter_limit: defaults::STARTER_LIMIT,
        }
    }
}

/// Paragraph thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphThresholds {
    /// Paragraph lengths with a standard deviation below this are consistent
    pub consistency_std_dev: f64,
    /// Paragraphs with more sentences than this are long
    pub long_paragraph_over: usize,
}

impl Default for ParagraphThresholds {
    fn default() -> Self {
        Self {
            consistency_std_dev: defaults::CONSISTENCY_STD_DEV,
            long_paragraph_over: defaults::LONG_PARAGRAPH_OVER,
        }
    }
}

/// Phrase, rhythm, and quirk thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternThresholds {
    /// Maximum signature phrases reported
    pub signature_phrase_cap: usize,
    /// Top bigrams considered for signature phrases
    pub bigram_pool: usize,
    /// Top trigrams considered for signature phrases
    pub trigram_pool: usize,
    /// Bucket share above which rhythm is predominantly short/long
    pub rhythm_skew_share: f64,
    /// "I think" occurrences above this trigger the qualifier quirk
    pub i_think_over: usize,
    /// Conjunction-led starter phrases at or above this trigger the quirk
    pub conjunction_starters_min: usize,
    /// Em-dash count above this triggers the quirk
    pub em_dash_over: usize,
    /// Parenthetical count above this triggers the quirk
    pub parenthetical_over: usize,
    /// Sentences under this token count are fragments
    pub fragment_under: usize,
    /// Fragment count above this triggers the quirk
    pub fragments_over: usize,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            signature_phrase_cap: defaults::SIGNATURE_PHRASE_CAP,
            bigram_pool: defaults::BIGRAM_POOL,
            trigram_pool: defaults::TRIGRAM_POOL,
            rhythm_skew_share: defaults::RHYTHM_SKEW_SHARE,
            i_think_over: defaults::I_THINK_OVER,
            conjunction_starters_min: defaults::CONJUNCTION_STARTERS_MIN,
            em_dash_over: defaults::EM_DASH_OVER,
            parenthetical_over: defaults::PARENTHETICAL_OVER,
            fragment_under: defaults::FRAGMENT_UNDER,
            fragments_over: defaults::FRAGMENTS_OVER,
        }
    }
}

/// Excerpt selection policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptPolicy {
    /// Number of excerpts to select
    pub count: usize,
    /// Sentences under this token count are short excerpt candidates
    pub short_under: usize,
    /// Sentences over this token count are long excerpt candidates
    pub long_over: usize,
}

impl Default for ExcerptPolicy {
    fn default() -> Self {
        Self {
            count: defaults::EXCERPT_COUNT,
            short_under: defaults::EXCERPT_SHORT_UNDER,
            long_over: defaults::EXCERPT_LONG_OVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_excerpt_count_rejected() {
        let mut config = AnalyzerConfig::default();
        config.excerpts.count = 0;
        assert!(matches!(
            config.validate(),
            Err(AnalyzeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inverted_sentence_bounds_rejected() {
        let mut config = AnalyzerConfig::default();
        config.sentence.short_under = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn skew_share_out_of_range_rejected() {
        let mut config = AnalyzerConfig::default();
        config.patterns.rhythm_skew_share = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = AnalyzerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"excerpts": {"count": 5}}"#).unwrap();
        assert_eq!(config.excerpts.count, 5);
        assert_eq!(config.excerpts.short_under, defaults::EXCERPT_SHORT_UNDER);
        assert_eq!(config.sentence.starter_limit, defaults::STARTER_LIMIT);
    }
}
