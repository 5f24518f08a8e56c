//! Structural analysis
//!
//! Sentence-length distribution, sentence-type classification, starter
//! phrases, paragraph habits, and punctuation usage.

use std::collections::BTreeMap;

use crate::api::config::{ParagraphThresholds, SentenceThresholds};
use crate::api::profile::{
    LengthConsistency, LengthDistribution, ParagraphPatterns, PunctuationHabits,
    PunctuationPatterns, QuoteStyle, SentenceStats, SentenceTypes, StarterUsage,
};
use crate::domain::stats;
use crate::domain::tokenizer;

/// Punctuation marks tracked by the raw counts table
pub const PUNCTUATION_MARKS: &[char] = &['.', ',', ';', ':', '!', '?', '-', '(', ')', '"', '\''];

/// Output of the structural pass
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralSummary {
    /// Word-token count per sentence, in document order
    pub sentence_lengths: Vec<usize>,
    /// Sentence statistics for the profile
    pub sentence_stats: SentenceStats,
    /// Mean sentences per paragraph
    pub avg_paragraph_sentences: f64,
    /// Paragraph habits for the profile
    pub paragraph_patterns: ParagraphPatterns,
    /// Punctuation usage for the profile
    pub punctuation_patterns: PunctuationPatterns,
}

/// Analyze sentence, paragraph, and punctuation structure
pub fn analyze(
    text: &str,
    tokens: &tokenizer::TokenizedText,
    sentence_cfg: &SentenceThresholds,
    paragraph_cfg: &ParagraphThresholds,
) -> StructuralSummary {
    let lengths = sentence_lengths(&tokens.sentences);
    let lengths_f64 = stats::to_f64(&lengths);

    let sentence_stats = SentenceStats {
        avg_length: stats::mean(&lengths_f64),
        std_dev: stats::std_dev(&lengths_f64),
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        length_distribution: length_distribution(&lengths, sentence_cfg),
        common_starters: common_starters(&tokens.sentences, sentence_cfg.starter_limit),
        sentence_types: sentence_types(&tokens.sentences),
    };

    let paragraph_lengths: Vec<usize> = tokens
        .paragraphs
        .iter()
        .map(|p| tokenizer::split_sentences(p).len())
        .collect();
    let paragraph_patterns = paragraph_patterns(&paragraph_lengths, paragraph_cfg);

    StructuralSummary {
        sentence_lengths: lengths,
        sentence_stats,
        avg_paragraph_sentences: paragraph_patterns.avg_sentences,
        paragraph_patterns,
        punctuation_patterns: punctuation_patterns(text, &tokens.words),
    }
}

/// Word-token count per sentence
pub fn sentence_lengths(sentences: &[String]) -> Vec<usize> {
    sentences
        .iter()
        .map(|s| tokenizer::split_words(s).len())
        .collect()
}

/// Share of short/medium/long sentences, in percent
pub fn length_distribution(lengths: &[usize], cfg: &SentenceThresholds) -> LengthDistribution {
    if lengths.is_empty() {
        return LengthDistribution {
            short: 0.0,
            medium: 0.0,
            long: 0.0,
        };
    }
    let total = lengths.len() as f64;
    let short = lengths.iter().filter(|&&l| l < cfg.short_under).count() as f64;
    let long = lengths.iter().filter(|&&l| l > cfg.long_over).count() as f64;
    let medium = total - short - long;
    LengthDistribution {
        short: short / total * 100.0,
        medium: medium / total * 100.0,
        long: long / total * 100.0,
    }
}

/// Lowercased one- or two-word opening phrase of a sentence
pub fn starter_phrase(sentence: &str) -> Option<String> {
    let words = tokenizer::split_words(sentence);
    match words.len() {
        0 => None,
        1 => Some(words[0].to_lowercase()),
        _ => Some(format!("{} {}", words[0], words[1]).to_lowercase()),
    }
}

/// Most frequent starter phrases with their share of sentences
pub fn common_starters(sentences: &[String], limit: usize) -> Vec<StarterUsage> {
    let starters: Vec<String> = sentences.iter().filter_map(|s| starter_phrase(s)).collect();
    if starters.is_empty() {
        return Vec::new();
    }
    let total = starters.len() as f64;
    stats::rank_by_count(stats::occurrence_counts(starters))
        .into_iter()
        .take(limit)
        .map(|(phrase, count)| StarterUsage {
            phrase,
            percent: count as f64 / total * 100.0,
        })
        .collect()
}

/// Classify sentences into mutually exclusive types, plus the additive
/// quote-containing tag; all shares in percent
pub fn sentence_types(sentences: &[String]) -> SentenceTypes {
    let mut question = 0usize;
    let mut exclamation = 0usize;
    let mut complex = 0usize;
    let mut simple = 0usize;
    let mut quote_containing = 0usize;

    for sentence in sentences {
        let lower = sentence.to_lowercase();
        if sentence.contains('?') {
            question += 1;
        } else if sentence.contains('!') {
            exclamation += 1;
        } else if sentence.contains(';') || lower.contains(", and") || lower.contains(", but") {
            complex += 1;
        } else {
            simple += 1;
        }

        if sentence.contains('"') || sentence.contains('\'') {
            quote_containing += 1;
        }
    }

    let percent = |count: usize| {
        if sentences.is_empty() {
            0.0
        } else {
            count as f64 / sentences.len() as f64 * 100.0
        }
    };

    SentenceTypes {
        question: percent(question),
        exclamation: percent(exclamation),
        complex: percent(complex),
        simple: percent(simple),
        quote_containing: percent(quote_containing),
    }
}

/// Paragraph length habits from per-paragraph sentence counts
pub fn paragraph_patterns(lengths: &[usize], cfg: &ParagraphThresholds) -> ParagraphPatterns {
    let lengths_f64 = stats::to_f64(lengths);
    let variation = stats::std_dev(&lengths_f64);
    ParagraphPatterns {
        avg_sentences: stats::mean(&lengths_f64),
        length_variation: variation,
        length_consistency: if variation < cfg.consistency_std_dev {
            LengthConsistency::Consistent
        } else {
            LengthConsistency::Varied
        },
        uses_one_sentence_paragraphs: lengths.contains(&1),
        uses_long_paragraphs: lengths.iter().any(|&l| l > cfg.long_paragraph_over),
    }
}

/// Punctuation usage over the combined text
pub fn punctuation_patterns(text: &str, words: &[String]) -> PunctuationPatterns {
    let mut counts: BTreeMap<String, usize> = PUNCTUATION_MARKS
        .iter()
        .map(|&mark| (mark.to_string(), 0))
        .collect();
    for c in text.chars() {
        if let Some(count) = counts.get_mut(&c.to_string()) {
            *count += 1;
        }
    }

    let word_count = words.iter().filter(|w| tokenizer::is_alphabetic(w)).count();
    let total_marks: usize = counts.values().sum();
    let per_hundred = |marks: usize| {
        if word_count == 0 {
            0.0
        } else {
            marks as f64 / (word_count as f64 / 100.0)
        }
    };
    let per_thousand = |marks: usize| {
        if word_count == 0 {
            0.0
        } else {
            marks as f64 / (word_count as f64 / 1000.0)
        }
    };

    let count_of = |mark: &str| counts.get(mark).copied().unwrap_or(0);
    let patterns = PunctuationHabits {
        em_dash_usage: text.matches('—').count() + text.matches("--").count(),
        ellipsis_usage: text.matches("...").count(),
        semicolon_frequency: per_thousand(count_of(";")),
        exclamation_frequency: per_thousand(count_of("!")),
        parenthetical_usage: count_of("(").min(count_of(")")),
        quote_style: if count_of("\"") > count_of("'") {
            QuoteStyle::Double
        } else {
            QuoteStyle::Single
        },
    };

    PunctuationPatterns {
        counts,
        density: per_hundred(total_marks),
        patterns,
    }
}
