//! Lexical analysis
//!
//! Word-length statistics, vocabulary measures, distinctive and rare word
//! ranking, and n-gram frequency tables over the alphabetic token stream.

use crate::api::config::LexicalThresholds;
use crate::api::profile::WordStats;
use crate::domain::stats;
use crate::domain::tables;
use crate::domain::tokenizer;

/// Output of the lexical pass
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalSummary {
    /// Word-level statistics for the profile
    pub stats: WordStats,
}

/// Analyze the word token stream
pub fn analyze(words: &[String], thresholds: &LexicalThresholds) -> LexicalSummary {
    let word_lengths: Vec<f64> = words
        .iter()
        .filter(|w| tokenizer::is_alphabetic(w))
        .map(|w| w.chars().count() as f64)
        .collect();

    let words_lower = tokenizer::lowercase_alphabetic(words);
    let total = words_lower.len();
    let frequencies = stats::occurrence_counts(words_lower);
    let vocabulary_size = frequencies.len();
    let lexical_diversity = if total > 0 {
        vocabulary_size as f64 / total as f64
    } else {
        0.0
    };

    let ranked = stats::rank_by_count(frequencies.clone());
    let distinctive_words = distinctive_words(&ranked, thresholds);
    let rare_words = rare_words(frequencies, thresholds);

    LexicalSummary {
        stats: WordStats {
            avg_length: stats::mean(&word_lengths),
            length_variance: stats::variance(&word_lengths),
            vocabulary_size,
            lexical_diversity,
            distinctive_words,
            rare_words,
        },
    }
}

/// Frequent words characteristic of the author: drawn from the top of the
/// frequency ranking, excluding stop words and short tokens
fn distinctive_words(ranked: &[(String, usize)], thresholds: &LexicalThresholds) -> Vec<String> {
    ranked
        .iter()
        .take(thresholds.distinctive_pool)
        .filter(|(word, _)| {
            !tables::is_stop_word(word) && word.chars().count() >= thresholds.distinctive_min_chars
        })
        .take(thresholds.distinctive_word_limit)
        .map(|(word, _)| word.clone())
        .collect()
}

/// Long words used only once or twice, longest first; first-encounter order
/// breaks length ties
fn rare_words(frequencies: Vec<(String, usize)>, thresholds: &LexicalThresholds) -> Vec<String> {
    let mut candidates: Vec<(String, usize)> = frequencies
        .into_iter()
        .filter(|(word, count)| {
            (1..=thresholds.rare_max_count).contains(count)
                && word.chars().count() >= thresholds.rare_min_chars
        })
        .collect();
    candidates.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    candidates
        .into_iter()
        .take(thresholds.rare_word_limit)
        .map(|(word, _)| word)
        .collect()
}

/// N-gram occurrence table over a token sequence, ranked by descending count
///
/// Slides a window of `n` tokens with step 1 and joins each window with
/// single spaces.
pub fn ngram_counts(tokens: &[String], n: usize) -> Vec<(String, usize)> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    let grams = tokens.windows(n).map(|window| window.join(" "));
    stats::rank_by_count(stats::occurrence_counts(grams))
}
