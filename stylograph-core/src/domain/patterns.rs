//! Distinctive pattern detection
//!
//! Signature phrases from n-gram tables, transition-word detection, rhythm
//! classification of the sentence-length sequence, and quirk heuristics.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::config::{PatternThresholds, SentenceThresholds};
use crate::api::profile::RhythmPattern;
use crate::domain::tables;
use crate::domain::tokenizer::{self, TokenizedText};
use crate::domain::{lexical, structural};

static ALL_CAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("static pattern compiles"));

/// Output of the pattern pass
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSummary {
    /// Recurring multi-word phrases, generic connectors excluded
    pub signature_phrases: Vec<String>,
    /// Connector words found, in vocabulary order
    pub transition_phrases: Vec<String>,
    /// Shape of the sentence-length sequence
    pub rhythm_pattern: RhythmPattern,
    /// Detected stylistic habits
    pub quirks: Vec<String>,
}

/// Detect distinctive patterns over the tokenized text
pub fn detect(
    text: &str,
    tokens: &TokenizedText,
    thresholds: &PatternThresholds,
    sentence_cfg: &SentenceThresholds,
) -> PatternSummary {
    let words_lower = tokenizer::lowercase_alphabetic(&tokens.words);
    let bigrams = lexical::ngram_counts(&words_lower, 2);
    let trigrams = lexical::ngram_counts(&words_lower, 3);
    let lengths = structural::sentence_lengths(&tokens.sentences);

    PatternSummary {
        signature_phrases: signature_phrases(&bigrams, &trigrams, thresholds),
        transition_phrases: transition_phrases(text, &tokens.sentences),
        rhythm_pattern: classify_rhythm(&lengths, thresholds, sentence_cfg),
        quirks: identify_quirks(text, tokens, &lengths, thresholds, sentence_cfg),
    }
}

/// Recurring bigrams and trigrams, generic connectors excluded, bigrams
/// first, capped at the configured total
pub fn signature_phrases(
    bigrams: &[(String, usize)],
    trigrams: &[(String, usize)],
    thresholds: &PatternThresholds,
) -> Vec<String> {
    let mut phrases = Vec::new();

    for (phrase, count) in bigrams.iter().take(thresholds.bigram_pool) {
        if *count > 1 && !tables::GENERIC_BIGRAMS.contains(&phrase.as_str()) {
            phrases.push(phrase.clone());
        }
    }
    for (phrase, count) in trigrams.iter().take(thresholds.trigram_pool) {
        if *count > 1 && !tables::GENERIC_TRIGRAMS.contains(&phrase.as_str()) {
            phrases.push(phrase.clone());
        }
    }

    phrases.truncate(thresholds.signature_phrase_cap);
    phrases
}

/// Connector words that open a sentence or follow a comma anywhere
///
/// Reported in vocabulary order so repeated runs produce identical
/// profiles.
pub fn transition_phrases(text: &str, sentences: &[String]) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let openers: Vec<String> = sentences
        .iter()
        .filter_map(|s| {
            tokenizer::split_words(s)
                .first()
                .map(|w| w.to_lowercase())
        })
        .collect();

    tables::TRANSITION_WORDS
        .iter()
        .filter(|&&word| {
            openers.iter().any(|o| o == word) || text_lower.contains(&format!(", {word}"))
        })
        .map(|&word| word.to_string())
        .collect()
}

/// Classify the shape of the sentence-length sequence
pub fn classify_rhythm(
    lengths: &[usize],
    thresholds: &PatternThresholds,
    sentence_cfg: &SentenceThresholds,
) -> RhythmPattern {
    if lengths.len() < 3 {
        return RhythmPattern::InsufficientData;
    }

    let diffs: Vec<i64> = lengths
        .windows(2)
        .map(|pair| pair[1] as i64 - pair[0] as i64)
        .collect();

    let alternating = diffs
        .windows(2)
        .all(|pair| (pair[0] > 0 && pair[1] < 0) || (pair[0] < 0 && pair[1] > 0));
    if alternating {
        return RhythmPattern::Alternating;
    }
    if diffs.iter().all(|&d| d > 0) {
        return RhythmPattern::Ascending;
    }
    if diffs.iter().all(|&d| d < 0) {
        return RhythmPattern::Descending;
    }

    let total = lengths.len() as f64;
    let short_share =
        lengths.iter().filter(|&&l| l < sentence_cfg.short_under).count() as f64 / total;
    let long_share =
        lengths.iter().filter(|&&l| l > sentence_cfg.long_over).count() as f64 / total;
    if short_share > thresholds.rhythm_skew_share {
        RhythmPattern::PredominantlyShort
    } else if long_share > thresholds.rhythm_skew_share {
        RhythmPattern::PredominantlyLong
    } else {
        RhythmPattern::Mixed
    }
}

/// Heuristic quirk detection; each trigger contributes its description
pub fn identify_quirks(
    text: &str,
    tokens: &TokenizedText,
    sentence_lengths: &[usize],
    thresholds: &PatternThresholds,
    sentence_cfg: &SentenceThresholds,
) -> Vec<String> {
    let mut quirks = Vec::new();

    if text.matches("I think").count() > thresholds.i_think_over {
        quirks.push("frequently uses 'I think' to qualify statements".to_string());
    }

    let starters = structural::common_starters(&tokens.sentences, sentence_cfg.starter_limit);
    let conjunction_starters = starters
        .iter()
        .filter(|s| s.phrase.starts_with("and") || s.phrase.starts_with("but"))
        .count();
    if conjunction_starters >= thresholds.conjunction_starters_min {
        quirks.push("starts sentences with conjunctions (and, but)".to_string());
    }

    let em_dashes = text.matches('—').count() + text.matches("--").count();
    if em_dashes > thresholds.em_dash_over {
        quirks.push("heavy use of em dashes".to_string());
    }

    let parentheticals = text
        .matches('(')
        .count()
        .min(text.matches(')').count());
    if parentheticals > thresholds.parenthetical_over {
        quirks.push("frequently uses parentheticals".to_string());
    }

    if has_proximate_repetition(&tokens.words) {
        quirks.push("tends to repeat key words within close proximity".to_string());
    }

    let fragments = sentence_lengths
        .iter()
        .filter(|&&l| l < thresholds.fragment_under)
        .count();
    if fragments > thresholds.fragments_over {
        quirks.push("uses sentence fragments for emphasis".to_string());
    }

    if ALL_CAPS.is_match(text) {
        quirks.push("uses ALL CAPS for emphasis".to_string());
    }

    quirks
}

/// A word recurring with a gap of one to four words between occurrences
fn has_proximate_repetition(words: &[String]) -> bool {
    let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    lower.iter().enumerate().any(|(i, word)| {
        lower
            .iter()
            .skip(i + 2)
            .take(4)
            .any(|candidate| candidate == word)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::AnalyzerConfig;

    fn cfg() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    fn detect_in(text: &str) -> PatternSummary {
        let config = cfg();
        let tokens = tokenizer::tokenize(text);
        detect(text, &tokens, &config.patterns, &config.sentence)
    }

    #[test]
    fn rhythm_needs_three_sentences() {
        let config = cfg();
        assert_eq!(
            classify_rhythm(&[5, 10], &config.patterns, &config.sentence),
            RhythmPattern::InsufficientData
        );
    }

    #[test]
    fn rhythm_alternating() {
        let config = cfg();
        assert_eq!(
            classify_rhythm(&[5, 15, 5, 15], &config.patterns, &config.sentence),
            RhythmPattern::Alternating
        );
    }

    #[test]
    fn rhythm_ascending_and_descending() {
        let config = cfg();
        assert_eq!(
            classify_rhythm(&[5, 10, 15, 20], &config.patterns, &config.sentence),
            RhythmPattern::Ascending
        );
        assert_eq!(
            classify_rhythm(&[20, 15, 10, 5], &config.patterns, &config.sentence),
            RhythmPattern::Descending
        );
    }

    #[test]
    fn rhythm_skew_and_mixed() {
        let config = cfg();
        assert_eq!(
            classify_rhythm(&[3, 4, 3, 3, 25], &config.patterns, &config.sentence),
            RhythmPattern::PredominantlyShort
        );
        assert_eq!(
            classify_rhythm(&[25, 30, 22, 40, 3], &config.patterns, &config.sentence),
            RhythmPattern::PredominantlyLong
        );
        assert_eq!(
            classify_rhythm(&[5, 15, 25, 15, 5, 15], &config.patterns, &config.sentence),
            RhythmPattern::Mixed
        );
    }

    #[test]
    fn rhythm_plateau_is_not_alternating() {
        let config = cfg();
        // A zero difference breaks both the alternating and monotonic shapes.
        assert_eq!(
            classify_rhythm(&[5, 5, 5], &config.patterns, &config.sentence),
            RhythmPattern::PredominantlyShort
        );
    }

    #[test]
    fn signature_phrases_exclude_generic_connectors() {
        let bigrams = vec![
            ("of the".to_string(), 6),
            ("quiet harbor".to_string(), 3),
            ("once only".to_string(), 1),
        ];
        let trigrams = vec![
            ("one of the".to_string(), 4),
            ("down the coast".to_string(), 2),
        ];
        let config = cfg();
        let phrases = signature_phrases(&bigrams, &trigrams, &config.patterns);
        assert_eq!(phrases, vec!["quiet harbor", "down the coast"]);
    }

    #[test]
    fn transition_found_at_sentence_start() {
        let summary = detect_in("However, it rained. We stayed inside.");
        assert_eq!(summary.transition_phrases, vec!["however"]);
    }

    #[test]
    fn transition_found_after_comma() {
        let summary = detect_in("We left early, therefore we missed it. It was fine.");
        assert_eq!(summary.transition_phrases, vec!["therefore"]);
    }

    #[test]
    fn transitions_report_in_vocabulary_order() {
        let summary =
            detect_in("Therefore we went. However, we doubted. Indeed, it mattered little.");
        assert_eq!(
            summary.transition_phrases,
            vec!["however", "therefore", "indeed"]
        );
    }

    #[test]
    fn quirk_i_think() {
        let text = "I think it works. I think it helps. I think it matters. Clearly so.";
        let summary = detect_in(text);
        assert!(summary
            .quirks
            .contains(&"frequently uses 'I think' to qualify statements".to_string()));
    }

    #[test]
    fn quirk_conjunction_starters() {
        let text = "And it began. But nobody came. And so it went. The end arrived quietly.";
        let summary = detect_in(text);
        assert!(summary
            .quirks
            .contains(&"starts sentences with conjunctions (and, but)".to_string()));
    }

    #[test]
    fn quirk_all_caps() {
        let summary = detect_in("This is VERY important to remember now.");
        assert!(summary
            .quirks
            .contains(&"uses ALL CAPS for emphasis".to_string()));
    }

    #[test]
    fn no_all_caps_quirk_for_single_letters() {
        let summary = detect_in("I went home. A dog followed me there.");
        assert!(!summary
            .quirks
            .contains(&"uses ALL CAPS for emphasis".to_string()));
    }

    #[test]
    fn proximate_repetition_detected() {
        let words: Vec<String> = ["the", "tide", "rose", "and", "the", "tide"]
            .map(String::from)
            .to_vec();
        assert!(has_proximate_repetition(&words));

        let spread: Vec<String> = ["tide", "a", "b", "c", "d", "e", "f", "tide"]
            .map(String::from)
            .to_vec();
        assert!(!has_proximate_repetition(&spread));
    }

    #[test]
    fn quirk_fragments() {
        let text = "Short. Very short. Tiny. A longer sentence follows these fragments here.";
        let summary = detect_in(text);
        assert!(summary
            .quirks
            .contains(&"uses sentence fragments for emphasis".to_string()));
    }
}
