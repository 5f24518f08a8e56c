//! Fixed word and phrase tables
//!
//! Small curated lists the heuristics depend on. Order matters where noted:
//! transition detection reports results in vocabulary order to keep the
//! profile deterministic.

/// Stop words excluded from distinctive-word ranking
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "but", "or", "in", "on", "at", "to", "of", "for", "with", "by",
    "about", "like", "as", "from", "that", "this", "it", "is", "are", "was", "were", "be", "been",
    "being",
];

/// Connector vocabulary scanned by transition detection, in report order
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "nevertheless",
    "consequently",
    "alternatively",
    "meanwhile",
    "subsequently",
    "conversely",
    "indeed",
    "similarly",
    "likewise",
    "in contrast",
    "for instance",
    "specifically",
    "notably",
    "primarily",
    "certainly",
    "undoubtedly",
];

/// Generic bigrams excluded from signature phrases
pub const GENERIC_BIGRAMS: &[&str] = &["of the", "in the", "to the", "on the", "and the"];

/// Generic trigrams excluded from signature phrases
pub const GENERIC_TRIGRAMS: &[&str] = &["one of the", "out of the", "as well as", "in order to"];

/// Abbreviations whose trailing period does not end a sentence
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "gen",
    "rep", "sen", "approx",
];

/// Whether a lowercased word is a known abbreviation
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(&word)
}

/// Whether a lowercased word is a stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_lowercase() {
        assert!(STOP_WORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn abbreviation_lookup() {
        assert!(is_abbreviation("dr"));
        assert!(is_abbreviation("etc"));
        assert!(!is_abbreviation("word"));
    }

    #[test]
    fn transition_vocabulary_has_twenty_entries() {
        assert_eq!(TRANSITION_WORDS.len(), 20);
    }
}
