//! Natural-language style description
//!
//! The opening sentence always names the sentence-length and vocabulary
//! character; the trailing clauses fire only when their predicate holds.

use super::{bands, quoted, ProfileFacts};

type Clause = fn(&ProfileFacts) -> Option<String>;

/// Trailing clauses in render order
const TRAILING_CLAUSES: &[Clause] = &[
    paragraph_clause,
    punctuation_clause,
    quirk_clause,
    rhythm_clause,
    transition_clause,
];

/// Render the style description
pub fn describe(facts: &ProfileFacts) -> String {
    let mut description = format!(
        "This writing style employs {} and {}. ",
        sentence_clause(facts),
        vocabulary_clause(facts)
    );
    for clause in TRAILING_CLAUSES {
        if let Some(text) = clause(facts) {
            description.push_str(&text);
        }
    }
    description.trim_end().to_string()
}

/// Sentence-length band plus an optional distribution suffix
fn sentence_clause(facts: &ProfileFacts) -> String {
    let stats = facts.sentence;
    let mut clause = if stats.avg_length < bands::VERY_SHORT_AVG {
        "very short, concise sentences"
    } else if stats.avg_length < bands::SHORT_AVG {
        "relatively short sentences"
    } else if stats.avg_length < bands::MEDIUM_AVG {
        "medium-length sentences"
    } else {
        "longer, more complex sentences"
    }
    .to_string();

    let dist = &stats.length_distribution;
    if dist.short > bands::SKEWED_SHARE {
        clause.push_str(" with a strong preference for brevity");
    } else if dist.long > bands::SKEWED_SHARE {
        clause.push_str(" with a tendency toward elaboration");
    } else if stats.std_dev > bands::NOTABLE_STD_DEV {
        clause.push_str(" with notable variation in length");
    }
    clause
}

/// Diversity band plus distinctive-term mentions
fn vocabulary_clause(facts: &ProfileFacts) -> String {
    let stats = facts.word;
    let mut clause = if stats.lexical_diversity < bands::LOW_DIVERSITY {
        "straightforward, repetitive vocabulary"
    } else if stats.lexical_diversity < bands::MODERATE_DIVERSITY {
        "moderate vocabulary range"
    } else if stats.lexical_diversity < bands::RICH_DIVERSITY {
        "varied, rich vocabulary"
    } else {
        "exceptionally diverse vocabulary"
    }
    .to_string();

    if let Some(first) = stats.distinctive_words.first() {
        clause.push_str(&format!(" with distinctive terms like '{first}'"));
        if let Some(second) = stats.distinctive_words.get(1) {
            clause.push_str(&format!(" and '{second}'"));
        }
    }
    clause
}

fn paragraph_clause(facts: &ProfileFacts) -> Option<String> {
    let patterns = &facts.structure.paragraph_patterns;
    if patterns.uses_one_sentence_paragraphs {
        Some("frequently uses single-sentence paragraphs for emphasis. ".to_string())
    } else if patterns.uses_long_paragraphs {
        Some("develops ideas in substantial paragraphs. ".to_string())
    } else {
        None
    }
}

fn punctuation_clause(facts: &ProfileFacts) -> Option<String> {
    let habits = &facts.structure.punctuation_patterns.patterns;
    let mut elements = Vec::new();
    if habits.semicolon_frequency > bands::NOTABLE_SEMICOLON_RATE {
        elements.push("frequent semicolons");
    }
    if habits.em_dash_usage > bands::NOTABLE_EM_DASH_COUNT {
        elements.push("em dashes");
    }
    if habits.exclamation_frequency > bands::NOTABLE_EXCLAMATION_RATE {
        elements.push("exclamations for emphasis");
    }
    if habits.parenthetical_usage > bands::NOTABLE_PARENTHETICAL_COUNT {
        elements.push("parentheticals");
    }
    if elements.is_empty() {
        None
    } else {
        Some(format!(
            "Uses {} as stylistic elements. ",
            elements.join(", ")
        ))
    }
}

fn quirk_clause(facts: &ProfileFacts) -> Option<String> {
    facts
        .distinctive
        .quirks
        .first()
        .map(|quirk| format!("Distinctively {quirk}. "))
}

fn rhythm_clause(facts: &ProfileFacts) -> Option<String> {
    let rhythm = facts.distinctive.rhythm_pattern;
    rhythm
        .is_informative()
        .then(|| format!("Shows a {rhythm} rhythm in sentence structure. "))
}

fn transition_clause(facts: &ProfileFacts) -> Option<String> {
    let transitions = &facts.structure.transition_phrases;
    if transitions.is_empty() {
        return None;
    }
    let listed = quoted(transitions.iter().take(2).map(String::as_str));
    Some(format!("Connects ideas using transitions like {listed}. "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::profile::*;
    use std::collections::BTreeMap;

    fn base_profile() -> (SentenceStats, WordStats, StructureStats, DistinctivePatterns) {
        let sentence = SentenceStats {
            avg_length: 12.0,
            std_dev: 3.0,
            min_length: 4,
            max_length: 22,
            length_distribution: LengthDistribution {
                short: 30.0,
                medium: 50.0,
                long: 20.0,
            },
            common_starters: Vec::new(),
            sentence_types: SentenceTypes {
                question: 0.0,
                exclamation: 0.0,
                complex: 40.0,
                simple: 60.0,
                quote_containing: 0.0,
            },
        };
        let word = WordStats {
            avg_length: 4.5,
            length_variance: 2.0,
            vocabulary_size: 120,
            lexical_diversity: 0.55,
            distinctive_words: vec!["harbor".into(), "tide".into()],
            rare_words: Vec::new(),
        };
        let structure = StructureStats {
            avg_paragraph_sentences: 3.0,
            paragraph_patterns: ParagraphPatterns {
                avg_sentences: 3.0,
                length_variation: 0.5,
                length_consistency: LengthConsistency::Consistent,
                uses_one_sentence_paragraphs: false,
                uses_long_paragraphs: false,
            },
            punctuation_patterns: PunctuationPatterns {
                counts: BTreeMap::new(),
                density: 10.0,
                patterns: PunctuationHabits {
                    em_dash_usage: 0,
                    ellipsis_usage: 0,
                    semicolon_frequency: 0.0,
                    exclamation_frequency: 0.0,
                    parenthetical_usage: 0,
                    quote_style: QuoteStyle::Single,
                },
            },
            transition_phrases: Vec::new(),
        };
        let distinctive = DistinctivePatterns {
            signature_phrases: Vec::new(),
            quirks: Vec::new(),
            rhythm_pattern: RhythmPattern::Mixed,
        };
        (sentence, word, structure, distinctive)
    }

    #[test]
    fn opening_names_length_and_vocabulary() {
        let (sentence, word, structure, distinctive) = base_profile();
        let facts = ProfileFacts {
            sentence: &sentence,
            word: &word,
            structure: &structure,
            distinctive: &distinctive,
        };
        let text = describe(&facts);
        assert!(text.starts_with("This writing style employs relatively short sentences"));
        assert!(text.contains("varied, rich vocabulary"));
        assert!(text.contains("with distinctive terms like 'harbor' and 'tide'"));
    }

    #[test]
    fn brevity_suffix_when_short_skewed() {
        let (mut sentence, ..) = base_profile();
        sentence.avg_length = 7.0;
        sentence.length_distribution.short = 75.0;
        let facts_clause = sentence_clause(&ProfileFacts {
            sentence: &sentence,
            word: &base_profile().1,
            structure: &base_profile().2,
            distinctive: &base_profile().3,
        });
        assert_eq!(
            facts_clause,
            "very short, concise sentences with a strong preference for brevity"
        );
    }

    #[test]
    fn punctuation_clause_lists_elements() {
        let (sentence, word, mut structure, distinctive) = base_profile();
        structure.punctuation_patterns.patterns.em_dash_usage = 6;
        structure.punctuation_patterns.patterns.semicolon_frequency = 4.0;
        let facts = ProfileFacts {
            sentence: &sentence,
            word: &word,
            structure: &structure,
            distinctive: &distinctive,
        };
        assert_eq!(
            punctuation_clause(&facts),
            Some("Uses frequent semicolons, em dashes as stylistic elements. ".to_string())
        );
    }

    #[test]
    fn silent_clauses_stay_silent() {
        let (sentence, word, structure, distinctive) = base_profile();
        let facts = ProfileFacts {
            sentence: &sentence,
            word: &word,
            structure: &structure,
            distinctive: &distinctive,
        };
        assert_eq!(paragraph_clause(&facts), None);
        assert_eq!(punctuation_clause(&facts), None);
        assert_eq!(quirk_clause(&facts), None);
        assert_eq!(rhythm_clause(&facts), None);
        assert_eq!(transition_clause(&facts), None);
    }

    #[test]
    fn rhythm_clause_skips_mixed_and_insufficient() {
        let (sentence, word, structure, mut distinctive) = base_profile();
        distinctive.rhythm_pattern = RhythmPattern::Alternating;
        let facts = ProfileFacts {
            sentence: &sentence,
            word: &word,
            structure: &structure,
            distinctive: &distinctive,
        };
        assert_eq!(
            rhythm_clause(&facts),
            Some("Shows a alternating rhythm in sentence structure. ".to_string())
        );
    }

    #[test]
    fn quirk_clause_uses_first_quirk() {
        let (sentence, word, structure, mut distinctive) = base_profile();
        distinctive.quirks = vec!["heavy use of em dashes".into(), "other".into()];
        let facts = ProfileFacts {
            sentence: &sentence,
            word: &word,
            structure: &structure,
            distinctive: &distinctive,
        };
        assert_eq!(
            quirk_clause(&facts),
            Some("Distinctively heavy use of em dashes. ".to_string())
        );
    }
}
