//! Mimicry instruction synthesis
//!
//! One bullet per applicable rule, rendered in a fixed order, closed by an
//! advisory caveat. The rules read only already-computed profile fields.

use super::{bands, quoted, ProfileFacts};

/// Fixed caveat appended after the bullets
pub const ADVISORY_CAVEAT: &str = "The above instructions are good to have, but not mandatory. \
     You can ignore some of them if they don't make sense for the content you are generating.";

type Rule = fn(&ProfileFacts) -> Option<String>;

/// Instruction rules in render order
const RULES: &[Rule] = &[
    average_length_rule,
    length_distribution_rule,
    starter_rule,
    diversity_rule,
    distinctive_words_rule,
    paragraph_length_rule,
    one_sentence_paragraph_rule,
    semicolon_rule,
    em_dash_rule,
    parenthetical_rule,
    quirk_rule,
    rhythm_rule,
    signature_phrase_rule,
    transition_rule,
];

/// Render the mimicry instructions
pub fn mimicry_instructions(facts: &ProfileFacts) -> String {
    let bullets: Vec<String> = RULES
        .iter()
        .filter_map(|rule| rule(facts))
        .map(|instruction| format!("- {instruction}"))
        .collect();
    format!("{}\n{}", bullets.join("\n"), ADVISORY_CAVEAT)
}

fn average_length_rule(facts: &ProfileFacts) -> Option<String> {
    Some(format!(
        "Maintain an average sentence length of {:.1} words",
        facts.sentence.avg_length
    ))
}

fn length_distribution_rule(facts: &ProfileFacts) -> Option<String> {
    let dist = &facts.sentence.length_distribution;
    Some(format!(
        "Use approximately {:.0}% short sentences, {:.0}% medium sentences, and {:.0}% long sentences",
        dist.short, dist.medium, dist.long
    ))
}

fn starter_rule(facts: &ProfileFacts) -> Option<String> {
    let starters = &facts.sentence.common_starters;
    if starters.is_empty() {
        return None;
    }
    let listed = quoted(starters.iter().take(2).map(|s| s.phrase.as_str()));
    Some(format!("Occasionally begin sentences with {listed}"))
}

fn diversity_rule(facts: &ProfileFacts) -> Option<String> {
    Some(format!(
        "Aim for a vocabulary diversity of {:.2}",
        facts.word.lexical_diversity
    ))
}

fn distinctive_words_rule(facts: &ProfileFacts) -> Option<String> {
    let words = &facts.word.distinctive_words;
    if words.is_empty() {
        return None;
    }
    let listed = quoted(words.iter().take(3).map(String::as_str));
    Some(format!(
        "Incorporate distinctive terms like {listed} where appropriate"
    ))
}

fn paragraph_length_rule(facts: &ProfileFacts) -> Option<String> {
    Some(format!(
        "Write paragraphs with about {:.1} sentences on average",
        facts.structure.paragraph_patterns.avg_sentences
    ))
}

fn one_sentence_paragraph_rule(facts: &ProfileFacts) -> Option<String> {
    facts
        .structure
        .paragraph_patterns
        .uses_one_sentence_paragraphs
        .then(|| "Occasionally use single-sentence paragraphs for emphasis".to_string())
}

fn semicolon_rule(facts: &ProfileFacts) -> Option<String> {
    let habits = &facts.structure.punctuation_patterns.patterns;
    (habits.semicolon_frequency > bands::NOTABLE_SEMICOLON_RATE)
        .then(|| "Use semicolons to join related independent clauses".to_string())
}

fn em_dash_rule(facts: &ProfileFacts) -> Option<String> {
    let habits = &facts.structure.punctuation_patterns.patterns;
    (habits.em_dash_usage > bands::NOTABLE_EM_DASH_COUNT)
        .then(|| "Incorporate em dashes for abrupt breaks or emphasis".to_string())
}

fn parenthetical_rule(facts: &ProfileFacts) -> Option<String> {
    let habits = &facts.structure.punctuation_patterns.patterns;
    (habits.parenthetical_usage > bands::NOTABLE_PARENTHETICAL_COUNT)
        .then(|| "Use parenthetical asides to add supplementary information".to_string())
}

fn quirk_rule(facts: &ProfileFacts) -> Option<String> {
    let quirks = &facts.distinctive.quirks;
    if quirks.is_empty() {
        return None;
    }
    let listed = quirks
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");
    Some(format!("Embrace stylistic quirks: {listed}"))
}

fn rhythm_rule(facts: &ProfileFacts) -> Option<String> {
    let rhythm = facts.distinctive.rhythm_pattern;
    rhythm
        .is_informative()
        .then(|| format!("Follow a {rhythm} rhythm in sentence structure"))
}

fn signature_phrase_rule(facts: &ProfileFacts) -> Option<String> {
    let phrases = &facts.distinctive.signature_phrases;
    if phrases.is_empty() {
        return None;
    }
    let listed = quoted(phrases.iter().take(2).map(String::as_str));
    Some(format!(
        "Occasionally use characteristic phrases like {listed}"
    ))
}

fn transition_rule(facts: &ProfileFacts) -> Option<String> {
    let transitions = &facts.structure.transition_phrases;
    if transitions.is_empty() {
        return None;
    }
    let listed = quoted(transitions.iter().take(3).map(String::as_str));
    Some(format!("Connect ideas using transitions like {listed}"))
}
