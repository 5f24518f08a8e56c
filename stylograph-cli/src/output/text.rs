//! Plain-text profile renderer

use super::ProfileRenderer;
use anyhow::Result;
use std::io::Write;
use stylograph_core::StyleProfile;

/// Text renderer - human-readable summary of the profile
pub struct TextRenderer;

impl ProfileRenderer for TextRenderer {
    fn render(&self, profile: &StyleProfile, writer: &mut dyn Write) -> Result<()> {
        let sentence = &profile.sentence_stats;
        let word = &profile.word_stats;
        let structure = &profile.structure_stats;

        writeln!(writer, "Style description")?;
        writeln!(writer, "  {}", profile.description)?;
        writeln!(writer)?;

        writeln!(writer, "Sentences")?;
        writeln!(
            writer,
            "  average length: {:.1} words (std dev {:.1}, range {}-{})",
            sentence.avg_length, sentence.std_dev, sentence.min_length, sentence.max_length
        )?;
        writeln!(
            writer,
            "  distribution: {:.0}% short / {:.0}% medium / {:.0}% long",
            sentence.length_distribution.short,
            sentence.length_distribution.medium,
            sentence.length_distribution.long
        )?;
        if let Some(starter) = sentence.common_starters.first() {
            writeln!(
                writer,
                "  most common starter: '{}' ({:.0}% of sentences)",
                starter.phrase, starter.percent
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "Vocabulary")?;
        writeln!(
            writer,
            "  {} distinct words, diversity {:.2}, average word length {:.1}",
            word.vocabulary_size, word.lexical_diversity, word.avg_length
        )?;
        if !word.distinctive_words.is_empty() {
            writeln!(
                writer,
                "  distinctive words: {}",
                word.distinctive_words.join(", ")
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "Structure")?;
        writeln!(
            writer,
            "  paragraphs average {:.1} sentences ({})",
            structure.avg_paragraph_sentences,
            structure.paragraph_patterns.length_consistency
        )?;
        writeln!(
            writer,
            "  punctuation density: {:.1} marks per 100 words, {} quotes",
            structure.punctuation_patterns.density,
            structure.punctuation_patterns.patterns.quote_style
        )?;
        if !structure.transition_phrases.is_empty() {
            writeln!(
                writer,
                "  transitions: {}",
                structure.transition_phrases.join(", ")
            )?;
        }
        writeln!(writer)?;

        let distinctive = &profile.distinctive_patterns;
        writeln!(writer, "Distinctive patterns")?;
        writeln!(writer, "  rhythm: {}", distinctive.rhythm_pattern)?;
        if !distinctive.signature_phrases.is_empty() {
            writeln!(
                writer,
                "  signature phrases: {}",
                distinctive.signature_phrases.join(", ")
            )?;
        }
        for quirk in &distinctive.quirks {
            writeln!(writer, "  quirk: {quirk}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "Excerpts")?;
        for excerpt in &profile.excerpts {
            writeln!(writer, "  > {excerpt}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "Mimicry instructions")?;
        for line in profile.mimicry_instructions.lines() {
            writeln!(writer, "  {line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
