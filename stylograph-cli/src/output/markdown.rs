//! Markdown profile renderer

use super::ProfileRenderer;
use anyhow::Result;
use std::io::Write;
use stylograph_core::StyleProfile;

/// Markdown renderer - emits a report with one section per profile part
pub struct MarkdownRenderer;

impl ProfileRenderer for MarkdownRenderer {
    fn render(&self, profile: &StyleProfile, writer: &mut dyn Write) -> Result<()> {
        let sentence = &profile.sentence_stats;
        let word = &profile.word_stats;
        let structure = &profile.structure_stats;
        let distinctive = &profile.distinctive_patterns;

        writeln!(writer, "# Style profile")?;
        writeln!(writer)?;
        writeln!(writer, "{}", profile.description)?;
        writeln!(writer)?;

        writeln!(writer, "## Sentences")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "- Average length: {:.1} words (std dev {:.1})",
            sentence.avg_length, sentence.std_dev
        )?;
        writeln!(
            writer,
            "- Distribution: {:.0}% short, {:.0}% medium, {:.0}% long",
            sentence.length_distribution.short,
            sentence.length_distribution.medium,
            sentence.length_distribution.long
        )?;
        writeln!(
            writer,
            "- Types: {:.0}% question, {:.0}% exclamation, {:.0}% complex, {:.0}% simple",
            sentence.sentence_types.question,
            sentence.sentence_types.exclamation,
            sentence.sentence_types.complex,
            sentence.sentence_types.simple
        )?;
        writeln!(writer)?;

        writeln!(writer, "## Vocabulary")?;
        writeln!(writer)?;
        writeln!(writer, "- Vocabulary size: {}", word.vocabulary_size)?;
        writeln!(writer, "- Lexical diversity: {:.2}", word.lexical_diversity)?;
        if !word.distinctive_words.is_empty() {
            writeln!(
                writer,
                "- Distinctive words: {}",
                word.distinctive_words.join(", ")
            )?;
        }
        if !word.rare_words.is_empty() {
            writeln!(writer, "- Rare words: {}", word.rare_words.join(", "))?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Structure")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "- Paragraphs: {:.1} sentences on average, {} lengths",
            structure.avg_paragraph_sentences, structure.paragraph_patterns.length_consistency
        )?;
        writeln!(
            writer,
            "- Punctuation: {:.1} marks per 100 words, {} quote style",
            structure.punctuation_patterns.density,
            structure.punctuation_patterns.patterns.quote_style
        )?;
        if !structure.transition_phrases.is_empty() {
            writeln!(
                writer,
                "- Transitions: {}",
                structure.transition_phrases.join(", ")
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Distinctive patterns")?;
        writeln!(writer)?;
        writeln!(writer, "- Rhythm: {}", distinctive.rhythm_pattern)?;
        if !distinctive.signature_phrases.is_empty() {
            writeln!(
                writer,
                "- Signature phrases: {}",
                distinctive.signature_phrases.join(", ")
            )?;
        }
        for quirk in &distinctive.quirks {
            writeln!(writer, "- Quirk: {quirk}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Excerpts")?;
        writeln!(writer)?;
        for excerpt in &profile.excerpts {
            writeln!(writer, "> {excerpt}")?;
            writeln!(writer)?;
        }

        writeln!(writer, "## Mimicry instructions")?;
        writeln!(writer)?;
        writeln!(writer, "{}", profile.mimicry_instructions)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylograph_core::StyleAnalyzer;

    #[test]
    fn report_has_markdown_sections() {
        let mut analyzer = StyleAnalyzer::new();
        analyzer.add_sample("One sentence here. Another follows it.");
        let profile = analyzer.analyze_seeded(1).unwrap();

        let mut buffer = Vec::new();
        MarkdownRenderer.render(&profile, &mut buffer).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();

        assert!(rendered.starts_with("# Style profile"));
        assert!(rendered.contains("## Sentences"));
        assert!(rendered.contains("## Excerpts"));
        assert!(rendered.contains("> One sentence here."));
    }
}
