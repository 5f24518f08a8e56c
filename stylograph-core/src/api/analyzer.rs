//! Style analyzer entry point
//!
//! Accumulates writing samples and produces a [`StyleProfile`]. One
//! analyzer per logical analysis request; the accumulator is an explicit
//! value, never ambient state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::config::AnalyzerConfig;
use crate::api::profile::{DistinctivePatterns, StructureStats, StyleProfile};
use crate::compose::{self, ProfileFacts};
use crate::domain::{excerpts, lexical, patterns, structural, tokenizer};
use crate::error::{AnalyzeError, Result};

/// Accumulates writing samples and derives a style profile
///
/// All computations are deterministic functions of the accumulated samples
/// except the excerpt draw; use [`StyleAnalyzer::analyze_seeded`] or
/// [`StyleAnalyzer::analyze_with_rng`] when reproducibility matters.
#[derive(Debug, Clone, Default)]
pub struct StyleAnalyzer {
    samples: Vec<String>,
    config: AnalyzerConfig,
}

impl StyleAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            samples: Vec::new(),
            config,
        })
    }

    /// Create an analyzer holding a full sequence of samples up front
    pub fn from_samples<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            samples: samples.into_iter().map(Into::into).collect(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Add one writing sample
    pub fn add_sample(&mut self, text: impl Into<String>) {
        self.samples.push(text.into());
    }

    /// Add several writing samples in order
    pub fn extend_samples<I, S>(&mut self, samples: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.samples.extend(samples.into_iter().map(Into::into));
    }

    /// Remove all accumulated samples
    pub fn clear_samples(&mut self) {
        self.samples.clear();
    }

    /// Number of accumulated samples
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze the accumulated samples with a thread-local random source
    pub fn analyze(&self) -> Result<StyleProfile> {
        self.analyze_with_rng(&mut rand::thread_rng())
    }

    /// Analyze with a fixed seed; repeated calls produce identical profiles
    pub fn analyze_seeded(&self, seed: u64) -> Result<StyleProfile> {
        self.analyze_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Analyze with a caller-supplied random source
    pub fn analyze_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<StyleProfile> {
        if self.samples.iter().all(|s| s.trim().is_empty()) {
            return Err(AnalyzeError::EmptyInput);
        }

        // Blank-line separators preserve paragraph boundaries between samples.
        let combined = self.samples.join("\n\n");
        let tokens = tokenizer::tokenize(&combined);

        let (lexical_summary, (structural_summary, pattern_summary)) =
            run_passes(&combined, &tokens, &self.config);

        let excerpts = excerpts::select(
            &tokens.sentences,
            &structural_summary.sentence_lengths,
            &self.config.excerpts,
            rng,
        );

        let structure_stats = StructureStats {
            avg_paragraph_sentences: structural_summary.avg_paragraph_sentences,
            paragraph_patterns: structural_summary.paragraph_patterns,
            punctuation_patterns: structural_summary.punctuation_patterns,
            transition_phrases: pattern_summary.transition_phrases,
        };
        let distinctive_patterns = DistinctivePatterns {
            signature_phrases: pattern_summary.signature_phrases,
            quirks: pattern_summary.quirks,
            rhythm_pattern: pattern_summary.rhythm_pattern,
        };

        let facts = ProfileFacts {
            sentence: &structural_summary.sentence_stats,
            word: &lexical_summary.stats,
            structure: &structure_stats,
            distinctive: &distinctive_patterns,
        };
        let description = compose::describe(&facts);
        let mimicry_instructions = compose::mimicry_instructions(&facts);

        Ok(StyleProfile {
            sentence_stats: structural_summary.sentence_stats,
            word_stats: lexical_summary.stats,
            structure_stats,
            distinctive_patterns,
            excerpts,
            description,
            mimicry_instructions,
        })
    }
}

/// Run the three deterministic passes
///
/// The passes share no data, so the parallel build fans them out with
/// rayon; output is identical either way.
#[cfg(feature = "parallel")]
fn run_passes(
    text: &str,
    tokens: &tokenizer::TokenizedText,
    config: &AnalyzerConfig,
) -> (
    lexical::LexicalSummary,
    (structural::StructuralSummary, patterns::PatternSummary),
) {
    rayon::join(
        || lexical::analyze(&tokens.words, &config.lexical),
        || {
            rayon::join(
                || structural::analyze(text, tokens, &config.sentence, &config.paragraph),
                || patterns::detect(text, tokens, &config.patterns, &config.sentence),
            )
        },
    )
}

#[cfg(not(feature = "parallel"))]
fn run_passes(
    text: &str,
    tokens: &tokenizer::TokenizedText,
    config: &AnalyzerConfig,
) -> (
    lexical::LexicalSummary,
    (structural::StructuralSummary, patterns::PatternSummary),
) {
    (
        lexical::analyze(&tokens.words, &config.lexical),
        (
            structural::analyze(text, tokens, &config.sentence, &config.paragraph),
            patterns::detect(text, tokens, &config.patterns, &config.sentence),
        ),
    )
}
