//! Profile rendering

use anyhow::Result;
use std::io::Write;
use stylograph_core::StyleProfile;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full profile as pretty-printed JSON
    Json,
    /// Markdown report
    Markdown,
}

/// Trait for profile renderers
pub trait ProfileRenderer {
    /// Render a complete profile to the writer
    fn render(&self, profile: &StyleProfile, writer: &mut dyn Write) -> Result<()>;
}

/// Build the renderer for a format
pub fn renderer_for(format: OutputFormat) -> Box<dyn ProfileRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
    }
}
