//! JSON profile renderer

use super::ProfileRenderer;
use anyhow::Result;
use std::io::Write;
use stylograph_core::StyleProfile;

/// JSON renderer - emits the full profile, pretty-printed
pub struct JsonRenderer;

impl ProfileRenderer for JsonRenderer {
    fn render(&self, profile: &StyleProfile, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, profile)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
