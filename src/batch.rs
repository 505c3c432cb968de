//! Batch deck generation from an external configuration list.

use crate::error::Result;
use crate::model::{DeckConfig, MediaMap};
use crate::pptx::PptxParser;
use crate::render::{to_html, RenderOptions};
use std::fs;
use std::path::Path;

/// Outcome of generating one deck.
#[derive(Debug)]
pub enum BatchOutcome {
    /// The source presentation did not exist; nothing was written.
    Skipped,

    /// The output file was written.
    Generated(DeckReport),
}

/// Report for one written deck.
#[derive(Debug)]
pub struct DeckReport {
    /// Number of slides rendered (title slide not counted).
    pub slide_count: usize,

    /// Set when extraction degraded to an empty deck.
    pub warning: Option<String>,
}

/// Load a JSON deck list (an array of [`DeckConfig`] entries).
pub fn load_configs(path: impl AsRef<Path>) -> Result<Vec<DeckConfig>> {
    let text = fs::read_to_string(path)?;
    let configs: Vec<DeckConfig> = serde_json::from_str(&text)?;
    Ok(configs)
}

/// Generate one deck: extract the source in memory and render it.
///
/// A missing source file is skipped. An unreadable or malformed archive
/// degrades to an empty deck with the error carried on the report, so one
/// bad deck never aborts a batch. No media is extracted on this path, so
/// every image reference drops and slides render from text alone.
pub fn generate_deck(config: &DeckConfig) -> Result<BatchOutcome> {
    if !config.pptx.exists() {
        return Ok(BatchOutcome::Skipped);
    }

    let (slides, warning) = match PptxParser::open(&config.pptx)
        .and_then(|parser| parser.extract(&MediaMap::new()))
    {
        Ok(slides) => (slides, None),
        Err(e) => (
            Vec::new(),
            Some(format!("{}: {}", config.pptx.display(), e)),
        ),
    };

    let mut options = RenderOptions::new()
        .with_title(config.title.as_str())
        .with_theme(config.theme);
    if let Some(ref css) = config.custom_css {
        options = options.with_custom_css(css.as_str());
    }

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&config.output, to_html(&slides, &options))?;

    Ok(BatchOutcome::Generated(DeckReport {
        slide_count: slides.len(),
        warning,
    }))
}
