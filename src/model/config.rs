//! Deck configuration for batch generation.

use crate::render::Theme;
use serde::Deserialize;
use std::path::PathBuf;

/// One deck entry in a batch configuration file.
///
/// Batch runs read a JSON array of these; see [`crate::batch::load_configs`].
#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    /// Source presentation file.
    pub pptx: PathBuf,

    /// Output HTML path (destructively overwritten).
    pub output: PathBuf,

    /// Deck title, shown on the title slide and in the document head.
    pub title: String,

    /// Theme to render with. Defaults to the default theme when absent.
    #[serde(default)]
    pub theme: Theme,

    /// Extra CSS appended after the theme block.
    #[serde(default)]
    pub custom_css: Option<String>,
}
