//! Rendering options configuration.

use super::theme::Theme;

/// Default base URL for the Reveal.js runtime assets.
pub const DEFAULT_RUNTIME_BASE: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/reveal.js/5.0.4";

/// Options for rendering a deck to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Deck title, shown on the title slide and in the document head.
    pub title: String,

    /// Theme to render with.
    pub theme: Theme,

    /// Extra CSS appended after the theme block.
    pub custom_css: Option<String>,

    /// Base URL the Reveal.js stylesheets and script are loaded from.
    pub runtime_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            theme: Theme::default(),
            custom_css: None,
            runtime_base: DEFAULT_RUNTIME_BASE.to_string(),
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Append extra CSS after the theme block.
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Load Reveal.js assets from a different base URL (e.g. a local
    /// mirror).
    pub fn with_runtime_base(mut self, base: impl Into<String>) -> Self {
        self.runtime_base = base.into();
        self
    }
}
