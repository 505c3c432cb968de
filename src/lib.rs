//! # slidecast
//!
//! Convert PowerPoint presentations into themed, standalone Reveal.js HTML
//! slideshows.
//!
//! The pipeline has two variants. The staged path extracts a presentation
//! into a directory of media files plus a `slides.md` intermediate, which a
//! later render step parses back and turns into HTML. The direct path
//! extracts in memory and renders straight away, without media on disk.
//!
//! ## Quick Start
//!
//! ```no_run
//! use slidecast::render::{to_html, RenderOptions, Theme};
//!
//! // Staged: PPTX -> staging dir (images/ + slides.md)
//! let staged = slidecast::stage_file("talk.pptx", "staging/talk")?;
//! println!("{} slides staged", staged.slides.len());
//!
//! // Later: slides.md -> HTML
//! let text = std::fs::read_to_string(&staged.markdown_path)?;
//! let slides = slidecast::markdown::parse_markdown(&text, std::path::Path::new("staging/talk"));
//! let options = RenderOptions::new().with_title("Talk").with_theme(Theme::Blue);
//! std::fs::write("talk.html", to_html(&slides, &options))?;
//!
//! // Direct: PPTX -> text-only records
//! let records = slidecast::extract_file("talk.pptx")?;
//! # Ok::<(), slidecast::Error>(())
//! ```

pub mod batch;
pub mod container;
pub mod error;
pub mod markdown;
pub mod model;
pub mod pptx;
pub mod render;
pub mod staging;

// Re-exports
pub use container::{PptxContainer, SlideEntry};
pub use error::{Error, Result};
pub use model::{DeckConfig, MediaMap, SlideRecord};
pub use pptx::PptxParser;
pub use render::{RenderOptions, Theme};
pub use staging::{stage_pptx, StagingOutput};

use std::path::Path;

/// Extract one record per slide from a presentation file.
///
/// This is the direct in-memory path: no media is written anywhere, so the
/// records carry text only.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Vec<SlideRecord>> {
    let parser = PptxParser::open(path)?;
    parser.extract(&MediaMap::new())
}

/// Extract one record per slide from presentation bytes.
pub fn extract_bytes(data: Vec<u8>) -> Result<Vec<SlideRecord>> {
    let parser = PptxParser::from_bytes(data)?;
    parser.extract(&MediaMap::new())
}

/// Stage a presentation into a directory: `images/` plus `slides.md`.
///
/// Equivalent to [`staging::stage_pptx`].
pub fn stage_file(
    pptx: impl AsRef<Path>,
    staging_dir: impl AsRef<Path>,
) -> Result<StagingOutput> {
    staging::stage_pptx(pptx, staging_dir)
}
