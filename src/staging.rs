//! Staged extraction: PPTX to a directory of media plus a Markdown file.

use crate::error::Result;
use crate::markdown::write_markdown;
use crate::model::SlideRecord;
use crate::pptx::{PptxParser, MEDIA_SUBDIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename of the staged intermediate file.
pub const MARKDOWN_FILENAME: &str = "slides.md";

/// Result of one staged extraction.
#[derive(Debug)]
pub struct StagingOutput {
    /// The staging directory (recreated from scratch).
    pub staging_dir: PathBuf,

    /// Path of the written `slides.md`.
    pub markdown_path: PathBuf,

    /// The extracted records, as serialized into the markdown file.
    pub slides: Vec<SlideRecord>,

    /// Number of media files extracted into `images/`.
    pub media_count: usize,
}

/// Extract a presentation into `staging_dir`.
///
/// Any pre-existing directory at that path is removed first. Afterwards the
/// directory holds `images/` with every media part and `slides.md` with one
/// block per slide, image items pointing into `images/`.
pub fn stage_pptx(pptx: impl AsRef<Path>, staging_dir: impl AsRef<Path>) -> Result<StagingOutput> {
    let staging_dir = staging_dir.as_ref();

    if staging_dir.exists() {
        fs::remove_dir_all(staging_dir)?;
    }
    fs::create_dir_all(staging_dir.join(MEDIA_SUBDIR))?;

    let parser = PptxParser::open(pptx)?;
    let media = parser.extract_media_to(staging_dir.join(MEDIA_SUBDIR))?;
    let slides = parser.extract(&media)?;

    let markdown_path = staging_dir.join(MARKDOWN_FILENAME);
    fs::write(&markdown_path, write_markdown(&slides))?;

    Ok(StagingOutput {
        staging_dir: staging_dir.to_path_buf(),
        markdown_path,
        slides,
        media_count: media.len(),
    })
}
