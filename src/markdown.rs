//! Markdown staging format: writer and line-oriented parser.
//!
//! The staged intermediate file is the only artifact that crosses the
//! extract/render boundary. One block per slide:
//!
//! ```text
//! # Slide 1
//! ## Images
//! - ![](images/image1.png)
//! ## Content
//! - Hello World
//!
//! ---
//! ```
//!
//! The Images section is omitted when a slide has no images, the Content
//! section when it has no content; the slide heading is always present.

use crate::model::SlideRecord;
use std::path::{Component, Path, PathBuf};

const SLIDE_HEADING: &str = "# Slide";
const IMAGES_HEADING: &str = "## Images";
const CONTENT_HEADING: &str = "## Content";
const IMAGE_ITEM_PREFIX: &str = "- ![](";
const ITEM_PREFIX: &str = "- ";
const SEPARATOR: &str = "---";

/// Serialize slide records into the staging format.
pub fn write_markdown(slides: &[SlideRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (i, slide) in slides.iter().enumerate() {
        lines.push(format!("{} {}", SLIDE_HEADING, i + 1));

        if slide.has_images() {
            lines.push(IMAGES_HEADING.to_string());
            for img in &slide.images {
                lines.push(format!("{}{})", IMAGE_ITEM_PREFIX, img));
            }
        }

        if slide.has_content() {
            lines.push(CONTENT_HEADING.to_string());
            for text in &slide.content {
                lines.push(format!("{}{}", ITEM_PREFIX, text));
            }
        }

        lines.push(format!("\n{}\n", SEPARATOR));
    }

    lines.join("\n")
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Images,
    Content,
}

/// Parse the staging format back into slide records.
///
/// Line-oriented: a heading line starts a slide, section lines toggle the
/// target list, item lines append to it, blank lines and separators are
/// ignored. Image paths are re-based by joining `image_base` in front of
/// them; pass an empty path to keep them verbatim.
pub fn parse_markdown(text: &str, image_base: &Path) -> Vec<SlideRecord> {
    let mut slides: Vec<SlideRecord> = Vec::new();
    let mut current: Option<SlideRecord> = None;
    let mut section = Section::None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line == SEPARATOR {
            continue;
        }

        if line.starts_with(SLIDE_HEADING) {
            if let Some(slide) = current.take() {
                slides.push(slide);
            }
            current = Some(SlideRecord::new());
            section = Section::None;
        } else if line.starts_with(IMAGES_HEADING) {
            section = Section::Images;
        } else if line.starts_with(CONTENT_HEADING) {
            section = Section::Content;
        } else if line.starts_with(IMAGE_ITEM_PREFIX) && line.ends_with(')') {
            if let Some(ref mut slide) = current {
                if section == Section::Images {
                    let path = &line[IMAGE_ITEM_PREFIX.len()..line.len() - 1];
                    slide.images.push(rebase_image_path(path, image_base));
                }
            }
        } else if let Some(item) = line.strip_prefix(ITEM_PREFIX) {
            if let Some(ref mut slide) = current {
                if section == Section::Content {
                    slide.content.push(item.to_string());
                }
            }
        }
    }

    if let Some(slide) = current {
        slides.push(slide);
    }

    slides
}

/// Prefix an image item path with the re-base directory.
fn rebase_image_path(path: &str, image_base: &Path) -> String {
    image_base.join(path).to_string_lossy().replace('\\', "/")
}

/// Compute the image re-base directory for a staged markdown file.
///
/// Image items are stored relative to the markdown file's directory, but
/// the renderer may run from a different working context. The re-base is
/// the markdown directory expressed relative to `anchor`: an exact prefix
/// is stripped; otherwise the first occurrence of the anchor's components
/// inside `md_dir` is located and the tail after it returned; a directory
/// not containing the anchor at all is returned unchanged.
pub fn rebase_dir(md_dir: &Path, anchor: &Path) -> PathBuf {
    if let Ok(stripped) = md_dir.strip_prefix(anchor) {
        return stripped.to_path_buf();
    }

    let dir: Vec<Component> = md_dir.components().collect();
    let needle: Vec<Component> = anchor.components().collect();
    if !needle.is_empty() && dir.len() >= needle.len() {
        for start in 0..=(dir.len() - needle.len()) {
            if dir[start..start + needle.len()] == needle[..] {
                return dir[start + needle.len()..].iter().collect();
            }
        }
    }

    md_dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slides() -> Vec<SlideRecord> {
        vec![
            SlideRecord::with_parts(["Hello World"], Vec::<String>::new()),
            SlideRecord::with_parts(
                Vec::<String>::new(),
                ["images/image1.png", "images/image2.png"],
            ),
            SlideRecord::with_parts(["Mixed", "Bullet"], ["images/chart.png"]),
            SlideRecord::new(),
        ]
    }

    #[test]
    fn test_writer_block_layout() {
        let md = write_markdown(&sample_slides());

        assert!(md.starts_with("# Slide 1\n## Content\n- Hello World"));
        assert!(md.contains("# Slide 2\n## Images\n- ![](images/image1.png)\n- ![](images/image2.png)"));
        assert!(md.contains("# Slide 3\n## Images\n- ![](images/chart.png)\n## Content\n- Mixed\n- Bullet"));
        // Empty slide keeps its heading and nothing else.
        assert!(md.contains("# Slide 4\n\n---"));
        // Slide 1 has no images: no Images heading before its Content.
        assert!(!md[..md.find("# Slide 2").unwrap()].contains("## Images"));
    }

    #[test]
    fn test_round_trip_identity() {
        let slides = sample_slides();
        let md = write_markdown(&slides);
        let parsed = parse_markdown(&md, Path::new(""));
        assert_eq!(parsed, slides);
    }

    #[test]
    fn test_parse_rebases_image_paths() {
        let md = "# Slide 1\n## Images\n- ![](images/a.png)\n";
        let parsed = parse_markdown(md, Path::new("staging/deck"));
        assert_eq!(parsed[0].images, vec!["staging/deck/images/a.png"]);
    }

    #[test]
    fn test_parse_ignores_items_outside_sections() {
        let md = "# Slide 1\n- orphan text\n- ![](images/a.png)\n";
        let parsed = parse_markdown(md, Path::new(""));
        assert!(parsed[0].content.is_empty());
        assert!(parsed[0].images.is_empty());
    }

    #[test]
    fn test_parse_ignores_blank_and_separator_lines() {
        let md = "\n---\n# Slide 1\n\n## Content\n- kept\n\n---\n";
        let parsed = parse_markdown(md, Path::new(""));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].content, vec!["kept"]);
    }

    #[test]
    fn test_parse_accepts_always_written_content_heading() {
        // Earlier stagers wrote the Content heading even for empty slides.
        let md = "# Slide 1\n## Content\n\n---\n# Slide 2\n## Content\n- text\n";
        let parsed = parse_markdown(md, Path::new(""));
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].content.is_empty());
        assert_eq!(parsed[1].content, vec!["text"]);
    }

    #[test]
    fn test_rebase_dir_exact_prefix() {
        assert_eq!(
            rebase_dir(Path::new("demo/slides/staging/foo"), Path::new("demo/slides")),
            PathBuf::from("staging/foo")
        );
    }

    #[test]
    fn test_rebase_dir_interior_anchor() {
        assert_eq!(
            rebase_dir(
                Path::new("/srv/site/demo/slides/staging/foo"),
                Path::new("demo/slides")
            ),
            PathBuf::from("staging/foo")
        );
    }

    #[test]
    fn test_rebase_dir_anchor_absent() {
        assert_eq!(
            rebase_dir(Path::new("elsewhere/foo"), Path::new("demo/slides")),
            PathBuf::from("elsewhere/foo")
        );
    }
}
