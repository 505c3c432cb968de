//! PPTX parser implementation.

use super::rels::resolve_image_refs;
use crate::container::{PptxContainer, SlideEntry};
use crate::error::Result;
use crate::model::{MediaMap, SlideRecord};
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Parser for PPTX presentations.
///
/// Slide parts are located and ordered at construction time; extraction
/// walks them in that order.
pub struct PptxParser {
    container: PptxContainer,
    entries: Vec<SlideEntry>,
}

impl PptxParser {
    /// Open a PPTX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = PptxContainer::open(path)?;
        Ok(Self::from_container(container))
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = PptxContainer::from_bytes(data)?;
        Ok(Self::from_container(container))
    }

    fn from_container(container: PptxContainer) -> Self {
        let entries = container.slide_entries();
        Self { container, entries }
    }

    /// Number of slides in the presentation.
    pub fn slide_count(&self) -> usize {
        self.entries.len()
    }

    /// The located slide parts, in presentation order.
    pub fn slide_entries(&self) -> &[SlideEntry] {
        &self.entries
    }

    /// Extract one record per slide, resolving image references against
    /// `media`.
    ///
    /// With an empty [`MediaMap`] every image reference drops and the
    /// records come back text-only; that is the direct in-memory pipeline.
    /// An unreadable or malformed slide part degrades to an empty record
    /// rather than failing the run.
    pub fn extract(&self, media: &MediaMap) -> Result<Vec<SlideRecord>> {
        let mut records = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let content = match self.container.read_xml(&entry.name) {
                Ok(xml) => paragraph_texts(&xml),
                Err(_) => Vec::new(),
            };

            // A slide without a companion rels part has no images.
            let images = match self.container.read_xml(&entry.rels_path()) {
                Ok(xml) => resolve_image_refs(&xml, media),
                Err(_) => Vec::new(),
            };

            records.push(SlideRecord { content, images });
        }

        Ok(records)
    }

    /// Copy every `ppt/media/*` part into `dir` under its bare filename.
    ///
    /// A later part with the same basename overwrites the earlier one.
    pub fn extract_media_to(&self, dir: impl AsRef<Path>) -> Result<MediaMap> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut media = MediaMap::new();
        for archive_path in self.container.media_entries() {
            let filename = archive_path
                .rsplit('/')
                .next()
                .unwrap_or(&archive_path)
                .to_string();
            let data = self.container.read_binary(&archive_path)?;
            fs::write(dir.join(&filename), data)?;
            media.insert(archive_path, filename);
        }

        Ok(media)
    }
}

/// Extract the qualifying paragraph texts from one slide's XML.
///
/// Streaming scan over local element names, so any namespace prefix is
/// accepted: a `p` element opens a paragraph, every `t` element inside it
/// contributes its text in document order with no separator. A finalized
/// paragraph is kept only if, after trimming and NFC normalization, it is
/// non-empty, contains at least one ASCII alphanumeric character, and
/// carries no U+FFFD replacement character. Malformed markup ends the scan
/// with whatever was collected so far.
pub(crate) fn paragraph_texts(xml: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    // Keep raw text events; runs may carry significant interior whitespace.
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut paragraph = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => {
                match e.name().local_name().as_ref() {
                    b"p" => {
                        in_paragraph = true;
                        paragraph.clear();
                    }
                    b"t" if in_paragraph => {
                        in_text = true;
                    }
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_text {
                    let text = e.unescape().unwrap_or_default();
                    paragraph.push_str(&text);
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => {
                match e.name().local_name().as_ref() {
                    b"t" => {
                        in_text = false;
                    }
                    b"p" => {
                        if in_paragraph {
                            if let Some(line) = finalize_paragraph(&paragraph) {
                                lines.push(line);
                            }
                        }
                        in_paragraph = false;
                    }
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    lines
}

/// Trim, normalize, and apply the retention filter to one raw paragraph.
fn finalize_paragraph(raw: &str) -> Option<String> {
    let line: String = raw.trim().nfc().collect();
    let qualifies = !line.is_empty()
        && line.chars().any(|c| c.is_ascii_alphanumeric())
        && !line.contains('\u{FFFD}');
    qualifies.then_some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    #[test]
    fn test_single_paragraph() {
        let xml = "<a:p><a:r><a:t>Hello World</a:t></a:r></a:p>";
        assert_eq!(paragraph_texts(xml), vec!["Hello World"]);
    }

    #[test]
    fn test_runs_concatenate_without_separator() {
        let xml = "<a:p><a:r><a:t>Hel</a:t></a:r><a:r><a:t>lo</a:t></a:r></a:p>";
        assert_eq!(paragraph_texts(xml), vec!["Hello"]);
    }

    #[test]
    fn test_attributes_tolerated() {
        let xml = r#"<a:p algn="ctr"><a:r><a:t xml:space="preserve"> Agenda </a:t></a:r></a:p>"#;
        assert_eq!(paragraph_texts(xml), vec!["Agenda"]);
    }

    #[test]
    fn test_namespace_prefix_agnostic() {
        let xml = "<x:p><x:r><x:t>Other prefix</x:t></x:r></x:p>";
        assert_eq!(paragraph_texts(xml), vec!["Other prefix"]);
    }

    #[test]
    fn test_whitespace_only_dropped() {
        let xml = "<a:p><a:r><a:t>   </a:t></a:r></a:p>";
        assert!(paragraph_texts(xml).is_empty());
    }

    #[test]
    fn test_punctuation_only_dropped() {
        let xml = "<a:p><a:r><a:t>***</a:t></a:r></a:p>";
        assert!(paragraph_texts(xml).is_empty());
    }

    #[test]
    fn test_alphanumeric_retained() {
        let xml = "<a:p><a:r><a:t>Q3 2024</a:t></a:r></a:p>";
        assert_eq!(paragraph_texts(xml), vec!["Q3 2024"]);
    }

    #[test]
    fn test_replacement_character_dropped() {
        let xml = "<a:p><a:r><a:t>bad \u{FFFD} text</a:t></a:r></a:p>";
        assert!(paragraph_texts(xml).is_empty());
    }

    #[test]
    fn test_entities_unescaped() {
        let xml = "<a:p><a:r><a:t>Q&amp;A</a:t></a:r></a:p>";
        assert_eq!(paragraph_texts(xml), vec!["Q&A"]);
    }

    #[test]
    fn test_paragraph_order_with_gaps() {
        let xml = concat!(
            "<p:sp><a:p><a:r><a:t>First</a:t></a:r></a:p></p:sp>",
            "<p:sp><a:p><a:r><a:t>---</a:t></a:r></a:p></p:sp>",
            "<p:sp><a:p><a:r><a:t>Second</a:t></a:r></a:p></p:sp>",
        );
        assert_eq!(paragraph_texts(xml), vec!["First", "Second"]);
    }

    #[test]
    fn test_text_outside_paragraph_ignored() {
        let xml = "<a:t>stray</a:t><a:p><a:r><a:t>kept</a:t></a:r></a:p>";
        assert_eq!(paragraph_texts(xml), vec!["kept"]);
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let xml = "<a:p><a:r><a:t>kept</a:t></a:r></a:p><a:p><a:r><a:t>torn";
        assert_eq!(paragraph_texts(xml), vec!["kept"]);
    }

    fn build_archive(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in parts {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_extract_orders_slides_numerically() {
        let data = build_archive(&[
            (
                "ppt/slides/slide10.xml",
                "<a:p><a:r><a:t>ten</a:t></a:r></a:p>",
            ),
            (
                "ppt/slides/slide2.xml",
                "<a:p><a:r><a:t>two</a:t></a:r></a:p>",
            ),
            (
                "ppt/slides/slide1.xml",
                "<a:p><a:r><a:t>one</a:t></a:r></a:p>",
            ),
        ]);
        let parser = PptxParser::from_bytes(data).unwrap();
        let records = parser.extract(&MediaMap::new()).unwrap();
        let texts: Vec<String> = records.iter().map(|r| r.joined_text()).collect();
        assert_eq!(texts, vec!["one", "two", "ten"]);
    }

    #[test]
    fn test_extract_without_rels_yields_no_images() {
        let data = build_archive(&[(
            "ppt/slides/slide1.xml",
            "<a:p><a:r><a:t>solo</a:t></a:r></a:p>",
        )]);
        let parser = PptxParser::from_bytes(data).unwrap();
        let records = parser.extract(&MediaMap::new()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].images.is_empty());
    }

    #[test]
    fn test_extract_media_and_resolve() {
        let rels = r#"<Relationships>
  <Relationship Id="rId1" Target="../media/logo.png"/>
</Relationships>"#;
        let data = build_archive(&[
            ("ppt/slides/slide1.xml", "<p:cSld/>"),
            ("ppt/slides/_rels/slide1.xml.rels", rels),
            ("ppt/media/logo.png", "not-really-a-png"),
        ]);
        let parser = PptxParser::from_bytes(data).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let media = parser.extract_media_to(dir.path()).unwrap();
        assert_eq!(media.len(), 1);
        assert!(dir.path().join("logo.png").exists());

        let records = parser.extract(&media).unwrap();
        assert_eq!(records[0].images, vec!["images/logo.png"]);
        assert!(records[0].content.is_empty());
    }
}
