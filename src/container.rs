//! ZIP container abstraction for PPTX packages.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Archive prefix under which slide XML parts live.
const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Archive prefix under which binary media parts live.
pub const MEDIA_PREFIX: &str = "ppt/media/";

/// A slide XML part, located inside the archive.
///
/// `index` is the numeric suffix from the `slide<N>.xml` naming convention.
/// Names without a parseable number carry index 0 and therefore sort first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideEntry {
    /// Full archive path, e.g. `ppt/slides/slide3.xml`.
    pub name: String,
    /// Parsed slide number (0 when unparseable).
    pub index: u32,
}

impl SlideEntry {
    /// Path of this slide's companion relationships part.
    ///
    /// `ppt/slides/slide3.xml` -> `ppt/slides/_rels/slide3.xml.rels`
    pub fn rels_path(&self) -> String {
        let path = Path::new(&self.name);
        let parent = path.parent().unwrap_or(Path::new(""));
        let filename = path.file_name().unwrap_or_default().to_string_lossy();
        format!("{}/_rels/{}.rels", parent.display(), filename)
    }
}

/// PPTX container abstraction over a ZIP archive.
///
/// Provides access to slide parts, media parts, and raw XML/binary reads.
pub struct PptxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl PptxContainer {
    /// Open a PPTX container from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read an XML part from the archive as a string.
    ///
    /// Handles UTF-8 (with or without BOM) and UTF-16 LE/BE encodings.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Read a binary part from the archive.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingPart(path.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let exists = archive.file_names().any(|n| n == path);
        exists
    }

    /// List parts matching a prefix, in archive enumeration order.
    pub fn list_files_with_prefix(&self, prefix: &str) -> Vec<String> {
        let archive = self.archive.borrow();
        archive
            .file_names()
            .filter(|n| n.starts_with(prefix))
            .map(String::from)
            .collect()
    }

    /// Locate slide XML parts, sorted ascending by parsed slide number.
    ///
    /// The sort is stable: entries with equal numbers keep their archive
    /// enumeration order. An archive with no slide parts yields an empty Vec.
    pub fn slide_entries(&self) -> Vec<SlideEntry> {
        let mut entries: Vec<SlideEntry> = self
            .list_files_with_prefix(SLIDE_PREFIX)
            .into_iter()
            .filter(|n| n.ends_with(".xml"))
            .map(|name| {
                let index = parse_slide_index(&name);
                SlideEntry { name, index }
            })
            .collect();
        entries.sort_by_key(|e| e.index);
        entries
    }

    /// List media parts (`ppt/media/*`) in archive enumeration order.
    pub fn media_entries(&self) -> Vec<String> {
        self.list_files_with_prefix(MEDIA_PREFIX)
    }
}

impl std::fmt::Debug for PptxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PptxContainer")
            .field("slides", &self.slide_entries().len())
            .finish()
    }
}

/// Parse the numeric suffix out of a `ppt/slides/slide<N>.xml` name.
fn parse_slide_index(name: &str) -> u32 {
    name.strip_prefix(SLIDE_PREFIX)
        .and_then(|rest| rest.strip_suffix(".xml"))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// Decode XML bytes handling different encodings (UTF-8, UTF-16 LE/BE).
///
/// PPTX parts are typically UTF-8, but non-standard producers emit UTF-16.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.len() >= 3 && bytes[0] == 0xEF && bytes[1] == 0xBB && bytes[2] == 0xBF {
        // UTF-8 BOM: skip it
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::InvalidData(e.to_string()));
    }

    if bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] == 0xFE {
        // UTF-16 LE BOM
        let content = decode_utf16_le(&bytes[2..])?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        // UTF-16 BE BOM
        let content = decode_utf16_be(&bytes[2..])?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            // No BOM; UTF-16 ASCII text has null bytes in alternating positions
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                Ok(fix_xml_encoding_declaration(&decode_utf16_le(bytes)?))
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                Ok(fix_xml_encoding_declaration(&decode_utf16_be(bytes)?))
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Rewrite encoding="UTF-16" to UTF-8 in the XML declaration.
///
/// After decoding UTF-16 bytes into a Rust String the declaration still
/// claims UTF-16, which makes quick-xml reject the already-decoded text.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];
            let fixed = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");
            return format!("{}{}", fixed, rest);
        }
    }
    content.to_string()
}

fn decode_utf16_le(bytes: &[u8]) -> Result<String> {
    let len = bytes.len() & !1;
    let u16_iter = (0..len)
        .step_by(2)
        .map(|i| u16::from_le_bytes([bytes[i], bytes[i + 1]]));
    char::decode_utf16(u16_iter)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::InvalidData(e.to_string()))
}

fn decode_utf16_be(bytes: &[u8]) -> Result<String> {
    let len = bytes.len() & !1;
    let u16_iter = (0..len)
        .step_by(2)
        .map(|i| u16::from_be_bytes([bytes[i], bytes[i + 1]]));
    char::decode_utf16(u16_iter)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::InvalidData(e.to_string()))
}
