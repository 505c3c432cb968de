//! Slide relationship resolution.

use super::MEDIA_SUBDIR;
use crate::model::MediaMap;

/// Marker that distinguishes media targets from layout/notes targets.
const MEDIA_MARKER: &str = "media/";

/// Resolve the image references of one slide against the media map.
///
/// Scans `Relationship` elements in document order and keeps every `Target`
/// that points into the media directory and whose basename was actually
/// extracted; anything else is skipped without error. Output paths are
/// relative to the staging directory (`images/<basename>`).
pub(crate) fn resolve_image_refs(rels_xml: &str, media: &MediaMap) -> Vec<String> {
    let mut images = Vec::new();
    let mut reader = quick_xml::Reader::from_str(rels_xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Empty(ref e))
            | Ok(quick_xml::events::Event::Start(ref e)) => {
                if e.name().local_name().as_ref() == b"Relationship" {
                    let mut target = String::new();
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"Target" {
                            target = String::from_utf8_lossy(&attr.value).to_string();
                        }
                    }

                    if target.contains(MEDIA_MARKER) {
                        let filename = target.rsplit('/').next().unwrap_or(&target);
                        if media.contains_filename(filename) {
                            images.push(format!("{}/{}", MEDIA_SUBDIR, filename));
                        }
                    }
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            // Malformed rels degrade to whatever was scanned so far.
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    images
}
