//! Slide record structures.

use serde::{Deserialize, Serialize};

/// The extracted content of one slide.
///
/// `content` and `images` are independently ordered sequences; no pairing
/// between a paragraph and an image is tracked or implied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Qualifying paragraph texts, in document order.
    #[serde(default)]
    pub content: Vec<String>,

    /// Relative image paths (e.g. `images/image1.png`), in relationship
    /// traversal order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl SlideRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from content lines and image paths.
    pub fn with_parts(
        content: impl IntoIterator<Item = impl Into<String>>,
        images: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the slide carries neither text nor images.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.images.is_empty()
    }

    /// True when the slide carries text.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// True when the slide references at least one image.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// All content lines joined with a single space.
    ///
    /// Used by the preview surface for one-line-per-slide output.
    pub fn joined_text(&self) -> String {
        self.content.join(" ")
    }
}
