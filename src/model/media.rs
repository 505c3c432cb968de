//! Media map built during extraction.

use std::collections::{HashMap, HashSet};

/// Mapping from archive media paths to the bare filenames they were
/// extracted under.
///
/// Filenames are assumed unique within one archive; a later part with the
/// same basename silently replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct MediaMap {
    by_path: HashMap<String, String>,
    filenames: HashSet<String>,
}

impl MediaMap {
    /// Create an empty map.
    ///
    /// Resolving image references against an empty map drops every
    /// reference, which is exactly the direct (no media on disk) pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `archive_path` was extracted under `filename`.
    pub fn insert(&mut self, archive_path: impl Into<String>, filename: impl Into<String>) {
        let filename = filename.into();
        self.filenames.insert(filename.clone());
        self.by_path.insert(archive_path.into(), filename);
    }

    /// Extracted filename for an archive path, if any.
    pub fn filename_for(&self, archive_path: &str) -> Option<&str> {
        self.by_path.get(archive_path).map(String::as_str)
    }

    /// Whether a bare filename was extracted from this archive.
    pub fn contains_filename(&self, filename: &str) -> bool {
        self.filenames.contains(filename)
    }

    /// Number of extracted media parts.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
