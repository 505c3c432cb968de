//! Error types for the slidecast library.

use std::io;
use thiserror::Error;

/// Result type alias for slidecast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during deck processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required archive part is missing.
    #[error("Missing archive part: {0}")]
    MissingPart(String),

    /// Invalid or malformed data in the presentation.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error reading or parsing a deck configuration file.
    #[error("Config error: {0}")]
    Config(String),

    /// A theme name outside the known set.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
