//! Custom error types for EXIF processing

use std::fmt;
use std::io;

/// EXIF-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// File does not exist
    FileNotFound(String),
    /// File format not recognized by the decoder
    UnsupportedFormat(String),
    /// Raw EXIF block is present but cannot be parsed
    InvalidExifData(String),
    /// Pixel layout with no stripped-copy support
    UnsupportedPixelLayout(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ExifError::UnsupportedFormat(what) => write!(f, "Unsupported image format: {}", what),
            ExifError::InvalidExifData(msg) => write!(f, "Invalid EXIF data: {}", msg),
            ExifError::UnsupportedPixelLayout(mode) => write!(f, "Unsupported pixel layout: {}", mode),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}

impl From<image::ImageError> for ExifError {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(e) => ExifError::IoError(e),
            image::ImageError::Unsupported(e) => ExifError::UnsupportedFormat(e.to_string()),
            other => ExifError::GenericError(other.to_string()),
        }
    }
}

impl From<exif::Error> for ExifError {
    fn from(error: exif::Error) -> Self {
        match error {
            exif::Error::Io(e) => ExifError::IoError(e),
            other => ExifError::InvalidExifData(other.to_string()),
        }
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;
