//! Error types for buffer compression and decompression.

use thiserror::Error;

/// Result type for gzbuf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes, mirroring the codec's status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inconsistent stream state or invalid parameter, such as an
    /// out-of-range window-bits value
    Stream,
    /// Malformed compressed data, a checksum mismatch, or a truncated stream
    Data,
    /// Allocation failure inside the codec
    Memory,
    /// Insufficient output buffer
    Buffer,
    /// Codec library version mismatch
    Version,
    /// A status code outside the known classes, preserved for diagnostics
    Unknown(i32),
}

/// Error raised when the codec reports a non-success status or a parameter
/// fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Error {
    /// Failure class
    pub kind: ErrorKind,
    /// Human-readable diagnostic
    pub message: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn stream(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Stream, message)
    }

    pub(crate) fn data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Data, message)
    }
}

// Deflate only fails on stream-state or parameter misuse.
impl From<flate2::CompressError> for Error {
    fn from(err: flate2::CompressError) -> Self {
        Self::stream(err.to_string())
    }
}

// Inflate failures mean the input bytes are not a valid stream.
impl From<flate2::DecompressError> for Error {
    fn from(err: flate2::DecompressError) -> Self {
        Self::data(err.to_string())
    }
}
