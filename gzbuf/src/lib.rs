//! One-shot compression and decompression for the deflate format family.
//!
//! This crate wraps a raw DEFLATE codec with the format-selection layer
//! needed to produce and consume gzip members, zlib streams, and headerless
//! raw deflate from in-memory buffers:
//!
//! - Single-call [`compress`] / [`decompress`] over byte slices
//! - The zlib window-bits convention (sign, magnitude, +16/+32 bands)
//!   decoded into an explicit framing mode at the API boundary
//! - gzip magic sniffing when the caller does not pin a format
//! - Codec status codes mapped to a typed [`Error`]
//!
//! Streaming, multi-member gzip concatenation, and preset dictionaries are
//! out of scope; every call is independent and safe to run concurrently.

mod codec;
mod compress;
mod decompress;
mod error;
mod format;

pub use compress::{CompressionLevel, compress};
pub use decompress::decompress;
pub use error::{Error, ErrorKind, Result};

/// Leading magic bytes of a gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Largest supported window size logarithm (32 KiB history buffer).
pub const MAX_WINDOW_BITS: i32 = 15;

/// Whether the buffer starts with the gzip magic bytes.
///
/// This only inspects the first two bytes; it does not validate the rest of
/// the member.
pub fn is_gzipped(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}
