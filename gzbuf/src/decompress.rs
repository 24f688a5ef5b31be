//! Buffer decompression.

use tracing::trace;

use crate::codec;
use crate::error::Result;
use crate::format;

/// Decompress a buffer, selecting the framing from `wbits` and, when the
/// value leaves the format open, the buffer's leading bytes.
///
/// `wbits` follows the zlib window-bits convention: `0` sniffs the gzip
/// magic and falls back to zlib, `9..=15` pins a zlib stream, `-15..=-9`
/// pins headerless raw deflate, `25..=31` pins a gzip member, and `41..=47`
/// sniffs like `0` with an explicit window magnitude. Any other value fails
/// with [`ErrorKind::Stream`](crate::ErrorKind::Stream); corrupt or
/// truncated input fails with [`ErrorKind::Data`](crate::ErrorKind::Data).
///
/// Empty input decompresses to an empty buffer without invoking the codec.
/// Bytes after the end of the compressed stream are ignored.
pub fn decompress(data: &[u8], wbits: i32) -> Result<Vec<u8>> {
    if data.is_empty() {
        trace!("empty input, skipping codec");
        return Ok(Vec::new());
    }
    let format = format::resolve_decompress(wbits, data)?;
    codec::inflate_all(data, format)
}
