//! Buffer compression.

use flate2::Compression;
use tracing::trace;

use crate::codec;
use crate::error::Result;
use crate::format;

/// Compression level, mirroring the zlib constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Store without compression (level 0)
    None,
    /// Fastest compression (level 1)
    Fastest,
    /// Best ratio (level 9)
    Best,
    /// The codec's default speed/ratio trade-off
    #[default]
    Default,
}

impl CompressionLevel {
    /// The numeric level handed to the codec.
    pub fn level(self) -> u32 {
        self.as_codec().level()
    }

    pub(crate) fn as_codec(self) -> Compression {
        match self {
            Self::None => Compression::none(),
            Self::Fastest => Compression::fast(),
            Self::Best => Compression::best(),
            Self::Default => Compression::default(),
        }
    }
}

/// Compress a buffer into the framing selected by `wbits`.
///
/// `wbits` follows the zlib window-bits convention: `0` for a zlib stream
/// with the full 32 KiB window, `9..=15` for a zlib stream, `-15..=-9` for
/// headerless raw deflate, `25..=31` for a gzip member. Any other value
/// fails with [`ErrorKind::Stream`](crate::ErrorKind::Stream).
///
/// Empty input compresses to an empty buffer without invoking the codec.
pub fn compress(data: &[u8], level: CompressionLevel, wbits: i32) -> Result<Vec<u8>> {
    if data.is_empty() {
        trace!("empty input, skipping codec");
        return Ok(Vec::new());
    }
    let format = format::resolve_compress(wbits)?;
    codec::deflate_all(data, format, level.as_codec())
}
