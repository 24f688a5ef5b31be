//! Window-bits decoding and framing selection.
//!
//! The zlib lineage packs several independent concerns into one signed
//! integer: the magnitude is the base-2 logarithm of the history window, a
//! negative sign strips the zlib header and trailer, and offset bands of +16
//! and +32 select a gzip wrapper or header auto-detection. That convention
//! is decoded here, once, at the public boundary; the rest of the crate only
//! sees the explicit [`ResolvedFormat`].
//!
//! Accepted bands:
//!
//! ```text
//! value        framing              window magnitude
//! 0            zlib (compress) /    15
//!              sniffed (decompress)
//! 9 ..= 15     zlib                 value
//! -15 ..= -9   raw deflate          |value|
//! 25 ..= 31    gzip                 value - 16
//! 41 ..= 47    sniffed, decompress  value - 32
//!              only
//! ```
//!
//! A magnitude of 8 is rejected: deflate cannot emit a 256-byte-window
//! stream (zlib widens it to 9 behind the caller's back), so accepting it
//! would misdescribe the output.

use tracing::trace;

use crate::error::{Error, Result};
use crate::{MAX_WINDOW_BITS, is_gzipped};

/// Header/trailer layout around the raw deflate payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Framing {
    /// Headerless deflate stream
    Raw,
    /// 2-byte zlib header and Adler-32 trailer
    Zlib,
    /// gzip member with CRC-32 and size trailer
    Gzip,
    /// Sniff the leading magic bytes, then gzip or zlib. Never reaches the
    /// codec; [`resolve_decompress`] pins it first.
    Auto,
}

/// Concrete codec parameters decoded from a window-bits value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedFormat {
    pub framing: Framing,
    /// Window size logarithm, 9..=15
    pub window_bits: u8,
}

/// Decode a window-bits value for compression.
pub(crate) fn resolve_compress(wbits: i32) -> Result<ResolvedFormat> {
    let resolved = decode(wbits, false)?;
    trace!("window bits {} -> {:?} for compression", wbits, resolved);
    Ok(resolved)
}

/// Decode a window-bits value for decompression, consulting the buffer's
/// leading bytes when the value leaves the format open.
pub(crate) fn resolve_decompress(wbits: i32, head: &[u8]) -> Result<ResolvedFormat> {
    let decoded = decode(wbits, true)?;
    let resolved = match decoded.framing {
        Framing::Auto => ResolvedFormat {
            framing: if is_gzipped(head) {
                Framing::Gzip
            } else {
                Framing::Zlib
            },
            window_bits: decoded.window_bits,
        },
        _ => decoded,
    };
    trace!("window bits {} -> {:?} for decompression", wbits, resolved);
    Ok(resolved)
}

fn decode(wbits: i32, decompressing: bool) -> Result<ResolvedFormat> {
    let (framing, magnitude) = match wbits {
        0 if decompressing => (Framing::Auto, MAX_WINDOW_BITS),
        0 => (Framing::Zlib, MAX_WINDOW_BITS),
        9..=15 => (Framing::Zlib, wbits),
        -15..=-9 => (Framing::Raw, -wbits),
        25..=31 => (Framing::Gzip, wbits - 16),
        41..=47 if decompressing => (Framing::Auto, wbits - 32),
        _ => return Err(Error::stream(format!("invalid window bits: {wbits}"))),
    };
    Ok(ResolvedFormat {
        framing,
        window_bits: magnitude as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn resolved(framing: Framing, window_bits: u8) -> ResolvedFormat {
        ResolvedFormat {
            framing,
            window_bits,
        }
    }

    #[test]
    fn compress_default_is_zlib_full_window() {
        assert_eq!(
            resolve_compress(0).unwrap(),
            resolved(Framing::Zlib, 15)
        );
    }

    #[test]
    fn compress_zlib_band() {
        assert_eq!(resolve_compress(9).unwrap(), resolved(Framing::Zlib, 9));
        assert_eq!(resolve_compress(15).unwrap(), resolved(Framing::Zlib, 15));
    }

    #[test]
    fn compress_raw_band() {
        assert_eq!(resolve_compress(-9).unwrap(), resolved(Framing::Raw, 9));
        assert_eq!(resolve_compress(-15).unwrap(), resolved(Framing::Raw, 15));
    }

    #[test]
    fn compress_gzip_band_subtracts_offset() {
        assert_eq!(resolve_compress(25).unwrap(), resolved(Framing::Gzip, 9));
        assert_eq!(resolve_compress(31).unwrap(), resolved(Framing::Gzip, 15));
    }

    #[test]
    fn compress_rejects_auto_band() {
        for wbits in [41, 47] {
            assert_eq!(resolve_compress(wbits).unwrap_err().kind, ErrorKind::Stream);
        }
    }

    #[test]
    fn out_of_band_values_are_stream_errors() {
        for wbits in [8, -8, 16, -16, 24, 32, 40, 48, 7, -7, i32::MIN, i32::MAX] {
            let err = resolve_compress(wbits).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Stream, "wbits {wbits}");
            assert!(err.message.contains("invalid window bits"));
        }
        for wbits in [8, -8, 16, 24, 32, 40, 48] {
            let err = resolve_decompress(wbits, &[]).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Stream, "wbits {wbits}");
        }
    }

    #[test]
    fn decompress_default_sniffs_magic() {
        assert_eq!(
            resolve_decompress(0, &[0x1f, 0x8b, 0x08]).unwrap(),
            resolved(Framing::Gzip, 15)
        );
        assert_eq!(
            resolve_decompress(0, &[0x78, 0x9c]).unwrap(),
            resolved(Framing::Zlib, 15)
        );
    }

    #[test]
    fn decompress_auto_band_sniffs_magic() {
        assert_eq!(
            resolve_decompress(47, &[0x1f, 0x8b]).unwrap(),
            resolved(Framing::Gzip, 15)
        );
        assert_eq!(
            resolve_decompress(41, &[0x78, 0x01]).unwrap(),
            resolved(Framing::Zlib, 9)
        );
    }

    #[test]
    fn decompress_pinned_bands_ignore_magic() {
        // An explicit zlib request is not overridden by gzip-looking bytes.
        assert_eq!(
            resolve_decompress(15, &[0x1f, 0x8b]).unwrap(),
            resolved(Framing::Zlib, 15)
        );
        assert_eq!(
            resolve_decompress(-12, &[0x1f, 0x8b]).unwrap(),
            resolved(Framing::Raw, 12)
        );
        assert_eq!(
            resolve_decompress(28, &[0x78, 0x9c]).unwrap(),
            resolved(Framing::Gzip, 12)
        );
    }

    #[test]
    fn short_buffers_sniff_as_zlib() {
        assert_eq!(
            resolve_decompress(0, &[0x1f]).unwrap(),
            resolved(Framing::Zlib, 15)
        );
        assert_eq!(
            resolve_decompress(0, &[]).unwrap(),
            resolved(Framing::Zlib, 15)
        );
    }
}
