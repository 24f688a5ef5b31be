//! One-shot drivers for the low-level deflate codec.
//!
//! Each call builds a fresh `flate2` stream state, feeds it the whole input
//! with a finishing flush, and grows the output vector until the codec
//! reports end of stream. The state is dropped on every exit path, so the
//! codec's window buffers are released exactly once per call.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::{Framing, ResolvedFormat};

/// Compress `input` into a single framed stream.
pub(crate) fn deflate_all(
    input: &[u8],
    format: ResolvedFormat,
    level: Compression,
) -> Result<Vec<u8>> {
    let mut codec = match format.framing {
        Framing::Raw => Compress::new_with_window_bits(level, false, format.window_bits),
        Framing::Zlib => Compress::new_with_window_bits(level, true, format.window_bits),
        Framing::Gzip => Compress::new_gzip(level, format.window_bits),
        Framing::Auto => return Err(Error::stream("auto framing applies to decompression only")),
    };

    let mut output = Vec::with_capacity((input.len() / 2).max(64));
    loop {
        let consumed = codec.total_in() as usize;
        let status = codec.compress_vec(&input[consumed..], &mut output, FlushCompress::Finish)?;
        match status {
            Status::StreamEnd => break,
            // Out of output space; incompressible input can outgrow the
            // initial estimate.
            Status::Ok | Status::BufError => output.reserve(output.capacity().max(64)),
        }
    }

    debug!(
        "compressed {} bytes into {} ({:?}, window 2^{})",
        input.len(),
        output.len(),
        format.framing,
        format.window_bits
    );
    Ok(output)
}

/// Decompress a single framed stream. Bytes past the end of the stream are
/// ignored.
pub(crate) fn inflate_all(input: &[u8], format: ResolvedFormat) -> Result<Vec<u8>> {
    let mut codec = match format.framing {
        Framing::Raw => Decompress::new_with_window_bits(false, format.window_bits),
        Framing::Zlib => Decompress::new_with_window_bits(true, format.window_bits),
        Framing::Gzip => Decompress::new_gzip(format.window_bits),
        Framing::Auto => return Err(Error::stream("auto framing must be sniffed before inflate")),
    };

    let mut output = Vec::with_capacity(input.len().saturating_mul(2).max(64));
    loop {
        let consumed = codec.total_in() as usize;
        let produced = output.len();
        let status =
            codec.decompress_vec(&input[consumed..], &mut output, FlushDecompress::Finish)?;
        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                if output.len() == output.capacity() {
                    output.reserve(output.capacity().max(64));
                } else if codec.total_in() as usize == consumed && output.len() == produced {
                    // Spare output space but no forward progress: the input
                    // ended before the stream did.
                    return Err(Error::data("truncated deflate stream"));
                }
            }
        }
    }

    debug!(
        "decompressed {} bytes into {} ({:?})",
        input.len(),
        output.len(),
        format.framing
    );
    Ok(output)
}
