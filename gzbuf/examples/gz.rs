//! Compress a buffer into each framing and round-trip it.

use gzbuf::{CompressionLevel, compress, decompress, is_gzipped};

fn main() -> gzbuf::Result<()> {
    let text: Vec<u8> = b"the quick brown fox jumps over the lazy dog. "
        .iter()
        .cycle()
        .take(4096)
        .copied()
        .collect();

    for (name, wbits) in [("zlib", 0), ("gzip", 31), ("raw deflate", -15)] {
        let compressed = compress(&text, CompressionLevel::Best, wbits)?;
        let restored = decompress(&compressed, wbits)?;
        println!(
            "{name:12} {} -> {} bytes, gzip magic: {}, round-trip ok: {}",
            text.len(),
            compressed.len(),
            is_gzipped(&compressed),
            restored == text,
        );
    }

    Ok(())
}
