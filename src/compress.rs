//! LZ4 block compression of serialized log groups.
//!
//! The service expects raw LZ4 blocks with no size prefix; the uncompressed
//! length travels separately in the `x-log-bodyrawsize` header.

use lz4_flex::block;

use crate::error::{CompressError, Error, Result};

/// Worst-case size of an LZ4 block for `input_len` bytes of input.
pub fn compress_bound(input_len: usize) -> usize {
    block::get_maximum_output_size(input_len)
}

/// Compresses `data` into a single LZ4 block.
pub fn compress_lz4(data: &[u8]) -> std::result::Result<Vec<u8>, CompressError> {
    if data.is_empty() {
        return Err(CompressError::EmptyInput);
    }
    let mut buf = vec![0u8; compress_bound(data.len())];
    let n = block::compress_into(data, &mut buf).map_err(CompressError::Lz4)?;
    trace!("lz4 compressed {} bytes into {} (bound {})", data.len(), n, buf.len());
    buf.truncate(n);
    Ok(buf)
}

/// Each input byte of an LZ4 block expands to at most this many output bytes.
const MAX_EXPANSION_RATIO: usize = 255;

/// Decompresses one LZ4 block that is expected to expand to `raw_size` bytes.
///
/// The output buffer is allocated up front, so a `raw_size` no block of
/// `data.len()` bytes could expand to is rejected before allocating.
pub fn decompress_lz4(data: &[u8], raw_size: usize) -> Result<Vec<u8>> {
    let limit = data.len().saturating_mul(MAX_EXPANSION_RATIO);
    if raw_size > limit {
        return Err(Error::RawSizeTooLarge { size: raw_size, limit });
    }
    let out = block::decompress(data, raw_size).map_err(Error::Decompress)?;
    if out.len() != raw_size {
        return Err(Error::RawSizeMismatch { expected: raw_size, actual: out.len() });
    }
    Ok(out)
}
