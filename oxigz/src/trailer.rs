//! GZIP trailer computation and verification.
//!
//! The trailer is the last 8 bytes of a stream: the CRC-32 of the
//! uncompressed data followed by its length modulo 2^32, both stored
//! big-endian.
//!
//! ```text
//! +---+---+---+---+---+---+---+---+
//! |     CRC32     |     ISIZE     |
//! +---+---+---+---+---+---+---+---+
//! ```

use crate::error::{GzipError, Result};
use crate::options::DecompressOptions;

/// Trailer length in bytes: CRC-32 plus modular length.
pub const TRAILER_LEN: usize = 8;

/// Encode the trailer for `original`.
///
/// The length field is the byte count truncated to 32 bits; inputs of
/// 4 GiB and beyond wrap silently.
pub fn encode(original: &[u8]) -> [u8; TRAILER_LEN] {
    let crc = crc32fast::hash(original);
    let isize = original.len() as u32;

    let mut trailer = [0u8; TRAILER_LEN];
    trailer[..4].copy_from_slice(&crc.to_be_bytes());
    trailer[4..].copy_from_slice(&isize.to_be_bytes());
    trailer
}

/// Verify `decompressed` against the trailer at the end of `input`.
///
/// The length comparison runs first when `options.verify_length` is set,
/// then the CRC-32 comparison when `options.verify_checksum` is set. The
/// decompressed count is compared at full width, so an output past 4 GiB
/// never wraps into a false match.
pub fn verify(input: &[u8], decompressed: &[u8], options: DecompressOptions) -> Result<()> {
    if input.len() < TRAILER_LEN {
        return Err(GzipError::too_short(TRAILER_LEN, input.len()));
    }
    let tail = &input[input.len() - TRAILER_LEN..];
    let expected_crc = u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]]);
    let expected_len = u32::from_be_bytes([tail[4], tail[5], tail[6], tail[7]]);

    if options.verify_length && decompressed.len() as u64 != u64::from(expected_len) {
        return Err(GzipError::length_mismatch(
            expected_len,
            decompressed.len() as u64,
        ));
    }

    if options.verify_checksum {
        let computed = crc32fast::hash(decompressed);
        if computed != expected_crc {
            return Err(GzipError::crc_mismatch(expected_crc, computed));
        }
    }

    Ok(())
}
