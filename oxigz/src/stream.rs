//! Top-level GZIP stream operations.
//!
//! [`compress`] and [`decompress`] compose the header codec, the external
//! DEFLATE codec, and the trailer codec into single-pass operations over
//! fully materialized byte buffers. Each call is all-or-nothing: the first
//! validation failure aborts the call and no partial output is returned.

use crate::error::{GzipError, Result};
use crate::header::{self, GzipHeader};
use crate::options::DecompressOptions;
use crate::trailer;
use miniz_oxide::deflate::compress_to_vec;
use miniz_oxide::inflate::decompress_to_vec;

/// Compress `data` into a GZIP stream.
///
/// Emits the minimal 10-byte header, the raw DEFLATE payload at level 0,
/// and the CRC-32/length trailer. Use [`compress_with_level`] to trade
/// speed for ratio.
///
/// # Example
///
/// ```
/// use oxigz::{compress, decompress, DecompressOptions};
///
/// let stream = compress(b"Hello").unwrap();
/// let restored = decompress(&stream, DecompressOptions::default()).unwrap();
/// assert_eq!(restored, b"Hello");
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with_level(data, 0)
}

/// Compress `data` into a GZIP stream at the given DEFLATE level (0-9).
///
/// Levels above 9 are clamped to 9. Level 0 emits stored blocks.
pub fn compress_with_level(data: &[u8], level: u8) -> Result<Vec<u8>> {
    let payload = compress_to_vec(data, level.min(9));

    let mut output =
        Vec::with_capacity(header::FIXED_HEADER_LEN + payload.len() + trailer::TRAILER_LEN);
    output.extend_from_slice(&header::encode_minimal());
    output.extend_from_slice(&payload);
    output.extend_from_slice(&trailer::encode(data));
    Ok(output)
}

/// Decompress a single-member GZIP stream.
///
/// Validates the header, inflates the payload through the external DEFLATE
/// codec, and checks the trailer according to `options`.
///
/// # Errors
///
/// Header validation failures ([`GzipError::TooShort`],
/// [`GzipError::InvalidMagic`], [`GzipError::UnsupportedMethod`],
/// [`GzipError::ReservedFlags`], [`GzipError::HeaderCrcMismatch`]),
/// trailer failures ([`GzipError::LengthMismatch`],
/// [`GzipError::CrcMismatch`]), or [`GzipError::Codec`] when the DEFLATE
/// payload itself is malformed.
pub fn decompress(data: &[u8], options: DecompressOptions) -> Result<Vec<u8>> {
    let header = GzipHeader::parse(data, options)?;

    let payload = &data[header.length..data.len() - trailer::TRAILER_LEN];
    let decompressed =
        decompress_to_vec(payload).map_err(|e| GzipError::codec(e.to_string()))?;

    trailer::verify(data, &decompressed, options)?;
    Ok(decompressed)
}

/// Validate a GZIP header without decompressing the payload.
///
/// Runs the same checks as [`decompress`] up to the start of the payload,
/// including the trailer-room check, and returns the parsed header.
pub fn validate(data: &[u8], options: DecompressOptions) -> Result<GzipHeader> {
    GzipHeader::parse(data, options)
}
