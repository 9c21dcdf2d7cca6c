//! Error types for GZIP stream operations.
//!
//! Every failure is reported to the caller through [`GzipError`]; nothing is
//! retried internally and no partial output is produced on error.

use thiserror::Error;

/// The main error type for GZIP stream operations.
#[derive(Debug, Error)]
pub enum GzipError {
    /// Input too short to hold the structure being read.
    #[error("Stream too short: need {needed} bytes, have {available}")]
    TooShort {
        /// Number of bytes required.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Invalid magic number at the start of the stream.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: [u8; 2],
        /// Actual magic bytes found.
        found: [u8; 2],
    },

    /// Compression method other than DEFLATE.
    #[error("Unsupported compression method: {method}")]
    UnsupportedMethod {
        /// The compression method identifier from the header.
        method: u8,
    },

    /// Reserved header flag bits set.
    #[error("Reserved header flag bits set: {flags:#04x}")]
    ReservedFlags {
        /// The full flags byte from the header.
        flags: u8,
    },

    /// Stored header checksum disagrees with the computed value.
    #[error("Header checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    HeaderCrcMismatch {
        /// Checksum value stored in the header.
        stored: u32,
        /// Checksum value computed over the header bytes.
        computed: u32,
    },

    /// Decompressed byte count disagrees with the trailer length field.
    #[error("Length mismatch: trailer records {expected} bytes, decompressed {actual}")]
    LengthMismatch {
        /// Length recorded in the trailer.
        expected: u32,
        /// Actual decompressed byte count.
        actual: u64,
    },

    /// CRC-32 of the decompressed data disagrees with the trailer.
    #[error("CRC mismatch: expected {expected:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        /// CRC value recorded in the trailer.
        expected: u32,
        /// CRC value computed from the decompressed data.
        computed: u32,
    },

    /// Failure propagated from the DEFLATE codec.
    #[error("DEFLATE codec error: {message}")]
    Codec {
        /// Description of the codec failure.
        message: String,
    },
}

/// Result type alias for GZIP stream operations.
pub type Result<T> = std::result::Result<T, GzipError>;

impl GzipError {
    /// Create a too-short error.
    pub fn too_short(needed: usize, available: usize) -> Self {
        Self::TooShort { needed, available }
    }

    /// Create an invalid magic error.
    pub fn invalid_magic(expected: [u8; 2], found: [u8; 2]) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create an unsupported method error.
    pub fn unsupported_method(method: u8) -> Self {
        Self::UnsupportedMethod { method }
    }

    /// Create a reserved flags error.
    pub fn reserved_flags(flags: u8) -> Self {
        Self::ReservedFlags { flags }
    }

    /// Create a header checksum mismatch error.
    pub fn header_crc_mismatch(stored: u32, computed: u32) -> Self {
        Self::HeaderCrcMismatch { stored, computed }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: u32, actual: u64) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a CRC mismatch error.
    pub fn crc_mismatch(expected: u32, computed: u32) -> Self {
        Self::CrcMismatch { expected, computed }
    }

    /// Create a codec error.
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }
}
