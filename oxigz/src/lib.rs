//! # oxigz
//!
//! GZIP container codec for fully materialized byte buffers.
//!
//! This crate frames DEFLATE payloads with a GZIP header, appends an
//! integrity trailer, and validates incoming streams byte by byte. The
//! DEFLATE algorithm itself and the CRC-32 computation are consumed as
//! external codecs (`miniz_oxide` and `crc32fast`); the container layer -
//! header parsing with its flag-driven optional fields, trailer checks, and
//! the rejection policy for malformed streams - lives here.
//!
//! ## Stream layout
//!
//! ```text
//! +---+---+---+---+---+---+---+---+---+---+=======+===========+---+---+
//! | 1F| 8B| CM|FLG|     MTIME     |XFL| OS| extra | compressed| CRC|LEN|
//! +---+---+---+---+---+---+---+---+---+---+=======+===========+---+---+
//!   fixed 10-byte header            optional fields  DEFLATE    trailer
//! ```
//!
//! Only single-member streams are handled, and every operation works on a
//! complete in-memory buffer; there is no streaming interface. All
//! operations are pure functions over immutable input slices, so they are
//! safe to call concurrently without locking.
//!
//! ## Example
//!
//! ```rust
//! use oxigz::{compress, decompress, DecompressOptions};
//!
//! let data = b"Hello, World!";
//! let stream = compress(data).unwrap();
//! let restored = decompress(&stream, DecompressOptions::default()).unwrap();
//! assert_eq!(restored, data);
//! ```
//!
//! Verification of the trailer checksum, trailer length, and optional
//! header checksum can each be disabled through [`DecompressOptions`];
//! header validation itself always runs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod header;
pub mod options;
pub mod stream;
pub mod trailer;

// Re-exports for convenience
pub use error::{GzipError, Result};
pub use header::{GzipHeader, is_gzip};
pub use options::DecompressOptions;
pub use stream::{compress, compress_with_level, decompress, validate};
