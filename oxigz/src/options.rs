//! Decompression verification options.

/// Controls which integrity checks run during decompression.
///
/// All checks are enabled by default and are independently toggleable.
/// The options are a pure input parameter passed by value into each call;
/// no configuration is persisted anywhere.
///
/// # Example
///
/// ```
/// use oxigz::DecompressOptions;
///
/// let relaxed = DecompressOptions::new()
///     .verify_checksum(false)
///     .verify_length(false);
/// assert!(relaxed.verify_header_checksum);
/// assert!(!relaxed.verify_checksum);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressOptions {
    /// Compare the stored header check value against the computed one when
    /// the FHCRC flag is present.
    pub verify_header_checksum: bool,
    /// Compare the decompressed byte count against the trailer length field.
    pub verify_length: bool,
    /// Compare the CRC-32 of the decompressed data against the trailer.
    pub verify_checksum: bool,
}

impl Default for DecompressOptions {
    fn default() -> Self {
        Self {
            verify_header_checksum: true,
            verify_length: true,
            verify_checksum: true,
        }
    }
}

impl DecompressOptions {
    /// Create options with every check enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the header check value is verified.
    pub fn verify_header_checksum(mut self, enabled: bool) -> Self {
        self.verify_header_checksum = enabled;
        self
    }

    /// Set whether the trailer length field is verified.
    pub fn verify_length(mut self, enabled: bool) -> Self {
        self.verify_length = enabled;
        self
    }

    /// Set whether the trailer CRC-32 is verified.
    pub fn verify_checksum(mut self, enabled: bool) -> Self {
        self.verify_checksum = enabled;
        self
    }
}
