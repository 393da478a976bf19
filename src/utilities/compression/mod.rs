// Compression modules
pub mod deflate;

use thiserror::Error;

/// A result type around compression functions..
/// Either a success code (number of bytes written), or an error code.
pub type CompressionResult = Result<usize, CompressionError>;

/// Represents an error returned from the compression APIs.
///
/// # Remarks
///
/// Compression never fails for valid input when the destination is sized
/// with [`deflate::max_alloc_for_compress_size`]. Any of these errors
/// indicates a problem with the environment rather than with the data.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// The destination buffer cannot hold the whole compressed stream.
    #[error("Destination buffer of {0} bytes is too small for the compressed stream")]
    DestinationTooSmall(usize),

    /// The compression backend reported an error.
    #[error("Compression backend failed: {0}")]
    Backend(#[from] flate2::CompressError),
}

/// Compresses data, returning only the compressed size.
///
/// # Parameters
///
/// * `source`: Source data to compress.
pub fn compressed_len(source: &[u8]) -> CompressionResult {
    deflate::compress_to_vec(source).map(|compressed| compressed.len())
}
