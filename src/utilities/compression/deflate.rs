use super::{CompressionError, CompressionResult};
use flate2::{Compress, Compression, FlushCompress, Status};

/// Determines maximum memory needed to alloc to compress data with DEFLATE.
///
/// # Parameters
///
/// * `source_length`: Number of bytes at source.
pub fn max_alloc_for_compress_size(source_length: usize) -> usize {
    // Same bound as miniz; covers the zlib header, trailer and stored block overhead.
    let huffman_bound = 128 + source_length + source_length / 10;
    let stored_bound = 128 + source_length + ((source_length / (31 * 1024)) + 1) * 5;
    huffman_bound.max(stored_bound)
}

/// Compresses data with DEFLATE in a zlib wrapper, at the default level.
///
/// # Parameters
///
/// * `source`: Source data to compress.
/// * `destination`: Destination buffer for compressed data.
///
/// # Returns
///
/// The number of bytes written to the destination.
///
/// # Remarks
///
/// Output is deterministic; identical input always produces identical bytes.
/// Empty input produces the minimal zlib stream.
pub fn compress(source: &[u8], destination: &mut [u8]) -> CompressionResult {
    let mut compressor = Compress::new(Compression::default(), true);
    let status = compressor.compress(source, destination, FlushCompress::Finish)?;

    match status {
        Status::StreamEnd => Ok(compressor.total_out() as usize),
        // Anything else means the stream did not fit.
        Status::Ok | Status::BufError => {
            Err(CompressionError::DestinationTooSmall(destination.len()))
        }
    }
}

/// Compresses data with DEFLATE into a newly allocated buffer.
///
/// # Parameters
///
/// * `source`: Source data to compress.
pub fn compress_to_vec(source: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut destination = vec![0u8; max_alloc_for_compress_size(source.len())];
    let num_bytes = compress(source, &mut destination)?;
    destination.truncate(num_bytes);
    Ok(destination)
}
