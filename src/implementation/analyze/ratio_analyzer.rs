use crate::{
    api::{input_text::InputText, result_record::ResultRecord, traits::HasSource},
    utilities::{
        baseline::random_baseline::generate_baseline,
        compression::{compressed_len, CompressionError},
        encoding::utf8::{char_count, encode},
    },
};
use core::num::NonZeroUsize;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while measuring a single text.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The text encodes to zero bytes, so no ratio can be formed.
    #[error("Text '{0}' is empty, its compression ratio is undefined")]
    EmptyInput(String),

    /// The compressor failed. This is not a data problem.
    #[error(transparent)]
    Compression(#[from] CompressionError),
}

/// Measures how much structure a text has, relative to random data of the same length.
///
/// # Arguments
///
/// * `input` - The text to measure.
/// * `rng` - Source of randomness for the baseline.
///
/// # Remarks
///
/// The baseline has as many characters as the text, but both ratios are
/// divided by the text's byte length. For non-ASCII text the baseline is
/// therefore shorter in bytes than the text itself.
pub fn analyze_text<R: Rng + ?Sized>(
    input: &InputText,
    rng: &mut R,
) -> Result<ResultRecord, AnalysisError> {
    let encoded = encode(input.text());
    let buffer_length = NonZeroUsize::new(encoded.len())
        .ok_or_else(|| AnalysisError::EmptyInput(input.source().to_string()))?;

    let baseline = generate_baseline(rng, char_count(input.text()));
    let compressed_length = compressed_len(encoded)?;
    let random_compressed_length = compressed_len(encode(&baseline))?;

    let record = ResultRecord::from_lengths(
        input.source().to_string(),
        buffer_length,
        compressed_length,
        random_compressed_length,
    );

    debug!(
        source = record.source(),
        buffer_length = record.buffer_length(),
        compressed_length,
        random_compressed_length,
        "Analyzed text"
    );
    Ok(record)
}
