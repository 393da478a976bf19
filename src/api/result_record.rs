use crate::api::traits::{HasSource, HasSpread};
use core::num::NonZeroUsize;

/// The measurement of a single text against its random baseline.
///
/// # Remarks
///
/// Records are value objects; once built they are never modified.
/// A record can only exist for a text with a non-empty encoding, hence all of
/// its ratios are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    source: String,
    buffer_length: usize,
    compressed_length: usize,
    random_compressed_length: usize,
    compressed_ratio: f64,
    random_compressed_ratio: f64,
    spread: f64,
}

impl ResultRecord {
    /// Builds a record from the measured byte lengths.
    ///
    /// # Arguments
    ///
    /// * `source` - Identifier of the measured text.
    /// * `buffer_length` - Byte length of the text's UTF-8 encoding.
    /// * `compressed_length` - Byte length of the compressed text.
    /// * `random_compressed_length` - Byte length of the compressed random baseline.
    pub fn from_lengths(
        source: String,
        buffer_length: NonZeroUsize,
        compressed_length: usize,
        random_compressed_length: usize,
    ) -> Self {
        let denominator = buffer_length.get() as f64;
        let compressed_ratio = compressed_length as f64 / denominator;
        let random_compressed_ratio = random_compressed_length as f64 / denominator;

        Self {
            source,
            buffer_length: buffer_length.get(),
            compressed_length,
            random_compressed_length,
            compressed_ratio,
            random_compressed_ratio,
            spread: compressed_ratio - random_compressed_ratio,
        }
    }

    /// Byte length of the UTF-8 encoding of the text.
    pub fn buffer_length(&self) -> usize {
        self.buffer_length
    }

    /// Byte length of the compressed text.
    pub fn compressed_length(&self) -> usize {
        self.compressed_length
    }

    /// Byte length of the compressed random baseline.
    pub fn random_compressed_length(&self) -> usize {
        self.random_compressed_length
    }

    /// Compressed length of the text divided by [`Self::buffer_length`].
    pub fn compressed_ratio(&self) -> f64 {
        self.compressed_ratio
    }

    /// Compressed length of the random baseline divided by [`Self::buffer_length`].
    pub fn random_compressed_ratio(&self) -> f64 {
        self.random_compressed_ratio
    }
}

impl HasSource for ResultRecord {
    fn source(&self) -> &str {
        &self.source
    }
}

impl HasSpread for ResultRecord {
    fn spread(&self) -> f64 {
        self.spread
    }
}
