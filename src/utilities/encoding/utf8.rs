use thiserror::Error;

/// An error occurred while turning raw bytes into text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The bytes are not valid UTF-8.
    #[error("invalid UTF-8 sequence after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Returns the canonical byte representation (UTF-8) of a text.
pub fn encode(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Returns the number of characters (Unicode scalar values) in a text.
///
/// This differs from the encoded length for any text outside of ASCII.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Decodes raw bytes, such as the contents of a file, as UTF-8 text.
///
/// # Arguments
///
/// * `bytes` - The raw bytes. Reused as the backing storage of the text on success.
pub fn decode(bytes: Vec<u8>) -> Result<String, EncodingError> {
    String::from_utf8(bytes).map_err(|e| EncodingError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", 0, 0)]
    #[case::ascii("hello", 5, 5)]
    #[case::two_byte("héllo", 6, 5)]
    #[case::three_byte("日本語", 9, 3)]
    #[case::four_byte("🦀🦀", 8, 2)]
    fn byte_and_char_lengths_differ_outside_ascii(
        #[case] text: &str,
        #[case] bytes: usize,
        #[case] chars: usize,
    ) {
        assert_eq!(encode(text).len(), bytes);
        assert_eq!(char_count(text), chars);
    }

    #[test]
    fn decodes_valid_utf8() {
        let text = decode("Grüße".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "Grüße");
    }

    #[test]
    fn rejects_invalid_utf8_with_offset() {
        let bytes = vec![b'o', b'k', 0xFF, b'!'];
        assert_eq!(
            decode(bytes),
            Err(EncodingError::InvalidUtf8 { valid_up_to: 2 })
        );
    }
}
