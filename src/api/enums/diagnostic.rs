use crate::api::traits::HasSource;
use crate::utilities::encoding::utf8::EncodingError;
use thiserror::Error;

/// A text which could not be measured and was left out of the ranked report.
///
/// Diagnostics are reported separately from the ranked report so that no
/// input is ever dropped silently.
#[derive(Debug, Error)]
pub enum Diagnostic {
    /// The text encodes to zero bytes, so its compression ratios are undefined.
    #[error("{input}: skipped, text is empty so its compression ratio is undefined")]
    EmptyInput { input: String },

    /// The raw bytes of the input are not valid UTF-8.
    #[error("{input}: skipped, {error}")]
    EncodingFailure {
        input: String,
        #[source]
        error: EncodingError,
    },

    /// The input could not be read from disk.
    #[error("{input}: skipped, failed to read file: {error}")]
    ReadFailure {
        input: String,
        #[source]
        error: std::io::Error,
    },
}

impl Diagnostic {
    /// Returns true if this diagnostic is for an input with no content.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Diagnostic::EmptyInput { .. })
    }
}

impl HasSource for Diagnostic {
    fn source(&self) -> &str {
        match self {
            Diagnostic::EmptyInput { input }
            | Diagnostic::EncodingFailure { input, .. }
            | Diagnostic::ReadFailure { input, .. } => input,
        }
    }
}
