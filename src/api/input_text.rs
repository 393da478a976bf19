use crate::api::traits::HasSource;
use derive_new::new;

/// Represents a text that will be measured.
///
/// # Remarks
///
/// Input texts are immutable once loaded. The analyzer only reads them and
/// they are discarded once their [`ResultRecord`] has been produced.
///
/// [`ResultRecord`]: crate::api::result_record::ResultRecord
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Stable human readable identifier, e.g. a file name
    source: String,

    /// Full decoded contents of the input
    text: String,
}

impl InputText {
    /// The full decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the input, returning its identifier and text.
    pub fn into_parts(self) -> (String, String) {
        (self.source, self.text)
    }
}

impl HasSource for InputText {
    fn source(&self) -> &str {
        &self.source
    }
}
