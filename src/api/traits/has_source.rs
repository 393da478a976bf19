/// Represents an item from which a source identifier can be extracted.
///
/// The identifier is a stable, human readable name for the unit of input,
/// such as a file name. It is carried from the input text onto its result.
pub trait HasSource {
    /// The identifier of the text this item belongs to.
    fn source(&self) -> &str;
}
