/// Indicates an item has a source identifier, usually a file name.
pub mod has_source;
/// Indicates an item has a spread, used for ranking.
pub mod has_spread;

/// Prelude with re-exports
pub use has_source::*;
pub use has_spread::*;
