//! # Book Randomness
//! Estimates how much structure (non-randomness) a text contains by comparing
//! how well DEFLATE shrinks the text against how well it shrinks a random
//! string of the same length, then ranks texts by the difference.

/// Public High Level API
pub mod api {
    pub mod enums {
        /// Per-input problems that exclude a text from the ranked report.
        pub mod diagnostic;
    }

    /// Settings that control how a batch of texts is analyzed.
    pub mod analysis_settings;

    /// A named text supplied for analysis.
    pub mod input_text;

    /// The measurement produced for a single text.
    pub mod result_record;

    /// Result records ordered by spread.
    pub mod ranked_report;

    pub mod traits;
}

/// This module contains the measurement pipeline itself.
pub mod implementation {
    pub mod analyze {
        /// Measures a single text against its random baseline.
        pub mod ratio_analyzer;

        /// Measures and ranks a whole batch of texts.
        pub mod batch;
    }
}

pub mod utilities {

    pub mod arrange {
        /// Stable ordering of items by their spread.
        pub mod sort_by_spread;
    }

    pub mod baseline {
        /// Random strings used as the incompressible reference.
        pub mod random_baseline;
    }

    pub mod compression;

    pub mod encoding {
        /// Conversion between text and its canonical byte representation.
        pub mod utf8;
    }

    pub mod io {
        /// Loads the texts of a folder.
        pub mod file_finder;
    }

    pub mod report {
        /// Renders ranked reports as comma separated values.
        pub mod csv_writer;
    }

    pub mod system_info;
}

/// Commonly used items, re-exported.
pub mod prelude {
    pub use crate::api::analysis_settings::*;
    pub use crate::api::enums::diagnostic::*;
    pub use crate::api::input_text::*;
    pub use crate::api::ranked_report::*;
    pub use crate::api::result_record::*;
    pub use crate::api::traits::*;
    pub use crate::implementation::analyze::batch::*;
    pub use crate::implementation::analyze::ratio_analyzer::*;
}
