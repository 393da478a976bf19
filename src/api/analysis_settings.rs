use crate::utilities::system_info::get_num_cores;
use core::num::NonZeroU32;

/// The maximum number of threads the user is allowed to specify
pub const MAX_NUM_THREADS: u32 = 1024;

/// Controls how a batch of texts is analyzed.
///
/// # Remarks
///
/// The compression algorithm, its level and the random alphabet are fixed;
/// only execution details can be configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Maximum number of threads allowed.
    ///
    /// Values above 1 only take effect with the `parallel` feature.
    /// The ranked output does not depend on this value.
    pub max_num_threads: NonZeroU32,
}

impl AnalysisSettings {
    /// Creates a new `AnalysisSettings` with default values.
    pub fn new() -> Self {
        AnalysisSettings {
            max_num_threads: get_num_cores(),
        }
    }

    /// Creates settings which analyze every text on the calling thread.
    pub fn single_threaded() -> Self {
        AnalysisSettings {
            max_num_threads: NonZeroU32::MIN,
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range.
    pub fn sanitize(&mut self) {
        if self.max_num_threads.get() > MAX_NUM_THREADS {
            // MAX_NUM_THREADS is non-zero
            self.max_num_threads = NonZeroU32::new(MAX_NUM_THREADS).unwrap_or(NonZeroU32::MIN);
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self::new()
    }
}
