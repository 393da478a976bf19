use core::num::NonZeroU32;
use std::sync::OnceLock;

static NUM_CORES: OnceLock<NonZeroU32> = OnceLock::new();

/// Retrieves the number of cores that the system has.
pub fn get_num_cores() -> NonZeroU32 {
    *NUM_CORES.get_or_init(|| {
        #[cfg(feature = "detect_num_cores")]
        {
            NonZeroU32::new(num_cpus::get_physical() as u32).unwrap_or(NonZeroU32::MIN)
        }

        #[cfg(not(feature = "detect_num_cores"))]
        {
            NonZeroU32::MIN
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_stable_across_calls() {
        assert_eq!(get_num_cores(), get_num_cores());
        assert!(get_num_cores().get() >= 1);
    }
}
