//! Benchmark workloads for the gints containers.
//!
//! Provides pre-built inputs shared by the criterion benches:
//!
//! - [`small_profile`] / [`large_profile`]: seeded value streams
//! - [`filled_array`]: an [`IntArray`] pre-loaded with a profile
//! - [`removal_positions`]: a deterministic sequence of in-range positions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gints_array::IntArray;
use gints_core::ArrayConfig;
use gints_test_utils::{random_values, random_values_below};

/// Element count of the small profile.
pub const SMALL: usize = 1_000;

/// Element count of the large profile.
pub const LARGE: usize = 100_000;

/// 1K seeded values.
pub fn small_profile(seed: u64) -> Vec<i32> {
    random_values(SMALL, seed)
}

/// 100K seeded values.
pub fn large_profile(seed: u64) -> Vec<i32> {
    random_values(LARGE, seed)
}

/// An array holding `values`, built with the given configuration.
///
/// # Panics
///
/// Panics if `config` fails validation.
pub fn filled_array(values: &[i32], config: &ArrayConfig) -> IntArray {
    let mut array = IntArray::with_config(config).expect("benchmark config must be valid");
    array.append_many(values);
    array
}

/// `n` positions, each valid for an array that shrinks by one per removal
/// starting from `len` elements.
pub fn removal_positions(len: usize, n: usize, seed: u64) -> Vec<usize> {
    let n = n.min(len);
    random_values_below(n, u32::MAX, seed)
        .into_iter()
        .enumerate()
        .map(|(i, r)| (r as u32 as usize) % (len - i))
        .collect()
}
