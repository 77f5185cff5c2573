//! Reusable integer fixtures.
//!
//! - [`SAMPLE_VALS`]: the three-element sample used across the scenario tests.
//! - [`random_values`]: seeded, reproducible input for stress tests and benches.
//! - [`assert_same_multiset`] / [`assert_reverse_of`]: order-insensitive and
//!   direction checks that do not depend on any container type.

use gints_core::SortOrder;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `[0, 1, 2]`: the canonical sample.
pub const SAMPLE_VALS: [i32; 3] = [0, 1, 2];

/// Generate `n` pseudo-random integers from `seed`.
///
/// The same seed always yields the same sequence, on every platform.
pub fn random_values(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32() as i32).collect()
}

/// Generate `n` pseudo-random integers in `0..bound` from `seed`.
///
/// # Panics
///
/// Panics if `bound` is 0.
pub fn random_values_below(n: usize, bound: u32, seed: u64) -> Vec<i32> {
    assert!(bound > 0, "bound must be > 0");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| (rng.next_u32() % bound) as i32).collect()
}

/// A sorted copy of `values` in the given direction.
pub fn sorted_copy(values: &[i32], order: SortOrder) -> Vec<i32> {
    let mut out = values.to_vec();
    out.sort_unstable_by(|a, b| order.compare(a, b));
    out
}

/// Assert that `a` and `b` hold the same elements, ignoring order.
pub fn assert_same_multiset(a: &[i32], b: &[i32]) {
    assert_eq!(
        sorted_copy(a, SortOrder::Ascending),
        sorted_copy(b, SortOrder::Ascending),
        "multisets differ: {a:?} vs {b:?}"
    );
}

/// Assert that `a` is exactly `b` reversed.
pub fn assert_reverse_of(a: &[i32], b: &[i32]) {
    let reversed: Vec<i32> = b.iter().rev().copied().collect();
    assert_eq!(a, reversed.as_slice(), "{a:?} is not the reverse of {b:?}");
}
