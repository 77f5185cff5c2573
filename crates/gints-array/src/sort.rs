//! Direction-parameterized integer sort.
//!
//! Both array sort entry points funnel into [`sort_ints`]. The sort is
//! unstable: equal integers are indistinguishable, so stability has no
//! observable effect.

use gints_core::SortOrder;

/// Sort `values` in place in the given direction.
pub fn sort_ints(values: &mut [i32], order: SortOrder) {
    values.sort_unstable_by(|a, b| order.compare(a, b));
}

/// Whether `values` is already ordered in the given direction.
pub fn is_sorted(values: &[i32], order: SortOrder) -> bool {
    values
        .windows(2)
        .all(|w| order.compare(&w[0], &w[1]).is_le())
}
