//! Growable, exclusively owned array of `i32`.
//!
//! [`IntArray`] keeps a count of valid elements and a separately managed
//! capacity that grows under a [`GrowthPolicy`]. Every mutator returns
//! `&mut Self` so calls chain. Index arguments are checked against the
//! element count, never the capacity: out-of-range removals are no-ops and
//! out-of-range insertions are clamped to the end.

use std::fmt;

use gints_core::{ArrayConfig, ConfigError, GrowthPolicy, IntReader, IntsError, SortOrder};

use crate::ints::Ints;
use crate::sort;

/// A mutable, resizable array of `i32`.
///
/// Invariants:
/// - `len() <= capacity()` in every reachable state.
/// - No buffer is allocated while `capacity() == 0`.
/// - Capacity only changes through growth, [`reset`](IntArray::reset), or
///   an ownership transfer ([`freeze`](IntArray::freeze),
///   [`take_ints`](IntArray::take_ints), [`take_vec`](IntArray::take_vec)).
#[derive(Clone, Default)]
pub struct IntArray {
    /// Backing storage. `data.len()` is the element count.
    data: Vec<i32>,
    growth: GrowthPolicy,
}

impl IntArray {
    /// Create an empty array. Nothing is allocated until the first insertion.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            growth: GrowthPolicy::default(),
        }
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// The element count stays 0; the reservation only avoids reallocation
    /// for the first `capacity` insertions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            growth: GrowthPolicy::default(),
        }
    }

    /// Create an empty array from a validated config.
    pub fn with_config(config: &ArrayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            data: Vec::with_capacity(config.initial_capacity),
            growth: config.growth,
        })
    }

    /// The growth policy applied when an insertion does not fit.
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The valid elements.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// The valid elements, mutably. The count cannot change through this view.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.data.as_slice().get(index).copied()
    }

    /// First element.
    pub fn first(&self) -> Option<i32> {
        self.data.first().copied()
    }

    /// Last element.
    pub fn last(&self) -> Option<i32> {
        self.data.last().copied()
    }

    /// Iterate over the valid elements.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    /// Make room for `additional` more elements under the growth policy.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows. Use
    /// [`try_reserve`](IntArray::try_reserve) to handle that case.
    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        if let Err(e) = self.try_reserve(additional) {
            capacity_overflow(e);
        }
        self
    }

    /// Make room for `additional` more elements, reporting overflow.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), IntsError> {
        let len = self.data.len();
        let required = len
            .checked_add(additional)
            .ok_or(IntsError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        let current = self.data.capacity();
        let target = self
            .growth
            .next_capacity(current, required)
            .ok_or(IntsError::CapacityOverflow {
                requested: required,
            })?;
        if target > current {
            self.data
                .try_reserve_exact(target - len)
                .map_err(|_| IntsError::CapacityOverflow { requested: target })?;
        }
        Ok(())
    }

    /// Append one element at the end.
    pub fn append(&mut self, value: i32) -> &mut Self {
        self.reserve(1);
        self.data.push(value);
        self
    }

    /// Append `values` in order, growing capacity at most once.
    pub fn append_many(&mut self, values: &[i32]) -> &mut Self {
        if !values.is_empty() {
            self.reserve(values.len());
            self.data.extend_from_slice(values);
        }
        self
    }

    /// Insert one element at index 0.
    pub fn prepend(&mut self, value: i32) -> &mut Self {
        self.insert(0, value)
    }

    /// Insert `values` in order at the front.
    pub fn prepend_many(&mut self, values: &[i32]) -> &mut Self {
        self.insert_many(0, values)
    }

    /// Insert one element at `position`, shifting the tail up.
    ///
    /// `position == len()` appends; a larger position is clamped to `len()`.
    pub fn insert(&mut self, position: usize, value: i32) -> &mut Self {
        let position = position.min(self.data.len());
        self.reserve(1);
        self.data.insert(position, value);
        self
    }

    /// Insert `values` in order starting at `position`.
    ///
    /// Same clamping as [`insert`](IntArray::insert). An empty slice is a no-op.
    pub fn insert_many(&mut self, position: usize, values: &[i32]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let position = position.min(self.data.len());
        self.reserve(values.len());
        self.data.splice(position..position, values.iter().copied());
        self
    }

    /// Set the element count directly.
    ///
    /// Growing zero-fills the newly exposed slots; shrinking discards the
    /// tail but keeps the capacity.
    pub fn set_count(&mut self, count: usize) -> &mut Self {
        let len = self.data.len();
        if count > len {
            self.reserve(count - len);
            self.data.resize(count, 0);
        } else {
            self.data.truncate(count);
        }
        self
    }

    /// Drop every element, keeping the capacity.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Remove the element at `position`, preserving the order of the rest.
    ///
    /// Out of range is a no-op.
    pub fn remove_at(&mut self, position: usize) -> &mut Self {
        if position < self.data.len() {
            self.data.remove(position);
        }
        self
    }

    /// Remove the element at `position` by moving the last element into it.
    ///
    /// O(1), does not preserve order. Out of range is a no-op.
    pub fn remove_at_fast(&mut self, position: usize) -> &mut Self {
        if position < self.data.len() {
            self.data.swap_remove(position);
        }
        self
    }

    /// Remove up to `count` elements starting at `position`, preserving order.
    ///
    /// Removes `min(count, len() - position)` elements. A no-op when
    /// `position >= len()` or `count == 0`.
    pub fn remove_range(&mut self, position: usize, count: usize) -> &mut Self {
        let len = self.data.len();
        if position < len && count > 0 {
            let end = position + count.min(len - position);
            self.data.drain(position..end);
        }
        self
    }

    /// Sort the valid elements in the given direction.
    pub fn sort_by_order(&mut self, order: SortOrder) -> &mut Self {
        sort::sort_ints(&mut self.data, order);
        self
    }

    /// Sort the valid elements smallest first.
    pub fn sort_ascending(&mut self) -> &mut Self {
        self.sort_by_order(SortOrder::Ascending)
    }

    /// Sort the valid elements largest first.
    pub fn sort_descending(&mut self) -> &mut Self {
        self.sort_by_order(SortOrder::Descending)
    }

    /// Release the buffer and return to the unallocated state.
    pub fn reset(&mut self) -> &mut Self {
        self.data = Vec::new();
        self
    }

    /// Move the buffer out, leaving this array empty and unallocated.
    ///
    /// Returns `None` (and leaves the array untouched) if there are no
    /// elements to hand back.
    pub fn take_vec(&mut self) -> Option<Vec<i32>> {
        if self.data.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.data))
    }

    /// Move the buffer into a new [`Ints`], leaving this array empty.
    ///
    /// The buffer is moved, not copied. Returns `None` (and leaves the
    /// array untouched) if the array is empty.
    pub fn take_ints(&mut self) -> Option<Ints> {
        self.take_vec().map(Ints::from_vec)
    }

    /// Consume the array and hand its buffer to the caller.
    ///
    /// Returns `None` if the array held no elements.
    pub fn into_vec(mut self) -> Option<Vec<i32>> {
        self.take_vec()
    }

    /// Consume the array, moving its buffer into a new [`Ints`].
    ///
    /// Returns `None` if the array held no elements.
    pub fn freeze(mut self) -> Option<Ints> {
        self.take_ints()
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow(e: IntsError) -> ! {
    panic!("{e}")
}

impl IntReader for IntArray {
    fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

impl fmt::Debug for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntArray")
            .field("count", &self.data.len())
            .field("capacity", &self.data.capacity())
            .field("data", &self.data)
            .finish()
    }
}

impl PartialEq for IntArray {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for IntArray {}

impl AsRef<[i32]> for IntArray {
    fn as_ref(&self) -> &[i32] {
        &self.data
    }
}

impl From<Vec<i32>> for IntArray {
    fn from(data: Vec<i32>) -> Self {
        Self {
            data,
            growth: GrowthPolicy::default(),
        }
    }
}

impl From<&[i32]> for IntArray {
    fn from(values: &[i32]) -> Self {
        Self::from(values.to_vec())
    }
}

impl FromIterator<i32> for IntArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<i32> for IntArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a> IntoIterator for &'a IntArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(a: &IntArray) {
        assert!(a.len() <= a.capacity(), "{a:?}");
    }

    #[test]
    fn new_is_unallocated() {
        let a = IntArray::new();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert!(a.is_empty());
    }

    #[test]
    fn with_capacity_reserves_without_count() {
        let a = IntArray::with_capacity(3);
        assert_eq!(a.len(), 0);
        assert!(a.capacity() >= 3);
    }

    #[test]
    fn with_config_rejects_bad_factor() {
        let config = ArrayConfig::new(4).with_growth(GrowthPolicy::Factor(1));
        assert_eq!(
            IntArray::with_config(&config),
            Err(ConfigError::InvalidGrowthFactor { factor: 1 })
        );
    }

    #[test]
    fn with_config_uses_growth_policy() {
        let config = ArrayConfig::new(2).with_growth(GrowthPolicy::Factor(4));
        let mut a = IntArray::with_config(&config).unwrap();
        assert_eq!(a.growth(), GrowthPolicy::Factor(4));
        a.append_many(&[1, 2, 3]);
        assert!(a.capacity() >= 8);
        assert_invariant(&a);
    }

    #[test]
    fn append_returns_same_array() {
        let mut a = IntArray::new();
        let p: *const IntArray = &a;
        let q: *const IntArray = a.append(7);
        assert_eq!(p, q);
        assert_eq!(a.last(), Some(7));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn first_growth_uses_minimum_capacity() {
        let mut a = IntArray::new();
        a.append(1);
        assert!(a.capacity() >= ArrayConfig::MIN_GROWTH_CAPACITY);
    }

    #[test]
    fn append_many_copies_in_order() {
        let mut a = IntArray::with_capacity(3);
        a.append_many(&[0, 1, 2]);
        assert_eq!(a.as_slice(), &[0, 1, 2]);
        a.append_many(&[]);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn prepend_shifts_everything_up() {
        let mut a = IntArray::from(vec![0, 1]);
        a.prepend(2);
        assert_eq!(a.as_slice(), &[2, 0, 1]);
        a.prepend_many(&[8, 9]);
        assert_eq!(a.as_slice(), &[8, 9, 2, 0, 1]);
    }

    #[test]
    fn insert_at_positions() {
        let mut a = IntArray::new();
        a.insert(0, 0).insert(0, 1);
        assert_eq!(a.as_slice(), &[1, 0]);
        // position == count behaves like append
        a.insert(2, 2);
        assert_eq!(a.as_slice(), &[1, 0, 2]);
        a.insert_many(1, &[5, 6]);
        assert_eq!(a.as_slice(), &[1, 5, 6, 0, 2]);
    }

    #[test]
    fn insert_past_end_is_clamped() {
        let mut a = IntArray::from(vec![1]);
        a.insert(10, 2);
        assert_eq!(a.as_slice(), &[1, 2]);
        a.insert_many(99, &[3, 4]);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn set_count_truncates_and_zero_extends() {
        let mut a = IntArray::from(vec![1, 0, 2]);
        a.set_count(2);
        assert_eq!(a.as_slice(), &[1, 0]);
        let cap = a.capacity();
        a.set_count(4);
        assert_eq!(a.as_slice(), &[1, 0, 0, 0]);
        a.set_count(0);
        assert!(a.is_empty());
        assert!(a.capacity() >= cap);
    }

    #[test]
    fn set_count_zero_fills_over_stale_slots() {
        let mut a = IntArray::from(vec![7, 7, 7]);
        a.set_count(1).set_count(3);
        assert_eq!(a.as_slice(), &[7, 0, 0]);
    }

    #[test]
    fn remove_at_preserves_order() {
        let mut a = IntArray::from(vec![1, 2, 3, 4]);
        a.remove_at(1);
        assert_eq!(a.as_slice(), &[1, 3, 4]);
        a.remove_at(3);
        assert_eq!(a.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn remove_at_fast_moves_last_into_hole() {
        let mut a = IntArray::from(vec![2, 1, 0]);
        a.remove_at_fast(0);
        assert_eq!(a.as_slice(), &[0, 1]);
        a.remove_at_fast(5);
        assert_eq!(a.len(), 2);
        a.remove_at_fast(1);
        assert_eq!(a.as_slice(), &[0]);
    }

    #[test]
    fn remove_range_clamps() {
        let mut a = IntArray::from(vec![0, 1]);
        a.remove_range(1, 2);
        assert_eq!(a.as_slice(), &[0]);
        a.remove_range(1, 2);
        assert_eq!(a.as_slice(), &[0]);
        a.remove_range(0, 0);
        assert_eq!(a.as_slice(), &[0]);
        a.remove_range(0, 1);
        assert!(a.is_empty());
    }

    #[test]
    fn remove_range_usize_max_count_does_not_overflow() {
        let mut a = IntArray::from(vec![1, 2, 3]);
        a.remove_range(1, usize::MAX);
        assert_eq!(a.as_slice(), &[1]);
    }

    #[test]
    fn sort_both_directions() {
        let mut a = IntArray::from(vec![2, 0, 1]);
        a.sort_ascending();
        assert_eq!(a.as_slice(), &[0, 1, 2]);
        a.sort_descending();
        assert_eq!(a.as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn sort_handles_extremes() {
        let mut a = IntArray::from(vec![0, i32::MAX, i32::MIN, -1]);
        a.sort_ascending();
        assert_eq!(a.as_slice(), &[i32::MIN, -1, 0, i32::MAX]);
    }

    #[test]
    fn reset_releases_buffer() {
        let mut a = IntArray::from(vec![1, 2]);
        a.reset();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn into_vec_on_empty_is_none() {
        assert_eq!(IntArray::with_capacity(0).into_vec(), None);
        assert_eq!(IntArray::with_capacity(8).into_vec(), None);
    }

    #[test]
    fn into_vec_hands_back_contents() {
        let mut a = IntArray::new();
        a.append(4).append(5);
        assert_eq!(a.into_vec(), Some(vec![4, 5]));
    }

    #[test]
    fn take_ints_moves_buffer_and_empties_source() {
        let mut a = IntArray::with_capacity(3);
        a.append_many(&[0, 1, 2]);
        let ptr = a.as_slice().as_ptr();
        let ints = a.take_ints().unwrap();
        assert_eq!(ints.as_slice(), &[0, 1, 2]);
        assert_eq!(ints.as_slice().as_ptr(), ptr, "buffer must be moved, not copied");
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn take_ints_on_empty_leaves_source_untouched() {
        let mut a = IntArray::with_capacity(5);
        let cap = a.capacity();
        assert!(a.take_ints().is_none());
        assert_eq!(a.capacity(), cap);
    }

    #[test]
    fn freeze_consumes() {
        let a: IntArray = (0..4).collect();
        let ints = a.freeze().unwrap();
        assert_eq!(ints.len(), 4);
        assert!(IntArray::new().freeze().is_none());
    }

    #[test]
    fn try_reserve_reports_overflow() {
        let mut a = IntArray::from(vec![1]);
        assert!(matches!(
            a.try_reserve(usize::MAX),
            Err(IntsError::CapacityOverflow { .. })
        ));
        assert_eq!(a.as_slice(), &[1]);
    }

    #[test]
    fn get_reads_valid_prefix_only() {
        let mut a = IntArray::with_capacity(8);
        a.append_many(&[4, 5]);
        assert_eq!(a.get(0), Some(4));
        assert_eq!(a.get(1), Some(5));
        assert_eq!(a.get(2), None);
        assert_eq!(IntArray::new().get(0), None);
    }

    #[test]
    fn as_mut_slice_edits_in_place() {
        let mut a = IntArray::from(vec![1, 2, 3]);
        a.as_mut_slice()[1] = 20;
        a.as_mut_slice().reverse();
        assert_eq!(a.as_slice(), &[3, 20, 1]);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn extend_appends() {
        let mut a = IntArray::from(vec![1]);
        a.extend([2, 3]);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn reader_trait_sees_only_valid_prefix() {
        let mut a = IntArray::with_capacity(10);
        a.append_many(&[3, 4]);
        let r: &dyn IntReader = &a;
        assert_eq!(r.len(), 2);
        assert_eq!(r.find(4), Some(1));
        assert_eq!(r.get(2), None);
    }

    #[test]
    fn debug_shows_count_and_capacity() {
        let a = IntArray::with_capacity(4);
        let s = format!("{a:?}");
        assert!(s.contains("count: 0"));
        assert!(s.contains("data: []"));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Append(i32),
            AppendMany(Vec<i32>),
            Prepend(i32),
            Insert(usize, i32),
            InsertMany(usize, Vec<i32>),
            SetCount(usize),
            RemoveAt(usize),
            RemoveAtFast(usize),
            RemoveRange(usize, usize),
            SortAscending,
            SortDescending,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Append),
                proptest::collection::vec(any::<i32>(), 0..8).prop_map(Op::AppendMany),
                any::<i32>().prop_map(Op::Prepend),
                (0usize..40, any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
                (0usize..40, proptest::collection::vec(any::<i32>(), 0..8))
                    .prop_map(|(p, v)| Op::InsertMany(p, v)),
                (0usize..40).prop_map(Op::SetCount),
                (0usize..40).prop_map(Op::RemoveAt),
                (0usize..40).prop_map(Op::RemoveAtFast),
                (0usize..40, 0usize..10).prop_map(|(p, n)| Op::RemoveRange(p, n)),
                Just(Op::SortAscending),
                Just(Op::SortDescending),
            ]
        }

        fn apply(a: &mut IntArray, op: &Op) {
            match op {
                Op::Append(v) => a.append(*v),
                Op::AppendMany(vs) => a.append_many(vs),
                Op::Prepend(v) => a.prepend(*v),
                Op::Insert(p, v) => a.insert(*p, *v),
                Op::InsertMany(p, vs) => a.insert_many(*p, vs),
                Op::SetCount(n) => a.set_count(*n),
                Op::RemoveAt(p) => a.remove_at(*p),
                Op::RemoveAtFast(p) => a.remove_at_fast(*p),
                Op::RemoveRange(p, n) => a.remove_range(*p, *n),
                Op::SortAscending => a.sort_ascending(),
                Op::SortDescending => a.sort_descending(),
            };
        }

        proptest! {
            #[test]
            fn count_never_exceeds_capacity(ops in proptest::collection::vec(arb_op(), 0..60)) {
                let mut a = IntArray::new();
                for op in &ops {
                    apply(&mut a, op);
                    prop_assert!(a.len() <= a.capacity());
                }
            }

            #[test]
            fn append_places_value_last(
                values in proptest::collection::vec(any::<i32>(), 0..20),
                v in any::<i32>(),
            ) {
                let mut a = IntArray::from(values.clone());
                a.append(v);
                prop_assert_eq!(a.len(), values.len() + 1);
                prop_assert_eq!(a.last(), Some(v));
            }

            #[test]
            fn prepend_shifts_indices(
                values in proptest::collection::vec(any::<i32>(), 0..20),
                v in any::<i32>(),
            ) {
                let mut a = IntArray::from(values.clone());
                a.prepend(v);
                prop_assert_eq!(a.get(0), Some(v));
                prop_assert_eq!(&a.as_slice()[1..], values.as_slice());
            }

            #[test]
            fn remove_at_preserves_relative_order(
                values in proptest::collection::vec(any::<i32>(), 1..20),
                i in 0usize..20,
            ) {
                let mut a = IntArray::from(values.clone());
                a.remove_at(i);
                let mut expected = values.clone();
                if i < expected.len() {
                    expected.remove(i);
                }
                prop_assert_eq!(a.as_slice(), expected.as_slice());
            }

            #[test]
            fn remove_at_fast_preserves_multiset(
                values in proptest::collection::vec(any::<i32>(), 1..20),
                i in 0usize..20,
            ) {
                let mut a = IntArray::from(values.clone());
                a.remove_at_fast(i);
                let mut expected = values.clone();
                if i < expected.len() {
                    expected.remove(i);
                }
                let mut got = a.as_slice().to_vec();
                got.sort_unstable();
                expected.sort_unstable();
                prop_assert_eq!(got, expected);
            }

            #[test]
            fn remove_range_removes_clamped_count(
                values in proptest::collection::vec(any::<i32>(), 0..20),
                p in 0usize..25,
                n in 0usize..25,
            ) {
                let len = values.len();
                let mut a = IntArray::from(values.clone());
                a.remove_range(p, n);
                if p >= len || n == 0 {
                    prop_assert_eq!(a.as_slice(), values.as_slice());
                } else {
                    let removed = n.min(len - p);
                    prop_assert_eq!(a.len(), len - removed);
                    prop_assert_eq!(&a.as_slice()[..p], &values[..p]);
                    prop_assert_eq!(&a.as_slice()[p..], &values[p + removed..]);
                }
            }

            #[test]
            fn descending_is_reverse_of_ascending(
                values in proptest::collection::vec(any::<i32>(), 0..40),
            ) {
                let mut a = IntArray::from(values);
                a.sort_ascending();
                let mut ascending = a.as_slice().to_vec();
                a.sort_descending();
                ascending.reverse();
                prop_assert_eq!(a.as_slice(), ascending.as_slice());
            }

            #[test]
            fn freeze_matches_contents(
                values in proptest::collection::vec(any::<i32>(), 1..40),
            ) {
                let mut a = IntArray::from(values.clone());
                let ints = a.take_ints().unwrap();
                prop_assert_eq!(ints.as_slice(), values.as_slice());
                prop_assert_eq!(a.len(), 0);
            }
        }
    }
}
