//! Total operations over possibly-absent arrays.
//!
//! Callers that hold an `Option<&mut IntArray>` (a handle that may be
//! missing) can use [`NullableIntArray`] directly on the option. Every
//! operation is total over that domain:
//!
//! - `None` performs no mutation and returns `None` (`0` or `false` for
//!   the queries).
//! - `Some(array)` applies the operation and returns `Some(array)`, so
//!   chains keep working.
//!
//! ```rust
//! use gints_array::{IntArray, NullableIntArray};
//!
//! let mut a = IntArray::new();
//! let out = Some(&mut a).append(0).append(1).prepend(2);
//! assert_eq!(out.map(|a| a.as_slice().to_vec()), Some(vec![2, 0, 1]));
//!
//! let missing: Option<&mut IntArray> = None;
//! assert!(missing.append(0).is_none());
//! ```
//!
//! The consuming operations take an owned `Option`: see [`freeze`],
//! [`into_vec`], [`acquire`], [`release`], [`free`] and [`free_to_vec`].

use gints_core::SortOrder;

use crate::array::IntArray;
use crate::ints::Ints;
use crate::shared::SharedIntArray;

/// Array operations on a handle that may be absent.
pub trait NullableIntArray<'a>: Sized {
    /// See [`IntArray::append`].
    fn append(self, value: i32) -> Option<&'a mut IntArray>;
    /// See [`IntArray::append_many`].
    fn append_many(self, values: &[i32]) -> Option<&'a mut IntArray>;
    /// See [`IntArray::prepend`].
    fn prepend(self, value: i32) -> Option<&'a mut IntArray>;
    /// See [`IntArray::prepend_many`].
    fn prepend_many(self, values: &[i32]) -> Option<&'a mut IntArray>;
    /// See [`IntArray::insert`].
    fn insert(self, position: usize, value: i32) -> Option<&'a mut IntArray>;
    /// See [`IntArray::insert_many`].
    fn insert_many(self, position: usize, values: &[i32]) -> Option<&'a mut IntArray>;
    /// See [`IntArray::set_count`].
    fn set_count(self, count: usize) -> Option<&'a mut IntArray>;
    /// See [`IntArray::remove_at`].
    fn remove_at(self, position: usize) -> Option<&'a mut IntArray>;
    /// See [`IntArray::remove_at_fast`].
    fn remove_at_fast(self, position: usize) -> Option<&'a mut IntArray>;
    /// See [`IntArray::remove_range`].
    fn remove_range(self, position: usize, count: usize) -> Option<&'a mut IntArray>;
    /// See [`IntArray::sort_by_order`].
    fn sort_by_order(self, order: SortOrder) -> Option<&'a mut IntArray>;
    /// See [`IntArray::sort_ascending`]. Accepted silently when absent.
    fn sort_ascending(self) -> Option<&'a mut IntArray> {
        self.sort_by_order(SortOrder::Ascending)
    }
    /// See [`IntArray::sort_descending`]. Accepted silently when absent.
    fn sort_descending(self) -> Option<&'a mut IntArray> {
        self.sort_by_order(SortOrder::Descending)
    }
    /// See [`IntArray::take_ints`].
    fn take_ints(self) -> Option<Ints>;
    /// Element count, or 0 when absent.
    fn count(self) -> usize;
}

impl<'a> NullableIntArray<'a> for Option<&'a mut IntArray> {
    fn append(self, value: i32) -> Option<&'a mut IntArray> {
        self.map(|a| a.append(value))
    }

    fn append_many(self, values: &[i32]) -> Option<&'a mut IntArray> {
        self.map(|a| a.append_many(values))
    }

    fn prepend(self, value: i32) -> Option<&'a mut IntArray> {
        self.map(|a| a.prepend(value))
    }

    fn prepend_many(self, values: &[i32]) -> Option<&'a mut IntArray> {
        self.map(|a| a.prepend_many(values))
    }

    fn insert(self, position: usize, value: i32) -> Option<&'a mut IntArray> {
        self.map(|a| a.insert(position, value))
    }

    fn insert_many(self, position: usize, values: &[i32]) -> Option<&'a mut IntArray> {
        self.map(|a| a.insert_many(position, values))
    }

    fn set_count(self, count: usize) -> Option<&'a mut IntArray> {
        self.map(|a| a.set_count(count))
    }

    fn remove_at(self, position: usize) -> Option<&'a mut IntArray> {
        self.map(|a| a.remove_at(position))
    }

    fn remove_at_fast(self, position: usize) -> Option<&'a mut IntArray> {
        self.map(|a| a.remove_at_fast(position))
    }

    fn remove_range(self, position: usize, count: usize) -> Option<&'a mut IntArray> {
        self.map(|a| a.remove_range(position, count))
    }

    fn sort_by_order(self, order: SortOrder) -> Option<&'a mut IntArray> {
        self.map(|a| a.sort_by_order(order))
    }

    fn take_ints(self) -> Option<Ints> {
        self.and_then(IntArray::take_ints)
    }

    fn count(self) -> usize {
        self.map_or(0, |a| a.len())
    }
}

/// Consume an owned, possibly-absent array into an [`Ints`].
///
/// `None` for an absent or empty array.
pub fn freeze(array: Option<IntArray>) -> Option<Ints> {
    array.and_then(IntArray::freeze)
}

/// Consume an owned, possibly-absent array and hand back its buffer.
///
/// `None` for an absent or empty array.
pub fn into_vec(array: Option<IntArray>) -> Option<Vec<i32>> {
    array.and_then(IntArray::into_vec)
}

/// Acquire a reference to a possibly-absent shared array.
pub fn acquire(array: Option<&SharedIntArray>) -> Option<SharedIntArray> {
    array.map(SharedIntArray::acquire)
}

/// Release a possibly-absent shared array reference. `None` is a no-op.
pub fn release(array: Option<SharedIntArray>) {
    if let Some(array) = array {
        array.release();
    }
}

/// Release a reference and discard the contents. `None` is a no-op.
pub fn free(array: Option<SharedIntArray>) {
    if let Some(array) = array {
        array.free();
    }
}

/// Release a reference and hand back the buffer.
///
/// `None` for an absent or empty array.
pub fn free_to_vec(array: Option<SharedIntArray>) -> Option<Vec<i32>> {
    array.and_then(SharedIntArray::free_to_vec)
}

/// Release a reference, moving the buffer into an [`Ints`].
///
/// `None` for an absent or empty array.
pub fn free_to_ints(array: Option<SharedIntArray>) -> Option<Ints> {
    array.and_then(SharedIntArray::freeze)
}

/// Acquire a reference to a possibly-absent frozen sequence.
pub fn ints_acquire(ints: Option<&Ints>) -> Option<Ints> {
    ints.map(Ints::acquire)
}

/// Length of a possibly-absent frozen sequence, 0 when absent.
pub fn ints_len(ints: Option<&Ints>) -> usize {
    ints.map_or(0, Ints::len)
}

/// View of a possibly-absent frozen sequence, `None` when absent.
pub fn ints_view(ints: Option<&Ints>) -> Option<&[i32]> {
    ints.map(Ints::as_slice)
}
