//! Immutable, reference-counted integer sequence.
//!
//! [`Ints`] is produced only by freezing an [`IntArray`](crate::IntArray).
//! The array's buffer is moved in without copying, and from then on the
//! contents never change. Cloning shares the buffer; the buffer is freed
//! when the last clone is dropped.
//!
//! The reference count is atomic (`Arc`), so frozen sequences can be handed
//! to other threads. The mutable containers stay single-owner.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use gints_core::IntReader;

/// A shared, read-only sequence of `i32`.
///
/// Length and contents are fixed at creation. There is no mutation surface:
/// the only view handed out is `&[i32]`, and it cannot outlive the
/// reference it was borrowed from.
#[derive(Clone)]
pub struct Ints {
    data: Arc<Vec<i32>>,
}

impl Ints {
    /// Take ownership of `data` without copying it.
    pub(crate) fn from_vec(data: Vec<i32>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence is empty. A freeze never produces an empty
    /// sequence, so this is only true for sequences built some other way.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.data.as_slice().get(index).copied()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    /// Acquire another reference to the same buffer.
    ///
    /// Equivalent to `clone()`; spelled out for call sites that manage
    /// references explicitly.
    pub fn acquire(&self) -> Self {
        self.clone()
    }

    /// Drop this reference. The buffer is freed when the last one goes.
    pub fn release(self) {
        drop(self);
    }

    /// Number of live references to the buffer.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Whether two handles share the same buffer.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.data, &b.data)
    }

    /// Copy the elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<i32> {
        self.data.as_ref().clone()
    }

    /// Size of the element buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<i32>()
    }
}

impl IntReader for Ints {
    fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

impl AsRef<[i32]> for Ints {
    fn as_ref(&self) -> &[i32] {
        &self.data
    }
}

impl fmt::Debug for Ints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl PartialEq for Ints {
    fn eq(&self, other: &Self) -> bool {
        Ints::ptr_eq(self, other) || self.data == other.data
    }
}

impl Eq for Ints {}

impl PartialEq<[i32]> for Ints {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}

impl Hash for Ints {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a> IntoIterator for &'a Ints {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
