//! Reference-counted handle to a single [`IntArray`].
//!
//! Used when the array object itself, not just a frozen copy of its
//! contents, must be reachable from several owners. Sharing is
//! single-threaded (`Rc<RefCell<_>>`); the type is `!Send`.
//!
//! Releasing a reference comes in three forms, one per ownership outcome:
//!
//! - [`release`](SharedIntArray::release): drop this reference only.
//! - [`free`](SharedIntArray::free): drop this reference and discard the
//!   contents for every other holder.
//! - [`free_to_vec`](SharedIntArray::free_to_vec) /
//!   [`freeze`](SharedIntArray::freeze): drop this reference and move the
//!   buffer out to the caller.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::array::IntArray;
use crate::ints::Ints;

/// Shared, mutable handle to an [`IntArray`].
pub struct SharedIntArray {
    inner: Rc<RefCell<IntArray>>,
}

impl SharedIntArray {
    /// Wrap an array in a handle with a reference count of 1.
    pub fn new(array: IntArray) -> Self {
        Self {
            inner: Rc::new(RefCell::new(array)),
        }
    }

    /// Acquire another reference to the same array.
    pub fn acquire(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Drop this reference. The array and its buffer are destroyed when the
    /// last reference goes.
    pub fn release(self) {
        drop(self);
    }

    /// Number of live references.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Whether two handles refer to the same array.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Borrow the array for reading.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, IntArray> {
        self.inner.borrow()
    }

    /// Borrow the array for mutation.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, IntArray> {
        self.inner.borrow_mut()
    }

    /// Run `f` against the array with a mutable borrow.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut IntArray) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Number of elements currently in the array.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed mutably.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the array currently holds no elements.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed mutably.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Drop this reference and discard the contents.
    ///
    /// Any other holder sees an empty, unallocated array afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn free(self) {
        self.inner.borrow_mut().reset();
    }

    /// Drop this reference and hand the buffer to the caller.
    ///
    /// Other holders see an empty, unallocated array afterwards. Returns
    /// `None` (and leaves the array untouched) if it held no elements.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn free_to_vec(self) -> Option<Vec<i32>> {
        self.inner.borrow_mut().take_vec()
    }

    /// Drop this reference and move the buffer into a new [`Ints`].
    ///
    /// Other holders see an empty, unallocated array afterwards. Returns
    /// `None` (and leaves the array untouched) if it held no elements.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn freeze(self) -> Option<Ints> {
        self.inner.borrow_mut().take_ints()
    }

    /// Recover the array if this is the last reference.
    pub fn try_unwrap(self) -> Result<IntArray, Self> {
        Rc::try_unwrap(self.inner)
            .map(RefCell::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl Clone for SharedIntArray {
    fn clone(&self) -> Self {
        self.acquire()
    }
}

impl From<IntArray> for SharedIntArray {
    fn from(array: IntArray) -> Self {
        Self::new(array)
    }
}

impl Default for SharedIntArray {
    fn default() -> Self {
        Self::new(IntArray::new())
    }
}

impl fmt::Debug for SharedIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(array) => f
                .debug_struct("SharedIntArray")
                .field("refs", &self.ref_count())
                .field("array", &*array)
                .finish(),
            Err(_) => f
                .debug_struct("SharedIntArray")
                .field("refs", &self.ref_count())
                .field("array", &"<borrowed>")
                .finish(),
        }
    }
}
