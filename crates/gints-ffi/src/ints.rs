//! Frozen sequence FFI.
//!
//! Sequences are only created by `gints_array_free_to_ints`. The data
//! pointer from [`gints_ints_get_data`] stays valid until the last
//! reference to the handle is dropped.

use std::sync::Mutex;

use gints_array::Ints;

use crate::handle::{HandleTable, Release, NULL_HANDLE};

static INTS: Mutex<HandleTable<Ints>> = Mutex::new(HandleTable::new());

/// Register a frozen sequence and return its handle.
pub(crate) fn insert_ints(ints: Ints) -> u64 {
    ffi_guard!(NULL_HANDLE, { ffi_lock!(INTS, NULL_HANDLE).insert(ints) })
}

/// Add a reference. Returns `handle`, or `0` if it is absent.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_ints_ref(handle: u64) -> u64 {
    ffi_guard!(NULL_HANDLE, {
        if ffi_lock!(INTS, NULL_HANDLE).acquire(handle) {
            handle
        } else {
            NULL_HANDLE
        }
    })
}

/// Drop a reference. The last reference frees the elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_ints_unref(handle: u64) {
    ffi_guard!((), {
        let released = ffi_lock!(INTS, ()).release(handle);
        match released {
            Release::Last(value) => drop(value),
            Release::Shared | Release::Stale => {}
        }
    })
}

/// Number of elements, or 0 when the handle is absent.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_ints_get_count(handle: u64) -> usize {
    ffi_guard!(0, { ffi_lock!(INTS, 0).get(handle).map_or(0, Ints::len) })
}

/// Pointer to the elements, with the count written to `count_out`.
///
/// Returns null (and a count of 0) when the handle is absent.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_ints_get_data(handle: u64, count_out: *mut usize) -> *const i32 {
    let (ptr, count) = ffi_guard!((std::ptr::null(), 0), {
        let table = ffi_lock!(INTS, (std::ptr::null(), 0));
        match table.get(handle) {
            Some(ints) => (ints.as_slice().as_ptr(), ints.len()),
            None => (std::ptr::null(), 0),
        }
    });
    if !count_out.is_null() {
        // SAFETY: count_out is non-null and writable per caller contract.
        unsafe { *count_out = count };
    }
    ptr
}
