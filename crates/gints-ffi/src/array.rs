//! Growable array FFI: create, mutate, reference counting and hand-off.
//!
//! Every mutator returns the handle it was given, or `0` when the handle is
//! null or stale, so C callers can chain calls the same way they chain
//! pointer-returning functions. A mutator whose growth cannot be satisfied
//! also returns `0` and leaves the array unchanged.
//!
//! The handle table stores one `Arc<Mutex<IntArray>>` per array. The table
//! lock is held only long enough to clone that `Arc`; all element work runs
//! under the per-array lock.

use std::ffi::c_void;
use std::sync::{Arc, Mutex};

use gints_array::IntArray;
use gints_core::{ArrayConfig, GrowthPolicy};

use crate::buffer::into_raw_buffer;
use crate::handle::{HandleTable, Release, NULL_HANDLE};
use crate::ints::insert_ints;
use crate::status::GintsStatus;

type ArrayArc = Arc<Mutex<IntArray>>;

static ARRAYS: Mutex<HandleTable<ArrayArc>> = Mutex::new(HandleTable::new());

/// Clone the `Arc` for an array, releasing the table lock immediately.
fn get_array(handle: u64) -> Option<ArrayArc> {
    ARRAYS.lock().ok()?.get(handle).cloned()
}

/// Drop one table reference and return the array's `Arc` if it was live.
fn release_array(handle: u64) -> Option<ArrayArc> {
    let mut table = ARRAYS.lock().ok()?;
    let array = table.get(handle).cloned();
    drop(table.release(handle));
    array
}

/// Reserve room for `additional` elements, then apply `f`.
///
/// Returns `handle` on success and `0` if the handle is absent, the
/// reservation fails, or a lock is poisoned. A failed reservation leaves
/// the array untouched, so `f` never grows past what was reserved.
fn with_array(handle: u64, additional: usize, f: impl FnOnce(&mut IntArray)) -> u64 {
    ffi_guard!(NULL_HANDLE, {
        let Some(array) = get_array(handle) else {
            return NULL_HANDLE;
        };
        let mut array = ffi_lock!(array, NULL_HANDLE);
        if array.try_reserve(additional).is_err() {
            return NULL_HANDLE;
        }
        f(&mut array);
        handle
    })
}

/// Borrow `n` values from a C pointer.
///
/// A null pointer is only accepted together with `n == 0`.
///
/// # Safety
///
/// A non-null `ptr` must point to `n` readable `i32` values that stay valid
/// for the returned lifetime.
#[allow(unsafe_code)]
unsafe fn values_from_raw<'a>(ptr: *const i32, n: usize) -> Option<&'a [i32]> {
    if n == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and valid for n reads per the caller contract.
    Some(unsafe { std::slice::from_raw_parts(ptr, n) })
}

fn insert_array(array: IntArray) -> u64 {
    ffi_guard!(NULL_HANDLE, {
        ffi_lock!(ARRAYS, NULL_HANDLE).insert(Arc::new(Mutex::new(array)))
    })
}

// ── Lifecycle ───────────────────────────────────────────────────

/// Create an empty array. Returns its handle, or `0` on internal error.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_new() -> u64 {
    insert_array(IntArray::new())
}

/// Create an empty array with room for `reserved` elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_sized_new(reserved: usize) -> u64 {
    ffi_guard!(NULL_HANDLE, { insert_array(IntArray::with_capacity(reserved)) })
}

/// Create an array from explicit configuration values.
///
/// `growth_factor == 0` selects power-of-two growth; any other value is a
/// multiplicative factor and must be at least 2. On success writes the
/// handle to `out` and returns `GINTS_STATUS_OK`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_new_with_config(
    initial_capacity: usize,
    growth_factor: u32,
    out: *mut u64,
) -> i32 {
    ffi_guard!(GintsStatus::Panicked as i32, {
        if out.is_null() {
            return GintsStatus::InvalidArgument as i32;
        }
        let growth = match growth_factor {
            0 => GrowthPolicy::PowerOfTwo,
            f => GrowthPolicy::Factor(f),
        };
        let config = ArrayConfig::new(initial_capacity).with_growth(growth);
        let array = match IntArray::with_config(&config) {
            Ok(array) => array,
            Err(e) => return GintsStatus::from(&e) as i32,
        };
        let handle = insert_array(array);
        if handle == NULL_HANDLE {
            return GintsStatus::InternalError as i32;
        }
        // SAFETY: out is non-null and points to writable u64 per caller contract.
        unsafe { *out = handle };
        GintsStatus::Ok as i32
    })
}

/// Add a reference. Returns `handle`, or `0` if it is absent.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_ref(handle: u64) -> u64 {
    ffi_guard!(NULL_HANDLE, {
        if ffi_lock!(ARRAYS, NULL_HANDLE).acquire(handle) {
            handle
        } else {
            NULL_HANDLE
        }
    })
}

/// Drop a reference. The last reference destroys the array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_unref(handle: u64) {
    ffi_guard!((), {
        let released = ffi_lock!(ARRAYS, ()).release(handle);
        match released {
            Release::Last(value) => drop(value),
            Release::Shared | Release::Stale => {}
        }
    })
}

/// Drop a reference and empty the array for every other holder.
///
/// With `free_contents == true` the elements are discarded and null is
/// returned. Otherwise the buffer is handed to the caller: the element
/// count is written to `count_out` (if non-null) and the buffer must be
/// released with `gints_buffer_free`. An empty array yields null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_free(
    handle: u64,
    free_contents: bool,
    count_out: *mut usize,
) -> *mut i32 {
    let (ptr, count) = ffi_guard!((std::ptr::null_mut(), 0), {
        let Some(array) = release_array(handle) else {
            return (std::ptr::null_mut(), 0);
        };
        let mut array = ffi_lock!(array, (std::ptr::null_mut(), 0));
        let taken = if free_contents {
            array.reset();
            None
        } else {
            array.take_vec()
        };
        match taken {
            Some(values) => into_raw_buffer(values),
            None => (std::ptr::null_mut(), 0),
        }
    });
    if !count_out.is_null() {
        // SAFETY: count_out is non-null and writable per caller contract.
        unsafe { *count_out = count };
    }
    ptr
}

/// Drop a reference, moving the contents into a new frozen sequence.
///
/// Returns the sequence handle, or `0` if the array was empty or absent.
/// Other holders see an empty array afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_free_to_ints(handle: u64) -> u64 {
    ffi_guard!(NULL_HANDLE, {
        let Some(array) = release_array(handle) else {
            return NULL_HANDLE;
        };
        let frozen = ffi_lock!(array, NULL_HANDLE).take_ints();
        match frozen {
            Some(ints) => insert_ints(ints),
            None => NULL_HANDLE,
        }
    })
}

// ── Mutators ────────────────────────────────────────────────────

/// Append one value.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_append(handle: u64, value: i32) -> u64 {
    with_array(handle, 1, |a| {
        a.append(value);
    })
}

/// Append `n` values read from `values`.
///
/// A null `values` is accepted only with `n == 0`; otherwise the call is
/// a no-op that still returns the handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_append_vals(handle: u64, values: *const i32, n: usize) -> u64 {
    // SAFETY: caller guarantees values points to n readable i32 values.
    let vals = unsafe { values_from_raw(values, n) };
    let n = vals.map_or(0, <[i32]>::len);
    with_array(handle, n, |a| {
        if let Some(vals) = vals {
            a.append_many(vals);
        }
    })
}

/// Insert one value at the front.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_prepend(handle: u64, value: i32) -> u64 {
    with_array(handle, 1, |a| {
        a.prepend(value);
    })
}

/// Insert `n` values at the front, keeping their order.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_prepend_vals(handle: u64, values: *const i32, n: usize) -> u64 {
    // SAFETY: caller guarantees values points to n readable i32 values.
    let vals = unsafe { values_from_raw(values, n) };
    let n = vals.map_or(0, <[i32]>::len);
    with_array(handle, n, |a| {
        if let Some(vals) = vals {
            a.prepend_many(vals);
        }
    })
}

/// Insert one value at `pos`. Positions past the end append.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_insert(handle: u64, pos: usize, value: i32) -> u64 {
    with_array(handle, 1, |a| {
        a.insert(pos, value);
    })
}

/// Insert `n` values at `pos`. Positions past the end append.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_insert_vals(
    handle: u64,
    pos: usize,
    values: *const i32,
    n: usize,
) -> u64 {
    // SAFETY: caller guarantees values points to n readable i32 values.
    let vals = unsafe { values_from_raw(values, n) };
    let n = vals.map_or(0, <[i32]>::len);
    with_array(handle, n, |a| {
        if let Some(vals) = vals {
            a.insert_many(pos, vals);
        }
    })
}

/// Grow (zero-filling) or truncate to exactly `count` elements.
///
/// Returns `0` without touching the array if `count` cannot be reached.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_set_count(handle: u64, count: usize) -> u64 {
    ffi_guard!(NULL_HANDLE, {
        let Some(array) = get_array(handle) else {
            return NULL_HANDLE;
        };
        let mut array = ffi_lock!(array, NULL_HANDLE);
        let growth = count.saturating_sub(array.len());
        if array.try_reserve(growth).is_err() {
            return NULL_HANDLE;
        }
        array.set_count(count);
        handle
    })
}

/// Remove the element at `pos`, shifting the rest down.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_remove_index(handle: u64, pos: usize) -> u64 {
    with_array(handle, 0, |a| {
        a.remove_at(pos);
    })
}

/// Remove the element at `pos`, moving the last element into its place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_remove_index_fast(handle: u64, pos: usize) -> u64 {
    with_array(handle, 0, |a| {
        a.remove_at_fast(pos);
    })
}

/// Remove up to `count` elements starting at `pos`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_remove_range(handle: u64, pos: usize, count: usize) -> u64 {
    with_array(handle, 0, |a| {
        a.remove_range(pos, count);
    })
}

/// Sort in ascending order.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_sort_ascending(handle: u64) -> u64 {
    with_array(handle, 0, |a| {
        a.sort_ascending();
    })
}

/// Sort in descending order.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_sort_descending(handle: u64) -> u64 {
    with_array(handle, 0, |a| {
        a.sort_descending();
    })
}

/// Reserve room for `additional` more elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_reserve(handle: u64, additional: usize) -> i32 {
    ffi_guard!(GintsStatus::Panicked as i32, {
        let Some(array) = get_array(handle) else {
            return GintsStatus::InvalidHandle as i32;
        };
        let mut array = ffi_lock!(array, GintsStatus::InternalError as i32);
        match array.try_reserve(additional) {
            Ok(()) => GintsStatus::Ok as i32,
            Err(e) => GintsStatus::from(&e) as i32,
        }
    })
}

// ── Read access ─────────────────────────────────────────────────

/// Number of elements, or 0 when the handle is absent.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_count(handle: u64) -> usize {
    ffi_guard!(0, {
        let Some(array) = get_array(handle) else {
            return 0;
        };
        let len = ffi_lock!(array, 0).len();
        len
    })
}

/// Read the element at `index` into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_get(handle: u64, index: usize, out: *mut i32) -> i32 {
    ffi_guard!(GintsStatus::Panicked as i32, {
        if out.is_null() {
            return GintsStatus::InvalidArgument as i32;
        }
        let Some(array) = get_array(handle) else {
            return GintsStatus::InvalidHandle as i32;
        };
        let value = ffi_lock!(array, GintsStatus::InternalError as i32).get(index);
        match value {
            Some(value) => {
                // SAFETY: out is non-null and writable per caller contract.
                unsafe { *out = value };
                GintsStatus::Ok as i32
            }
            None => GintsStatus::InvalidArgument as i32,
        }
    })
}

/// Copy the elements into a caller-provided buffer of `cap` values.
///
/// Writes the element count to `count_out` (if non-null) even when the
/// buffer is too small, so callers can size a retry.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_array_copy_data(
    handle: u64,
    buf: *mut c_void,
    cap: usize,
    count_out: *mut usize,
) -> i32 {
    ffi_guard!(GintsStatus::Panicked as i32, {
        let Some(array) = get_array(handle) else {
            return GintsStatus::InvalidHandle as i32;
        };
        let array = ffi_lock!(array, GintsStatus::InternalError as i32);
        let data = array.as_slice();
        if !count_out.is_null() {
            // SAFETY: count_out is non-null and writable per caller contract.
            unsafe { *count_out = data.len() };
        }
        if data.is_empty() {
            return GintsStatus::Ok as i32;
        }
        if buf.is_null() {
            return GintsStatus::InvalidArgument as i32;
        }
        if cap < data.len() {
            return GintsStatus::BufferTooSmall as i32;
        }
        // SAFETY: buf points to cap >= data.len() writable i32 slots.
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), buf as *mut i32, data.len());
        }
        GintsStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::gints_buffer_free;
    use crate::ints::{gints_ints_get_count, gints_ints_get_data, gints_ints_unref};
    use gints_test_utils::SAMPLE_VALS;

    fn contents(h: u64) -> Vec<i32> {
        let mut count = 0usize;
        let mut buf = vec![0i32; gints_array_count(h)];
        let status = gints_array_copy_data(
            h,
            buf.as_mut_ptr() as *mut c_void,
            buf.len(),
            &mut count,
        );
        assert_eq!(status, GintsStatus::Ok as i32);
        buf.truncate(count);
        buf
    }

    #[test]
    fn null_handle_mutators_return_zero() {
        let h = NULL_HANDLE;
        assert_eq!(gints_array_append(h, 1), 0);
        assert_eq!(gints_array_prepend(h, 1), 0);
        assert_eq!(gints_array_insert(h, 0, 1), 0);
        assert_eq!(gints_array_append_vals(h, SAMPLE_VALS.as_ptr(), 3), 0);
        assert_eq!(gints_array_prepend_vals(h, SAMPLE_VALS.as_ptr(), 3), 0);
        assert_eq!(gints_array_insert_vals(h, 0, SAMPLE_VALS.as_ptr(), 3), 0);
        assert_eq!(gints_array_set_count(h, 1), 0);
        assert_eq!(gints_array_remove_index(h, 0), 0);
        assert_eq!(gints_array_remove_index_fast(h, 0), 0);
        assert_eq!(gints_array_remove_range(h, 0, 1), 0);
        assert_eq!(gints_array_sort_ascending(h), 0);
        assert_eq!(gints_array_sort_descending(h), 0);
        assert_eq!(gints_array_ref(h), 0);
        assert_eq!(gints_array_count(h), 0);
        assert_eq!(gints_array_free_to_ints(h), 0);
        assert!(gints_array_free(h, false, std::ptr::null_mut()).is_null());
        gints_array_unref(h);
    }

    #[test]
    fn basic_chain() {
        let h = gints_array_new();
        assert_ne!(h, 0);
        let r = gints_array_append(gints_array_prepend(gints_array_append(h, 1), 0), 2);
        assert_eq!(r, h);
        assert_eq!(contents(h), [0, 1, 2]);

        let mut v = 0;
        assert_eq!(gints_array_get(h, 2, &mut v), GintsStatus::Ok as i32);
        assert_eq!(v, 2);
        assert_eq!(
            gints_array_get(h, 3, &mut v),
            GintsStatus::InvalidArgument as i32
        );
        gints_array_unref(h);
        assert_eq!(gints_array_count(h), 0);
        assert_eq!(gints_array_get(h, 0, &mut v), GintsStatus::InvalidHandle as i32);
    }

    #[test]
    fn vals_variants_and_null_pointer() {
        let h = gints_array_sized_new(0);
        gints_array_append_vals(h, SAMPLE_VALS.as_ptr(), 3);
        gints_array_prepend_vals(h, SAMPLE_VALS.as_ptr(), 2);
        gints_array_insert_vals(h, 1, SAMPLE_VALS.as_ptr(), 1);
        assert_eq!(contents(h), [0, 0, 1, 0, 1, 2]);

        assert_eq!(gints_array_append_vals(h, std::ptr::null(), 0), h);
        assert_eq!(gints_array_append_vals(h, std::ptr::null(), 5), h);
        assert_eq!(gints_array_count(h), 6);
        gints_array_unref(h);
    }

    #[test]
    fn removals_and_sort() {
        let h = gints_array_new();
        gints_array_append_vals(h, [5, 3, 9, 1, 7].as_ptr(), 5);
        gints_array_remove_index(h, 1);
        assert_eq!(contents(h), [5, 9, 1, 7]);
        gints_array_remove_index_fast(h, 0);
        assert_eq!(contents(h), [7, 9, 1]);
        gints_array_remove_index(h, 10);
        gints_array_remove_range(h, 2, 10);
        assert_eq!(contents(h), [7, 9]);
        gints_array_set_count(h, 4);
        gints_array_sort_descending(h);
        assert_eq!(contents(h), [9, 7, 0, 0]);
        gints_array_sort_ascending(h);
        assert_eq!(contents(h), [0, 0, 7, 9]);
        gints_array_unref(h);
    }

    #[test]
    fn free_hands_back_buffer() {
        let h = gints_array_new();
        gints_array_append_vals(h, SAMPLE_VALS.as_ptr(), 3);
        let mut count = 0usize;
        let ptr = gints_array_free(h, false, &mut count);
        assert!(!ptr.is_null());
        assert_eq!(count, 3);
        #[allow(unsafe_code)]
        let copied = unsafe { std::slice::from_raw_parts(ptr, count) }.to_vec();
        assert_eq!(copied, SAMPLE_VALS);
        gints_buffer_free(ptr, count);
        assert_eq!(gints_array_count(h), 0);
        assert_eq!(gints_array_append(h, 1), 0);
    }

    #[test]
    fn free_of_empty_array_returns_null() {
        let h = gints_array_sized_new(0);
        let mut count = 99usize;
        assert!(gints_array_free(h, false, &mut count).is_null());
        assert_eq!(count, 0);
    }

    #[test]
    fn free_with_shared_reference_empties_other_holder() {
        let h = gints_array_new();
        gints_array_append_vals(h, SAMPLE_VALS.as_ptr(), 3);
        assert_eq!(gints_array_ref(h), h);
        assert!(gints_array_free(h, true, std::ptr::null_mut()).is_null());
        assert_eq!(gints_array_count(h), 0);
        assert_eq!(gints_array_append(h, 4), h);
        assert_eq!(contents(h), [4]);
        gints_array_unref(h);
        assert_eq!(gints_array_count(h), 0);
    }

    #[test]
    fn free_to_ints_moves_contents() {
        let h = gints_array_new();
        gints_array_append_vals(h, SAMPLE_VALS.as_ptr(), 3);
        let ints = gints_array_free_to_ints(h);
        assert_ne!(ints, 0);
        assert_eq!(gints_ints_get_count(ints), 3);
        let mut count = 0usize;
        let data = gints_ints_get_data(ints, &mut count);
        #[allow(unsafe_code)]
        let view = unsafe { std::slice::from_raw_parts(data, count) };
        assert_eq!(view, SAMPLE_VALS);
        gints_ints_unref(ints);

        let empty = gints_array_new();
        assert_eq!(gints_array_free_to_ints(empty), 0);
        assert_eq!(gints_array_count(empty), 0);
    }

    #[test]
    fn config_constructor_validates() {
        let mut h = 0u64;
        assert_eq!(
            gints_array_new_with_config(8, 1, &mut h),
            GintsStatus::ConfigError as i32
        );
        assert_eq!(h, 0);
        assert_eq!(
            gints_array_new_with_config(8, 0, std::ptr::null_mut()),
            GintsStatus::InvalidArgument as i32
        );
        assert_eq!(gints_array_new_with_config(8, 3, &mut h), GintsStatus::Ok as i32);
        assert_ne!(h, 0);
        assert_eq!(gints_array_reserve(h, 4), GintsStatus::Ok as i32);
        assert_eq!(
            gints_array_reserve(h, usize::MAX),
            GintsStatus::CapacityOverflow as i32
        );
        assert_eq!(gints_array_reserve(0, 4), GintsStatus::InvalidHandle as i32);
        gints_array_unref(h);
    }

    #[test]
    fn oversized_set_count_leaves_arrays_usable() {
        let other = gints_array_new();
        assert_eq!(gints_array_append(other, 7), other);
        let h = gints_array_new();
        assert_eq!(gints_array_append(h, 1), h);

        assert_eq!(gints_array_set_count(h, usize::MAX), 0);
        assert_eq!(gints_array_set_count(h, usize::MAX / 2), 0);
        assert_eq!(contents(h), [1]);

        assert_eq!(gints_array_append(other, 8), other);
        assert_eq!(contents(other), [7, 8]);
        assert_eq!(gints_array_append(h, 2), h);
        assert_eq!(contents(h), [1, 2]);

        let fresh = gints_array_new();
        assert_ne!(fresh, 0);
        assert_eq!(gints_array_count(fresh), 0);

        gints_array_unref(fresh);
        gints_array_unref(h);
        gints_array_unref(other);
        assert_eq!(gints_array_count(other), 0);
    }

    #[test]
    fn copy_data_reports_short_buffer() {
        let h = gints_array_new();
        gints_array_append_vals(h, SAMPLE_VALS.as_ptr(), 3);
        let mut buf = [0i32; 2];
        let mut count = 0usize;
        assert_eq!(
            gints_array_copy_data(h, buf.as_mut_ptr() as *mut c_void, buf.len(), &mut count),
            GintsStatus::BufferTooSmall as i32
        );
        assert_eq!(count, 3);
        gints_array_unref(h);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn append_vals_matches_rust_array(
                values in proptest::collection::vec(any::<i32>(), 0..64),
            ) {
                let h = gints_array_new();
                gints_array_append_vals(h, values.as_ptr(), values.len());
                prop_assert_eq!(contents(h), values.clone());
                gints_array_unref(h);
            }
        }
    }
}
