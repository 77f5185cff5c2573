//! Caller-owned element buffers.

/// Leak `values` as a boxed slice, returning its pointer and length.
///
/// The pair must be handed back to [`gints_buffer_free`] exactly once.
pub(crate) fn into_raw_buffer(values: Vec<i32>) -> (*mut i32, usize) {
    let boxed = values.into_boxed_slice();
    let len = boxed.len();
    (Box::into_raw(boxed) as *mut i32, len)
}

/// Free a buffer returned by `gints_array_free(h, false, &count)`.
///
/// `count` must be the value written to `count_out` by that call. A null
/// `ptr` is ignored.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_buffer_free(ptr: *mut i32, count: usize) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: ptr/count came from into_raw_buffer and are freed once.
    drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, count)) });
}
