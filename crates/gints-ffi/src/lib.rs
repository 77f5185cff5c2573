//! C FFI bindings for the gints containers.
//!
//! Exposes arrays and frozen sequences to C through generation-checked
//! `u64` handles. Handle `0` is never issued and plays the role of NULL:
//! every entry point accepts it (or a stale handle) and responds with a
//! no-op and a zero / null / error result. This crate is the only one in
//! the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

thread_local! {
    /// Message of the most recent panic caught by `ffi_guard!` on this thread.
    static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Store a caught panic payload for [`gints_last_panic_message`].
pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = msg);
}

/// Run an FFI body, converting a panic into `$fallback`.
///
/// `return` inside the body returns from the guarded closure, so early
/// exits work as in a plain function body.
macro_rules! ffi_guard {
    ($fallback:expr, $body:block) => {{
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $fallback
            }
        }
    }};
}

/// Lock a table or array mutex, returning `$fallback` from the enclosing closure
/// if the mutex is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr, $fallback:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $fallback,
        }
    };
}

pub mod array;
pub mod buffer;
mod handle;
pub mod ints;
pub mod status;

pub use status::GintsStatus;

/// Copy the most recent caught panic message into `buf`.
///
/// Returns the full message length in bytes (excluding the terminator),
/// or 0 if no panic has been caught on this thread. Passing a null `buf`
/// or `cap == 0` only queries the length. The copy is truncated to
/// `cap - 1` bytes and always null-terminated.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gints_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| {
        let msg = cell.borrow();
        let bytes = msg.as_bytes();
        if !buf.is_null() && cap > 0 {
            let copy_len = bytes.len().min(cap - 1);
            // SAFETY: buf points to cap valid bytes per caller contract.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, copy_len);
                *buf.add(copy_len) = 0;
            }
        }
        i32::try_from(bytes.len()).unwrap_or(i32::MAX)
    })
}
