//! C-compatible status codes.
//!
//! [`GintsStatus`] is a `repr(i32)` enum covering every error condition
//! the C surface can report. Conversions from the Rust error types
//! ([`ConfigError`], [`IntsError`]) are provided.

use gints_core::{ConfigError, IntsError};

/// C-compatible status code returned by FFI functions that report errors.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GintsStatus {
    /// Success.
    Ok = 0,
    /// Handle is null, invalid, or was already released.
    InvalidHandle = -1,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -2,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -3,
    /// Configuration validation error.
    ConfigError = -4,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -5,
    /// Requested capacity cannot be represented.
    CapacityOverflow = -6,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ConfigError> for GintsStatus {
    fn from(_e: &ConfigError) -> Self {
        GintsStatus::ConfigError
    }
}

impl From<&IntsError> for GintsStatus {
    fn from(e: &IntsError) -> Self {
        match e {
            IntsError::Config(inner) => GintsStatus::from(inner),
            IntsError::CapacityOverflow { .. } => GintsStatus::CapacityOverflow,
        }
    }
}
