//! gints: growable integer arrays, frozen integer sequences, and string vectors.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gints sub-crates. For most users, adding `gints` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gints::prelude::*;
//!
//! let mut a = IntArray::new();
//! a.append(1).prepend(0).append(2);
//! assert_eq!(a.as_slice(), &[0, 1, 2]);
//!
//! // Freezing moves the buffer into a shareable, immutable sequence.
//! let frozen = a.freeze().unwrap();
//! let copy = frozen.acquire();
//! assert_eq!(copy.as_slice(), &[0, 1, 2]);
//! assert_eq!(frozen.ref_count(), 2);
//!
//! // Absent handles are accepted everywhere.
//! let missing: Option<&mut IntArray> = None;
//! assert!(missing.append(3).is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gints-core` | Configuration, growth policy, sort order, errors |
//! | [`array`] | `gints-array` | `IntArray`, `Ints`, `SharedIntArray`, absent-handle helpers |
//! | [`strv`] | `gints-strv` | `StrV` and its absent-handle helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, growth policy, sort direction, and error types (`gints-core`).
pub use gints_core as types;

/// Growable and frozen integer containers (`gints-array`).
///
/// The [`array::nullable`] module holds the helpers for consuming
/// operations on absent arrays.
pub use gints_array as array;

/// Ordered string vectors (`gints-strv`).
pub use gints_strv as strv;

/// Common imports for typical gints usage.
///
/// ```rust
/// use gints::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use gints_array::{IntArray, Ints, SharedIntArray};
    pub use gints_strv::StrV;

    // Absent-handle support
    pub use gints_array::NullableIntArray;

    // Configuration and ordering
    pub use gints_core::{ArrayConfig, GrowthPolicy, IntReader, SortOrder};

    // Errors
    pub use gints_core::{ConfigError, IntsError};
}
