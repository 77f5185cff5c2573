//! Growable integer arrays and their immutable, shared counterparts.
//!
//! # Architecture
//!
//! ```text
//! IntArray (exclusive, mutable)
//! ├── append / prepend / insert / set_count / remove_* / sort_*
//! ├── into_vec ──────────────► Vec<i32>       (buffer handed back)
//! └── freeze / take_ints ────► Ints           (buffer moved, Arc-shared)
//!
//! SharedIntArray = Rc<RefCell<IntArray>>  (shared handle to one array)
//! ├── acquire / release
//! ├── free          (contents discarded for every holder)
//! ├── free_to_vec   (buffer handed back, holders see an empty array)
//! └── freeze        (buffer moved into Ints, holders see an empty array)
//! ```
//!
//! At any instant a buffer is owned by exactly one array or one [`Ints`];
//! freezing is the only transfer between them.
//!
//! # Absent handles
//!
//! [`NullableIntArray`] makes every mutator total over
//! `Option<&mut IntArray>`: `None` is a no-op that returns `None`. The
//! [`nullable`] module carries the matching helpers for the consuming
//! operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod ints;
pub mod nullable;
pub mod shared;
pub mod sort;

// Public re-exports for the primary API surface.
pub use array::IntArray;
pub use ints::Ints;
pub use nullable::NullableIntArray;
pub use shared::SharedIntArray;
