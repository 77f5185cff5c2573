//! Ordered vectors of owned strings.
//!
//! [`StrV`] is the string companion to the integer containers. It follows
//! the same conventions: positions are checked against the current length,
//! removal hands ownership back to the caller, and the [`nullable`] module
//! makes every operation total over an absent vector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod nullable;
pub mod strv;

pub use strv::StrV;
