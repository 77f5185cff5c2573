//! Core types and traits for the gints containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by every container in the workspace: capacity
//! configuration, growth policy, sort direction, error types, and the
//! read-only [`IntReader`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod order;
pub mod traits;

pub use config::{ArrayConfig, GrowthPolicy};
pub use error::{ConfigError, IntsError};
pub use order::SortOrder;
pub use traits::IntReader;
