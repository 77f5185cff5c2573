//! Test utilities and fixtures for gints development.
//!
//! Provides fixed sample data, deterministic pseudo-random integer
//! streams, and small assertion helpers shared by the workspace's unit
//! tests, integration tests, and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_reverse_of, assert_same_multiset, random_values, random_values_below, sorted_copy,
    SAMPLE_VALS,
};
