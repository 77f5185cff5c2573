//! Total operations over possibly-absent string vectors.
//!
//! An absent vector behaves like an empty one for queries. Mutators
//! return `None` and change nothing, with one exception: [`add`] creates a
//! vector when given an absent one and a present string.

use gints_core::SortOrder;

use crate::strv::StrV;

/// Number of strings, 0 when absent.
pub fn length(sv: Option<&StrV>) -> usize {
    sv.map_or(0, StrV::len)
}

/// String at `index`, `None` when absent or past the end.
pub fn at(sv: Option<&StrV>, index: usize) -> Option<&str> {
    sv.and_then(|sv| sv.at(index))
}

/// Whether `s` is present. False when either side is absent.
pub fn contains(sv: Option<&StrV>, s: Option<&str>) -> bool {
    find(sv, s).is_some()
}

/// Index of the first occurrence of `s`. `None` when either side is absent.
pub fn find(sv: Option<&StrV>, s: Option<&str>) -> Option<usize> {
    sv.zip(s).and_then(|(sv, s)| sv.find(s))
}

/// Append `s`, creating the vector if it is absent.
///
/// Adding an absent string is a no-op that returns `sv` unchanged, so
/// `add(None, None)` is `None`.
pub fn add(sv: Option<StrV>, s: Option<&str>) -> Option<StrV> {
    match (sv, s) {
        (sv, None) => sv,
        (sv, Some(s)) => {
            let mut sv = sv.unwrap_or_default();
            sv.add(s);
            Some(sv)
        }
    }
}

/// Remove and return the string at `index`. `None` when absent or past the end.
pub fn remove_at(sv: Option<&mut StrV>, index: usize) -> Option<String> {
    sv.and_then(|sv| sv.remove_at(index))
}

/// Ordered, element-wise equality. An absent vector equals an empty one.
pub fn equal(a: Option<&StrV>, b: Option<&StrV>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        (Some(v), None) | (None, Some(v)) => v.is_empty(),
        (None, None) => true,
    }
}

/// A sorted copy, or `None` when absent.
pub fn sorted(sv: Option<&StrV>, order: SortOrder) -> Option<StrV> {
    sv.map(|sv| sv.sorted(order))
}
