//! Ordered vector of owned strings.

use std::fmt;
use std::ops::Index;

use gints_core::SortOrder;

/// An ordered collection of owned strings.
///
/// Positions are checked against the current length: lookups past the end
/// return `None` and removals past the end are no-ops.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StrV {
    items: Vec<String>,
}

impl StrV {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Split `s` on every occurrence of `separator`, keeping empty pieces.
    ///
    /// An empty input yields an empty vector rather than one empty string.
    pub fn split(s: &str, separator: &str) -> Self {
        if s.is_empty() {
            return Self::new();
        }
        s.split(separator).map(str::to_owned).collect()
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no strings.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// String at `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Whether any string equals `s`.
    pub fn contains(&self, s: &str) -> bool {
        self.find(s).is_some()
    }

    /// Index of the first string equal to `s`.
    pub fn find(&self, s: &str) -> Option<usize> {
        self.items.iter().position(|item| item == s)
    }

    /// Append a string.
    pub fn add(&mut self, s: impl Into<String>) -> &mut Self {
        self.items.push(s.into());
        self
    }

    /// Remove the string at `index` and hand it back, shifting the rest down.
    ///
    /// Returns `None` (and changes nothing) past the end. Dropping the
    /// returned string frees it; keeping it transfers ownership.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Sort in place, by byte-wise string comparison.
    pub fn sort(&mut self, order: SortOrder) -> &mut Self {
        self.items.sort_unstable_by(|a, b| order.compare(a, b));
        self
    }

    /// A sorted copy; `self` is left unchanged.
    pub fn sorted(&self, order: SortOrder) -> Self {
        let mut out = self.clone();
        out.sort(order);
        out
    }

    /// Iterate over the strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// The strings as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Hand the strings back to the caller.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl fmt::Debug for StrV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl Index<usize> for StrV {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}

impl From<Vec<String>> for StrV {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for StrV {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for StrV {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for StrV {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
