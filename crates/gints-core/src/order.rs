//! Sort direction shared by the integer and string containers.

use std::cmp::Ordering;

/// Direction of an in-place or copying sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest element first.
    #[default]
    Ascending,
    /// Largest element first.
    Descending,
}

impl SortOrder {
    /// Order two values according to this direction.
    #[inline]
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            Self::Ascending => a.cmp(b),
            Self::Descending => b.cmp(a),
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
