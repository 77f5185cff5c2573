//! Read-only access shared by mutable arrays and frozen sequences.

/// Read-only view over a contiguous run of `i32` values.
///
/// Implemented by both the growable array and the immutable sequence, so
/// inspection code (and tests) can take either. Only the valid prefix of a
/// buffer is ever exposed; spare capacity is never visible here.
pub trait IntReader {
    /// The valid elements, in order.
    fn as_slice(&self) -> &[i32];

    /// Number of valid elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no valid elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    /// Index of the first element equal to `value`.
    fn find(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Whether any element equals `value`.
    fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }
}

impl IntReader for [i32] {
    fn as_slice(&self) -> &[i32] {
        self
    }
}
