//! Array configuration parameters.

use crate::error::ConfigError;

/// How an array's capacity grows when an insertion does not fit.
///
/// Any geometric policy keeps appends amortized O(1). Growth never
/// shrinks capacity, and the chosen capacity always covers the request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Round the required capacity up to the next power of two,
    /// with a floor of [`ArrayConfig::MIN_GROWTH_CAPACITY`].
    #[default]
    PowerOfTwo,
    /// Multiply the current capacity by the given factor (at least 2).
    Factor(u32),
}

impl GrowthPolicy {
    /// Compute the capacity to grow to when `required` slots are needed
    /// and `current` are allocated.
    ///
    /// Returns `current` unchanged when it already suffices, and `None`
    /// when `required` exceeds [`ArrayConfig::MAX_CAPACITY`].
    pub fn next_capacity(self, current: usize, required: usize) -> Option<usize> {
        if required <= current {
            return Some(current);
        }
        if required > ArrayConfig::MAX_CAPACITY {
            return None;
        }
        let grown = match self {
            Self::PowerOfTwo => required
                .max(ArrayConfig::MIN_GROWTH_CAPACITY)
                .checked_next_power_of_two()
                .unwrap_or(ArrayConfig::MAX_CAPACITY),
            Self::Factor(factor) => current
                .max(1)
                .saturating_mul(factor as usize)
                .max(required),
        };
        Some(grown.min(ArrayConfig::MAX_CAPACITY))
    }
}

/// Configuration for a growable integer array.
///
/// Validated at construction; the array copies the values it needs and
/// never consults the config again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots reserved up front, in elements.
    ///
    /// Default: 0 (no allocation until the first insertion).
    pub initial_capacity: usize,

    /// Capacity growth policy applied when an insertion does not fit.
    ///
    /// Default: [`GrowthPolicy::PowerOfTwo`].
    pub growth: GrowthPolicy,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Smallest capacity a growth step will allocate under
    /// [`GrowthPolicy::PowerOfTwo`].
    pub const MIN_GROWTH_CAPACITY: usize = 16;

    /// Largest element count any array may hold: the byte size must fit
    /// in `isize`.
    pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<i32>();

    /// Create a config that reserves `initial_capacity` slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Check that the config describes a usable array.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let GrowthPolicy::Factor(factor) = self.growth {
            if factor < 2 {
                return Err(ConfigError::InvalidGrowthFactor { factor });
            }
        }
        if self.initial_capacity > Self::MAX_CAPACITY {
            return Err(ConfigError::InitialCapacityTooLarge {
                requested: self.initial_capacity,
                max: Self::MAX_CAPACITY,
            });
        }
        Ok(())
    }

    /// Initial reservation in bytes.
    pub fn initial_bytes(&self) -> usize {
        self.initial_capacity.saturating_mul(std::mem::size_of::<i32>())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
