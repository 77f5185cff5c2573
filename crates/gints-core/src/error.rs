//! Error types for the gints containers.
//!
//! The container operations themselves never fail: absent handles and
//! out-of-range indices are no-ops or clamps. Errors only arise when
//! building an array from an [`ArrayConfig`](crate::ArrayConfig) or when
//! an explicit capacity request cannot be represented.

use std::error::Error;
use std::fmt;

/// Errors from [`ArrayConfig::validate`](crate::ArrayConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A `GrowthPolicy::Factor` below 2 cannot make progress.
    InvalidGrowthFactor {
        /// The rejected factor.
        factor: u32,
    },
    /// The requested initial capacity exceeds the maximum element count.
    InitialCapacityTooLarge {
        /// Requested capacity in elements.
        requested: usize,
        /// Largest capacity the array can hold.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "growth factor must be at least 2, got {factor}")
            }
            Self::InitialCapacityTooLarge { requested, max } => {
                write!(
                    f,
                    "initial capacity {requested} exceeds maximum of {max} elements"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from fallible array construction and capacity management.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntsError {
    /// The array configuration was rejected.
    Config(ConfigError),
    /// The requested capacity overflows the addressable element count.
    CapacityOverflow {
        /// Number of elements that were requested in total.
        requested: usize,
    },
}

impl fmt::Display for IntsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid array config: {e}"),
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements requested")
            }
        }
    }
}

impl Error for IntsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::CapacityOverflow { .. } => None,
        }
    }
}

impl From<ConfigError> for IntsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
