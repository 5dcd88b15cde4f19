//! Common error types used across the workspace.
//!
//! Each failure kind is its own typed error; [`SmartHomeError`] wraps them
//! via `#[from]` so callers can use `?` regardless of which guard rejected
//! the operation. None of these errors leaves a device or the registry in a
//! modified state.

/// Top-level error returned by device and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmartHomeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("capacity exceeded")]
    CapacityExceeded(#[from] CapacityExceededError),

    #[error("index out of range")]
    IndexOutOfRange(#[from] IndexOutOfRangeError),
}

/// A value falls outside the legal domain of the field it was assigned to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device name must not be empty")]
    EmptyName,

    #[error("unknown device category {0:?}")]
    UnknownCategory(String),

    #[error("{attribute} {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        attribute: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{attribute} {actual} is not one of {allowed:?}")]
    NotAllowed {
        attribute: &'static str,
        allowed: &'static [i64],
        actual: i64,
    },
}

/// The registry already holds its maximum number of devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("registry is full ({max_devices} devices)")]
pub struct CapacityExceededError {
    pub max_devices: usize,
}

/// An index-addressed operation referenced a position that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of range for {len} devices")]
pub struct IndexOutOfRangeError {
    pub index: usize,
    pub len: usize,
}
