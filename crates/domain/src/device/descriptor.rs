//! Read-only device view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::{DeviceCategory, Timestamp};
use crate::id::DeviceId;

/// Flat snapshot of a device at the moment it was taken.
///
/// Mutating a descriptor has no effect on the device it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub id: DeviceId,
    pub name: String,
    pub category: DeviceCategory,
    pub is_on: bool,
    pub attribute_label: String,
    pub attribute_value: i64,
    pub unit: String,
    pub last_changed: Timestamp,
}
