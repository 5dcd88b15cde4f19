//! Device identifiers.
//!
//! Identifiers are informational: the registry addresses devices by position
//! and name, never by id. They let a presentation layer tell apart two
//! descriptors that share a name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Random identifier assigned to a [`Device`](crate::device::Device) at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(uuid::Uuid);

impl DeviceId {
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::device::Device;

    #[test]
    fn should_assign_distinct_ids_to_devices_with_same_name() {
        let first = Device::light("Lamp", 50).unwrap();
        let second = Device::light("Lamp", 50).unwrap();
        assert_ne!(first.id(), second.id());
        assert_ne!(first.descriptor().id, second.descriptor().id);
    }

    #[test]
    fn should_serialize_as_plain_uuid_string() {
        let device = Device::plug("Kitchen", 45).unwrap();
        let json = serde_json::to_value(device.id()).unwrap();
        assert_eq!(json, serde_json::Value::String(device.id().to_string()));
    }
}
