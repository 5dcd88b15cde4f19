//! Device factory — builds a [`Device`] from a category tag.

use smarthome_domain::device::{Device, DeviceCategory};
use smarthome_domain::error::SmartHomeError;

/// Create a switched-off device from a category tag such as `"SmartPlug"` or `"light"`.
///
/// # Errors
///
/// Returns [`SmartHomeError::Validation`] for an unknown category, an empty
/// name, or an initial value outside the category's domain.
pub fn create_device(
    category: &str,
    name: impl Into<String>,
    initial_value: i64,
) -> Result<Device, SmartHomeError> {
    let category: DeviceCategory = category.parse()?;
    Device::new(category, name, initial_value)
}

/// Name given to a device added without an explicit one, e.g. `SmartLight3`.
#[must_use]
pub fn default_name(category: DeviceCategory, position: usize) -> String {
    format!("{category}{position}")
}
