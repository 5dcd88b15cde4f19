//! Device — a smart appliance with an on/off switch and one validated attribute.
//!
//! The category-specific part of a device is the [`DeviceAttribute`] sum type;
//! the category is derived from its variant, so it cannot change after
//! construction. Construction and later updates share one validation path.

mod category;
mod descriptor;

pub use category::DeviceCategory;
pub use descriptor::DeviceDescriptor;

/// UTC timestamp of a device's last state or attribute change.
pub type Timestamp = DateTime<Utc>;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attribute::{Brightness, ConsumptionRate, Temperature};
use crate::error::{SmartHomeError, ValidationError};
use crate::id::DeviceId;

/// Category-specific payload of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "value")]
pub enum DeviceAttribute {
    #[serde(rename = "SmartPlug")]
    Plug(ConsumptionRate),
    #[serde(rename = "SmartLight")]
    Light(Brightness),
    #[serde(rename = "SmartFridge")]
    Fridge(Temperature),
}

impl DeviceAttribute {
    /// Validate `value` against the rule of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `value` is outside the category's domain.
    pub fn new(category: DeviceCategory, value: i64) -> Result<Self, ValidationError> {
        Ok(match category {
            DeviceCategory::Plug => Self::Plug(ConsumptionRate::new(value)?),
            DeviceCategory::Light => Self::Light(Brightness::new(value)?),
            DeviceCategory::Fridge => Self::Fridge(Temperature::new(value)?),
        })
    }

    #[must_use]
    pub const fn category(self) -> DeviceCategory {
        match self {
            Self::Plug(_) => DeviceCategory::Plug,
            Self::Light(_) => DeviceCategory::Light,
            Self::Fridge(_) => DeviceCategory::Fridge,
        }
    }

    /// Raw numeric value, without unit.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Plug(rate) => rate.into(),
            Self::Light(brightness) => brightness.into(),
            Self::Fridge(temperature) => temperature.into(),
        }
    }
}

impl fmt::Display for DeviceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plug(rate) => fmt::Display::fmt(rate, f),
            Self::Light(brightness) => fmt::Display::fmt(brightness, f),
            Self::Fridge(temperature) => fmt::Display::fmt(temperature, f),
        }
    }
}

/// A smart plug, light, or fridge.
///
/// Fields are private: every mutation goes through a method that keeps the
/// attribute legal. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: DeviceId,
    name: String,
    is_on: bool,
    attribute: DeviceAttribute,
    last_changed: Timestamp,
}

impl Device {
    /// Create a switched-off device of `category` with an initial attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when `name` is empty or
    /// `value` is illegal for `category`. No device is produced in that case.
    pub fn new(
        category: DeviceCategory,
        name: impl Into<String>,
        value: i64,
    ) -> Result<Self, SmartHomeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let attribute = DeviceAttribute::new(category, value)?;
        Ok(Self {
            id: DeviceId::generate(),
            name,
            is_on: false,
            attribute,
            last_changed: Utc::now(),
        })
    }

    /// Create a smart plug drawing `watts` (0–150).
    ///
    /// # Errors
    ///
    /// See [`Device::new`].
    pub fn plug(name: impl Into<String>, watts: i64) -> Result<Self, SmartHomeError> {
        Self::new(DeviceCategory::Plug, name, watts)
    }

    /// Create a smart light at `percent` brightness (1–100).
    ///
    /// # Errors
    ///
    /// See [`Device::new`].
    pub fn light(name: impl Into<String>, percent: i64) -> Result<Self, SmartHomeError> {
        Self::new(DeviceCategory::Light, name, percent)
    }

    /// Create a smart fridge set to `celsius` (1, 3 or 5).
    ///
    /// # Errors
    ///
    /// See [`Device::new`].
    pub fn fridge(name: impl Into<String>, celsius: i64) -> Result<Self, SmartHomeError> {
        Self::new(DeviceCategory::Fridge, name, celsius)
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn category(&self) -> DeviceCategory {
        self.attribute.category()
    }

    #[must_use]
    pub fn attribute(&self) -> DeviceAttribute {
        self.attribute
    }

    #[must_use]
    pub fn attribute_value(&self) -> i64 {
        self.attribute.value()
    }

    #[must_use]
    pub fn attribute_label(&self) -> &'static str {
        self.category().attribute_label()
    }

    #[must_use]
    pub fn last_changed(&self) -> Timestamp {
        self.last_changed
    }

    /// Consumption rate, if this device is a plug.
    #[must_use]
    pub fn consumption_rate(&self) -> Option<ConsumptionRate> {
        match self.attribute {
            DeviceAttribute::Plug(rate) => Some(rate),
            _ => None,
        }
    }

    /// Brightness, if this device is a light.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        match self.attribute {
            DeviceAttribute::Light(brightness) => Some(brightness),
            _ => None,
        }
    }

    /// Temperature set-point, if this device is a fridge.
    #[must_use]
    pub fn temperature(&self) -> Option<Temperature> {
        match self.attribute {
            DeviceAttribute::Fridge(temperature) => Some(temperature),
            _ => None,
        }
    }

    /// Flip the on/off switch. The attribute is left untouched.
    pub fn toggle_switch(&mut self) {
        self.is_on = !self.is_on;
        self.last_changed = Utc::now();
    }

    /// Force the switch to `on`. Returns `true` when the state actually changed.
    pub fn set_power(&mut self, on: bool) -> bool {
        if self.is_on == on {
            return false;
        }
        self.is_on = on;
        self.last_changed = Utc::now();
        true
    }

    /// Replace the attribute value after validating it against this device's category.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `value` is illegal; the stored value
    /// is unchanged in that case.
    pub fn set_attribute(&mut self, value: i64) -> Result<(), ValidationError> {
        self.attribute = DeviceAttribute::new(self.category(), value)?;
        self.last_changed = Utc::now();
        Ok(())
    }

    /// Multi-line human-readable summary of the current state.
    #[must_use]
    pub fn status_text(&self) -> String {
        format!(
            "Category: {}\nName: {}\nState: {}\n{}: {}",
            self.category(),
            self.name,
            if self.is_on { "ON" } else { "OFF" },
            self.attribute_label(),
            self.attribute,
        )
    }

    /// Single-line identity used for list display, e.g. `SmartPlug - Kitchen`.
    #[must_use]
    pub fn short_label(&self) -> String {
        self.to_string()
    }

    /// Detached read-only view of this device.
    #[must_use]
    pub fn descriptor(&self) -> DeviceDescriptor {
        let category = self.category();
        DeviceDescriptor {
            id: self.id,
            name: self.name.clone(),
            category,
            is_on: self.is_on,
            attribute_label: category.attribute_label().to_string(),
            attribute_value: self.attribute_value(),
            unit: category.unit().to_string(),
            last_changed: self.last_changed,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.category(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_switched_off() {
        let device = Device::plug("Kitchen", 45).unwrap();
        assert!(!device.is_on());
        assert_eq!(device.name(), "Kitchen");
        assert_eq!(device.category(), DeviceCategory::Plug);
        assert_eq!(device.attribute_value(), 45);
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Device::light("  ", 50);
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_fail_construction_with_illegal_initial_value() {
        assert!(Device::plug("Kitchen", -1).is_err());
        assert!(Device::plug("Kitchen", 151).is_err());
        assert!(Device::light("Lounge", 0).is_err());
        assert!(Device::light("Lounge", 101).is_err());
        assert!(matches!(
            Device::fridge("Main", 2),
            Err(SmartHomeError::Validation(ValidationError::NotAllowed {
                actual: 2,
                ..
            }))
        ));
    }

    #[test]
    fn should_accept_boundary_values() {
        assert_eq!(Device::plug("p", 0).unwrap().attribute_value(), 0);
        assert_eq!(Device::plug("p", 150).unwrap().attribute_value(), 150);
        assert_eq!(Device::light("l", 1).unwrap().attribute_value(), 1);
        assert_eq!(Device::light("l", 100).unwrap().attribute_value(), 100);
        for celsius in [1, 3, 5] {
            assert_eq!(
                Device::fridge("f", celsius).unwrap().attribute_value(),
                celsius
            );
        }
    }

    #[test]
    fn should_return_to_original_state_after_double_toggle() {
        let mut device = Device::light("Lounge", 50).unwrap();
        device.toggle_switch();
        assert!(device.is_on());
        device.toggle_switch();
        assert!(!device.is_on());
    }

    #[test]
    fn should_not_touch_consumption_when_toggled() {
        let mut device = Device::plug("Kitchen", 45).unwrap();
        device.toggle_switch();
        assert_eq!(device.consumption_rate().unwrap().watts(), 45);
        device.toggle_switch();
        assert_eq!(device.consumption_rate().unwrap().watts(), 45);
    }

    #[test]
    fn should_report_whether_set_power_changed_state() {
        let mut device = Device::plug("Kitchen", 45).unwrap();
        assert!(device.set_power(true));
        assert!(!device.set_power(true));
        assert!(device.is_on());
        assert!(device.set_power(false));
    }

    #[test]
    fn should_store_valid_attribute_update() {
        let mut device = Device::light("Lounge", 50).unwrap();
        device.set_attribute(80).unwrap();
        assert_eq!(device.brightness().unwrap().percent(), 80);
    }

    #[test]
    fn should_keep_previous_value_when_update_is_invalid() {
        let mut plug = Device::plug("Kitchen", 45).unwrap();
        assert!(plug.set_attribute(151).is_err());
        assert!(plug.set_attribute(-1).is_err());
        assert_eq!(plug.attribute_value(), 45);

        let mut light = Device::light("Lounge", 50).unwrap();
        assert!(light.set_attribute(0).is_err());
        assert_eq!(light.attribute_value(), 50);

        let mut fridge = Device::fridge("Main", 3).unwrap();
        assert!(matches!(
            fridge.set_attribute(4),
            Err(ValidationError::NotAllowed { actual: 4, .. })
        ));
        assert_eq!(fridge.attribute_value(), 3);
    }

    #[test]
    fn should_reflect_new_fridge_temperature_in_status_text() {
        let mut fridge = Device::fridge("Main", 3).unwrap();
        fridge.set_attribute(5).unwrap();
        assert!(fridge.status_text().contains("5°C"));
    }

    #[test]
    fn should_format_status_text() {
        let mut plug = Device::plug("Kitchen", 45).unwrap();
        plug.toggle_switch();
        assert_eq!(
            plug.status_text(),
            "Category: SmartPlug\nName: Kitchen\nState: ON\nConsumption Rate: 45W"
        );

        let light = Device::light("Lounge", 50).unwrap();
        assert_eq!(
            light.status_text(),
            "Category: SmartLight\nName: Lounge\nState: OFF\nBrightness: 50%"
        );
    }

    #[test]
    fn should_format_short_label() {
        let fridge = Device::fridge("Main", 3).unwrap();
        assert_eq!(fridge.short_label(), "SmartFridge - Main");
    }

    #[test]
    fn should_expose_only_matching_typed_getter() {
        let fridge = Device::fridge("Main", 1).unwrap();
        assert!(fridge.consumption_rate().is_none());
        assert!(fridge.brightness().is_none());
        assert_eq!(fridge.temperature().unwrap().celsius(), 1);
    }

    #[test]
    fn should_build_descriptor_from_current_state() {
        let mut light = Device::light("Lounge", 50).unwrap();
        light.toggle_switch();
        let descriptor = light.descriptor();
        assert_eq!(descriptor.id, light.id());
        assert_eq!(descriptor.name, "Lounge");
        assert_eq!(descriptor.category, DeviceCategory::Light);
        assert!(descriptor.is_on);
        assert_eq!(descriptor.attribute_label, "Brightness");
        assert_eq!(descriptor.attribute_value, 50);
        assert_eq!(descriptor.unit, "%");
    }

    #[test]
    fn should_serialize_attribute_with_category_tag() {
        let attribute = DeviceAttribute::new(DeviceCategory::Plug, 45).unwrap();
        let json = serde_json::to_value(attribute).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "SmartPlug", "value": 45})
        );
    }
}
