//! Device registry — the ordered, capacity-bounded collection behind the panel.
//!
//! Devices are addressed by their position in insertion order. Removing a
//! device shifts every later device down by one, so an index held across a
//! removal is stale and must be resolved again (by name or from a fresh
//! [`SmartHome::list`]).

use smarthome_domain::device::{Device, DeviceCategory, DeviceDescriptor};
use smarthome_domain::error::{CapacityExceededError, IndexOutOfRangeError, SmartHomeError};

use crate::config::HomeConfig;
use crate::factory::default_name;

/// Default maximum number of devices a registry accepts.
pub const DEFAULT_MAX_DEVICES: usize = 10;

/// Owns every device shown on the panel.
#[derive(Debug, Clone)]
pub struct SmartHome {
    devices: Vec<Device>,
    max_devices: usize,
}

impl Default for SmartHome {
    fn default() -> Self {
        Self::with_max_devices(DEFAULT_MAX_DEVICES)
    }
}

impl SmartHome {
    /// Create an empty registry holding at most [`DEFAULT_MAX_DEVICES`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry holding at most `max_devices`.
    ///
    /// The limit is only enforced on add; nothing is allocated up front.
    #[must_use]
    pub fn with_max_devices(max_devices: usize) -> Self {
        Self {
            devices: Vec::new(),
            max_devices,
        }
    }

    /// Create an empty registry sized from configuration.
    #[must_use]
    pub fn from_config(config: &HomeConfig) -> Self {
        Self::with_max_devices(config.registry.max_devices)
    }

    #[must_use]
    pub fn max_devices(&self) -> usize {
        self.max_devices
    }

    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.devices.len() >= self.max_devices
    }

    /// Borrow the devices in display order.
    #[must_use]
    pub fn snapshot(&self) -> &[Device] {
        &self.devices
    }

    /// Detached descriptors of every device, in display order.
    #[must_use]
    pub fn list(&self) -> Vec<DeviceDescriptor> {
        self.devices.iter().map(Device::descriptor).collect()
    }

    #[must_use]
    pub fn device(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    /// Position and reference of the first device called `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &Device)> {
        self.devices
            .iter()
            .enumerate()
            .find(|(_, device)| device.name() == name)
    }

    /// Append a device at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::CapacityExceeded`] when the registry is full;
    /// the list is unchanged and `device` is dropped.
    #[tracing::instrument(skip(self, device), fields(device = %device))]
    pub fn add_device(&mut self, device: Device) -> Result<(), SmartHomeError> {
        if self.is_full() {
            tracing::warn!(max_devices = self.max_devices, "registry full, device rejected");
            return Err(CapacityExceededError {
                max_devices: self.max_devices,
            }
            .into());
        }
        self.devices.push(device);
        tracing::debug!(count = self.devices.len(), "device added");
        Ok(())
    }

    /// Create a device named after its category and position (`SmartLight3`)
    /// with the category's default value, and append it.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::CapacityExceeded`] when the registry is full.
    pub fn add_default_device(
        &mut self,
        category: DeviceCategory,
    ) -> Result<&Device, SmartHomeError> {
        let name = default_name(category, self.devices.len() + 1);
        let device = Device::new(category, name, category.default_value())?;
        self.add_device(device)?;
        let index = self.devices.len() - 1;
        tracing::debug!(index, category = %category, "default device added");
        Ok(&self.devices[index])
    }

    /// Remove and return the device at `index`; later devices shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::IndexOutOfRange`] when `index >= device_count()`.
    #[tracing::instrument(skip(self))]
    pub fn remove_device(&mut self, index: usize) -> Result<Device, SmartHomeError> {
        self.check_index(index)?;
        let device = self.devices.remove(index);
        tracing::debug!(device = %device, "device removed");
        Ok(device)
    }

    /// Remove the **first** device called `name` and return it.
    ///
    /// Later devices with the same name stay in place. No match is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn remove_device_by_name(&mut self, name: &str) -> Option<Device> {
        let Some((index, _)) = self.find_by_name(name) else {
            tracing::debug!("no device with that name");
            return None;
        };
        let device = self.devices.remove(index);
        tracing::debug!(index, "device removed");
        Some(device)
    }

    /// Flip the switch of the device at `index`, returning its new state.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::IndexOutOfRange`] when `index >= device_count()`.
    #[tracing::instrument(skip(self))]
    pub fn toggle_device(&mut self, index: usize) -> Result<bool, SmartHomeError> {
        let device = self.device_mut(index)?;
        device.toggle_switch();
        tracing::debug!(is_on = device.is_on(), "device toggled");
        Ok(device.is_on())
    }

    /// Flip the switch of the first device called `name`.
    ///
    /// Returns the new state, or `None` when no device has that name.
    #[tracing::instrument(skip(self))]
    pub fn toggle_device_by_name(&mut self, name: &str) -> Option<bool> {
        let Some(device) = self.devices.iter_mut().find(|d| d.name() == name) else {
            tracing::debug!("no device with that name");
            return None;
        };
        device.toggle_switch();
        tracing::debug!(is_on = device.is_on(), "device toggled");
        Some(device.is_on())
    }

    /// Update the attribute of the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::IndexOutOfRange`] for a bad index, or
    /// [`SmartHomeError::Validation`] when `value` is illegal for the device
    /// (its previous value is kept).
    #[tracing::instrument(skip(self))]
    pub fn set_device_attribute(
        &mut self,
        index: usize,
        value: i64,
    ) -> Result<(), SmartHomeError> {
        let device = self.device_mut(index)?;
        device
            .set_attribute(value)
            .inspect_err(|err| tracing::warn!(error = %err, "attribute update rejected"))?;
        Ok(())
    }

    /// Switch every device on.
    pub fn switch_all_on(&mut self) {
        self.toggle_all(true);
    }

    /// Switch every device off.
    pub fn switch_all_off(&mut self) {
        self.toggle_all(false);
    }

    /// Set every device to `on`, regardless of its current state.
    #[tracing::instrument(skip(self))]
    pub fn toggle_all(&mut self, on: bool) {
        let changed = self
            .devices
            .iter_mut()
            .map(|device| device.set_power(on))
            .filter(|changed| *changed)
            .count();
        tracing::debug!(changed, "bulk switch applied");
    }

    fn device_mut(&mut self, index: usize) -> Result<&mut Device, SmartHomeError> {
        self.check_index(index)?;
        Ok(&mut self.devices[index])
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfRangeError> {
        if index < self.devices.len() {
            return Ok(());
        }
        tracing::warn!(index, len = self.devices.len(), "stale or invalid device index");
        Err(IndexOutOfRangeError {
            index,
            len: self.devices.len(),
        })
    }
}
