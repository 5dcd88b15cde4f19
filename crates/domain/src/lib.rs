//! # smarthome-domain
//!
//! Pure domain model for the smarthome panel.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions
//! - Define validated **attribute values** (consumption rate, brightness, temperature)
//! - Define **Devices** (plug, light, fridge) with on/off state and one attribute
//! - Define read-only **descriptors** handed to the presentation layer
//! - Contain all invariant enforcement for a single device
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! Collection-level rules (capacity, index addressing) live in the `app` crate.

pub mod error;
pub mod id;

pub mod attribute;
pub mod device;
