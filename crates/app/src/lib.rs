//! # smarthome-app
//!
//! Application layer — the call interface consumed by a presentation layer.
//!
//! ## Responsibilities
//! - [`registry::SmartHome`] — ordered, capacity-bounded device collection with
//!   add / remove / toggle / bulk-switch operations
//! - [`factory::create_device`] — build a device from a category tag
//! - [`config::HomeConfig`] — TOML configuration with environment overrides
//! - [`logging::init`] — opt-in `tracing` subscriber installation
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only. Rendering, event wiring and process
//! entry points belong to the caller.
//!
//! ## Concurrency
//! Everything here is synchronous. A caller sharing one registry between
//! threads must put the whole [`registry::SmartHome`] behind a single lock,
//! since index addressing is invalidated by concurrent removals.

pub mod config;
pub mod factory;
pub mod logging;
pub mod registry;
