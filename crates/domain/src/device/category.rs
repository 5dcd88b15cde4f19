//! Device category — the closed set of supported device kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of a [`Device`](super::Device), fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceCategory {
    #[serde(rename = "SmartPlug")]
    Plug,
    #[serde(rename = "SmartLight")]
    Light,
    #[serde(rename = "SmartFridge")]
    Fridge,
}

impl DeviceCategory {
    pub const ALL: [Self; 3] = [Self::Plug, Self::Light, Self::Fridge];

    /// Canonical category tag shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plug => "SmartPlug",
            Self::Light => "SmartLight",
            Self::Fridge => "SmartFridge",
        }
    }

    /// Human-readable name of the category's attribute.
    #[must_use]
    pub const fn attribute_label(self) -> &'static str {
        match self {
            Self::Plug => "Consumption Rate",
            Self::Light => "Brightness",
            Self::Fridge => "Temperature",
        }
    }

    /// Unit suffix appended to the attribute value.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Plug => "W",
            Self::Light => "%",
            Self::Fridge => "°C",
        }
    }

    /// Initial attribute value used when the caller does not supply one.
    #[must_use]
    pub const fn default_value(self) -> i64 {
        match self {
            Self::Plug => 0,
            Self::Light => 50,
            Self::Fridge => 3,
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = ValidationError;

    /// Accepts the canonical tag (`SmartPlug`) or the short name (`plug`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                let tag = category.as_str();
                wanted.eq_ignore_ascii_case(tag) || wanted.eq_ignore_ascii_case(&tag[5..])
            })
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
