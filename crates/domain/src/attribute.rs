//! Validated attribute values carried by devices.
//!
//! Each type can only be built through its fallible `new`, so a value that
//! exists is always legal. Inputs are taken as `i64` to let out-of-domain
//! caller values (negative watts, 101 %) reach the validator and be reported
//! as a [`ValidationError`] rather than a conversion failure. Nothing is
//! ever clamped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Power draw of a smart plug, in whole watts (0–150).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ConsumptionRate(u8);

impl ConsumptionRate {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(150);

    /// Validate and wrap a wattage.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] unless `0 <= watts <= 150`.
    pub fn new(watts: i64) -> Result<Self, ValidationError> {
        match u8::try_from(watts) {
            Ok(w) if w <= Self::MAX.0 => Ok(Self(w)),
            _ => Err(ValidationError::OutOfRange {
                attribute: "consumption rate",
                min: Self::MIN.into(),
                max: Self::MAX.into(),
                actual: watts,
            }),
        }
    }

    #[must_use]
    pub const fn watts(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ConsumptionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}W", self.0)
    }
}

impl TryFrom<i64> for ConsumptionRate {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConsumptionRate> for i64 {
    fn from(value: ConsumptionRate) -> Self {
        Self::from(value.0)
    }
}

/// Light level as a percentage (1–100). A lit bulb at 0 % is expressed by
/// switching it off, so zero is not a legal brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(100);

    /// Validate and wrap a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] unless `1 <= percent <= 100`.
    pub fn new(percent: i64) -> Result<Self, ValidationError> {
        match u8::try_from(percent) {
            Ok(p) if (Self::MIN.0..=Self::MAX.0).contains(&p) => Ok(Self(p)),
            _ => Err(ValidationError::OutOfRange {
                attribute: "brightness",
                min: Self::MIN.into(),
                max: Self::MAX.into(),
                actual: percent,
            }),
        }
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for Brightness {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for i64 {
    fn from(value: Brightness) -> Self {
        Self::from(value.0)
    }
}

/// Fridge set-point in °C. Only the discrete steps in [`Temperature::ALLOWED`]
/// are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Temperature(i8);

impl Temperature {
    pub const ALLOWED: &'static [i64] = &[1, 3, 5];

    /// Validate and wrap a set-point.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAllowed`] unless `celsius` is 1, 3 or 5.
    pub fn new(celsius: i64) -> Result<Self, ValidationError> {
        if Self::ALLOWED.contains(&celsius)
            && let Ok(c) = i8::try_from(celsius)
        {
            return Ok(Self(c));
        }
        Err(ValidationError::NotAllowed {
            attribute: "temperature",
            allowed: Self::ALLOWED,
            actual: celsius,
        })
    }

    #[must_use]
    pub const fn celsius(self) -> i8 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<i64> for Temperature {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for i64 {
    fn from(value: Temperature) -> Self {
        Self::from(value.0)
    }
}
