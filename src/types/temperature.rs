// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type.
//!
//! The unit accepts whole degrees Celsius between 16 and 30 inclusive. The
//! type makes it impossible to hold a value outside that range, including
//! values decoded from the state endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Target temperature in degrees Celsius (16-30).
///
/// # Examples
///
/// ```
/// use aircon_remote::types::Temperature;
///
/// let t = Temperature::new(29).unwrap();
/// let t = t.increment().unwrap();
/// assert_eq!(t.value(), 30);
///
/// // Already at the upper bound
/// assert!(t.increment().is_none());
///
/// assert!(Temperature::new(15).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Temperature(u8);

impl Temperature {
    /// Lowest settable temperature.
    pub const MIN: Self = Self(16);

    /// Highest settable temperature.
    pub const MAX: Self = Self(30);

    /// Temperature a freshly created state starts with.
    pub const DEFAULT: Self = Self(25);

    /// Creates a new temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [16, 30].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN.0),
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a temperature, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the value in degrees.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// One degree warmer, or `None` at the upper bound.
    #[must_use]
    pub const fn increment(self) -> Option<Self> {
        if self.0 >= Self::MAX.0 {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// One degree cooler, or `None` at the lower bound.
    #[must_use]
    pub const fn decrement(self) -> Option<Self> {
        if self.0 <= Self::MIN.0 {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Temperature {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for u8 {
    fn from(value: Temperature) -> Self {
        value.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}
