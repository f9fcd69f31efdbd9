// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type.
//!
//! The fan button steps through a fixed cycle: automatic, then speeds 1 to 5,
//! then back to automatic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Fan speed setting.
///
/// Encoded on the wire as `"auto"` and `"f1"` through `"f5"`.
///
/// # Examples
///
/// ```
/// use aircon_remote::types::FanSpeed;
///
/// let mut fan = FanSpeed::Auto;
/// fan = fan.next();
/// assert_eq!(fan, FanSpeed::F1);
/// assert_eq!(fan.level(), Some(1));
///
/// assert_eq!(FanSpeed::F5.next(), FanSpeed::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanSpeed {
    /// Speed chosen by the unit.
    #[default]
    Auto,
    /// Speed 1 (lowest).
    F1,
    /// Speed 2.
    F2,
    /// Speed 3.
    F3,
    /// Speed 4.
    F4,
    /// Speed 5 (highest).
    F5,
}

impl FanSpeed {
    /// Order in which the fan button steps through the speeds.
    pub const CYCLE: [Self; 6] = [Self::Auto, Self::F1, Self::F2, Self::F3, Self::F4, Self::F5];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::F3 => "f3",
            Self::F4 => "f4",
            Self::F5 => "f5",
        }
    }

    /// Returns the manual speed level (1-5), or `None` for automatic.
    #[must_use]
    pub const fn level(&self) -> Option<u8> {
        match self {
            Self::Auto => None,
            Self::F1 => Some(1),
            Self::F2 => Some(2),
            Self::F3 => Some(3),
            Self::F4 => Some(4),
            Self::F5 => Some(5),
        }
    }

    /// Returns the following speed in [`CYCLE`](Self::CYCLE), wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|speed| speed.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidFanSpeed(s.to_string()))
    }
}
