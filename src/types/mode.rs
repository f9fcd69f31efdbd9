// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode of the air conditioner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode selected by the cool / dry / heat buttons.
///
/// # Examples
///
/// ```
/// use aircon_remote::types::Mode;
///
/// assert_eq!(Mode::Dry.as_str(), "dry");
/// assert_eq!("Heat".parse::<Mode>().unwrap(), Mode::Heat);
/// assert_eq!(Mode::default(), Mode::Cool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Cooling.
    #[default]
    Cool,
    /// Dehumidifying.
    Dry,
    /// Heating.
    Heat,
}

impl Mode {
    /// All modes, in button order.
    pub const ALL: [Self; 3] = [Self::Cool, Self::Dry, Self::Heat];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Dry => "dry",
            Self::Heat => "heat",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_from_str_invalid() {
        assert!(matches!(
            "fan".parse::<Mode>().unwrap_err(),
            ValueError::InvalidMode(_)
        ));
    }

    #[test]
    fn mode_serde() {
        assert_eq!(serde_json::to_string(&Mode::Heat).unwrap(), "\"heat\"");
        assert!(serde_json::from_str::<Mode>("\"auto\"").is_err());
    }
}
