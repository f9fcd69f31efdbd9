// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Airflow direction (swing) type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Vertical louver position.
///
/// `P1` points highest and `P5` lowest. Encoded on the wire as `"auto"` and
/// `"p1"` through `"p5"`.
///
/// # Examples
///
/// ```
/// use aircon_remote::types::Swing;
///
/// assert_eq!(Swing::Auto.next(), Swing::P1);
/// assert_eq!(Swing::P5.next(), Swing::Auto);
/// assert_eq!(Swing::P3.position(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swing {
    /// Louver sweeps automatically.
    #[default]
    Auto,
    /// Highest position.
    P1,
    /// Position 2.
    P2,
    /// Position 3.
    P3,
    /// Position 4.
    P4,
    /// Lowest position.
    P5,
}

impl Swing {
    /// Order in which the swing button steps through the positions.
    pub const CYCLE: [Self; 6] = [Self::Auto, Self::P1, Self::P2, Self::P3, Self::P4, Self::P5];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
            Self::P5 => "p5",
        }
    }

    /// Returns the fixed position (1-5), or `None` when sweeping.
    #[must_use]
    pub const fn position(&self) -> Option<u8> {
        match self {
            Self::Auto => None,
            Self::P1 => Some(1),
            Self::P2 => Some(2),
            Self::P3 => Some(3),
            Self::P4 => Some(4),
            Self::P5 => Some(5),
        }
    }

    /// Returns the following position in [`CYCLE`](Self::CYCLE), wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

impl fmt::Display for Swing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Swing {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidSwing(s.to_string()))
    }
}
