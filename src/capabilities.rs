// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional controls of the air conditioner.
//!
//! Power, mode and temperature are always available. Fan speed and swing
//! stepping depend on the unit; toggling a control the unit lacks is rejected
//! like any other invalid transition.

/// Optional controls supported by a unit.
///
/// # Examples
///
/// ```
/// use aircon_remote::Capabilities;
///
/// let full = Capabilities::default();
/// assert!(full.fan && full.swing);
///
/// let basic = Capabilities::basic();
/// assert!(!basic.fan && !basic.swing);
///
/// let fan_only = Capabilities::basic().with_fan();
/// assert!(fan_only.fan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Fan speed can be stepped.
    pub fan: bool,

    /// Louver position can be stepped.
    pub swing: bool,
}

impl Capabilities {
    /// All optional controls enabled.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            fan: true,
            swing: true,
        }
    }

    /// Power, mode and temperature only.
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            fan: false,
            swing: false,
        }
    }

    /// Enables fan speed stepping.
    #[must_use]
    pub const fn with_fan(mut self) -> Self {
        self.fan = true;
        self
    }

    /// Enables louver position stepping.
    #[must_use]
    pub const fn with_swing(mut self) -> Self {
        self.swing = true;
        self
    }

    /// Returns `true` if fan speed can be stepped.
    #[must_use]
    pub const fn supports_fan(&self) -> bool {
        self.fan
    }

    /// Returns `true` if louver position can be stepped.
    #[must_use]
    pub const fn supports_swing(&self) -> bool {
        self.swing
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}
