// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commanded air conditioner state.

use serde::{Deserialize, Serialize};

use crate::types::{FanSpeed, Mode, PowerState, Swing, Temperature};

/// Commanded state of the air conditioner.
///
/// This is the value exchanged with the state endpoint, serialized as
/// `{"power", "mode", "temp", "fan", "direction"}`. Decoding also accepts
/// `"swing"` in place of `"direction"`.
///
/// Values are built with the `with_*` methods; transitions that respect the
/// power invariants go through [`Action`](super::Action).
///
/// # Examples
///
/// ```
/// use aircon_remote::state::DeviceState;
/// use aircon_remote::types::{Mode, PowerState, Temperature};
///
/// let state = DeviceState::default();
/// assert_eq!(state.power(), PowerState::Off);
/// assert_eq!(state.mode(), Mode::Cool);
/// assert_eq!(state.temp().value(), 25);
///
/// let heating = DeviceState::default()
///     .with_power(PowerState::On)
///     .with_mode(Mode::Heat)
///     .with_temp(Temperature::new(22).unwrap());
/// assert!(heating.is_on());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceState {
    power: PowerState,
    mode: Mode,
    temp: Temperature,
    fan: FanSpeed,
    #[serde(rename = "direction", alias = "swing")]
    swing: Swing,
}

impl DeviceState {
    /// Creates the default state: off, cool, 25 °C, automatic fan and swing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the unit is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Returns the operating mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the target temperature.
    #[must_use]
    pub const fn temp(&self) -> Temperature {
        self.temp
    }

    /// Returns the fan speed.
    #[must_use]
    pub const fn fan(&self) -> FanSpeed {
        self.fan
    }

    /// Returns the louver position.
    #[must_use]
    pub const fn swing(&self) -> Swing {
        self.swing
    }

    /// Returns a copy with the given power state.
    #[must_use]
    pub const fn with_power(mut self, power: PowerState) -> Self {
        self.power = power;
        self
    }

    /// Returns a copy with the given mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with the given target temperature.
    #[must_use]
    pub const fn with_temp(mut self, temp: Temperature) -> Self {
        self.temp = temp;
        self
    }

    /// Returns a copy with the given fan speed.
    #[must_use]
    pub const fn with_fan(mut self, fan: FanSpeed) -> Self {
        self.fan = fan;
        self
    }

    /// Returns a copy with the given louver position.
    #[must_use]
    pub const fn with_swing(mut self, swing: Swing) -> Self {
        self.swing = swing;
        self
    }
}
