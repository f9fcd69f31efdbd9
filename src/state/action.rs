// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User actions and their pure state transitions.
//!
//! Every button of the remote maps to one [`Action`]. Applying an action is
//! a pure function of the current state: it either yields the next state or
//! rejects the action. Each action also declares how the result reaches the
//! device through [`SyncPolicy`].
//!
//! # Transition Rules
//!
//! | Action          | Rejected when                        | Sync      |
//! |-----------------|--------------------------------------|-----------|
//! | `PowerOff`      | already off                          | immediate |
//! | `SelectMode`    | never (also turns power on)          | immediate |
//! | `IncrementTemp` | off, or already at 30                | debounced |
//! | `DecrementTemp` | off, or already at 16                | debounced |
//! | `ToggleFan`     | off, or fan not supported            | debounced |
//! | `ToggleSwing`   | off, or swing not supported          | debounced |
//!
//! # Examples
//!
//! ```
//! use aircon_remote::Capabilities;
//! use aircon_remote::state::{Action, DeviceState};
//! use aircon_remote::types::{Mode, PowerState};
//!
//! let caps = Capabilities::default();
//! let off = DeviceState::default();
//!
//! // Temperature is locked while off
//! assert!(Action::IncrementTemp.apply(&off, &caps).is_none());
//!
//! // Selecting a mode turns the unit on
//! let on = Action::SelectMode(Mode::Heat).apply(&off, &caps).unwrap();
//! assert_eq!(on.power(), PowerState::On);
//! assert_eq!(on.mode(), Mode::Heat);
//! ```

use std::fmt;

use crate::capabilities::Capabilities;
use crate::types::{Mode, PowerState};

use super::DeviceState;

/// A user action on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn the unit off.
    PowerOff,
    /// Turn the unit on in the given mode.
    SelectMode(Mode),
    /// Raise the target temperature by one degree.
    IncrementTemp,
    /// Lower the target temperature by one degree.
    DecrementTemp,
    /// Step the fan speed.
    ToggleFan,
    /// Step the louver position.
    ToggleSwing,
}

/// How an accepted action is propagated to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncPolicy {
    /// Push the full state right away.
    Immediate,
    /// Push the full state once input has been quiet for the debounce period.
    Debounced,
}

impl Action {
    /// Applies the action to `state`.
    ///
    /// Returns the next state, or `None` if the action is rejected. Mode
    /// selection is never rejected, even when it leaves the state unchanged,
    /// because it is an explicit command the device should receive again.
    #[must_use]
    pub fn apply(&self, state: &DeviceState, capabilities: &Capabilities) -> Option<DeviceState> {
        match *self {
            Self::PowerOff => state
                .is_on()
                .then(|| state.with_power(PowerState::Off)),
            Self::SelectMode(mode) => Some(state.with_power(PowerState::On).with_mode(mode)),
            Self::IncrementTemp => {
                if !state.is_on() {
                    return None;
                }
                state.temp().increment().map(|t| state.with_temp(t))
            }
            Self::DecrementTemp => {
                if !state.is_on() {
                    return None;
                }
                state.temp().decrement().map(|t| state.with_temp(t))
            }
            Self::ToggleFan => (state.is_on() && capabilities.supports_fan())
                .then(|| state.with_fan(state.fan().next())),
            Self::ToggleSwing => (state.is_on() && capabilities.supports_swing())
                .then(|| state.with_swing(state.swing().next())),
        }
    }

    /// Returns how the result of this action reaches the device.
    #[must_use]
    pub const fn sync_policy(&self) -> SyncPolicy {
        match self {
            Self::PowerOff | Self::SelectMode(_) => SyncPolicy::Immediate,
            Self::IncrementTemp | Self::DecrementTemp | Self::ToggleFan | Self::ToggleSwing => {
                SyncPolicy::Debounced
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerOff => write!(f, "power off"),
            Self::SelectMode(mode) => write!(f, "select {mode}"),
            Self::IncrementTemp => write!(f, "temp up"),
            Self::DecrementTemp => write!(f, "temp down"),
            Self::ToggleFan => write!(f, "toggle fan"),
            Self::ToggleSwing => write!(f, "toggle swing"),
        }
    }
}
