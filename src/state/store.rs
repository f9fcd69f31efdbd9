// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Owned, observable container for the device state.

use std::sync::Arc;

use tokio::sync::watch;

use crate::capabilities::Capabilities;
use crate::types::Mode;

use super::{Action, DeviceState};

/// Shared handle to the commanded device state.
///
/// A `Store` is cheap to clone; clones refer to the same state. Writes are
/// serialized by the underlying [`watch`] channel, and subscribers are woken
/// only when a write reports a change.
///
/// Mutation methods return `true` when the action was accepted and `false`
/// when it was rejected (see [`Action`] for the rules). A rejected action
/// leaves the state untouched.
///
/// # Examples
///
/// ```
/// use aircon_remote::state::Store;
/// use aircon_remote::Capabilities;
///
/// let store = Store::new(Capabilities::default());
///
/// // Off by default: temperature is locked
/// assert!(!store.increment_temp());
///
/// assert!(store.enable_cool_mode());
/// assert!(store.increment_temp());
/// assert_eq!(store.snapshot().temp().value(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<DeviceState>>,
    capabilities: Capabilities,
}

impl Store {
    /// Creates a store holding [`DeviceState::default()`].
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self::with_state(DeviceState::default(), capabilities)
    }

    /// Creates a store holding `state`.
    #[must_use]
    pub fn with_state(state: DeviceState, capabilities: Capabilities) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx: Arc::new(tx),
            capabilities,
        }
    }

    /// Returns the optional controls this store accepts.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DeviceState {
        *self.tx.borrow()
    }

    /// Returns a receiver that observes every accepted change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DeviceState> {
        self.tx.subscribe()
    }

    /// Overwrites the whole state, e.g. with the state reported by the device.
    pub fn replace(&self, state: DeviceState) {
        self.tx.send_replace(state);
    }

    /// Applies `action` atomically. Returns `true` if it was accepted.
    pub fn apply(&self, action: Action) -> bool {
        let capabilities = self.capabilities;
        self.tx
            .send_if_modified(|state| match action.apply(state, &capabilities) {
                Some(next) => {
                    *state = next;
                    true
                }
                None => false,
            })
    }

    /// Turns the unit off. Returns `false` if it was already off.
    pub fn power_off(&self) -> bool {
        self.apply(Action::PowerOff)
    }

    /// Turns the unit on in cooling mode.
    pub fn enable_cool_mode(&self) -> bool {
        self.apply(Action::SelectMode(Mode::Cool))
    }

    /// Turns the unit on in dry mode.
    pub fn enable_dry_mode(&self) -> bool {
        self.apply(Action::SelectMode(Mode::Dry))
    }

    /// Turns the unit on in heating mode.
    pub fn enable_heat_mode(&self) -> bool {
        self.apply(Action::SelectMode(Mode::Heat))
    }

    /// Raises the target temperature by one degree.
    pub fn increment_temp(&self) -> bool {
        self.apply(Action::IncrementTemp)
    }

    /// Lowers the target temperature by one degree.
    pub fn decrement_temp(&self) -> bool {
        self.apply(Action::DecrementTemp)
    }

    /// Steps the fan speed.
    pub fn toggle_fan(&self) -> bool {
        self.apply(Action::ToggleFan)
    }

    /// Steps the louver position.
    pub fn toggle_swing(&self) -> bool {
        self.apply(Action::ToggleSwing)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FanSpeed, PowerState, Swing, Temperature};

    fn running_at(temp: u8) -> Store {
        Store::with_state(
            DeviceState::new()
                .with_power(PowerState::On)
                .with_temp(Temperature::new(temp).unwrap()),
            Capabilities::default(),
        )
    }

    #[test]
    fn replace_overwrites_every_field() {
        let store = Store::default();
        let state = DeviceState::new()
            .with_power(PowerState::On)
            .with_mode(Mode::Heat)
            .with_temp(Temperature::new(18).unwrap())
            .with_fan(FanSpeed::F4)
            .with_swing(Swing::P2);

        store.replace(state);
        assert_eq!(store.snapshot(), state);
    }

    #[test]
    fn enable_cool_mode_from_off() {
        let store = Store::default();
        assert!(store.enable_cool_mode());

        let state = store.snapshot();
        assert_eq!(state.power(), PowerState::On);
        assert_eq!(state.mode(), Mode::Cool);
        assert_eq!(state.temp().value(), 25);
    }

    #[test]
    fn increment_to_upper_bound() {
        let store = running_at(29);
        assert!(store.increment_temp());
        assert_eq!(store.snapshot().temp().value(), 30);
        assert!(!store.increment_temp());
        assert_eq!(store.snapshot().temp().value(), 30);
    }

    #[test]
    fn decrement_at_lower_bound() {
        let store = running_at(16);
        assert!(!store.decrement_temp());
        assert_eq!(store.snapshot().temp().value(), 16);
    }

    #[test]
    fn mutations_rejected_while_off() {
        let store = Store::default();
        let before = store.snapshot();

        assert!(!store.increment_temp());
        assert!(!store.decrement_temp());
        assert!(!store.toggle_fan());
        assert!(!store.toggle_swing());
        assert!(!store.power_off());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn toggle_fan_six_times_wraps() {
        let store = running_at(25);
        for _ in 0..6 {
            assert!(store.toggle_fan());
        }
        assert_eq!(store.snapshot().fan(), FanSpeed::Auto);
    }

    #[test]
    fn toggle_swing_six_times_wraps() {
        let store = running_at(25);
        for _ in 0..6 {
            assert!(store.toggle_swing());
        }
        assert_eq!(store.snapshot().swing(), Swing::Auto);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::default();
        let view = store.clone();
        store.enable_heat_mode();
        assert_eq!(view.snapshot().mode(), Mode::Heat);
    }

    #[test]
    fn subscribers_see_only_accepted_changes() {
        let store = Store::default();
        let mut rx = store.subscribe();

        assert!(!store.increment_temp());
        assert!(!rx.has_changed().unwrap());

        assert!(store.enable_dry_mode());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().mode(), Mode::Dry);
    }
}
