// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level remote control.
//!
//! A [`Remote`] is what a view layer is handed: one [`Store`] plus one
//! [`SyncController`], wired so that each accepted button press reaches the
//! device according to its [`SyncPolicy`].
//!
//! ```no_run
//! use aircon_remote::Remote;
//!
//! # async fn example() -> aircon_remote::Result<()> {
//! let remote = Remote::http("192.168.1.20:8080").build().await?;
//!
//! remote.enable_cool_mode(); // pushed right away
//! remote.increment_temp(); // pushed after the debounce period
//! remote.increment_temp();
//!
//! // Make sure every change has reached the device before exiting
//! remote.flush().await;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpRemoteBuilder;

use tokio::sync::watch;

use crate::config::RemoteConfig;
use crate::protocol::Transport;
use crate::state::{Action, DeviceState, Store, SyncPolicy};
use crate::sync::SyncController;
use crate::types::Mode;

#[cfg(feature = "http")]
use crate::protocol::HttpConfig;

/// An air conditioner remote bound to a transport.
///
/// All mutation methods return `true` when the action was accepted. Rejected
/// actions change nothing and send nothing.
///
/// Methods that push spawn Tokio tasks and must be called from within a Tokio
/// runtime.
#[derive(Debug)]
pub struct Remote<T: Transport> {
    store: Store,
    sync: SyncController<T>,
}

#[cfg(feature = "http")]
impl Remote<crate::protocol::HttpTransport> {
    /// Starts building a remote for the server at `base_url`.
    #[must_use]
    pub fn http(base_url: impl Into<String>) -> HttpRemoteBuilder {
        HttpRemoteBuilder::new(HttpConfig::new(base_url))
    }

    /// Starts building a remote from a full HTTP configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpRemoteBuilder {
        HttpRemoteBuilder::new(config)
    }
}

impl<T: Transport> Remote<T> {
    /// Creates a remote with default state. No network access happens until
    /// [`initial_sync`](Self::initial_sync) or an action is dispatched.
    #[must_use]
    pub fn new(transport: T, config: RemoteConfig) -> Self {
        let store = Store::new(config.capabilities());
        let sync = SyncController::new(transport, store.clone(), config.debounce());
        Self { store, sync }
    }

    /// Reads the device's state into the store. Returns `true` on success;
    /// on failure the store keeps its current state.
    pub async fn initial_sync(&self) -> bool {
        self.sync.initial_sync().await
    }

    /// Applies `action` and, if accepted, pushes according to its policy.
    pub fn dispatch(&self, action: Action) -> bool {
        if !self.store.apply(action) {
            tracing::debug!(%action, "Action rejected");
            return false;
        }

        match action.sync_policy() {
            SyncPolicy::Immediate => self.sync.push_immediate(),
            SyncPolicy::Debounced => self.sync.schedule_debounced(),
        }
        true
    }

    /// Turns the unit off. Returns `false` if it was already off.
    pub fn power_off(&self) -> bool {
        self.dispatch(Action::PowerOff)
    }

    /// Turns the unit on in cooling mode.
    pub fn enable_cool_mode(&self) -> bool {
        self.dispatch(Action::SelectMode(Mode::Cool))
    }

    /// Turns the unit on in dry mode.
    pub fn enable_dry_mode(&self) -> bool {
        self.dispatch(Action::SelectMode(Mode::Dry))
    }

    /// Turns the unit on in heating mode.
    pub fn enable_heat_mode(&self) -> bool {
        self.dispatch(Action::SelectMode(Mode::Heat))
    }

    /// Raises the target temperature by one degree.
    pub fn increment_temp(&self) -> bool {
        self.dispatch(Action::IncrementTemp)
    }

    /// Lowers the target temperature by one degree.
    pub fn decrement_temp(&self) -> bool {
        self.dispatch(Action::DecrementTemp)
    }

    /// Steps the fan speed.
    pub fn toggle_fan(&self) -> bool {
        self.dispatch(Action::ToggleFan)
    }

    /// Steps the louver position.
    pub fn toggle_swing(&self) -> bool {
        self.dispatch(Action::ToggleSwing)
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.store.snapshot()
    }

    /// Returns a receiver notified on every accepted change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DeviceState> {
        self.store.subscribe()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the sync controller.
    #[must_use]
    pub fn sync(&self) -> &SyncController<T> {
        &self.sync
    }

    /// Returns `true` while a debounced push is waiting.
    #[must_use]
    pub fn is_sync_pending(&self) -> bool {
        self.sync.is_pending()
    }

    /// Pushes a waiting debounced change now and waits for every push
    /// already requested to complete.
    pub async fn flush(&self) -> bool {
        self.sync.flush().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::*;
    use crate::Capabilities;
    use crate::error::Error;
    use crate::types::PowerState;

    #[derive(Debug, Default)]
    struct Recorder {
        pushes: Mutex<Vec<DeviceState>>,
    }

    impl Transport for Recorder {
        async fn fetch_state(&self) -> Result<DeviceState, Error> {
            Ok(DeviceState::default())
        }

        async fn push_state(&self, state: &DeviceState) -> Result<(), Error> {
            self.pushes.lock().push(*state);
            Ok(())
        }
    }

    fn pushes(remote: &Remote<Recorder>) -> Vec<DeviceState> {
        remote.sync().transport().pushes.lock().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn mode_select_pushes_immediately() {
        let remote = Remote::new(Recorder::default(), RemoteConfig::default());
        assert!(remote.enable_cool_mode());
        assert!(!remote.is_sync_pending());

        tokio::time::sleep(Duration::from_millis(1)).await;
        let pushes = pushes(&remote);
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].power(), PowerState::On);
        assert_eq!(pushes[0].mode(), Mode::Cool);
    }

    #[tokio::test(start_paused = true)]
    async fn temp_change_is_debounced() {
        let remote = Remote::new(Recorder::default(), RemoteConfig::default());
        remote.enable_heat_mode();
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert!(remote.increment_temp());
        assert!(remote.is_sync_pending());
        assert_eq!(pushes(&remote).len(), 1);

        tokio::time::sleep(RemoteConfig::DEFAULT_DEBOUNCE + Duration::from_millis(10)).await;
        assert_eq!(pushes(&remote).len(), 2);
        assert_eq!(pushes(&remote)[1].temp().value(), 26);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_action_sends_nothing() {
        let remote = Remote::new(Recorder::default(), RemoteConfig::default());
        assert!(!remote.power_off());
        assert!(!remote.increment_temp());
        assert!(!remote.is_sync_pending());

        tokio::time::sleep(RemoteConfig::DEFAULT_DEBOUNCE * 2).await;
        assert!(pushes(&remote).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unsupported_toggle_is_rejected() {
        let config = RemoteConfig::new().with_capabilities(Capabilities::basic());
        let remote = Remote::new(Recorder::default(), config);
        remote.enable_dry_mode();

        assert!(!remote.toggle_fan());
        assert!(!remote.toggle_swing());
        assert!(!remote.is_sync_pending());
    }

    #[tokio::test]
    async fn subscribers_follow_dispatch() {
        let remote = Remote::new(Recorder::default(), RemoteConfig::default());
        let mut rx = remote.subscribe();

        remote.enable_dry_mode();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().mode(), Mode::Dry);
    }
}
