// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport-independent remote configuration.

use std::time::Duration;

use crate::capabilities::Capabilities;

/// Settings shared by every [`Remote`](crate::Remote), whatever its transport.
///
/// # Examples
///
/// ```
/// use aircon_remote::{Capabilities, RemoteConfig};
/// use std::time::Duration;
///
/// let config = RemoteConfig::new()
///     .with_debounce(Duration::from_millis(400))
///     .with_capabilities(Capabilities::basic());
///
/// assert_eq!(config.debounce(), Duration::from_millis(400));
/// assert!(!config.capabilities().supports_fan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteConfig {
    debounce: Duration,
    capabilities: Capabilities,
}

impl RemoteConfig {
    /// Quiet period before a burst of repeated actions is pushed.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debounce: Self::DEFAULT_DEBOUNCE,
            capabilities: Capabilities::full(),
        }
    }

    /// Sets the debounce period.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the optional controls of the unit.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns the debounce period.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Returns the optional controls of the unit.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::new()
    }
}
