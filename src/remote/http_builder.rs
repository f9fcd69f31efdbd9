// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP remote builder.

use std::time::Duration;

use crate::capabilities::Capabilities;
use crate::config::RemoteConfig;
use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};
use crate::remote::Remote;

/// Builder for HTTP-backed remotes.
///
/// Created through [`Remote::http`] or [`Remote::http_config`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use aircon_remote::{Capabilities, Remote};
///
/// # async fn example() -> aircon_remote::Result<()> {
/// // Fetches the device state before returning
/// let remote = Remote::http("192.168.1.20:8080")
///     .with_debounce(Duration::from_millis(400))
///     .build()
///     .await?;
///
/// // No network access until the first action
/// let offline = Remote::http("192.168.1.20:8080")
///     .with_capabilities(Capabilities::basic())
///     .build_without_sync()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpRemoteBuilder {
    http: HttpConfig,
    config: RemoteConfig,
}

impl HttpRemoteBuilder {
    pub(crate) fn new(http: HttpConfig) -> Self {
        Self {
            http,
            config: RemoteConfig::default(),
        }
    }

    /// Overrides the endpoint path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.http = self.http.with_path(path);
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    /// Sets the debounce period.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.config = self.config.with_debounce(debounce);
        self
    }

    /// Sets the optional controls of the unit.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.config = self.config.with_capabilities(capabilities);
        self
    }

    /// Replaces the whole transport-independent configuration.
    #[must_use]
    pub fn with_config(mut self, config: RemoteConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn http_config(&self) -> &HttpConfig {
        &self.http
    }

    /// Returns the remote configuration.
    #[must_use]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Builds the remote and reads the device's current state.
    ///
    /// A failed read is logged and leaves the remote at its default state;
    /// it does not fail the build.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub async fn build(self) -> Result<Remote<HttpTransport>, Error> {
        let remote = self.build_without_sync()?;
        remote.initial_sync().await;
        Ok(remote)
    }

    /// Builds the remote without contacting the device.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build_without_sync(self) -> Result<Remote<HttpTransport>, Error> {
        let transport = self.http.into_transport().map_err(Error::Protocol)?;
        Ok(Remote::new(transport, self.config))
    }
}
