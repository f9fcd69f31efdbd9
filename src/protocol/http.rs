// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the state endpoint.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{STATE_PATH, Transport};
use crate::state::DeviceState;

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for reaching the state endpoint over HTTP.
///
/// # Examples
///
/// ```
/// use aircon_remote::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.20:8080")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(
///     config.endpoint_url(),
///     "http://192.168.1.20:8080/api/aircon/state"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    path: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the server at `base_url`.
    ///
    /// A bare host (`"host:port"`) is given the `http://` scheme.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: STATE_PATH.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the endpoint path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL as given.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the full endpoint URL.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let base = if base.starts_with("http://") || base.starts_with("https://") {
            base.to_string()
        } else {
            format!("http://{base}")
        };

        if self.path.starts_with('/') {
            format!("{base}{}", self.path)
        } else {
            format!("{base}/{}", self.path)
        }
    }

    /// Creates an [`HttpTransport`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or the HTTP client cannot be
    /// created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        if self.base_url.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "base URL is required".to_string(),
            ));
        }

        let url = self.endpoint_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpTransport { url, client })
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// HTTP client for the state endpoint.
///
/// `GET` reads the device state, `POST` with a JSON body writes it.
///
/// # Examples
///
/// ```no_run
/// use aircon_remote::protocol::{HttpTransport, Transport};
///
/// # async fn example() -> aircon_remote::Result<()> {
/// let transport = HttpTransport::new("192.168.1.20:8080")?;
/// let state = transport.fetch_state().await?;
/// transport.push_state(&state).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    url: String,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the server at `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or the HTTP client cannot be
    /// created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(base_url).into_transport()
    }

    /// Returns the full endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Turns a non-success status into an error.
fn check_status(response: &Response) -> Result<(), ProtocolError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(ProtocolError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

impl Transport for HttpTransport {
    async fn fetch_state(&self) -> Result<DeviceState, Error> {
        tracing::debug!(url = %self.url, "Fetching aircon state");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;
        check_status(&response)?;

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received aircon state");

        let state = serde_json::from_str(&body).map_err(ParseError::Json)?;
        Ok(state)
    }

    async fn push_state(&self, state: &DeviceState) -> Result<(), Error> {
        tracing::debug!(url = %self.url, state = ?state, "Pushing aircon state");

        let response = self
            .client
            .post(&self.url)
            .json(state)
            .send()
            .await
            .map_err(ProtocolError::Http)?;
        check_status(&response)?;

        Ok(())
    }
}
