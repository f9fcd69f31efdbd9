// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports for reaching the air conditioner's state endpoint.
//!
//! The sync controller only needs two calls: read the device's state and
//! write the full commanded state. [`Transport`] captures exactly that, so the
//! controller can be driven by [`HttpTransport`] in production and by an
//! in-memory double in tests.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use std::future::Future;

use crate::error::Error;
use crate::state::DeviceState;

/// Path of the state endpoint on the server.
pub const STATE_PATH: &str = "/api/aircon/state";

/// Trait for transports that exchange [`DeviceState`] with the device.
///
/// Returned futures are `Send` so the sync controller can run them on spawned
/// tasks.
pub trait Transport: Send + Sync + 'static {
    /// Reads the state the device currently holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, or the body is not a valid state.
    fn fetch_state(&self) -> impl Future<Output = Result<DeviceState, Error>> + Send;

    /// Sends the full commanded state to the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint answers with a
    /// non-success status.
    fn push_state(&self, state: &DeviceState) -> impl Future<Output = Result<(), Error>> + Send;
}
