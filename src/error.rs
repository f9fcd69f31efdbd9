// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the aircon remote.
//!
//! Mutations on the state store never fail; they report rejection through a
//! `bool`. Errors only arise while building values from untrusted input and
//! while talking to the state endpoint.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the state endpoint.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a response body.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid operating mode string was provided.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// An invalid fan speed string was provided.
    #[error("invalid fan speed: {0}")]
    InvalidFanSpeed(String),

    /// An invalid swing position string was provided.
    #[error("invalid swing position: {0}")]
    InvalidSwing(String),
}

/// Errors related to HTTP communication with the state endpoint.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a response was received.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding endpoint responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding failed (bad syntax, missing field or invalid value).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
