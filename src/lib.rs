// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aircon Remote - a remote control for an air conditioner exposed through a
//! REST state endpoint.
//!
//! The crate keeps the commanded state of the unit in memory, validates every
//! button press against it, and mirrors the result to the device:
//!
//! - **Power and mode** buttons are pushed immediately.
//! - **Temperature, fan and swing** buttons are debounced, so a burst of
//!   presses produces one request carrying the final state.
//! - On startup the device's current state replaces the local defaults.
//!
//! The state endpoint is `GET`/`POST /api/aircon/state` with a JSON body such
//! as `{"power":"on","mode":"cool","temp":25,"fan":"auto","direction":"auto"}`.
//!
//! # Quick Start
//!
//! ```no_run
//! use aircon_remote::Remote;
//!
//! #[tokio::main]
//! async fn main() -> aircon_remote::Result<()> {
//!     let remote = Remote::http("192.168.1.20:8080").build().await?;
//!
//!     remote.enable_cool_mode();
//!     remote.decrement_temp();
//!     remote.toggle_fan();
//!
//!     println!("now at {}", remote.state().temp());
//!     remote.flush().await;
//!     Ok(())
//! }
//! ```
//!
//! # Observing State
//!
//! A view layer subscribes to the store and re-renders on every accepted
//! change:
//!
//! ```no_run
//! # async fn example(remote: aircon_remote::Remote<aircon_remote::protocol::HttpTransport>) {
//! let mut rx = remote.subscribe();
//! while rx.changed().await.is_ok() {
//!     let state = *rx.borrow_and_update();
//!     println!("{} {} {}", state.power(), state.mode(), state.temp());
//! }
//! # }
//! ```
//!
//! # Pure Transitions
//!
//! The rules behind each button are available without any I/O:
//!
//! ```
//! use aircon_remote::Capabilities;
//! use aircon_remote::state::{Action, DeviceState, SyncPolicy};
//!
//! let state = DeviceState::default();
//! assert!(Action::IncrementTemp.apply(&state, &Capabilities::default()).is_none());
//! assert_eq!(Action::ToggleFan.sync_policy(), SyncPolicy::Debounced);
//! ```

mod capabilities;
mod config;
pub mod error;
pub mod protocol;
mod remote;
pub mod state;
pub mod sync;
pub mod types;

pub use capabilities::Capabilities;
pub use config::RemoteConfig;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::{STATE_PATH, Transport};
#[cfg(feature = "http")]
pub use remote::HttpRemoteBuilder;
pub use remote::Remote;
pub use state::{Action, DeviceState, Store, SyncPolicy};
pub use sync::SyncController;
pub use types::{FanSpeed, Mode, PowerState, Swing, Temperature};
