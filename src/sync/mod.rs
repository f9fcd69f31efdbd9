// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Synchronization of the local state with the device.
//!
//! The [`SyncController`] keeps the device converged with a [`Store`]
//! without flooding the network:
//!
//! - **Initial sync** reads the device's state once and overwrites the store.
//! - **Immediate push** sends the full state right away. Used for discrete
//!   commands (power off, mode selection).
//! - **Debounced push** waits for a quiet period. Each new request restarts
//!   the timer, so a burst of temperature or toggle presses produces a single
//!   request carrying the final state.
//!
//! Network failures are logged and otherwise ignored: no retry, no rollback.
//!
//! [`Store`]: crate::state::Store

mod controller;

pub use controller::SyncController;
