// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! [`DeviceState`] is the commanded state of the unit, [`Action`] the pure
//! transitions the remote's buttons trigger, and [`Store`] the owned container
//! that applies them and notifies observers.
//!
//! # Examples
//!
//! ```
//! use aircon_remote::state::{Action, Store};
//! use aircon_remote::types::Mode;
//!
//! let store = Store::default();
//! assert!(store.apply(Action::SelectMode(Mode::Cool)));
//! assert!(store.apply(Action::ToggleFan));
//! assert!(store.snapshot().is_on());
//! ```

mod action;
mod device_state;
mod store;

pub use action::{Action, SyncPolicy};
pub use device_state::DeviceState;
pub use store::Store;
