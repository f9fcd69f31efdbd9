// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the air conditioner state.
//!
//! Each type only admits values the unit understands and carries the wire
//! spelling used by the state endpoint.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off
//! - [`Mode`] - Cool/Dry/Heat
//! - [`Temperature`] - Target temperature (16-30 °C)
//! - [`FanSpeed`] - Auto or speed 1-5, cycled by the fan button
//! - [`Swing`] - Auto or louver position 1-5, cycled by the swing button

mod fan;
mod mode;
mod power;
mod swing;
mod temperature;

pub use fan::FanSpeed;
pub use mode::Mode;
pub use power::PowerState;
pub use swing::Swing;
pub use temperature::Temperature;
