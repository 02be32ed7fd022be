// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.

pub mod button;

pub use button::raised as button_raised;
